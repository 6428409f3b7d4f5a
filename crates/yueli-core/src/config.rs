//! 应用配置结构体。
//!
//! 弹窗尺寸、滑动动画时长、滚轮阈值、托盘时钟、主题等
//! 运行时配置。通过 [`crate::config_manager::ConfigManager`] 从 JSON 文件加载/保存。

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// 顶层应用配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// 弹窗窗口设置
    #[serde(default)]
    pub window: WindowConfig,
    /// 日历行为设置
    #[serde(default)]
    pub calendar: CalendarConfig,
    /// 托盘设置
    #[serde(default)]
    pub tray: TrayConfig,
    /// 界面设置
    #[serde(default)]
    pub ui: UiConfig,
}

/// 弹窗窗口设置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    /// 窗口宽度（逻辑像素）
    #[serde(default = "default_window_width")]
    pub width: f32,
    /// 窗口高度（逻辑像素）
    #[serde(default = "default_window_height")]
    pub height: f32,
    /// 窗口与托盘图标之间的垂直间距
    #[serde(default = "default_tray_gap")]
    pub tray_gap: f32,
}

/// 日历行为设置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarConfig {
    /// 月份滑动动画时长（毫秒）
    #[serde(default = "default_slide_duration_ms")]
    pub slide_duration_ms: u64,
    /// 滚轮翻月的噪声阈值，|deltaY| 低于该值忽略
    #[serde(default = "default_wheel_threshold")]
    pub wheel_threshold: f32,
}

/// 托盘设置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrayConfig {
    /// 托盘标题是否显示日期时钟（仅 macOS 生效）
    #[serde(default = "default_true")]
    pub show_clock: bool,
}

/// 主题偏好
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    /// 浅色（默认）
    #[default]
    Light,
    /// 深色
    Dark,
}

/// 界面设置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UiConfig {
    /// 主题偏好
    #[serde(default)]
    pub theme: ThemePreference,
    /// 界面语言代码（"zh" / "en"），None 时跟随系统
    #[serde(default)]
    pub language: Option<String>,
}

fn default_window_width() -> f32 {
    380.0
}

fn default_window_height() -> f32 {
    520.0
}

fn default_tray_gap() -> f32 {
    4.0
}

fn default_slide_duration_ms() -> u64 {
    300
}

fn default_wheel_threshold() -> f32 {
    20.0
}

fn default_true() -> bool {
    true
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: default_window_width(),
            height: default_window_height(),
            tray_gap: default_tray_gap(),
        }
    }
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            slide_duration_ms: default_slide_duration_ms(),
            wheel_threshold: default_wheel_threshold(),
        }
    }
}

impl Default for TrayConfig {
    fn default() -> Self {
        Self { show_clock: true }
    }
}

impl AppConfig {
    /// 默认配置
    pub fn default_config() -> Self {
        Self {
            window: WindowConfig::default(),
            calendar: CalendarConfig::default(),
            tray: TrayConfig::default(),
            ui: UiConfig::default(),
        }
    }

    /// 滑动动画时长
    pub fn slide_duration(&self) -> Duration {
        Duration::from_millis(self.calendar.slide_duration_ms)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::default_config()
    }
}
