//! # yueli-core
//!
//! 月历领域模型、端口（trait）定义、错误类型与核心逻辑。
//! 不依赖任何 GUI 或平台 API。
//!
//! ## 结构
//!
//! - [`models`] — 领域数据结构（serde Serialize/Deserialize）
//! - [`ports`] — 六边形架构端口接口（黄历数据源）
//! - [`resolver`] — 日期标注解析（纯函数）
//! - [`grid`] — 42 格月历网格构建
//! - [`navigation`] — 月份导航状态机
//! - [`error`] — 核心错误类型（thiserror）
//! - [`config`] — 应用配置结构体
//! - [`config_manager`] — 配置文件管理（加载/保存）

pub mod config;
pub mod config_manager;
pub mod error;
pub mod grid;
pub mod models;
pub mod navigation;
pub mod ports;
pub mod resolver;

#[cfg(test)]
mod tests {
    use crate::models::annotation::{Annotation, DayMark, HolidayStatus};
    use crate::models::cell::DayCell;

    #[test]
    fn day_cell_serde_roundtrip() {
        let cell = DayCell {
            date: chrono::NaiveDate::from_ymd_opt(2024, 2, 10).unwrap(),
            in_current_month: true,
            is_today: false,
            annotation: Annotation {
                mark: DayMark::LunarFestival("春节".to_string()),
                holiday_status: HolidayStatus::Holiday,
                holiday_name: "春节".to_string(),
            },
        };

        let json = serde_json::to_string(&cell).unwrap();
        let deserialized: DayCell = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized, cell);
        assert_eq!(deserialized.annotation.text(), "春节");
    }

    #[test]
    fn config_defaults() {
        let config = crate::config::AppConfig::default_config();
        assert_eq!(config.window.width, 380.0);
        assert_eq!(config.window.height, 520.0);
        assert_eq!(config.calendar.slide_duration_ms, 300);
        assert!(config.tray.show_clock);
    }
}
