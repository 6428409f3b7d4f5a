//! 系统托盘。
//!
//! tray-icon 实现的托盘图标 + 右键菜单。
//! macOS：必须在主线程初始化（muda 约束）；托盘标题可显示日期时钟。
//! 图标/菜单事件在独立线程轮询，经 mpsc 通道交给 GUI。

use std::sync::mpsc;
use tracing::{debug, info};

use crate::i18n::Strings;

/// 托盘图标在屏幕上的位置与尺寸（物理像素）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrayRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// 托盘事件（托盘 → GUI）
#[derive(Debug, Clone, PartialEq)]
pub enum TrayEvent {
    /// 左键点击图标：显示/隐藏弹窗，附带图标位置用于弹窗定位
    ToggleWindow(Option<TrayRect>),
    /// 菜单"今天"：跳到今天并显示弹窗
    GoToday,
    /// 菜单"退出"
    Quit,
}

/// 托盘图标数据（1×1 透明 PNG）
/// macOS 托盘只显示标题文字时仍需要一个有效图标
#[cfg(not(target_os = "linux"))]
const TRAY_ICON_DATA: &[u8] = include_bytes!("../assets/tray_icon.png");

/// 菜单项 ID（事件匹配用）
#[cfg(not(target_os = "linux"))]
struct MenuIds {
    today_id: tray_icon::menu::MenuId,
    toggle_id: tray_icon::menu::MenuId,
    quit_id: tray_icon::menu::MenuId,
}

/// 托盘管理器
///
/// macOS 上必须在主线程调用 `new()`。
/// 事件轮询在内部独立线程进行。
#[cfg(not(target_os = "linux"))]
pub struct TrayManager {
    /// 托盘图标（保存引用防止 Drop，同时用于更新标题）
    #[allow(dead_code)]
    tray_icon: tray_icon::TrayIcon,
}

#[cfg(not(target_os = "linux"))]
impl TrayManager {
    /// 创建托盘管理器（须在主线程调用）
    ///
    /// # Returns
    /// - `TrayManager` 实例
    /// - 事件接收通道（`mpsc::Receiver<TrayEvent>`）
    pub fn new(strings: &Strings) -> Result<(Self, mpsc::Receiver<TrayEvent>), String> {
        use tray_icon::{
            menu::{Menu, MenuEvent, MenuItem, PredefinedMenuItem},
            MouseButton, MouseButtonState, TrayIconBuilder, TrayIconEvent,
        };

        info!("初始化系统托盘（主线程）");

        // 菜单构建（主线程必须）
        let menu = Menu::new();

        let today_item = MenuItem::new(strings.menu_today, true, None);
        let toggle_item = MenuItem::new(strings.menu_toggle_window, true, None);
        let quit_item = MenuItem::new(strings.menu_quit, true, None);

        menu.append(&today_item).map_err(|e| e.to_string())?;
        menu.append(&toggle_item).map_err(|e| e.to_string())?;
        menu.append(&PredefinedMenuItem::separator())
            .map_err(|e| e.to_string())?;
        menu.append(&quit_item).map_err(|e| e.to_string())?;

        // 图标加载
        let icon = load_icon()?;

        // 托盘图标创建（主线程必须）
        // 左键不弹菜单：左键用于切换弹窗，菜单留给右键
        let tray_icon = TrayIconBuilder::new()
            .with_menu(Box::new(menu))
            .with_tooltip(strings.app_title)
            .with_icon(icon)
            .with_menu_on_left_click(false)
            .build()
            .map_err(|e| e.to_string())?;

        info!("系统托盘图标创建完成");

        let menu_ids = MenuIds {
            today_id: today_item.id().clone(),
            toggle_id: toggle_item.id().clone(),
            quit_id: quit_item.id().clone(),
        };

        // 事件通道
        let (event_tx, event_rx) = mpsc::channel();

        // 菜单事件轮询线程（MenuEvent::receiver 线程安全）
        let tx = event_tx.clone();
        std::thread::spawn(move || {
            let menu_event_rx = MenuEvent::receiver();

            loop {
                if let Ok(event) = menu_event_rx.recv() {
                    let tray_event = if event.id == menu_ids.today_id {
                        Some(TrayEvent::GoToday)
                    } else if event.id == menu_ids.toggle_id {
                        Some(TrayEvent::ToggleWindow(None))
                    } else if event.id == menu_ids.quit_id {
                        Some(TrayEvent::Quit)
                    } else {
                        None
                    };

                    if let Some(e) = tray_event {
                        debug!("托盘菜单事件: {:?}", e);
                        if tx.send(e).is_err() {
                            info!("托盘事件通道关闭，菜单轮询退出");
                            break;
                        }
                    }
                }
            }
        });

        // 图标点击轮询线程：左键抬起 → 切换弹窗
        let tx = event_tx;
        std::thread::spawn(move || {
            let icon_event_rx = TrayIconEvent::receiver();

            loop {
                if let Ok(event) = icon_event_rx.recv() {
                    if let TrayIconEvent::Click {
                        rect,
                        button: MouseButton::Left,
                        button_state: MouseButtonState::Up,
                        ..
                    } = event
                    {
                        let anchor = TrayRect {
                            x: rect.position.x as f64,
                            y: rect.position.y as f64,
                            width: rect.size.width as f64,
                            height: rect.size.height as f64,
                        };
                        debug!("托盘点击: {:?}", anchor);
                        if tx.send(TrayEvent::ToggleWindow(Some(anchor))).is_err() {
                            info!("托盘事件通道关闭，点击轮询退出");
                            break;
                        }
                    }
                }
            }
        });

        Ok((Self { tray_icon }, event_rx))
    }

    /// 更新托盘标题（仅 macOS 生效，显示日期时钟）
    pub fn set_title(&self, title: &str) {
        #[cfg(target_os = "macos")]
        self.tray_icon.set_title(Some(title));

        #[cfg(not(target_os = "macos"))]
        {
            let _ = title;
        }
    }
}

/// 解码内嵌 PNG 图标
#[cfg(not(target_os = "linux"))]
fn load_icon() -> Result<tray_icon::Icon, String> {
    use tray_icon::Icon;

    let image = image::load_from_memory(TRAY_ICON_DATA)
        .map_err(|e| format!("图标解码失败: {e}"))?
        .into_rgba8();

    let (width, height) = image.dimensions();
    let rgba = image.into_raw();

    Icon::from_rgba(rgba, width, height).map_err(|e| format!("图标创建失败: {e}"))
}

// ── Linux：桩实现（缺 appindicator 支持）──

#[cfg(target_os = "linux")]
pub struct TrayManager;

#[cfg(target_os = "linux")]
impl TrayManager {
    pub fn new(_strings: &Strings) -> Result<(Self, mpsc::Receiver<TrayEvent>), String> {
        let (_tx, rx) = mpsc::channel();
        info!("Linux: 不支持系统托盘（需要 appindicator）");
        Ok((Self, rx))
    }

    pub fn set_title(&self, _title: &str) {}
}
