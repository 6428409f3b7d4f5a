//! # yueli-ui
//!
//! 纯 Rust UI crate。
//! iced 0.13 的日历弹窗、系统托盘（tray-icon）、主题与多语言。
//! 导航语义全部来自 `yueli-core`，这里只做渲染与输入接线。

pub mod app;
pub mod i18n;
pub mod theme;
pub mod tray;
pub mod views;

// 平台原生 API（激活策略/前置激活）

#[cfg(target_os = "macos")]
pub mod native_macos;

// 主应用再导出
pub use app::{CalendarApp, Message};
pub use i18n::{Locale, Strings};
pub use tray::{TrayEvent, TrayManager};
