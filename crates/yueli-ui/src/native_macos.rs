//! macOS 原生 API。
//!
//! NSApplication 的激活策略与前置激活。
//! 托盘应用不占 Dock：启动时切到 Accessory 策略，
//! 弹窗显示时把应用激活到前台。
//!
//! objc2-app-kit 实现（最新 Rust-ObjC 绑定）

use objc2::MainThreadMarker;
use objc2_app_kit::{NSApplication, NSApplicationActivationPolicy};
use tracing::{info, warn};

/// 获取 MainThreadMarker（GUI 应用在主线程调用）
fn get_mtm() -> Option<MainThreadMarker> {
    // iced 的 update() 在主线程执行，可安全获取
    MainThreadMarker::new()
}

/// 激活策略切到 Accessory（隐藏 Dock 图标）
///
/// 托盘常驻应用在进入事件循环前调用。
pub fn set_accessory_mode() {
    let Some(mtm) = get_mtm() else {
        warn!("macOS: 非主线程，切换激活策略失败");
        return;
    };

    let app = NSApplication::sharedApplication(mtm);
    app.setActivationPolicy(NSApplicationActivationPolicy::Accessory);
    info!("macOS: Accessory 模式（隐藏 Dock 图标）");
}

/// 把应用激活到前台
///
/// NSApplication.unhide() + activate，弹窗显示时调用。
#[allow(deprecated)]
pub fn activate_app() {
    let Some(mtm) = get_mtm() else {
        warn!("macOS: 非主线程，激活应用失败");
        return;
    };

    let app = NSApplication::sharedApplication(mtm);
    app.unhide(None);
    // activateIgnoringOtherApps 已弃用但仍可用
    app.activateIgnoringOtherApps(true);
}
