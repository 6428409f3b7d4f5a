//! # yueli-app
//!
//! 月历二进制入口。
//! CLI 解析、tracing 初始化、托盘引导（主线程）、iced 应用运行。

mod autostart;

use anyhow::{anyhow, Result};
use clap::Parser;
use iced::{window, Size, Task};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use yueli_almanac::TymeAlmanac;
use yueli_core::config_manager::ConfigManager;
use yueli_ui::{CalendarApp, Locale, Strings, TrayManager};

/// 菜单栏月历
///
/// 公历/农历对照、节气、节假日与调休角标
#[derive(Parser, Debug)]
#[command(name = "yueli")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// 日志级别 (trace, debug, info, warn, error)
    #[arg(long, short = 'l', default_value = "info")]
    log_level: String,

    /// 配置文件路径（默认：平台配置目录）
    #[arg(long, short = 'c')]
    config: Option<String>,

    /// 启用登录自启动
    #[arg(long)]
    enable_autostart: bool,

    /// 停用登录自启动
    #[arg(long)]
    disable_autostart: bool,

    /// 查询自启动状态
    #[arg(long)]
    autostart_status: bool,
}

/// 处理自启动命令（处理后返回 true，程序随即退出）
fn handle_autostart_commands(args: &Args) -> bool {
    if args.autostart_status {
        match autostart::is_autostart_enabled() {
            Ok(enabled) => {
                if enabled {
                    println!("✅ 自启动: 已启用");
                    println!("   登录时月历将自动启动。");
                } else {
                    println!("❌ 自启动: 未启用");
                    println!("   启用方式: yueli --enable-autostart");
                }
            }
            Err(e) => {
                eprintln!("⚠️  自启动状态查询失败: {e}");
            }
        }
        return true;
    }

    if args.enable_autostart {
        match autostart::enable_autostart() {
            Ok(()) => {
                println!("✅ 自启动已启用。");
                #[cfg(target_os = "macos")]
                println!("   位置: ~/Library/LaunchAgents/com.yueli.calendar.plist");
            }
            Err(e) => {
                eprintln!("❌ 自启动启用失败: {e}");
                std::process::exit(1);
            }
        }
        return true;
    }

    if args.disable_autostart {
        match autostart::disable_autostart() {
            Ok(()) => {
                println!("✅ 自启动已停用。");
            }
            Err(e) => {
                eprintln!("❌ 自启动停用失败: {e}");
                std::process::exit(1);
            }
        }
        return true;
    }

    false
}

fn main() -> Result<()> {
    let args = Args::parse();

    // 自启动命令（处理后立即退出）
    if handle_autostart_commands(&args) {
        return Ok(());
    }

    // tracing 初始化
    let log_filter = format!(
        "yueli={0},yueli_app={0},yueli_core={0},yueli_almanac={0},yueli_ui={0}",
        args.log_level
    );
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_filter)),
        )
        .init();

    info!("月历启动");

    // 配置加载（文件不存在时生成默认配置）
    let config_manager = match &args.config {
        Some(path) => ConfigManager::with_path(PathBuf::from(path)),
        None => ConfigManager::new(),
    }
    .map_err(|e| anyhow!("配置初始化失败: {e}"))?;
    info!("配置文件: {:?}", config_manager.config_path());

    let config = config_manager.get();

    // macOS: 托盘常驻应用，不占 Dock
    #[cfg(target_os = "macos")]
    yueli_ui::native_macos::set_accessory_mode();

    // 界面语言
    let locale = config
        .ui
        .language
        .as_deref()
        .and_then(Locale::from_code)
        .unwrap_or_else(Locale::detect_system);

    // 托盘初始化（macOS 必须在主线程）
    // 托盘与应用同寿命，句柄 leak 成 'static 交给 GUI 更新标题
    let tray = match TrayManager::new(Strings::for_locale(locale)) {
        Ok((manager, rx)) => {
            info!("系统托盘初始化完成");
            Some((&*Box::leak(Box::new(manager)), rx))
        }
        Err(e) => {
            warn!("系统托盘初始化失败: {e}");
            None
        }
    };

    // 黄历数据源（致命启动依赖：无数据源则无从渲染）
    let source = Arc::new(TymeAlmanac::new());

    let mut app = CalendarApp::new(source, config.clone()).with_locale(locale);
    if let Some((manager, rx)) = tray {
        app = app.with_tray(manager, rx);
    }

    // iced 应用：弹窗启动时隐藏，由托盘点击唤出
    let result = iced::application(CalendarApp::title, CalendarApp::update, CalendarApp::view)
        .theme(CalendarApp::theme)
        .subscription(CalendarApp::subscription)
        .exit_on_close_request(false)
        .window(window::Settings {
            size: Size::new(config.window.width, config.window.height),
            position: window::Position::Default,
            visible: false,
            resizable: false,
            decorations: false,
            transparent: true,
            level: window::Level::AlwaysOnTop,
            exit_on_close_request: false,
            ..window::Settings::default()
        })
        .run_with(move || (app, Task::none()));

    info!("月历退出");
    result.map_err(|e| anyhow!("GUI 运行错误: {e}"))
}
