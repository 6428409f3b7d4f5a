//! 登录自启动管理。
//!
//! - macOS: `~/Library/LaunchAgents/com.yueli.calendar.plist`
//! - 其他平台: no-op（warning 日志）

/// 应用标识
const APP_LABEL: &str = "com.yueli.calendar";

/// 启用自启动
pub fn enable_autostart() -> Result<(), String> {
    #[cfg(target_os = "macos")]
    {
        macos::enable()
    }

    #[cfg(not(target_os = "macos"))]
    {
        tracing::warn!("自启动: 当前平台不支持");
        Ok(())
    }
}

/// 停用自启动
pub fn disable_autostart() -> Result<(), String> {
    #[cfg(target_os = "macos")]
    {
        macos::disable()
    }

    #[cfg(not(target_os = "macos"))]
    {
        tracing::warn!("停用自启动: 当前平台不支持");
        Ok(())
    }
}

/// 查询自启动状态
pub fn is_autostart_enabled() -> Result<bool, String> {
    #[cfg(target_os = "macos")]
    {
        macos::is_enabled()
    }

    #[cfg(not(target_os = "macos"))]
    {
        tracing::warn!("查询自启动: 当前平台不支持");
        Ok(false)
    }
}

// ── macOS LaunchAgent 实现 ──

#[cfg(target_os = "macos")]
mod macos {
    use super::APP_LABEL;
    use std::fs;
    use std::path::PathBuf;
    use std::process::Command;

    /// LaunchAgents 目录下的 plist 路径
    pub fn plist_path() -> Result<PathBuf, String> {
        let home = std::env::var("HOME").map_err(|_| "缺少 HOME 环境变量".to_string())?;
        Ok(PathBuf::from(home)
            .join("Library")
            .join("LaunchAgents")
            .join(format!("{APP_LABEL}.plist")))
    }

    /// 当前二进制路径
    fn binary_path() -> Result<String, String> {
        std::env::current_exe()
            .map(|p| p.to_string_lossy().to_string())
            .map_err(|e| format!("二进制路径获取失败: {e}"))
    }

    /// 生成 plist XML
    pub fn generate_plist(program_path: &str) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE plist PUBLIC "-//Apple//DTD PLIST 1.0//EN" "http://www.apple.com/DTDs/PropertyList-1.0.dtd">
<plist version="1.0">
<dict>
    <key>Label</key>
    <string>{APP_LABEL}</string>
    <key>ProgramArguments</key>
    <array>
        <string>{program_path}</string>
    </array>
    <key>RunAtLoad</key>
    <true/>
    <key>KeepAlive</key>
    <false/>
    <key>StandardOutPath</key>
    <string>/tmp/yueli.out.log</string>
    <key>StandardErrorPath</key>
    <string>/tmp/yueli.err.log</string>
</dict>
</plist>
"#
        )
    }

    pub fn enable() -> Result<(), String> {
        let path = plist_path()?;
        let bin = binary_path()?;
        let plist_content = generate_plist(&bin);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| format!("创建 LaunchAgents 目录失败: {e}"))?;
        }

        fs::write(&path, plist_content).map_err(|e| format!("写入 plist 失败: {e}"))?;

        Command::new("launchctl")
            .args(["load", &path.to_string_lossy()])
            .output()
            .map_err(|e| format!("launchctl load 失败: {e}"))?;

        Ok(())
    }

    pub fn disable() -> Result<(), String> {
        let path = plist_path()?;

        if path.exists() {
            let _ = Command::new("launchctl")
                .args(["unload", &path.to_string_lossy()])
                .output();

            fs::remove_file(&path).map_err(|e| format!("删除 plist 失败: {e}"))?;
        }

        Ok(())
    }

    pub fn is_enabled() -> Result<bool, String> {
        let path = plist_path()?;
        Ok(path.exists())
    }

}
