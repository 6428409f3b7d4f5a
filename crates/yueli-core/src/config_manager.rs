//! 配置文件管理。
//!
//! 在平台配置目录下以 JSON 文件保存/加载配置。

use crate::config::AppConfig;
use crate::error::CoreError;
use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, RwLock};
use tracing::{debug, info};

/// 配置文件名
const CONFIG_FILE_NAME: &str = "config.json";

/// 应用目录名
const APP_DIR_NAME: &str = "yueli";

/// 配置管理器
///
/// 负责配置文件的加载/保存以及运行时的配置变更。
#[derive(Debug, Clone)]
pub struct ConfigManager {
    /// 当前配置（线程安全）
    config: Arc<RwLock<AppConfig>>,
    /// 配置文件路径
    config_path: PathBuf,
}

impl ConfigManager {
    /// 创建配置管理器并加载配置
    ///
    /// 配置文件不存在时生成默认配置并写入。
    pub fn new() -> Result<Self, CoreError> {
        let config_path = Self::default_config_path()?;
        Self::with_path(config_path)
    }

    /// 以指定路径创建配置管理器
    pub fn with_path(config_path: PathBuf) -> Result<Self, CoreError> {
        // 创建配置目录
        if let Some(parent) = config_path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| {
                    CoreError::Config(format!("创建配置目录失败: {}: {}", parent.display(), e))
                })?;
                info!("创建配置目录: {}", parent.display());
            }
        }

        // 加载配置文件，不存在则写入默认值
        let config = if config_path.exists() {
            Self::load_from_file(&config_path)?
        } else {
            let default_config = AppConfig::default_config();
            Self::save_to_file(&config_path, &default_config)?;
            info!("生成默认配置文件: {}", config_path.display());
            default_config
        };

        Ok(Self {
            config: Arc::new(RwLock::new(config)),
            config_path,
        })
    }

    /// 返回当前配置（克隆）
    pub fn get(&self) -> AppConfig {
        self.config.read().unwrap().clone()
    }

    /// 更新配置并写入文件
    pub fn update(&self, new_config: AppConfig) -> Result<(), CoreError> {
        {
            let mut config = self.config.write().unwrap();
            *config = new_config.clone();
        }

        Self::save_to_file(&self.config_path, &new_config)?;
        debug!("配置已保存: {}", self.config_path.display());

        Ok(())
    }

    /// 只更新部分字段
    pub fn update_with<F>(&self, updater: F) -> Result<AppConfig, CoreError>
    where
        F: FnOnce(&mut AppConfig),
    {
        let mut config = self.get();
        updater(&mut config);
        self.update(config.clone())?;
        Ok(config)
    }

    /// 配置文件路径
    pub fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    /// 重新加载配置文件
    pub fn reload(&self) -> Result<(), CoreError> {
        let config = Self::load_from_file(&self.config_path)?;
        let mut current = self.config.write().unwrap();
        *current = config;
        info!("配置已重新加载");
        Ok(())
    }

    /// 平台默认配置文件路径
    fn default_config_path() -> Result<PathBuf, CoreError> {
        let config_dir = Self::config_dir()?;
        Ok(config_dir.join(CONFIG_FILE_NAME))
    }

    /// 平台配置目录路径
    pub fn config_dir() -> Result<PathBuf, CoreError> {
        #[cfg(target_os = "macos")]
        {
            // macOS: ~/Library/Application Support/yueli/
            let home = std::env::var("HOME")
                .map_err(|_| CoreError::Config("找不到 HOME 环境变量".to_string()))?;
            Ok(PathBuf::from(home)
                .join("Library")
                .join("Application Support")
                .join(APP_DIR_NAME))
        }

        #[cfg(target_os = "windows")]
        {
            // Windows: %APPDATA%\yueli\
            let appdata = std::env::var("APPDATA")
                .map_err(|_| CoreError::Config("找不到 APPDATA 环境变量".to_string()))?;
            Ok(PathBuf::from(appdata).join(APP_DIR_NAME))
        }

        #[cfg(target_os = "linux")]
        {
            // Linux: ~/.config/yueli/
            let home = std::env::var("HOME")
                .map_err(|_| CoreError::Config("找不到 HOME 环境变量".to_string()))?;
            Ok(PathBuf::from(home).join(".config").join(APP_DIR_NAME))
        }

        #[cfg(not(any(target_os = "macos", target_os = "windows", target_os = "linux")))]
        {
            Ok(PathBuf::from(".").join(APP_DIR_NAME))
        }
    }

    /// 从文件加载配置
    fn load_from_file(path: &PathBuf) -> Result<AppConfig, CoreError> {
        let content = fs::read_to_string(path).map_err(|e| {
            CoreError::Config(format!("读取配置文件失败: {}: {}", path.display(), e))
        })?;

        let config: AppConfig = serde_json::from_str(&content).map_err(|e| {
            CoreError::Config(format!("解析配置文件失败: {}: {}", path.display(), e))
        })?;

        debug!("配置文件加载完成: {}", path.display());
        Ok(config)
    }

    /// 保存配置到文件
    fn save_to_file(path: &PathBuf, config: &AppConfig) -> Result<(), CoreError> {
        let content = serde_json::to_string_pretty(config)
            .map_err(|e| CoreError::Config(format!("配置序列化失败: {}", e)))?;

        fs::write(path, content).map_err(|e| {
            CoreError::Config(format!("保存配置文件失败: {}: {}", path.display(), e))
        })?;

        Ok(())
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new().expect("创建默认配置管理器失败")
    }
}
