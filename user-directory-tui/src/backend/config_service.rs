//! 配置服务
//!
//! 配置文件位于 `<config_dir>/user-directory-tui/config.json`：
//! - 文件不存在 → 使用默认值（并写出一份默认配置）
//! - 缺少字段 → 该字段取默认值
//! - 文件格式错误 → 启动失败
//!
//! 环境变量 `USER_DIRECTORY_BASE_URL` / `USER_DIRECTORY_TIMEOUT_SECS`
//! 覆盖文件中的对应字段。

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use user_directory_client::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};

use crate::i18n::Language;
use crate::view::theme::Theme;

/// 配置目录名
pub const APP_DIR_NAME: &str = "user-directory-tui";
const CONFIG_FILE_NAME: &str = "config.json";

const ENV_BASE_URL: &str = "USER_DIRECTORY_BASE_URL";
const ENV_TIMEOUT_SECS: &str = "USER_DIRECTORY_TIMEOUT_SECS";

/// 应用配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub base_url: String,
    pub timeout_secs: u64,
    pub theme: Theme,
    pub language: Language,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            theme: Theme::Dark,
            language: Language::EnUs,
        }
    }
}

impl AppConfig {
    /// 用 `lookup` 提供的环境变量覆盖配置
    pub fn apply_env_overrides(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<()> {
        if let Some(base_url) = lookup(ENV_BASE_URL).filter(|v| !v.trim().is_empty()) {
            self.base_url = base_url.trim().to_string();
        }
        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            self.timeout_secs = raw
                .trim()
                .parse()
                .with_context(|| format!("{ENV_TIMEOUT_SECS} must be a whole number of seconds, got {raw:?}"))?;
        }
        Ok(())
    }

    /// HTTP 客户端配置
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(self.base_url.clone()).with_timeout_secs(self.timeout_secs)
    }
}

/// 配置服务 trait
pub trait ConfigService: Send + Sync {
    /// 加载配置
    fn load(&self) -> Result<AppConfig>;

    /// 保存配置
    fn save(&self, config: &AppConfig) -> Result<()>;
}

/// 本地 JSON 文件配置服务
pub struct LocalConfigService {
    path: PathBuf,
}

impl LocalConfigService {
    /// 使用系统配置目录
    pub fn new() -> Result<Self> {
        let dir = dirs::config_dir().ok_or_else(|| anyhow!("Cannot determine the config directory"))?;
        Ok(Self::with_path(dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME)))
    }

    /// 使用指定的配置文件路径
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 配置文件是否已存在
    pub fn exists(&self) -> bool {
        self.path.exists()
    }
}

impl ConfigService for LocalConfigService {
    fn load(&self) -> Result<AppConfig> {
        if !self.path.exists() {
            log::info!("No config file at {}, using defaults", self.path.display());
            return Ok(AppConfig::default());
        }

        let raw = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("Malformed config file {}", self.path.display()))
    }

    fn save(&self, config: &AppConfig) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(config)?;
        fs::write(&self.path, json)
            .with_context(|| format!("Failed to write {}", self.path.display()))?;
        log::info!("Saved config to {}", self.path.display());
        Ok(())
    }
}
