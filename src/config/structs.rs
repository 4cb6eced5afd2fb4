use serde::{Deserialize, Serialize};
use url::Url;

use crate::errors::{Result, SnaplinkError};
use crate::models::ExpiryOption;

/// Default backend address of the shortening service
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// 环境变量前缀，例如 SNAPLINK__BACKEND__BASE_URL
pub const ENV_PREFIX: &str = "SNAPLINK";

/// 默认配置文件路径
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 静态配置（从 TOML 加载，启动时使用）
///
/// - backend: 后端服务地址与超时
/// - ui: 默认过期天数、提示持续时间等展示参数
/// - logging: 日志配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StaticConfig {
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl StaticConfig {
    /// 从 TOML 文件和环境变量加载配置
    ///
    /// 优先级：ENV > config file > 默认值
    /// An explicitly given path must exist; the default `config.toml` is optional.
    pub fn load(path: Option<&str>) -> Result<Self> {
        use config::{Config, Environment, File};

        let (file, required) = match path {
            Some(p) => (p, true),
            None => (DEFAULT_CONFIG_PATH, false),
        };

        let settings = Config::builder()
            .add_source(File::with_name(file).required(required))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| SnaplinkError::config(format!("Failed to build config: {}", e)))?;

        let config = settings
            .try_deserialize::<StaticConfig>()
            .map_err(|e| SnaplinkError::config(format!("Failed to deserialize config: {}", e)))?;

        if std::path::Path::new(file).exists() {
            eprintln!("[INFO] Configuration loaded from: {}", file);
        }

        Ok(config)
    }

    /// Clean up values that have an obvious canonical form
    pub fn normalize(&mut self) {
        let trimmed = self.backend.base_url.trim().trim_end_matches('/');
        self.backend.base_url = trimmed.to_string();
    }

    /// Reject configurations the client cannot work with
    pub fn validate(&self) -> Result<()> {
        let parsed = Url::parse(&self.backend.base_url).map_err(|e| {
            SnaplinkError::config(format!(
                "Invalid backend.base_url '{}': {}",
                self.backend.base_url, e
            ))
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(SnaplinkError::config(format!(
                "backend.base_url must use http or https, got '{}'",
                parsed.scheme()
            )));
        }
        if ExpiryOption::from_days(self.ui.default_expiry_days).is_none() {
            return Err(SnaplinkError::config(format!(
                "ui.default_expiry_days must be one of {}, got {}",
                ExpiryOption::allowed_values(),
                self.ui.default_expiry_days
            )));
        }
        if self.backend.timeout_secs == Some(0) {
            return Err(SnaplinkError::config(
                "backend.timeout_secs must be greater than zero",
            ));
        }
        Ok(())
    }

    /// The expiry preselected in the shorten form
    pub fn default_expiry(&self) -> ExpiryOption {
        ExpiryOption::from_days(self.ui.default_expiry_days).unwrap_or_default()
    }

    /// 保存配置到 TOML 文件
    pub fn save_to_file<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)?;

        if let Some(parent) = path.as_ref().parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }
}

/// 后端服务配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Base address, e.g. `http://localhost:8000`
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Whole-request timeout; `None` leaves it to the transport defaults
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

/// 界面展示配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_expiry_days")]
    pub default_expiry_days: u32,
    /// Links with this many days left or fewer are highlighted
    #[serde(default = "default_expiring_soon_days")]
    pub expiring_soon_days: i64,
    /// How long a TUI notification stays on screen
    #[serde(default = "default_toast_millis")]
    pub toast_millis: u64,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
    #[serde(default)]
    pub file: Option<String>,
    #[serde(default = "default_max_backups")]
    pub max_backups: u32,
    #[serde(default)]
    pub enable_rotation: bool,
}

// ============================================================
// Default value functions
// ============================================================

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_expiry_days() -> u32 {
    ExpiryOption::default().days()
}

fn default_expiring_soon_days() -> i64 {
    3
}

fn default_toast_millis() -> u64 {
    3000
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

fn default_max_backups() -> u32 {
    5
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: None,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            default_expiry_days: default_expiry_days(),
            expiring_soon_days: default_expiring_soon_days(),
            toast_millis: default_toast_millis(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            file: None,
            max_backups: default_max_backups(),
            enable_rotation: false,
        }
    }
}
