// ==========================================
// 献血管理系统 - 门户客户端配置
// ==========================================
// 存储: JSON 文件（缺失字段取默认值）
// 覆写: 环境变量 BLOOD_PORTAL_BASE_URL / BLOOD_PORTAL_LOCALE
// ==========================================

use crate::config::error::{ConfigError, ConfigResult};
use crate::domain::donor::{EligibilityRules, MAX_DONATION_INTERVAL_DAYS};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const ENV_BASE_URL: &str = "BLOOD_PORTAL_BASE_URL";
pub const ENV_LOCALE: &str = "BLOOD_PORTAL_LOCALE";

// ==========================================
// PortalConfig - 客户端配置
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortalConfig {
    /// 服务端根地址（不含末尾斜杠）
    pub base_url: String,
    /// 页面 meta 中的 CSRF token
    pub csrf_token: Option<String>,
    /// 提示语言（"en" 或 "zh-CN"）
    pub locale: String,
    /// 单次请求超时（秒）
    pub request_timeout_secs: u64,
    /// 是否使用系统代理（HTTP_PROXY 等环境变量）
    pub use_system_proxy: bool,
    /// 提示框自动关闭延迟（秒）
    pub alert_dismiss_secs: u64,
    /// 资格判定阈值
    pub eligibility: EligibilityRules,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000".to_string(),
            csrf_token: None,
            locale: "en".to_string(),
            request_timeout_secs: 10,
            use_system_proxy: true,
            alert_dismiss_secs: 5,
            eligibility: EligibilityRules::default(),
        }
    }
}

impl PortalConfig {
    /// 从 JSON 文件加载配置
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config: PortalConfig = serde_json::from_str(&raw)?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "门户配置已加载");
        Ok(config)
    }

    /// 文件不存在时使用默认配置；格式错误仍返回错误
    pub fn load_or_default(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::info!(path = %path.display(), "配置文件不存在，使用默认配置");
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// 默认配置文件路径: <用户配置目录>/blood-donation-portal/config.json
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("blood-donation-portal")
            .join("config.json")
    }

    /// 应用环境变量覆写
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(base_url) = std::env::var(ENV_BASE_URL) {
            if !base_url.trim().is_empty() {
                self.base_url = base_url;
            }
        }
        if let Ok(locale) = std::env::var(ENV_LOCALE) {
            if !locale.trim().is_empty() {
                self.locale = locale;
            }
        }
        self
    }

    /// 去掉末尾斜杠的根地址
    pub fn normalized_base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn alert_dismiss_delay(&self) -> Duration {
        Duration::from_secs(self.alert_dismiss_secs)
    }

    fn validate(&self) -> ConfigResult<()> {
        if self.base_url.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "base_url".to_string(),
                value: self.base_url.clone(),
                message: "不能为空".to_string(),
            });
        }
        if self.eligibility.min_weight_kg.is_nan() {
            return Err(ConfigError::InvalidValue {
                key: "eligibility.min_weight_kg".to_string(),
                value: "NaN".to_string(),
                message: "必须为数值".to_string(),
            });
        }
        if !EligibilityRules::is_valid_interval(self.eligibility.donation_interval_days) {
            return Err(ConfigError::InvalidValue {
                key: "eligibility.donation_interval_days".to_string(),
                value: self.eligibility.donation_interval_days.to_string(),
                message: format!("超出范围 0..={}", MAX_DONATION_INTERVAL_DAYS),
            });
        }
        Ok(())
    }
}
