// ==========================================
// 献血管理系统 - 配置管理器
// ==========================================
// 职责: 键值配置的加载、查询、覆写与快照
// 存储: 内存键值表，可从 JSON 文件或 PortalConfig 初始化
// ==========================================

use crate::config::eligibility_config_trait::EligibilityConfigReader;
use crate::config::error::{ConfigError, ConfigResult};
use crate::config::portal_config::PortalConfig;
use crate::domain::donor::{EligibilityRules, MAX_DONATION_INTERVAL_DAYS};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::{Arc, Mutex};

// ==========================================
// 配置键
// ==========================================
pub mod config_keys {
    pub const MIN_AGE: &str = "min_age";
    pub const MIN_WEIGHT_KG: &str = "min_weight_kg";
    pub const DONATION_INTERVAL_DAYS: &str = "donation_interval_days";
    pub const LOCALE: &str = "locale";
    pub const ALERT_DISMISS_SECS: &str = "alert_dismiss_secs";
}

const DEFAULT_MIN_AGE: &str = "18";
const DEFAULT_MIN_WEIGHT_KG: &str = "50";
const DEFAULT_DONATION_INTERVAL_DAYS: &str = "180";

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct ConfigManager {
    values: Arc<Mutex<BTreeMap<String, String>>>,
}

impl ConfigManager {
    /// 创建空配置（所有键取默认值）
    pub fn new() -> Self {
        Self::default()
    }

    /// 从扁平 JSON 键值文件加载
    ///
    /// # 文件格式
    /// `{"min_age": "18", "min_weight_kg": "50"}`
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let manager = Self::new();
        manager.restore_config_from_snapshot(&raw)?;
        Ok(manager)
    }

    /// 从客户端配置初始化
    pub fn from_portal_config(config: &PortalConfig) -> Self {
        let mut values = BTreeMap::new();
        values.insert(
            config_keys::MIN_AGE.to_string(),
            config.eligibility.min_age.to_string(),
        );
        values.insert(
            config_keys::MIN_WEIGHT_KG.to_string(),
            config.eligibility.min_weight_kg.to_string(),
        );
        values.insert(
            config_keys::DONATION_INTERVAL_DAYS.to_string(),
            config.eligibility.donation_interval_days.to_string(),
        );
        values.insert(config_keys::LOCALE.to_string(), config.locale.clone());
        values.insert(
            config_keys::ALERT_DISMISS_SECS.to_string(),
            config.alert_dismiss_secs.to_string(),
        );
        Self {
            values: Arc::new(Mutex::new(values)),
        }
    }

    fn get_config_value(&self, key: &str) -> ConfigResult<Option<String>> {
        let values = self
            .values
            .lock()
            .map_err(|e| ConfigError::LockError(e.to_string()))?;
        Ok(values.get(key).cloned())
    }

    /// 读取配置值，带默认值
    fn get_config_or_default(&self, key: &str, default: &str) -> ConfigResult<String> {
        Ok(self
            .get_config_value(key)?
            .unwrap_or_else(|| default.to_string()))
    }

    /// 读取配置值（公开方法，供其他模块复用）
    pub fn get_global_config_value(&self, key: &str) -> ConfigResult<Option<String>> {
        self.get_config_value(key)
    }

    /// 写入单个配置值
    pub fn update_config(&self, key: &str, value: &str) -> ConfigResult<()> {
        let mut values = self
            .values
            .lock()
            .map_err(|e| ConfigError::LockError(e.to_string()))?;
        tracing::info!(config_key = key, value = value, "配置已更新");
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    /// 获取所有配置的快照（JSON 格式）
    pub fn get_config_snapshot(&self) -> ConfigResult<String> {
        let values = self
            .values
            .lock()
            .map_err(|e| ConfigError::LockError(e.to_string()))?;
        Ok(serde_json::to_string(&*values)?)
    }

    /// 从配置快照恢复配置
    ///
    /// # 返回
    /// - Ok(usize): 恢复的配置项数量
    ///
    /// # 注意
    /// - 值可以是字符串或数字，统一按字符串保存
    pub fn restore_config_from_snapshot(&self, snapshot_json: &str) -> ConfigResult<usize> {
        let parsed: BTreeMap<String, serde_json::Value> = serde_json::from_str(snapshot_json)?;

        let mut values = self
            .values
            .lock()
            .map_err(|e| ConfigError::LockError(e.to_string()))?;

        let mut count = 0;
        for (key, value) in parsed {
            let text = match value {
                serde_json::Value::String(s) => s,
                other => other.to_string(),
            };
            values.insert(key, text);
            count += 1;
        }
        Ok(count)
    }

    fn parse_value<T: std::str::FromStr>(key: &str, value: &str) -> ConfigResult<T>
    where
        T::Err: std::fmt::Display,
    {
        value
            .trim()
            .parse::<T>()
            .map_err(|e| ConfigError::InvalidValue {
                key: key.to_string(),
                value: value.to_string(),
                message: e.to_string(),
            })
    }
}

// ==========================================
// EligibilityConfigReader Trait 实现
// ==========================================
#[async_trait]
impl EligibilityConfigReader for ConfigManager {
    async fn get_min_age(&self) -> ConfigResult<i32> {
        let value = self.get_config_or_default(config_keys::MIN_AGE, DEFAULT_MIN_AGE)?;
        Self::parse_value(config_keys::MIN_AGE, &value)
    }

    async fn get_min_weight_kg(&self) -> ConfigResult<f64> {
        let value = self.get_config_or_default(config_keys::MIN_WEIGHT_KG, DEFAULT_MIN_WEIGHT_KG)?;
        let weight: f64 = Self::parse_value(config_keys::MIN_WEIGHT_KG, &value)?;
        if weight.is_nan() {
            return Err(ConfigError::InvalidValue {
                key: config_keys::MIN_WEIGHT_KG.to_string(),
                value,
                message: "必须为数值".to_string(),
            });
        }
        Ok(weight)
    }

    async fn get_donation_interval_days(&self) -> ConfigResult<i64> {
        let value = self.get_config_or_default(
            config_keys::DONATION_INTERVAL_DAYS,
            DEFAULT_DONATION_INTERVAL_DAYS,
        )?;
        let days: i64 = Self::parse_value(config_keys::DONATION_INTERVAL_DAYS, &value)?;
        if !EligibilityRules::is_valid_interval(days) {
            return Err(ConfigError::InvalidValue {
                key: config_keys::DONATION_INTERVAL_DAYS.to_string(),
                value,
                message: format!("超出范围 0..={}", MAX_DONATION_INTERVAL_DAYS),
            });
        }
        Ok(days)
    }
}
