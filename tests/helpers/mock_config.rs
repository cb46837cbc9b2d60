// ==========================================
// Mock 配置实现 - 用于集成测试
// ==========================================

use async_trait::async_trait;
use blood_donation_portal::config::{ConfigResult, EligibilityConfigReader};

/// Mock 配置结构
#[derive(Debug, Clone)]
pub struct MockConfig {
    pub min_age: i32,
    pub min_weight_kg: f64,
    pub donation_interval_days: i64,
}

impl MockConfig {
    /// 创建默认配置（18 岁 / 50 kg / 180 天）
    pub fn default() -> Self {
        Self {
            min_age: 18,
            min_weight_kg: 50.0,
            donation_interval_days: 180,
        }
    }

    /// 自定义献血间隔
    pub fn with_interval(days: i64) -> Self {
        let mut config = Self::default();
        config.donation_interval_days = days;
        config
    }
}

#[async_trait]
impl EligibilityConfigReader for MockConfig {
    async fn get_min_age(&self) -> ConfigResult<i32> {
        Ok(self.min_age)
    }

    async fn get_min_weight_kg(&self) -> ConfigResult<f64> {
        Ok(self.min_weight_kg)
    }

    async fn get_donation_interval_days(&self) -> ConfigResult<i64> {
        Ok(self.donation_interval_days)
    }
}
