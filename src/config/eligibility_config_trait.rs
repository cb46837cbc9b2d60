// ==========================================
// 献血管理系统 - 资格判定配置读取 Trait
// ==========================================
// 职责: 定义资格判定所需的配置读取接口（不包含实现）
// 红线: 不包含配置写入、不包含判定逻辑
// ==========================================

use crate::config::error::ConfigResult;
use crate::domain::donor::EligibilityRules;
use async_trait::async_trait;

// ==========================================
// EligibilityConfigReader Trait
// ==========================================
// 实现者: ConfigManager（从键值配置读取）
#[async_trait]
pub trait EligibilityConfigReader: Send + Sync {
    /// 获取最低献血年龄
    ///
    /// # 默认值
    /// - 18
    async fn get_min_age(&self) -> ConfigResult<i32>;

    /// 获取最低体重（公斤）
    ///
    /// # 默认值
    /// - 50.0
    async fn get_min_weight_kg(&self) -> ConfigResult<f64>;

    /// 获取两次献血最小间隔天数
    ///
    /// # 默认值
    /// - 180
    async fn get_donation_interval_days(&self) -> ConfigResult<i64>;

    /// 一次读取全部判定阈值
    async fn get_eligibility_rules(&self) -> ConfigResult<EligibilityRules> {
        Ok(EligibilityRules {
            min_age: self.get_min_age().await?,
            min_weight_kg: self.get_min_weight_kg().await?,
            donation_interval_days: self.get_donation_interval_days().await?,
        })
    }
}
