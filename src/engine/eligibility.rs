// ==========================================
// 献血管理系统 - 献血资格判定引擎
// ==========================================
// 职责: 读取判定阈值 + 调用 EligibilityCore 纯函数
// 输入: DonorEligibilityInput + 参照日期
// 输出: EligibilityVerdict (是否合格 + 有序违规项)
// ==========================================

use crate::config::{ConfigResult, EligibilityConfigReader};
use crate::domain::donor::{DonorEligibilityInput, EligibilityVerdict};
use crate::engine::EligibilityCore;
use chrono::NaiveDate;
use std::sync::Arc;
use tracing::instrument;

// ==========================================
// EligibilityEngine - 献血资格判定引擎
// ==========================================
// 红线: 不做网络访问,只读取配置并计算
pub struct EligibilityEngine<C>
where
    C: EligibilityConfigReader,
{
    config: Arc<C>,
}

impl<C> EligibilityEngine<C>
where
    C: EligibilityConfigReader,
{
    /// 创建新的 EligibilityEngine 实例
    pub fn new(config: Arc<C>) -> Self {
        Self { config }
    }

    /// 判定单个献血者
    ///
    /// # 返回
    /// - EligibilityVerdict: 判定结论；配置读取失败时返回 ConfigError
    #[instrument(skip(self, input), fields(age = ?input.age, weight_kg = input.weight_kg))]
    pub async fn evaluate(
        &self,
        input: &DonorEligibilityInput,
        reference_date: NaiveDate,
    ) -> ConfigResult<EligibilityVerdict> {
        let rules = self.config.get_eligibility_rules().await?;
        let verdict = EligibilityCore::evaluate_with_rules(input, reference_date, &rules);

        tracing::debug!(
            is_eligible = verdict.is_eligible(),
            violations = ?verdict.violations().iter().map(|v| v.code()).collect::<Vec<_>>(),
            "资格判定完成"
        );
        Ok(verdict)
    }

    /// 批量判定（只读取一次配置）
    pub async fn evaluate_batch(
        &self,
        inputs: &[DonorEligibilityInput],
        reference_date: NaiveDate,
    ) -> ConfigResult<Vec<EligibilityVerdict>> {
        let rules = self.config.get_eligibility_rules().await?;

        Ok(inputs
            .iter()
            .map(|input| EligibilityCore::evaluate_with_rules(input, reference_date, &rules))
            .collect())
    }

    /// 计算下次可献血日期
    pub async fn next_eligible_date(
        &self,
        last_donation_date: NaiveDate,
    ) -> ConfigResult<Option<NaiveDate>> {
        let rules = self.config.get_eligibility_rules().await?;
        Ok(EligibilityCore::next_eligible_date(last_donation_date, &rules))
    }
}
