// ==========================================
// 献血管理系统 - 资格自查 API
// ==========================================
// 职责: 表单解析 → 资格判定 → 展示结果
// 红线: 客户端判定仅供参考，服务端重新校验
// ==========================================

use crate::api::error::ApiResult;
use crate::api::form::EligibilityForm;
use crate::config::EligibilityConfigReader;
use crate::domain::donor::EligibilityVerdict;
use crate::domain::types::ParsePolicy;
use crate::engine::EligibilityEngine;
use crate::i18n;
use chrono::NaiveDate;
use serde::Serialize;
use std::sync::Arc;
use tracing::instrument;

pub const ELIGIBLE_CLASS: &str = "eligible";
pub const NOT_ELIGIBLE_CLASS: &str = "not-eligible";

// ==========================================
// EligibilityDisplay - 展示结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EligibilityDisplay {
    /// 结果区域样式类: "eligible" / "not-eligible"
    pub status_class: &'static str,
    pub headline: String,
    pub reasons: Vec<String>,
    pub verdict: EligibilityVerdict,
}

impl EligibilityDisplay {
    pub fn from_verdict(verdict: EligibilityVerdict, locale: &str) -> Self {
        if verdict.is_eligible() {
            Self {
                status_class: ELIGIBLE_CLASS,
                headline: i18n::t_in(locale, "eligibility.eligible", &[]),
                reasons: Vec::new(),
                verdict,
            }
        } else {
            Self {
                status_class: NOT_ELIGIBLE_CLASS,
                headline: i18n::t_in(locale, "eligibility.not_eligible", &[]),
                reasons: verdict.reasons_in(locale),
                verdict,
            }
        }
    }

    /// 结果区域 HTML（图标 + 标题 + 原因，每条原因以 <br> 结尾）
    pub fn render_html(&self) -> String {
        if self.verdict.is_eligible() {
            format!(r#"<i class="fas fa-check-circle"></i> {}"#, self.headline)
        } else {
            let message: String = self
                .reasons
                .iter()
                .map(|reason| format!("{}<br>", reason))
                .collect();
            format!(
                r#"<i class="fas fa-times-circle"></i> {}<br>{}"#,
                self.headline, message
            )
        }
    }
}

// ==========================================
// EligibilityApi
// ==========================================
pub struct EligibilityApi<C>
where
    C: EligibilityConfigReader,
{
    engine: EligibilityEngine<C>,
    policy: ParsePolicy,
    locale: String,
}

impl<C> EligibilityApi<C>
where
    C: EligibilityConfigReader,
{
    pub fn new(config: Arc<C>, policy: ParsePolicy, locale: impl Into<String>) -> Self {
        Self {
            engine: EligibilityEngine::new(config),
            policy,
            locale: locale.into(),
        }
    }

    /// 资格自查（"检查资格"按钮）
    ///
    /// # 返回
    /// - Ok(EligibilityDisplay): 判定结果
    /// - Err(ApiError::InvalidInput): Reject 策略下表单字段无法解析
    #[instrument(skip(self, form), fields(policy = %self.policy))]
    pub async fn check(
        &self,
        form: &EligibilityForm,
        today: NaiveDate,
    ) -> ApiResult<EligibilityDisplay> {
        let input = form.parse(self.policy)?;
        let verdict = self.engine.evaluate(&input, today).await?;

        tracing::info!(is_eligible = verdict.is_eligible(), "资格自查完成");
        Ok(EligibilityDisplay::from_verdict(verdict, &self.locale))
    }

    /// 下次可献血日期（仪表盘展示）
    pub async fn next_eligible_date(
        &self,
        last_donation_date: Option<NaiveDate>,
    ) -> ApiResult<Option<NaiveDate>> {
        match last_donation_date {
            Some(last) => Ok(self.engine.next_eligible_date(last).await?),
            None => Ok(None),
        }
    }
}
