// ==========================================
// 献血管理系统 - 献血申请提交门控
// ==========================================
// 依据: 表单上的预计算 eligible 标记（服务端渲染）
// 红线: 仅客户端拦截，不是安全边界，服务端必须重新校验
// ==========================================

use crate::i18n;
use crate::presentation::Notifier;
use serde::Serialize;
use std::sync::Arc;

/// 提交决策
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SubmitDecision {
    /// 继续提交
    Proceed,
    /// 拦截提交（已提示用户）
    Blocked,
}

pub struct DonationRequestGate {
    notifier: Arc<dyn Notifier>,
    locale: String,
}

impl DonationRequestGate {
    pub fn new(notifier: Arc<dyn Notifier>, locale: impl Into<String>) -> Self {
        Self {
            notifier,
            locale: locale.into(),
        }
    }

    /// 处理提交事件
    pub fn submit(&self, eligible: bool) -> SubmitDecision {
        if eligible {
            return SubmitDecision::Proceed;
        }
        tracing::info!("献血申请被客户端拦截: 不符合资格");
        self.notifier
            .alert(&i18n::t_in(&self.locale, "donation.not_eligible_alert", &[]));
        SubmitDecision::Blocked
    }

    /// 按表单 data-eligible 属性值处理（仅 "true" 视为合格）
    pub fn submit_with_attribute(&self, data_eligible: Option<&str>) -> SubmitDecision {
        self.submit(data_eligible == Some("true"))
    }
}
