// ==========================================
// 献血管理系统 - 引擎层
// ==========================================
// 职责: 献血资格判定规则
// 红线: 判定为纯函数, 所有违规必须输出原因
// ==========================================

pub mod eligibility;
pub mod eligibility_core;

// 重导出核心引擎
pub use eligibility::EligibilityEngine;
pub use eligibility_core::EligibilityCore;

use crate::domain::donor::{DonorEligibilityInput, EligibilityVerdict};
use chrono::NaiveDate;

/// 使用默认阈值判定献血资格
pub fn evaluate(input: &DonorEligibilityInput, reference_date: NaiveDate) -> EligibilityVerdict {
    EligibilityCore::evaluate(input, reference_date)
}
