// ==========================================
// 献血管理系统 - 献血资格领域模型
// ==========================================
// 职责: 判定输入、判定规则阈值、判定结论与违规项
// 生命周期: 单次判定内构造、展示、丢弃，无持久化
// ==========================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::i18n;

// ==========================================
// DonorEligibilityInput - 判定输入
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DonorEligibilityInput {
    /// 年龄（周岁）；None 表示表单字段无法解析（非数值）
    pub age: Option<i32>,
    /// 体重（公斤）；可能为 NaN
    pub weight_kg: f64,
    /// 上次献血日期；None 表示从未献血或未知
    pub last_donation_date: Option<NaiveDate>,
}

impl DonorEligibilityInput {
    pub fn new(age: i32, weight_kg: f64, last_donation_date: Option<NaiveDate>) -> Self {
        Self {
            age: Some(age),
            weight_kg,
            last_donation_date,
        }
    }
}

// ==========================================
// EligibilityRules - 判定阈值
// ==========================================
// 默认值: 18 岁 / 50 kg / 180 天
// 间隔取值范围: 0..=MAX_DONATION_INTERVAL_DAYS
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EligibilityRules {
    pub min_age: i32,
    pub min_weight_kg: f64,
    pub donation_interval_days: i64,
}

/// 献血间隔上限（天）
pub const MAX_DONATION_INTERVAL_DAYS: i64 = 36_500;

impl Default for EligibilityRules {
    fn default() -> Self {
        Self {
            min_age: 18,
            min_weight_kg: 50.0,
            donation_interval_days: 180,
        }
    }
}

impl EligibilityRules {
    pub fn is_valid_interval(days: i64) -> bool {
        (0..=MAX_DONATION_INTERVAL_DAYS).contains(&days)
    }
}

// ==========================================
// Violation - 违规项
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Violation {
    /// 年龄不足
    AgeBelowMinimum { min_age: i32 },
    /// 体重不足
    WeightBelowMinimum { min_weight_kg: f64 },
    /// 距上次献血间隔不足；remaining_days 可能超过间隔（上次献血日期在未来）
    DonationTooRecent { days_since: i64, remaining_days: i64 },
}

impl Violation {
    /// 违规代码（用于日志与前端样式）
    pub fn code(&self) -> &'static str {
        match self {
            Violation::AgeBelowMinimum { .. } => "AGE_BELOW_MINIMUM",
            Violation::WeightBelowMinimum { .. } => "WEIGHT_BELOW_MINIMUM",
            Violation::DonationTooRecent { .. } => "DONATION_TOO_RECENT",
        }
    }

    /// 按指定语言渲染违规原因
    pub fn message_in(&self, locale: &str) -> String {
        match self {
            Violation::AgeBelowMinimum { min_age } => i18n::t_in(
                locale,
                "eligibility.age_below_minimum",
                &[("min_age", &min_age.to_string())],
            ),
            Violation::WeightBelowMinimum { min_weight_kg } => i18n::t_in(
                locale,
                "eligibility.weight_below_minimum",
                &[("min_weight", &min_weight_kg.to_string())],
            ),
            Violation::DonationTooRecent { remaining_days, .. } => i18n::t_in(
                locale,
                "eligibility.donation_too_recent",
                &[("remaining_days", &remaining_days.to_string())],
            ),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::AgeBelowMinimum { min_age } => write!(
                f,
                "You must be at least {} years old to donate blood.",
                min_age
            ),
            Violation::WeightBelowMinimum { min_weight_kg } => write!(
                f,
                "You must weigh at least {} kg to donate blood.",
                min_weight_kg
            ),
            Violation::DonationTooRecent { remaining_days, .. } => write!(
                f,
                "You must wait {} more days before donating again.",
                remaining_days
            ),
        }
    }
}

// ==========================================
// EligibilityVerdict - 判定结论
// ==========================================
// 不变量: is_eligible == violations.is_empty()
// 只能通过 from_violations 构造
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EligibilityVerdict {
    is_eligible: bool,
    violations: Vec<Violation>,
}

impl EligibilityVerdict {
    pub fn from_violations(violations: Vec<Violation>) -> Self {
        Self {
            is_eligible: violations.is_empty(),
            violations,
        }
    }

    pub fn is_eligible(&self) -> bool {
        self.is_eligible
    }

    /// 违规项，顺序为检查顺序: 年龄、体重、间隔
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// 违规原因文本（英文）
    pub fn reasons(&self) -> Vec<String> {
        self.violations.iter().map(|v| v.to_string()).collect()
    }

    /// 违规原因文本（指定语言）
    pub fn reasons_in(&self, locale: &str) -> Vec<String> {
        self.violations.iter().map(|v| v.message_in(locale)).collect()
    }
}
