// ==========================================
// 献血管理系统 - 资格表单解析
// ==========================================
// 职责: 原始表单字符串 → DonorEligibilityInput
// 策略:
// - Reject: 任一字段无法解析即返回 FormError
// - Coerce: 年龄 → None，体重 → NaN，日期 → 视为未填写
// 数字解析取前导数字部分（"25.7" → 25，"55.5kg" → 55.5）
// ==========================================

use crate::domain::donor::DonorEligibilityInput;
use crate::domain::types::ParsePolicy;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("年龄无法解析: {0:?}")]
    InvalidAge(String),

    #[error("体重无法解析: {0:?}")]
    InvalidWeight(String),

    #[error("上次献血日期格式错误 (应为 YYYY-MM-DD): {0:?}")]
    InvalidDate(String),
}

/// 资格自查表单（原始字段值）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibilityForm {
    pub age: String,
    pub weight: String,
    pub last_donation: String,
}

impl EligibilityForm {
    pub fn new(
        age: impl Into<String>,
        weight: impl Into<String>,
        last_donation: impl Into<String>,
    ) -> Self {
        Self {
            age: age.into(),
            weight: weight.into(),
            last_donation: last_donation.into(),
        }
    }

    /// 按策略解析为判定输入
    pub fn parse(&self, policy: ParsePolicy) -> Result<DonorEligibilityInput, FormError> {
        let age = match parse_leading_int(&self.age) {
            Some(age) => Some(age),
            None if policy == ParsePolicy::Reject => {
                return Err(FormError::InvalidAge(self.age.clone()))
            }
            None => None,
        };

        let weight_kg = match parse_leading_float(&self.weight) {
            Some(weight) => weight,
            None if policy == ParsePolicy::Reject => {
                return Err(FormError::InvalidWeight(self.weight.clone()))
            }
            None => f64::NAN,
        };

        let raw_date = self.last_donation.trim();
        let last_donation_date = if raw_date.is_empty() {
            None
        } else {
            match NaiveDate::parse_from_str(raw_date, DATE_FORMAT) {
                Ok(date) => Some(date),
                Err(_) if policy == ParsePolicy::Reject => {
                    return Err(FormError::InvalidDate(self.last_donation.clone()))
                }
                Err(e) => {
                    tracing::warn!(raw = raw_date, error = %e, "上次献血日期无法解析，按未填写处理");
                    None
                }
            }
        };

        Ok(DonorEligibilityInput {
            age,
            weight_kg,
            last_donation_date,
        })
    }
}

/// 取前导整数（可带符号），溢出视为无法解析
fn parse_leading_int(raw: &str) -> Option<i32> {
    let s = raw.trim_start();
    let sign_len = usize::from(s.starts_with(['+', '-']));
    let digits = s[sign_len..]
        .bytes()
        .take_while(|b| b.is_ascii_digit())
        .count();
    if digits == 0 {
        return None;
    }
    s[..sign_len + digits].parse().ok()
}

/// 取前导浮点数（可带符号、小数点、指数），单次扫描
///
/// 尾部不完整的指数（"1e"、"1e+"）不计入；溢出结果保留为无穷大
fn parse_leading_float(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_end = digits_from(end);
    let mut mantissa_digits = int_end - end;
    end = int_end;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        mantissa_digits += frac_end - (end + 1);
        end = frac_end;
    }
    if mantissa_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_end = digits_from(exp);
        if exp_end > exp {
            end = exp_end;
        }
    }

    s[..end].parse().ok()
}
