// ==========================================
// 献血管理系统 - Eligibility Core 纯函数库
// ==========================================
// 职责: 年龄、体重、献血间隔判定的纯逻辑
// 红线: 无状态、无副作用、无 I/O 操作
// 红线: 所有约束独立检查，违规项全部收集，不短路
// ==========================================

use crate::domain::donor::{DonorEligibilityInput, EligibilityRules, EligibilityVerdict, Violation};
use chrono::{DateTime, Duration, NaiveDate, Utc};

const MILLIS_PER_DAY: i64 = 86_400_000;

// ==========================================
// EligibilityCore - 纯函数工具类
// ==========================================
pub struct EligibilityCore;

impl EligibilityCore {
    /// 使用默认阈值判定（18 岁 / 50 kg / 180 天）
    pub fn evaluate(input: &DonorEligibilityInput, reference_date: NaiveDate) -> EligibilityVerdict {
        Self::evaluate_with_rules(input, reference_date, &EligibilityRules::default())
    }

    /// 判定献血资格
    ///
    /// # 规则
    /// 1. age < min_age → 年龄违规
    /// 2. weight_kg < min_weight_kg → 体重违规
    /// 3. 有上次献血日期且 days_since < interval → 间隔违规（含剩余天数）
    ///
    /// # 参数
    /// - input: 判定输入
    /// - reference_date: 参照日期（通常为今天）
    /// - rules: 判定阈值
    pub fn evaluate_with_rules(
        input: &DonorEligibilityInput,
        reference_date: NaiveDate,
        rules: &EligibilityRules,
    ) -> EligibilityVerdict {
        let days_since = input
            .last_donation_date
            .map(|last| Self::days_since_last_donation(last, reference_date));
        Self::collect(input, days_since, rules)
    }

    /// 以时刻为参照判定
    ///
    /// 上次献血日期取 UTC 零点，days_since 向下取整
    /// (与浏览器端 Math.floor((now - lastDonation) / 86400000) 一致)
    pub fn evaluate_at(
        input: &DonorEligibilityInput,
        now: DateTime<Utc>,
        rules: &EligibilityRules,
    ) -> EligibilityVerdict {
        let days_since = input
            .last_donation_date
            .map(|last| Self::days_since_at(last, now));
        Self::collect(input, days_since, rules)
    }

    /// 计算距上次献血的天数（参照日期 - 上次献血日期）
    ///
    /// 上次献血日期在未来时返回负数
    pub fn days_since_last_donation(last_donation_date: NaiveDate, reference_date: NaiveDate) -> i64 {
        reference_date
            .signed_duration_since(last_donation_date)
            .num_days()
    }

    /// 计算剩余等待天数
    ///
    /// # 规则
    /// - remaining = interval - days_since
    /// - days_since 为负时结果大于 interval，保持原样不修正
    /// - 溢出时取饱和值
    pub fn remaining_wait_days(days_since: i64, interval_days: i64) -> i64 {
        interval_days.saturating_sub(days_since)
    }

    /// 计算下次可献血日期（上次献血日期 + 间隔）
    ///
    /// 间隔超出日期可表示范围时返回 None
    ///
    /// # 示例
    /// ```
    /// use blood_donation_portal::domain::EligibilityRules;
    /// use blood_donation_portal::engine::EligibilityCore;
    ///
    /// let last = chrono::NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
    /// let next = EligibilityCore::next_eligible_date(last, &EligibilityRules::default());
    /// assert_eq!(next, chrono::NaiveDate::from_ymd_opt(2025, 6, 30));
    /// ```
    pub fn next_eligible_date(
        last_donation_date: NaiveDate,
        rules: &EligibilityRules,
    ) -> Option<NaiveDate> {
        let interval = Duration::try_days(rules.donation_interval_days)?;
        last_donation_date.checked_add_signed(interval)
    }

    fn days_since_at(last_donation_date: NaiveDate, now: DateTime<Utc>) -> i64 {
        let last_midnight = last_donation_date.and_time(chrono::NaiveTime::MIN).and_utc();
        now.signed_duration_since(last_midnight)
            .num_milliseconds()
            .div_euclid(MILLIS_PER_DAY)
    }

    fn collect(
        input: &DonorEligibilityInput,
        days_since: Option<i64>,
        rules: &EligibilityRules,
    ) -> EligibilityVerdict {
        let mut violations = Vec::new();

        // 规则 1: 年龄（非数值视为不满足）
        let age_ok = matches!(input.age, Some(age) if age >= rules.min_age);
        if !age_ok {
            violations.push(Violation::AgeBelowMinimum {
                min_age: rules.min_age,
            });
        }

        // 规则 2: 体重（NaN 比较为 false，视为不满足）
        if !(input.weight_kg >= rules.min_weight_kg) {
            violations.push(Violation::WeightBelowMinimum {
                min_weight_kg: rules.min_weight_kg,
            });
        }

        // 规则 3: 献血间隔
        if let Some(days_since) = days_since {
            if days_since < rules.donation_interval_days {
                violations.push(Violation::DonationTooRecent {
                    days_since,
                    remaining_days: Self::remaining_wait_days(
                        days_since,
                        rules.donation_interval_days,
                    ),
                });
            }
        }

        EligibilityVerdict::from_violations(violations)
    }
}
