// ==========================================
// 国际化 (i18n) 模块
// ==========================================
// 使用 rust-i18n 库
// 支持英文（默认）和中文
// ==========================================
// 注意: rust_i18n::i18n! 宏已在 lib.rs 中初始化
// 判定与提示文本一律通过 t_in 显式传入语言，
// 不依赖全局 locale
// ==========================================

/// 默认语言
pub const DEFAULT_LOCALE: &str = "en";

/// 获取当前全局语言
pub fn current_locale() -> String {
    rust_i18n::locale().to_string()
}

/// 设置全局语言
///
/// # 参数
/// - locale: 语言代码（"en" 或 "zh-CN"）
pub fn set_locale(locale: &str) {
    rust_i18n::set_locale(locale);
}

/// 是否为已提供翻译的语言
pub fn is_supported(locale: &str) -> bool {
    rust_i18n::available_locales!().iter().any(|l| *l == locale)
}

/// 按指定语言翻译消息（带参数）
///
/// 不支持的语言回退到默认语言
///
/// # 示例
/// ```no_run
/// use blood_donation_portal::i18n::t_in;
/// let msg = t_in("en", "inventory.update_failed", &[("error", "timeout")]);
/// ```
pub fn t_in(locale: &str, key: &str, args: &[(&str, &str)]) -> String {
    let locale = if is_supported(locale) {
        locale
    } else {
        DEFAULT_LOCALE
    };
    let mut result = rust_i18n::t!(key, locale = locale).to_string();
    for (k, v) in args {
        let placeholder = format!("%{{{}}}", k);
        result = result.replace(&placeholder, v);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_explicit_locale() {
        assert_eq!(
            t_in("en", "inventory.update_success", &[]),
            "Inventory updated successfully!"
        );
        assert_eq!(t_in("zh-CN", "inventory.update_success", &[]), "库存更新成功！");
    }

    #[test]
    fn test_translate_with_args() {
        let msg = t_in("en", "inventory.update_failed", &[("error", "not found")]);
        assert_eq!(msg, "Error updating inventory: not found");

        let msg = t_in("zh-CN", "eligibility.donation_too_recent", &[("remaining_days", "80")]);
        assert!(msg.contains("80"));
    }

    #[test]
    fn test_global_locale_does_not_affect_explicit_translation() {
        set_locale("zh-CN");
        assert_eq!(current_locale(), "zh-CN");
        assert_eq!(
            t_in("en", "eligibility.eligible", &[]),
            "You are eligible to donate blood!"
        );

        set_locale(DEFAULT_LOCALE);
        assert_eq!(current_locale(), "en");
        assert_eq!(t_in("zh-CN", "inventory.update_success", &[]), "库存更新成功！");
    }

    #[test]
    fn test_unsupported_locale_falls_back_to_english() {
        assert!(!is_supported("fr"));
        assert_eq!(
            t_in("fr", "donation.not_eligible_alert", &[]),
            "You are not eligible to donate blood at this time."
        );
    }
}
