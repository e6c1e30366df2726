//! 文本格式化辅助（基于显示宽度，CJK 字符占两列）

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};
use user_directory_core::services::messages;
use user_directory_core::{FieldPath, ValidationError};

use crate::i18n::{Translations, t};

/// 截断并补齐到 `width` 列
pub fn pad(text: &str, width: usize) -> String {
    let mut out = truncate(text, width);
    let used = out.width();
    out.extend(std::iter::repeat_n(' ', width.saturating_sub(used)));
    out
}

/// 超出 `width` 列时截断并以 `…` 结尾
pub fn truncate(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > width - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

/// 空值显示为 "N/A"
pub fn or_na(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => t().common.not_available,
    }
}

/// 表单字段的显示名称
pub fn field_label(path: FieldPath) -> &'static str {
    let fields = &t().fields;
    match path {
        FieldPath::Name => fields.name,
        FieldPath::Username => fields.username,
        FieldPath::Email => fields.email,
        FieldPath::Phone => fields.phone,
        FieldPath::Website => fields.website,
        FieldPath::AddressStreet => fields.street,
        FieldPath::AddressSuite => fields.suite,
        FieldPath::AddressCity => fields.city,
        FieldPath::AddressZipcode => fields.zipcode,
        FieldPath::CompanyName => fields.company_name,
    }
}

/// 错误横幅按当前语言显示
pub fn banner_text(message: &str) -> &str {
    localize_banner(t(), message)
}

/// 核心层产生的横幅为英文，逐条映射到翻译；未知文本原样返回
fn localize_banner<'a>(texts: &'static Translations, message: &'a str) -> &'a str {
    let b = &texts.banners;
    let failures = [
        (messages::LIST_LOAD_FAILED, b.list_load_failed),
        (messages::DELETE_FAILED, b.delete_failed),
        (messages::DETAIL_LOAD_FAILED, b.detail_load_failed),
        (messages::FORM_LOAD_FAILED, b.form_load_failed),
        (messages::CREATE_FAILED, b.create_failed),
        (messages::UPDATE_FAILED, b.update_failed),
    ];
    if let Some(&(_, text)) = failures.iter().find(|(core, _)| *core == message) {
        return text;
    }

    let rules = [
        (ValidationError::NameRequired, b.name_required),
        (ValidationError::EmailRequired, b.email_required),
        (ValidationError::InvalidEmail, b.invalid_email),
        (ValidationError::PhoneRequired, b.phone_required),
    ];
    rules
        .iter()
        .find(|(rule, _)| rule.to_string() == message)
        .map_or(message, |(_, text)| *text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{Language, translations};

    #[test]
    fn pad_fills_to_display_width() {
        assert_eq!(pad("ab", 4), "ab  ");
        assert_eq!(pad("张三", 6).width(), 6);
    }

    #[test]
    fn truncate_marks_cut() {
        assert_eq!(truncate("Leanne Graham", 8), "Leanne …");
        assert_eq!(truncate("张三丰", 5), "张三…");
        assert_eq!(truncate("short", 10), "short");
    }

    #[test]
    fn empty_values_read_as_na() {
        assert_eq!(or_na(None), "N/A");
        assert_eq!(or_na(Some("  ")), "N/A");
        assert_eq!(or_na(Some("Bret")), "Bret");
    }

    #[test]
    fn banners_follow_language() {
        let zh = translations(Language::ZhCn);
        assert_eq!(
            localize_banner(zh, messages::LIST_LOAD_FAILED),
            "加载用户列表失败，请稍后重试。"
        );
        assert_eq!(
            localize_banner(zh, &ValidationError::InvalidEmail.to_string()),
            "请输入有效的邮箱地址"
        );
    }

    #[test]
    fn english_banners_match_core_text() {
        let en = translations(Language::EnUs);
        for message in [
            messages::LIST_LOAD_FAILED,
            messages::DELETE_FAILED,
            messages::DETAIL_LOAD_FAILED,
            messages::FORM_LOAD_FAILED,
            messages::CREATE_FAILED,
            messages::UPDATE_FAILED,
        ] {
            assert_eq!(localize_banner(en, message), message);
        }
        let phone = ValidationError::PhoneRequired.to_string();
        assert_eq!(localize_banner(en, &phone), phone);
    }

    #[test]
    fn unknown_banner_passes_through() {
        let zh = translations(Language::ZhCn);
        assert_eq!(localize_banner(zh, "something else"), "something else");
    }
}
