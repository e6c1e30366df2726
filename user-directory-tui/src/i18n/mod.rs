//! 国际化（i18n）模块
//!
//! 提供多语言支持，使用纯 Rust 结构体方案，编译期类型检查，零运行时开销。
//! 语言由配置文件的 `language` 字段决定，启动时设置一次。

use std::sync::atomic::{AtomicUsize, Ordering};

use serde::{Deserialize, Serialize};

mod en_us;
pub mod keys;
mod zh_cn;

pub use keys::*;

/// 支持的语言
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Language {
    /// 英语（美国）
    #[default]
    #[serde(rename = "en-US", alias = "en")]
    EnUs,
    /// 简体中文（中国）
    #[serde(rename = "zh-CN", alias = "zh")]
    ZhCn,
}

impl Language {
    /// 获取语言代码（BCP 47 标准）
    pub fn code(self) -> &'static str {
        match self {
            Language::EnUs => "en-US",
            Language::ZhCn => "zh-CN",
        }
    }
}

/// 当前语言索引（原子操作，线程安全）
static CURRENT_LANGUAGE: AtomicUsize = AtomicUsize::new(0); // 0 = EnUs

/// 获取当前语言的翻译
pub fn t() -> &'static Translations {
    translations(current_language())
}

/// 获取指定语言的翻译
pub fn translations(lang: Language) -> &'static Translations {
    match lang {
        Language::EnUs => &en_us::TRANSLATIONS,
        Language::ZhCn => &zh_cn::TRANSLATIONS,
    }
}

/// 设置当前语言
pub fn set_language(lang: Language) {
    let index = match lang {
        Language::EnUs => 0,
        Language::ZhCn => 1,
    };
    CURRENT_LANGUAGE.store(index, Ordering::Relaxed);
}

/// 获取当前语言
pub fn current_language() -> Language {
    match CURRENT_LANGUAGE.load(Ordering::Relaxed) {
        1 => Language::ZhCn,
        _ => Language::EnUs,
    }
}
