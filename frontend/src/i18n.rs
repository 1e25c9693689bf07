//! 多语言字典
//!
//! 两份静态字典（`zh_CN` / `en_US`），以点分隔的键查找，缺失时回退为键本身。

mod en_us;
mod zh_cn;

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::STORAGE_LOCALE_KEY;
use crate::web::BrowserStorage;

/// 界面语言
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "zh_CN")]
    ZhCn,
    #[serde(rename = "en_US")]
    EnUs,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::ZhCn, Locale::EnUs];

    /// 语言选择器中显示的名称
    pub fn label(&self) -> &'static str {
        match self {
            Locale::ZhCn => "简体中文",
            Locale::EnUs => "English",
        }
    }

    fn messages(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            Locale::ZhCn => zh_cn::MESSAGES,
            Locale::EnUs => en_us::MESSAGES,
        }
    }
}

/// 查找翻译，缺失时返回键本身
pub fn translate(locale: Locale, key: &'static str) -> &'static str {
    locale
        .messages()
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, v)| *v)
        .unwrap_or(key)
}

/// 语言上下文
///
/// 持有当前语言信号，切换时写入 LocalStorage。
#[derive(Clone, Copy)]
pub struct I18n {
    locale: RwSignal<Locale>,
}

impl I18n {
    pub fn new(initial: Locale) -> Self {
        Self {
            locale: RwSignal::new(initial),
        }
    }

    /// 从 LocalStorage 恢复上次选择的语言
    pub fn restore() -> Self {
        Self::new(BrowserStorage::get(STORAGE_LOCALE_KEY).unwrap_or_default())
    }

    pub fn locale(&self) -> Locale {
        self.locale.get()
    }

    pub fn set_locale(&self, locale: Locale) {
        self.locale.set(locale);
        BrowserStorage::set(STORAGE_LOCALE_KEY, &locale);
    }

    /// 响应式翻译，在 view 闭包中调用会随语言切换刷新
    pub fn t(&self, key: &'static str) -> &'static str {
        translate(self.locale.get(), key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn keys(locale: Locale) -> BTreeSet<&'static str> {
        locale.messages().iter().map(|(k, _)| *k).collect()
    }

    #[test]
    fn dictionaries_share_the_same_keys() {
        let zh = keys(Locale::ZhCn);
        let en = keys(Locale::EnUs);
        assert_eq!(zh, en);
        assert_eq!(zh.len(), Locale::ZhCn.messages().len(), "duplicate key in zh_CN");
        assert_eq!(en.len(), Locale::EnUs.messages().len(), "duplicate key in en_US");
    }

    #[test]
    fn translate_and_fallback() {
        assert_eq!(translate(Locale::EnUs, "pages.login.signIn"), "Sign in");
        assert_eq!(translate(Locale::ZhCn, "pages.login.signIn"), "登录");
        assert_eq!(translate(Locale::EnUs, "pages.unknown"), "pages.unknown");
    }

    #[test]
    fn locale_wire_names() {
        assert_eq!(serde_json::to_string(&Locale::ZhCn).unwrap(), "\"zh_CN\"");
        let locale: Locale = serde_json::from_str("\"en_US\"").unwrap();
        assert_eq!(locale, Locale::EnUs);
    }
}
