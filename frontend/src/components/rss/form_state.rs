//! 索引器表单状态
//!
//! 将零散的 signal 整合为 `FormState` 结构体，负责：
//! - 数据的持有与重置
//! - 编辑时从已有索引器载入
//! - 校验并转换为请求对象

use leptos::prelude::*;
use mikan_shared::{IndexerCategory, IndexerInfo};

/// 表单状态结构体
///
/// 使用 `RwSignal` 因为它实现了 `Copy` trait，适合作为 Props 在组件间传递。
#[derive(Clone, Copy)]
pub struct FormState {
    /// 为空表示新建
    pub id: RwSignal<Option<u32>>,
    pub name: RwSignal<String>,
    pub category: RwSignal<IndexerCategory>,
    pub url: RwSignal<String>,
    pub enable: RwSignal<bool>,
}

impl FormState {
    pub fn new() -> Self {
        Self {
            id: RwSignal::new(None),
            name: RwSignal::new(String::new()),
            category: RwSignal::new(IndexerCategory::Rss),
            url: RwSignal::new(String::new()),
            enable: RwSignal::new(true),
        }
    }

    /// 重置为新建状态
    pub fn reset(&self) {
        self.id.set(None);
        self.name.set(String::new());
        self.category.set(IndexerCategory::Rss);
        self.url.set(String::new());
        self.enable.set(true);
    }

    /// 载入已有索引器用于编辑
    pub fn load(&self, info: &IndexerInfo) {
        self.id.set(info.id);
        self.name.set(info.name.clone());
        self.category.set(info.category);
        self.url.set(info.url.clone());
        self.enable.set(info.enable);
    }

    pub fn is_edit(&self) -> bool {
        self.id.with(Option::is_some)
    }

    /// 校验必填项并转换为请求对象，失败时返回提示文案的键
    pub fn to_request(&self) -> Result<IndexerInfo, &'static str> {
        let name = self.name.get_untracked().trim().to_string();
        let url = self.url.get_untracked().trim().to_string();
        if name.is_empty() {
            return Err("pages.rss.placeholder.name");
        }
        if url.is_empty() {
            return Err("pages.rss.placeholder.url");
        }
        Ok(IndexerInfo {
            id: self.id.get_untracked(),
            name,
            category: self.category.get_untracked(),
            url,
            enable: self.enable.get_untracked(),
        })
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> IndexerInfo {
        IndexerInfo {
            id: Some(4),
            name: "jackett".into(),
            category: IndexerCategory::Torznab,
            url: "http://127.0.0.1:9117/api".into(),
            enable: false,
        }
    }

    #[test]
    fn load_then_submit_keeps_id() {
        let form = FormState::new();
        form.load(&sample());
        assert!(form.id.get_untracked().is_some());
        assert_eq!(form.to_request(), Ok(sample()));
    }

    #[test]
    fn reset_returns_to_create_mode() {
        let form = FormState::new();
        form.load(&sample());
        form.reset();
        assert_eq!(form.id.get_untracked(), None);
        assert_eq!(form.category.get_untracked(), IndexerCategory::Rss);
        assert!(form.enable.get_untracked());
    }

    #[test]
    fn required_fields_are_trimmed_and_checked() {
        let form = FormState::new();
        assert_eq!(form.to_request(), Err("pages.rss.placeholder.name"));

        form.name.set("  mikan ".into());
        assert_eq!(form.to_request(), Err("pages.rss.placeholder.url"));

        form.url.set(" https://mikanani.me/RSS/MyBangumi ".into());
        let request = form.to_request().unwrap();
        assert_eq!(request.id, None);
        assert_eq!(request.name, "mikan");
        assert_eq!(request.url, "https://mikanani.me/RSS/MyBangumi");
    }
}
