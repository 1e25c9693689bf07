//! LocalStorage 封装模块
//!
//! 基于 `gloo-storage`，值以 JSON 形式存取。

use gloo_storage::{LocalStorage, Storage};
use leptos::logging::warn;
use serde::{Serialize, de::DeserializeOwned};

/// 本地存储操作封装
///
/// 提供静态方法访问浏览器 LocalStorage API，失败时只记录日志。
pub struct BrowserStorage;

impl BrowserStorage {
    /// 读取并反序列化
    ///
    /// 键不存在或内容无法解析时返回 `None`
    pub fn get<T: DeserializeOwned>(key: &str) -> Option<T> {
        LocalStorage::get(key).ok()
    }

    /// 序列化并写入
    ///
    /// # 返回
    /// - `true` 如果操作成功
    /// - `false` 如果操作失败
    pub fn set<T: Serialize>(key: &str, value: &T) -> bool {
        match LocalStorage::set(key, value) {
            Ok(()) => true,
            Err(e) => {
                warn!("[Storage] failed to write `{}`: {}", key, e);
                false
            }
        }
    }

    /// 删除存储的键值对
    pub fn delete(key: &str) {
        LocalStorage::delete(key);
    }
}
