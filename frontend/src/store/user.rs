//! 用户状态
//!
//! 保存登录 token 与个人信息。只有 token 会写入 LocalStorage，
//! 其余字段在每次路由切换时由守卫重新拉取。

use leptos::logging::log;
use leptos::prelude::*;
use mikan_shared::LoginParam;
use serde::{Deserialize, Serialize};

use crate::api::MikanApi;
use crate::config::STORAGE_USER_KEY;
use crate::error::{ApiError, ApiResult, AuthError};
use crate::web::{BrowserStorage, HttpClient};

/// 未设置角色时的默认值
const DEFAULT_ROLE: &str = "all";

/// 当前会话
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// 为空表示未登录
    pub token: String,
    pub user_name: String,
    pub roles: Vec<String>,
    /// 后端版本号
    pub version: String,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            token: String::new(),
            user_name: String::new(),
            roles: vec![DEFAULT_ROLE.to_string()],
            version: String::new(),
        }
    }
}

/// 持久化的部分
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PersistedSession {
    pub token: String,
}

impl Session {
    pub fn to_persisted(&self) -> PersistedSession {
        PersistedSession {
            token: self.token.clone(),
        }
    }

    pub fn from_persisted(persisted: PersistedSession) -> Self {
        Self {
            token: persisted.token,
            ..Self::default()
        }
    }
}

/// 用户状态仓库
///
/// 所有修改都经过这里的方法。`persist` 关闭时不访问 LocalStorage，用于测试。
#[derive(Debug, Clone, Copy)]
pub struct UserStore {
    session: RwSignal<Session>,
    persist: bool,
}

impl UserStore {
    /// 从 LocalStorage 恢复 token
    pub fn restore() -> Self {
        let session = BrowserStorage::get::<PersistedSession>(STORAGE_USER_KEY)
            .map(Session::from_persisted)
            .unwrap_or_default();
        Self {
            session: RwSignal::new(session),
            persist: true,
        }
    }

    /// 不落盘的仓库
    pub fn in_memory() -> Self {
        Self {
            session: RwSignal::new(Session::default()),
            persist: false,
        }
    }

    /// 当前 token（非响应式）
    pub fn token(&self) -> String {
        self.session.with_untracked(|s| s.token.clone())
    }

    pub fn snapshot(&self) -> Session {
        self.session.get_untracked()
    }

    pub fn user_name(&self) -> String {
        self.session.with(|s| s.user_name.clone())
    }

    pub fn version(&self) -> String {
        self.session.with(|s| s.version.clone())
    }

    fn set_token(&self, token: String) {
        self.session.update(|s| s.token = token);
        if self.persist {
            BrowserStorage::set(STORAGE_USER_KEY, &self.snapshot().to_persisted());
        }
    }

    /// 登录
    ///
    /// 业务码为 200 时保存 token；否则返回 [`AuthError::Rejected`]，token 保持不变。
    /// 成功但没有 token（或 token 为空）视为响应无效。
    pub async fn login<C: HttpClient>(
        &self,
        api: &MikanApi<C>,
        param: &LoginParam,
    ) -> Result<(), AuthError> {
        let resp = api.login(param).await?;
        if !resp.is_ok() {
            log!("[Auth] login rejected with code {}", resp.code);
            return Err(AuthError::Rejected(resp.code));
        }
        let token = resp
            .data
            .filter(|token| !token.is_empty())
            .ok_or_else(|| ApiError::Decode("login response carries no token".into()))?;
        self.set_token(token);
        log!("[Auth] logged in as {}", param.account);
        Ok(())
    }

    /// 拉取用户名与后端版本
    pub async fn get_user_info<C: HttpClient>(&self, api: &MikanApi<C>) -> ApiResult<()> {
        let info = api.username().await?;
        self.session.update(|s| {
            s.user_name = info.username;
            s.version = info.version;
        });
        Ok(())
    }

    /// 清空会话，可重复调用
    pub fn logout(&self) {
        if self.session.with_untracked(|s| *s != Session::default()) {
            log!("[Auth] session cleared");
        }
        self.session.set(Session::default());
        if self.persist {
            BrowserStorage::delete(STORAGE_USER_KEY);
        }
    }
}

#[cfg(test)]
mod tests;
