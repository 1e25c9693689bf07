//! 应用上下文
//!
//! 所有状态仓库在启动时创建一次，通过 Leptos Context 传给路由服务和各页面。

use async_trait::async_trait;
use leptos::prelude::*;

use crate::api::MikanApi;
use crate::components::message::Messages;
use crate::config::API_BASE;
use crate::error::{ApiError, ApiResult};
use crate::guard::ProfileSource;
use crate::i18n::I18n;
use crate::store::permission::PermissionStore;
use crate::store::user::UserStore;
use crate::web::FetchClient;
use crate::web::progress::Progress;

#[derive(Clone, Copy)]
pub struct AppContext {
    pub user: UserStore,
    pub permission: PermissionStore,
    pub i18n: I18n,
    pub messages: Messages,
    pub progress: Progress,
}

impl AppContext {
    /// 从 LocalStorage 恢复 token 与语言
    pub fn restore() -> Self {
        Self {
            user: UserStore::restore(),
            permission: PermissionStore::default(),
            i18n: I18n::restore(),
            messages: Messages::new(),
            progress: Progress::new(),
        }
    }

    /// 携带当前 token 的接口客户端
    pub fn api(&self) -> MikanApi<FetchClient> {
        MikanApi::new(FetchClient, API_BASE).with_token(&self.user.token())
    }

    /// 接口错误对应的提示文本
    pub fn error_text(&self, err: &ApiError) -> String {
        let t = |key| self.i18n.t(key);
        match err {
            ApiError::InvalidToken => t("components.invalid_token").to_string(),
            ApiError::Rejected { code, .. } => format!("{}{}", t("components.api_error_code"), code),
            ApiError::Status(status) => format!("{}{}", t("components.api_error_code"), status),
            other => format!("{}: {}", t("components.api_error"), other),
        }
    }

    /// 以错误提示展示接口错误
    pub fn notify_error(&self, err: &ApiError) {
        self.messages.error(self.error_text(err));
    }
}

#[async_trait(?Send)]
impl ProfileSource for AppContext {
    fn token(&self) -> String {
        self.user.token()
    }

    async fn fetch_profile(&self) -> ApiResult<()> {
        self.user.get_user_info(&self.api()).await
    }

    fn logout(&self) {
        self.user.logout();
    }
}

pub fn use_app() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Locale;

    fn context(locale: Locale) -> AppContext {
        AppContext {
            user: UserStore::in_memory(),
            permission: PermissionStore::default(),
            i18n: I18n::new(locale),
            messages: Messages::new(),
            progress: Progress::new(),
        }
    }

    #[test]
    fn error_text_follows_the_locale() {
        let zh = context(Locale::ZhCn);
        let en = context(Locale::EnUs);

        assert_eq!(zh.error_text(&ApiError::InvalidToken), "登录已过期，请重新登录");
        assert_eq!(en.error_text(&ApiError::InvalidToken), "Login has expired, please log in again");
        assert_eq!(
            en.error_text(&ApiError::Rejected { code: 500, message: None }),
            "api request error, code: 500"
        );
    }
}
