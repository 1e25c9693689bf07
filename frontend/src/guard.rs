//! 导航守卫
//!
//! 每次路由切换前调用 [`before_each`] 决定放行或重定向，
//! 唯一的挂起点是有 token 时的一次用户信息请求。
//! 切换完成后调用 [`after_each`]，进入登录页时清空会话。

use async_trait::async_trait;

use crate::config::{LOGIN_PATH, REDIRECT_QUERY_KEY, ROOT_PATH};
use crate::error::{ApiError, ApiResult};
use crate::routes::RouteTable;
use crate::store::permission::PermissionStore;
use crate::web::route::Location;

/// 守卫所需的会话能力
#[async_trait(?Send)]
pub trait ProfileSource {
    /// 当前 token，空字符串表示未登录
    fn token(&self) -> String;
    /// 拉取一次用户信息，用于校验 token
    async fn fetch_profile(&self) -> ApiResult<()>;
    fn logout(&self);
}

#[derive(Debug, Clone, PartialEq)]
pub struct Redirect {
    pub path: String,
    /// 已编码的原始目标地址，登录后跳回
    pub return_target: Option<String>,
    /// 需要以提示消息展示的错误
    pub error: Option<ApiError>,
}

impl Redirect {
    fn to_root() -> Self {
        Self {
            path: ROOT_PATH.to_string(),
            return_target: None,
            error: None,
        }
    }

    fn to_login(to: &Location, error: Option<ApiError>) -> Self {
        Self {
            path: LOGIN_PATH.to_string(),
            return_target: Some(urlencoding::encode(&to.full_path).into_owned()),
            error,
        }
    }

    /// 重定向的完整地址
    pub fn url(&self) -> String {
        match &self.return_target {
            Some(target) => format!("{}?{}={}", self.path, REDIRECT_QUERY_KEY, target),
            None => self.path.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Decision {
    Proceed,
    Redirect(Redirect),
}

/// 路由切换前的检查
///
/// `name` 是目标地址解析出的路由名，未注册的地址为 `None`。
pub async fn before_each<S: ProfileSource + ?Sized>(
    to: &Location,
    name: Option<&str>,
    table: &RouteTable,
    permission: &PermissionStore,
    source: &S,
) -> Decision {
    if to.path == LOGIN_PATH {
        return Decision::Proceed;
    }

    if source.token().is_empty() {
        return if permission.is_white_listed(&to.path) {
            Decision::Proceed
        } else {
            Decision::Redirect(Redirect::to_login(to, None))
        };
    }

    match source.fetch_profile().await {
        Ok(()) if name.is_some_and(|n| table.has_route(n)) => Decision::Proceed,
        Ok(()) => Decision::Redirect(Redirect::to_root()),
        Err(e) => Decision::Redirect(Redirect::to_login(to, Some(e))),
    }
}

/// 路由切换完成后的处理：到达登录页即登出
pub fn after_each<S: ProfileSource + ?Sized>(to: &Location, source: &S) {
    if to.path == LOGIN_PATH {
        source.logout();
    }
}
