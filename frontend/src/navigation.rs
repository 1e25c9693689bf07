//! 导航流程
//!
//! 解析地址、执行守卫并跟随重定向，直到放行、被新导航取代或超过重定向上限。
//! 写历史记录、更新当前路由等浏览器动作由调用方通过 `commit` 传入。

use leptos::logging::{error, log};

use crate::error::ApiError;
use crate::guard::{Decision, ProfileSource, after_each, before_each};
use crate::routes::RouteMatch;
use crate::store::permission::PermissionStore;
use crate::web::progress::Progress;
use crate::web::route::Location;

/// 守卫连续重定向的上限
pub const MAX_GUARD_REDIRECTS: usize = 8;

/// 一次导航的结果
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// 已提交到该地址
    Committed(Location),
    /// 等待守卫期间被后发起的导航取代，结果被丢弃
    Superseded,
    /// 重定向次数超过上限，放弃导航
    TooManyRedirects,
}

/// 执行一次导航
///
/// - `is_stale`: 守卫返回后调用，为 `true` 时丢弃本次导航
/// - `notify`: 守卫因接口错误重定向时调用
/// - `commit`: 放行时调用一次，随后执行 [`after_each`]
///
/// 进度条在函数返回时结束，无论哪条路径退出。
pub async fn run_navigation<S, F, N, C>(
    url: &str,
    permission: &PermissionStore,
    source: &S,
    progress: Progress,
    is_stale: F,
    mut notify: N,
    commit: C,
) -> Outcome
where
    S: ProfileSource + ?Sized,
    F: Fn() -> bool,
    N: FnMut(&ApiError),
    C: FnOnce(&Location, Option<RouteMatch>),
{
    let _progress = progress.start();
    let table = permission.routers();
    let mut url = url.to_string();

    for _ in 0..MAX_GUARD_REDIRECTS {
        let (to, matched) = table.resolve(&Location::parse(&url));
        let name = matched.and_then(|m| m.name);
        let decision = before_each(&to, name, &table, permission, source).await;

        if is_stale() {
            log!("[Router] navigation to {} superseded", to);
            return Outcome::Superseded;
        }

        match decision {
            Decision::Proceed => {
                commit(&to, matched);
                after_each(&to, source);
                return Outcome::Committed(to);
            }
            Decision::Redirect(redirect) => {
                log!("[Router] {} -> {}", to, redirect.url());
                if let Some(err) = &redirect.error {
                    notify(err);
                }
                url = redirect.url();
            }
        }
    }

    error!("[Router] too many redirects, giving up on {}", url);
    Outcome::TooManyRedirects
}

#[cfg(test)]
mod tests;
