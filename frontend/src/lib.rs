//! Mikan 管理界面
//!
//! 以 `AppContext` 为中心组织：
//! - `routes`: 路由表与菜单元信息
//! - `guard`: 导航守卫（登录与权限检查）
//! - `navigation`: 导航流程（守卫、重定向、提交）
//! - `store`: 用户会话与权限状态
//! - `web::router`: 路由服务（导航、历史记录、进度条）
//! - `components`: 页面与通用组件

mod api;
mod app;
mod config;
mod error;
mod guard;
mod i18n;
mod navigation;
mod routes;

mod store {
    pub mod permission;
    pub mod user;
}

mod components {
    pub mod bangumi;
    mod confirm_dialog;
    pub mod icons;
    pub mod layout;
    pub mod login;
    pub mod message;
    pub mod result;
    pub mod rss;
    pub mod setting;
}

// 浏览器 API 封装：HTTP、存储、历史记录
pub(crate) mod web {
    mod http;
    pub mod progress;
    pub mod route;
    pub mod router;
    mod storage;

    #[cfg(test)]
    pub(crate) use http::mock;
    pub use http::{FetchClient, HttpClient, HttpRequest, HttpResponse};
    pub use storage::BrowserStorage;
}

use leptos::prelude::*;

use crate::app::AppContext;
use crate::components::message::MessageHost;
use crate::web::router::{Router, RouterOutlet};

#[component]
pub fn App() -> impl IntoView {
    // 1. 恢复会话与语言
    let app = AppContext::restore();
    provide_context(app);

    // 2. 路由服务在 Router 中创建，首次导航同样经过守卫
    view! {
        <Show when=move || app.progress.is_active()>
            <progress class="progress progress-primary fixed top-0 left-0 z-50 h-1 w-full rounded-none"></progress>
        </Show>
        <MessageHost messages=app.messages />
        <Router app=app>
            <RouterOutlet />
        </Router>
    }
}
