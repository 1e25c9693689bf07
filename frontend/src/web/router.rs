//! 路由服务模块 - 核心引擎
//!
//! 封装了 web_sys 的 History API，所有对 window.history 的操作都集中在此模块。
//! 导航流程："解析 -> 守卫 -> 提交 -> 后置处理"。
//!
//! 导航是串行的：后发起的导航会使仍在等待用户信息请求的旧导航失效，
//! 旧导航完成后直接丢弃结果。

use leptos::logging::error;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::prelude::*;
use web_sys::{ScrollBehavior, ScrollToOptions};

use super::route::Location;
use crate::app::AppContext;
use crate::components::layout::Layout;
use crate::components::result::{ResultKind, ResultPage};
use crate::navigation::run_navigation;
use crate::routes::RouteMatch;

/// 获取当前浏览器地址（path + query）
fn current_url() -> String {
    web_sys::window()
        .map(|w| w.location())
        .map(|l| {
            let path = l.pathname().unwrap_or_else(|_| "/".to_string());
            let search = l.search().unwrap_or_default();
            format!("{}{}", path, search)
        })
        .unwrap_or_else(|| "/".to_string())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HistoryMode {
    Push,
    Replace,
}

/// 写入 History 状态（内部工具函数）
fn write_history(url: &str, mode: HistoryMode) {
    let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else {
        return;
    };
    let result = match mode {
        HistoryMode::Push => history.push_state_with_url(&JsValue::NULL, "", Some(url)),
        HistoryMode::Replace => history.replace_state_with_url(&JsValue::NULL, "", Some(url)),
    };
    if let Err(e) = result {
        error!("[Router] history update failed: {:?}", e);
    }
}

/// 平滑滚动到页面顶部
fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

/// 已提交的路由
#[derive(Debug, Clone)]
pub struct CurrentRoute {
    pub location: Location,
    pub matched: Option<RouteMatch>,
}

impl CurrentRoute {
    fn in_layout(&self) -> bool {
        self.matched.is_some_and(|m| m.layout)
    }

    fn render(&self) -> AnyView {
        match self.matched.and_then(|m| m.page) {
            Some(page) => page(),
            None => view! { <ResultPage kind=ResultKind::NotFound /> }.into_any(),
        }
    }
}

/// 路由器服务
///
/// 封装所有路由操作，通过 Signal 驱动界面更新。
#[derive(Clone, Copy)]
pub struct RouterService {
    /// 当前路由，首次导航完成前为 `None`
    current: RwSignal<Option<CurrentRoute>>,
    /// 导航序号，用于丢弃过期的导航
    generation: StoredValue<u64>,
    app: AppContext,
}

impl RouterService {
    fn new(app: AppContext) -> Self {
        Self {
            current: RwSignal::new(None),
            generation: StoredValue::new(0),
            app,
        }
    }

    /// 当前路由信号
    pub fn current(&self) -> RwSignal<Option<CurrentRoute>> {
        self.current
    }

    /// 当前路径（响应式），用于菜单高亮
    pub fn path(&self) -> String {
        self.current
            .with(|c| c.as_ref().map(|c| c.location.path.clone()))
            .unwrap_or_default()
    }

    /// 当前地址的查询参数（非响应式）
    pub fn query_value(&self, key: &str) -> Option<String> {
        self.current.with_untracked(|c| {
            c.as_ref()
                .and_then(|c| c.location.query_value(key).map(str::to_string))
        })
    }

    /// 导航到指定地址，写入新的历史记录
    pub fn navigate(&self, url: &str) {
        self.start(url.to_string(), HistoryMode::Push);
    }

    /// 导航到指定地址，替换当前历史记录
    pub fn replace(&self, url: &str) {
        self.start(url.to_string(), HistoryMode::Replace);
    }

    fn start(&self, url: String, mode: HistoryMode) {
        let generation = self.generation.get_value() + 1;
        self.generation.set_value(generation);
        let router = *self;
        spawn_local(async move { router.run(url, mode, generation).await });
    }

    fn is_stale(&self, generation: u64) -> bool {
        self.generation.get_value() != generation
    }

    /// **核心方法：导航与守卫**
    ///
    /// 流程见 [`run_navigation`]，这里只负责把结果写入浏览器与当前路由。
    async fn run(self, url: String, mode: HistoryMode, generation: u64) {
        let app = self.app;
        run_navigation(
            &url,
            &app.permission,
            &app,
            app.progress,
            || self.is_stale(generation),
            |err| app.notify_error(err),
            |to, matched| self.commit(to, matched, mode),
        )
        .await;
    }

    fn commit(&self, to: &Location, matched: Option<RouteMatch>, mode: HistoryMode) {
        write_history(&to.full_path, mode);
        self.current.set(Some(CurrentRoute {
            location: to.clone(),
            matched,
        }));
        scroll_to_top();
    }

    /// 初始化浏览器后退/前进按钮监听
    fn init_popstate_listener(&self) {
        let router = *self;
        let closure = Closure::<dyn Fn()>::new(move || {
            router.replace(&current_url());
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // 泄漏闭包以保持监听器存活
        closure.forget();
    }
}

/// 提供路由服务到 Context 并完成首次导航
fn provide_router(app: AppContext) -> RouterService {
    let router = RouterService::new(app);
    router.init_popstate_listener();
    provide_context(router);
    router.replace(&current_url());
    router
}

/// 从 Context 获取路由服务
pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

// ============================================================================
// UI 组件
// ============================================================================

/// 路由器根组件
///
/// 提供路由上下文，应在 App 根部使用。
#[component]
pub fn Router(app: AppContext, children: Children) -> impl IntoView {
    provide_router(app);
    children()
}

/// 路由出口组件
///
/// 带布局的页面渲染在侧边栏布局中，其余页面（登录页）直接渲染。
#[component]
pub fn RouterOutlet() -> impl IntoView {
    let router = use_router();
    let in_layout = Memo::new(move |_| {
        router
            .current()
            .with(|c| c.as_ref().is_some_and(CurrentRoute::in_layout))
    });
    let page = move || router.current().get().map(|c| c.render());

    view! {
        <Show when=move || in_layout.get() fallback=page>
            <Layout>{page}</Layout>
        </Show>
    }
}

/// 站内链接，点击时交给路由服务处理
#[component]
pub fn Link(
    /// 目标地址
    #[prop(into)]
    to: String,
    /// 是否高亮
    #[prop(optional, into)]
    active: Option<Signal<bool>>,
    children: Children,
) -> impl IntoView {
    let router = use_router();
    let target = to.clone();
    let on_click = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        router.navigate(&target);
    };

    view! {
        <a
            href=to
            class:menu-active=move || active.is_some_and(|a| a.get())
            on:click=on_click
        >
            {children()}
        </a>
    }
}
