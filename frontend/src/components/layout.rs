//! 侧边栏布局
//!
//! 菜单由路由表生成，头部显示面包屑、后端版本、语言切换与用户菜单。

use leptos::prelude::*;

use crate::app::use_app;
use crate::components::icons::{Languages, LogOut, User, route_icon};
use crate::config::{LOGIN_PATH, MENU_ACTIVE_MAX_LEVEL};
use crate::i18n::{I18n, Locale};
use crate::routes::{RouteDescriptor, active_path};
use crate::web::router::{Link, use_router};

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    let app = use_app();
    let router = use_router();
    let i18n = app.i18n;

    let active = Memo::new(move |_| active_path(&router.path(), MENU_ACTIVE_MAX_LEVEL));
    let breadcrumb = move || {
        router
            .current()
            .with(|c| c.as_ref().and_then(|c| c.matched))
            .map(|m| m.breadcrumb(i18n.locale()))
            .unwrap_or_default()
            .into_iter()
            .map(|title| view! { <li>{title}</li> })
            .collect_view()
    };

    let table = app.permission.routers();
    let expanded = table.expanded_routes();
    let menu = table
        .menu()
        .into_iter()
        .map(|route| {
            let open = opens_by_default(&expanded, route);
            view! { <MenuEntry route=route active=active open=open i18n=i18n /> }
        })
        .collect_view();

    view! {
        <div class="flex min-h-screen bg-base-200">
            <aside class="w-60 shrink-0 bg-base-100 shadow-xl">
                <div class="p-5 text-xl font-bold text-primary">"Mikan"</div>
                <ul class="menu w-full gap-1">{menu}</ul>
            </aside>

            <div class="flex-1 flex flex-col min-w-0">
                <header class="navbar bg-base-100 shadow px-6">
                    <div class="flex-1 breadcrumbs text-sm">
                        <ul>{breadcrumb}</ul>
                    </div>
                    <div class="flex-none gap-2">
                        <span class="badge badge-neutral hidden md:inline-flex">
                            {move || i18n.t("layout.header.version")} " " {move || app.user.version()}
                        </span>
                        <LocaleSwitch i18n=i18n />
                        <div class="dropdown dropdown-end">
                            <div tabindex="0" role="button" class="btn btn-ghost gap-2">
                                <User attr:class="h-4 w-4" />
                                {move || app.user.user_name()}
                            </div>
                            <ul tabindex="0" class="dropdown-content z-[1] menu p-2 shadow bg-base-100 rounded-box w-44">
                                <li>
                                    // 进入登录页时会话由后置守卫清空
                                    <a on:click=move |_| router.navigate(LOGIN_PATH) class="text-error">
                                        <LogOut attr:class="h-4 w-4" />
                                        {move || i18n.t("layout.header.signOut")}
                                    </a>
                                </li>
                            </ul>
                        </div>
                    </div>
                </header>

                <main class="p-6">{children()}</main>
            </div>
        </div>
    }
}

/// 分组菜单是否默认展开
fn opens_by_default(expanded: &[String], route: &RouteDescriptor) -> bool {
    expanded.iter().any(|path| path == route.path)
}

/// 菜单项，`single` 路由直接指向唯一子页面
#[component]
fn MenuEntry(
    route: &'static RouteDescriptor,
    active: Memo<String>,
    /// 默认展开
    open: bool,
    i18n: I18n,
) -> impl IntoView {
    let label = move || {
        route
            .meta
            .title
            .map(|t| t.get(i18n.locale()))
            .unwrap_or(route.path)
    };

    if route.meta.single || route.children.is_empty() {
        let is_active = move || active.get().starts_with(route.path);
        return view! {
            <li>
                <Link to=route.menu_target() active=is_active>
                    {route_icon(route.meta.icon)}
                    {label}
                </Link>
            </li>
        }
        .into_any();
    }

    let children = route
        .children
        .iter()
        .filter(|child| !child.meta.hidden)
        .map(|child| {
            let target = route.child_path(child);
            let current = target.clone();
            let is_active = move || active.get() == current;
            let child_label = move || {
                child
                    .meta
                    .title
                    .map(|t| t.get(i18n.locale()))
                    .unwrap_or(child.path)
            };
            view! {
                <li>
                    <Link to=target active=is_active>{child_label}</Link>
                </li>
            }
        })
        .collect_view();

    view! {
        <li>
            <details open=move || open || active.get().starts_with(route.path)>
                <summary>
                    {route_icon(route.meta.icon)}
                    {label}
                </summary>
                <ul>{children}</ul>
            </details>
        </li>
    }
    .into_any()
}

/// 语言切换
#[component]
fn LocaleSwitch(i18n: I18n) -> impl IntoView {
    view! {
        <div class="dropdown dropdown-end">
            <div tabindex="0" role="button" class="btn btn-ghost btn-square">
                <Languages attr:class="h-5 w-5" />
            </div>
            <ul tabindex="0" class="dropdown-content z-[1] menu p-2 shadow bg-base-100 rounded-box w-36">
                {Locale::ALL
                    .into_iter()
                    .map(|locale| {
                        view! {
                            <li>
                                <a
                                    class:menu-active=move || i18n.locale() == locale
                                    on:click=move |_| i18n.set_locale(locale)
                                >
                                    {locale.label()}
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::{RouteMeta, RouteTable};

    static CHILDREN: [RouteDescriptor; 1] = [RouteDescriptor {
        path: "list",
        name: Some("FeedList"),
        meta: RouteMeta {
            expanded: true,
            ..RouteMeta::NONE
        },
        ..RouteDescriptor::EMPTY
    }];

    static TABLE: [RouteDescriptor; 2] = [
        RouteDescriptor {
            path: "/feed",
            children: &CHILDREN,
            ..RouteDescriptor::EMPTY
        },
        RouteDescriptor {
            path: "/other",
            ..RouteDescriptor::EMPTY
        },
    ];

    #[test]
    fn groups_with_expanded_children_open_by_default() {
        let expanded = RouteTable::with_routes(&TABLE).expanded_routes();
        assert!(opens_by_default(&expanded, &TABLE[0]));
        assert!(!opens_by_default(&expanded, &TABLE[1]));
    }
}
