//! 路由表
//!
//! 声明式、不可变的路由树。顶层路由带布局与菜单元信息，子路由路径相对于父路由。
//! [`RouteTable`] 负责把一个 [`Location`] 解析为已注册的路由（沿途跟随重定向），
//! 并为菜单提供排序与展开信息。

use leptos::prelude::*;

use crate::components::bangumi::BangumiPage;
use crate::components::icons::{FilmIcon, RssIcon};
use crate::components::login::LoginPage;
use crate::components::result::{ResultKind, ResultPage};
use crate::components::rss::RssPage;
use crate::components::setting::SettingPage;
use crate::i18n::Locale;
use crate::web::route::Location;

/// 页面渲染函数
pub type PageFn = fn() -> AnyView;

/// 重定向链的最大长度，防止配置错误导致死循环
const MAX_REDIRECTS: usize = 8;

/// 菜单图标
///
/// `Named` 按名称从图标集中查找，`Custom` 直接给出渲染函数。
#[derive(Clone, Copy)]
pub enum RouteIcon {
    Named(&'static str),
    Custom(fn() -> AnyView),
}

impl std::fmt::Debug for RouteIcon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RouteIcon::Named(name) => f.debug_tuple("Named").field(name).finish(),
            RouteIcon::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// 双语标题
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalizedTitle {
    pub zh_cn: &'static str,
    pub en_us: &'static str,
}

impl LocalizedTitle {
    pub fn get(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::ZhCn => self.zh_cn,
            Locale::EnUs => self.en_us,
        }
    }
}

/// 路由元信息
#[derive(Debug, Clone, Copy)]
pub struct RouteMeta {
    pub title: Option<LocalizedTitle>,
    pub icon: Option<RouteIcon>,
    /// 菜单排序，越小越靠前
    pub order_no: u32,
    /// 只有一个子页面，菜单中不展开
    pub single: bool,
    pub hidden: bool,
    pub expanded: bool,
    /// 头部不显示面包屑
    pub hidden_breadcrumb: bool,
}

impl RouteMeta {
    pub const NONE: RouteMeta = RouteMeta {
        title: None,
        icon: None,
        order_no: 0,
        single: false,
        hidden: false,
        expanded: false,
        hidden_breadcrumb: false,
    };

    pub const fn titled(zh_cn: &'static str, en_us: &'static str) -> RouteMeta {
        RouteMeta {
            title: Some(LocalizedTitle { zh_cn, en_us }),
            ..RouteMeta::NONE
        }
    }
}

/// 路由描述
#[derive(Debug, Clone, Copy)]
pub struct RouteDescriptor {
    /// 顶层为绝对路径，子路由为相对路径
    pub path: &'static str,
    pub name: Option<&'static str>,
    pub redirect: Option<&'static str>,
    /// 是否渲染在侧边栏布局中（子路由继承父路由）
    pub layout: bool,
    pub page: Option<PageFn>,
    pub meta: RouteMeta,
    pub children: &'static [RouteDescriptor],
}

impl RouteDescriptor {
    pub(crate) const EMPTY: RouteDescriptor = RouteDescriptor {
        path: "",
        name: None,
        redirect: None,
        layout: false,
        page: None,
        meta: RouteMeta::NONE,
        children: &[],
    };

    /// 子路由的完整路径
    pub fn child_path(&self, child: &RouteDescriptor) -> String {
        format!("{}/{}", self.path.trim_end_matches('/'), child.path)
    }

    /// 菜单项点击后的目标路径
    pub fn menu_target(&self) -> String {
        match (self.meta.single, self.children.first()) {
            (true, Some(child)) => self.child_path(child),
            _ => self.redirect.unwrap_or(self.path).to_string(),
        }
    }
}

// =========================================================
// 路由声明
// =========================================================

static ROUTER_LIST: &[RouteDescriptor] = &[
    RouteDescriptor {
        path: "/bangumi",
        name: Some("bangumi"),
        redirect: Some("/bangumi/list"),
        layout: true,
        meta: RouteMeta {
            icon: Some(RouteIcon::Custom(film_icon)),
            order_no: 0,
            single: true,
            ..RouteMeta::titled("番剧追踪", "Bangumi Tracking")
        },
        children: &[RouteDescriptor {
            path: "list",
            name: Some("BangumiList"),
            page: Some(bangumi_list),
            meta: RouteMeta::titled("番剧列表", "BangumiList"),
            ..RouteDescriptor::EMPTY
        }],
        ..RouteDescriptor::EMPTY
    },
    RouteDescriptor {
        path: "/rss",
        name: Some("rss"),
        redirect: Some("/rss/list"),
        layout: true,
        meta: RouteMeta {
            icon: Some(RouteIcon::Custom(rss_icon)),
            order_no: 1,
            single: true,
            ..RouteMeta::titled("订阅管理", "Subscription")
        },
        children: &[RouteDescriptor {
            path: "list",
            name: Some("RssList"),
            page: Some(rss_list),
            meta: RouteMeta::titled("RSS 列表", "RssList"),
            ..RouteDescriptor::EMPTY
        }],
        ..RouteDescriptor::EMPTY
    },
    RouteDescriptor {
        path: "/result",
        name: Some("result"),
        redirect: Some("/result/success"),
        layout: true,
        meta: RouteMeta {
            icon: Some(RouteIcon::Named("check-circle")),
            order_no: 100,
            ..RouteMeta::titled("结果页", "Result")
        },
        children: &[
            RouteDescriptor {
                path: "success",
                name: Some("ResultSuccess"),
                page: Some(result_success),
                meta: RouteMeta::titled("成功页", "Success"),
                ..RouteDescriptor::EMPTY
            },
            RouteDescriptor {
                path: "fail",
                name: Some("ResultFail"),
                page: Some(result_fail),
                meta: RouteMeta::titled("失败页", "Fail"),
                ..RouteDescriptor::EMPTY
            },
            RouteDescriptor {
                path: "network-error",
                name: Some("ResultNetworkError"),
                page: Some(result_network_error),
                meta: RouteMeta::titled("网络异常", "Network Error"),
                ..RouteDescriptor::EMPTY
            },
            RouteDescriptor {
                path: "403",
                name: Some("Result403"),
                page: Some(result_403),
                meta: RouteMeta::titled("无权限", "Forbidden"),
                ..RouteDescriptor::EMPTY
            },
            RouteDescriptor {
                path: "404",
                name: Some("Result404"),
                page: Some(result_404),
                meta: RouteMeta::titled("访问页面不存在页", "Not Found"),
                ..RouteDescriptor::EMPTY
            },
            RouteDescriptor {
                path: "500",
                name: Some("Result500"),
                page: Some(result_500),
                meta: RouteMeta::titled("服务器出错页", "Server Error"),
                ..RouteDescriptor::EMPTY
            },
            RouteDescriptor {
                path: "browser-incompatible",
                name: Some("ResultBrowserIncompatible"),
                page: Some(result_browser_incompatible),
                meta: RouteMeta::titled("浏览器不兼容页", "BrowserIncompatible"),
                ..RouteDescriptor::EMPTY
            },
            RouteDescriptor {
                path: "maintenance",
                name: Some("ResultMaintenance"),
                page: Some(result_maintenance),
                meta: RouteMeta::titled("系统维护页", "Maintenance"),
                ..RouteDescriptor::EMPTY
            },
        ],
        ..RouteDescriptor::EMPTY
    },
    RouteDescriptor {
        path: "/setting",
        name: Some("setting"),
        redirect: Some("/setting/index"),
        layout: true,
        meta: RouteMeta {
            icon: Some(RouteIcon::Named("setting-1")),
            order_no: 50,
            single: true,
            ..RouteMeta::titled("系统设置", "Setting")
        },
        children: &[RouteDescriptor {
            path: "index",
            name: Some("SettingIndex"),
            page: Some(setting_index),
            meta: RouteMeta::titled("系统设置", "Setting"),
            ..RouteDescriptor::EMPTY
        }],
        ..RouteDescriptor::EMPTY
    },
    RouteDescriptor {
        path: "/login",
        name: Some("login"),
        page: Some(login),
        ..RouteDescriptor::EMPTY
    },
    RouteDescriptor {
        path: "/",
        redirect: Some("/bangumi/list"),
        ..RouteDescriptor::EMPTY
    },
];

fn film_icon() -> AnyView {
    view! { <FilmIcon attr:class="h-5 w-5" /> }.into_any()
}

fn rss_icon() -> AnyView {
    view! { <RssIcon attr:class="h-5 w-5" /> }.into_any()
}

fn bangumi_list() -> AnyView {
    view! { <BangumiPage /> }.into_any()
}

fn rss_list() -> AnyView {
    view! { <RssPage /> }.into_any()
}

fn setting_index() -> AnyView {
    view! { <SettingPage /> }.into_any()
}

fn login() -> AnyView {
    view! { <LoginPage /> }.into_any()
}

fn result_success() -> AnyView {
    view! { <ResultPage kind=ResultKind::Success /> }.into_any()
}

fn result_fail() -> AnyView {
    view! { <ResultPage kind=ResultKind::Fail /> }.into_any()
}

fn result_network_error() -> AnyView {
    view! { <ResultPage kind=ResultKind::NetworkError /> }.into_any()
}

fn result_403() -> AnyView {
    view! { <ResultPage kind=ResultKind::Forbidden /> }.into_any()
}

fn result_404() -> AnyView {
    view! { <ResultPage kind=ResultKind::NotFound /> }.into_any()
}

fn result_500() -> AnyView {
    view! { <ResultPage kind=ResultKind::ServerError /> }.into_any()
}

fn result_browser_incompatible() -> AnyView {
    view! { <ResultPage kind=ResultKind::BrowserIncompatible /> }.into_any()
}

fn result_maintenance() -> AnyView {
    view! { <ResultPage kind=ResultKind::Maintenance /> }.into_any()
}

// =========================================================
// 路由表
// =========================================================

/// 解析结果：命中的路由
#[derive(Debug, Clone, Copy)]
pub struct RouteMatch {
    pub name: Option<&'static str>,
    pub page: Option<PageFn>,
    pub layout: bool,
    pub title: Option<LocalizedTitle>,
    pub parent_title: Option<LocalizedTitle>,
    pub hidden_breadcrumb: bool,
}

impl RouteMatch {
    /// 面包屑：父路由标题（如有）与当前标题
    pub fn breadcrumb(&self, locale: Locale) -> Vec<&'static str> {
        if self.hidden_breadcrumb {
            return Vec::new();
        }
        self.parent_title
            .into_iter()
            .chain(self.title)
            .map(|t| t.get(locale))
            .collect()
    }
}

/// 不可变路由表
#[derive(Debug, Clone, Copy)]
pub struct RouteTable {
    routes: &'static [RouteDescriptor],
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::new()
    }
}

impl RouteTable {
    pub fn new() -> Self {
        Self::with_routes(ROUTER_LIST)
    }

    pub fn with_routes(routes: &'static [RouteDescriptor]) -> Self {
        Self { routes }
    }

    pub fn routes(&self) -> &'static [RouteDescriptor] {
        self.routes
    }

    /// 精确匹配一个路径，不跟随重定向，返回命中的路由及其父路由
    fn lookup(
        &self,
        path: &str,
    ) -> Option<(&'static RouteDescriptor, Option<&'static RouteDescriptor>)> {
        for route in self.routes {
            if route.path == path {
                return Some((route, None));
            }
            for child in route.children {
                if route.child_path(child) == path {
                    return Some((child, Some(route)));
                }
            }
        }
        None
    }

    /// 解析目标地址
    ///
    /// 沿声明的重定向走到最终位置（保留 query），返回最终位置与命中的路由。
    /// 未注册的路径返回 `None`。
    pub fn resolve(&self, to: &Location) -> (Location, Option<RouteMatch>) {
        let mut current = to.clone();
        for _ in 0..MAX_REDIRECTS {
            let Some((route, parent)) = self.lookup(&current.path) else {
                return (current, None);
            };
            match route.redirect {
                Some(target) => current = current.with_path(target),
                None => {
                    let matched = RouteMatch {
                        name: route.name,
                        page: route.page,
                        layout: parent.map_or(route.layout, |p| p.layout),
                        title: route.meta.title,
                        parent_title: parent.and_then(|p| p.meta.title),
                        hidden_breadcrumb: route.meta.hidden_breadcrumb,
                    };
                    return (current, Some(matched));
                }
            }
        }
        leptos::logging::warn!("[Router] redirect loop while resolving {}", to);
        (current, None)
    }

    /// 是否存在该名称的路由
    pub fn has_route(&self, name: &str) -> bool {
        self.routes.iter().any(|route| {
            route.name == Some(name) || route.children.iter().any(|c| c.name == Some(name))
        })
    }

    /// 侧边栏菜单：带标题且未隐藏的顶层路由，按 `order_no` 排序
    pub fn menu(&self) -> Vec<&'static RouteDescriptor> {
        let mut items: Vec<_> = self
            .routes
            .iter()
            .filter(|r| r.meta.title.is_some() && !r.meta.hidden)
            .collect();
        items.sort_by_key(|r| r.meta.order_no);
        items
    }

    /// 默认展开的菜单路径（去重，保持声明顺序）
    pub fn expanded_routes(&self) -> Vec<String> {
        let mut expanded: Vec<String> = Vec::new();
        let mut push = |path: String| {
            if !expanded.contains(&path) {
                expanded.push(path);
            }
        };
        for route in self.routes {
            if route.meta.expanded {
                push(route.path.to_string());
            }
            for child in route.children.iter().filter(|c| c.meta.expanded) {
                push(route.path.to_string());
                push(route.child_path(child));
            }
        }
        expanded
    }
}

/// 菜单高亮用的路径前缀：取前 `max_level` 段
///
/// `/rss/list/detail` 在 `max_level = 2` 时得到 `/rss/list`。
pub fn active_path(path: &str, max_level: usize) -> String {
    if path.is_empty() {
        return String::new();
    }
    path.split('/')
        .enumerate()
        .filter(|(index, _)| *index > 0 && *index <= max_level)
        .map(|(_, segment)| format!("/{}", segment))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(url: &str) -> (String, Option<&'static str>) {
        let (location, matched) = RouteTable::new().resolve(&Location::parse(url));
        (location.full_path, matched.and_then(|m| m.name))
    }

    #[test]
    fn root_redirects_to_bangumi_list() {
        assert_eq!(resolve("/"), ("/bangumi/list".to_string(), Some("BangumiList")));
    }

    #[test]
    fn parent_redirects_keep_query() {
        assert_eq!(
            resolve("/rss?name=mikan"),
            ("/rss/list?name=mikan".to_string(), Some("RssList"))
        );
        assert_eq!(resolve("/setting").1, Some("SettingIndex"));
        assert_eq!(resolve("/result").0, "/result/success");
    }

    #[test]
    fn children_inherit_layout() {
        let table = RouteTable::new();
        let (_, matched) = table.resolve(&Location::parse("/result/404"));
        let matched = matched.expect("registered");
        assert_eq!(matched.name, Some("Result404"));
        assert!(matched.layout);
        assert_eq!(matched.title.map(|t| t.get(Locale::EnUs)), Some("Not Found"));

        let (_, login) = table.resolve(&Location::parse("/login"));
        assert!(!login.expect("registered").layout);
    }

    #[test]
    fn breadcrumb_lists_parent_then_page() {
        let (_, matched) = RouteTable::new().resolve(&Location::parse("/rss"));
        let matched = matched.expect("registered");
        assert_eq!(matched.breadcrumb(Locale::ZhCn), vec!["订阅管理", "RSS 列表"]);
        assert_eq!(matched.breadcrumb(Locale::EnUs), vec!["Subscription", "RssList"]);

        let hidden = RouteMatch {
            hidden_breadcrumb: true,
            ..matched
        };
        assert!(hidden.breadcrumb(Locale::EnUs).is_empty());
    }

    #[test]
    fn unknown_path_has_no_route() {
        assert_eq!(resolve("/nowhere"), ("/nowhere".to_string(), None));
        assert_eq!(resolve("/bangumi/list/extra").1, None);
    }

    #[test]
    fn has_route_checks_parents_and_children() {
        let table = RouteTable::new();
        assert!(table.has_route("bangumi"));
        assert!(table.has_route("ResultMaintenance"));
        assert!(table.has_route("login"));
        assert!(!table.has_route("Overview"));
    }

    #[test]
    fn menu_is_ordered_and_skips_untitled() {
        let names: Vec<_> = RouteTable::new()
            .menu()
            .iter()
            .map(|r| r.name.unwrap_or_default())
            .collect();
        assert_eq!(names, vec!["bangumi", "rss", "setting", "result"]);
    }

    #[test]
    fn single_menu_entries_target_their_child() {
        let menu = RouteTable::new().menu();
        assert_eq!(menu[0].menu_target(), "/bangumi/list");
        assert_eq!(menu[3].menu_target(), "/result/success");
    }

    static EXPANDED: &[RouteDescriptor] = &[RouteDescriptor {
        path: "/result",
        children: &[
            RouteDescriptor {
                path: "success",
                meta: RouteMeta {
                    expanded: true,
                    ..RouteMeta::NONE
                },
                ..RouteDescriptor::EMPTY
            },
            RouteDescriptor {
                path: "fail",
                meta: RouteMeta {
                    expanded: true,
                    ..RouteMeta::NONE
                },
                ..RouteDescriptor::EMPTY
            },
        ],
        ..RouteDescriptor::EMPTY
    }];

    #[test]
    fn expanded_routes_are_unique() {
        assert!(RouteTable::new().expanded_routes().is_empty());
        assert_eq!(
            RouteTable::with_routes(EXPANDED).expanded_routes(),
            vec!["/result", "/result/success", "/result/fail"]
        );
    }

    #[test]
    fn active_path_truncates_levels() {
        assert_eq!(active_path("/rss/list/detail/1", 3), "/rss/list/detail");
        assert_eq!(active_path("/rss/list/detail", 2), "/rss/list");
        assert_eq!(active_path("/bangumi/list", 3), "/bangumi/list");
        assert_eq!(active_path("", 3), "");
    }
}
