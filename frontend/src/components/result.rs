//! 结果页：操作成功、失败以及各类错误状态

use leptos::prelude::*;

use crate::app::use_app;
use crate::components::icons::{AlertTriangle, CheckCircle, SettingIcon, WifiOff, XCircle};
use crate::config::ROOT_PATH;
use crate::web::router::Link;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultKind {
    Success,
    Fail,
    NetworkError,
    Forbidden,
    NotFound,
    ServerError,
    BrowserIncompatible,
    Maintenance,
}

impl ResultKind {
    pub fn message_key(&self) -> &'static str {
        match self {
            ResultKind::Success => "pages.result.success",
            ResultKind::Fail => "pages.result.fail",
            ResultKind::NetworkError => "pages.result.network_error",
            ResultKind::Forbidden => "pages.result.forbidden",
            ResultKind::NotFound => "pages.result.not_found",
            ResultKind::ServerError => "pages.result.server_error",
            ResultKind::BrowserIncompatible => "pages.result.browser_incompatible",
            ResultKind::Maintenance => "pages.result.maintenance",
        }
    }

    /// HTTP 状态类页面显示的状态码
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ResultKind::Forbidden => Some(403),
            ResultKind::NotFound => Some(404),
            ResultKind::ServerError => Some(500),
            _ => None,
        }
    }

    fn tone(&self) -> &'static str {
        match self {
            ResultKind::Success => "text-success",
            ResultKind::Maintenance | ResultKind::BrowserIncompatible => "text-warning",
            _ => "text-error",
        }
    }

    fn icon(&self) -> AnyView {
        match self {
            ResultKind::Success => view! { <CheckCircle attr:class="h-20 w-20" /> }.into_any(),
            ResultKind::NetworkError => view! { <WifiOff attr:class="h-20 w-20" /> }.into_any(),
            ResultKind::Maintenance => view! { <SettingIcon attr:class="h-20 w-20" /> }.into_any(),
            ResultKind::BrowserIncompatible => {
                view! { <AlertTriangle attr:class="h-20 w-20" /> }.into_any()
            }
            _ => view! { <XCircle attr:class="h-20 w-20" /> }.into_any(),
        }
    }
}

#[component]
pub fn ResultPage(kind: ResultKind) -> impl IntoView {
    let i18n = use_app().i18n;

    let headline = match kind.status_code() {
        Some(code) => view! { <h1 class="text-7xl font-bold">{code}</h1> }.into_any(),
        None => kind.icon(),
    };

    view! {
        <div class="flex items-center justify-center py-24">
            <div class="text-center space-y-4">
                <div class=format!("flex justify-center {}", kind.tone())>{headline}</div>
                <p class="text-xl">{move || i18n.t(kind.message_key())}</p>
                <Link to=ROOT_PATH>
                    <span class="btn btn-primary">{move || i18n.t("pages.result.back_home")}</span>
                </Link>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{Locale, translate};

    const ALL: [ResultKind; 8] = [
        ResultKind::Success,
        ResultKind::Fail,
        ResultKind::NetworkError,
        ResultKind::Forbidden,
        ResultKind::NotFound,
        ResultKind::ServerError,
        ResultKind::BrowserIncompatible,
        ResultKind::Maintenance,
    ];

    #[test]
    fn every_kind_has_a_translation() {
        for kind in ALL {
            let key = kind.message_key();
            assert_ne!(translate(Locale::ZhCn, key), key, "{kind:?}");
            assert_ne!(translate(Locale::EnUs, key), key, "{kind:?}");
        }
    }

    #[test]
    fn only_http_pages_show_a_code() {
        let codes: Vec<_> = ALL.iter().filter_map(ResultKind::status_code).collect();
        assert_eq!(codes, vec![403, 404, 500]);
    }
}
