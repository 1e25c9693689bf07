use leptos::prelude::*;
use leptos::task::spawn_local;
use mikan_shared::{CODE_ACCOUNT_MISMATCH, CODE_PASSWORD_MISMATCH, LoginParam};

use crate::app::use_app;
use crate::components::icons::FilmIcon;
use crate::config::{REDIRECT_QUERY_KEY, ROOT_PATH};
use crate::error::AuthError;
use crate::web::router::use_router;

/// 登录成功后的跳转地址
///
/// `redirect` 参数是编码过一次的站内地址，解码失败或不是站内路径时回到首页。
fn redirect_target(raw: Option<&str>) -> String {
    raw.and_then(|raw| urlencoding::decode(raw).ok())
        .map(|target| target.into_owned())
        .filter(|target| target.starts_with('/') && !target.starts_with("//"))
        .unwrap_or_else(|| ROOT_PATH.to_string())
}

/// 登录失败时对应的提示文案
fn rejection_key(code: u16) -> &'static str {
    match code {
        CODE_ACCOUNT_MISMATCH => "pages.login.result.username_error",
        CODE_PASSWORD_MISMATCH => "pages.login.result.password_error",
        _ => "pages.login.result.other_error",
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let app = use_app();
    let router = use_router();
    let i18n = app.i18n;

    let account = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let is_submitting = RwSignal::new(false);
    let error_key = RwSignal::new(Option::<&'static str>::None);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if account.get().is_empty() {
            error_key.set(Some("pages.login.required.account"));
            return;
        }
        if password.get().is_empty() {
            error_key.set(Some("pages.login.required.password"));
            return;
        }

        is_submitting.set(true);
        error_key.set(None);

        let param = LoginParam {
            account: account.get(),
            password: password.get(),
        };
        spawn_local(async move {
            match app.user.login(&app.api(), &param).await {
                Ok(()) => {
                    app.messages.success(i18n.t("pages.login.result.success"));
                    let target = redirect_target(router.query_value(REDIRECT_QUERY_KEY).as_deref());
                    router.navigate(&target);
                }
                Err(AuthError::Rejected(code)) => error_key.set(Some(rejection_key(code))),
                Err(AuthError::Api(e)) => app.notify_error(&e),
            }
            is_submitting.set(false);
        });
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-4">
                    <div class="flex flex-col items-center gap-2">
                        <div class="p-3 bg-primary/10 rounded-2xl text-primary">
                            <FilmIcon attr:class="h-8 w-8" />
                        </div>
                        <h1 class="text-3xl font-bold">
                            {move || i18n.t("pages.login.loginTitle")} " Mikan"
                        </h1>
                        <p class="text-base-content/70">{move || i18n.t("pages.login.subtitle")}</p>
                    </div>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <Show when=move || error_key.get().is_some()>
                            <div role="alert" class="alert alert-error text-sm py-2">
                                <span>{move || error_key.get().map(|key| i18n.t(key))}</span>
                            </div>
                        </Show>

                        <div class="form-control">
                            <input
                                id="account"
                                type="text"
                                autocomplete="username"
                                placeholder=move || i18n.t("pages.login.input.account")
                                on:input=move |ev| account.set(event_target_value(&ev))
                                prop:value=account
                                class="input input-bordered w-full"
                            />
                        </div>
                        <div class="form-control">
                            <input
                                id="password"
                                type="password"
                                autocomplete="current-password"
                                placeholder=move || i18n.t("pages.login.input.password")
                                on:input=move |ev| password.set(event_target_value(&ev))
                                prop:value=password
                                class="input input-bordered w-full"
                            />
                        </div>
                        <div class="form-control mt-6">
                            <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                {move || if is_submitting.get() {
                                    view! { <span class="loading loading-spinner"></span> }.into_any()
                                } else {
                                    ().into_any()
                                }}
                                {move || i18n.t("pages.login.signIn")}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redirect_target_decodes_once() {
        assert_eq!(redirect_target(Some("%2Frss%2Flist%3Fname%3Da")), "/rss/list?name=a");
        assert_eq!(redirect_target(Some("/setting/index")), "/setting/index");
    }

    #[test]
    fn redirect_target_falls_back_to_root() {
        assert_eq!(redirect_target(None), "/");
        assert_eq!(redirect_target(Some("")), "/");
        assert_eq!(redirect_target(Some("https%3A%2F%2Fevil.example")), "/");
        assert_eq!(redirect_target(Some("%2F%2Fevil.example")), "/");
    }

    #[test]
    fn rejection_codes_map_to_messages() {
        assert_eq!(rejection_key(421), "pages.login.result.username_error");
        assert_eq!(rejection_key(422), "pages.login.result.password_error");
        assert_eq!(rejection_key(401), "pages.login.result.other_error");
    }
}
