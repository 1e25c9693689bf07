//! 系统设置页

use leptos::prelude::*;
use leptos::task::spawn_local;
use mikan_shared::Settings;

use crate::app::use_app;

/// 校验新密码
///
/// 两项都为空表示不修改密码。
fn password_change(password: &str, confirm: &str) -> Result<Option<String>, &'static str> {
    if password != confirm {
        return Err("pages.setting.placeholder.re_password");
    }
    Ok((!password.is_empty()).then(|| password.to_string()))
}

#[component]
fn Toggle(
    value: RwSignal<bool>,
    #[prop(into)] label: Signal<&'static str>,
    #[prop(into)] help: Signal<&'static str>,
    #[prop(into)] on_text: Signal<&'static str>,
    #[prop(into)] off_text: Signal<&'static str>,
) -> impl IntoView {
    view! {
        <fieldset class="fieldset">
            <legend class="fieldset-legend">{label}</legend>
            <label class="label cursor-pointer gap-3 justify-start">
                <input
                    type="checkbox"
                    class="toggle toggle-primary"
                    prop:checked=value
                    on:change=move |ev| value.set(event_target_checked(&ev))
                />
                <span>{move || if value.get() { on_text.get() } else { off_text.get() }}</span>
            </label>
            <p class="label text-xs">{help}</p>
        </fieldset>
    }
}

#[component]
pub fn SettingPage() -> impl IntoView {
    let app = use_app();
    let i18n = app.i18n;

    let loading = RwSignal::new(true);
    let is_saving = RwSignal::new(false);
    let default_status = RwSignal::new(false);
    let auth_intranet = RwSignal::new(false);
    let username = RwSignal::new(String::new());
    let editing_password = RwSignal::new(false);
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let error_key = RwSignal::new(Option::<&'static str>::None);

    let apply = move |settings: Settings| {
        default_status.set(settings.bangumi_default_status.unwrap_or_default());
        auth_intranet.set(settings.auth_intranet.unwrap_or_default());
        username.set(settings.username.unwrap_or_default());
    };

    let load = move || {
        loading.set(true);
        spawn_local(async move {
            match app.api().get_setting_info().await {
                Ok(settings) => apply(settings),
                Err(e) => app.notify_error(&e),
            }
            loading.set(false);
        });
    };
    load();

    let cancel_password = move |_| {
        editing_password.set(false);
        password.set(String::new());
        confirm.set(String::new());
        error_key.set(None);
    };

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let new_password = if editing_password.get_untracked() {
            match password_change(&password.get_untracked(), &confirm.get_untracked()) {
                Ok(value) => value,
                Err(key) => {
                    error_key.set(Some(key));
                    return;
                }
            }
        } else {
            None
        };
        error_key.set(None);
        is_saving.set(true);

        let username = username.get_untracked();
        let settings = Settings {
            bangumi_default_status: Some(default_status.get_untracked()),
            username: (!username.trim().is_empty()).then(|| username.trim().to_string()),
            password: new_password,
            auth_intranet: Some(auth_intranet.get_untracked()),
        };
        spawn_local(async move {
            match app.api().modify_setting(settings).await {
                Ok(()) => {
                    app.messages.success(i18n.t("pages.setting.hint.save_success"));
                    editing_password.set(false);
                    password.set(String::new());
                    confirm.set(String::new());
                    load();
                }
                Err(e) => app.notify_error(&e),
            }
            is_saving.set(false);
        });
    };

    let status_on = Signal::derive(move || i18n.t("pages.setting.status.enable"));
    let status_off = Signal::derive(move || i18n.t("pages.setting.status.disable"));

    view! {
        <div class="card bg-base-100 shadow-xl max-w-2xl">
            <Show
                when=move || !loading.get()
                fallback=|| view! {
                    <div class="card-body items-center py-12">
                        <span class="loading loading-spinner loading-lg text-primary"></span>
                    </div>
                }
            >
                <form class="card-body gap-6" on:submit=on_submit>
                    <section>
                        <h2 class="card-title mb-2">{move || i18n.t("pages.setting.title.bangumi")}</h2>
                        <Toggle
                            value=default_status
                            label=move || i18n.t("pages.setting.form.bangumi_default_status")
                            help=move || i18n.t("pages.setting.help.bangumi_default_status")
                            on_text=status_on
                            off_text=status_off
                        />
                    </section>

                    <section class="space-y-3">
                        <h2 class="card-title mb-2">{move || i18n.t("pages.setting.title.auth")}</h2>
                        <Toggle
                            value=auth_intranet
                            label=move || i18n.t("pages.setting.form.auth_intranet")
                            help=move || i18n.t("pages.setting.help.auth_intranet")
                            on_text=status_on
                            off_text=status_off
                        />
                        <fieldset class="fieldset">
                            <legend class="fieldset-legend">{move || i18n.t("pages.setting.form.username")}</legend>
                            <input
                                type="text"
                                class="input input-bordered w-full"
                                autocomplete="username"
                                prop:value=username
                                on:input=move |ev| username.set(event_target_value(&ev))
                            />
                        </fieldset>

                        <Show
                            when=move || editing_password.get()
                            fallback=move || view! {
                                <button
                                    type="button"
                                    class="btn btn-outline btn-sm"
                                    on:click=move |_| editing_password.set(true)
                                >
                                    {move || i18n.t("pages.setting.option.modify_password")}
                                </button>
                            }
                        >
                            <fieldset class="fieldset">
                                <legend class="fieldset-legend">{move || i18n.t("pages.setting.form.password")}</legend>
                                <input
                                    type="password"
                                    class="input input-bordered w-full"
                                    autocomplete="new-password"
                                    placeholder=move || i18n.t("pages.setting.placeholder.password")
                                    prop:value=password
                                    on:input=move |ev| password.set(event_target_value(&ev))
                                />
                            </fieldset>
                            <fieldset class="fieldset">
                                <legend class="fieldset-legend">{move || i18n.t("pages.setting.form.r_password")}</legend>
                                <input
                                    type="password"
                                    class="input input-bordered w-full"
                                    autocomplete="new-password"
                                    prop:value=confirm
                                    on:input=move |ev| confirm.set(event_target_value(&ev))
                                />
                            </fieldset>
                            <button type="button" class="btn btn-ghost btn-sm" on:click=cancel_password>
                                {move || i18n.t("pages.setting.option.cancel")}
                            </button>
                        </Show>
                    </section>

                    <Show when=move || error_key.get().is_some()>
                        <div role="alert" class="alert alert-error text-sm py-2">
                            <span>{move || error_key.get().map(|key| i18n.t(key))}</span>
                        </div>
                    </Show>

                    <div class="card-actions justify-end">
                        <button type="submit" class="btn btn-primary" disabled=move || is_saving.get()>
                            {move || if is_saving.get() {
                                view! { <span class="loading loading-spinner"></span> }.into_any()
                            } else {
                                ().into_any()
                            }}
                            {move || i18n.t("pages.setting.option.save")}
                        </button>
                    </div>
                </form>
            </Show>
        </div>
    }
}
