//! 新建 / 编辑索引器对话框

use leptos::prelude::*;
use mikan_shared::{IndexerCategory, IndexerInfo};

use super::form_state::FormState;
use crate::app::use_app;

#[component]
pub fn IndexerDialog(
    state: FormState,
    open: RwSignal<bool>,
    #[prop(into)] on_submit: Callback<IndexerInfo>,
) -> impl IntoView {
    let app = use_app();
    let i18n = app.i18n;
    let dialog_ref = NodeRef::<leptos::html::Dialog>::new();

    Effect::new(move |_| {
        if let Some(dialog) = dialog_ref.get() {
            if open.get() {
                if !dialog.open() {
                    let _ = dialog.show_modal();
                }
            } else if dialog.open() {
                dialog.close();
            }
        }
    });

    let submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        match state.to_request() {
            Ok(info) => on_submit.run(info),
            Err(key) => app.messages.error(i18n.t(key)),
        }
    };

    let heading = move || {
        if state.is_edit() {
            i18n.t("pages.rss.hint.modify")
        } else {
            i18n.t("pages.rss.hint.create")
        }
    };

    view! {
        <dialog class="modal" node_ref=dialog_ref on:close=move |_| open.set(false)>
            <div class="modal-box">
                <h3 class="font-bold text-lg">{heading}</h3>

                <form on:submit=submit class="space-y-4 pt-4">
                    <div class="form-control">
                        <label for="indexer_name" class="label">
                            <span class="label-text">{move || i18n.t("pages.rss.field.name")}</span>
                        </label>
                        <input id="indexer_name"
                            type="text"
                            placeholder=move || i18n.t("pages.rss.placeholder.name")
                            on:input=move |ev| state.name.set(event_target_value(&ev))
                            prop:value=move || state.name.get()
                            class="input input-bordered w-full"
                        />
                    </div>

                    <div class="form-control">
                        <label class="label">
                            <span class="label-text">{move || i18n.t("pages.rss.field.category")}</span>
                        </label>
                        <select
                            class="select select-bordered w-full"
                            on:change=move |ev| {
                                if let Some(category) = IndexerCategory::parse(&event_target_value(&ev)) {
                                    state.category.set(category);
                                }
                            }
                        >
                            {IndexerCategory::ALL
                                .into_iter()
                                .map(|category| view! {
                                    <option
                                        value=category.as_str()
                                        selected=move || state.category.get() == category
                                    >
                                        {category.as_str()}
                                    </option>
                                })
                                .collect_view()}
                        </select>
                    </div>

                    <div class="form-control">
                        <label for="indexer_url" class="label">
                            <span class="label-text">{move || i18n.t("pages.rss.field.url")}</span>
                        </label>
                        <input id="indexer_url"
                            type="url"
                            placeholder=move || i18n.t("pages.rss.placeholder.url")
                            on:input=move |ev| state.url.set(event_target_value(&ev))
                            prop:value=move || state.url.get()
                            class="input input-bordered w-full"
                        />
                    </div>

                    <div class="form-control">
                        <label class="label cursor-pointer">
                            <span class="label-text">{move || i18n.t("pages.rss.field.status")}</span>
                            <input type="checkbox" class="toggle toggle-primary"
                                prop:checked=move || state.enable.get()
                                on:change=move |ev| state.enable.set(event_target_checked(&ev))
                            />
                        </label>
                    </div>

                    <div class="modal-action">
                        <button type="button" class="btn btn-ghost" on:click=move |_| open.set(false)>
                            {move || i18n.t("pages.rss.option.cancel")}
                        </button>
                        <button type="submit" class="btn btn-primary">
                            {move || i18n.t("pages.rss.option.submit")}
                        </button>
                    </div>
                </form>
            </div>
            <form method="dialog" class="modal-backdrop">
                <button>"close"</button>
            </form>
        </dialog>
    }
}
