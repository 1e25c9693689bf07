//! 订阅（索引器）管理页
//!
//! 支持按名称和类型查询、新建、编辑、删除以及清空全部索引器。

mod form_state;
mod indexer_dialog;

use leptos::prelude::*;
use leptos::task::spawn_local;
use mikan_shared::{IndexerCategory, IndexerInfo, IndexerSearch};

use crate::app::{AppContext, use_app};
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::icons::{Pencil, Plus, Search, Trash2};
use form_state::FormState;
use indexer_dialog::IndexerDialog;

/// 由查询表单构造查询条件，空值不参与查询
fn search_params(name: &str, category: &str) -> IndexerSearch {
    let name = name.trim();
    IndexerSearch {
        name: (!name.is_empty()).then(|| name.to_string()),
        category: IndexerCategory::parse(category),
    }
}

#[derive(Clone, Copy)]
struct RssState {
    app: AppContext,
    indexers: RwSignal<Vec<IndexerInfo>>,
    loading: RwSignal<bool>,
    search_name: RwSignal<String>,
    search_category: RwSignal<String>,
}

impl RssState {
    fn load(&self) {
        let state = *self;
        let search = search_params(
            &self.search_name.get_untracked(),
            &self.search_category.get_untracked(),
        );
        self.loading.set(true);
        spawn_local(async move {
            match state.app.api().get_indexer_list(&search).await {
                Ok(list) => state.indexers.set(list),
                Err(e) => state.app.notify_error(&e),
            }
            state.loading.set(false);
        });
    }

    fn save(&self, info: IndexerInfo, dialog_open: RwSignal<bool>) {
        let state = *self;
        spawn_local(async move {
            let api = state.app.api();
            let result = if info.id.is_some() {
                api.modify_indexer(info).await
            } else {
                api.add_indexer(info).await
            };
            match result {
                Ok(()) => {
                    state.app.messages.success(state.app.i18n.t("pages.rss.hint.submit_success"));
                    dialog_open.set(false);
                    state.load();
                }
                Err(e) => state.app.notify_error(&e),
            }
        });
    }

    fn delete(&self, id: u32) {
        let state = *self;
        spawn_local(async move {
            match state.app.api().delete_indexer(id).await {
                Ok(()) => {
                    state.app.messages.success(state.app.i18n.t("pages.rss.hint.delete_success"));
                    state.indexers.update(|list| list.retain(|i| i.id != Some(id)));
                }
                Err(e) => state.app.notify_error(&e),
            }
        });
    }

    fn truncate(&self) {
        let state = *self;
        spawn_local(async move {
            match state.app.api().truncate_indexer().await {
                Ok(()) => {
                    state.app.messages.success(state.app.i18n.t("pages.rss.hint.delete_success"));
                    state.indexers.set(Vec::new());
                }
                Err(e) => state.app.notify_error(&e),
            }
        });
    }
}

#[component]
pub fn RssPage() -> impl IntoView {
    let app = use_app();
    let i18n = app.i18n;
    let state = RssState {
        app,
        indexers: RwSignal::new(Vec::new()),
        loading: RwSignal::new(true),
        search_name: RwSignal::new(String::new()),
        search_category: RwSignal::new(String::new()),
    };

    let form = FormState::new();
    let dialog_open = RwSignal::new(false);
    let delete_target = RwSignal::new(Option::<u32>::None);
    let delete_open = RwSignal::new(false);
    let truncate_open = RwSignal::new(false);

    // 初始加载
    state.load();

    let on_query = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        state.load();
    };
    let on_reset = move |_| {
        state.search_name.set(String::new());
        state.search_category.set(String::new());
        state.load();
    };
    let open_create = move |_| {
        form.reset();
        dialog_open.set(true);
    };

    view! {
        <div class="card bg-base-100 shadow-xl">
            <div class="card-body gap-4">
                // 查询
                <form class="flex flex-wrap items-end gap-3" on:submit=on_query>
                    <label class="form-control">
                        <span class="label-text pb-1">{move || i18n.t("pages.rss.field.name")}</span>
                        <input
                            type="text"
                            class="input input-bordered"
                            placeholder=move || i18n.t("pages.rss.placeholder.name")
                            prop:value=state.search_name
                            on:input=move |ev| state.search_name.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form-control">
                        <span class="label-text pb-1">{move || i18n.t("pages.rss.field.category")}</span>
                        <select
                            class="select select-bordered"
                            on:change=move |ev| state.search_category.set(event_target_value(&ev))
                        >
                            <option value="" selected=move || state.search_category.get().is_empty()>
                                "-"
                            </option>
                            {IndexerCategory::ALL
                                .into_iter()
                                .map(|category| view! {
                                    <option
                                        value=category.as_str()
                                        selected=move || state.search_category.get() == category.as_str()
                                    >
                                        {category.as_str()}
                                    </option>
                                })
                                .collect_view()}
                        </select>
                    </label>
                    <button type="submit" class="btn btn-primary gap-2">
                        <Search attr:class="h-4 w-4" />
                        {move || i18n.t("components.commonTable.query")}
                    </button>
                    <button type="button" class="btn btn-ghost" on:click=on_reset>
                        {move || i18n.t("components.commonTable.reset")}
                    </button>

                    <div class="flex-1"></div>
                    <button type="button" class="btn btn-primary gap-2" on:click=open_create>
                        <Plus attr:class="h-4 w-4" />
                        {move || i18n.t("pages.rss.option.create")}
                    </button>
                    <button type="button" class="btn btn-outline btn-error gap-2" on:click=move |_| truncate_open.set(true)>
                        <Trash2 attr:class="h-4 w-4" />
                        {move || i18n.t("pages.rss.option.truncate")}
                    </button>
                </form>

                // 列表
                <div class="overflow-x-auto w-full">
                    <table class="table table-zebra w-full">
                        <thead>
                            <tr>
                                <th>{move || i18n.t("pages.rss.field.name")}</th>
                                <th>{move || i18n.t("pages.rss.field.category")}</th>
                                <th>{move || i18n.t("pages.rss.field.status")}</th>
                                <th class="hidden md:table-cell">{move || i18n.t("pages.rss.field.url")}</th>
                                <th>{move || i18n.t("pages.rss.field.operation")}</th>
                            </tr>
                        </thead>
                        <tbody>
                            <Show when=move || state.loading.get() && state.indexers.with(Vec::is_empty)>
                                <tr>
                                    <td colspan="5" class="text-center py-8">
                                        <span class="loading loading-spinner loading-md"></span>
                                    </td>
                                </tr>
                            </Show>
                            <For
                                each=move || state.indexers.get()
                                key=|indexer| (indexer.id, indexer.name.clone())
                                children=move |indexer| {
                                    let id = indexer.id;
                                    let status_key = if indexer.enable {
                                        "pages.rss.status.enable"
                                    } else {
                                        "pages.rss.status.disable"
                                    };
                                    let badge = if indexer.enable { "badge badge-success" } else { "badge badge-ghost" };
                                    let on_edit = {
                                        let indexer = indexer.clone();
                                        move |_| {
                                            form.load(&indexer);
                                            dialog_open.set(true);
                                        }
                                    };
                                    view! {
                                        <tr>
                                            <td class="font-bold">{indexer.name}</td>
                                            <td>
                                                <div class="badge badge-accent badge-outline">{indexer.category.as_str()}</div>
                                            </td>
                                            <td><span class=badge>{move || i18n.t(status_key)}</span></td>
                                            <td class="hidden md:table-cell font-mono text-xs opacity-70 break-all">{indexer.url}</td>
                                            <td class="flex gap-1">
                                                <button class="btn btn-ghost btn-sm gap-1" on:click=on_edit>
                                                    <Pencil attr:class="h-4 w-4" />
                                                    {move || i18n.t("pages.rss.option.detail")}
                                                </button>
                                                <button
                                                    class="btn btn-ghost btn-sm gap-1 text-error"
                                                    disabled=id.is_none()
                                                    on:click=move |_| {
                                                        delete_target.set(id);
                                                        delete_open.set(true);
                                                    }
                                                >
                                                    <Trash2 attr:class="h-4 w-4" />
                                                    {move || i18n.t("pages.rss.option.delete")}
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </div>
            </div>
        </div>

        <IndexerDialog
            state=form
            open=dialog_open
            on_submit=move |info| state.save(info, dialog_open)
        />
        <ConfirmDialog
            open=delete_open
            message=move || i18n.t("pages.rss.hint.delete")
            confirm_label=move || i18n.t("pages.rss.option.submit")
            cancel_label=move || i18n.t("pages.rss.option.cancel")
            on_confirm=move |_| {
                if let Some(id) = delete_target.get_untracked() {
                    state.delete(id);
                }
            }
        />
        <ConfirmDialog
            open=truncate_open
            message=move || i18n.t("pages.rss.hint.truncate")
            confirm_label=move || i18n.t("pages.rss.option.submit")
            cancel_label=move || i18n.t("pages.rss.option.cancel")
            on_confirm=move |_| state.truncate()
        />
    }
}
