//! 番剧列表页

use leptos::prelude::*;
use leptos::task::spawn_local;
use mikan_shared::BangumiInfo;

use crate::app::use_app;
use crate::components::icons::Search;

#[component]
pub fn BangumiPage() -> impl IntoView {
    let app = use_app();
    let i18n = app.i18n;

    let bangumi = RwSignal::new(Vec::<BangumiInfo>::new());
    let loading = RwSignal::new(true);
    let keyword = RwSignal::new(String::new());

    let load = move || {
        loading.set(true);
        let keyword = keyword.get_untracked();
        spawn_local(async move {
            match app.api().get_bangumi_list(&keyword).await {
                Ok(result) => bangumi.set(result.list),
                Err(e) => app.notify_error(&e),
            }
            loading.set(false);
        });
    };

    // 初始加载
    load();

    let on_search = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        load();
    };

    view! {
        <div class="space-y-6">
            <form class="join" on:submit=on_search>
                <input
                    type="text"
                    class="input input-bordered join-item w-72"
                    placeholder=move || i18n.t("pages.bangumi.search")
                    prop:value=keyword
                    on:input=move |ev| keyword.set(event_target_value(&ev))
                />
                <button type="submit" class="btn btn-primary join-item">
                    <Search attr:class="h-4 w-4" />
                </button>
            </form>

            <Show when=move || loading.get() && bangumi.with(Vec::is_empty)>
                <div class="flex justify-center py-12">
                    <span class="loading loading-spinner loading-lg text-primary"></span>
                </div>
            </Show>
            <Show when=move || !loading.get() && bangumi.with(Vec::is_empty)>
                <div class="text-center py-12 text-base-content/50">
                    {move || i18n.t("pages.bangumi.empty")}
                </div>
            </Show>

            <div class="grid gap-6 grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 xl:grid-cols-5">
                <For
                    each=move || bangumi.get()
                    key=|b| b.id
                    children=move |item| view! { <BangumiCard item=item /> }
                />
            </div>
        </div>
    }
}

#[component]
fn BangumiCard(item: BangumiInfo) -> impl IntoView {
    let i18n = use_app().i18n;
    let BangumiInfo {
        title,
        poster,
        year,
        season,
        offset,
        enable,
        exclude,
        ..
    } = item;
    let status_key = if enable {
        "components.isSetup.on"
    } else {
        "components.isSetup.off"
    };
    let status_class = if enable {
        "badge badge-success"
    } else {
        "badge badge-ghost"
    };
    let year = year.map(|y| y.to_string()).unwrap_or_else(|| "-".to_string());

    view! {
        <div class="card bg-base-100 shadow-xl">
            <figure class="aspect-[3/4] bg-base-300">
                <img src=poster alt=title.clone() class="object-cover w-full h-full" loading="lazy" />
            </figure>
            <div class="card-body p-4 gap-2">
                <h2 class="card-title text-base">{title}</h2>
                <div class="flex flex-wrap gap-2 text-sm">
                    <span class=status_class>{move || i18n.t(status_key)}</span>
                    <span class="badge badge-outline">
                        {move || i18n.t("pages.bangumi.season")} " " {season}
                    </span>
                    <span class="badge badge-outline">
                        {move || i18n.t("pages.bangumi.offset")} " " {offset}
                    </span>
                    <span class="badge badge-outline">
                        {move || i18n.t("pages.bangumi.year")} " " {year}
                    </span>
                </div>
                {(!exclude.is_empty()).then(|| view! {
                    <div class="text-xs text-base-content/70">
                        {move || i18n.t("pages.bangumi.exclude")} ": "
                    </div>
                })}
                <div class="flex flex-wrap gap-1">
                    {exclude
                        .into_iter()
                        .map(|word| view! { <span class="badge badge-warning badge-sm">{word}</span> })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
