use leptos::prelude::*;

use crate::components::icons::AlertTriangle;

/// 二次确认对话框
///
/// `open` 由调用方控制，确认后自动关闭并触发 `on_confirm`。
#[component]
pub fn ConfirmDialog(
    open: RwSignal<bool>,
    #[prop(into)] message: Signal<&'static str>,
    #[prop(into)] confirm_label: Signal<&'static str>,
    #[prop(into)] cancel_label: Signal<&'static str>,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
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

    view! {
        <dialog class="modal" node_ref=dialog_ref on:close=move |_| open.set(false)>
            <div class="modal-box">
                <div class="flex items-center gap-3">
                    <AlertTriangle attr:class="h-6 w-6 text-warning" />
                    <p class="text-base">{move || message.get()}</p>
                </div>
                <div class="modal-action">
                    <button type="button" class="btn btn-ghost" on:click=move |_| open.set(false)>
                        {move || cancel_label.get()}
                    </button>
                    <button
                        type="button"
                        class="btn btn-error"
                        on:click=move |_| {
                            open.set(false);
                            on_confirm.run(());
                        }
                    >
                        {move || confirm_label.get()}
                    </button>
                </div>
            </div>
            <form method="dialog" class="modal-backdrop">
                <button>"close"</button>
            </form>
        </dialog>
    }
}
