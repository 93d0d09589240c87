//! 破坏性操作的确认弹窗
//!
//! 删除类操作先经过这里；用户取消则整个操作被放弃，
//! 乐观变更流程根本不会开始。

use leptos::prelude::*;

use crate::components::icons::TriangleAlert;

#[component]
pub fn ConfirmDialog(
    /// 是否打开（调用方用"待确认目标是否存在"派生）
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] title: Signal<String>,
    #[prop(into)] message: Signal<String>,
    /// 确认按钮文案，如 "Yes, delete"
    #[prop(into)] confirm_label: Signal<String>,
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
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
        <dialog class="modal" node_ref=dialog_ref on:close=move |_| on_cancel.run(())>
            <div class="modal-box max-w-sm text-center">
                <div class="mx-auto mb-3 grid h-14 w-14 place-items-center rounded-full bg-warning/10 text-warning">
                    <TriangleAlert attr:class="h-8 w-8" />
                </div>
                <h3 class="font-bold text-lg">{move || title.get()}</h3>
                <p class="py-3 text-base-content/70">{move || message.get()}</p>
                <div class="modal-action justify-center">
                    <button type="button" class="btn btn-ghost" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button type="button" class="btn btn-error" on:click=move |_| on_confirm.run(())>
                        {move || confirm_label.get()}
                    </button>
                </div>
            </div>
        </dialog>
    }
}
