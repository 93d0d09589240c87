//! 作品编辑弹窗
//!
//! 画廊页的行内编辑入口：装载现有字段，提交部分更新。
//! 校验失败只在弹窗内提示，不发请求。

pub mod form_state;

use leptos::prelude::*;

use artify_shared::{ArtworkPatch, Visibility, CATEGORIES};
use form_state::ArtworkFormState;

#[component]
pub fn EditArtworkDialog(
    #[prop(into)] open: Signal<bool>,
    state: ArtworkFormState,
    #[prop(into)] busy: Signal<bool>,
    #[prop(into)] on_save: Callback<ArtworkPatch>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let dialog_ref = NodeRef::<leptos::html::Dialog>::new();
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    Effect::new(move |_| {
        if let Some(dialog) = dialog_ref.get() {
            if open.get() {
                if !dialog.open() {
                    set_error_msg.set(None);
                    let _ = dialog.show_modal();
                }
            } else if dialog.open() {
                dialog.close();
            }
        }
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        match state.to_patch() {
            Ok(patch) => {
                set_error_msg.set(None);
                on_save.run(patch);
            }
            Err(e) => set_error_msg.set(Some(e.to_string())),
        }
    };

    view! {
        <dialog class="modal" node_ref=dialog_ref on:close=move |_| on_close.run(())>
            <div class="modal-box max-w-2xl">
                <h3 class="font-bold text-lg">"Edit Artwork"</h3>

                <form on:submit=on_submit class="mt-4 space-y-4">
                    <Show when=move || error_msg.get().is_some()>
                        <div role="alert" class="alert alert-error text-sm py-2">
                            <span>{move || error_msg.get().unwrap_or_default()}</span>
                        </div>
                    </Show>

                    <div class="form-control">
                        <label for="edit_image" class="label">
                            <span class="label-text">"Image URL"</span>
                        </label>
                        <input
                            id="edit_image"
                            type="text"
                            on:input=move |ev| state.image.set(event_target_value(&ev))
                            prop:value=move || state.image.get()
                            class="input input-bordered w-full"
                        />
                    </div>

                    <div class="form-control">
                        <label for="edit_title" class="label">
                            <span class="label-text">"Title"</span>
                        </label>
                        <input
                            id="edit_title"
                            type="text"
                            on:input=move |ev| state.title.set(event_target_value(&ev))
                            prop:value=move || state.title.get()
                            class="input input-bordered w-full"
                        />
                    </div>

                    <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                        <div class="form-control">
                            <label class="label">
                                <span class="label-text">"Category"</span>
                            </label>
                            <select
                                class="select select-bordered w-full"
                                on:change=move |ev| state.category.set(event_target_value(&ev))
                            >
                                {CATEGORIES
                                    .iter()
                                    .map(|c| {
                                        view! {
                                            <option
                                                value=*c
                                                selected=move || state.category.get() == *c
                                            >
                                                {*c}
                                            </option>
                                        }
                                    })
                                    .collect_view()}
                            </select>
                        </div>
                        <div class="form-control">
                            <label for="edit_medium" class="label">
                                <span class="label-text">"Medium"</span>
                            </label>
                            <input
                                id="edit_medium"
                                type="text"
                                placeholder="Acrylic, Oil, Clay etc."
                                on:input=move |ev| state.medium.set(event_target_value(&ev))
                                prop:value=move || state.medium.get()
                                class="input input-bordered w-full"
                            />
                        </div>
                    </div>

                    <div class="form-control">
                        <label for="edit_description" class="label">
                            <span class="label-text">"Description"</span>
                        </label>
                        <textarea
                            id="edit_description"
                            rows="4"
                            on:input=move |ev| state.description.set(event_target_value(&ev))
                            prop:value=move || state.description.get()
                            class="textarea textarea-bordered w-full"
                        ></textarea>
                    </div>

                    <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                        <div class="form-control">
                            <label for="edit_dimensions" class="label">
                                <span class="label-text">"Dimensions"</span>
                            </label>
                            <input
                                id="edit_dimensions"
                                type="text"
                                on:input=move |ev| state.dimensions.set(event_target_value(&ev))
                                prop:value=move || state.dimensions.get()
                                class="input input-bordered w-full"
                            />
                        </div>
                        <div class="form-control">
                            <label for="edit_price" class="label">
                                <span class="label-text">"Price"</span>
                            </label>
                            <input
                                id="edit_price"
                                type="number"
                                min="0"
                                on:input=move |ev| state.price.set(event_target_value(&ev))
                                prop:value=move || state.price.get()
                                class="input input-bordered w-full"
                            />
                        </div>
                    </div>

                    <div class="form-control">
                        <label class="label">
                            <span class="label-text">"Visibility"</span>
                        </label>
                        <select
                            class="select select-bordered w-48"
                            on:change=move |ev| {
                                let private = event_target_value(&ev).eq_ignore_ascii_case("private");
                                state
                                    .visibility
                                    .set(if private { Visibility::Private } else { Visibility::Public });
                            }
                        >
                            <option
                                value="public"
                                selected=move || !state.visibility.get().is_private()
                            >
                                "Public"
                            </option>
                            <option
                                value="private"
                                selected=move || state.visibility.get().is_private()
                            >
                                "Private"
                            </option>
                        </select>
                    </div>

                    <div class="modal-action">
                        <button type="button" class="btn btn-ghost" on:click=move |_| on_close.run(())>
                            "Cancel"
                        </button>
                        <button type="submit" disabled=move || busy.get() class="btn btn-primary">
                            {move || {
                                if busy.get() {
                                    view! {
                                        <span class="loading loading-spinner"></span>
                                        "Saving…"
                                    }
                                        .into_any()
                                } else {
                                    "Save changes".into_any()
                                }
                            }}
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
