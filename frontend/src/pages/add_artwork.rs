//! 上传作品
//!
//! 表单状态复用编辑弹窗的 `ArtworkFormState`；所有者字段从当前
//! Principal 反规范化进请求体。缺图/缺标题/未登录都在发请求前拦下。

use leptos::prelude::*;
use leptos::task::spawn_local;

use artify_shared::{Visibility, CATEGORIES};

use crate::api::ArtifyApi;
use crate::auth::use_session;
use crate::components::edit_artwork_dialog::form_state::ArtworkFormState;
use crate::components::toast::use_notify;
use crate::web::route::AppRoute;
use crate::web::router::use_router;

#[component]
pub fn AddArtworkPage() -> impl IntoView {
    let session = use_session();
    let notify = use_notify();
    let router = use_router();

    let form = ArtworkFormState::new();
    let (busy, set_busy) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_error_msg.set(None);

        let principal = session.state.get_untracked().principal;
        let (user_name, user_email, artist_photo, logged_in) = match &principal {
            Some(p) => (
                p.name.clone(),
                p.email.clone(),
                p.photo_url.clone().unwrap_or_default(),
                true,
            ),
            None => (String::new(), String::new(), String::new(), false),
        };

        let new_art = match form.to_new(&user_name, &user_email, &artist_photo, logged_in) {
            Ok(art) => art,
            Err(e) => {
                set_error_msg.set(Some(e.to_string()));
                return;
            }
        };

        set_busy.set(true);
        spawn_local(async move {
            match ArtifyApi::new().create_art(&new_art).await {
                Ok(()) => {
                    notify.success("Artwork Added Successfully!");
                    form.reset();
                    // 跳去 Explore，让用户看到新作品
                    router.navigate(AppRoute::Explore);
                }
                Err(e) => notify.error(e.user_message()),
            }
            set_busy.set(false);
        });
    };

    view! {
        <section class="max-w-3xl mx-auto px-4 py-10">
            <h1 class="text-3xl font-extrabold mb-6 text-center">"Add Artwork"</h1>

            <form on:submit=on_submit class="grid gap-6 bg-base-100 p-6 rounded-xl border border-base-300">
                <Show when=move || error_msg.get().is_some()>
                    <div role="alert" class="alert alert-error text-sm py-2">
                        <span>{move || error_msg.get().unwrap_or_default()}</span>
                    </div>
                </Show>

                <div>
                    <label class="font-semibold" for="add_image">
                        "Image URL"
                    </label>
                    <input
                        id="add_image"
                        class="input input-bordered w-full"
                        placeholder="https://example.com/art.jpg"
                        on:input=move |ev| form.image.set(event_target_value(&ev))
                        prop:value=move || form.image.get()
                    />
                </div>

                <div>
                    <label class="font-semibold" for="add_title">
                        "Title"
                    </label>
                    <input
                        id="add_title"
                        class="input input-bordered w-full"
                        placeholder="Artwork title"
                        on:input=move |ev| form.title.set(event_target_value(&ev))
                        prop:value=move || form.title.get()
                    />
                </div>

                <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                    <div>
                        <label class="font-semibold">"Category"</label>
                        <select
                            class="select select-bordered w-full"
                            on:change=move |ev| form.category.set(event_target_value(&ev))
                        >
                            {CATEGORIES
                                .iter()
                                .map(|c| {
                                    view! {
                                        <option value=*c selected=move || form.category.get() == *c>
                                            {*c}
                                        </option>
                                    }
                                })
                                .collect_view()}
                        </select>
                    </div>
                    <div>
                        <label class="font-semibold" for="add_medium">
                            "Medium"
                        </label>
                        <input
                            id="add_medium"
                            class="input input-bordered w-full"
                            placeholder="Acrylic, Oil, Clay etc."
                            on:input=move |ev| form.medium.set(event_target_value(&ev))
                            prop:value=move || form.medium.get()
                        />
                    </div>
                </div>

                <div>
                    <label class="font-semibold" for="add_description">
                        "Description"
                    </label>
                    <textarea
                        id="add_description"
                        rows="4"
                        class="textarea textarea-bordered w-full"
                        on:input=move |ev| form.description.set(event_target_value(&ev))
                        prop:value=move || form.description.get()
                    ></textarea>
                </div>

                <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                    <div>
                        <label class="font-semibold" for="add_dimensions">
                            "Dimensions"
                        </label>
                        <input
                            id="add_dimensions"
                            class="input input-bordered w-full"
                            placeholder="24 x 36 in"
                            on:input=move |ev| form.dimensions.set(event_target_value(&ev))
                            prop:value=move || form.dimensions.get()
                        />
                    </div>
                    <div>
                        <label class="font-semibold" for="add_price">
                            "Price"
                        </label>
                        <input
                            id="add_price"
                            type="number"
                            min="0"
                            class="input input-bordered w-full"
                            on:input=move |ev| form.price.set(event_target_value(&ev))
                            prop:value=move || form.price.get()
                        />
                    </div>
                </div>

                <div class="flex flex-wrap items-center gap-6">
                    <div class="flex items-center gap-3">
                        <label class="font-semibold">"Visibility"</label>
                        <select
                            class="select select-bordered w-40"
                            on:change=move |ev| {
                                let private = event_target_value(&ev)
                                    .eq_ignore_ascii_case("private");
                                form.visibility
                                    .set(
                                        if private { Visibility::Private } else { Visibility::Public },
                                    );
                            }
                        >
                            <option value="public" selected=move || !form.visibility.get().is_private()>
                                "Public"
                            </option>
                            <option value="private" selected=move || form.visibility.get().is_private()>
                                "Private"
                            </option>
                        </select>
                    </div>
                    <label class="label cursor-pointer gap-3">
                        <span class="label-text font-semibold">"Feature this artwork"</span>
                        <input
                            type="checkbox"
                            class="toggle toggle-primary"
                            prop:checked=move || form.featured.get()
                            on:change=move |ev| form.featured.set(event_target_checked(&ev))
                        />
                    </label>
                </div>

                <button class="btn btn-primary" disabled=move || busy.get()>
                    {move || {
                        if busy.get() {
                            view! {
                                <span class="loading loading-spinner"></span>
                                "Submitting…"
                            }
                                .into_any()
                        } else {
                            "Add Artwork".into_any()
                        }
                    }}
                </button>
            </form>
        </section>
    }
}
