//! 作品详情页
//!
//! 点赞开关用响应里的计数更新本地副本，响应缺计数时回退为整单重拉。
//! 收藏要求已解析的 Principal：匿名时直接提示登录，不发任何写请求。

use artify_shared::Artwork;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{ApiError, ArtifyApi};
use crate::auth::use_session;
use crate::components::art_card::Avatar;
use crate::components::icons::{BookmarkPlus, Heart, Lock, Palette};
use crate::components::toast::use_notify;

fn fmt_date(date: Option<chrono::DateTime<chrono::Utc>>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "-".to_string())
}

#[component]
pub fn DetailsPage(id: String) -> impl IntoView {
    let session = use_session();
    let notify = use_notify();

    let (art, set_art) = signal(Option::<Artwork>::None);
    let (busy_like, set_busy_like) = signal(false);
    let (busy_fav, set_busy_fav) = signal(false);

    let art_id = StoredValue::new(id);

    // 挂载时拉取；路由变化会重建组件，不需要额外的依赖追踪
    Effect::new(move |_| {
        let id = art_id.get_value();
        spawn_local(async move {
            match ArtifyApi::new().get_art(&id).await {
                Ok(fetched) => set_art.set(Some(fetched)),
                Err(e) => {
                    set_art.set(None);
                    notify.error(format!("Failed to load: {}", e.user_message()));
                }
            }
        });
    });

    let on_like = move |_| {
        if busy_like.get_untracked() {
            return;
        }
        set_busy_like.set(true);
        let id = art_id.get_value();
        spawn_local(async move {
            let api = ArtifyApi::new();
            match api.toggle_like(&id).await {
                Ok(likes) => set_art.update(|a| {
                    if let Some(a) = a {
                        a.likes = likes;
                    }
                }),
                // 响应没带计数：重拉整单对齐
                Err(ApiError::Decode(_)) => {
                    if let Ok(fetched) = api.get_art(&id).await {
                        set_art.update(|a| {
                            if let Some(a) = a {
                                a.likes = fetched.likes;
                            }
                        });
                    }
                }
                Err(e) => notify.error(format!("Couldn't update like: {}", e.user_message())),
            }
            set_busy_like.set(false);
        });
    };

    let on_favorite = move |_| {
        if busy_fav.get_untracked() {
            return;
        }
        // 必须已登录；匿名直接提示，不发网络写请求
        let Some(principal) = session.state.get_untracked().principal else {
            notify.error("You must be logged in to add favorites");
            return;
        };
        set_busy_fav.set(true);
        let id = art_id.get_value();
        spawn_local(async move {
            match ArtifyApi::new().add_favorite(&id, &principal.email).await {
                Ok(()) => notify.success("Added to favorites"),
                Err(e) => notify.error(format!("Couldn't favorite: {}", e.user_message())),
            }
            set_busy_fav.set(false);
        });
    };

    view! {
        <Show
            when=move || art.get().is_some()
            fallback=|| {
                view! {
                    <div class="max-w-6xl mx-auto px-4 py-8">
                        <div class="grid lg:grid-cols-2 gap-6">
                            <div class="aspect-[4/3] w-full rounded-2xl bg-base-200 animate-pulse"></div>
                            <div class="space-y-4">
                                <div class="h-8 w-2/3 bg-base-200 rounded animate-pulse"></div>
                                <div class="h-4 w-40 bg-base-200 rounded animate-pulse"></div>
                                <div class="h-24 w-full bg-base-200 rounded animate-pulse"></div>
                                <div class="h-10 w-56 bg-base-200 rounded animate-pulse"></div>
                            </div>
                        </div>
                    </div>
                }
            }
        >
            {move || {
                let Some(art) = art.get() else {
                    return view! { <></> }.into_any();
                };
                let artist_name = if art.user_name.is_empty() {
                    "Unknown Artist".to_string()
                } else {
                    art.user_name.clone()
                };
                view! {
                    <section class="max-w-6xl mx-auto px-4 py-8">
                        <div class="grid lg:grid-cols-2 gap-6 rounded-2xl border border-base-300 bg-base-100 shadow-sm p-3 md:p-4 lg:p-5">
                            <div class="relative">
                                <img
                                    src=art.image.clone()
                                    alt=art.title.clone()
                                    class="w-full aspect-[4/3] object-cover rounded-xl"
                                />
                                <div class="absolute left-3 top-3 flex flex-wrap gap-2">
                                    <span class="badge badge-primary font-semibold">
                                        {art.category.clone()}
                                    </span>
                                    <Show when={
                                        let medium = art.medium.clone();
                                        move || !medium.is_empty()
                                    }>
                                        <span class="badge bg-base-100/80 backdrop-blur text-xs">
                                            {art.medium.clone()}
                                        </span>
                                    </Show>
                                    <Show when={
                                        let private = art.visibility.is_private();
                                        move || private
                                    }>
                                        <span class="badge badge-outline gap-1">
                                            <Lock attr:class="h-3.5 w-3.5" />
                                            "Private"
                                        </span>
                                    </Show>
                                </div>
                            </div>

                            <div class="flex flex-col">
                                <h1 class="text-3xl md:text-4xl font-extrabold">{art.title.clone()}</h1>

                                <div class="mt-2 flex flex-wrap items-center gap-3 text-sm opacity-80">
                                    <span class="inline-flex items-center gap-2">
                                        <Palette attr:class="h-4 w-4" />
                                        {art.category.clone()}
                                    </span>
                                    <Show when={
                                        let dims = art.dimensions.clone();
                                        move || !dims.is_empty()
                                    }>
                                        <span>{art.dimensions.clone()}</span>
                                    </Show>
                                    <Show when={
                                        let has_price = art.price.is_some();
                                        move || has_price
                                    }>
                                        <span class="font-semibold text-primary">
                                            {crate::components::art_card::format_price(art.price)}
                                        </span>
                                    </Show>
                                </div>

                                <div class="mt-5 flex items-center gap-3">
                                    <Avatar name=artist_name.clone() photo=art.artist_photo.clone() />
                                    <div class="leading-tight">
                                        <p class="font-semibold">{artist_name.clone()}</p>
                                        <p class="text-xs opacity-60">
                                            {art.visibility.to_string()} " artwork"
                                        </p>
                                    </div>
                                </div>

                                <Show when={
                                    let desc = art.description.clone();
                                    move || !desc.is_empty()
                                }>
                                    <p class="mt-5 leading-relaxed">{art.description.clone()}</p>
                                </Show>

                                <div class="mt-6 flex flex-wrap items-center gap-3">
                                    <button
                                        class="btn btn-primary gap-2"
                                        disabled=move || busy_like.get()
                                        on:click=on_like
                                    >
                                        {move || {
                                            if busy_like.get() {
                                                view! {
                                                    <span class="loading loading-spinner loading-sm"></span>
                                                }
                                                    .into_any()
                                            } else {
                                                view! { <Heart attr:class="h-4 w-4" /> }.into_any()
                                            }
                                        }}
                                        "Like • "
                                        {art.likes}
                                    </button>
                                    <button
                                        class="btn btn-outline gap-2 border-primary text-primary hover:bg-primary/5"
                                        disabled=move || busy_fav.get()
                                        on:click=on_favorite
                                    >
                                        {move || {
                                            if busy_fav.get() {
                                                view! {
                                                    <span class="loading loading-spinner loading-sm"></span>
                                                }
                                                    .into_any()
                                            } else {
                                                view! { <BookmarkPlus attr:class="h-4 w-4" /> }.into_any()
                                            }
                                        }}
                                        "Add to Favorites"
                                    </button>
                                </div>

                                <div class="mt-6 text-xs opacity-60">
                                    "Created on " {fmt_date(art.created_at)} " • Updated "
                                    {fmt_date(art.updated_at.or(art.created_at))}
                                </div>
                            </div>
                        </div>

                        <div class="mt-6 grid sm:grid-cols-3 gap-3">
                            <div class="rounded-xl border border-base-300 bg-base-100 p-4 text-center">
                                <p class="text-2xl font-extrabold">{art.likes}</p>
                                <p class="text-xs opacity-70">"Total Likes"</p>
                            </div>
                            <div class="rounded-xl border border-base-300 bg-base-100 p-4 text-center">
                                <p class="text-2xl font-extrabold">{art.visibility.to_string()}</p>
                                <p class="text-xs opacity-70">"Visibility"</p>
                            </div>
                            <div class="rounded-xl border border-base-300 bg-base-100 p-4 text-center">
                                <p class="text-2xl font-extrabold">{art.category.clone()}</p>
                                <p class="text-xs opacity-70">"Category"</p>
                            </div>
                        </div>
                    </section>
                }
                    .into_any()
            }}
        </Show>
    }
}
