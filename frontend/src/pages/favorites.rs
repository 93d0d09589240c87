//! 我的收藏
//!
//! 收藏行内嵌作品文档；移除走确认弹窗 + 乐观移除 + 失败回滚。

use artify_shared::Favorite;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ArtifyApi;
use crate::auth::use_session;
use crate::components::art_card::format_price;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::toast::use_notify;
use crate::optimistic::ListState;

#[component]
pub fn FavoritesPage() -> impl IntoView {
    let session = use_session();
    let notify = use_notify();
    let favorites: ListState<Favorite> = ListState::new();

    let (confirm_target, set_confirm_target) = signal(Option::<Favorite>::None);
    let (busy_id, set_busy_id) = signal(Option::<String>::None);

    let scope_email = Memo::new(move |_| {
        let s = session.state.get();
        if s.is_loading {
            None
        } else {
            s.principal.as_ref().map(|p| p.email.clone())
        }
    });

    let load = move || {
        let Some(email) = scope_email.get_untracked() else {
            return;
        };
        let generation = favorites.begin_load();
        spawn_local(async move {
            match ArtifyApi::new().favorites(&email).await {
                Ok(items) => {
                    favorites.finish_load(generation, items);
                }
                Err(e) => {
                    favorites.finish_load(generation, Vec::new());
                    notify.error(format!("Failed to load: {}", e.user_message()));
                }
            }
        });
    };

    Effect::new(move |_| {
        if scope_email.get().is_some() {
            load();
        }
    });

    let cancel_remove = move |_: ()| set_confirm_target.set(None);

    let confirmed_remove = move |_: ()| {
        let Some(favorite) = confirm_target.get_untracked() else {
            return;
        };
        set_confirm_target.set(None);
        let Some(email) = scope_email.get_untracked() else {
            return;
        };
        set_busy_id.set(Some(favorite.id.clone()));
        spawn_local(async move {
            let remove_id = favorite.id.clone();
            let result = favorites
                .mutate(
                    move |items| items.retain(|f| f.id != remove_id),
                    async move {
                        ArtifyApi::new()
                            .remove_favorite(&favorite.id, &favorite.art_id, &email)
                            .await
                    },
                )
                .await;
            match result {
                Ok(()) => notify.success("Removed"),
                Err(e) => notify.error(format!("Failed to remove: {}", e.user_message())),
            }
            set_busy_id.set(None);
        });
    };

    let total = move || favorites.items.with(|items| items.len());

    view! {
        <section class="max-w-6xl mx-auto px-4 py-8">
            <header class="mb-6">
                <h1 class="text-3xl font-extrabold">"My Favorites"</h1>
                <p class="mt-1 text-sm opacity-70">"Your saved artworks in one place."</p>
            </header>

            <div class="rounded-2xl border border-base-300 bg-base-100 shadow-sm overflow-hidden">
                <div class="flex items-center justify-between px-4 py-3 border-b border-base-300">
                    <p class="text-sm">
                        "Total items: " <span class="font-semibold">{total}</span>
                    </p>
                </div>

                <div class="overflow-x-auto">
                    <table class="table table-zebra w-full">
                        <thead class="bg-base-200">
                            <tr>
                                <th class="w-16">"#"</th>
                                <th>"Artwork"</th>
                                <th class="w-40">"Category"</th>
                                <th class="w-32 text-right">"Price"</th>
                                <th class="w-36 text-right">"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <Show when=move || favorites.loading.get()>
                                {(0..5)
                                    .map(|_| {
                                        view! {
                                            <tr>
                                                <td>
                                                    <span class="inline-block h-4 w-6 rounded bg-base-200 animate-pulse"></span>
                                                </td>
                                                <td>
                                                    <div class="flex items-center gap-3">
                                                        <div class="h-14 w-20 rounded-lg bg-base-200 animate-pulse"></div>
                                                        <div class="h-4 w-40 rounded bg-base-200 animate-pulse"></div>
                                                    </div>
                                                </td>
                                                <td>
                                                    <span class="inline-block h-4 w-24 rounded bg-base-200 animate-pulse"></span>
                                                </td>
                                                <td class="text-right">
                                                    <span class="inline-block h-4 w-12 rounded bg-base-200 animate-pulse"></span>
                                                </td>
                                                <td class="text-right">
                                                    <span class="inline-block h-9 w-24 rounded bg-base-200 animate-pulse"></span>
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()}
                            </Show>
                            <Show when=move || !favorites.loading.get()>
                                <For
                                    each=move || favorites.items.get().into_iter().enumerate()
                                    key=|(_, f)| f.id.clone()
                                    children=move |(idx, favorite): (usize, Favorite)| {
                                        let row_id = favorite.id.clone();
                                        let target = favorite.clone();
                                        let (title, image, category, medium, price) = favorite
                                            .art
                                            .as_ref()
                                            .map(|a| {
                                                (
                                                    a.title.clone(),
                                                    a.image.clone(),
                                                    a.category.clone(),
                                                    a.medium.clone(),
                                                    a.price,
                                                )
                                            })
                                            .unwrap_or_else(|| {
                                                (
                                                    format!("Art ID: {}", favorite.art_id),
                                                    String::new(),
                                                    String::new(),
                                                    String::new(),
                                                    None,
                                                )
                                            });
                                        view! {
                                            <tr class="hover">
                                                <td class="font-semibold">{idx + 1}</td>
                                                <td>
                                                    <div class="flex items-center gap-3">
                                                        <img
                                                            src=image
                                                            alt=title.clone()
                                                            class="h-14 w-20 rounded-lg object-cover ring-1 ring-base-300"
                                                            loading="lazy"
                                                        />
                                                        <div class="min-w-0">
                                                            <div class="font-semibold line-clamp-1">{title}</div>
                                                            <div class="text-xs opacity-70 line-clamp-1">
                                                                {if medium.is_empty() { "—".to_string() } else { medium }}
                                                            </div>
                                                        </div>
                                                    </div>
                                                </td>
                                                <td>
                                                    <span class="badge badge-primary font-semibold">{category}</span>
                                                </td>
                                                <td class="text-right">{format_price(price)}</td>
                                                <td class="text-right">
                                                    <button
                                                        class=move || {
                                                            if busy_id.get().as_deref() == Some(row_id.as_str()) {
                                                                "btn btn-outline btn-sm pointer-events-none opacity-60"
                                                            } else {
                                                                "btn btn-outline btn-sm"
                                                            }
                                                        }
                                                        on:click=move |_| set_confirm_target.set(Some(target.clone()))
                                                    >
                                                        "Remove"
                                                    </button>
                                                </td>
                                            </tr>
                                        }
                                    }
                                />
                            </Show>
                        </tbody>
                    </table>
                </div>

                <Show when=move || !favorites.loading.get() && total() == 0>
                    <div class="p-10 text-center">
                        <h3 class="text-lg font-semibold">"No favorites yet"</h3>
                        <p class="opacity-70">"Explore artworks and add some to your favorites."</p>
                    </div>
                </Show>
            </div>

            <ConfirmDialog
                open=Signal::derive(move || confirm_target.get().is_some())
                title="Remove from Favorites?".to_string()
                message="Are you sure you want to remove this artwork?".to_string()
                confirm_label="Remove".to_string()
                on_confirm=confirmed_remove
                on_cancel=cancel_remove
            />
        </section>
    }
}
