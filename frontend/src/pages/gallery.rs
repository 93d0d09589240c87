//! 我的画廊
//!
//! 按当前 Principal 的邮箱拉取作品列表；删除走确认弹窗 + 乐观移除，
//! 编辑走弹窗表单 + 乐观补丁，两者失败都恢复快照并提示。

use artify_shared::{Artwork, ArtworkPatch};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ArtifyApi;
use crate::auth::use_session;
use crate::components::art_card::format_price;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::edit_artwork_dialog::form_state::ArtworkFormState;
use crate::components::edit_artwork_dialog::EditArtworkDialog;
use crate::components::icons::{Pencil, RefreshCw};
use crate::components::toast::use_notify;
use crate::optimistic::ListState;

#[component]
pub fn GalleryPage() -> impl IntoView {
    let session = use_session();
    let notify = use_notify();
    let arts: ListState<Artwork> = ListState::new();

    let (confirm_target, set_confirm_target) = signal(Option::<Artwork>::None);
    let (busy_id, set_busy_id) = signal(Option::<String>::None);

    let form = ArtworkFormState::new();
    let (edit_id, set_edit_id) = signal(Option::<String>::None);
    let (edit_busy, set_edit_busy) = signal(false);

    // 作用域键：principal 邮箱。会话的其他字段变化不触发重拉。
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
        let generation = arts.begin_load();
        spawn_local(async move {
            match ArtifyApi::new().my_arts(&email).await {
                Ok(items) => {
                    arts.finish_load(generation, items);
                }
                Err(e) => {
                    // 读失败降级为空态 + 提示，不让整页崩掉
                    arts.finish_load(generation, Vec::new());
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

    let request_delete = move |art: Artwork| set_confirm_target.set(Some(art));

    let cancel_delete = move |_: ()| set_confirm_target.set(None);

    let confirmed_delete = move |_: ()| {
        let Some(art) = confirm_target.get_untracked() else {
            return;
        };
        set_confirm_target.set(None);
        set_busy_id.set(Some(art.id.clone()));
        spawn_local(async move {
            let retain_id = art.id.clone();
            let commit_id = art.id.clone();
            let result = arts
                .mutate(
                    move |items| items.retain(|a| a.id != retain_id),
                    async move { ArtifyApi::new().delete_art(&commit_id).await },
                )
                .await;
            match result {
                Ok(()) => notify.success("Deleted"),
                Err(e) => notify.error(format!("Failed to delete: {}", e.user_message())),
            }
            set_busy_id.set(None);
        });
    };

    let open_edit = move |art: Artwork| {
        form.load(&art);
        set_edit_id.set(Some(art.id));
    };

    let close_edit = move |_: ()| {
        set_edit_id.set(None);
        form.reset();
    };

    let save_edit = move |patch: ArtworkPatch| {
        let Some(id) = edit_id.get_untracked() else {
            return;
        };
        set_edit_busy.set(true);
        spawn_local(async move {
            let apply_id = id.clone();
            let apply_patch = patch.clone();
            let result = arts
                .mutate(
                    move |items| {
                        for art in items.iter_mut() {
                            if art.id == apply_id {
                                apply_patch.apply_to(art);
                            }
                        }
                    },
                    async move { ArtifyApi::new().update_art(&id, &patch).await },
                )
                .await;
            match result {
                Ok(()) => {
                    notify.success("Updated");
                    set_edit_id.set(None);
                    form.reset();
                }
                Err(e) => notify.error(format!("Failed to update: {}", e.user_message())),
            }
            set_edit_busy.set(false);
        });
    };

    let total = move || arts.items.with(|items| items.len());

    view! {
        <section class="max-w-6xl mx-auto px-4 py-8">
            <header class="mb-6">
                <h1 class="text-3xl font-extrabold">"My Gallery"</h1>
                <p class="mt-1 text-sm opacity-70">
                    "Manage artworks uploaded by "
                    <span class="font-semibold">
                        {move || scope_email.get().unwrap_or_default()}
                    </span>
                </p>
            </header>

            <div class="rounded-2xl border border-base-300 bg-base-100 shadow-sm overflow-hidden">
                <div class="flex items-center justify-between px-4 py-3 border-b border-base-300">
                    <p class="text-sm">
                        "Total items: " <span class="font-semibold">{total}</span>
                    </p>
                    <button
                        class="btn btn-ghost btn-circle btn-sm"
                        aria-label="Reload"
                        disabled=move || arts.loading.get()
                        on:click=move |_| load()
                    >
                        <RefreshCw attr:class=move || {
                            if arts.loading.get() { "h-4 w-4 animate-spin" } else { "h-4 w-4" }
                        } />
                    </button>
                </div>

                <div class="overflow-x-auto">
                    <table class="table table-zebra w-full">
                        <thead class="bg-base-200">
                            <tr>
                                <th class="w-16">"#"</th>
                                <th>"Artwork"</th>
                                <th class="w-40">"Category"</th>
                                <th class="w-32 text-right">"Price"</th>
                                <th class="w-40 text-right">"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <Show when=move || arts.loading.get()>
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
                                                        <div>
                                                            <div class="h-4 w-40 rounded bg-base-200 animate-pulse mb-2"></div>
                                                            <div class="h-3 w-24 rounded bg-base-200 animate-pulse"></div>
                                                        </div>
                                                    </div>
                                                </td>
                                                <td>
                                                    <span class="inline-block h-4 w-24 rounded bg-base-200 animate-pulse"></span>
                                                </td>
                                                <td class="text-right">
                                                    <span class="inline-block h-4 w-12 rounded bg-base-200 animate-pulse"></span>
                                                </td>
                                                <td class="text-right">
                                                    <span class="inline-block h-9 w-32 rounded bg-base-200 animate-pulse"></span>
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()}
                            </Show>
                            <Show when=move || !arts.loading.get()>
                                // 行内容会被乐观补丁就地改写，整体响应式重渲染
                                {move || arts
                                    .items
                                    .get()
                                    .into_iter()
                                    .enumerate()
                                    .map(|(idx, art): (usize, Artwork)| {
                                        let art_for_edit = art.clone();
                                        let art_for_delete = art.clone();
                                        let row_id = art.id.clone();
                                        view! {
                                            <tr class="hover">
                                                <td class="font-semibold">{idx + 1}</td>
                                                <td>
                                                    <div class="flex items-center gap-3">
                                                        <img
                                                            src=art.image.clone()
                                                            alt=art.title.clone()
                                                            class="h-14 w-20 rounded-lg object-cover ring-1 ring-base-300"
                                                            loading="lazy"
                                                        />
                                                        <div class="min-w-0">
                                                            <div class="font-semibold line-clamp-1">
                                                                {art.title.clone()}
                                                            </div>
                                                            <div class="text-xs opacity-70 line-clamp-1">
                                                                {if art.medium.is_empty() {
                                                                    "—".to_string()
                                                                } else {
                                                                    art.medium.clone()
                                                                }}
                                                            </div>
                                                        </div>
                                                    </div>
                                                </td>
                                                <td>
                                                    <span class="badge badge-primary font-semibold">
                                                        {art.category.clone()}
                                                    </span>
                                                </td>
                                                <td class="text-right">{format_price(art.price)}</td>
                                                <td class="text-right">
                                                    <div class="flex justify-end gap-2">
                                                        <button
                                                            class="btn btn-sm btn-outline gap-1"
                                                            on:click=move |_| open_edit(art_for_edit.clone())
                                                        >
                                                            <Pencil attr:class="h-3.5 w-3.5" />
                                                            "Edit"
                                                        </button>
                                                        <button
                                                            class=move || {
                                                                if busy_id.get().as_deref() == Some(row_id.as_str()) {
                                                                    "btn btn-outline btn-sm pointer-events-none opacity-60"
                                                                } else {
                                                                    "btn btn-outline btn-sm"
                                                                }
                                                            }
                                                            on:click=move |_| request_delete(art_for_delete.clone())
                                                        >
                                                            "Delete"
                                                        </button>
                                                    </div>
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()}
                            </Show>
                        </tbody>
                    </table>
                </div>

                <Show when=move || !arts.loading.get() && total() == 0>
                    <div class="p-10 text-center">
                        <h3 class="text-lg font-semibold">"No artworks yet"</h3>
                        <p class="opacity-70">"Add your first piece from the Add Artwork page."</p>
                    </div>
                </Show>
            </div>

            <ConfirmDialog
                open=Signal::derive(move || confirm_target.get().is_some())
                title="Delete this artwork?".to_string()
                message="This action cannot be undone.".to_string()
                confirm_label="Yes, delete".to_string()
                on_confirm=confirmed_delete
                on_cancel=cancel_delete
            />

            <EditArtworkDialog
                open=Signal::derive(move || edit_id.get().is_some())
                state=form
                busy=edit_busy
                on_save=save_edit
                on_close=close_edit
            />
        </section>
    }
}
