//! 管理作品（管理员）
//!
//! 全量列表来自安全端点；标签页过滤与子串搜索都在已拉取的
//! 数据上进行。精选/可见性开关是乐观翻转 + 恰好一次 PATCH；
//! 删除走确认弹窗。

use artify_shared::{Artwork, ArtworkPatch};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::SecureApi;
use crate::auth::use_session;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::icons::{Globe, Lock, Search, Star, Trash2};
use crate::components::loading::Loading;
use crate::components::toast::use_notify;
use crate::optimistic::ListState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum ArtsTab {
    #[default]
    All,
    Public,
    Private,
    Featured,
    Reported,
}

impl ArtsTab {
    const ALL: [ArtsTab; 5] = [
        ArtsTab::All,
        ArtsTab::Public,
        ArtsTab::Private,
        ArtsTab::Featured,
        ArtsTab::Reported,
    ];

    fn label(self) -> &'static str {
        match self {
            ArtsTab::All => "All Arts",
            ArtsTab::Public => "Public",
            ArtsTab::Private => "Private",
            ArtsTab::Featured => "Featured",
            ArtsTab::Reported => "Reported",
        }
    }

    fn matches(self, art: &Artwork) -> bool {
        match self {
            ArtsTab::All => true,
            ArtsTab::Public => !art.visibility.is_private(),
            ArtsTab::Private => art.visibility.is_private(),
            ArtsTab::Featured => art.featured,
            ArtsTab::Reported => art.reported,
        }
    }
}

fn filter_arts(arts: &[Artwork], tab: ArtsTab, query: &str) -> Vec<Artwork> {
    arts.iter()
        .filter(|a| tab.matches(a) && a.matches_query(query))
        .cloned()
        .collect()
}

#[component]
pub fn ManageArtsPage() -> impl IntoView {
    let session = use_session();
    let notify = use_notify();
    let arts: ListState<Artwork> = ListState::new();

    let (tab, set_tab) = signal(ArtsTab::All);
    let (query, set_query) = signal(String::new());
    let (confirm_target, set_confirm_target) = signal(Option::<Artwork>::None);

    let load = move || {
        let generation = arts.begin_load();
        let secure = SecureApi::new(session);
        spawn_local(async move {
            match secure.admin_arts().await {
                Ok(items) => {
                    arts.finish_load(generation, items);
                }
                Err(e) => {
                    arts.finish_load(generation, Vec::new());
                    notify.error(format!("Failed to load: {}", e.user_message()));
                }
            }
        });
    };

    Effect::new(move |_| load());

    let filtered = move || arts.items.with(|items| filter_arts(items, tab.get(), &query.get()));

    // 精选开关：乐观翻转徽标，恰好一次 PATCH { featured: <new> }
    let toggle_featured = move |art: Artwork| {
        let next = !art.featured;
        let secure = SecureApi::new(session);
        spawn_local(async move {
            let apply_id = art.id.clone();
            let commit_id = art.id.clone();
            let result = arts
                .mutate(
                    move |items| {
                        for a in items.iter_mut() {
                            if a.id == apply_id {
                                a.featured = next;
                            }
                        }
                    },
                    async move {
                        secure
                            .update_art(&commit_id, &ArtworkPatch::feature(next))
                            .await
                    },
                )
                .await;
            match result {
                Ok(()) => notify.success("Updated"),
                Err(e) => notify.error(format!("Failed to update: {}", e.user_message())),
            }
        });
    };

    let toggle_visibility = move |art: Artwork| {
        let next = art.visibility.toggled();
        let secure = SecureApi::new(session);
        spawn_local(async move {
            let apply_id = art.id.clone();
            let commit_id = art.id.clone();
            let result = arts
                .mutate(
                    move |items| {
                        for a in items.iter_mut() {
                            if a.id == apply_id {
                                a.visibility = next;
                            }
                        }
                    },
                    async move {
                        secure
                            .update_art(&commit_id, &ArtworkPatch::set_visibility(next))
                            .await
                    },
                )
                .await;
            match result {
                Ok(()) => notify.success("Updated"),
                Err(e) => notify.error(format!("Failed to update: {}", e.user_message())),
            }
        });
    };

    let cancel_delete = move |_: ()| set_confirm_target.set(None);

    let confirmed_delete = move |_: ()| {
        let Some(art) = confirm_target.get_untracked() else {
            return;
        };
        set_confirm_target.set(None);
        let secure = SecureApi::new(session);
        spawn_local(async move {
            let retain_id = art.id.clone();
            let commit_id = art.id.clone();
            let result = arts
                .mutate(
                    move |items| items.retain(|a| a.id != retain_id),
                    async move { secure.delete_art(&commit_id).await },
                )
                .await;
            match result {
                Ok(()) => notify.success("Art has been removed."),
                Err(e) => notify.error(format!("Failed to delete: {}", e.user_message())),
            }
        });
    };

    view! {
        <div class="space-y-6">
            <div>
                <h2 class="text-3xl font-bold">"Manage Arts"</h2>
                <p class="text-base-content/60">"Moderate and curate platform content"</p>
            </div>

            <div class="flex flex-col md:flex-row justify-between items-center gap-4 bg-base-100 p-2 rounded-2xl shadow-sm border border-base-200">
                <div class="tabs tabs-boxed bg-transparent p-0 gap-2">
                    {ArtsTab::ALL
                        .iter()
                        .map(|t| {
                            let t = *t;
                            view! {
                                <a
                                    class=move || {
                                        if tab.get() == t {
                                            "tab h-10 px-6 rounded-xl bg-primary text-primary-content shadow-md"
                                        } else {
                                            "tab h-10 px-6 rounded-xl hover:bg-base-200"
                                        }
                                    }
                                    on:click=move |_| set_tab.set(t)
                                >
                                    {t.label()}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="relative w-full md:w-auto">
                    <span class="absolute left-3 top-1/2 -translate-y-1/2 text-base-content/50">
                        <Search attr:class="h-4 w-4" />
                    </span>
                    <input
                        type="text"
                        placeholder="Search arts..."
                        class="input input-sm input-bordered pl-10 w-full md:w-64 rounded-xl"
                        on:input=move |ev| set_query.set(event_target_value(&ev))
                        prop:value=query
                    />
                </div>
            </div>

            <Show when=move || arts.loading.get()>
                <Loading />
            </Show>

            <Show when=move || !arts.loading.get()>
                <div class="overflow-x-auto bg-base-100 rounded-2xl shadow-xl border border-base-200">
                    <table class="table w-full">
                        <thead class="bg-base-200/50">
                            <tr>
                                <th>"Art"</th>
                                <th>"Artist"</th>
                                <th>"Status"</th>
                                <th class="text-right pr-6">"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            // 开关是就地乐观翻转，行整体响应式重渲染
                            {move || filtered()
                                .into_iter()
                                .map(|art: Artwork| {
                                    let featured_flag = art.featured;
                                    let for_feature = art.clone();
                                    let for_visibility = art.clone();
                                    let for_delete = art.clone();
                                    view! {
                                        <tr class="hover">
                                            <td>
                                                <div class="flex items-center gap-3">
                                                    <div class="avatar">
                                                        <div class="mask mask-squircle w-12 h-12">
                                                            <img src=art.image.clone() alt=art.title.clone() />
                                                        </div>
                                                    </div>
                                                    <div>
                                                        <div class="font-bold">{art.title.clone()}</div>
                                                        <div class="badge badge-ghost badge-sm mt-1 text-xs opacity-70">
                                                            {art.category.clone()}
                                                        </div>
                                                    </div>
                                                </div>
                                            </td>
                                            <td>
                                                <div class="flex flex-col">
                                                    <span class="font-medium">
                                                        {if art.user_name.is_empty() {
                                                            "Unknown".to_string()
                                                        } else {
                                                            art.user_name.clone()
                                                        }}
                                                    </span>
                                                    <span class="text-xs opacity-50">{art.user_email.clone()}</span>
                                                </div>
                                            </td>
                                            <td>
                                                <div class="flex flex-wrap gap-2">
                                                    {if art.visibility.is_private() {
                                                        view! {
                                                            <span class="badge badge-ghost gap-1">
                                                                <Lock attr:class="h-3 w-3" />
                                                                "Private"
                                                            </span>
                                                        }
                                                            .into_any()
                                                    } else {
                                                        view! {
                                                            <span class="badge badge-success badge-outline gap-1">
                                                                <Globe attr:class="h-3 w-3" />
                                                                "Public"
                                                            </span>
                                                        }
                                                            .into_any()
                                                    }}
                                                    <Show when={
                                                        let featured = art.featured;
                                                        move || featured
                                                    }>
                                                        <span class="badge badge-warning badge-outline gap-1">
                                                            <Star attr:class="h-3 w-3" />
                                                            "Featured"
                                                        </span>
                                                    </Show>
                                                </div>
                                            </td>
                                            <td class="text-right">
                                                <div class="flex items-center justify-end gap-2">
                                                    <button
                                                        class=move || {
                                                            if featured_flag {
                                                                "btn btn-circle btn-sm btn-warning"
                                                            } else {
                                                                "btn btn-circle btn-sm btn-ghost"
                                                            }
                                                        }
                                                        title="Toggle featured"
                                                        on:click={
                                                            let art = for_feature.clone();
                                                            move |_| toggle_featured(art.clone())
                                                        }
                                                    >
                                                        <Star attr:class="h-4 w-4" />
                                                    </button>
                                                    <button
                                                        class="btn btn-circle btn-sm btn-ghost"
                                                        title="Toggle visibility"
                                                        on:click={
                                                            let art = for_visibility.clone();
                                                            move |_| toggle_visibility(art.clone())
                                                        }
                                                    >
                                                        {if for_visibility.visibility.is_private() {
                                                            view! { <Lock attr:class="h-4 w-4" /> }.into_any()
                                                        } else {
                                                            view! { <Globe attr:class="h-4 w-4" /> }.into_any()
                                                        }}
                                                    </button>
                                                    <button
                                                        class="btn btn-circle btn-sm btn-ghost text-error"
                                                        title="Delete art"
                                                        on:click={
                                                            let art = for_delete.clone();
                                                            move |_| set_confirm_target.set(Some(art.clone()))
                                                        }
                                                    >
                                                        <Trash2 attr:class="h-4 w-4" />
                                                    </button>
                                                </div>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect_view()}
                        </tbody>
                    </table>

                    <Show when=move || filtered().is_empty()>
                        <div class="flex flex-col items-center justify-center p-12 text-center">
                            <h3 class="text-lg font-bold opacity-70">"No artworks found"</h3>
                            <p class="text-sm opacity-50">"Try adjusting your filters or search query."</p>
                        </div>
                    </Show>
                </div>
            </Show>

            <ConfirmDialog
                open=Signal::derive(move || confirm_target.get().is_some())
                title="Are you sure?".to_string()
                message="Permanent removal. This cannot be undone!".to_string()
                confirm_label="Yes, delete it!".to_string()
                on_confirm=confirmed_delete
                on_cancel=cancel_delete
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn art(json: serde_json::Value) -> Artwork {
        serde_json::from_value(json).unwrap()
    }

    fn sample() -> Vec<Artwork> {
        vec![
            art(serde_json::json!({
                "_id": "a", "title": "Dawn", "userName": "Mira",
                "visibility": "public", "featured": true,
            })),
            art(serde_json::json!({
                "_id": "b", "title": "Dusk", "userName": "Noor",
                "visibility": "private",
            })),
            art(serde_json::json!({
                "_id": "c", "title": "Storm", "userName": "Mira",
                "visibility": "public", "isReported": true,
            })),
        ]
    }

    #[test]
    fn tabs_partition_by_flags() {
        let arts = sample();
        assert_eq!(filter_arts(&arts, ArtsTab::All, "").len(), 3);
        assert_eq!(filter_arts(&arts, ArtsTab::Public, "").len(), 2);
        assert_eq!(filter_arts(&arts, ArtsTab::Private, "").len(), 1);
        assert_eq!(filter_arts(&arts, ArtsTab::Featured, "")[0].id, "a");
        assert_eq!(filter_arts(&arts, ArtsTab::Reported, "")[0].id, "c");
    }

    #[test]
    fn search_filters_within_the_active_tab() {
        let arts = sample();
        let hits = filter_arts(&arts, ArtsTab::Public, "mira");
        assert_eq!(hits.len(), 2);
        assert!(filter_arts(&arts, ArtsTab::Private, "mira").is_empty());
        assert_eq!(filter_arts(&arts, ArtsTab::All, "storm")[0].id, "c");
    }
}
