//! 管理用户（管理员）
//!
//! 角色提升/降级与删号都要确认；两者都是乐观变更 + 失败回滚。

use artify_shared::UserProfile;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::SecureApi;
use crate::auth::use_session;
use crate::components::art_card::Avatar;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::icons::{ShieldCheck, Trash2, UserRound};
use crate::components::loading::Loading;
use crate::components::toast::use_notify;
use crate::optimistic::ListState;

#[derive(Clone, PartialEq)]
enum PendingAction {
    ToggleRole(UserProfile),
    Delete(UserProfile),
}

impl PendingAction {
    fn title(&self) -> String {
        "Are you sure?".to_string()
    }

    fn message(&self) -> String {
        match self {
            PendingAction::ToggleRole(user) => {
                let action = if user.role.is_admin() {
                    "remove admin rights from"
                } else {
                    "promote"
                };
                format!("Do you want to {} {}?", action, user.name)
            }
            PendingAction::Delete(_) => "You won't be able to revert this!".to_string(),
        }
    }

    fn confirm_label(&self) -> &'static str {
        match self {
            PendingAction::ToggleRole(_) => "Yes, update it!",
            PendingAction::Delete(_) => "Yes, delete it!",
        }
    }
}

#[component]
pub fn ManageUsersPage() -> impl IntoView {
    let session = use_session();
    let notify = use_notify();
    let users: ListState<UserProfile> = ListState::new();

    let (pending, set_pending) = signal(Option::<PendingAction>::None);

    let load = move || {
        let generation = users.begin_load();
        let secure = SecureApi::new(session);
        spawn_local(async move {
            match secure.users().await {
                Ok(items) => {
                    users.finish_load(generation, items);
                }
                Err(e) => {
                    users.finish_load(generation, Vec::new());
                    notify.error(format!("Failed to load: {}", e.user_message()));
                }
            }
        });
    };

    Effect::new(move |_| load());

    let cancel = move |_: ()| set_pending.set(None);

    let confirmed = move |_: ()| {
        let Some(action) = pending.get_untracked() else {
            return;
        };
        set_pending.set(None);
        let secure = SecureApi::new(session);
        match action {
            PendingAction::ToggleRole(user) => {
                let next = user.role.toggled();
                spawn_local(async move {
                    let apply_id = user.id.clone();
                    let commit_id = user.id.clone();
                    let result = users
                        .mutate(
                            move |items| {
                                for u in items.iter_mut() {
                                    if u.id == apply_id {
                                        u.role = next;
                                    }
                                }
                            },
                            async move { secure.update_role(&commit_id, next).await },
                        )
                        .await;
                    match result {
                        Ok(()) => notify.success(format!("User role updated to {}!", next)),
                        Err(e) => {
                            notify.error(format!("Failed to update role: {}", e.user_message()))
                        }
                    }
                });
            }
            PendingAction::Delete(user) => {
                spawn_local(async move {
                    let retain_id = user.id.clone();
                    let commit_id = user.id.clone();
                    let result = users
                        .mutate(
                            move |items| items.retain(|u| u.id != retain_id),
                            async move { secure.delete_user(&commit_id).await },
                        )
                        .await;
                    match result {
                        Ok(()) => notify.success("User account has been deleted."),
                        Err(e) => {
                            notify.error(format!("Failed to delete user: {}", e.user_message()))
                        }
                    }
                });
            }
        }
    };

    let total = move || users.items.with(|u| u.len());

    view! {
        <div class="space-y-6">
            <div>
                <h2 class="text-3xl font-bold">"Manage Users"</h2>
                <p class="text-base-content/60">"Total Users: " {total}</p>
            </div>

            <Show when=move || users.loading.get()>
                <Loading />
            </Show>

            <Show when=move || !users.loading.get()>
                <div class="overflow-x-auto bg-base-100 rounded-2xl shadow-xl border border-base-200">
                    <table class="table w-full">
                        <thead class="bg-base-200/50">
                            <tr>
                                <th>"#"</th>
                                <th>"User"</th>
                                <th>"Role"</th>
                                <th class="text-center">"Arts Created"</th>
                                <th class="text-right">"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            // 角色是就地乐观翻转，行整体响应式重渲染
                            {move || users
                                .items
                                .get()
                                .into_iter()
                                .enumerate()
                                .map(|(idx, user): (usize, UserProfile)| {
                                    let for_role = user.clone();
                                    let for_delete = user.clone();
                                    view! {
                                        <tr class="hover">
                                            <td>{idx + 1}</td>
                                            <td>
                                                <div class="flex items-center gap-3">
                                                    <Avatar name=user.name.clone() photo=user.photo_url.clone() />
                                                    <div>
                                                        <div class="font-bold">{user.name.clone()}</div>
                                                        <div class="text-xs opacity-50">{user.email.clone()}</div>
                                                    </div>
                                                </div>
                                            </td>
                                            <td>
                                                {if user.role.is_admin() {
                                                    view! {
                                                        <span class="badge badge-primary gap-1">
                                                            <ShieldCheck attr:class="h-3 w-3" />
                                                            "Admin"
                                                        </span>
                                                    }
                                                        .into_any()
                                                } else {
                                                    view! {
                                                        <span class="badge badge-ghost gap-1">
                                                            <UserRound attr:class="h-3 w-3" />
                                                            "User"
                                                        </span>
                                                    }
                                                        .into_any()
                                                }}
                                            </td>
                                            <td class="text-center">{user.arts_count}</td>
                                            <td class="text-right">
                                                <div class="flex items-center justify-end gap-2">
                                                    <button
                                                        class="btn btn-sm btn-outline"
                                                        on:click={
                                                            let user = for_role.clone();
                                                            move |_| set_pending
                                                                .set(Some(PendingAction::ToggleRole(user.clone())))
                                                        }
                                                    >
                                                        {if for_role.role.is_admin() {
                                                            "Demote"
                                                        } else {
                                                            "Make Admin"
                                                        }}
                                                    </button>
                                                    <button
                                                        class="btn btn-sm btn-ghost text-error"
                                                        title="Delete user"
                                                        on:click={
                                                            let user = for_delete.clone();
                                                            move |_| set_pending
                                                                .set(Some(PendingAction::Delete(user.clone())))
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

                    <Show when=move || total() == 0>
                        <div class="p-12 text-center">
                            <h3 class="text-lg font-bold opacity-70">"No users found"</h3>
                        </div>
                    </Show>
                </div>
            </Show>

            <ConfirmDialog
                open=Signal::derive(move || pending.get().is_some())
                title=Signal::derive(move || {
                    pending.get().map(|p| p.title()).unwrap_or_default()
                })
                message=Signal::derive(move || {
                    pending.get().map(|p| p.message()).unwrap_or_default()
                })
                confirm_label=Signal::derive(move || {
                    pending
                        .get()
                        .map(|p| p.confirm_label().to_string())
                        .unwrap_or_default()
                })
                on_confirm=confirmed
                on_cancel=cancel
            />
        </div>
    }
}
