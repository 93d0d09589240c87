//! 被举报作品（管理员）
//!
//! 两个出口：删除被举报的作品（确认 + 乐观移除同作品的全部举报行），
//! 或直接撤销举报。失败都回滚。

use artify_shared::Report;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::SecureApi;
use crate::auth::use_session;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::icons::{Flag, Trash2};
use crate::components::loading::Loading;
use crate::components::toast::use_notify;
use crate::optimistic::ListState;

#[component]
pub fn ReportedArtsPage() -> impl IntoView {
    let session = use_session();
    let notify = use_notify();
    let reports: ListState<Report> = ListState::new();

    let (confirm_target, set_confirm_target) = signal(Option::<Report>::None);

    let load = move || {
        let generation = reports.begin_load();
        let secure = SecureApi::new(session);
        spawn_local(async move {
            match secure.admin_reports().await {
                Ok(items) => {
                    reports.finish_load(generation, items);
                }
                Err(e) => {
                    reports.finish_load(generation, Vec::new());
                    notify.error(format!("Failed to load: {}", e.user_message()));
                }
            }
        });
    };

    Effect::new(move |_| load());

    let cancel_delete = move |_: ()| set_confirm_target.set(None);

    // 删除作品：同一作品的所有举报行一并乐观移除
    let confirmed_delete = move |_: ()| {
        let Some(report) = confirm_target.get_untracked() else {
            return;
        };
        set_confirm_target.set(None);
        let secure = SecureApi::new(session);
        spawn_local(async move {
            let retain_art_id = report.art_id.clone();
            let commit_art_id = report.art_id.clone();
            let result = reports
                .mutate(
                    move |items| items.retain(|r| r.art_id != retain_art_id),
                    async move { secure.delete_art(&commit_art_id).await },
                )
                .await;
            match result {
                Ok(()) => notify.success("The art has been deleted."),
                Err(e) => notify.error(format!("Failed to delete art: {}", e.user_message())),
            }
        });
    };

    let dismiss_report = move |report: Report| {
        let secure = SecureApi::new(session);
        spawn_local(async move {
            let retain_id = report.id.clone();
            let commit_id = report.id.clone();
            let result = reports
                .mutate(
                    move |items| items.retain(|r| r.id != retain_id),
                    async move { secure.dismiss_report(&commit_id).await },
                )
                .await;
            match result {
                Ok(()) => notify.success("Report has been dismissed."),
                Err(e) => notify.error(format!("Failed to dismiss report: {}", e.user_message())),
            }
        });
    };

    let total = move || reports.items.with(|r| r.len());

    view! {
        <div class="space-y-6">
            <div>
                <h2 class="text-3xl font-bold">"Reported Arts"</h2>
                <p class="text-base-content/60">"Review and resolve community reports"</p>
            </div>

            <Show when=move || reports.loading.get()>
                <Loading />
            </Show>

            <Show when=move || !reports.loading.get()>
                <div class="overflow-x-auto bg-base-100 rounded-2xl shadow-xl border border-base-200">
                    <table class="table w-full">
                        <thead class="bg-error/10">
                            <tr>
                                <th>"Art Title"</th>
                                <th class="text-center">"Report Count"</th>
                                <th>"Reason"</th>
                                <th class="text-right">"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || reports.items.get()
                                key=|report| report.id.clone()
                                children=move |report: Report| {
                                    let for_delete = report.clone();
                                    let for_dismiss = report.clone();
                                    let title = report
                                        .art_title
                                        .clone()
                                        .unwrap_or_else(|| format!("Art ID: {}", report.art_id));
                                    view! {
                                        <tr class="hover">
                                            <td>
                                                <div class="font-bold">{title}</div>
                                                <div class="text-xs text-base-content/50">
                                                    "Report ID: " {report.id.clone()}
                                                </div>
                                            </td>
                                            <td class="text-center">
                                                <span class="badge badge-error gap-1 font-bold">
                                                    <Flag attr:class="h-3 w-3" />
                                                    {report.report_count}
                                                </span>
                                            </td>
                                            <td class="text-sm opacity-70">
                                                {report.reason.clone().unwrap_or_else(|| "—".to_string())}
                                            </td>
                                            <td class="text-right">
                                                <div class="flex items-center justify-end gap-2">
                                                    <button
                                                        class="btn btn-sm btn-ghost"
                                                        on:click={
                                                            let report = for_dismiss.clone();
                                                            move |_| dismiss_report(report.clone())
                                                        }
                                                    >
                                                        "Dismiss"
                                                    </button>
                                                    <button
                                                        class="btn btn-sm btn-error btn-outline gap-1"
                                                        on:click={
                                                            let report = for_delete.clone();
                                                            move |_| set_confirm_target.set(Some(report.clone()))
                                                        }
                                                    >
                                                        <Trash2 attr:class="h-4 w-4" />
                                                        "Delete Art"
                                                    </button>
                                                </div>
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>

                    <Show when=move || total() == 0>
                        <div class="p-12 text-center">
                            <h3 class="text-lg font-bold opacity-70">"No reports pending"</h3>
                            <p class="text-sm opacity-50">"The gallery is clean. Nice."</p>
                        </div>
                    </Show>
                </div>
            </Show>

            <ConfirmDialog
                open=Signal::derive(move || confirm_target.get().is_some())
                title="Delete Art?".to_string()
                message="This will permanently delete the content.".to_string()
                confirm_label="Yes, delete art!".to_string()
                on_confirm=confirmed_delete
                on_cancel=cancel_delete
            />
        </div>
    }
}
