//! 管理面板概览（管理员）
//!
//! 聚合统计卡片 + 最近增长的简易条形图（服务端给出序列数据）。

use artify_shared::{AdminStats, GrowthPoint};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::SecureApi;
use crate::auth::use_session;
use crate::components::icons::{Flag, Palette, TrendingUp, Users};
use crate::components::loading::Loading;
use crate::components::toast::use_notify;

/// 条形宽度百分比（相对序列最大值）
fn bar_percent(point: &GrowthPoint, series: &[GrowthPoint]) -> u32 {
    let max = series.iter().map(|p| p.count).max().unwrap_or(0);
    if max <= 0 {
        return 0;
    }
    ((point.count.max(0) * 100) / max) as u32
}

#[component]
fn GrowthChart(title: &'static str, series: Vec<GrowthPoint>) -> impl IntoView {
    view! {
        <div class="bg-base-100 p-6 rounded-2xl shadow-lg border border-base-200">
            <div class="flex items-center gap-3 mb-6">
                <div class="p-2 bg-primary/10 rounded-xl text-primary">
                    <TrendingUp attr:class="h-5 w-5" />
                </div>
                <div>
                    <h3 class="text-lg font-bold">{title}</h3>
                    <p class="text-xs text-base-content/50">"Last 7 days"</p>
                </div>
            </div>
            {if series.is_empty() {
                view! {
                    <p class="text-sm opacity-60 text-center py-10">"No data yet"</p>
                }
                    .into_any()
            } else {
                let rows = series.clone();
                view! {
                    <div class="space-y-2">
                        {rows
                            .iter()
                            .map(|point| {
                                let percent = bar_percent(point, &series);
                                view! {
                                    <div class="flex items-center gap-3">
                                        <span class="w-16 text-xs opacity-70">{point.name.clone()}</span>
                                        <div class="flex-1 h-3 rounded-full bg-base-200 overflow-hidden">
                                            <div
                                                class="h-full rounded-full bg-primary"
                                                style=format!("width: {}%;", percent)
                                            ></div>
                                        </div>
                                        <span class="w-8 text-right text-xs font-semibold">
                                            {point.count}
                                        </span>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                }
                    .into_any()
            }}
        </div>
    }
}

#[component]
pub fn AdminHomePage() -> impl IntoView {
    let session = use_session();
    let notify = use_notify();

    let (stats, set_stats) = signal(Option::<AdminStats>::None);

    Effect::new(move |_| {
        let secure = SecureApi::new(session);
        spawn_local(async move {
            match secure.admin_stats().await {
                Ok(data) => set_stats.set(Some(data)),
                Err(e) => {
                    set_stats.set(Some(AdminStats::default()));
                    notify.error(format!("Failed to load: {}", e.user_message()));
                }
            }
        });
    });

    view! {
        <Show when=move || stats.get().is_some() fallback=|| view! { <Loading /> }>
            {move || {
                let s = stats.get().unwrap_or_default();
                view! {
                    <div class="space-y-8">
                        <div>
                            <h2 class="text-3xl font-bold mb-2">"Dashboard Overview"</h2>
                            <p class="text-base-content/60">
                                "Welcome back! Here's what's happening on Artify today."
                            </p>
                        </div>

                        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">
                            <div class="stat bg-base-100 shadow-xl rounded-2xl border border-base-200">
                                <div class="stat-figure text-primary">
                                    <Users attr:class="h-8 w-8" />
                                </div>
                                <div class="stat-title">"Total Users"</div>
                                <div class="stat-value text-primary">{s.total_users}</div>
                                <div class="stat-desc">"registered platform users"</div>
                            </div>
                            <div class="stat bg-base-100 shadow-xl rounded-2xl border border-base-200">
                                <div class="stat-figure text-secondary">
                                    <Palette attr:class="h-8 w-8" />
                                </div>
                                <div class="stat-title">"Public Arts"</div>
                                <div class="stat-value text-secondary">{s.total_public_arts}</div>
                                <div class="stat-desc">"visible to everyone"</div>
                            </div>
                            <div class="stat bg-base-100 shadow-xl rounded-2xl border border-base-200">
                                <div class="stat-figure text-error">
                                    <Flag attr:class="h-8 w-8" />
                                </div>
                                <div class="stat-title">"Reported Arts"</div>
                                <div class="stat-value text-error">{s.total_reported_arts}</div>
                                <div class="stat-desc">"pending moderation"</div>
                            </div>
                            <div class="stat bg-base-100 shadow-xl rounded-2xl border border-base-200">
                                <div class="stat-figure text-accent">
                                    <TrendingUp attr:class="h-8 w-8" />
                                </div>
                                <div class="stat-title">"New Today"</div>
                                <div class="stat-value text-accent">{s.today_arts}</div>
                                <div class="stat-desc">"arts created today"</div>
                            </div>
                        </div>

                        <div class="grid grid-cols-1 lg:grid-cols-2 gap-8">
                            <GrowthChart title="Arts Growth" series=s.art_growth.clone() />
                            <GrowthChart title="User Growth" series=s.user_growth.clone() />
                        </div>
                    </div>
                }
            }}
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(name: &str, count: i64) -> GrowthPoint {
        GrowthPoint {
            name: name.to_string(),
            count,
        }
    }

    #[test]
    fn bars_scale_against_series_max() {
        let series = vec![point("Mon", 2), point("Tue", 4), point("Wed", 0)];
        assert_eq!(bar_percent(&series[0], &series), 50);
        assert_eq!(bar_percent(&series[1], &series), 100);
        assert_eq!(bar_percent(&series[2], &series), 0);
    }

    #[test]
    fn empty_or_zero_series_yields_zero_width() {
        let series: Vec<GrowthPoint> = Vec::new();
        assert_eq!(bar_percent(&point("Mon", 3), &series), 0);
        let zeros = vec![point("Mon", 0)];
        assert_eq!(bar_percent(&zeros[0], &zeros), 0);
    }
}
