//! 首页
//!
//! 自动轮播的英雄区、精选作品条、分类入口，以及站点统计。
//! 统计基于一次大页拉取 + 聚合点赞数（后者带 60 秒新鲜度窗口）。

use std::collections::HashSet;

use artify_shared::{Artwork, CATEGORIES};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{ArtifyApi, ArtsQuery};
use crate::components::art_card::{ArtCard, ArtCardSkeleton};
use crate::components::icons::{ChevronLeft, ChevronRight, Palette};
use crate::optimistic::ListState;
use crate::web::route::AppRoute;
use crate::web::router::Link;
use crate::web::Interval;

const SLIDES: &[(&str, &str, &str)] = &[
    (
        "Discover Original Art",
        "Browse paintings, digital works and sculpture from artists around the world.",
        "https://images.unsplash.com/photo-1547891654-e66ed7ebb968?w=1600",
    ),
    (
        "Share Your Creativity",
        "Upload your own work, build a gallery, and grow an audience.",
        "https://images.unsplash.com/photo-1513364776144-60967b0f800f?w=1600",
    ),
    (
        "Collect What You Love",
        "Save favorites and follow the artists behind them.",
        "https://images.unsplash.com/photo-1578926288207-a90a5366759d?w=1600",
    ),
];

/// 站点统计（从一页作品 + 聚合点赞数推导）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct SiteStats {
    total_artworks: usize,
    total_artists: usize,
    total_categories: usize,
    total_likes: u64,
}

fn compute_stats(arts: &[Artwork], total_likes: u64) -> SiteStats {
    let artists: HashSet<&str> = arts
        .iter()
        .map(|a| a.user_email.as_str())
        .filter(|e| !e.is_empty())
        .collect();
    let categories: HashSet<&str> = arts
        .iter()
        .map(|a| a.category.as_str())
        .filter(|c| !c.is_empty())
        .collect();
    SiteStats {
        total_artworks: arts.len(),
        total_artists: artists.len(),
        total_categories: categories.len(),
        total_likes,
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let (slide, set_slide) = signal(0usize);
    let slide_count = SLIDES.len();

    // 5 秒自动前进；Interval 挂在组件 owner 上，卸载时随之清除
    let timer = Interval::new(5000, move || {
        set_slide.update(|s| *s = (*s + 1) % slide_count);
    });
    let _slider_timer = StoredValue::new_local(timer);

    let featured: ListState<Artwork> = ListState::new();
    Effect::new(move |_| {
        let generation = featured.begin_load();
        spawn_local(async move {
            match ArtifyApi::new().featured_arts().await {
                Ok(items) => {
                    featured.finish_load(generation, items);
                }
                Err(e) => {
                    // 首页条带读失败只降级为空，不打断整页
                    web_sys::console::warn_1(&format!("[Home] featured failed: {}", e).into());
                    featured.finish_load(generation, Vec::new());
                }
            }
        });
    });

    let (stats, set_stats) = signal(SiteStats::default());
    Effect::new(move |_| {
        spawn_local(async move {
            let api = ArtifyApi::new();
            let query = ArtsQuery {
                page: 1,
                limit: 10_000,
                ..ArtsQuery::default()
            };
            let (arts, likes) = futures::join!(api.list_arts(&query), api.total_likes_cached());
            let arts = arts.map(|p| p.items).unwrap_or_default();
            let likes = likes.unwrap_or(0);
            set_stats.set(compute_stats(&arts, likes));
        });
    });

    let stat_items = move || {
        let s = stats.get();
        [
            ("Artworks Uploaded", s.total_artworks as u64),
            ("Active Artists", s.total_artists as u64),
            ("Styles & Categories", s.total_categories as u64),
            ("Total Favorites", s.total_likes),
        ]
    };

    view! {
        <div>
            // 英雄轮播
            <section class="relative h-[60vh] min-h-[380px] overflow-hidden">
                {SLIDES
                    .iter()
                    .enumerate()
                    .map(|(i, (title, subtitle, image))| {
                        view! {
                            <div
                                class=move || {
                                    if slide.get() == i {
                                        "absolute inset-0 transition-opacity duration-700 opacity-100"
                                    } else {
                                        "absolute inset-0 transition-opacity duration-700 opacity-0 pointer-events-none"
                                    }
                                }
                                style=format!(
                                    "background-image: url('{}'); background-size: cover; background-position: center;",
                                    image,
                                )
                            >
                                <div class="absolute inset-0 bg-black/50"></div>
                                <div class="relative z-10 flex h-full flex-col items-center justify-center px-4 text-center text-white">
                                    <h1 class="text-4xl md:text-5xl font-extrabold">{*title}</h1>
                                    <p class="mt-4 max-w-xl opacity-90">{*subtitle}</p>
                                    <div class="mt-6 flex gap-3">
                                        <Link to=AppRoute::Explore class="btn btn-primary">
                                            "Explore Artworks"
                                        </Link>
                                        <Link to=AppRoute::AddArtwork class="btn btn-outline text-white border-white">
                                            "Share Your Art"
                                        </Link>
                                    </div>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}

                <button
                    class="btn btn-circle btn-sm absolute left-4 top-1/2 z-20 -translate-y-1/2"
                    aria-label="Previous slide"
                    on:click=move |_| {
                        set_slide.update(|s| *s = (*s + slide_count - 1) % slide_count)
                    }
                >
                    <ChevronLeft attr:class="h-4 w-4" />
                </button>
                <button
                    class="btn btn-circle btn-sm absolute right-4 top-1/2 z-20 -translate-y-1/2"
                    aria-label="Next slide"
                    on:click=move |_| set_slide.update(|s| *s = (*s + 1) % slide_count)
                >
                    <ChevronRight attr:class="h-4 w-4" />
                </button>
            </section>

            // 精选作品
            <section class="max-w-6xl mx-auto px-4 py-12">
                <header class="mb-6 flex items-center justify-between">
                    <div>
                        <h2 class="text-3xl font-extrabold">"Featured Artworks"</h2>
                        <p class="mt-1 text-sm opacity-70">"Hand-picked highlights from the community."</p>
                    </div>
                    <Link to=AppRoute::Explore class="btn btn-ghost btn-sm">
                        "See all"
                    </Link>
                </header>
                <div class="grid gap-5 sm:grid-cols-2 lg:grid-cols-3">
                    <Show when=move || featured.loading.get()>
                        {(0..3).map(|_| view! { <ArtCardSkeleton /> }).collect_view()}
                    </Show>
                    <Show when=move || !featured.loading.get()>
                        <For
                            each=move || featured.items.get()
                            key=|art| art.id.clone()
                            children=move |art: Artwork| view! { <ArtCard art=art /> }
                        />
                    </Show>
                </div>
            </section>

            // 分类入口
            <section class="bg-base-200 py-12">
                <div class="max-w-6xl mx-auto px-4">
                    <h2 class="text-2xl font-extrabold mb-6">"Browse by Category"</h2>
                    <div class="flex flex-wrap gap-3">
                        {CATEGORIES
                            .iter()
                            .map(|c| {
                                view! {
                                    <Link
                                        to=AppRoute::Explore
                                        class="btn btn-outline gap-2"
                                    >
                                        <Palette attr:class="h-4 w-4" />
                                        {*c}
                                    </Link>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </section>

            // 站点统计
            <section class="py-16 bg-primary text-primary-content">
                <div class="max-w-6xl mx-auto px-4">
                    <div class="grid grid-cols-2 lg:grid-cols-4 gap-8 text-center">
                        {move || {
                            stat_items()
                                .into_iter()
                                .map(|(label, value)| {
                                    view! {
                                        <div>
                                            <p class="text-4xl font-extrabold">{value}</p>
                                            <p class="mt-1 opacity-80">{label}</p>
                                        </div>
                                    }
                                })
                                .collect_view()
                        }}
                    </div>
                </div>
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn art(email: &str, category: &str) -> Artwork {
        serde_json::from_value(serde_json::json!({
            "_id": format!("{}-{}", email, category),
            "title": "t",
            "image": "i",
            "userEmail": email,
            "category": category,
        }))
        .unwrap()
    }

    #[test]
    fn stats_count_unique_artists_and_categories() {
        let arts = vec![
            art("a@x.com", "Painting"),
            art("a@x.com", "Digital"),
            art("b@x.com", "Painting"),
            art("", ""),
        ];
        let stats = compute_stats(&arts, 42);
        assert_eq!(stats.total_artworks, 4);
        assert_eq!(stats.total_artists, 2);
        assert_eq!(stats.total_categories, 2);
        assert_eq!(stats.total_likes, 42);
    }

    #[test]
    fn stats_on_empty_page_are_zero() {
        assert_eq!(compute_stats(&[], 0), SiteStats::default());
    }
}
