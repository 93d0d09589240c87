//! Explore - 服务端分页的作品检索
//!
//! page/limit/search/category 作为查询参数发给专用分页端点；
//! 网格渲染的就是响应的 data 数组本身。总页数按服务端报告的
//! total 计算，未报告时退化为本页长度。

use artify_shared::{Artwork, CATEGORIES, DEFAULT_PAGE_LIMIT};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{ArtifyApi, ArtsQuery};
use crate::components::art_card::{ArtCard, ArtCardSkeleton};
use crate::components::icons::{ChevronLeft, ChevronRight, Search};
use crate::components::toast::use_notify;
use crate::optimistic::ListState;

#[component]
pub fn ExplorePage() -> impl IntoView {
    let notify = use_notify();
    let arts: ListState<Artwork> = ListState::new();

    let (search, set_search) = signal(String::new());
    let (category, set_category) = signal(String::new());
    let (page, set_page) = signal(1u32);
    let (total_pages, set_total_pages) = signal(1u32);

    let load = move || {
        let query = ArtsQuery {
            page: page.get_untracked(),
            limit: DEFAULT_PAGE_LIMIT,
            search: search.get_untracked(),
            category: category.get_untracked(),
            sort: String::new(),
        };
        let generation = arts.begin_load();
        spawn_local(async move {
            match ArtifyApi::new().list_arts(&query).await {
                Ok(paged) => {
                    set_total_pages.set(paged.total_pages());
                    arts.finish_load(generation, paged.items);
                }
                Err(e) => {
                    arts.finish_load(generation, Vec::new());
                    set_total_pages.set(1);
                    notify.error(format!("Failed to load: {}", e.user_message()));
                }
            }
        });
    };

    // 首次挂载拉取一次；之后由搜索按钮/翻页驱动
    Effect::new(move |_| load());

    let on_search = move |_| {
        set_page.set(1);
        load();
    };

    let go_to_page = move |target: u32| {
        set_page.set(target);
        load();
    };

    view! {
        <section class="max-w-6xl mx-auto px-4 py-10">
            <header class="mb-6">
                <h2 class="text-3xl font-extrabold">"Explore Artworks"</h2>
                <p class="mt-1 text-sm opacity-70">"Search, filter, and discover more artworks."</p>
            </header>

            <div class="flex flex-col sm:flex-row gap-3 mb-6">
                <input
                    placeholder="Search title or artist"
                    class="input input-bordered w-full"
                    on:input=move |ev| set_search.set(event_target_value(&ev))
                    prop:value=search
                />
                <select
                    class="select select-bordered w-full sm:w-48"
                    on:change=move |ev| set_category.set(event_target_value(&ev))
                >
                    <option value="" selected=move || category.get().is_empty()>
                        "All"
                    </option>
                    {CATEGORIES
                        .iter()
                        .map(|c| {
                            view! {
                                <option value=*c selected=move || category.get() == *c>
                                    {*c}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
                <button class="btn btn-primary w-full sm:w-auto gap-2" on:click=on_search>
                    <Search attr:class="h-4 w-4" />
                    "Search"
                </button>
            </div>

            <div class="grid gap-5 sm:grid-cols-2 lg:grid-cols-3">
                <Show when=move || arts.loading.get()>
                    {(0..6).map(|_| view! { <ArtCardSkeleton /> }).collect_view()}
                </Show>
                <Show when=move || !arts.loading.get()>
                    <For
                        each=move || arts.items.get()
                        key=|art| art.id.clone()
                        children=move |art: Artwork| view! { <ArtCard art=art /> }
                    />
                </Show>
            </div>

            <Show when=move || !arts.loading.get() && arts.items.with(|a| a.is_empty())>
                <div class="mt-10 text-center border border-dashed border-base-300 p-10 rounded-xl">
                    <h3 class="text-lg font-semibold">"No artworks found"</h3>
                    <p class="opacity-70">"Try another search or category."</p>
                </div>
            </Show>

            <Show when=move || (total_pages.get() > 1)>
                <div class="mt-8 flex items-center justify-center gap-2">
                    <button
                        class="btn btn-sm btn-outline"
                        disabled=move || page.get() <= 1 || arts.loading.get()
                        on:click=move |_| {
                            let current = page.get_untracked();
                            if current > 1 {
                                go_to_page(current - 1);
                            }
                        }
                    >
                        <ChevronLeft attr:class="h-4 w-4" />
                        "Prev"
                    </button>
                    <span class="text-sm opacity-70">
                        "Page " {move || page.get()} " of " {move || total_pages.get()}
                    </span>
                    <button
                        class="btn btn-sm btn-outline"
                        disabled=move || page.get() >= total_pages.get() || arts.loading.get()
                        on:click=move |_| {
                            let current = page.get_untracked();
                            if current < total_pages.get_untracked() {
                                go_to_page(current + 1);
                            }
                        }
                    >
                        "Next"
                        <ChevronRight attr:class="h-4 w-4" />
                    </button>
                </div>
            </Show>
        </section>
    }
}
