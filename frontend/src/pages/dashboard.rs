//! 仪表盘：侧边栏布局、概览页、资料页
//!
//! 侧边栏的管理员分组只有在会话的角色解析为管理员后才出现。

use artify_shared::Artwork;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ArtifyApi;
use crate::auth::{ensure_admin_resolved, use_session};
use crate::components::art_card::Avatar;
use crate::components::icons::{
    BookmarkPlus, Flag, LayoutDashboard, Palette, Plus, ShieldCheck, UserRound, Users,
};
use crate::web::route::AppRoute;
use crate::web::router::{use_router, Link};

fn nav_class(router: &crate::web::router::RouterService, target: &AppRoute) -> &'static str {
    if router.current_route().get() == *target {
        "active"
    } else {
        ""
    }
}

#[component]
pub fn DashboardLayout(children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let router = use_router();

    // 侧边栏要不要展示管理员分组，取决于角色解析结果
    Effect::new(move |_| {
        let state = session.state.get();
        if !state.is_loading && state.principal.is_some() && state.is_admin.is_none() {
            ensure_admin_resolved(&session);
        }
    });

    let is_admin = move || session.state.get().is_admin == Some(true);

    view! {
        <div class="max-w-7xl mx-auto px-4 py-8 grid gap-6 lg:grid-cols-[240px_1fr]">
            <aside class="rounded-2xl border border-base-300 bg-base-100 p-4 h-fit">
                <ul class="menu gap-1">
                    <li>
                        <Link to=AppRoute::Dashboard class=nav_class(&router, &AppRoute::Dashboard)>
                            <LayoutDashboard attr:class="h-4 w-4" />
                            "Overview"
                        </Link>
                    </li>
                    <li>
                        <Link
                            to=AppRoute::DashboardGallery
                            class=nav_class(&router, &AppRoute::DashboardGallery)
                        >
                            <Palette attr:class="h-4 w-4" />
                            "My Gallery"
                        </Link>
                    </li>
                    <li>
                        <Link
                            to=AppRoute::DashboardAddArtwork
                            class=nav_class(&router, &AppRoute::DashboardAddArtwork)
                        >
                            <Plus attr:class="h-4 w-4" />
                            "Add Artwork"
                        </Link>
                    </li>
                    <li>
                        <Link
                            to=AppRoute::DashboardFavorites
                            class=nav_class(&router, &AppRoute::DashboardFavorites)
                        >
                            <BookmarkPlus attr:class="h-4 w-4" />
                            "Favorites"
                        </Link>
                    </li>
                    <li>
                        <Link to=AppRoute::Profile class=nav_class(&router, &AppRoute::Profile)>
                            <UserRound attr:class="h-4 w-4" />
                            "Profile"
                        </Link>
                    </li>
                </ul>

                <Show when=is_admin>
                    <div class="divider text-xs opacity-60">"Admin"</div>
                    <ul class="menu gap-1">
                        <li>
                            <Link to=AppRoute::AdminHome class=nav_class(&router, &AppRoute::AdminHome)>
                                <ShieldCheck attr:class="h-4 w-4" />
                                "Overview"
                            </Link>
                        </li>
                        <li>
                            <Link
                                to=AppRoute::ManageUsers
                                class=nav_class(&router, &AppRoute::ManageUsers)
                            >
                                <Users attr:class="h-4 w-4" />
                                "Manage Users"
                            </Link>
                        </li>
                        <li>
                            <Link
                                to=AppRoute::ManageArts
                                class=nav_class(&router, &AppRoute::ManageArts)
                            >
                                <Palette attr:class="h-4 w-4" />
                                "Manage Arts"
                            </Link>
                        </li>
                        <li>
                            <Link
                                to=AppRoute::ReportedArts
                                class=nav_class(&router, &AppRoute::ReportedArts)
                            >
                                <Flag attr:class="h-4 w-4" />
                                "Reported Arts"
                            </Link>
                        </li>
                    </ul>
                </Show>
            </aside>

            <main class="min-w-0">{children()}</main>
        </div>
    }
}

#[component]
pub fn DashboardHomePage() -> impl IntoView {
    let session = use_session();

    let (my_arts, set_my_arts) = signal(0usize);
    let (my_favorites, set_my_favorites) = signal(0usize);
    let (my_likes, set_my_likes) = signal(0i64);

    let scope_email = Memo::new(move |_| {
        let s = session.state.get();
        if s.is_loading {
            None
        } else {
            s.principal.as_ref().map(|p| p.email.clone())
        }
    });

    Effect::new(move |_| {
        let Some(email) = scope_email.get() else {
            return;
        };
        spawn_local(async move {
            let api = ArtifyApi::new();
            let (arts, favorites) = futures::join!(api.my_arts(&email), api.favorites(&email));
            if let Ok(arts) = arts {
                set_my_arts.set(arts.len());
                set_my_likes.set(arts.iter().map(|a: &Artwork| a.likes).sum());
            }
            if let Ok(favorites) = favorites {
                set_my_favorites.set(favorites.len());
            }
        });
    });

    let name = move || {
        session
            .state
            .get()
            .principal
            .map(|p| p.name)
            .unwrap_or_default()
    };

    view! {
        <div class="space-y-6">
            <div>
                <h2 class="text-3xl font-bold">"Welcome back, " {name} "!"</h2>
                <p class="text-base-content/60">"Here's what's happening with your art."</p>
            </div>

            <div class="stats stats-vertical md:stats-horizontal shadow w-full bg-base-100">
                <div class="stat">
                    <div class="stat-title">"My Artworks"</div>
                    <div class="stat-value text-primary">{my_arts}</div>
                    <div class="stat-desc">"pieces in your gallery"</div>
                </div>
                <div class="stat">
                    <div class="stat-title">"Favorites"</div>
                    <div class="stat-value text-secondary">{my_favorites}</div>
                    <div class="stat-desc">"artworks you saved"</div>
                </div>
                <div class="stat">
                    <div class="stat-title">"Likes Received"</div>
                    <div class="stat-value text-accent">{my_likes}</div>
                    <div class="stat-desc">"across all your pieces"</div>
                </div>
            </div>

            <div class="flex gap-3">
                <Link to=AppRoute::DashboardAddArtwork class="btn btn-primary">
                    "Add a new artwork"
                </Link>
                <Link to=AppRoute::Explore class="btn btn-outline">
                    "Explore the community"
                </Link>
            </div>
        </div>
    }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = use_session();

    let principal = move || session.state.get().principal;
    let role_badge = move || {
        match session.state.get().is_admin {
            Some(true) => "Administrator",
            Some(false) => "Member",
            None => "Member",
        }
    };

    view! {
        <div class="max-w-xl">
            <h2 class="text-3xl font-bold mb-6">"Profile"</h2>
            {move || {
                principal()
                    .map(|p| {
                        view! {
                            <div class="rounded-2xl border border-base-300 bg-base-100 p-6 flex items-center gap-5">
                                <Avatar name=p.name.clone() photo=p.photo_url.clone() />
                                <div>
                                    <p class="text-xl font-bold">{p.name.clone()}</p>
                                    <p class="opacity-70">{p.email.clone()}</p>
                                    <span class="badge badge-outline mt-2">{role_badge}</span>
                                </div>
                            </div>
                        }
                    })
            }}
        </div>
    }
}
