//! 顶部导航
//!
//! 公开链接 + 会话相关区域：未登录给登录/注册入口，
//! 已登录给头像下拉（画廊/收藏/仪表盘/登出）。

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::auth::{logout, use_session};
use crate::components::art_card::Avatar;
use crate::components::icons::{LogOut, Palette};
use crate::components::theme_switcher::ThemeSwitcher;
use crate::web::route::AppRoute;
use crate::web::router::Link;

#[component]
pub fn Navbar() -> impl IntoView {
    let session = use_session();

    let principal = move || session.state.get().principal.clone();
    let on_logout = move |_| {
        spawn_local(async move {
            logout(&session).await;
        });
    };

    view! {
        <div class="navbar bg-base-100 border-b border-base-300 sticky top-0 z-40 px-4">
            <div class="flex-1 gap-2">
                <Link to=AppRoute::Home class="btn btn-ghost text-xl gap-2">
                    <Palette attr:class="h-6 w-6 text-primary" />
                    "Artify"
                </Link>
                <div class="hidden md:flex gap-1">
                    <Link to=AppRoute::Home class="btn btn-ghost btn-sm">"Home"</Link>
                    <Link to=AppRoute::Explore class="btn btn-ghost btn-sm">"Explore"</Link>
                    <Show when=move || principal().is_some()>
                        <Link to=AppRoute::AddArtwork class="btn btn-ghost btn-sm">"Add Artwork"</Link>
                        <Link to=AppRoute::Gallery class="btn btn-ghost btn-sm">"My Gallery"</Link>
                        <Link to=AppRoute::Favorites class="btn btn-ghost btn-sm">"Favorites"</Link>
                    </Show>
                </div>
            </div>
            <div class="flex-none gap-2">
                <ThemeSwitcher />
                <Show
                    when=move || principal().is_some()
                    fallback=|| {
                        view! {
                            <Link to=AppRoute::Login class="btn btn-ghost btn-sm">"Login"</Link>
                            <Link to=AppRoute::Register class="btn btn-primary btn-sm">"Register"</Link>
                        }
                    }
                >
                    <div class="dropdown dropdown-end">
                        <div tabindex="0" role="button" class="btn btn-ghost btn-circle avatar">
                            {move || {
                                let p = principal().unwrap_or_else(|| crate::auth::Principal {
                                    email: String::new(),
                                    name: String::new(),
                                    photo_url: None,
                                });
                                view! { <Avatar name=p.name photo=p.photo_url /> }
                            }}
                        </div>
                        <ul
                            tabindex="0"
                            class="dropdown-content z-50 menu p-2 shadow bg-base-100 rounded-box w-56 border border-base-300"
                        >
                            <li class="menu-title">
                                <span>{move || principal().map(|p| p.email).unwrap_or_default()}</span>
                            </li>
                            <li>
                                <Link to=AppRoute::Dashboard>"Dashboard"</Link>
                            </li>
                            <li>
                                <Link to=AppRoute::Gallery>"My Gallery"</Link>
                            </li>
                            <li>
                                <Link to=AppRoute::Favorites>"My Favorites"</Link>
                            </li>
                            <li>
                                <a on:click=on_logout class="text-error">
                                    <LogOut attr:class="h-4 w-4" />
                                    "Logout"
                                </a>
                            </li>
                        </ul>
                    </div>
                </Show>
            </div>
        </div>
    }
}
