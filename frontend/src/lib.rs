//! Artify 前端应用
//!
//! 采用 Context-Driven 的高内聚低耦合架构：
//! - `web::route` / `web::router`: 路由领域模型与引擎（会话信号注入式守卫）
//! - `auth`: 会话状态管理（Identity Session）
//! - `api`: 远程数据客户端（公开 + 安全两层）
//! - `optimistic`: 各列表页共用的乐观变更例程
//! - `components` / `pages`: UI 层

mod api;
mod auth;
mod config;
mod image_upload;
mod optimistic;
mod theme;

mod components {
    pub mod art_card;
    pub mod confirm_dialog;
    pub mod edit_artwork_dialog;
    pub mod footer;
    pub mod guards;
    pub mod icons;
    pub mod loading;
    pub mod navbar;
    pub mod theme_switcher;
    pub mod toast;
}

mod pages {
    pub mod add_artwork;
    pub mod dashboard;
    pub mod details;
    pub mod explore;
    pub mod favorites;
    pub mod gallery;
    pub mod home;
    pub mod login;
    pub mod register;

    pub mod admin {
        pub mod manage_arts;
        pub mod manage_users;
        pub mod reported_arts;
        pub mod stats;
    }
}

// 原生 Web API 封装模块（web_sys 直用，替代 gloo-storage / gloo-timers）
pub(crate) mod web;

use leptos::prelude::*;

use crate::auth::provide_session;
use crate::components::footer::Footer;
use crate::components::guards::{AdminRoute, PrivateRoute};
use crate::components::navbar::Navbar;
use crate::components::toast::{provide_notify, ToastHost};
use crate::pages::add_artwork::AddArtworkPage;
use crate::pages::admin::manage_arts::ManageArtsPage;
use crate::pages::admin::manage_users::ManageUsersPage;
use crate::pages::admin::reported_arts::ReportedArtsPage;
use crate::pages::admin::stats::AdminHomePage;
use crate::pages::dashboard::{DashboardHomePage, DashboardLayout, ProfilePage};
use crate::pages::details::DetailsPage;
use crate::pages::explore::ExplorePage;
use crate::pages::favorites::FavoritesPage;
use crate::pages::gallery::GalleryPage;
use crate::pages::home::HomePage;
use crate::pages::login::LoginPage;
use crate::pages::register::RegisterPage;
use crate::theme::provide_theme;
use crate::web::route::AppRoute;
use crate::web::router::{Router, RouterOutlet};

/// 路由匹配函数：受保护子树在这里包上守卫组件
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Home => view! { <HomePage /> }.into_any(),
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::Register => view! { <RegisterPage /> }.into_any(),
        AppRoute::Explore => view! { <ExplorePage /> }.into_any(),
        AppRoute::ArtDetails(id) => view! { <DetailsPage id=id /> }.into_any(),
        AppRoute::AddArtwork => view! {
            <PrivateRoute>
                <AddArtworkPage />
            </PrivateRoute>
        }
        .into_any(),
        AppRoute::Gallery => view! {
            <PrivateRoute>
                <GalleryPage />
            </PrivateRoute>
        }
        .into_any(),
        AppRoute::Favorites => view! {
            <PrivateRoute>
                <FavoritesPage />
            </PrivateRoute>
        }
        .into_any(),
        AppRoute::Dashboard => view! {
            <PrivateRoute>
                <DashboardLayout>
                    <DashboardHomePage />
                </DashboardLayout>
            </PrivateRoute>
        }
        .into_any(),
        AppRoute::DashboardGallery => view! {
            <PrivateRoute>
                <DashboardLayout>
                    <GalleryPage />
                </DashboardLayout>
            </PrivateRoute>
        }
        .into_any(),
        AppRoute::DashboardAddArtwork => view! {
            <PrivateRoute>
                <DashboardLayout>
                    <AddArtworkPage />
                </DashboardLayout>
            </PrivateRoute>
        }
        .into_any(),
        AppRoute::DashboardFavorites => view! {
            <PrivateRoute>
                <DashboardLayout>
                    <FavoritesPage />
                </DashboardLayout>
            </PrivateRoute>
        }
        .into_any(),
        AppRoute::Profile => view! {
            <PrivateRoute>
                <DashboardLayout>
                    <ProfilePage />
                </DashboardLayout>
            </PrivateRoute>
        }
        .into_any(),
        AppRoute::AdminHome => view! {
            <AdminRoute>
                <DashboardLayout>
                    <AdminHomePage />
                </DashboardLayout>
            </AdminRoute>
        }
        .into_any(),
        AppRoute::ManageUsers => view! {
            <AdminRoute>
                <DashboardLayout>
                    <ManageUsersPage />
                </DashboardLayout>
            </AdminRoute>
        }
        .into_any(),
        AppRoute::ManageArts => view! {
            <AdminRoute>
                <DashboardLayout>
                    <ManageArtsPage />
                </DashboardLayout>
            </AdminRoute>
        }
        .into_any(),
        AppRoute::ReportedArts => view! {
            <AdminRoute>
                <DashboardLayout>
                    <ReportedArtsPage />
                </DashboardLayout>
            </AdminRoute>
        }
        .into_any(),
        AppRoute::NotFound => view! {
            <div class="flex items-center justify-center min-h-[60vh] bg-base-200">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-error">"404"</h1>
                    <p class="text-xl mt-4">"Page not found"</p>
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 创建并初始化会话（启动即进入 loading，解析后落到两个终态之一）
    let session = provide_session();

    // 2. 主题与全局通知
    provide_theme();
    provide_notify();

    // 3. 会话状态信号注入路由服务，实现守卫与认证的解耦
    let session_status = session.status_signal();

    view! {
        <Router session_status=session_status>
            <div class="min-h-screen bg-base-100 text-base-content flex flex-col">
                <Navbar />
                <ToastHost />
                <div class="flex-1">
                    <RouterOutlet matcher=route_matcher />
                </div>
                <Footer />
            </div>
        </Router>
    }
}
