//! 路由守卫组件
//!
//! `PrivateRoute`：会话加载中只渲染加载指示，绝不渲染子树；
//! 解析为匿名则弹回登录页并记录来源；解析出 Principal 才渲染子树。
//! `AdminRoute` 额外要求管理员角色，角色解析期间同样只渲染加载指示。

use leptos::prelude::*;

use crate::auth::{ensure_admin_resolved, use_session};
use crate::components::loading::Loading;
use crate::web::route::AppRoute;
use crate::web::router::use_router;

#[component]
pub fn PrivateRoute(children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let router = use_router();

    // 会话解析为匿名时弹回登录页，登录成功后可返回来源
    Effect::new(move |_| {
        let state = session.state.get();
        if !state.is_loading && state.principal.is_none() {
            let origin = router.current_route().get_untracked();
            router.bounce_to_login(origin);
        }
    });

    view! {
        <Show
            when=move || {
                let state = session.state.get();
                !state.is_loading && state.principal.is_some()
            }
            fallback=|| view! { <Loading /> }
        >
            {children()}
        </Show>
    }
}

#[component]
pub fn AdminRoute(children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let router = use_router();

    Effect::new(move |_| {
        let state = session.state.get();
        if state.is_loading {
            return;
        }
        match (&state.principal, state.is_admin) {
            (None, _) => {
                let origin = router.current_route().get_untracked();
                router.bounce_to_login(origin);
            }
            // 已认证但角色未解析：触发解析
            (Some(_), None) => ensure_admin_resolved(&session),
            // 已解析为非管理员：降级到普通仪表盘
            (Some(_), Some(false)) => router.replace(AppRoute::Dashboard),
            (Some(_), Some(true)) => {}
        }
    });

    view! {
        <Show
            when=move || {
                let state = session.state.get();
                !state.is_loading && state.principal.is_some() && state.is_admin == Some(true)
            }
            fallback=|| view! { <Loading /> }
        >
            {children()}
        </Show>
    }
}
