//! 路由服务模块 - 核心引擎
//!
//! 封装 web_sys 的 History API，所有对 window.history 的操作都集中在此。
//! 守卫逻辑通过注入的会话状态信号实现，与认证模块解耦：
//! 路由层只认识 `SessionStatus`，不认识 Principal。
//!
//! 守卫只在会话**已解析**后生效——会话仍在加载时允许路由加载，
//! 由页面侧的守卫组件负责"加载中绝不渲染受保护内容"。

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use super::route::AppRoute;

/// 注入路由层的会话状态摘要
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    /// 启动解析尚未完成
    Loading,
    /// 已解析：无 Principal
    Anonymous,
    /// 已解析：持有 Principal
    Authenticated,
}

/// 守卫决策（纯逻辑，独立可测）
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum GuardDecision {
    Allow,
    /// 未认证访问受保护路由：跳登录页并记录来源
    RedirectToLogin,
    /// 已认证访问登录/注册页：跳回缺省页
    RedirectAway,
}

pub(crate) fn guard_decision(target: &AppRoute, status: SessionStatus) -> GuardDecision {
    match status {
        // 会话未解析时先放行，由守卫组件挡住渲染
        SessionStatus::Loading => GuardDecision::Allow,
        SessionStatus::Anonymous if target.requires_auth() => GuardDecision::RedirectToLogin,
        SessionStatus::Authenticated if target.should_redirect_when_authenticated() => {
            GuardDecision::RedirectAway
        }
        _ => GuardDecision::Allow,
    }
}

fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

fn push_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

fn replace_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// 路由器服务
///
/// 通过 Signal 驱动界面更新；被弹回登录页的来源路由记录在
/// `return_to`，登录成功后由登录页取回并导航回去。
#[derive(Clone, Copy)]
pub struct RouterService {
    current_route: ReadSignal<AppRoute>,
    set_route: WriteSignal<AppRoute>,
    session_status: Signal<SessionStatus>,
    return_to: RwSignal<Option<AppRoute>>,
}

impl RouterService {
    fn new(session_status: Signal<SessionStatus>) -> Self {
        let initial_route = AppRoute::from_path(&current_path());
        let (current_route, set_route) = signal(initial_route);

        Self {
            current_route,
            set_route,
            session_status,
            return_to: RwSignal::new(None),
        }
    }

    /// 当前路由信号
    pub fn current_route(&self) -> ReadSignal<AppRoute> {
        self.current_route
    }

    /// **核心方法：导航与守卫**（pushState）
    pub fn navigate(&self, route: AppRoute) {
        self.navigate_to_route(route, true);
    }

    /// 导航（replaceState，不产生历史记录）
    pub fn replace(&self, route: AppRoute) {
        self.navigate_to_route(route, false);
    }

    /// 取出被记录的登录来源路由（取后即清）
    pub fn take_return_to(&self) -> Option<AppRoute> {
        let route = self.return_to.get_untracked();
        self.return_to.set(None);
        route
    }

    /// 记录来源并弹回登录页。守卫组件在会话解析为匿名时调用。
    pub fn bounce_to_login(&self, origin: AppRoute) {
        self.return_to.set(Some(origin));
        self.apply_route(AppRoute::auth_failure_redirect(), false);
    }

    fn navigate_to_route(&self, target: AppRoute, use_push: bool) {
        match guard_decision(&target, self.session_status.get_untracked()) {
            GuardDecision::Allow => self.apply_route(target, use_push),
            GuardDecision::RedirectToLogin => {
                web_sys::console::log_1(&"[Router] Access denied, redirecting to login.".into());
                self.return_to.set(Some(target));
                self.apply_route(AppRoute::auth_failure_redirect(), use_push);
            }
            GuardDecision::RedirectAway => {
                self.apply_route(AppRoute::default_after_login(), use_push);
            }
        }
    }

    fn apply_route(&self, route: AppRoute, use_push: bool) {
        let path = route.to_path();
        if use_push {
            push_history_state(&path);
        } else {
            replace_history_state(&path);
        }
        self.set_route.set(route);
    }

    /// 浏览器后退/前进按钮监听；popstate 时同样执行守卫
    fn init_popstate_listener(&self) {
        let set_route = self.set_route;
        let session_status = self.session_status;
        let return_to = self.return_to;

        let closure = Closure::<dyn Fn()>::new(move || {
            let target = AppRoute::from_path(&current_path());
            match guard_decision(&target, session_status.get_untracked()) {
                GuardDecision::Allow => set_route.set(target),
                GuardDecision::RedirectToLogin => {
                    return_to.set(Some(target));
                    let redirect = AppRoute::auth_failure_redirect();
                    replace_history_state(&redirect.to_path());
                    set_route.set(redirect);
                }
                GuardDecision::RedirectAway => {
                    let redirect = AppRoute::default_after_login();
                    replace_history_state(&redirect.to_path());
                    set_route.set(redirect);
                }
            }
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // 监听器随应用存活整个生命周期
        closure.forget();
    }

    /// 会话状态变化时的自动重定向：
    /// 登出（解析为匿名）时离开受保护页面；登录时离开登录/注册页。
    fn setup_session_watcher(&self) {
        let this = *self;

        Effect::new(move |_| {
            let status = this.session_status.get();
            let route = this.current_route.get_untracked();

            match status {
                SessionStatus::Loading => {}
                SessionStatus::Anonymous => {
                    if route.requires_auth() {
                        web_sys::console::log_1(
                            &"[Router] Session ended, redirecting to login.".into(),
                        );
                        this.return_to.set(Some(route));
                        this.apply_route(AppRoute::auth_failure_redirect(), true);
                    }
                }
                SessionStatus::Authenticated => {
                    if route.should_redirect_when_authenticated() {
                        let target = this
                            .return_to
                            .get_untracked()
                            .filter(|r| !r.should_redirect_when_authenticated())
                            .unwrap_or_else(AppRoute::default_after_login);
                        this.return_to.set(None);
                        this.apply_route(target, true);
                    }
                }
            }
        });
    }
}

fn provide_router(session_status: Signal<SessionStatus>) -> RouterService {
    let router = RouterService::new(session_status);
    router.init_popstate_listener();
    router.setup_session_watcher();
    provide_context(router);
    router
}

/// 从 Context 获取路由服务
pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

// ============================================================================
// UI 组件
// ============================================================================

/// 路由器根组件，应在 App 根部使用
#[component]
pub fn Router(
    /// 会话状态信号（由认证模块注入）
    session_status: Signal<SessionStatus>,
    children: Children,
) -> impl IntoView {
    provide_router(session_status);
    children()
}

/// 路由出口组件：根据当前路由渲染对应视图
#[component]
pub fn RouterOutlet(
    /// 路由匹配函数：接收当前路由，返回对应视图
    matcher: fn(AppRoute) -> AnyView,
) -> impl IntoView {
    let router = use_router();

    move || {
        let current = router.current_route().get();
        matcher(current)
    }
}

/// 应用内链接：拦截点击，走路由服务而不是整页跳转
#[component]
pub fn Link(
    #[prop(into)] to: AppRoute,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let router = use_router();
    let href = to.to_path();

    let on_click = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        router.navigate(to.clone());
    };

    view! {
        <a href=href class=class on:click=on_click>
            {children()}
        </a>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guard_allows_everything_while_session_resolves() {
        for route in [AppRoute::Home, AppRoute::Gallery, AppRoute::AdminHome] {
            assert_eq!(
                guard_decision(&route, SessionStatus::Loading),
                GuardDecision::Allow
            );
        }
    }

    #[test]
    fn guard_bounces_anonymous_off_protected_routes() {
        assert_eq!(
            guard_decision(&AppRoute::Gallery, SessionStatus::Anonymous),
            GuardDecision::RedirectToLogin
        );
        assert_eq!(
            guard_decision(&AppRoute::Explore, SessionStatus::Anonymous),
            GuardDecision::Allow
        );
        assert_eq!(
            guard_decision(&AppRoute::Login, SessionStatus::Anonymous),
            GuardDecision::Allow
        );
    }

    #[test]
    fn guard_moves_authenticated_users_off_auth_pages() {
        assert_eq!(
            guard_decision(&AppRoute::Login, SessionStatus::Authenticated),
            GuardDecision::RedirectAway
        );
        assert_eq!(
            guard_decision(&AppRoute::Gallery, SessionStatus::Authenticated),
            GuardDecision::Allow
        );
    }
}
