//! 认证模块 - Identity Session
//!
//! 管理当前 Principal 与加载标志，通过 Context 注入整棵组件树。
//! 状态机：`loading → {authenticated(Principal) | anonymous}`。
//! 身份提供方是外部协作者，`IdentityClient` 只是它的 REST 界面；
//! 浏览器存储里只保存提供方签发的会话令牌，用户资料不落存储。
//!
//! 路由系统通过注入的 `SessionStatus` 信号感知会话，两个模块互不相识。

use artify_shared::{ProfileUpsert, ValidationError, validate_registration, STORAGE_SESSION_KEY};
use gloo_net::http::Request;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::{Deserialize, Serialize};
use std::fmt;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::api::{ArtifyApi, SecureApi};
use crate::config;
use crate::image_upload;
use crate::web::LocalStorage;
use crate::web::router::SessionStatus;

// =========================================================
// 错误类型
// =========================================================

#[derive(Debug, Clone, PartialEq)]
pub enum AuthError {
    /// 客户端校验失败（未发起任何网络调用）
    Validation(ValidationError),
    /// 提供方拒绝了凭据
    InvalidCredentials,
    /// 提供方返回的其他错误（重复注册、弱口令等）
    Provider(String),
    /// 头像上传失败
    Upload(String),
    /// 网络/传输层失败
    Network(String),
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::Validation(e) => write!(f, "{}", e),
            AuthError::InvalidCredentials => write!(f, "Invalid email or password"),
            AuthError::Provider(msg) => write!(f, "{}", msg),
            AuthError::Upload(msg) => write!(f, "Image upload failed: {}", msg),
            AuthError::Network(_) => write!(f, "Network error. Please try again."),
        }
    }
}

impl From<ValidationError> for AuthError {
    fn from(e: ValidationError) -> Self {
        AuthError::Validation(e)
    }
}

// =========================================================
// 会话状态
// =========================================================

/// 当前已认证的身份记录
#[derive(Debug, Clone, PartialEq)]
pub struct Principal {
    pub email: String,
    pub name: String,
    pub photo_url: Option<String>,
}

/// 会话状态。初始为加载中；解析完成后 principal 要么是 None，
/// 要么携带非空 email。
#[derive(Clone)]
pub struct SessionState {
    pub principal: Option<Principal>,
    pub token: Option<String>,
    pub is_loading: bool,
    /// 管理员角色：None = 尚未解析
    pub is_admin: Option<bool>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            principal: None,
            token: None,
            is_loading: true,
            is_admin: None,
        }
    }
}

/// 会话上下文：读写信号对，Copy，经 Context 在组件间共享
#[derive(Clone, Copy)]
pub struct SessionContext {
    pub state: ReadSignal<SessionState>,
    pub set_state: WriteSignal<SessionState>,
}

impl SessionContext {
    pub fn new() -> Self {
        let (state, set_state) = signal(SessionState::default());
        Self { state, set_state }
    }

    /// 注入路由层的会话状态摘要信号
    pub fn status_signal(&self) -> Signal<SessionStatus> {
        let state = self.state;
        Signal::derive(move || {
            let s = state.get();
            if s.is_loading {
                SessionStatus::Loading
            } else if s.principal.is_some() {
                SessionStatus::Authenticated
            } else {
                SessionStatus::Anonymous
            }
        })
    }

    /// 同步清除会话。401/403 拦截器走这里；导航由路由层的
    /// 会话监听自动完成。
    pub fn force_logout(&self) {
        LocalStorage::delete(STORAGE_SESSION_KEY);
        self.set_state.update(|s| {
            s.principal = None;
            s.token = None;
            s.is_admin = None;
            s.is_loading = false;
        });
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}

/// 从 Context 获取会话上下文
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionContext should be provided")
}

/// 创建、注入并初始化会话（App 根部调用一次）
pub fn provide_session() -> SessionContext {
    let ctx = SessionContext::new();
    provide_context(ctx);
    init_session(&ctx);
    ctx
}

/// 启动时恢复会话：有存储令牌则向提供方要回用户，否则直接解析为匿名
pub fn init_session(ctx: &SessionContext) {
    let Some(token) = LocalStorage::get(STORAGE_SESSION_KEY) else {
        ctx.set_state.update(|s| s.is_loading = false);
        return;
    };

    let set_state = ctx.set_state;
    spawn_local(async move {
        let client = IdentityClient::new();
        match client.me(&token).await {
            Ok(user) => set_state.update(|s| {
                s.principal = Some(user.into_principal());
                s.token = Some(token);
                s.is_loading = false;
            }),
            Err(e) => {
                web_sys::console::warn_1(
                    &format!("[Auth] Stored session rejected: {}", e).into(),
                );
                LocalStorage::delete(STORAGE_SESSION_KEY);
                set_state.update(|s| s.is_loading = false);
            }
        }
    });
}

// =========================================================
// 会话操作
// =========================================================

/// 邮箱/密码登录
pub async fn login(ctx: &SessionContext, email: &str, password: &str) -> Result<Principal, AuthError> {
    let session = IdentityClient::new().login(email, password).await?;
    Ok(complete_login(ctx, session))
}

/// 第三方弹窗登录，契约与 `login` 相同
pub async fn login_with_provider(ctx: &SessionContext) -> Result<Principal, AuthError> {
    let session = IdentityClient::new().oauth_popup().await?;
    Ok(complete_login(ctx, session))
}

/// 注册。头像文件（如有）先上传图床换取 URL，再交给提供方建号。
/// 校验失败不产生任何网络调用。
pub async fn register(
    ctx: &SessionContext,
    name: &str,
    email: &str,
    password: &str,
    avatar: Option<web_sys::File>,
) -> Result<Principal, AuthError> {
    validate_registration(name, email, password)?;

    let photo_url = match avatar {
        Some(file) => image_upload::upload_image(&file)
            .await
            .map_err(|e| AuthError::Upload(e.user_message()))?,
        None => String::new(),
    };

    let session = IdentityClient::new()
        .register(name, email, password, &photo_url)
        .await?;
    Ok(complete_login(ctx, session))
}

/// 注销：通知提供方（尽力而为），然后清除本地会话。
/// 导航由路由层的会话监听自动处理。
pub async fn logout(ctx: &SessionContext) {
    if let Some(token) = ctx.state.get_untracked().token {
        if let Err(e) = IdentityClient::new().sign_out(&token).await {
            web_sys::console::warn_1(&format!("[Auth] Provider sign-out failed: {}", e).into());
        }
    }
    ctx.force_logout();
}

/// 登录成功的收尾：持久化令牌、更新状态、触发资料同步。
/// 资料同步是 fire-and-forget——它的失败只记日志，不打断登录。
fn complete_login(ctx: &SessionContext, session: AuthSession) -> Principal {
    let principal = session.user.into_principal();
    LocalStorage::set(STORAGE_SESSION_KEY, &session.token);
    ctx.set_state.update(|s| {
        s.principal = Some(principal.clone());
        s.token = Some(session.token);
        s.is_loading = false;
        s.is_admin = None;
    });

    let profile = ProfileUpsert {
        name: principal.name.clone(),
        email: principal.email.clone(),
        photo_url: principal.photo_url.clone().unwrap_or_default(),
    };
    spawn_local(async move {
        if let Err(e) = ArtifyApi::new().upsert_user(&profile).await {
            web_sys::console::warn_1(&format!("[Auth] Profile sync failed: {}", e).into());
        }
    });

    principal
}

/// 解析管理员角色：拉取用户集合并按邮箱匹配；
/// 解析结果落在会话的 `is_admin` 上（None = 进行中）。
pub fn ensure_admin_resolved(ctx: &SessionContext) {
    let state = ctx.state.get_untracked();
    if state.is_loading || state.is_admin.is_some() {
        return;
    }
    let Some(principal) = state.principal else {
        return;
    };

    let secure = SecureApi::new(*ctx);
    let set_state = ctx.set_state;
    spawn_local(async move {
        let is_admin = match secure.users().await {
            Ok(users) => users
                .iter()
                .any(|u| u.email == principal.email && u.role.is_admin()),
            Err(e) => {
                web_sys::console::warn_1(&format!("[Auth] Admin check failed: {}", e).into());
                false
            }
        };
        set_state.update(|s| s.is_admin = Some(is_admin));
    });
}

// =========================================================
// 身份提供方的 REST 界面
// =========================================================

#[derive(Debug, Clone, Deserialize)]
pub struct AuthUser {
    pub email: String,
    #[serde(default, alias = "displayName")]
    pub name: String,
    #[serde(default, rename = "photoURL")]
    pub photo_url: Option<String>,
}

impl AuthUser {
    fn into_principal(self) -> Principal {
        // 提供方没回显示名时退回邮箱前缀
        let name = if self.name.is_empty() {
            self.email.split('@').next().unwrap_or_default().to_string()
        } else {
            self.name
        };
        Principal {
            email: self.email,
            name,
            photo_url: self.photo_url.filter(|p| !p.is_empty()),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthSession {
    pub token: String,
    pub user: AuthUser,
}

#[derive(Serialize)]
struct LoginBody<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct RegisterBody<'a> {
    name: &'a str,
    email: &'a str,
    password: &'a str,
    #[serde(rename = "photoURL")]
    photo_url: &'a str,
}

/// 身份提供方客户端
pub struct IdentityClient {
    base_url: String,
}

impl IdentityClient {
    pub fn new() -> Self {
        Self {
            base_url: config::auth_base_url(),
        }
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<AuthSession, AuthError> {
        let res = Request::post(&format!("{}/login", self.base_url))
            .header("Content-Type", "application/json")
            .json(&LoginBody { email, password })
            .map_err(|e| AuthError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;

        match res.status() {
            200..=299 => res
                .json::<AuthSession>()
                .await
                .map_err(|e| AuthError::Provider(e.to_string())),
            400 | 401 => Err(AuthError::InvalidCredentials),
            status => Err(AuthError::Provider(provider_message(status, &res).await)),
        }
    }

    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
        photo_url: &str,
    ) -> Result<AuthSession, AuthError> {
        let res = Request::post(&format!("{}/register", self.base_url))
            .header("Content-Type", "application/json")
            .json(&RegisterBody {
                name,
                email,
                password,
                photo_url,
            })
            .map_err(|e| AuthError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;

        if res.ok() {
            res.json::<AuthSession>()
                .await
                .map_err(|e| AuthError::Provider(e.to_string()))
        } else {
            let status = res.status();
            Err(AuthError::Provider(provider_message(status, &res).await))
        }
    }

    /// 用令牌取回当前用户（启动恢复与弹窗登录都走这里）
    pub async fn me(&self, token: &str) -> Result<AuthUser, AuthError> {
        let res = Request::get(&format!("{}/me", self.base_url))
            .header("Authorization", &format!("Bearer {}", token))
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;

        match res.status() {
            200..=299 => res
                .json::<AuthUser>()
                .await
                .map_err(|e| AuthError::Provider(e.to_string())),
            401 | 403 => Err(AuthError::InvalidCredentials),
            status => Err(AuthError::Provider(provider_message(status, &res).await)),
        }
    }

    pub async fn sign_out(&self, token: &str) -> Result<(), AuthError> {
        let res = Request::post(&format!("{}/logout", self.base_url))
            .header("Authorization", &format!("Bearer {}", token))
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;
        if res.ok() {
            Ok(())
        } else {
            let status = res.status();
            Err(AuthError::Provider(provider_message(status, &res).await))
        }
    }

    /// 第三方弹窗流程：打开提供方页面，等待一次性的 message 事件送回令牌
    pub async fn oauth_popup(&self) -> Result<AuthSession, AuthError> {
        let window =
            web_sys::window().ok_or_else(|| AuthError::Provider("No window object".into()))?;
        let popup = window
            .open_with_url_and_target(&format!("{}/oauth/popup", self.base_url), "artify_oauth")
            .ok()
            .flatten()
            .ok_or_else(|| AuthError::Provider("Popup was blocked by the browser".into()))?;

        let (tx, rx) = futures::channel::oneshot::channel::<String>();
        let mut tx = Some(tx);
        let listener = Closure::<dyn FnMut(web_sys::MessageEvent)>::new(
            move |ev: web_sys::MessageEvent| {
                if let Some(token) = ev.data().as_string() {
                    if let Some(tx) = tx.take() {
                        let _ = tx.send(token);
                    }
                }
            },
        );
        window
            .add_event_listener_with_callback("message", listener.as_ref().unchecked_ref())
            .map_err(|_| AuthError::Provider("Could not listen for the popup".into()))?;

        let token = rx
            .await
            .map_err(|_| AuthError::Provider("Login window was closed".into()))?;

        let _ = window
            .remove_event_listener_with_callback("message", listener.as_ref().unchecked_ref());
        let _ = popup.close();

        let user = self.me(&token).await?;
        Ok(AuthSession { token, user })
    }
}

impl Default for IdentityClient {
    fn default() -> Self {
        Self::new()
    }
}

async fn provider_message(status: u16, res: &gloo_net::http::Response) -> String {
    let body = res.text().await.unwrap_or_default();
    crate::api::extract_error_message(status, &body)
}
