//! 远程数据客户端
//!
//! 对后端 REST API 的薄封装。公开读写走 `ArtifyApi`；
//! 需要会话的调用走 `SecureApi`——它附带 Bearer 令牌，并拦截
//! 401/403 响应：强制登出（路由层监听会话信号自动跳转登录页），
//! 然后让原调用以 `Unauthorized` 失败。
//!
//! 不做重试，不做请求排队；唯一的"缓存"是聚合点赞数上的
//! 60 秒新鲜度窗口，纯属 UX 优化。

use std::cell::RefCell;
use std::fmt;

use artify_shared::{
    AdminStats, Artwork, ArtworkPatch, DetailEnvelope, Favorite, LikeEnvelope, ListEnvelope,
    NewArtwork, Paged, ProfileUpsert, Report, Role, SiteTotals, UserProfile,
};
use gloo_net::http::{Request, Response};
use leptos::prelude::GetUntracked;
use serde::Deserialize;
use urlencoding::encode;

use crate::auth::SessionContext;
use crate::config;

// =========================================================
// 错误类型
// =========================================================

#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// 网络/传输层失败
    Network(String),
    /// 非 2xx 响应；message 取自 JSON 错误体（如有）
    Status { status: u16, message: String },
    /// 响应体不符合规范形状
    Decode(String),
    /// 401/403，已触发强制登出
    Unauthorized,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "network error: {}", msg),
            ApiError::Status { status, message } => write!(f, "[{}] {}", status, message),
            ApiError::Decode(msg) => write!(f, "decode error: {}", msg),
            ApiError::Unauthorized => write!(f, "session rejected"),
        }
    }
}

impl ApiError {
    /// 展示给用户的文案：服务端给了消息就用服务端的，否则用通用文案
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Status { message, .. } => message.clone(),
            ApiError::Network(_) => "Network error. Please try again.".to_string(),
            ApiError::Decode(_) => "Server returned unexpected data.".to_string(),
            ApiError::Unauthorized => "Your session has expired. Please log in again.".to_string(),
        }
    }
}

fn net_err(e: gloo_net::Error) -> ApiError {
    ApiError::Network(e.to_string())
}

fn decode_err(e: serde_json::Error) -> ApiError {
    ApiError::Decode(e.to_string())
}

/// 从 JSON 错误体提取人类可读消息（`{"error": …}` 或 `{"message": …}`）
pub(crate) fn extract_error_message(status: u16, body: &str) -> String {
    #[derive(Deserialize)]
    struct ErrorBody {
        #[serde(default)]
        error: Option<String>,
        #[serde(default)]
        message: Option<String>,
    }

    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error.or(b.message))
        .unwrap_or_else(|| format!("Server responded {}", status))
}

async fn read_ok(res: Response) -> Result<String, ApiError> {
    let status = res.status();
    let ok = res.ok();
    let body = res.text().await.unwrap_or_default();
    if !ok {
        return Err(ApiError::Status {
            status,
            message: extract_error_message(status, &body),
        });
    }
    Ok(body)
}

// =========================================================
// 查询参数
// =========================================================

/// `GET /arts` 的查询参数
#[derive(Debug, Clone, PartialEq)]
pub struct ArtsQuery {
    pub page: u32,
    pub limit: u32,
    pub search: String,
    pub category: String,
    pub sort: String,
}

impl Default for ArtsQuery {
    fn default() -> Self {
        Self {
            page: 1,
            limit: artify_shared::DEFAULT_PAGE_LIMIT,
            search: String::new(),
            category: String::new(),
            sort: String::new(),
        }
    }
}

impl ArtsQuery {
    /// page 与 limit 总是发送；search/category/sort 仅在非空时发送
    pub fn query_string(&self) -> String {
        let mut parts = vec![format!("page={}", self.page), format!("limit={}", self.limit)];
        if !self.search.is_empty() {
            parts.push(format!("search={}", encode(&self.search)));
        }
        if !self.category.is_empty() {
            parts.push(format!("category={}", encode(&self.category)));
        }
        if !self.sort.is_empty() {
            parts.push(format!("sort={}", encode(&self.sort)));
        }
        format!("?{}", parts.join("&"))
    }
}

// =========================================================
// 公开客户端 (ArtifyApi)
// =========================================================

#[derive(Clone, Debug, PartialEq)]
pub struct ArtifyApi {
    base_url: String,
}

impl Default for ArtifyApi {
    fn default() -> Self {
        Self::new()
    }
}

impl ArtifyApi {
    pub fn new() -> Self {
        Self {
            base_url: config::api_base_url(),
        }
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    async fn get_list<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<Vec<T>, ApiError> {
        let res = Request::get(&self.url(path)).send().await.map_err(net_err)?;
        let body = read_ok(res).await?;
        let env: ListEnvelope<T> = serde_json::from_str(&body).map_err(decode_err)?;
        Ok(env.into_items())
    }

    /// 作品列表/搜索（分页）
    pub async fn list_arts(&self, query: &ArtsQuery) -> Result<Paged<Artwork>, ApiError> {
        let path = format!("/arts{}", query.query_string());
        let res = Request::get(&self.url(&path)).send().await.map_err(net_err)?;
        let body = read_ok(res).await?;
        let env: ListEnvelope<Artwork> = serde_json::from_str(&body).map_err(decode_err)?;
        Ok(env.into_paged(query.page, query.limit))
    }

    /// 精选作品
    pub async fn featured_arts(&self) -> Result<Vec<Artwork>, ApiError> {
        self.get_list("/arts/featured").await
    }

    /// 单作品详情
    pub async fn get_art(&self, id: &str) -> Result<Artwork, ApiError> {
        let path = format!("/arts/{}", encode(id));
        let res = Request::get(&self.url(&path)).send().await.map_err(net_err)?;
        let body = read_ok(res).await?;
        let env: DetailEnvelope = serde_json::from_str(&body).map_err(decode_err)?;
        Ok(env.into_artwork())
    }

    /// 新建作品
    pub async fn create_art(&self, art: &NewArtwork) -> Result<(), ApiError> {
        let res = Request::post(&self.url("/arts"))
            .header("Content-Type", "application/json")
            .json(art)
            .map_err(net_err)?
            .send()
            .await
            .map_err(net_err)?;
        read_ok(res).await?;
        Ok(())
    }

    /// 部分更新作品
    pub async fn update_art(&self, id: &str, patch: &ArtworkPatch) -> Result<(), ApiError> {
        let path = format!("/arts/{}", encode(id));
        let res = Request::patch(&self.url(&path))
            .header("Content-Type", "application/json")
            .json(patch)
            .map_err(net_err)?
            .send()
            .await
            .map_err(net_err)?;
        read_ok(res).await?;
        Ok(())
    }

    /// 删除作品
    pub async fn delete_art(&self, id: &str) -> Result<(), ApiError> {
        let path = format!("/arts/{}", encode(id));
        let res = Request::delete(&self.url(&path)).send().await.map_err(net_err)?;
        read_ok(res).await?;
        Ok(())
    }

    /// 点赞开关，返回更新后的点赞数
    pub async fn toggle_like(&self, id: &str) -> Result<i64, ApiError> {
        let path = format!("/arts/{}/like", encode(id));
        let res = Request::patch(&self.url(&path)).send().await.map_err(net_err)?;
        let body = read_ok(res).await?;
        let env: LikeEnvelope = serde_json::from_str(&body).map_err(decode_err)?;
        Ok(env.likes())
    }

    /// 当前用户的作品。专用端点优先，再按顺序尝试两个历史查询参数；
    /// 只有链条上每一步都失败才报错。
    pub async fn my_arts(&self, email: &str) -> Result<Vec<Artwork>, ApiError> {
        let attempts = [
            format!("/my-arts?email={}", encode(email)),
            format!("/arts?artistEmail={}&page=1&limit=100", encode(email)),
            format!("/arts?userEmail={}&page=1&limit=100", encode(email)),
        ];

        let mut last_err = None;
        let mut saw_empty = false;
        for (i, path) in attempts.iter().enumerate() {
            match self.get_list::<Artwork>(path).await {
                // 专用端点返回空时仍尝试历史查询参数；历史参数的结果照单全收
                Ok(items) if i > 0 || !items.is_empty() => return Ok(items),
                Ok(_) => saw_empty = true,
                Err(e) => {
                    web_sys::console::warn_1(
                        &format!("[Api] my-arts attempt {} failed: {}", path, e).into(),
                    );
                    last_err = Some(e);
                }
            }
        }
        if saw_empty {
            return Ok(Vec::new());
        }
        Err(last_err.unwrap_or_else(|| ApiError::Network("no endpoint available".into())))
    }

    /// 当前用户的收藏
    pub async fn favorites(&self, email: &str) -> Result<Vec<Favorite>, ApiError> {
        self.get_list(&format!("/favorites?email={}", encode(email)))
            .await
    }

    /// 添加收藏
    pub async fn add_favorite(&self, art_id: &str, email: &str) -> Result<(), ApiError> {
        let body = serde_json::json!({ "artId": art_id, "userEmail": email });
        let res = Request::post(&self.url("/favorites"))
            .header("Content-Type", "application/json")
            .json(&body)
            .map_err(net_err)?
            .send()
            .await
            .map_err(net_err)?;
        read_ok(res).await?;
        Ok(())
    }

    /// 移除收藏：先按收藏 id 删除，老后端不认时回退到查询参数形式
    pub async fn remove_favorite(
        &self,
        favorite_id: &str,
        art_id: &str,
        email: &str,
    ) -> Result<(), ApiError> {
        let path = format!("/favorites/{}", encode(favorite_id));
        let res = Request::delete(&self.url(&path)).send().await.map_err(net_err)?;
        match read_ok(res).await {
            Ok(_) => return Ok(()),
            Err(ApiError::Status { status, .. }) if status == 404 || status == 405 => {
                let fallback = format!(
                    "/favorites?artId={}&userEmail={}",
                    encode(art_id),
                    encode(email)
                );
                let res = Request::delete(&self.url(&fallback))
                    .send()
                    .await
                    .map_err(net_err)?;
                read_ok(res).await?;
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    /// 全站累计点赞数
    pub async fn total_likes(&self) -> Result<u64, ApiError> {
        let res = Request::get(&self.url("/likes/total"))
            .send()
            .await
            .map_err(net_err)?;
        let body = read_ok(res).await?;
        let totals: SiteTotals = serde_json::from_str(&body).map_err(decode_err)?;
        Ok(totals.total_likes)
    }

    /// 带 60 秒新鲜度窗口的累计点赞数（只读聚合，UX 优化而非正确性机制）
    pub async fn total_likes_cached(&self) -> Result<u64, ApiError> {
        const FRESH_MS: f64 = 60_000.0;
        thread_local! {
            static CACHE: RefCell<Option<(f64, u64)>> = const { RefCell::new(None) };
        }

        let now = now_ms();
        let cached = CACHE.with(|c| *c.borrow());
        if let Some((stamp, value)) = cached {
            if now - stamp < FRESH_MS {
                return Ok(value);
            }
        }

        let value = self.total_likes().await?;
        CACHE.with(|c| *c.borrow_mut() = Some((now_ms(), value)));
        Ok(value)
    }

    /// 登录/注册后把资料同步进后端用户集合（fire-and-forget 的载体）
    pub async fn upsert_user(&self, profile: &ProfileUpsert) -> Result<(), ApiError> {
        let res = Request::post(&self.url("/users"))
            .header("Content-Type", "application/json")
            .json(profile)
            .map_err(net_err)?
            .send()
            .await
            .map_err(net_err)?;
        read_ok(res).await?;
        Ok(())
    }
}

fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

// =========================================================
// 会话客户端 (SecureApi)
// =========================================================

/// 附带 Bearer 令牌的客户端；401/403 触发强制登出
#[derive(Clone)]
pub struct SecureApi {
    api: ArtifyApi,
    session: SessionContext,
}

impl SecureApi {
    pub fn new(session: SessionContext) -> Self {
        Self {
            api: ArtifyApi::new(),
            session,
        }
    }

    fn bearer(&self) -> Option<String> {
        self.session
            .state
            .get_untracked()
            .token
            .map(|t| format!("Bearer {}", t))
    }

    /// 401/403 拦截：强制登出（路由层随会话信号跳转），调用以 Unauthorized 失败
    async fn read_secure(&self, res: Response) -> Result<String, ApiError> {
        let status = res.status();
        if status == 401 || status == 403 {
            web_sys::console::warn_1(&"[Api] Session rejected by server, forcing logout.".into());
            self.session.force_logout();
            return Err(ApiError::Unauthorized);
        }
        read_ok(res).await
    }

    async fn get_secure(&self, path: &str) -> Result<String, ApiError> {
        let mut req = Request::get(&self.api.url(path));
        if let Some(auth) = self.bearer() {
            req = req.header("Authorization", &auth);
        }
        let res = req.send().await.map_err(net_err)?;
        self.read_secure(res).await
    }

    async fn get_secure_list<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<Vec<T>, ApiError> {
        let body = self.get_secure(path).await?;
        let env: ListEnvelope<T> = serde_json::from_str(&body).map_err(decode_err)?;
        Ok(env.into_items())
    }

    async fn delete_secure(&self, path: &str) -> Result<(), ApiError> {
        let mut req = Request::delete(&self.api.url(path));
        if let Some(auth) = self.bearer() {
            req = req.header("Authorization", &auth);
        }
        let res = req.send().await.map_err(net_err)?;
        self.read_secure(res).await?;
        Ok(())
    }

    async fn patch_secure<B: serde::Serialize>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        let mut req = Request::patch(&self.api.url(path)).header("Content-Type", "application/json");
        if let Some(auth) = self.bearer() {
            req = req.header("Authorization", &auth);
        }
        let res = req.json(body).map_err(net_err)?.send().await.map_err(net_err)?;
        self.read_secure(res).await?;
        Ok(())
    }

    /// 用户列表（管理员）
    pub async fn users(&self) -> Result<Vec<UserProfile>, ApiError> {
        self.get_secure_list("/users").await
    }

    /// 修改用户角色
    pub async fn update_role(&self, user_id: &str, role: Role) -> Result<(), ApiError> {
        let path = format!("/users/{}/role", encode(user_id));
        self.patch_secure(&path, &serde_json::json!({ "role": role })).await
    }

    /// 删除用户账号
    pub async fn delete_user(&self, user_id: &str) -> Result<(), ApiError> {
        self.delete_secure(&format!("/users/{}", encode(user_id))).await
    }

    /// 管理面板聚合统计
    pub async fn admin_stats(&self) -> Result<AdminStats, ApiError> {
        let body = self.get_secure("/admin/stats").await?;
        serde_json::from_str(&body).map_err(decode_err)
    }

    /// 全量作品列表（管理员）
    pub async fn admin_arts(&self) -> Result<Vec<Artwork>, ApiError> {
        self.get_secure_list("/admin/arts").await
    }

    /// 举报列表（管理员）
    pub async fn admin_reports(&self) -> Result<Vec<Report>, ApiError> {
        self.get_secure_list("/admin/reports").await
    }

    /// 撤销/处理一条举报
    pub async fn dismiss_report(&self, report_id: &str) -> Result<(), ApiError> {
        self.delete_secure(&format!("/admin/reports/{}", encode(report_id)))
            .await
    }

    /// 管理员侧的作品更新（精选/可见性开关走这里）
    pub async fn update_art(&self, id: &str, patch: &ArtworkPatch) -> Result<(), ApiError> {
        self.patch_secure(&format!("/arts/{}", encode(id)), patch).await
    }

    /// 管理员侧的作品删除
    pub async fn delete_art(&self, id: &str) -> Result<(), ApiError> {
        self.delete_secure(&format!("/arts/{}", encode(id))).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arts_query_carries_page_category_and_search() {
        let query = ArtsQuery {
            page: 2,
            limit: 12,
            search: "sunset".into(),
            category: "Painting".into(),
            sort: String::new(),
        };
        let qs = query.query_string();
        assert!(qs.starts_with('?'));
        assert!(qs.contains("page=2"));
        assert!(qs.contains("limit=12"));
        assert!(qs.contains("search=sunset"));
        assert!(qs.contains("category=Painting"));
        assert!(!qs.contains("sort="));
    }

    #[test]
    fn arts_query_encodes_reserved_characters() {
        let query = ArtsQuery {
            search: "blue & gold".into(),
            ..ArtsQuery::default()
        };
        assert!(query.query_string().contains("search=blue%20%26%20gold"));
    }

    #[test]
    fn error_message_prefers_server_body() {
        assert_eq!(
            extract_error_message(500, r#"{"error":"Art not found"}"#),
            "Art not found"
        );
        assert_eq!(
            extract_error_message(400, r#"{"message":"Bad request"}"#),
            "Bad request"
        );
        assert_eq!(extract_error_message(502, "<html>bad gateway</html>"), "Server responded 502");
        assert_eq!(extract_error_message(500, ""), "Server responded 500");
    }

    #[test]
    fn user_messages_fall_back_to_generic_text() {
        let status = ApiError::Status {
            status: 500,
            message: "Art not found".into(),
        };
        assert_eq!(status.user_message(), "Art not found");
        assert_eq!(
            ApiError::Network("timeout".into()).user_message(),
            "Network error. Please try again."
        );
        assert_eq!(
            ApiError::Decode("bad".into()).user_message(),
            "Server returned unexpected data."
        );
    }
}
