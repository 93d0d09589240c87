//! Artify 共享领域模型
//!
//! 前端与外部 REST 后端之间的数据契约：
//! - `model`: 规范化的领域 DTO（每个实体只有一个规范形状）
//! - `envelope`: 响应信封解析（后端各端点的包装格式不一致）
//! - `validate`: 客户端校验（校验失败的请求绝不发往网络）

mod envelope;
mod model;
mod validate;

pub use envelope::{DetailEnvelope, DetailPayload, LikeEnvelope, ListEnvelope, Paged};
pub use model::{
    AdminStats, ArtistRef, Artwork, ArtworkPatch, Favorite, GrowthPoint, NewArtwork, ProfileUpsert,
    Report, Role, SiteTotals, UserProfile, Visibility,
};
pub use validate::{ValidationError, validate_new_artwork, validate_password, validate_registration};

// =========================================================
// 常量定义 (Constants)
// =========================================================

/// 浏览器存储中的主题偏好键
pub const STORAGE_THEME_KEY: &str = "artify-theme";
/// 浏览器存储中的会话令牌键（仅存令牌，不存用户资料）
pub const STORAGE_SESSION_KEY: &str = "artify-session-token";

/// Explore 页的默认分页大小
pub const DEFAULT_PAGE_LIMIT: u32 = 12;

/// 预定义的作品分类（与后端约定一致）
pub const CATEGORIES: &[&str] = &["Painting", "Digital", "Sculpture"];
