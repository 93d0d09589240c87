//! 规范化的领域 DTO
//!
//! 后端的历史遗留字段名（`artistEmail`、`artistName`、`photoURL` 等）
//! 作为显式的 serde alias 被接受，但序列化时只输出规范的 camelCase 字段。
//! 除此之外的未知形状一律以类型化的解析错误失败，不做静默猜测。

use chrono::{DateTime, Utc};
use serde::de::{Deserializer, Error as DeError};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

// =========================================================
// 枚举 (Visibility / Role)
// =========================================================

/// 作品可见性
///
/// 线上数据大小写不一（"Public" / "public"），解析时忽略大小写，
/// 序列化时统一输出小写。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Public,
    Private,
}

impl Visibility {
    pub fn is_private(self) -> bool {
        matches!(self, Visibility::Private)
    }

    pub fn toggled(self) -> Self {
        match self {
            Visibility::Public => Visibility::Private,
            Visibility::Private => Visibility::Public,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::Private => "private",
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Visibility::Public => write!(f, "Public"),
            Visibility::Private => write!(f, "Private"),
        }
    }
}

impl Serialize for Visibility {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Visibility {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        match s.to_ascii_lowercase().as_str() {
            "public" => Ok(Visibility::Public),
            "private" => Ok(Visibility::Private),
            other => Err(DeError::unknown_variant(other, &["public", "private"])),
        }
    }
}

/// 用户角色
///
/// 语义上只有"是否管理员"一个判定：除 "admin"（忽略大小写）之外的
/// 任何角色值都视为普通用户。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Role {
    #[default]
    User,
    Admin,
}

impl Role {
    pub fn is_admin(self) -> bool {
        matches!(self, Role::Admin)
    }

    pub fn toggled(self) -> Self {
        match self {
            Role::User => Role::Admin,
            Role::Admin => Role::User,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Role {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        if s.eq_ignore_ascii_case("admin") {
            Ok(Role::Admin)
        } else {
            Ok(Role::User)
        }
    }
}

// =========================================================
// 作品 (Artwork)
// =========================================================

/// 作品记录（后端拥有，客户端只持有可能过期的副本）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artwork {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default, alias = "imageUrl")]
    pub image: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub medium: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub dimensions: String,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub visibility: Visibility,
    #[serde(default)]
    pub featured: bool,
    /// 有未处理举报的标记（历史字段名 `isReported`）
    #[serde(default, alias = "isReported")]
    pub reported: bool,
    #[serde(default)]
    pub likes: i64,
    #[serde(default, alias = "artistEmail", alias = "email")]
    pub user_email: String,
    #[serde(default, alias = "artistName")]
    pub user_name: String,
    #[serde(default, alias = "photoURL")]
    pub artist_photo: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Artwork {
    /// 客户端搜索匹配：标题或作者名的子串（忽略大小写）
    pub fn matches_query(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        let q = query.to_lowercase();
        self.title.to_lowercase().contains(&q) || self.user_name.to_lowercase().contains(&q)
    }
}

/// 单作品详情里的独立 artist 对象（`{art, artist}` 复合形状）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArtistRef {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "photoURL")]
    pub photo_url: Option<String>,
}

/// 新建作品的请求体，所有者字段从当前 Principal 反规范化而来
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewArtwork {
    pub image: String,
    pub title: String,
    pub category: String,
    pub medium: String,
    pub description: String,
    pub dimensions: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    pub visibility: Visibility,
    pub featured: bool,
    pub user_name: String,
    pub user_email: String,
    pub artist_photo: String,
}

/// 作品的部分更新（PATCH）：只有被设置的字段才会进入请求体
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtworkPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medium: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<Visibility>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
}

impl ArtworkPatch {
    /// 精选开关：请求体恰好是 `{"featured": <value>}`
    pub fn feature(value: bool) -> Self {
        Self {
            featured: Some(value),
            ..Self::default()
        }
    }

    /// 可见性开关：请求体恰好是 `{"visibility": <value>}`
    pub fn set_visibility(value: Visibility) -> Self {
        Self {
            visibility: Some(value),
            ..Self::default()
        }
    }

    /// 将补丁应用到本地副本（乐观更新用）
    pub fn apply_to(&self, art: &mut Artwork) {
        if let Some(v) = &self.title {
            art.title = v.clone();
        }
        if let Some(v) = &self.image {
            art.image = v.clone();
        }
        if let Some(v) = &self.category {
            art.category = v.clone();
        }
        if let Some(v) = &self.medium {
            art.medium = v.clone();
        }
        if let Some(v) = &self.description {
            art.description = v.clone();
        }
        if let Some(v) = &self.dimensions {
            art.dimensions = v.clone();
        }
        if let Some(v) = self.price {
            art.price = Some(v);
        }
        if let Some(v) = self.visibility {
            art.visibility = v;
        }
        if let Some(v) = self.featured {
            art.featured = v;
        }
    }
}

// =========================================================
// 收藏 / 举报 (Favorite / Report)
// =========================================================

/// Principal 与作品之间的收藏关联
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Favorite {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub art_id: String,
    #[serde(default)]
    pub user_email: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// 部分端点内嵌完整的作品文档
    #[serde(default)]
    pub art: Option<Artwork>,
}

fn default_report_count() -> u32 {
    1
}

/// 对某件作品的举报聚合，仅管理员可见
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub art_id: String,
    #[serde(default)]
    pub art_title: Option<String>,
    #[serde(default = "default_report_count")]
    pub report_count: u32,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

// =========================================================
// 用户 (UserProfile)
// =========================================================

/// 后端用户集合中的记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default, alias = "displayName")]
    pub name: String,
    pub email: String,
    #[serde(default, rename = "photoURL")]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub arts_count: u64,
}

/// 登录/注册后同步到后端用户集合的资料（fire-and-forget upsert）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileUpsert {
    pub name: String,
    pub email: String,
    #[serde(rename = "photoURL")]
    pub photo_url: String,
}

// =========================================================
// 统计 (AdminStats / SiteTotals)
// =========================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthPoint {
    pub name: String,
    pub count: i64,
}

/// 管理面板的聚合统计
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminStats {
    #[serde(default)]
    pub total_users: u64,
    #[serde(default)]
    pub total_public_arts: u64,
    #[serde(default)]
    pub total_reported_arts: u64,
    #[serde(default)]
    pub today_arts: u64,
    #[serde(default)]
    pub art_growth: Vec<GrowthPoint>,
    #[serde(default)]
    pub user_growth: Vec<GrowthPoint>,
}

/// `GET /likes/total` 的载荷（历史字段名 `total` 作为 alias）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteTotals {
    #[serde(rename = "totalLikes", alias = "total", default)]
    pub total_likes: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn artwork_accepts_legacy_field_names() {
        let json = r#"{
            "_id": "a1",
            "title": "Dusk",
            "imageUrl": "https://img.example/dusk.jpg",
            "artistEmail": "v@example.com",
            "artistName": "Vera",
            "photoURL": "https://img.example/vera.jpg",
            "visibility": "Private",
            "likes": 3
        }"#;
        let art: Artwork = serde_json::from_str(json).unwrap();
        assert_eq!(art.image, "https://img.example/dusk.jpg");
        assert_eq!(art.user_email, "v@example.com");
        assert_eq!(art.user_name, "Vera");
        assert_eq!(art.artist_photo.as_deref(), Some("https://img.example/vera.jpg"));
        assert_eq!(art.visibility, Visibility::Private);
        assert_eq!(art.likes, 3);
        assert!(art.price.is_none());
    }

    #[test]
    fn visibility_is_case_insensitive_but_strict() {
        assert_eq!(
            serde_json::from_str::<Visibility>("\"PUBLIC\"").unwrap(),
            Visibility::Public
        );
        assert_eq!(
            serde_json::from_str::<Visibility>("\"private\"").unwrap(),
            Visibility::Private
        );
        // 规范形状之外的值必须响亮地失败
        assert!(serde_json::from_str::<Visibility>("\"hidden\"").is_err());
    }

    #[test]
    fn role_treats_unknown_as_plain_user() {
        assert_eq!(serde_json::from_str::<Role>("\"Admin\"").unwrap(), Role::Admin);
        assert_eq!(serde_json::from_str::<Role>("\"moderator\"").unwrap(), Role::User);
    }

    #[test]
    fn feature_patch_serializes_to_single_field() {
        let body = serde_json::to_value(ArtworkPatch::feature(true)).unwrap();
        assert_eq!(body, serde_json::json!({ "featured": true }));

        let body = serde_json::to_value(ArtworkPatch::set_visibility(Visibility::Private)).unwrap();
        assert_eq!(body, serde_json::json!({ "visibility": "private" }));
    }

    #[test]
    fn patch_apply_overwrites_only_set_fields() {
        let mut art: Artwork = serde_json::from_str(
            r#"{"_id":"a1","title":"Old","image":"i","category":"Painting","likes":5}"#,
        )
        .unwrap();
        let patch = ArtworkPatch {
            title: Some("New".into()),
            featured: Some(true),
            ..ArtworkPatch::default()
        };
        patch.apply_to(&mut art);
        assert_eq!(art.title, "New");
        assert!(art.featured);
        assert_eq!(art.category, "Painting");
        assert_eq!(art.likes, 5);
    }

    #[test]
    fn search_matches_title_or_artist() {
        let art: Artwork = serde_json::from_str(
            r#"{"_id":"a1","title":"Sunset Over Water","userName":"Mira Holt"}"#,
        )
        .unwrap();
        assert!(art.matches_query("sunset"));
        assert!(art.matches_query("holt"));
        assert!(art.matches_query(""));
        assert!(!art.matches_query("sculpture"));
    }

    #[test]
    fn site_totals_accepts_both_field_names() {
        let a: SiteTotals = serde_json::from_str(r#"{"totalLikes": 42}"#).unwrap();
        let b: SiteTotals = serde_json::from_str(r#"{"total": 42}"#).unwrap();
        assert_eq!(a.total_likes, 42);
        assert_eq!(b.total_likes, 42);
    }
}
