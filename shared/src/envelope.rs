//! 响应信封解析
//!
//! 后端各端点的包装格式并不一致：裸数组、`{data, total, page, limit}`、
//! `{results}` 三种形状都在线上出现过。这里把三种已记录的形状收敛成
//! 一个带类型的 untagged 枚举——除此之外的任何形状都会产生解析错误，
//! 由调用方作为 Decode 错误上报，而不是静默猜测下去。

use crate::model::{ArtistRef, Artwork};
use serde::Deserialize;

// =========================================================
// 列表信封 (ListEnvelope -> Paged)
// =========================================================

/// 集合端点的三种已记录响应形状
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ListEnvelope<T> {
    Paged {
        data: Vec<T>,
        #[serde(default)]
        total: Option<u64>,
        #[serde(default)]
        page: Option<u32>,
        #[serde(default)]
        limit: Option<u32>,
    },
    Results {
        results: Vec<T>,
    },
    Bare(Vec<T>),
}

impl<T> ListEnvelope<T> {
    /// 收敛为统一的分页视图；请求参数作为缺省值
    pub fn into_paged(self, req_page: u32, req_limit: u32) -> Paged<T> {
        match self {
            ListEnvelope::Paged {
                data,
                total,
                page,
                limit,
            } => Paged {
                items: data,
                total,
                page: page.unwrap_or(req_page),
                limit: limit.unwrap_or(req_limit),
            },
            ListEnvelope::Results { results } => Paged {
                items: results,
                total: None,
                page: req_page,
                limit: req_limit,
            },
            ListEnvelope::Bare(items) => Paged {
                items,
                total: None,
                page: req_page,
                limit: req_limit,
            },
        }
    }

    /// 只关心条目本身的调用方使用
    pub fn into_items(self) -> Vec<T> {
        self.into_paged(1, 0).items
    }
}

/// 统一的分页视图
#[derive(Debug, Clone, PartialEq)]
pub struct Paged<T> {
    pub items: Vec<T>,
    /// 服务端报告的总数；部分端点不报告
    pub total: Option<u64>,
    pub page: u32,
    pub limit: u32,
}

impl<T> Paged<T> {
    /// 总页数。服务端未报告 total 时退化为本页长度
    /// （已知的不一致行为，保留并在此处记录）。
    pub fn total_pages(&self) -> u32 {
        if self.limit == 0 {
            return 1;
        }
        let total = self.total.unwrap_or(self.items.len() as u64);
        (total.div_ceil(self.limit as u64)).max(1) as u32
    }
}

// =========================================================
// 单作品信封 (DetailEnvelope)
// =========================================================

/// 单作品载荷：直接文档，或 `{art, artist}` 复合形状
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum DetailPayload {
    Composite {
        art: Artwork,
        #[serde(default)]
        artist: Option<ArtistRef>,
    },
    Direct(Artwork),
}

/// 单作品端点的响应：载荷本身，或再包一层 `{data: …}`
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum DetailEnvelope {
    Wrapped { data: DetailPayload },
    Plain(DetailPayload),
}

impl DetailEnvelope {
    /// 合并为单个作品文档；复合形状中的 artist 字段
    /// 回填到作品自身的作者字段（仅当作品侧为空）。
    pub fn into_artwork(self) -> Artwork {
        let payload = match self {
            DetailEnvelope::Wrapped { data } => data,
            DetailEnvelope::Plain(payload) => payload,
        };
        match payload {
            DetailPayload::Direct(art) => art,
            DetailPayload::Composite { mut art, artist } => {
                if let Some(artist) = artist {
                    if art.user_name.is_empty() {
                        if let Some(name) = artist.name {
                            art.user_name = name;
                        }
                    }
                    if art.artist_photo.is_none() {
                        art.artist_photo = artist.photo_url;
                    }
                }
                art
            }
        }
    }
}

// =========================================================
// 点赞信封 (LikeEnvelope)
// =========================================================

#[derive(Debug, Deserialize)]
pub struct LikeCount {
    pub likes: i64,
}

/// `PATCH /arts/:id/like` 的响应：`{likes}` 或 `{data:{likes}}`
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum LikeEnvelope {
    Wrapped { data: LikeCount },
    Flat(LikeCount),
}

impl LikeEnvelope {
    pub fn likes(self) -> i64 {
        match self {
            LikeEnvelope::Wrapped { data } => data.likes,
            LikeEnvelope::Flat(count) => count.likes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ART: &str = r#"{"_id":"a1","title":"Dawn","image":"i.jpg"}"#;

    #[test]
    fn list_envelope_accepts_all_documented_shapes() {
        let bare: ListEnvelope<Artwork> = serde_json::from_str(&format!("[{ART}]")).unwrap();
        assert_eq!(bare.into_items().len(), 1);

        let paged: ListEnvelope<Artwork> =
            serde_json::from_str(&format!(r#"{{"data":[{ART}],"total":25,"page":2,"limit":12}}"#))
                .unwrap();
        let paged = paged.into_paged(1, 12);
        assert_eq!(paged.total, Some(25));
        assert_eq!(paged.page, 2);
        assert_eq!(paged.total_pages(), 3);

        let results: ListEnvelope<Artwork> =
            serde_json::from_str(&format!(r#"{{"results":[{ART}]}}"#)).unwrap();
        assert_eq!(results.into_items().len(), 1);
    }

    #[test]
    fn list_envelope_fails_loudly_on_unknown_shape() {
        let res = serde_json::from_str::<ListEnvelope<Artwork>>(r#"{"payload":[]}"#);
        assert!(res.is_err());
    }

    #[test]
    fn total_pages_falls_back_to_page_length_without_total() {
        let env: ListEnvelope<Artwork> =
            serde_json::from_str(&format!("[{0},{0}]", ART)).unwrap();
        let paged = env.into_paged(1, 12);
        assert_eq!(paged.total, None);
        assert_eq!(paged.total_pages(), 1);
    }

    #[test]
    fn detail_envelope_merges_composite_artist() {
        let json = format!(
            r#"{{"data":{{"art":{ART},"artist":{{"name":"Mira","photoURL":"p.jpg"}}}}}}"#
        );
        let art = serde_json::from_str::<DetailEnvelope>(&json)
            .unwrap()
            .into_artwork();
        assert_eq!(art.user_name, "Mira");
        assert_eq!(art.artist_photo.as_deref(), Some("p.jpg"));

        let direct = serde_json::from_str::<DetailEnvelope>(ART).unwrap().into_artwork();
        assert_eq!(direct.id, "a1");
    }

    #[test]
    fn like_envelope_reads_both_shapes() {
        let flat: LikeEnvelope = serde_json::from_str(r#"{"likes": 7}"#).unwrap();
        assert_eq!(flat.likes(), 7);
        let wrapped: LikeEnvelope = serde_json::from_str(r#"{"data":{"likes": 8}}"#).unwrap();
        assert_eq!(wrapped.likes(), 8);
    }
}
