//! 作品表单状态
//!
//! 把零散的 signal 整合为一个 `Copy` 的状态结构体，负责持有数据、
//! 重置、从已有作品装载，以及转换为请求对象（转换前先过校验）。

use artify_shared::{
    validate_new_artwork, Artwork, ArtworkPatch, NewArtwork, ValidationError, Visibility,
};
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct ArtworkFormState {
    pub image: RwSignal<String>,
    pub title: RwSignal<String>,
    pub category: RwSignal<String>,
    pub medium: RwSignal<String>,
    pub description: RwSignal<String>,
    pub dimensions: RwSignal<String>,
    /// 原始输入串；空串表示未定价
    pub price: RwSignal<String>,
    pub visibility: RwSignal<Visibility>,
    pub featured: RwSignal<bool>,
}

impl ArtworkFormState {
    pub fn new() -> Self {
        Self {
            image: RwSignal::new(String::new()),
            title: RwSignal::new(String::new()),
            category: RwSignal::new("Painting".to_string()),
            medium: RwSignal::new(String::new()),
            description: RwSignal::new(String::new()),
            dimensions: RwSignal::new(String::new()),
            price: RwSignal::new(String::new()),
            visibility: RwSignal::new(Visibility::Public),
            featured: RwSignal::new(false),
        }
    }

    pub fn reset(&self) {
        self.image.set(String::new());
        self.title.set(String::new());
        self.category.set("Painting".to_string());
        self.medium.set(String::new());
        self.description.set(String::new());
        self.dimensions.set(String::new());
        self.price.set(String::new());
        self.visibility.set(Visibility::Public);
        self.featured.set(false);
    }

    /// 编辑弹窗打开时从已有作品装载
    pub fn load(&self, art: &Artwork) {
        self.image.set(art.image.clone());
        self.title.set(art.title.clone());
        self.category.set(if art.category.is_empty() {
            "Painting".to_string()
        } else {
            art.category.clone()
        });
        self.medium.set(art.medium.clone());
        self.description.set(art.description.clone());
        self.dimensions.set(art.dimensions.clone());
        self.price
            .set(art.price.map(|p| p.to_string()).unwrap_or_default());
        self.visibility.set(art.visibility);
        self.featured.set(art.featured);
    }

    fn parsed_price(&self) -> Option<f64> {
        let raw = self.price.get_untracked();
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }
        raw.parse().ok()
    }

    /// 转换为部分更新。标题与图片必填。
    pub fn to_patch(&self) -> Result<ArtworkPatch, ValidationError> {
        if self.image.get_untracked().trim().is_empty() {
            return Err(ValidationError::MissingImage);
        }
        if self.title.get_untracked().trim().is_empty() {
            return Err(ValidationError::MissingTitle);
        }
        Ok(ArtworkPatch {
            title: Some(self.title.get_untracked()),
            image: Some(self.image.get_untracked()),
            category: Some(self.category.get_untracked()),
            medium: Some(self.medium.get_untracked()),
            description: Some(self.description.get_untracked()),
            dimensions: Some(self.dimensions.get_untracked()),
            price: self.parsed_price(),
            visibility: Some(self.visibility.get_untracked()),
            featured: None,
        })
    }

    /// 转换为新建请求；所有者字段从当前 Principal 反规范化
    pub fn to_new(
        &self,
        user_name: &str,
        user_email: &str,
        artist_photo: &str,
        logged_in: bool,
    ) -> Result<NewArtwork, ValidationError> {
        validate_new_artwork(
            &self.image.get_untracked(),
            &self.title.get_untracked(),
            logged_in,
        )?;
        Ok(NewArtwork {
            image: self.image.get_untracked(),
            title: self.title.get_untracked(),
            category: self.category.get_untracked(),
            medium: self.medium.get_untracked(),
            description: self.description.get_untracked(),
            dimensions: self.dimensions.get_untracked(),
            price: self.parsed_price(),
            visibility: self.visibility.get_untracked(),
            featured: self.featured.get_untracked(),
            user_name: user_name.to_string(),
            user_email: user_email.to_string(),
            artist_photo: artist_photo.to_string(),
        })
    }
}

impl Default for ArtworkFormState {
    fn default() -> Self {
        Self::new()
    }
}
