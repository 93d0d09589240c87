//! 主题管理
//!
//! 明/暗两套主题，偏好持久化在浏览器存储的 `artify-theme` 键下，
//! 应用方式是设置文档根元素的 `data-theme` 属性。缺省浅色，
//! 不跟随系统偏好，只认用户的手动切换。

use crate::web::LocalStorage;
use artify_shared::STORAGE_THEME_KEY;
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    fn from_stored(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    fn stored_value(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// DaisyUI 主题名：浅色用品牌主题，深色用内建 dark
    fn data_theme(self) -> &'static str {
        match self {
            Theme::Light => "artify",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// 主题上下文
#[derive(Clone, Copy)]
pub struct ThemeContext {
    theme: RwSignal<Theme>,
}

impl ThemeContext {
    fn new() -> Self {
        let initial = LocalStorage::get(STORAGE_THEME_KEY)
            .and_then(|v| Theme::from_stored(&v))
            .unwrap_or_default();
        apply_theme(initial);
        Self {
            theme: RwSignal::new(initial),
        }
    }

    pub fn is_dark(&self) -> bool {
        self.theme.get() == Theme::Dark
    }

    pub fn toggle(&self) {
        let next = self.theme.get_untracked().toggled();
        LocalStorage::set(STORAGE_THEME_KEY, next.stored_value());
        apply_theme(next);
        self.theme.set(next);
    }
}

fn apply_theme(theme: Theme) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    let _ = root.set_attribute("data-theme", theme.data_theme());
}

pub fn provide_theme() {
    provide_context(ThemeContext::new());
}

pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext should be provided")
}
