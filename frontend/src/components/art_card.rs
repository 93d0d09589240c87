//! 作品卡片与头像
//!
//! Explore / 首页精选共用的网格卡片，以及请求在途时的骨架卡片。

use artify_shared::Artwork;
use leptos::prelude::*;

use crate::web::route::AppRoute;
use crate::web::router::Link;

/// 姓名首字母缩写（无头像时的占位）
pub fn initials(name: &str) -> String {
    let abbr: String = name
        .split_whitespace()
        .filter_map(|w| w.chars().next())
        .take(2)
        .collect();
    if abbr.is_empty() {
        "?".to_string()
    } else {
        abbr.to_uppercase()
    }
}

/// 价格展示：无价格显示为 "—"
pub fn format_price(price: Option<f64>) -> String {
    match price {
        Some(p) => format!("${}", p),
        None => "—".to_string(),
    }
}

#[component]
pub fn Avatar(
    #[prop(into)] name: String,
    #[prop(into)] photo: Option<String>,
) -> impl IntoView {
    match photo.filter(|p| !p.is_empty()) {
        Some(url) => view! {
            <img
                src=url
                alt=name
                class="h-8 w-8 rounded-full object-cover ring-2 ring-primary/20"
            />
        }
        .into_any(),
        None => {
            let abbr = initials(&name);
            view! {
                <div class="h-8 w-8 rounded-full grid place-items-center bg-primary text-primary-content text-xs font-bold ring-2 ring-primary/20">
                    {abbr}
                </div>
            }
            .into_any()
        }
    }
}

#[component]
pub fn ArtCard(art: Artwork) -> impl IntoView {
    let detail_route = AppRoute::ArtDetails(art.id.clone());
    let artist_name = if art.user_name.is_empty() {
        "Unknown Artist".to_string()
    } else {
        art.user_name.clone()
    };

    view! {
        <div class="group relative overflow-hidden rounded-2xl border border-base-300 bg-base-100 shadow-sm hover:shadow-xl transition-all duration-300">
            <div class="relative">
                <img
                    src=art.image.clone()
                    alt=art.title.clone()
                    class="h-56 w-full object-cover transition-transform duration-500 group-hover:scale-105"
                    loading="lazy"
                />
                <div class="absolute left-3 top-3 flex gap-2">
                    <span class="badge badge-primary font-semibold">{art.category.clone()}</span>
                    <Show when={
                        let medium = art.medium.clone();
                        move || !medium.is_empty()
                    }>
                        <span class="badge bg-base-100/80 backdrop-blur text-xs">
                            {art.medium.clone()}
                        </span>
                    </Show>
                </div>
            </div>

            <div class="p-4">
                <h3 class="text-lg font-bold line-clamp-1">{art.title.clone()}</h3>

                <div class="mt-3 flex items-center justify-between">
                    <div class="flex items-center gap-3">
                        <Avatar name=artist_name.clone() photo=art.artist_photo.clone() />
                        <div class="leading-tight">
                            <p class="text-sm font-semibold">{artist_name}</p>
                            <p class="text-xs opacity-60">{art.visibility.to_string()}</p>
                        </div>
                    </div>
                    <div class="badge bg-base-200 text-xs font-semibold">
                        "♥ " {art.likes}
                    </div>
                </div>

                <div class="mt-4 flex items-center justify-between">
                    <Link to=detail_route class="btn btn-primary btn-sm">
                        "View Details"
                    </Link>
                    <span class="text-sm font-semibold text-primary">
                        {format_price(art.price)}
                    </span>
                </div>
            </div>
        </div>
    }
}

/// 请求在途时的骨架卡片
#[component]
pub fn ArtCardSkeleton() -> impl IntoView {
    view! {
        <div class="overflow-hidden rounded-2xl border border-base-300 bg-base-100 shadow-sm">
            <div class="h-56 w-full animate-pulse bg-base-200"></div>
            <div class="p-4 space-y-3">
                <div class="h-5 w-2/3 animate-pulse rounded bg-base-200"></div>
                <div class="flex items-center gap-3">
                    <div class="h-8 w-8 animate-pulse rounded-full bg-base-200"></div>
                    <div class="h-4 w-28 animate-pulse rounded bg-base-200"></div>
                </div>
                <div class="h-8 w-32 animate-pulse rounded bg-base-200"></div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_take_first_letters_of_two_words() {
        assert_eq!(initials("Mira Holt"), "MH");
        assert_eq!(initials("mira"), "M");
        assert_eq!(initials("Anna Lee Park"), "AL");
        assert_eq!(initials(""), "?");
        assert_eq!(initials("   "), "?");
    }

    #[test]
    fn price_formats_or_dashes() {
        assert_eq!(format_price(Some(120.0)), "$120");
        assert_eq!(format_price(Some(99.5)), "$99.5");
        assert_eq!(format_price(None), "—");
    }
}
