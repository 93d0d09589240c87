//! 页脚

use leptos::prelude::*;

use crate::components::icons::Palette;
use crate::web::route::AppRoute;
use crate::web::router::Link;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer footer-center p-8 bg-base-200 text-base-content mt-12">
            <aside>
                <Palette attr:class="h-8 w-8 text-primary" />
                <p class="font-bold">"Artify — share your creativity with the world"</p>
                <nav class="flex gap-4">
                    <Link to=AppRoute::Home class="link link-hover">"Home"</Link>
                    <Link to=AppRoute::Explore class="link link-hover">"Explore"</Link>
                    <Link to=AppRoute::Register class="link link-hover">"Join"</Link>
                </nav>
                <p class="opacity-60 text-sm">"Artworks belong to their artists."</p>
            </aside>
        </footer>
    }
}
