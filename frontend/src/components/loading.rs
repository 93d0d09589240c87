//! 全屏加载指示

use leptos::prelude::*;

#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center min-h-[50vh]">
            <span class="loading loading-spinner loading-lg text-primary"></span>
        </div>
    }
}
