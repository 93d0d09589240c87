//! 明/暗主题切换按钮

use leptos::prelude::*;

use crate::components::icons::{Moon, Sun};
use crate::theme::use_theme;

#[component]
pub fn ThemeSwitcher() -> impl IntoView {
    let theme = use_theme();

    view! {
        <button
            class="btn btn-ghost btn-circle"
            aria-label="Toggle theme"
            on:click=move |_| theme.toggle()
        >
            <Show
                when=move || theme.is_dark()
                fallback=|| view! { <Moon attr:class="h-5 w-5" /> }
            >
                <Sun attr:class="h-5 w-5" />
            </Show>
        </button>
    }
}
