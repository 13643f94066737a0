//! Theme Toggle Component

use leptos::prelude::*;

use crate::context::AppContext;
use crate::store::{store_set_theme, use_app_store, AppStateStoreFields};

/// Light/dark switch button
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let on_click = move |_| {
        let next = store.theme().get_untracked().toggle();
        if let Err(e) = next.save(&ctx.storage) {
            web_sys::console::warn_1(&format!("[THEME] Save failed: {}", e).into());
        }
        web_sys::console::log_1(&format!("[THEME] Switched to {}", next.as_str()).into());
        store_set_theme(&store, next);
    };

    view! {
        <button
            id="theme-toggle"
            class="theme-toggle"
            title=move || store.theme().get().toggle_title()
            on:click=on_click
        >
            {move || store.theme().get().icon()}
        </button>
    }
}
