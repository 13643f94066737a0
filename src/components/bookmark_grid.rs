//! Bookmark Grid Component

use leptos::prelude::*;

use crate::config::BOOKMARKS;

/// Quick-launch tiles, each opening in a new tab
#[component]
pub fn BookmarkGrid() -> impl IntoView {
    view! {
        <div id="bookmark-cards" class="bookmark-cards">
            {BOOKMARKS.iter().map(|bookmark| view! {
                <a href=bookmark.url class="card" target="_blank">
                    <span class="card-icon">{bookmark.icon}</span>
                    <span class="card-name">{bookmark.name}</span>
                </a>
            }).collect_view()}
        </div>
    }
}
