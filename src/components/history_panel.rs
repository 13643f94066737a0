//! History Panel Component
//!
//! Dropdown of the most recent searches under the search box.

use leptos::prelude::*;

use crate::components::perform_search;
use crate::context::AppContext;
use crate::history::recent_entries;
use crate::store::{use_app_store, AppStateStoreFields};

/// Recent search dropdown; hidden while history is empty
#[component]
pub fn HistoryPanel() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let recent = move || store.history().with(|entries| recent_entries(entries));
    let visible = move || ctx.history_open.get() && !recent().is_empty();

    view! {
        <Show when=visible>
            <div id="search-history" class="search-history">
                {move || recent().into_iter().map(|entry| {
                    let value = entry.clone();
                    view! {
                        <div
                            class="history-item"
                            on:click=move |ev| {
                                ev.stop_propagation();
                                ctx.set_query(value.clone());
                                ctx.hide_history();
                                perform_search(ctx, store, &value);
                            }
                        >
                            {entry}
                        </div>
                    }
                }).collect_view()}
            </div>
        </Show>
    }
}
