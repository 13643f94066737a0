//! Search Box Component
//!
//! Engine selector, query input and the history dropdown.

use leptos::ev;
use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::commands;
use crate::components::HistoryPanel;
use crate::config::SEARCH_ENGINES;
use crate::context::AppContext;
use crate::history::SearchHistory;
use crate::search::{self, SearchError, SearchOutcome};
use crate::store::{store_set_history, use_app_store, AppStore};

/// Run a submitted query against the selected engine
pub fn perform_search(ctx: AppContext, store: AppStore, query: &str) {
    let history = SearchHistory::new(ctx.storage);
    let engine_id = ctx.engine.get_untracked();

    match search::dispatch(&history, query, &engine_id) {
        Ok(SearchOutcome::Navigate(url)) => {
            web_sys::console::log_1(&format!("[SEARCH] Navigating to {}", url).into());
            if let Err(e) = commands::navigate(&url) {
                web_sys::console::warn_1(&format!("[SEARCH] Navigation failed: {}", e).into());
            }
        }
        Ok(SearchOutcome::OpenTab { url, recorded }) => {
            match recorded {
                Ok(Some(entries)) => store_set_history(&store, entries),
                Ok(None) => {}
                Err(e) => web_sys::console::warn_1(&format!("[SEARCH] History not saved: {}", e).into()),
            }
            web_sys::console::log_1(&format!("[SEARCH] {} -> {}", engine_id, url).into());
            if let Err(e) = commands::open_in_new_tab(&url) {
                web_sys::console::warn_1(&format!("[SEARCH] Open tab failed: {}", e).into());
            }
        }
        Err(err @ SearchError::EmptyQuery) => {
            commands::alert(&err.to_string());
            ctx.focus_search();
        }
        Err(err @ SearchError::UnknownEngine(_)) => {
            web_sys::console::warn_1(&format!("[SEARCH] Unknown engine: {}", engine_id).into());
            commands::alert(&err.to_string());
        }
    }
}

/// Search form with engine selector and history dropdown
#[component]
pub fn SearchBox() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();
    let form_ref = NodeRef::<html::Form>::new();

    // Clicks outside the form close the dropdown
    let _ = window_event_listener(ev::click, move |ev| {
        let Some(form) = form_ref.get_untracked() else { return };
        let inside = ev
            .target()
            .and_then(|target| target.dyn_into::<web_sys::Node>().ok())
            .map(|node| form.contains(Some(&node)))
            .unwrap_or(false);
        if !inside {
            ctx.hide_history();
        }
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let query = ctx.query.get_untracked().trim().to_string();
        perform_search(ctx, store, &query);
        ctx.hide_history();
    };

    let on_focus = move |_| {
        // Refresh from storage before showing
        store_set_history(&store, SearchHistory::new(ctx.storage).entries());
        ctx.show_history();
    };

    view! {
        <form id="search-form" class="search-form" node_ref=form_ref on:submit=on_submit>
            <select
                id="engine-selector"
                class="engine-selector"
                prop:value=move || ctx.engine.get()
                on:change=move |ev| ctx.set_engine(event_target_value(&ev))
            >
                {SEARCH_ENGINES.iter().map(|engine| view! {
                    <option value=engine.id>{engine.name}</option>
                }).collect_view()}
            </select>
            <input
                type="text"
                class="search-input"
                placeholder="搜索或输入网址..."
                autocomplete="off"
                node_ref=ctx.search_input
                prop:value=move || ctx.query.get()
                on:input=move |ev| ctx.set_query(event_target_value(&ev))
                on:focus=on_focus
            />
            <button type="submit" class="search-btn">"搜索"</button>
            <HistoryPanel />
        </form>
    }
}
