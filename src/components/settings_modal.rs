//! Background Settings Modal
//!
//! Set the page background from a URL or a local image file.

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::background::{self, EMPTY_SOURCE_MESSAGE};
use crate::commands;
use crate::context::AppContext;
use crate::store::{store_set_background, use_app_store};

/// Gear button opening the settings modal
#[component]
pub fn SettingsButton() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <button id="settings-btn" class="settings-btn" title="设置背景" on:click=move |_| ctx.open_settings()>
            "⚙️"
        </button>
    }
}

/// Background modal; closes on ×, on a backdrop click, or after a successful set
#[component]
pub fn SettingsModal() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();
    let (url_input, set_url_input) = signal(String::new());
    let url_ref = NodeRef::<html::Input>::new();
    let file_ref = NodeRef::<html::Input>::new();

    // Focus the URL field once the modal is mounted
    Effect::new(move |_| {
        if ctx.settings_open.get() {
            if let Some(input) = url_ref.get() {
                let _ = input.focus();
            }
        }
    });

    let set_background = move |src: String| {
        if let Err(e) = background::save(&ctx.storage, &src) {
            web_sys::console::warn_1(&format!("[BG] Save failed: {}", e).into());
        }
        store_set_background(&store, src);
        set_url_input.set(String::new());
        ctx.close_settings();
    };

    let on_set = move |_| match background::normalize_source(&url_input.get_untracked()) {
        Some(src) => set_background(src),
        None => commands::alert(EMPTY_SOURCE_MESSAGE),
    };

    let on_file = move |_| {
        let Some(input) = file_ref.get_untracked() else { return };
        let Some(file) = input.files().and_then(|files| files.get(0)) else { return };
        web_sys::console::log_1(&format!("[BG] Reading {}", file.name()).into());
        spawn_local(async move {
            match commands::read_as_data_url(&file).await {
                Ok(data_url) => {
                    input.set_value("");
                    set_background(data_url);
                }
                Err(e) => web_sys::console::warn_1(&format!("[BG] {}", e).into()),
            }
        });
    };

    view! {
        <Show when=move || ctx.settings_open.get()>
            <div id="bg-modal" class="modal" on:click=move |_| ctx.close_settings()>
                <div class="modal-content" on:click=|ev| ev.stop_propagation()>
                    <span class="close" on:click=move |_| ctx.close_settings()>"×"</span>
                    <h2>"设置背景图片"</h2>
                    <input
                        id="bg-url"
                        type="text"
                        placeholder="输入图片URL..."
                        node_ref=url_ref
                        prop:value=move || url_input.get()
                        on:input=move |ev| set_url_input.set(event_target_value(&ev))
                    />
                    <button id="set-bg-btn" on:click=on_set>"设置"</button>
                    <p class="modal-divider">"或"</p>
                    <input id="bg-file" type="file" accept="image/*" node_ref=file_ref on:change=on_file />
                </div>
            </div>
        </Show>
    }
}
