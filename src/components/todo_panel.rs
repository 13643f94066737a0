//! To-Do Panel Component
//!
//! Input row plus checklist. The list is rebuilt on every change so each row
//! always carries its current position.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::models::TodoItem;
use crate::storage::{BrowserStorage, StorageResult};
use crate::store::{store_set_todos, use_app_store, AppStateStoreFields, AppStore};
use crate::todo::TodoList;

/// Re-render the list after a row mutation, whether or not it took effect
fn apply_change(store: &AppStore, todos: &TodoList<BrowserStorage>, result: StorageResult<Option<Vec<TodoItem>>>) {
    if let Err(e) = &result {
        web_sys::console::warn_1(&format!("[TODO] Save failed: {}", e).into());
    }
    let items = todos.rendered(&result);
    web_sys::console::log_1(&format!("[TODO] {} items", items.len()).into());
    store_set_todos(store, items);
}

/// Single checklist row bound to its render-time index
#[component]
fn TodoRow(index: usize, item: TodoItem) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let on_toggle = move |_| {
        let todos = TodoList::new(ctx.storage);
        apply_change(&store, &todos, todos.toggle(index));
    };
    let on_delete = move |_| {
        let todos = TodoList::new(ctx.storage);
        apply_change(&store, &todos, todos.remove(index));
    };
    let text_class = if item.completed { "todo-text completed" } else { "todo-text" };

    view! {
        <li class="todo-item">
            <input
                type="checkbox"
                class="todo-checkbox"
                prop:checked=item.completed
                on:change=on_toggle
            />
            <span class=text_class>
                {item.text}
            </span>
            <button class="delete-btn" on:click=on_delete>"×"</button>
        </li>
    }
}

/// To-do list with add form
#[component]
pub fn TodoPanel() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();
    let (new_text, set_new_text) = signal(String::new());

    let add_todo = move || match TodoList::new(ctx.storage).submit(&new_text.get_untracked()) {
        Ok(outcome) => {
            if let Some(items) = outcome.items {
                web_sys::console::log_1(&format!("[TODO] {} items", items.len()).into());
                store_set_todos(&store, items);
            }
            set_new_text.set(outcome.input);
        }
        Err(e) => web_sys::console::warn_1(&format!("[TODO] Save failed: {}", e).into()),
    };

    view! {
        <section class="todo-container">
            <h2 class="todo-title">"待办事项"</h2>
            <div class="todo-input-row">
                <input
                    id="todo-input"
                    type="text"
                    placeholder="添加新任务..."
                    prop:value=move || new_text.get()
                    on:input=move |ev| set_new_text.set(event_target_value(&ev))
                    on:keypress=move |ev| {
                        if ev.key() == "Enter" {
                            add_todo();
                        }
                    }
                />
                <button id="add-todo-btn" on:click=move |_| add_todo()>"添加"</button>
            </div>
            <ul id="todo-list" class="todo-list">
                {move || store.todos().get().into_iter().enumerate().map(|(index, item)| view! {
                    <TodoRow index=index item=item />
                }).collect_view()}
            </ul>
        </section>
    }
}
