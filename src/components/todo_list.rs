//! Todo List Component
//!
//! Renders the last fetched list as an indented tree, one row per todo.

use leptos::prelude::*;

use crate::components::TodoRow;
use crate::store::{store_loaded, store_todos, use_app_store};
use crate::tree::flatten_tree;

#[component]
pub fn TodoList() -> impl IntoView {
    let store = use_app_store();

    let rows = move || flatten_tree(&store_todos(&store));
    let is_empty = move || store_loaded(&store) && store_todos(&store).is_empty();

    view! {
        <ul id="list" class="todo-list">
            <For
                each=rows
                // Every displayed field is part of the key so any change re-renders the row
                key=|(todo, depth)| (todo.id, *depth, todo.text.clone(), todo.mark, todo.parent_id)
                children=move |(todo, depth)| view! { <TodoRow todo=todo depth=depth /> }
            />
        </ul>
        <Show when=is_empty>
            <p class="empty-hint">"Nothing to do"</p>
        </Show>
        <Show when=move || !store_loaded(&store)>
            <p class="loading-hint">"Loading..."</p>
        </Show>
    }
}
