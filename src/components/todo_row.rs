//! Todo Row Component
//!
//! Individual todo in the list: label plus mark, delete and add-child controls.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions::{perform, Action};
use crate::context::use_app_context;
use crate::models::Todo;

/// Indentation per tree level, in pixels
const INDENT_PX: usize = 24;

/// Row text, with a check mark appended when done
pub fn row_label(todo: &Todo) -> String {
    if todo.mark {
        format!("{} \u{2713}", todo.text)
    } else {
        todo.text.clone()
    }
}

pub fn mark_button_label(mark: bool) -> &'static str {
    if mark { "Unmark" } else { "Mark" }
}

/// A single todo row
#[component]
pub fn TodoRow(todo: Todo, depth: usize) -> impl IntoView {
    let ctx = use_app_context();

    let id = todo.id;
    let mark = todo.mark;
    let label = row_label(&todo);
    let toggle = Action::toggle(&todo);

    view! {
        <li
            class=if mark { "todo-row marked" } else { "todo-row" }
            style=format!("margin-left: {}px;", depth * INDENT_PX)
        >
            <span class="todo-text">{label}</span>

            <button class="mark-btn" on:click=move |_| {
                let action = toggle.clone();
                spawn_local(async move {
                    perform(ctx, action).await;
                });
            }>
                {mark_button_label(mark)}
            </button>

            <button class="delete-btn" on:click=move |_| {
                spawn_local(async move {
                    perform(ctx, Action::Delete { id }).await;
                });
            }>
                "Delete"
            </button>

            // Add child button
            <button class="add-child-btn" title="Add under this item" on:click=move |_| ctx.set_adding_under(Some(id))>
                "+"
            </button>
        </li>
    }
}
