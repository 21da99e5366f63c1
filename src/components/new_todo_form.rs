//! New Todo Form Component
//!
//! Form for creating new todos, at root level or under a chosen parent.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions::{perform, Action};
use crate::context::use_app_context;

#[component]
pub fn NewTodoForm() -> impl IntoView {
    let ctx = use_app_context();

    let (new_text, set_new_text) = signal(String::new());

    let create_todo = move |ev: SubmitEvent| {
        ev.prevent_default();
        let action = Action::Create {
            text: new_text.get(),
            parent_id: ctx.adding_under.get(),
        };

        spawn_local(async move {
            if perform(ctx, action).await {
                set_new_text.set(String::new());
                ctx.set_adding_under(None);
            }
        });
    };

    view! {
        <form id="add-form" class="new-todo-form" on:submit=create_todo>
            <input
                id="text"
                type="text"
                placeholder=move || {
                    if let Some(pid) = ctx.adding_under.get() {
                        format!("Add under #{}...", pid)
                    } else {
                        "Add new item...".to_string()
                    }
                }
                prop:value=move || new_text.get()
                on:input=move |ev| set_new_text.set(event_target_value(&ev))
            />
            <button type="submit">"Add"</button>

            {move || ctx.adding_under.get().map(|pid| view! {
                <button type="button" class="cancel-btn" on:click=move |_| ctx.set_adding_under(None)>
                    "Cancel (#" {pid} ")"
                </button>
            })}
        </form>
    }
}
