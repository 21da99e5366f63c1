//! Todo List App
//!
//! Root component: owns the fetched list and reloads it whenever an action completes.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::commands;
use crate::components::{ErrorBanner, NewTodoForm, TodoList};
use crate::context::{is_current, AppContext};
use crate::store::{store_set_todos, store_todos, AppState};
use crate::tree::summary;

#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    let store = Store::new(AppState::default());

    // Provide context to all children
    provide_context(ctx);
    provide_context(store);

    // Load todos on mount and whenever the trigger changes
    Effect::new(move |_| {
        let trigger = ctx.reload_trigger.get();
        log::debug!("[APP] Loading todos, trigger={}", trigger);
        spawn_local(async move {
            let result = commands::list_todos().await;

            // A newer reload is in flight; its response wins
            if !is_current(trigger, ctx.reload_trigger.get_untracked()) {
                log::debug!("[APP] Dropping stale list for trigger={}", trigger);
                return;
            }

            match result {
                Ok(loaded) => {
                    log::debug!("[APP] Loaded {} todos", loaded.len());
                    ctx.sync_adding_under(&loaded);
                    store_set_todos(&store, loaded);
                }
                Err(e) => ctx.report_error(&e),
            }
        });
    });

    let status_line = move || {
        let (total, done) = summary(&store_todos(&store));
        format!("{} items, {} done", total, done)
    };

    view! {
        <main class="main-content">
            <h1>"Todo List"</h1>

            <ErrorBanner />

            <NewTodoForm />

            <TodoList />

            <p class="item-count">{status_line}</p>
        </main>
    }
}
