//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;
use crate::models::Todo;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Last fetched list, in server order
    pub todos: Vec<Todo>,
    /// Whether the first fetch has completed
    pub loaded: bool,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the displayed list with a freshly fetched one
pub fn store_set_todos(store: &AppStore, todos: Vec<Todo>) {
    *store.todos().write() = todos;
    *store.loaded().write() = true;
}

/// Current list, tracked
pub fn store_todos(store: &AppStore) -> Vec<Todo> {
    store.todos().get()
}

/// Whether the first fetch has completed, tracked
pub fn store_loaded(store: &AppStore) -> bool {
    store.loaded().get()
}
