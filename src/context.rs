//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::commands::ApiError;
use crate::models::Todo;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to reload todos from the server - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload todos from the server - write
    set_reload_trigger: WriteSignal<u32>,
    /// Which todo to add a child under (None = root) - read
    pub adding_under: ReadSignal<Option<u32>>,
    /// Which todo to add a child under (None = root) - write
    set_adding_under: WriteSignal<Option<u32>>,
    /// Last error to show the user - read
    pub last_error: ReadSignal<Option<String>>,
    /// Last error to show the user - write
    set_last_error: WriteSignal<Option<String>>,
    /// Bumped on every reported error, even when the message repeats
    pub error_seq: ReadSignal<u32>,
    set_error_seq: WriteSignal<u32>,
}

impl AppContext {
    pub fn new() -> Self {
        let (reload_trigger, set_reload_trigger) = signal(0u32);
        let (adding_under, set_adding_under) = signal::<Option<u32>>(None);
        let (last_error, set_last_error) = signal::<Option<String>>(None);
        let (error_seq, set_error_seq) = signal(0u32);
        Self {
            reload_trigger,
            set_reload_trigger,
            adding_under,
            set_adding_under,
            last_error,
            set_last_error,
            error_seq,
            set_error_seq,
        }
    }

    /// Trigger a reload of todos
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    /// Set parent for new child todo
    pub fn set_adding_under(&self, parent_id: Option<u32>) {
        self.set_adding_under.set(parent_id);
    }

    /// Drop the add-under target if it is no longer in `todos`
    pub fn sync_adding_under(&self, todos: &[Todo]) {
        let current = self.adding_under.get_untracked();
        let kept = retain_target(current, todos);
        if kept != current {
            log::debug!("[APP] Add-under target {:?} is gone", current);
            self.set_adding_under.set(kept);
        }
    }

    /// Log an API failure and show it in the error banner
    pub fn report_error(&self, error: &ApiError) {
        log::error!("[APP] {}", error);
        self.set_last_error.set(Some(error.to_string()));
        self.set_error_seq.update(|v| *v += 1);
    }

    pub fn clear_error(&self) {
        self.set_last_error.set(None);
    }

    /// Clear the banner only if no error was reported after `seq`
    pub fn clear_error_if(&self, seq: u32) {
        if self.error_seq.get_untracked() == seq {
            self.clear_error();
        }
    }
}

/// A list response started at reload `started` may be applied only if no
/// reload was requested since (`now` is the trigger's current value).
pub fn is_current(started: u32, now: u32) -> bool {
    started == now
}

/// Keep an add-under target only while the item still exists
pub fn retain_target(target: Option<u32>, todos: &[Todo]) -> Option<u32> {
    target.filter(|id| todos.iter().any(|t| t.id == *id))
}

/// Get the app context, which `App` always provides
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
