//! UI Components
//!
//! Reusable Leptos components.

mod todo_row;
mod todo_list;
mod new_todo_form;
mod error_banner;

pub use todo_row::TodoRow;
pub use todo_list::TodoList;
pub use new_todo_form::NewTodoForm;
pub use error_banner::ErrorBanner;
