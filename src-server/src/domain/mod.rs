//! Domain Layer
//!
//! Contains the todo entity and core abstractions.

mod entity;
mod todo;

pub use entity::{Entity, DomainError, DomainResult};
pub use todo::{Todo, flatten_tree, normalize_text};
