//! Repository Layer
//!
//! Data access abstractions and implementations.

mod traits;
mod db;
mod todo_repo;


pub use traits::{MarkableRepository, Repository};
pub use db::{init_db, DbState, IN_MEMORY};
pub use todo_repo::TodoRepository;
