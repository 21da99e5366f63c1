//! Repository Layer - Core Traits
//!
//! Defines the abstract interfaces for data access.

use async_trait::async_trait;
use crate::domain::{Entity, DomainResult};

/// Core repository trait: create, list and delete
///
/// Generic over any Entity type.
#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    /// Create a new entity, returning it with its assigned ID
    async fn create(&self, entity: &T) -> DomainResult<T>;

    /// List all entities
    async fn list(&self) -> DomainResult<Vec<T>>;

    /// Delete entity by ID
    async fn delete(&self, id: T::Id) -> DomainResult<()>;
}

/// Completion-flag operations for entities that can be checked off
#[async_trait]
pub trait MarkableRepository<T: Entity>: Repository<T> {
    /// Set the completion flag of a single entity
    async fn set_mark(&self, id: T::Id, mark: bool) -> DomainResult<()>;
}
