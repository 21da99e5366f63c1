//! Todo Entity
//!
//! A list item with completion flag and optional parent (single parent tree).

use serde::{Deserialize, Serialize};
use super::entity::{DomainError, DomainResult, Entity};

/// A todo item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Unique identifier
    pub id: u32,
    /// Item label
    pub text: String,
    /// Completion status
    pub mark: bool,
    /// Parent item ID (None = root level)
    pub parent_id: Option<u32>,
}

impl Todo {
    /// Create a new unmarked root item
    pub fn new(id: u32, text: String) -> Self {
        Self {
            id,
            text,
            mark: false,
            parent_id: None,
        }
    }

    /// Create a new unmarked item under a parent
    pub fn new_child(id: u32, text: String, parent_id: u32) -> Self {
        Self {
            parent_id: Some(parent_id),
            ..Self::new(id, text)
        }
    }
}

impl Entity for Todo {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// Label text accepted for a new item: trimmed and non-empty
pub fn normalize_text(text: &str) -> DomainResult<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(DomainError::InvalidInput("text must not be empty".to_string()));
    }
    Ok(trimmed.to_string())
}

/// Order items depth-first by parent, returning (item, depth) pairs.
///
/// Siblings keep their input order. Items whose parent is not in the slice
/// are treated as roots.
pub fn flatten_tree(items: &[Todo]) -> Vec<(&Todo, usize)> {
    use std::collections::{HashMap, HashSet};

    let known: HashSet<u32> = items.iter().map(|t| t.id).collect();
    let mut children_map: HashMap<Option<u32>, Vec<&Todo>> = HashMap::new();
    for item in items {
        let parent = item.parent_id.filter(|p| known.contains(p));
        children_map.entry(parent).or_default().push(item);
    }

    fn collect<'a>(
        parent_id: Option<u32>,
        depth: usize,
        children_map: &HashMap<Option<u32>, Vec<&'a Todo>>,
        result: &mut Vec<(&'a Todo, usize)>,
    ) {
        if let Some(children) = children_map.get(&parent_id) {
            for item in children {
                result.push((item, depth));
                collect(Some(item.id), depth + 1, children_map, result);
            }
        }
    }

    let mut result = Vec::with_capacity(items.len());
    collect(None, 0, &children_map, &mut result);
    result
}
