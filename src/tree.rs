//! Tree Utilities
//!
//! Helper functions for tree rendering.

use crate::models::Todo;
use std::collections::{HashMap, HashSet};

/// Render items as indented tree using recursive DFS
/// Returns (Todo, depth) pairs in display order
///
/// Siblings keep the order the server returned them in. An item whose parent
/// is not in the list is shown at root level.
pub fn flatten_tree(items: &[Todo]) -> Vec<(Todo, usize)> {
    let known: HashSet<u32> = items.iter().map(|t| t.id).collect();

    // Build parent -> children map
    let mut children_map: HashMap<Option<u32>, Vec<&Todo>> = HashMap::new();
    for item in items {
        let parent = item.parent_id.filter(|p| known.contains(p));
        children_map.entry(parent).or_default().push(item);
    }

    fn collect(
        parent_id: Option<u32>,
        depth: usize,
        children_map: &HashMap<Option<u32>, Vec<&Todo>>,
        result: &mut Vec<(Todo, usize)>,
    ) {
        if let Some(children) = children_map.get(&parent_id) {
            for item in children {
                result.push(((*item).clone(), depth));
                collect(Some(item.id), depth + 1, children_map, result);
            }
        }
    }

    let mut result = Vec::with_capacity(items.len());
    collect(None, 0, &children_map, &mut result);
    result
}

/// (total, done) counts for the status line
pub fn summary(items: &[Todo]) -> (usize, usize) {
    (items.len(), items.iter().filter(|t| t.mark).count())
}
