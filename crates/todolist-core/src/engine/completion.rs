//! Completion-state propagation for single items and whole lists.

use crate::{
    error::{Result, TodoError},
    models::TodoItem,
};

/// Computes the item set after setting exactly one item's completion flag.
pub fn toggle_one(items: &[TodoItem], target_id: u64, completed: bool) -> Result<Vec<TodoItem>> {
    let mut next = items.to_vec();

    let target = next
        .iter_mut()
        .find(|item| item.id == target_id)
        .ok_or(TodoError::ItemNotFound { id: target_id })?;
    target.completed = completed;

    Ok(next)
}

/// Computes the item set after a group toggle: if every item is completed,
/// all become incomplete; otherwise all become completed. Acts on the set
/// as a whole, not as independent per-item flips. An empty set is returned
/// unchanged.
pub fn toggle_all(items: &[TodoItem]) -> Vec<TodoItem> {
    if items.is_empty() {
        return Vec::new();
    }

    let target_state = !all_complete(items);
    items
        .iter()
        .map(|item| {
            let mut item = item.clone();
            item.completed = target_state;
            item
        })
        .collect()
}

/// True when the set is non-empty and every item is completed.
pub fn all_complete(items: &[TodoItem]) -> bool {
    !items.is_empty() && items.iter().all(|item| item.completed)
}
