//! Position assignment for moves, appends, and deletions.

use crate::{
    error::{Result, TodoError},
    models::{MoveDirection, TodoItem},
};

/// Computes the item set after moving one item a single step up or down.
///
/// The target and the item currently holding the adjacent position exchange
/// positions; every other item is untouched. A move past either end of the
/// list is a no-op, not an error. The returned vector is sorted by
/// position.
pub fn move_item(
    items: &[TodoItem],
    target_id: u64,
    direction: MoveDirection,
) -> Result<Vec<TodoItem>> {
    let target_index = items
        .iter()
        .position(|item| item.id == target_id)
        .ok_or(TodoError::ItemNotFound { id: target_id })?;

    let mut next = items.to_vec();
    let position = next[target_index].position;

    let swap_position = match direction {
        MoveDirection::Up => position.checked_sub(1),
        MoveDirection::Down => position.checked_add(1),
    };

    // Outside 1..=N means the item already sits at the boundary.
    let in_range = |p: &u32| (1..=items.len() as u32).contains(p);
    if let Some(swap_position) = swap_position.filter(in_range) {
        if let Some(swap_index) = next.iter().position(|item| item.position == swap_position) {
            next[swap_index].position = position;
            next[target_index].position = swap_position;
        }
    }

    next.sort_by_key(|item| item.position);
    Ok(next)
}

/// Returns the position a newly appended item takes: one past the current
/// count. Freed positions are never reused.
pub fn next_position(items: &[TodoItem]) -> u32 {
    items.len() as u32 + 1
}

/// Computes the item set after deleting one item, re-contracting the
/// positions of all later items by one so no gap remains.
pub fn remove_item(items: &[TodoItem], target_id: u64) -> Result<Vec<TodoItem>> {
    if !items.iter().any(|item| item.id == target_id) {
        return Err(TodoError::ItemNotFound { id: target_id });
    }

    let mut next: Vec<TodoItem> = items
        .iter()
        .filter(|item| item.id != target_id)
        .cloned()
        .collect();

    next.sort_by_key(|item| item.position);
    for (index, item) in next.iter_mut().enumerate() {
        item.position = index as u32 + 1;
    }

    Ok(next)
}
