//! Storage contract shared by every backend.
//!
//! The [`TodoStore`] trait is the seam between the manager facade and the
//! two state holders: the ephemeral [`crate::memory::MemoryStore`] and the
//! relational [`crate::db::Database`]. Each operation is atomic with
//! respect to the position invariant: a caller never observes a list
//! whose item positions are not exactly `1..=N`.
//!
//! The [`crate::engine`] module defines the reorder and completion
//! semantics. A backend may delegate to it on a loaded snapshot (the
//! memory store) or reproduce the same final state set-based inside a
//! transaction (the database); both are conformant as long as the final
//! state matches the engine's contract.

use crate::{
    db::Database,
    error::Result,
    models::{ListSummary, MoveDirection, TodoItem, TodoList},
};

/// Operations required from any storage backend.
pub trait TodoStore {
    /// Returns every list with its items, in creation order.
    fn all_lists(&mut self) -> Result<Vec<TodoList>>;

    /// Returns summary statistics for every list, in creation order.
    fn list_summaries(&mut self) -> Result<Vec<ListSummary>>;

    /// Looks up one list with its items.
    fn find_list(&mut self, id: u64) -> Result<Option<TodoList>>;

    /// Creates a list with the given (already validated) title.
    fn create_list(&mut self, title: &str) -> Result<TodoList>;

    /// Renames a list.
    fn rename_list(&mut self, id: u64, title: &str) -> Result<()>;

    /// Deletes a list and all items it contains.
    fn delete_list(&mut self, id: u64) -> Result<()>;

    /// Appends a new incomplete item at position N + 1.
    fn create_item(&mut self, list_id: u64, title: &str) -> Result<TodoItem>;

    /// Deletes an item, re-contracting later positions so no gap remains.
    fn delete_item(&mut self, list_id: u64, item_id: u64) -> Result<()>;

    /// Sets exactly one item's completion flag.
    fn set_item_completion(&mut self, list_id: u64, item_id: u64, completed: bool) -> Result<()>;

    /// Group-toggles completion for the whole list: all incomplete when
    /// every item was completed, all completed otherwise.
    fn toggle_all_completion(&mut self, list_id: u64) -> Result<()>;

    /// Moves an item one step up or down, swapping positions with its
    /// neighbor; a move past either end is a no-op.
    fn move_item(&mut self, list_id: u64, item_id: u64, direction: MoveDirection) -> Result<()>;
}

impl TodoStore for Database {
    fn all_lists(&mut self) -> Result<Vec<TodoList>> {
        Database::all_lists(self)
    }

    fn list_summaries(&mut self) -> Result<Vec<ListSummary>> {
        Database::list_summaries(self)
    }

    fn find_list(&mut self, id: u64) -> Result<Option<TodoList>> {
        self.get_list(id)
    }

    fn create_list(&mut self, title: &str) -> Result<TodoList> {
        Database::create_list(self, title)
    }

    fn rename_list(&mut self, id: u64, title: &str) -> Result<()> {
        Database::rename_list(self, id, title)
    }

    fn delete_list(&mut self, id: u64) -> Result<()> {
        Database::delete_list(self, id)
    }

    fn create_item(&mut self, list_id: u64, title: &str) -> Result<TodoItem> {
        Database::create_item(self, list_id, title)
    }

    fn delete_item(&mut self, list_id: u64, item_id: u64) -> Result<()> {
        Database::delete_item(self, list_id, item_id)
    }

    fn set_item_completion(&mut self, list_id: u64, item_id: u64, completed: bool) -> Result<()> {
        Database::set_item_completion(self, list_id, item_id, completed)
    }

    fn toggle_all_completion(&mut self, list_id: u64) -> Result<()> {
        Database::toggle_all_completion(self, list_id)
    }

    fn move_item(&mut self, list_id: u64, item_id: u64, direction: MoveDirection) -> Result<()> {
        Database::move_item(self, list_id, item_id, direction)
    }
}
