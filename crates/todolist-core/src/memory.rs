//! Ephemeral, session-backed storage.
//!
//! [`MemoryStore`] holds the full list state in memory and delegates every
//! reorder and completion change to the [`crate::engine`] functions, so
//! its observable behavior is the engine contract by construction. A web
//! session keeps one store per visitor: [`MemoryStore::snapshot`] and
//! [`MemoryStore::restore`] round-trip the state through JSON so it can
//! live inside a serialized session payload between requests.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::{
    engine,
    error::{Result, TodoError},
    models::{ListSummary, MoveDirection, TodoItem, TodoList},
    store::TodoStore,
};

/// In-memory storage backend holding lists for one session.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct MemoryStore {
    lists: Vec<TodoList>,
    next_list_id: u64,
    next_item_id: u64,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            lists: Vec::new(),
            next_list_id: 0,
            next_item_id: 0,
        }
    }

    /// Serializes the full store state for session persistence.
    pub fn snapshot(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Restores a store from a snapshot produced by [`Self::snapshot`].
    pub fn restore(snapshot: &str) -> Result<Self> {
        Ok(serde_json::from_str(snapshot)?)
    }

    fn next_list_id(&mut self) -> u64 {
        self.next_list_id += 1;
        self.next_list_id
    }

    fn next_item_id(&mut self) -> u64 {
        self.next_item_id += 1;
        self.next_item_id
    }

    fn list_mut(&mut self, id: u64) -> Result<&mut TodoList> {
        self.lists
            .iter_mut()
            .find(|list| list.id == id)
            .ok_or(TodoError::ListNotFound { id })
    }

    /// Replaces a list's items with a new state computed by the engine and
    /// touches the list timestamp.
    fn commit_items(&mut self, list_id: u64, items: Vec<TodoItem>) -> Result<()> {
        let now = Timestamp::now();
        let list = self.list_mut(list_id)?;
        list.items = items;
        list.updated_at = now;
        Ok(())
    }
}

impl TodoStore for MemoryStore {
    fn all_lists(&mut self) -> Result<Vec<TodoList>> {
        Ok(self.lists.clone())
    }

    fn list_summaries(&mut self) -> Result<Vec<ListSummary>> {
        Ok(self.lists.iter().map(ListSummary::from).collect())
    }

    fn find_list(&mut self, id: u64) -> Result<Option<TodoList>> {
        Ok(self.lists.iter().find(|list| list.id == id).cloned())
    }

    fn create_list(&mut self, title: &str) -> Result<TodoList> {
        let now = Timestamp::now();
        let list = TodoList {
            id: self.next_list_id(),
            title: title.to_string(),
            created_at: now,
            updated_at: now,
            items: Vec::new(),
        };
        self.lists.push(list.clone());
        Ok(list)
    }

    fn rename_list(&mut self, id: u64, title: &str) -> Result<()> {
        let now = Timestamp::now();
        let list = self.list_mut(id)?;
        list.title = title.to_string();
        list.updated_at = now;
        Ok(())
    }

    fn delete_list(&mut self, id: u64) -> Result<()> {
        let before = self.lists.len();
        self.lists.retain(|list| list.id != id);
        if self.lists.len() == before {
            return Err(TodoError::ListNotFound { id });
        }
        Ok(())
    }

    fn create_item(&mut self, list_id: u64, title: &str) -> Result<TodoItem> {
        let id = self.next_item_id();
        let now = Timestamp::now();
        let list = self.list_mut(list_id)?;

        let item = TodoItem {
            id,
            list_id,
            title: title.to_string(),
            completed: false,
            position: engine::next_position(&list.items),
            created_at: now,
            updated_at: now,
        };
        list.items.push(item.clone());
        list.updated_at = now;
        Ok(item)
    }

    fn delete_item(&mut self, list_id: u64, item_id: u64) -> Result<()> {
        let list = self.list_mut(list_id)?;
        let next = engine::remove_item(&list.items, item_id)?;
        self.commit_items(list_id, next)
    }

    fn set_item_completion(&mut self, list_id: u64, item_id: u64, completed: bool) -> Result<()> {
        let now = Timestamp::now();
        let list = self.list_mut(list_id)?;
        let mut next = engine::toggle_one(&list.items, item_id, completed)?;
        if let Some(item) = next.iter_mut().find(|item| item.id == item_id) {
            item.updated_at = now;
        }
        self.commit_items(list_id, next)
    }

    fn toggle_all_completion(&mut self, list_id: u64) -> Result<()> {
        let list = self.list_mut(list_id)?;
        let next = engine::toggle_all(&list.items);
        self.commit_items(list_id, next)
    }

    fn move_item(&mut self, list_id: u64, item_id: u64, direction: MoveDirection) -> Result<()> {
        let list = self.list_mut(list_id)?;
        let next = engine::move_item(&list.items, item_id, direction)?;
        self.commit_items(list_id, next)
    }
}
