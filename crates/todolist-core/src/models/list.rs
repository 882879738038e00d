//! Todo list model definition.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::TodoItem;

/// Represents a named todo list with its contained items.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TodoList {
    /// Unique identifier for the list
    pub id: u64,

    /// Title of the list (unique within a store)
    pub title: String,

    /// Timestamp when the list was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the list or any of its items was last modified (UTC)
    pub updated_at: Timestamp,

    /// Contained items, ordered by position
    #[serde(default)]
    pub items: Vec<TodoItem>,
}
