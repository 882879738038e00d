//! Todo item model definition.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Represents a single todo entry within a list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TodoItem {
    /// Unique identifier for the item
    pub id: u64,

    /// ID of the parent list
    pub list_id: u64,

    /// Title of the item
    pub title: String,

    /// Whether the item has been completed
    pub completed: bool,

    /// 1-based rank of the item within its list's display order.
    /// Positions within one list form the contiguous set `1..=N`.
    pub position: u32,

    /// Timestamp when the item was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the item was last updated (UTC)
    pub updated_at: Timestamp,
}
