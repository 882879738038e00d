//! List summary types and display ordering.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::TodoList;

/// Summary information about a list with item statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListSummary {
    /// List ID
    pub id: u64,
    /// Title of the list
    pub title: String,
    /// Creation timestamp
    pub created_at: Timestamp,
    /// Last update timestamp
    pub updated_at: Timestamp,
    /// Total number of items
    pub todos_count: u32,
    /// Number of items not yet completed
    pub todos_remaining: u32,
}

impl ListSummary {
    /// A list is complete when it has at least one item and none remain
    /// incomplete. Derived for display ordering only, never persisted.
    pub fn is_complete(&self) -> bool {
        self.todos_count > 0 && self.todos_remaining == 0
    }
}

impl From<&TodoList> for ListSummary {
    fn from(list: &TodoList) -> Self {
        let todos_count = list.items.len() as u32;
        let todos_remaining = list.items.iter().filter(|item| !item.completed).count() as u32;

        Self {
            id: list.id,
            title: list.title.clone(),
            created_at: list.created_at,
            updated_at: list.updated_at,
            todos_count,
            todos_remaining,
        }
    }
}

/// Sorts summaries into display order: incomplete lists first, then
/// alphabetically by lowercase title.
pub fn sort_for_display(summaries: &mut [ListSummary]) {
    summaries.sort_by_key(|summary| (summary.is_complete(), summary.title.to_lowercase()));
}
