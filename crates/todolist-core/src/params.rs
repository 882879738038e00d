//! Parameter structures for todo-list operations.
//!
//! Shared parameter structures used by the [`crate::manager::TodoManager`]
//! facade without framework-specific derives. A presentation layer (HTTP
//! handlers, CLI, ...) builds these from its own request types and passes
//! them down; raw form-field strings such as the move `direction` are
//! carried verbatim and validated here, so every interface gets identical
//! behavior.

use serde::{Deserialize, Serialize};

use crate::models::MoveDirection;

/// Generic parameters for operations requiring just a list ID.
///
/// Used for operations like find_list, delete_list, toggle_all_completion.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Id {
    /// The ID of the resource to operate on
    pub id: u64,
}

/// Parameters for creating a new list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateList {
    /// Title of the list (required, validated before the store is touched)
    pub title: String,
}

/// Parameters for renaming an existing list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RenameList {
    /// ID of the list to rename
    pub list_id: u64,
    /// The new title
    pub title: String,
}

/// Parameters for creating a new todo item appended to a list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateItem {
    /// ID of the list to add the item to
    pub list_id: u64,
    /// Title of the item (required)
    pub title: String,
}

/// Parameters addressing one item within one list.
///
/// Used for operations like delete_item.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemRef {
    /// ID of the containing list
    pub list_id: u64,
    /// ID of the item
    pub item_id: u64,
}

/// Parameters for setting a single item's completion state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SetCompletion {
    /// ID of the containing list
    pub list_id: u64,
    /// ID of the item
    pub item_id: u64,
    /// Desired completion state
    pub completed: bool,
}

/// Parameters for moving an item one step up or down within its list.
///
/// The direction arrives as the raw form-field literal (`"up"` or
/// `"down"`) and is parsed by [`MoveItem::validate`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MoveItem {
    /// ID of the containing list
    pub list_id: u64,
    /// ID of the item to move
    pub item_id: u64,
    /// Move direction: "up" or "down"
    pub direction: String,
}

impl MoveItem {
    /// Parse and validate the direction field.
    ///
    /// # Errors
    ///
    /// * `TodoError::InvalidInput` - When the direction string is neither
    ///   "up" nor "down"
    pub fn validate(&self) -> crate::Result<MoveDirection> {
        self.direction
            .parse::<MoveDirection>()
            .map_err(|_| crate::TodoError::InvalidInput {
                field: "direction".to_string(),
                reason: format!(
                    "Invalid direction: {}. Must be 'up' or 'down'",
                    self.direction
                ),
            })
    }
}
