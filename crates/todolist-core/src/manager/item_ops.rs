//! Item operations for the TodoManager.

use super::TodoManager;
use crate::{
    error::Result,
    models::TodoItem,
    params::{CreateItem, Id, ItemRef, MoveItem, SetCompletion},
    validate,
};

impl TodoManager {
    /// Appends a new incomplete item to a list after validating its
    /// title.
    pub async fn create_item(&self, params: &CreateItem) -> Result<TodoItem> {
        let title = validate::item_title(&params.title)?;
        let list_id = params.list_id;

        self.with_store(move |store| store.create_item(list_id, &title))
            .await
    }

    /// Deletes an item; the remaining items keep contiguous positions.
    pub async fn delete_item(&self, params: &ItemRef) -> Result<()> {
        let list_id = params.list_id;
        let item_id = params.item_id;

        self.with_store(move |store| store.delete_item(list_id, item_id))
            .await
    }

    /// Sets a single item's completion state.
    pub async fn set_item_completion(&self, params: &SetCompletion) -> Result<()> {
        let list_id = params.list_id;
        let item_id = params.item_id;
        let completed = params.completed;

        self.with_store(move |store| store.set_item_completion(list_id, item_id, completed))
            .await
    }

    /// Group-toggles completion across a whole list.
    pub async fn toggle_all_completion(&self, params: &Id) -> Result<()> {
        let list_id = params.id;

        self.with_store(move |store| store.toggle_all_completion(list_id))
            .await
    }

    /// Moves an item one step up or down within its list. The raw
    /// direction string is validated before the store is touched.
    pub async fn move_item(&self, params: &MoveItem) -> Result<()> {
        let direction = params.validate()?;
        let list_id = params.list_id;
        let item_id = params.item_id;

        self.with_store(move |store| store.move_item(list_id, item_id, direction))
            .await
    }
}
