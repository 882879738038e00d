//! List operations for the TodoManager.

use super::TodoManager;
use crate::{
    error::Result,
    models::{summary, ListSummary, TodoList},
    params::{CreateList, Id, RenameList},
    validate,
};

impl TodoManager {
    /// Returns summaries for every list in display order: incomplete
    /// lists first, then alphabetically by lowercase title.
    pub async fn list_summaries(&self) -> Result<Vec<ListSummary>> {
        let mut summaries = self.with_store(|store| store.list_summaries()).await?;
        summary::sort_for_display(&mut summaries);
        Ok(summaries)
    }

    /// Returns every list with its items, in creation order.
    pub async fn all_lists(&self) -> Result<Vec<TodoList>> {
        self.with_store(|store| store.all_lists()).await
    }

    /// Retrieves a single list with its items, or None if absent.
    pub async fn get_list(&self, params: &Id) -> Result<Option<TodoList>> {
        let id = params.id;
        self.with_store(move |store| store.find_list(id)).await
    }

    /// Creates a new list after validating the title against the titles
    /// currently committed in the store.
    pub async fn create_list(&self, params: &CreateList) -> Result<TodoList> {
        let title = params.title.clone();

        self.with_store(move |store| {
            let existing: Vec<String> = store
                .list_summaries()?
                .into_iter()
                .map(|summary| summary.title)
                .collect();
            let title = validate::list_title(&title, &existing)?;
            store.create_list(&title)
        })
        .await
    }

    /// Renames a list. The new title is validated against every current
    /// title, the renamed list's own included, so renaming a list to its
    /// existing title reports a duplicate.
    pub async fn rename_list(&self, params: &RenameList) -> Result<()> {
        let list_id = params.list_id;
        let title = params.title.clone();

        self.with_store(move |store| {
            let existing: Vec<String> = store
                .list_summaries()?
                .into_iter()
                .map(|summary| summary.title)
                .collect();
            let title = validate::list_title(&title, &existing)?;
            store.rename_list(list_id, &title)
        })
        .await
    }

    /// Deletes a list and all items it contains.
    pub async fn delete_list(&self, params: &Id) -> Result<()> {
        let id = params.id;
        self.with_store(move |store| store.delete_list(id)).await
    }
}
