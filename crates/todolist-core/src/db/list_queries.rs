//! List CRUD operations and summary queries.

use jiff::Timestamp;
use log::debug;
use rusqlite::{params, types::Type, OptionalExtension};

use crate::{
    error::{DatabaseResultExt, Result, TodoError},
    models::{ListSummary, TodoList},
};

// SQL queries as const strings
const INSERT_LIST_SQL: &str =
    "INSERT INTO lists (title, created_at, updated_at) VALUES (?1, ?2, ?3)";
const SELECT_LIST_SQL: &str = "SELECT id, title, created_at, updated_at FROM lists WHERE id = ?1";
const SELECT_ALL_LISTS_SQL: &str = "SELECT id, title, created_at, updated_at FROM lists ORDER BY id";
const SELECT_LIST_SUMMARIES_SQL: &str = "SELECT id, title, created_at, updated_at, todos_count, todos_remaining FROM list_summaries ORDER BY id";
const UPDATE_LIST_TITLE_SQL: &str = "UPDATE lists SET title = ?1, updated_at = ?2 WHERE id = ?3";
const DELETE_LIST_TODOS_SQL: &str = "DELETE FROM todos WHERE list_id = ?1";
const DELETE_LIST_SQL: &str = "DELETE FROM lists WHERE id = ?1";

/// True when the error is a UNIQUE constraint violation, the backstop for
/// duplicate titles racing past validation.
fn is_unique_violation(error: &rusqlite::Error) -> bool {
    matches!(
        error,
        rusqlite::Error::SqliteFailure(e, _)
            if e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
    )
}

impl super::Database {
    /// Helper function to construct a TodoList (without items) from a
    /// database row
    fn build_list_from_row(row: &rusqlite::Row) -> rusqlite::Result<TodoList> {
        Ok(TodoList {
            id: row.get::<_, i64>(0)? as u64,
            title: row.get(1)?,
            created_at: row.get::<_, String>(2)?.parse::<Timestamp>().map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(2, Type::Text, Box::new(e))
            })?,
            updated_at: row.get::<_, String>(3)?.parse::<Timestamp>().map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(3, Type::Text, Box::new(e))
            })?,
            items: Vec::new(),
        })
    }

    /// Creates a new list with the given title.
    pub fn create_list(&mut self, title: &str) -> Result<TodoList> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let now = Timestamp::now();
        let now_str = now.to_string();

        tx.execute(INSERT_LIST_SQL, params![title, &now_str, &now_str])
            .map_err(|e| {
                if is_unique_violation(&e) {
                    TodoError::DuplicateTitle {
                        title: title.to_string(),
                    }
                } else {
                    TodoError::database_error("Failed to insert list", e)
                }
            })?;

        let id = tx.last_insert_rowid() as u64;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(TodoList {
            id,
            title: title.into(),
            created_at: now,
            updated_at: now,
            items: Vec::new(),
        })
    }

    /// Retrieves a list by its ID, with items eagerly loaded in position
    /// order.
    pub fn get_list(&self, id: u64) -> Result<Option<TodoList>> {
        debug!("executing query: {SELECT_LIST_SQL} with list_id: {id}");

        let mut stmt = self
            .connection
            .prepare(SELECT_LIST_SQL)
            .map_err(|e| TodoError::database_error("Failed to prepare query", e))?;

        let mut list = stmt
            .query_row(params![id as i64], Self::build_list_from_row)
            .optional()
            .map_err(|e| TodoError::database_error("Failed to query list", e))?;

        if let Some(ref mut list) = list {
            list.items = self.get_items(list.id)?;
        }

        Ok(list)
    }

    /// Lists every list with its items eagerly loaded.
    pub fn all_lists(&self) -> Result<Vec<TodoList>> {
        debug!("executing query: {SELECT_ALL_LISTS_SQL}");

        let mut stmt = self
            .connection
            .prepare(SELECT_ALL_LISTS_SQL)
            .map_err(|e| TodoError::database_error("Failed to prepare query", e))?;

        let mut lists = stmt
            .query_map([], Self::build_list_from_row)
            .map_err(|e| TodoError::database_error("Failed to query lists", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| TodoError::database_error("Failed to fetch lists", e))?;

        for list in &mut lists {
            list.items = self.get_items(list.id)?;
        }

        Ok(lists)
    }

    /// Retrieves summary statistics for every list from the
    /// `list_summaries` view.
    pub fn list_summaries(&self) -> Result<Vec<ListSummary>> {
        debug!("executing query: {SELECT_LIST_SUMMARIES_SQL}");

        let mut stmt = self
            .connection
            .prepare(SELECT_LIST_SUMMARIES_SQL)
            .map_err(|e| TodoError::database_error("Failed to prepare query", e))?;

        let summaries = stmt
            .query_map([], |row| {
                Ok(ListSummary {
                    id: row.get::<_, i64>(0)? as u64,
                    title: row.get(1)?,
                    created_at: row.get::<_, String>(2)?.parse::<Timestamp>().map_err(
                        |e| rusqlite::Error::FromSqlConversionFailure(2, Type::Text, Box::new(e)),
                    )?,
                    updated_at: row.get::<_, String>(3)?.parse::<Timestamp>().map_err(
                        |e| rusqlite::Error::FromSqlConversionFailure(3, Type::Text, Box::new(e)),
                    )?,
                    todos_count: row.get::<_, i64>(4)? as u32,
                    todos_remaining: row.get::<_, i64>(5)? as u32,
                })
            })
            .map_err(|e| TodoError::database_error("Failed to query list summaries", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| TodoError::database_error("Failed to fetch list summaries", e))?;

        Ok(summaries)
    }

    /// Renames a list.
    pub fn rename_list(&mut self, id: u64, title: &str) -> Result<()> {
        let now_str = Timestamp::now().to_string();

        let updated = self
            .connection
            .execute(UPDATE_LIST_TITLE_SQL, params![title, &now_str, id as i64])
            .map_err(|e| {
                if is_unique_violation(&e) {
                    TodoError::DuplicateTitle {
                        title: title.to_string(),
                    }
                } else {
                    TodoError::database_error("Failed to rename list", e)
                }
            })?;

        if updated == 0 {
            return Err(TodoError::ListNotFound { id });
        }

        Ok(())
    }

    /// Deletes a list and all items it contains.
    pub fn delete_list(&mut self, id: u64) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        tx.execute(DELETE_LIST_TODOS_SQL, params![id as i64])
            .map_err(|e| TodoError::database_error("Failed to delete list items", e))?;

        let deleted = tx
            .execute(DELETE_LIST_SQL, params![id as i64])
            .map_err(|e| TodoError::database_error("Failed to delete list", e))?;

        if deleted == 0 {
            return Err(TodoError::ListNotFound { id });
        }

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(())
    }
}
