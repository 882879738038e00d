//! Todo item CRUD, reordering, and completion queries.
//!
//! Reordering and bulk completion are implemented set-based: each logical
//! operation is a handful of UPDATE statements inside one transaction
//! whose final state matches the [`crate::engine`] contract.

use jiff::Timestamp;
use log::debug;
use rusqlite::{params, types::Type, OptionalExtension};

use crate::{
    error::{DatabaseResultExt, Result, TodoError},
    models::{MoveDirection, TodoItem},
};

// SQL queries as const strings
const CHECK_LIST_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM lists WHERE id = ?1)";
const GET_NEXT_POSITION_SQL: &str =
    "SELECT COALESCE(MAX(position), 0) + 1 FROM todos WHERE list_id = ?1";
const INSERT_TODO_SQL: &str = "INSERT INTO todos (list_id, title, completed, position, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6)";
const UPDATE_LIST_TIMESTAMP_SQL: &str = "UPDATE lists SET updated_at = ?1 WHERE id = ?2";
const SELECT_TODOS_BY_LIST_SQL: &str = "SELECT id, list_id, title, completed, position, created_at, updated_at FROM todos WHERE list_id = ?1 ORDER BY position";
const SELECT_TODO_POSITION_SQL: &str =
    "SELECT position FROM todos WHERE id = ?1 AND list_id = ?2";
const SELECT_TODO_AT_POSITION_SQL: &str =
    "SELECT id FROM todos WHERE list_id = ?1 AND position = ?2";
const UPDATE_TODO_POSITION_TEMP_SQL: &str =
    "UPDATE todos SET position = -1, updated_at = ?1 WHERE id = ?2";
const UPDATE_TODO_POSITION_SQL: &str =
    "UPDATE todos SET position = ?1, updated_at = ?2 WHERE id = ?3";
const UPDATE_TODO_COMPLETED_SQL: &str =
    "UPDATE todos SET completed = ?1, updated_at = ?2 WHERE id = ?3 AND list_id = ?4";
const COUNT_TODOS_SQL: &str = "SELECT COUNT(*) FROM todos WHERE list_id = ?1";
const COUNT_REMAINING_TODOS_SQL: &str =
    "SELECT COUNT(*) FROM todos WHERE list_id = ?1 AND completed = 0";
const UPDATE_ALL_COMPLETED_SQL: &str =
    "UPDATE todos SET completed = ?1, updated_at = ?2 WHERE list_id = ?3";
const DELETE_TODO_SQL: &str = "DELETE FROM todos WHERE id = ?1";
const UPDATE_TODO_POSITIONS_DECREMENT_SQL: &str =
    "UPDATE todos SET position = position - 1 WHERE list_id = ?1 AND position > ?2";

impl super::Database {
    /// Helper function to construct a TodoItem from a database row
    fn build_item_from_row(row: &rusqlite::Row) -> rusqlite::Result<TodoItem> {
        Ok(TodoItem {
            id: row.get::<_, i64>(0)? as u64,
            list_id: row.get::<_, i64>(1)? as u64,
            title: row.get(2)?,
            completed: row.get(3)?,
            position: row.get::<_, i64>(4)? as u32,
            created_at: row.get::<_, String>(5)?.parse::<Timestamp>().map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(5, Type::Text, Box::new(e))
            })?,
            updated_at: row.get::<_, String>(6)?.parse::<Timestamp>().map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(6, Type::Text, Box::new(e))
            })?,
        })
    }

    /// Retrieves all items for a given list, in position order.
    pub fn get_items(&self, list_id: u64) -> Result<Vec<TodoItem>> {
        debug!("executing query: {SELECT_TODOS_BY_LIST_SQL} with list_id: {list_id}");

        let mut stmt = self
            .connection
            .prepare(SELECT_TODOS_BY_LIST_SQL)
            .map_err(|e| TodoError::database_error("Failed to prepare query", e))?;

        let items = stmt
            .query_map(params![list_id as i64], Self::build_item_from_row)
            .map_err(|e| TodoError::database_error("Failed to query todos", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| TodoError::database_error("Failed to fetch todos", e))?;

        Ok(items)
    }

    /// Appends a new incomplete item to the list at position N + 1.
    pub fn create_item(&mut self, list_id: u64, title: &str) -> Result<TodoItem> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let list_exists: bool = tx
            .query_row(CHECK_LIST_EXISTS_SQL, params![list_id as i64], |row| {
                row.get(0)
            })
            .map_err(|e| TodoError::database_error("Failed to check list existence", e))?;

        if !list_exists {
            return Err(TodoError::ListNotFound { id: list_id });
        }

        let position: i64 = tx
            .query_row(GET_NEXT_POSITION_SQL, params![list_id as i64], |row| {
                row.get(0)
            })
            .map_err(|e| TodoError::database_error("Failed to get next position", e))?;

        let now = Timestamp::now();
        let now_str = now.to_string();

        tx.execute(
            INSERT_TODO_SQL,
            params![list_id as i64, title, false, position, &now_str, &now_str],
        )
        .map_err(|e| TodoError::database_error("Failed to insert todo", e))?;

        let id = tx.last_insert_rowid() as u64;

        tx.execute(UPDATE_LIST_TIMESTAMP_SQL, params![&now_str, list_id as i64])
            .map_err(|e| TodoError::database_error("Failed to update list timestamp", e))?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(TodoItem {
            id,
            list_id,
            title: title.into(),
            completed: false,
            position: position as u32,
            created_at: now,
            updated_at: now,
        })
    }

    /// Removes an item from a list, re-contracting later positions by one
    /// so no gap remains.
    pub fn delete_item(&mut self, list_id: u64, item_id: u64) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let position: i64 = tx
            .query_row(
                SELECT_TODO_POSITION_SQL,
                params![item_id as i64, list_id as i64],
                |row| row.get(0),
            )
            .map_err(|e| {
                if matches!(e, rusqlite::Error::QueryReturnedNoRows) {
                    TodoError::ItemNotFound { id: item_id }
                } else {
                    TodoError::database_error("Failed to query todo", e)
                }
            })?;

        tx.execute(DELETE_TODO_SQL, params![item_id as i64])
            .map_err(|e| TodoError::database_error("Failed to delete todo", e))?;

        tx.execute(
            UPDATE_TODO_POSITIONS_DECREMENT_SQL,
            params![list_id as i64, position],
        )
        .map_err(|e| TodoError::database_error("Failed to update todo positions", e))?;

        let now_str = Timestamp::now().to_string();
        tx.execute(UPDATE_LIST_TIMESTAMP_SQL, params![&now_str, list_id as i64])
            .map_err(|e| TodoError::database_error("Failed to update list timestamp", e))?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(())
    }

    /// Sets exactly one item's completion flag.
    pub fn set_item_completion(
        &mut self,
        list_id: u64,
        item_id: u64,
        completed: bool,
    ) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let now_str = Timestamp::now().to_string();

        let updated = tx
            .execute(
                UPDATE_TODO_COMPLETED_SQL,
                params![completed, &now_str, item_id as i64, list_id as i64],
            )
            .map_err(|e| TodoError::database_error("Failed to update todo completion", e))?;

        if updated == 0 {
            return Err(TodoError::ItemNotFound { id: item_id });
        }

        tx.execute(UPDATE_LIST_TIMESTAMP_SQL, params![&now_str, list_id as i64])
            .map_err(|e| TodoError::database_error("Failed to update list timestamp", e))?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(())
    }

    /// Group-toggles completion for a whole list: everything incomplete
    /// when all items were completed, everything completed otherwise.
    /// No-op on an empty list.
    pub fn toggle_all_completion(&mut self, list_id: u64) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let list_exists: bool = tx
            .query_row(CHECK_LIST_EXISTS_SQL, params![list_id as i64], |row| {
                row.get(0)
            })
            .map_err(|e| TodoError::database_error("Failed to check list existence", e))?;

        if !list_exists {
            return Err(TodoError::ListNotFound { id: list_id });
        }

        let total: i64 = tx
            .query_row(COUNT_TODOS_SQL, params![list_id as i64], |row| row.get(0))
            .map_err(|e| TodoError::database_error("Failed to count todos", e))?;

        if total == 0 {
            return Ok(());
        }

        let remaining: i64 = tx
            .query_row(COUNT_REMAINING_TODOS_SQL, params![list_id as i64], |row| {
                row.get(0)
            })
            .map_err(|e| TodoError::database_error("Failed to count remaining todos", e))?;

        // All completed -> clear everything; otherwise complete everything.
        let target_state = remaining != 0;

        let now_str = Timestamp::now().to_string();
        tx.execute(
            UPDATE_ALL_COMPLETED_SQL,
            params![target_state, &now_str, list_id as i64],
        )
        .map_err(|e| TodoError::database_error("Failed to toggle todos", e))?;

        tx.execute(UPDATE_LIST_TIMESTAMP_SQL, params![&now_str, list_id as i64])
            .map_err(|e| TodoError::database_error("Failed to update list timestamp", e))?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(())
    }

    /// Moves an item one position up or down by swapping with its
    /// neighbor. A move past either end of the list is a no-op.
    pub fn move_item(
        &mut self,
        list_id: u64,
        item_id: u64,
        direction: MoveDirection,
    ) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let position: i64 = tx
            .query_row(
                SELECT_TODO_POSITION_SQL,
                params![item_id as i64, list_id as i64],
                |row| row.get(0),
            )
            .map_err(|e| {
                if matches!(e, rusqlite::Error::QueryReturnedNoRows) {
                    TodoError::ItemNotFound { id: item_id }
                } else {
                    TodoError::database_error("Failed to query todo", e)
                }
            })?;

        let swap_position = match direction {
            MoveDirection::Up => position - 1,
            MoveDirection::Down => position + 1,
        };

        let neighbor_id: Option<i64> = tx
            .query_row(
                SELECT_TODO_AT_POSITION_SQL,
                params![list_id as i64, swap_position],
                |row| row.get(0),
            )
            .optional()
            .map_err(|e| TodoError::database_error("Failed to query neighbor todo", e))?;

        // No neighbor means the item already sits at the boundary.
        let Some(neighbor_id) = neighbor_id else {
            return Ok(());
        };

        let now_str = Timestamp::now().to_string();

        // Stage the target at a sentinel position to avoid a (list_id,
        // position) uniqueness collision mid-swap.
        tx.execute(
            UPDATE_TODO_POSITION_TEMP_SQL,
            params![&now_str, item_id as i64],
        )
        .map_err(|e| TodoError::database_error("Failed to stage todo position", e))?;

        tx.execute(
            UPDATE_TODO_POSITION_SQL,
            params![position, &now_str, neighbor_id],
        )
        .map_err(|e| TodoError::database_error("Failed to update neighbor position", e))?;

        tx.execute(
            UPDATE_TODO_POSITION_SQL,
            params![swap_position, &now_str, item_id as i64],
        )
        .map_err(|e| TodoError::database_error("Failed to update todo position", e))?;

        tx.execute(UPDATE_LIST_TIMESTAMP_SQL, params![&now_str, list_id as i64])
            .map_err(|e| TodoError::database_error("Failed to update list timestamp", e))?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(())
    }
}
