//! Builder for creating and configuring TodoManager instances.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use tokio::task;

use super::{StoreBackend, TodoManager};
use crate::{
    db::Database,
    error::{Result, TodoError},
    memory::MemoryStore,
};

/// Builder for creating and configuring TodoManager instances.
#[derive(Debug, Clone)]
pub struct TodoManagerBuilder {
    database_path: Option<PathBuf>,
    in_memory: bool,
}

impl TodoManagerBuilder {
    /// Creates a new builder with default settings: a relational store at
    /// the XDG default path.
    pub fn new() -> Self {
        Self {
            database_path: None,
            in_memory: false,
        }
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/todolist/todos.db` or
    /// `~/.local/share/todolist/todos.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Selects the ephemeral session-backed store instead of the
    /// relational one. Takes precedence over any database path.
    pub fn in_memory(mut self) -> Self {
        self.in_memory = true;
        self
    }

    /// Builds the configured manager instance.
    ///
    /// For the relational backend this creates the database file's parent
    /// directory and initializes the schema eagerly so configuration
    /// errors surface at startup rather than on first use.
    ///
    /// # Errors
    ///
    /// Returns `TodoError::FileSystem` if the database path is invalid
    /// Returns `TodoError::Database` if database initialization fails
    pub async fn build(self) -> Result<TodoManager> {
        if self.in_memory {
            let store = Arc::new(Mutex::new(MemoryStore::new()));
            return Ok(TodoManager::new(StoreBackend::Memory(store)));
        }

        let db_path = if let Some(path) = self.database_path {
            path
        } else {
            Self::default_database_path()?
        };

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| TodoError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let db_path_clone = db_path.clone();
        task::spawn_blocking(move || {
            let _db = Database::new(&db_path_clone)?;
            Ok::<(), TodoError>(())
        })
        .await
        .map_err(|e| TodoError::Configuration {
            message: format!("Task join error: {e}"),
        })??;

        Ok(TodoManager::new(StoreBackend::Database { db_path }))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("todolist")
            .place_data_file("todos.db")
            .map_err(|e| TodoError::XdgDirectory(e.to_string()))
    }
}

impl Default for TodoManagerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
