//! High-level manager API for lists and items.
//!
//! This module provides the main [`TodoManager`] interface the presentation
//! layer consumes. The manager owns the choice of storage backend, runs
//! title validation against the state read in the same operation, and maps
//! every call onto the [`crate::store::TodoStore`] contract.
//!
//! # Architecture Overview
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   Operations    │    │  Store contract │    │    Backends     │
//! │ (list_ops,      │───▶│  (TodoStore)    │───▶│ Database /      │
//! │  item_ops)      │    │                 │    │ MemoryStore     │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!    Validation + API      One atomic op          Data persistence
//! ```
//!
//! The store handle is scoped to a single operation: the relational
//! backend opens a connection inside the blocking closure and drops it on
//! every exit path; the session backend locks a shared in-memory store for
//! the duration of the closure. Nothing ambient survives between calls;
//! the backend is injected explicitly when the manager is built.
//!
//! # Usage
//!
//! ```rust
//! use todolist_core::{params::CreateList, TodoManagerBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let manager = TodoManagerBuilder::new().in_memory().build().await?;
//!
//! let list = manager
//!     .create_list(&CreateList {
//!         title: "Groceries".to_string(),
//!     })
//!     .await?;
//! println!("Created list {}", list.title);
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use tokio::task;

use crate::{
    db::Database,
    error::{Result, TodoError},
    memory::MemoryStore,
    store::TodoStore,
};

// Module declarations
pub mod builder;
pub mod item_ops;
pub mod list_ops;


// Re-export the main types
pub use builder::TodoManagerBuilder;

/// Storage backend selected for a manager instance.
pub(crate) enum StoreBackend {
    /// Durable relational store; a connection is opened per operation.
    Database { db_path: PathBuf },
    /// Ephemeral session store shared behind a mutex.
    Memory(Arc<Mutex<MemoryStore>>),
}

/// Main manager interface for todo lists and items.
pub struct TodoManager {
    pub(crate) backend: StoreBackend,
}

impl TodoManager {
    /// Creates a new manager over the given backend.
    pub(crate) fn new(backend: StoreBackend) -> Self {
        Self { backend }
    }

    /// Runs one logical operation against a store handle scoped to the
    /// call. The handle is released when the closure returns, on success
    /// and on error alike.
    pub(crate) async fn with_store<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut dyn TodoStore) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        match &self.backend {
            StoreBackend::Database { db_path } => {
                let db_path = db_path.clone();
                task::spawn_blocking(move || {
                    let mut db = Database::new(&db_path)?;
                    f(&mut db)
                })
                .await
                .map_err(|e| TodoError::Configuration {
                    message: format!("Task join error: {e}"),
                })?
            }
            StoreBackend::Memory(store) => {
                let store = Arc::clone(store);
                task::spawn_blocking(move || {
                    let mut store = store.lock().map_err(|_| TodoError::Configuration {
                        message: "Session store mutex poisoned".to_string(),
                    })?;
                    f(&mut *store)
                })
                .await
                .map_err(|e| TodoError::Configuration {
                    message: format!("Task join error: {e}"),
                })?
            }
        }
    }
}
