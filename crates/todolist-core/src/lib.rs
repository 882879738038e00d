//! Core library for a multi-user todo-list manager.
//!
//! This crate provides the business logic for managing todo lists and
//! their items: title validation, the dense-position ordering and
//! completion-state engine, and two interchangeable storage backends
//! behind one contract.
//!
//! # Architecture
//!
//! - **Models** ([`models`]): lists, items, summaries, move directions
//! - **Engine** ([`engine`]): pure position and completion logic every
//!   backend must agree with
//! - **Stores** ([`store`], [`memory`], [`db`]): the [`store::TodoStore`]
//!   contract with a session-backed and a SQLite-backed implementation
//! - **Manager** ([`manager`]): the async facade a presentation layer
//!   consumes, with validation and per-operation store scoping
//!
//! Within one list, item positions always form the contiguous set
//! `1..=N`. Moves swap exactly two positions, deletes re-contract the
//! tail, and appends take `N + 1`. Each backend commits those
//! transitions atomically, so no observer sees a gap or duplicate.
//!
//! # Quick Start
//!
//! ```rust
//! use todolist_core::{params::{CreateItem, CreateList}, TodoManagerBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Ephemeral store; use with_database_path for the durable one.
//! let manager = TodoManagerBuilder::new().in_memory().build().await?;
//!
//! let list = manager
//!     .create_list(&CreateList { title: "Groceries".to_string() })
//!     .await?;
//!
//! let item = manager
//!     .create_item(&CreateItem {
//!         list_id: list.id,
//!         title: "Milk".to_string(),
//!     })
//!     .await?;
//! println!("Added {} at position {}", item.title, item.position);
//!
//! // Index view: incomplete lists first, then alphabetical.
//! for summary in manager.list_summaries().await? {
//!     println!("{}: {} remaining", summary.title, summary.todos_remaining);
//! }
//! # Ok(())
//! # }
//! ```

pub mod db;
pub mod engine;
pub mod error;
pub mod manager;
pub mod memory;
pub mod models;
pub mod params;
pub mod store;
pub mod validate;

// Re-export commonly used types
pub use db::Database;
pub use error::{Result, TodoError};
pub use manager::{TodoManager, TodoManagerBuilder};
pub use memory::MemoryStore;
pub use models::{ListSummary, MoveDirection, TodoItem, TodoList};
pub use params::{CreateItem, CreateList, Id, ItemRef, MoveItem, RenameList, SetCompletion};
pub use store::TodoStore;
