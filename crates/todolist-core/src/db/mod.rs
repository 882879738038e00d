//! Database operations and SQLite management for lists and todo items.
//!
//! This module provides the relational storage backend. It handles SQLite
//! database connections, schema management, and the query interfaces for
//! lists and items. Every logical operation runs inside one transaction,
//! so a failure never leaves partially updated positions or completion
//! states visible.

use std::path::Path;

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod item_queries;
pub mod list_queries;
pub mod migrations;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}
