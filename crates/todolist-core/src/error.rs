//! Error types for the todo-list library.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all todo-list operations.
#[derive(Error, Debug)]
pub enum TodoError {
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// List not found for the given ID
    #[error("List with ID {id} not found")]
    ListNotFound { id: u64 },
    /// Todo item not found for the given ID
    #[error("Todo item with ID {id} not found")]
    ItemNotFound { id: u64 },
    /// A list title collides with an existing one in the same store
    #[error("The title '{title}' must be unique")]
    DuplicateTitle { title: String },
    /// A title falls outside the accepted length bounds after trimming
    #[error("The {field} must be between 1 and 100 characters")]
    InvalidLength { field: &'static str },
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl TodoError {
    /// Creates a new database error with additional context.
    pub fn database_error(message: &str, source: rusqlite::Error) -> Self {
        Self::Database {
            message: message.into(),
            source,
        }
    }

    /// True when the error stems from title validation and should be shown
    /// to the user next to the originating form rather than failing the
    /// request.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            TodoError::DuplicateTitle { .. } | TodoError::InvalidLength { .. }
        )
    }
}

/// Extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| TodoError::database_error(message, e))
    }
}

/// Result type alias for todo-list operations
pub type Result<T> = std::result::Result<T, TodoError>;
