//! Error types for the tracker library.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all tracker operations.
#[derive(Error, Debug)]
pub enum TrackerError {
    /// The storage engine refused to open or upgrade the database.
    ///
    /// Distinct from [`TrackerError::Database`]: this kind is produced only by
    /// the open/reconnect/migration paths. Callers must not retry
    /// automatically.
    #[error("Connection error: {message}")]
    Connection {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// A transaction or query against an open connection failed
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// Document not found for the given ID
    #[error("Document with ID {id} not found")]
    DocumentNotFound { id: u64 },
    /// Class not found for the given ID
    #[error("Class with ID {id} not found")]
    ClassNotFound { id: u64 },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
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

impl TrackerError {
    /// Creates a new database error with additional context.
    pub fn database_error(message: &str, source: rusqlite::Error) -> Self {
        Self::Database {
            message: message.into(),
            source,
        }
    }

    /// Creates a new connection error with additional context.
    pub fn connection_error(message: &str, source: rusqlite::Error) -> Self {
        Self::Connection {
            message: message.into(),
            source,
        }
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

/// Specialized extension trait for connection-phase Results (open, upgrade).
pub trait ConnectionResultExt<T> {
    /// Map open/upgrade errors with a message.
    fn conn_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| TrackerError::database_error(message, e))
    }
}

impl<T> ConnectionResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn conn_context(self, message: &str) -> Result<T> {
        self.map_err(|e| TrackerError::connection_error(message, e))
    }
}

/// Result type alias for tracker operations
pub type Result<T> = std::result::Result<T, TrackerError>;
