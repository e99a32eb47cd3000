//! Database operations and SQLite management for documents and classes.
//!
//! This module provides the low-level storage layer of the study tracker. It
//! owns the SQLite connection, schema creation and versioned migrations, and
//! the query interfaces for documents and classes, including maintenance of
//! the denormalized per-class progress counters.

use std::path::{Path, PathBuf};

use rusqlite::Connection;

use crate::error::{ConnectionResultExt, Result};

pub mod class_queries;
pub mod counters;
pub mod document_queries;
pub mod migrations;

/// Storage engine adapter: the single connection handle plus its path.
///
/// A `Store` is constructed once at application start and lives as long as
/// the process; callers never open a connection per operation. When the
/// handle is invalidated externally (for example the database file was
/// replaced underneath us), [`Store::reconnect`] drops it and opens a fresh
/// one from the retained path.
pub struct Store {
    connection: Connection,
    path: PathBuf,
}

impl Store {
    /// Opens the database at `path` and brings its schema up to the current
    /// version.
    ///
    /// Failures here (and in [`Store::reconnect`]) surface as the distinct
    /// [`crate::TrackerError::Connection`] kind; callers must not retry
    /// automatically.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let connection =
            Connection::open(&path).conn_context("Failed to open database connection")?;

        let store = Self { connection, path };
        store.migrate()?;
        Ok(store)
    }

    /// Drops the current connection and opens a new one from the same path.
    ///
    /// Migrations are idempotent, so re-running them on reconnect is a no-op
    /// for an up-to-date database.
    pub fn reconnect(&mut self) -> Result<()> {
        let connection =
            Connection::open(&self.path).conn_context("Failed to reopen database connection")?;
        self.connection = connection;
        self.migrate()
    }

    /// The path this store was opened from.
    pub fn path(&self) -> &Path {
        &self.path
    }
}
