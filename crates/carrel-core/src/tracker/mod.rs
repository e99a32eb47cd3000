//! High-level tracker API for managing classes and documents.
//!
//! This module provides the main [`Tracker`] interface of the study tracker.
//! The tracker wraps the synchronous [`crate::db::Store`] in an async facade:
//! the store is opened once by [`TrackerBuilder`] and shared behind
//! `Arc<Mutex<_>>`, and every operation runs its single transaction on the
//! blocking thread pool via `tokio::task::spawn_blocking`. Callers suspend at
//! task spawn and resume at transaction completion; SQLite serializes the
//! transactions on the shared connection, so concurrent callers can
//! interleave but never observe a torn counter update.
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for creating [`Tracker`] instances with configuration
//! - [`class_ops`]: Class operations (create, list, update, cascade delete)
//! - [`document_ops`]: Document operations (add, list, status, delete)

use std::sync::{Arc, Mutex, MutexGuard};

use tokio::task;

use crate::{
    db::Store,
    error::{Result, TrackerError},
};

// Module declarations
pub mod builder;
pub mod class_ops;
pub mod document_ops;

#[cfg(test)]
mod tests;

// Re-export the main types
pub use builder::TrackerBuilder;

/// Main tracker interface for managing classes and documents.
pub struct Tracker {
    pub(crate) store: Arc<Mutex<Store>>,
}

impl Tracker {
    /// Creates a new tracker around an already opened store.
    pub(crate) fn new(store: Store) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
        }
    }

    /// Drops the underlying connection and reopens it from the same path.
    ///
    /// Call this after detecting that the handle was invalidated externally.
    /// There is no automatic retry: a failed reconnect surfaces as
    /// [`TrackerError::Connection`].
    pub async fn reconnect(&self) -> Result<()> {
        let store = Arc::clone(&self.store);

        task::spawn_blocking(move || {
            let mut store = Self::lock_store(&store)?;
            store.reconnect()
        })
        .await
        .map_err(|e| TrackerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Locks the shared store for the duration of one operation.
    pub(crate) fn lock_store(store: &Arc<Mutex<Store>>) -> Result<MutexGuard<'_, Store>> {
        store.lock().map_err(|_| TrackerError::Configuration {
            message: "Storage mutex poisoned".to_string(),
        })
    }
}
