//! Class operations for the Tracker.

use std::sync::Arc;

use tokio::task;

use super::Tracker;
use crate::{
    error::{Result, TrackerError},
    models::{Class, UpdateClassRequest},
    params::{CreateClass, DeleteClass, Id, UpdateClass},
};

impl Tracker {
    /// Creates a new class. Progress counters always start at zero.
    pub async fn add_class(&self, params: &CreateClass) -> Result<Class> {
        let store = Arc::clone(&self.store);
        let name = params.name.clone();
        let is_pinned = params.is_pinned;

        task::spawn_blocking(move || {
            let mut store = Self::lock_store(&store)?;
            store.add_class(&name, is_pinned)
        })
        .await
        .map_err(|e| TrackerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Retrieves all classes.
    pub async fn get_classes(&self) -> Result<crate::display::Classes> {
        let store = Arc::clone(&self.store);

        let classes = task::spawn_blocking(move || {
            let store = Self::lock_store(&store)?;
            store.get_classes()
        })
        .await
        .map_err(|e| TrackerError::Configuration {
            message: format!("Task join error: {e}"),
        })??;

        Ok(crate::display::Classes(classes))
    }

    /// Retrieves a single class by its ID.
    pub async fn get_class(&self, params: &Id) -> Result<Option<Class>> {
        let store = Arc::clone(&self.store);
        let class_id = params.id;

        task::spawn_blocking(move || {
            let store = Self::lock_store(&store)?;
            store.get_class(class_id)
        })
        .await
        .map_err(|e| TrackerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Updates a class's name and/or pin flag.
    pub async fn update_class(&self, params: &UpdateClass) -> Result<()> {
        let store = Arc::clone(&self.store);
        let class_id = params.id;
        let request = UpdateClassRequest::from(params.clone());

        task::spawn_blocking(move || {
            let mut store = Self::lock_store(&store)?;
            store.update_class(class_id, request)
        })
        .await
        .map_err(|e| TrackerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Permanently deletes a class and every document referencing it.
    ///
    /// Requires explicit confirmation via the `confirmed` field to prevent
    /// accidental cascade deletion. Returns the deleted class together with
    /// the number of documents removed, or None if the class doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::InvalidInput` if `confirmed` is false
    pub async fn delete_class(&self, params: &DeleteClass) -> Result<Option<(Class, usize)>> {
        if !params.confirmed {
            return Err(TrackerError::InvalidInput {
                field: "confirmed".to_string(),
                reason: "Class deletion removes every document in the class. Set 'confirmed' to true to proceed.".to_string(),
            });
        }

        let store = Arc::clone(&self.store);
        let class_id = params.id;

        task::spawn_blocking(move || {
            let mut store = Self::lock_store(&store)?;
            let Some(class) = store.get_class(class_id)? else {
                return Ok(None);
            };
            let removed = store.delete_class(class_id)?;
            Ok(Some((class, removed)))
        })
        .await
        .map_err(|e| TrackerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}
