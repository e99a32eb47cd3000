//! Document operations for the Tracker.

use std::sync::Arc;

use tokio::task;

use super::Tracker;
use crate::{
    error::{Result, TrackerError},
    models::Document,
    params::{AddDocument, Id, SetDocumentStatus},
};

impl Tracker {
    /// Adds a new document with optional class association.
    ///
    /// The document always starts as to-study. When a class is given, its
    /// `pdf_count` is incremented in the same transaction; a nonexistent
    /// class leaves the document with a dangling weak reference and is not an
    /// error.
    pub async fn add_document(&self, params: &AddDocument) -> Result<Document> {
        let store = Arc::clone(&self.store);
        let name = params.name.clone();
        let size = params.size;
        let last_modified = params.last_modified;
        let content = params.content.clone();
        let class_id = params.class_id;

        task::spawn_blocking(move || {
            let mut store = Self::lock_store(&store)?;
            store.add_document(&name, size, last_modified, &content, class_id)
        })
        .await
        .map_err(|e| TrackerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Retrieves all documents.
    pub async fn get_documents(&self) -> Result<crate::display::Documents> {
        let store = Arc::clone(&self.store);

        let documents = task::spawn_blocking(move || {
            let store = Self::lock_store(&store)?;
            store.get_documents()
        })
        .await
        .map_err(|e| TrackerError::Configuration {
            message: format!("Task join error: {e}"),
        })??;

        Ok(crate::display::Documents(documents))
    }

    /// Retrieves all documents associated with the given class.
    pub async fn get_documents_for_class(&self, params: &Id) -> Result<crate::display::Documents> {
        let store = Arc::clone(&self.store);
        let class_id = params.id;

        let documents = task::spawn_blocking(move || {
            let store = Self::lock_store(&store)?;
            store.get_documents_for_class(class_id)
        })
        .await
        .map_err(|e| TrackerError::Configuration {
            message: format!("Task join error: {e}"),
        })??;

        Ok(crate::display::Documents(documents))
    }

    /// Retrieves a single document by its ID.
    pub async fn get_document(&self, params: &Id) -> Result<Option<Document>> {
        let store = Arc::clone(&self.store);
        let document_id = params.id;

        task::spawn_blocking(move || {
            let store = Self::lock_store(&store)?;
            store.get_document(document_id)
        })
        .await
        .map_err(|e| TrackerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Sets a document's study status.
    ///
    /// Validates the status string, then applies the transition. Setting the
    /// current status again is a no-op.
    pub async fn set_document_status(&self, params: &SetDocumentStatus) -> Result<()> {
        let status = params.validate()?;
        let store = Arc::clone(&self.store);
        let document_id = params.id;

        task::spawn_blocking(move || {
            let mut store = Self::lock_store(&store)?;
            store.set_document_status(document_id, status)
        })
        .await
        .map_err(|e| TrackerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Removes a document.
    pub async fn delete_document(&self, params: &Id) -> Result<()> {
        let store = Arc::clone(&self.store);
        let document_id = params.id;

        task::spawn_blocking(move || {
            let mut store = Self::lock_store(&store)?;
            store.delete_document(document_id)
        })
        .await
        .map_err(|e| TrackerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}
