//! Parameter structures for tracker operations
//!
//! Shared parameter structures usable across interfaces (CLI today, others
//! later) without framework-specific derives. Interface layers wrap these
//! with their own derives (clap, schemars) and convert via `From`/accessor
//! methods, keeping the core free of UI framework dependencies.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Generic parameters for operations requiring just an ID.
///
/// Used for operations like get_class, get_document, delete_document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Id {
    /// The ID of the resource to operate on
    pub id: u64,
}

/// Parameters for adding a new document.
///
/// The status is not a parameter: new documents always start as `to-study`,
/// and `date_added` is stamped by the store at insert time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct AddDocument {
    /// Original file name (required)
    pub name: String,
    /// File size in bytes
    pub size: u64,
    /// Last-modified timestamp of the source file
    pub last_modified: Timestamp,
    /// Raw PDF bytes
    pub content: Vec<u8>,
    /// Optional class to associate the document with.
    ///
    /// A nonexistent class ID is accepted: the document is inserted with a
    /// dangling weak reference and no counter is touched.
    pub class_id: Option<u64>,
}

/// Parameters for setting a document's study status.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct SetDocumentStatus {
    /// Document ID to update (required)
    pub id: u64,
    /// New status for the document ('to-study' or 'done')
    pub status: String,
}

impl SetDocumentStatus {
    /// Validate the status string and return the parsed status.
    ///
    /// # Errors
    ///
    /// * `TrackerError::InvalidInput` - When the status string is not one of
    ///   the two enumerated values
    pub fn validate(&self) -> crate::Result<crate::models::DocumentStatus> {
        use std::str::FromStr;

        use crate::models::DocumentStatus;

        DocumentStatus::from_str(&self.status).map_err(|_| crate::TrackerError::InvalidInput {
            field: "status".to_string(),
            reason: format!(
                "Invalid status: {}. Must be 'to-study' or 'done'",
                self.status
            ),
        })
    }
}

/// Parameters for creating a new class.
///
/// Counters are intentionally absent: a new class always starts with
/// `pdf_count = 0` and `done_count = 0`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct CreateClass {
    /// Display name of the class (required)
    pub name: String,
    /// Whether the class starts out pinned
    #[serde(default)]
    pub is_pinned: bool,
}

/// Parameters for updating an existing class.
///
/// Allows partial updates to the name and pin flag. The progress counters
/// cannot be set through this type.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct UpdateClass {
    /// Class ID to update (required)
    pub id: u64,
    /// Updated display name
    pub name: Option<String>,
    /// Updated pin flag
    pub is_pinned: Option<bool>,
}

/// Parameters for deleting a class.
///
/// Deleting a class cascades to every document referencing it, so the
/// operation requires explicit confirmation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct DeleteClass {
    /// Class ID to delete (required)
    pub id: u64,
    /// Must be true for the deletion to proceed
    #[serde(default)]
    pub confirmed: bool,
}
