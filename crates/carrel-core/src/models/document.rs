//! Document model definition.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::DocumentStatus;

/// Represents one uploaded PDF with its study-status metadata.
///
/// Apart from `status`, every field is captured at upload time and immutable
/// thereafter. `class_id` is a weak reference: it is a lookup key into the
/// classes table, not an ownership relation, and a dangling value is legal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Document {
    /// Unique identifier for the document
    pub id: u64,

    /// Original file name
    pub name: String,

    /// File size in bytes
    pub size: u64,

    /// Last-modified timestamp of the source file
    pub last_modified: Timestamp,

    /// Raw PDF bytes
    pub content: Vec<u8>,

    /// Current study status
    pub status: DocumentStatus,

    /// Timestamp when the document was added (UTC)
    pub date_added: Timestamp,

    /// Optional class the document belongs to
    #[serde(default)]
    pub class_id: Option<u64>,
}
