//! Class model definition and related functionality.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Represents a named grouping of documents with cached progress counters.
///
/// `pdf_count` and `done_count` are denormalized caches maintained alongside
/// document mutations; the document set is authoritative. The store keeps
/// them satisfying `0 <= done_count <= pdf_count`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Class {
    /// Unique identifier for the class
    pub id: u64,

    /// Display name of the class
    pub name: String,

    /// Timestamp when the class was created (UTC)
    pub date_created: Timestamp,

    /// Whether the class is pinned for display priority
    #[serde(default)]
    pub is_pinned: bool,

    /// Number of documents associated with this class
    pub pdf_count: u32,

    /// Number of associated documents whose status is done
    pub done_count: u32,
}

impl Class {
    /// Completion percentage, rounded to the nearest whole percent.
    ///
    /// An empty class reports 0.
    pub fn progress_percent(&self) -> u32 {
        if self.pdf_count == 0 {
            0
        } else {
            (f64::from(self.done_count) / f64::from(self.pdf_count) * 100.0).round() as u32
        }
    }
}
