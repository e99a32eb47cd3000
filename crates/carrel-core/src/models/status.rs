//! Status enumeration for documents.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of document study statuses.
///
/// A document is always in exactly one of the two states. Transitions are
/// fully symmetric and happen only through status updates; there is no
/// terminal state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum DocumentStatus {
    /// Document is queued for studying
    #[default]
    ToStudy,

    /// Document has been studied
    Done,
}

impl FromStr for DocumentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "to-study" | "to_study" => Ok(DocumentStatus::ToStudy),
            "done" => Ok(DocumentStatus::Done),
            _ => Err(format!("Invalid document status: {s}")),
        }
    }
}

impl DocumentStatus {
    /// Convert to the database string representation.
    ///
    /// These exact strings are what older databases contain, so they must
    /// stay stable.
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentStatus::ToStudy => "to-study",
            DocumentStatus::Done => "done",
        }
    }

    /// Get status with consistent icon formatting for display.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use carrel_core::models::DocumentStatus;
    ///
    /// assert_eq!(DocumentStatus::Done.with_icon(), "✓ Done");
    /// assert_eq!(DocumentStatus::ToStudy.with_icon(), "○ To Study");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            DocumentStatus::Done => "✓ Done",
            DocumentStatus::ToStudy => "○ To Study",
        }
    }
}
