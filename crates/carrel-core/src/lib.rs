//! Core library for the Carrel study tracking application.
//!
//! This crate provides the business logic for tracking PDF study progress:
//! documents are registered with their binary content, grouped into classes,
//! and toggled between to-study and done. Everything persists in one local
//! schema-versioned SQLite database; each class caches how many documents it
//! holds and how many are done, and the store keeps those counters consistent
//! with the document records inside the same transaction as each mutation.
//!
//! # Quick Start
//!
//! ```rust
//! use carrel_core::{TrackerBuilder, params::{AddDocument, CreateClass}};
//! use jiff::Timestamp;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Create a tracker instance
//! let tracker = TrackerBuilder::new()
//!     .with_database_path(Some("test.db"))
//!     .build()
//!     .await?;
//!
//! // Create a class and add a document to it
//! let class = tracker.add_class(&CreateClass {
//!     name: "Algorithms".to_string(),
//!     is_pinned: false,
//! }).await?;
//!
//! let document = tracker.add_document(&AddDocument {
//!     name: "notes.pdf".to_string(),
//!     size: 4,
//!     last_modified: Timestamp::now(),
//!     content: vec![0x25, 0x50, 0x44, 0x46],
//!     class_id: Some(class.id),
//! }).await?;
//! println!("Added document {}", document.id);
//! # Ok(())
//! # }
//! ```

pub mod db;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod tracker;

// Re-export commonly used types
pub use db::Store;
pub use display::{Classes, Documents, LocalDateTime};
pub use error::{Result, TrackerError};
pub use models::{Class, Document, DocumentStatus, UpdateClassRequest};
pub use params::{AddDocument, CreateClass, DeleteClass, Id, SetDocumentStatus, UpdateClass};
pub use tracker::{Tracker, TrackerBuilder};
