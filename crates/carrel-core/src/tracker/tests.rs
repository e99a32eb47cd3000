//! Tests for the tracker module.

use jiff::Timestamp;
use tempfile::TempDir;

use super::*;
use crate::{
    error::TrackerError,
    params::{AddDocument, CreateClass, DeleteClass, Id, SetDocumentStatus, UpdateClass},
};

/// Helper function to create a test tracker
async fn create_test_tracker() -> (TempDir, Tracker) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let tracker = TrackerBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create tracker");
    (temp_dir, tracker)
}

fn sample_document(name: &str, class_id: Option<u64>) -> AddDocument {
    AddDocument {
        name: name.to_string(),
        size: 4,
        last_modified: Timestamp::from_second(1640995200).unwrap(),
        content: vec![0x25, 0x50, 0x44, 0x46],
        class_id,
    }
}

#[tokio::test]
async fn test_add_and_get_class() {
    let (_temp_dir, tracker) = create_test_tracker().await;

    let class = tracker
        .add_class(&CreateClass {
            name: "Algorithms".to_string(),
            is_pinned: false,
        })
        .await
        .expect("Failed to create class");

    assert_eq!(class.pdf_count, 0);
    assert_eq!(class.done_count, 0);

    let fetched = tracker
        .get_class(&Id { id: class.id })
        .await
        .expect("Failed to get class")
        .expect("Class should exist");
    assert_eq!(fetched.name, "Algorithms");
}

#[tokio::test]
async fn test_document_lifecycle_updates_counters() {
    let (_temp_dir, tracker) = create_test_tracker().await;

    let class = tracker
        .add_class(&CreateClass {
            name: "Algorithms".to_string(),
            is_pinned: false,
        })
        .await
        .expect("Failed to create class");

    let document = tracker
        .add_document(&sample_document("notes.pdf", Some(class.id)))
        .await
        .expect("Failed to add document");

    let class = tracker
        .get_class(&Id { id: class.id })
        .await
        .unwrap()
        .unwrap();
    assert_eq!(class.pdf_count, 1);
    assert_eq!(class.done_count, 0);

    tracker
        .set_document_status(&SetDocumentStatus {
            id: document.id,
            status: "done".to_string(),
        })
        .await
        .expect("Failed to set status");

    let class = tracker
        .get_class(&Id { id: class.id })
        .await
        .unwrap()
        .unwrap();
    assert_eq!(class.done_count, 1);

    tracker
        .delete_document(&Id { id: document.id })
        .await
        .expect("Failed to delete document");

    let class = tracker
        .get_class(&Id { id: class.id })
        .await
        .unwrap()
        .unwrap();
    assert_eq!(class.pdf_count, 0);
    assert_eq!(class.done_count, 0);
}

#[tokio::test]
async fn test_set_document_status_rejects_invalid_value() {
    let (_temp_dir, tracker) = create_test_tracker().await;

    let document = tracker
        .add_document(&sample_document("notes.pdf", None))
        .await
        .expect("Failed to add document");

    let result = tracker
        .set_document_status(&SetDocumentStatus {
            id: document.id,
            status: "archived".to_string(),
        })
        .await;

    assert!(matches!(
        result.unwrap_err(),
        TrackerError::InvalidInput { .. }
    ));
}

#[tokio::test]
async fn test_update_class() {
    let (_temp_dir, tracker) = create_test_tracker().await;

    let class = tracker
        .add_class(&CreateClass {
            name: "Algorithms".to_string(),
            is_pinned: false,
        })
        .await
        .expect("Failed to create class");

    tracker
        .update_class(&UpdateClass {
            id: class.id,
            name: Some("Advanced Algorithms".to_string()),
            is_pinned: Some(true),
        })
        .await
        .expect("Failed to update class");

    let updated = tracker
        .get_class(&Id { id: class.id })
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.name, "Advanced Algorithms");
    assert!(updated.is_pinned);
    assert_eq!(updated.pdf_count, 0);
}

#[tokio::test]
async fn test_delete_class_requires_confirmation() {
    let (_temp_dir, tracker) = create_test_tracker().await;

    let class = tracker
        .add_class(&CreateClass {
            name: "Algorithms".to_string(),
            is_pinned: false,
        })
        .await
        .expect("Failed to create class");

    let result = tracker
        .delete_class(&DeleteClass {
            id: class.id,
            confirmed: false,
        })
        .await;

    assert!(matches!(
        result.unwrap_err(),
        TrackerError::InvalidInput { .. }
    ));

    // Still there
    assert!(tracker
        .get_class(&Id { id: class.id })
        .await
        .unwrap()
        .is_some());
}

#[tokio::test]
async fn test_delete_class_cascades_and_reports_count() {
    let (_temp_dir, tracker) = create_test_tracker().await;

    let class = tracker
        .add_class(&CreateClass {
            name: "Algorithms".to_string(),
            is_pinned: false,
        })
        .await
        .expect("Failed to create class");

    for name in ["a.pdf", "b.pdf"] {
        tracker
            .add_document(&sample_document(name, Some(class.id)))
            .await
            .expect("Failed to add document");
    }

    let (deleted, removed) = tracker
        .delete_class(&DeleteClass {
            id: class.id,
            confirmed: true,
        })
        .await
        .expect("Failed to delete class")
        .expect("Class should have existed");

    assert_eq!(deleted.id, class.id);
    assert_eq!(removed, 2);

    let documents = tracker
        .get_documents_for_class(&Id { id: class.id })
        .await
        .expect("Failed to list documents");
    assert!(documents.is_empty());
}

#[tokio::test]
async fn test_delete_missing_class_returns_none() {
    let (_temp_dir, tracker) = create_test_tracker().await;

    let result = tracker
        .delete_class(&DeleteClass {
            id: 999,
            confirmed: true,
        })
        .await
        .expect("Delete of missing class should not error");

    assert!(result.is_none());
}

#[tokio::test]
async fn test_reconnect_keeps_data() {
    let (_temp_dir, tracker) = create_test_tracker().await;

    tracker
        .add_class(&CreateClass {
            name: "Algorithms".to_string(),
            is_pinned: false,
        })
        .await
        .expect("Failed to create class");

    tracker.reconnect().await.expect("Failed to reconnect");

    let classes = tracker.get_classes().await.expect("Failed to list classes");
    assert_eq!(classes.len(), 1);
}
