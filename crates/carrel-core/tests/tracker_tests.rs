mod common;

use carrel_core::{
    params::{AddDocument, CreateClass, DeleteClass, Id, SetDocumentStatus},
    DocumentStatus,
};
use common::create_test_tracker;
use jiff::Timestamp;

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
async fn test_add_document_and_list() {
    let (_temp_dir, tracker) = create_test_tracker().await;

    tracker
        .add_document(&sample_document("one.pdf", None))
        .await
        .expect("Failed to add document");
    tracker
        .add_document(&sample_document("two.pdf", None))
        .await
        .expect("Failed to add document");

    let documents = tracker.get_documents().await.expect("Failed to list documents");
    assert_eq!(documents.len(), 2);
    assert_eq!(documents[0].name, "one.pdf");
    assert_eq!(documents[1].name, "two.pdf");
}

#[tokio::test]
async fn test_class_scoped_listing_uses_association() {
    let (_temp_dir, tracker) = create_test_tracker().await;

    let class = tracker
        .add_class(&CreateClass {
            name: "Algorithms".to_string(),
            is_pinned: false,
        })
        .await
        .expect("Failed to create class");

    tracker
        .add_document(&sample_document("in.pdf", Some(class.id)))
        .await
        .expect("Failed to add document");
    tracker
        .add_document(&sample_document("out.pdf", None))
        .await
        .expect("Failed to add document");

    let scoped = tracker
        .get_documents_for_class(&Id { id: class.id })
        .await
        .expect("Failed to list class documents");
    assert_eq!(scoped.len(), 1);
    assert_eq!(scoped[0].name, "in.pdf");
}

#[tokio::test]
async fn test_end_to_end_study_flow() {
    let (_temp_dir, tracker) = create_test_tracker().await;

    // add class "Algorithms" -> counters start at zero
    let class = tracker
        .add_class(&CreateClass {
            name: "Algorithms".to_string(),
            is_pinned: false,
        })
        .await
        .expect("Failed to create class");
    assert_eq!((class.pdf_count, class.done_count), (0, 0));

    // add "notes.pdf" into the class -> pdf_count 1, done_count 0
    let document = tracker
        .add_document(&sample_document("notes.pdf", Some(class.id)))
        .await
        .expect("Failed to add document");

    let state = tracker.get_class(&Id { id: class.id }).await.unwrap().unwrap();
    assert_eq!((state.pdf_count, state.done_count), (1, 0));

    // mark done -> done_count 1
    tracker
        .set_document_status(&SetDocumentStatus {
            id: document.id,
            status: "done".to_string(),
        })
        .await
        .expect("Failed to set status");

    let state = tracker.get_class(&Id { id: class.id }).await.unwrap().unwrap();
    assert_eq!(state.done_count, 1);

    let fetched = tracker
        .get_document(&Id { id: document.id })
        .await
        .unwrap()
        .unwrap();
    assert_eq!(fetched.status, DocumentStatus::Done);

    // delete the document -> both counters back to zero
    tracker
        .delete_document(&Id { id: document.id })
        .await
        .expect("Failed to delete document");

    let state = tracker.get_class(&Id { id: class.id }).await.unwrap().unwrap();
    assert_eq!((state.pdf_count, state.done_count), (0, 0));
}

#[tokio::test]
async fn test_cascade_delete_through_tracker() {
    let (_temp_dir, tracker) = create_test_tracker().await;

    let class = tracker
        .add_class(&CreateClass {
            name: "Algorithms".to_string(),
            is_pinned: false,
        })
        .await
        .expect("Failed to create class");

    for name in ["a.pdf", "b.pdf", "c.pdf"] {
        tracker
            .add_document(&sample_document(name, Some(class.id)))
            .await
            .expect("Failed to add document");
    }

    let (_, removed) = tracker
        .delete_class(&DeleteClass {
            id: class.id,
            confirmed: true,
        })
        .await
        .expect("Failed to delete class")
        .expect("Class should have existed");
    assert_eq!(removed, 3);

    // Nothing scoped to the class remains, and the full listing is clean too.
    let scoped = tracker
        .get_documents_for_class(&Id { id: class.id })
        .await
        .expect("Failed to list class documents");
    assert!(scoped.is_empty());

    let all = tracker.get_documents().await.expect("Failed to list documents");
    assert!(all.iter().all(|d| d.class_id != Some(class.id)));
}
