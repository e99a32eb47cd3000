//! Document CRUD operations and queries.

use jiff::Timestamp;
use rusqlite::{params, types::Type, OptionalExtension};

use crate::{
    error::{DatabaseResultExt, Result, TrackerError},
    models::{Document, DocumentStatus},
};

// SQL queries as const strings
const INSERT_DOCUMENT_SQL: &str = "INSERT INTO documents (name, size, last_modified, content, status, date_added, class_id) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)";
const SELECT_DOCUMENTS_SQL: &str =
    "SELECT id, name, size, last_modified, content, status, date_added, class_id FROM documents";
const SELECT_DOCUMENT_SQL: &str = "SELECT id, name, size, last_modified, content, status, date_added, class_id FROM documents WHERE id = ?1";
const SELECT_DOCUMENTS_BY_CLASS_SQL: &str = "SELECT id, name, size, last_modified, content, status, date_added, class_id FROM documents WHERE class_id = ?1";
const SELECT_DOCUMENT_STATE_SQL: &str = "SELECT status, class_id FROM documents WHERE id = ?1";
const UPDATE_DOCUMENT_STATUS_SQL: &str = "UPDATE documents SET status = ?1 WHERE id = ?2";
const DELETE_DOCUMENT_SQL: &str = "DELETE FROM documents WHERE id = ?1";

impl super::Store {
    /// Helper function to construct a Document from a database row
    fn build_document_from_row(row: &rusqlite::Row) -> rusqlite::Result<Document> {
        let status_str: String = row.get(5)?;
        let status = status_str.parse::<DocumentStatus>().map_err(|_| {
            rusqlite::Error::FromSqlConversionFailure(
                5,
                Type::Text,
                format!("Invalid status: {status_str}").into(),
            )
        })?;

        Ok(Document {
            id: row.get::<_, i64>(0)? as u64,
            name: row.get(1)?,
            size: row.get::<_, i64>(2)? as u64,
            last_modified: row.get::<_, String>(3)?.parse::<Timestamp>().map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(3, Type::Text, Box::new(e))
            })?,
            content: row.get(4)?,
            status,
            date_added: row.get::<_, String>(6)?.parse::<Timestamp>().map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(6, Type::Text, Box::new(e))
            })?,
            class_id: row.get::<_, Option<i64>>(7)?.map(|id| id as u64),
        })
    }

    /// Adds a new document. Status always starts as to-study and `date_added`
    /// is stamped here.
    ///
    /// If `class_id` is set, the target class's `pdf_count` is incremented in
    /// the same transaction. A nonexistent class is accepted: the document is
    /// inserted with a dangling weak reference and no counter is touched.
    pub fn add_document(
        &mut self,
        name: &str,
        size: u64,
        last_modified: Timestamp,
        content: &[u8],
        class_id: Option<u64>,
    ) -> Result<Document> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let now = Timestamp::now();

        tx.execute(
            INSERT_DOCUMENT_SQL,
            params![
                name,
                size as i64,
                last_modified.to_string(),
                content,
                DocumentStatus::ToStudy.as_str(),
                now.to_string(),
                class_id.map(|id| id as i64),
            ],
        )
        .db_context("Failed to insert document")?;

        let id = tx.last_insert_rowid() as u64;

        if let Some(class_id) = class_id {
            Self::apply_class_counter_delta(&tx, class_id, 1, 0);
        }

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(Document {
            id,
            name: name.into(),
            size,
            last_modified,
            content: content.to_vec(),
            status: DocumentStatus::ToStudy,
            date_added: now,
            class_id,
        })
    }

    /// Retrieves all documents in insertion order.
    pub fn get_documents(&self) -> Result<Vec<Document>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_DOCUMENTS_SQL)
            .db_context("Failed to prepare query")?;

        let documents = stmt
            .query_map([], Self::build_document_from_row)
            .db_context("Failed to query documents")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch documents")?;

        Ok(documents)
    }

    /// Retrieves all documents associated with the given class, through the
    /// class_id index.
    pub fn get_documents_for_class(&self, class_id: u64) -> Result<Vec<Document>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_DOCUMENTS_BY_CLASS_SQL)
            .db_context("Failed to prepare query")?;

        let documents = stmt
            .query_map(params![class_id as i64], Self::build_document_from_row)
            .db_context("Failed to query documents for class")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch documents for class")?;

        Ok(documents)
    }

    /// Retrieves a single document by its ID.
    pub fn get_document(&self, id: u64) -> Result<Option<Document>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_DOCUMENT_SQL)
            .db_context("Failed to prepare query")?;

        let document = stmt
            .query_row(params![id as i64], Self::build_document_from_row)
            .optional()
            .db_context("Failed to get document")?;

        Ok(document)
    }

    /// Sets a document's study status.
    ///
    /// Setting the status a document already has is a no-op: nothing is
    /// written and no counter changes, so repeated calls are idempotent. A
    /// real transition on a document with a class association adjusts that
    /// class's `done_count` in the same transaction.
    pub fn set_document_status(&mut self, id: u64, status: DocumentStatus) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let (current_status, class_id) = Self::document_state(&tx, id)?;

        if current_status == status {
            return Ok(());
        }

        tx.execute(
            UPDATE_DOCUMENT_STATUS_SQL,
            params![status.as_str(), id as i64],
        )
        .db_context("Failed to update document status")?;

        if let Some(class_id) = class_id {
            let done_delta = match status {
                DocumentStatus::Done => 1,
                DocumentStatus::ToStudy => -1,
            };
            Self::apply_class_counter_delta(&tx, class_id, 0, done_delta);
        }

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(())
    }

    /// Removes a document.
    ///
    /// If the document belonged to a class, that class's `pdf_count` (and
    /// `done_count` for a completed document) is decremented in the same
    /// transaction.
    pub fn delete_document(&mut self, id: u64) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let (status, class_id) = Self::document_state(&tx, id)?;

        tx.execute(DELETE_DOCUMENT_SQL, params![id as i64])
            .db_context("Failed to delete document")?;

        if let Some(class_id) = class_id {
            let done_delta = if status == DocumentStatus::Done { -1 } else { 0 };
            Self::apply_class_counter_delta(&tx, class_id, -1, done_delta);
        }

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(())
    }

    /// Reads the status and class association of a document inside `tx`,
    /// without pulling the content blob.
    fn document_state(
        tx: &rusqlite::Transaction<'_>,
        id: u64,
    ) -> Result<(DocumentStatus, Option<u64>)> {
        let (status_str, class_id): (String, Option<i64>) = tx
            .query_row(SELECT_DOCUMENT_STATE_SQL, params![id as i64], |row| {
                Ok((row.get(0)?, row.get(1)?))
            })
            .map_err(|e| {
                if matches!(e, rusqlite::Error::QueryReturnedNoRows) {
                    TrackerError::DocumentNotFound { id }
                } else {
                    TrackerError::database_error("Failed to query document", e)
                }
            })?;

        let status = status_str
            .parse::<DocumentStatus>()
            .map_err(|reason| TrackerError::InvalidInput {
                field: "status".into(),
                reason,
            })?;

        Ok((status, class_id.map(|id| id as u64)))
    }
}
