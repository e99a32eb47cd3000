//! Class CRUD operations and queries.

use jiff::Timestamp;
use rusqlite::{params, types::Type, OptionalExtension};

use crate::{
    error::{DatabaseResultExt, Result, TrackerError},
    models::{Class, UpdateClassRequest},
};

// SQL queries as const strings
const INSERT_CLASS_SQL: &str = "INSERT INTO classes (name, date_created, is_pinned, pdf_count, done_count) VALUES (?1, ?2, ?3, 0, 0)";
const SELECT_CLASSES_SQL: &str =
    "SELECT id, name, date_created, is_pinned, pdf_count, done_count FROM classes";
const SELECT_CLASS_SQL: &str =
    "SELECT id, name, date_created, is_pinned, pdf_count, done_count FROM classes WHERE id = ?1";
const CHECK_CLASS_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM classes WHERE id = ?1)";
const SELECT_CLASS_FIELDS_SQL: &str = "SELECT name, is_pinned FROM classes WHERE id = ?1";
const UPDATE_CLASS_SQL: &str = "UPDATE classes SET name = ?1, is_pinned = ?2 WHERE id = ?3";
const DELETE_CLASS_DOCUMENTS_SQL: &str = "DELETE FROM documents WHERE class_id = ?1";
const DELETE_CLASS_SQL: &str = "DELETE FROM classes WHERE id = ?1";

impl super::Store {
    /// Helper function to construct a Class from a database row
    fn build_class_from_row(row: &rusqlite::Row) -> rusqlite::Result<Class> {
        Ok(Class {
            id: row.get::<_, i64>(0)? as u64,
            name: row.get(1)?,
            date_created: row.get::<_, String>(2)?.parse::<Timestamp>().map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(2, Type::Text, Box::new(e))
            })?,
            is_pinned: row.get(3)?,
            pdf_count: row.get::<_, i64>(4)? as u32,
            done_count: row.get::<_, i64>(5)? as u32,
        })
    }

    /// Creates a new class with the given name.
    ///
    /// Both progress counters start at zero regardless of any caller-side
    /// notion of counts; they only ever change alongside document mutations.
    pub fn add_class(&mut self, name: &str, is_pinned: bool) -> Result<Class> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let now = Timestamp::now();

        tx.execute(INSERT_CLASS_SQL, params![name, now.to_string(), is_pinned])
            .db_context("Failed to insert class")?;

        let id = tx.last_insert_rowid() as u64;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(Class {
            id,
            name: name.into(),
            date_created: now,
            is_pinned,
            pdf_count: 0,
            done_count: 0,
        })
    }

    /// Retrieves all classes.
    pub fn get_classes(&self) -> Result<Vec<Class>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_CLASSES_SQL)
            .db_context("Failed to prepare query")?;

        let classes = stmt
            .query_map([], Self::build_class_from_row)
            .db_context("Failed to query classes")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch classes")?;

        Ok(classes)
    }

    /// Retrieves a single class by its ID.
    pub fn get_class(&self, id: u64) -> Result<Option<Class>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_CLASS_SQL)
            .db_context("Failed to prepare query")?;

        let class = stmt
            .query_row(params![id as i64], Self::build_class_from_row)
            .optional()
            .db_context("Failed to get class")?;

        Ok(class)
    }

    /// Updates class details using a request struct.
    ///
    /// Read-modify-write merge: fields absent from the request keep their
    /// stored values. The request type carries no counter fields, so the
    /// progress counters cannot be touched from here.
    pub fn update_class(&mut self, id: u64, request: UpdateClassRequest) -> Result<()> {
        if request.is_empty() {
            return Ok(());
        }

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let (current_name, current_pinned): (String, bool) = tx
            .query_row(SELECT_CLASS_FIELDS_SQL, params![id as i64], |row| {
                Ok((row.get(0)?, row.get(1)?))
            })
            .map_err(|e| {
                if matches!(e, rusqlite::Error::QueryReturnedNoRows) {
                    TrackerError::ClassNotFound { id }
                } else {
                    TrackerError::database_error("Failed to get current class", e)
                }
            })?;

        let new_name = request.name.unwrap_or(current_name);
        let new_pinned = request.is_pinned.unwrap_or(current_pinned);

        tx.execute(UPDATE_CLASS_SQL, params![&new_name, new_pinned, id as i64])
            .db_context("Failed to update class")?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(())
    }

    /// Permanently deletes a class and every document referencing it.
    ///
    /// The cascade and the class removal happen in one transaction, so no
    /// reader can observe a partially deleted class. Returns the number of
    /// documents removed by the cascade.
    pub fn delete_class(&mut self, id: u64) -> Result<usize> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let exists: bool = tx
            .query_row(CHECK_CLASS_EXISTS_SQL, params![id as i64], |row| row.get(0))
            .db_context("Failed to check class existence")?;

        if !exists {
            return Err(TrackerError::ClassNotFound { id });
        }

        // Delete the associated documents first, through the class_id index.
        let removed = tx
            .execute(DELETE_CLASS_DOCUMENTS_SQL, params![id as i64])
            .db_context("Failed to delete class documents")?;

        tx.execute(DELETE_CLASS_SQL, params![id as i64])
            .db_context("Failed to delete class")?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(removed)
    }
}
