//! Database schema initialization and versioned migrations.
//!
//! The schema version is tracked in `PRAGMA user_version`. Each step runs at
//! most once per database file and tolerates objects that already exist, so
//! migration is both monotonic and idempotent: a fresh file walks 0 -> 1 -> 2,
//! a version-1 file (documents only, no class association) walks 1 -> 2 in
//! place without data loss, and an up-to-date file does nothing.

use crate::error::{ConnectionResultExt, Result};

/// Current schema version written to `PRAGMA user_version`.
pub const SCHEMA_VERSION: i64 = 2;

impl super::Store {
    /// Brings the schema up to [`SCHEMA_VERSION`].
    pub(super) fn migrate(&self) -> Result<()> {
        let version: i64 = self
            .connection
            .query_row("PRAGMA user_version", [], |row| row.get(0))
            .conn_context("Failed to read schema version")?;

        if version < 1 {
            self.migrate_to_v1()?;
        }
        if version < 2 {
            self.migrate_to_v2()?;
        }

        Ok(())
    }

    /// Version 1: the documents table with status and date_added indexes.
    fn migrate_to_v1(&self) -> Result<()> {
        let schema_sql = include_str!("../../assets/schema_v1.sql");
        self.connection
            .execute_batch(schema_sql)
            .conn_context("Failed to create document schema")?;

        self.set_schema_version(1)
    }

    /// Version 2: the classes table, plus the class_id column and index on
    /// documents.
    fn migrate_to_v2(&self) -> Result<()> {
        let schema_sql = include_str!("../../assets/schema_v2.sql");
        self.connection
            .execute_batch(schema_sql)
            .conn_context("Failed to create class schema")?;

        // ALTER TABLE ADD COLUMN has no IF NOT EXISTS form, so guard on the
        // table info instead. Existing rows read back as NULL class_id.
        let has_class_id: bool = self
            .connection
            .query_row(
                "SELECT COUNT(*) FROM pragma_table_info('documents') WHERE name = 'class_id'",
                [],
                |row| row.get(0),
            )
            .map(|count: i64| count > 0)
            .unwrap_or(false);

        if !has_class_id {
            self.connection
                .execute("ALTER TABLE documents ADD COLUMN class_id INTEGER", [])
                .conn_context("Failed to add class_id column to documents table")?;
        }

        self.connection
            .execute(
                "CREATE INDEX IF NOT EXISTS idx_documents_class_id ON documents(class_id)",
                [],
            )
            .conn_context("Failed to create class_id index")?;

        self.set_schema_version(2)
    }

    fn set_schema_version(&self, version: i64) -> Result<()> {
        self.connection
            .pragma_update(None, "user_version", version)
            .conn_context("Failed to update schema version")
    }
}
