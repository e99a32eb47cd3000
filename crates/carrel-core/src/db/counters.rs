//! Maintenance of the denormalized per-class progress counters.
//!
//! `pdf_count` and `done_count` on a class are caches over the document set;
//! truth lives in the documents table. Every document mutation that touches a
//! class association routes its counter adjustment through the single helper
//! here, inside the same transaction as the primary mutation, so the
//! floor-at-zero delta logic exists exactly once.

use log::{debug, warn};
use rusqlite::{params, Transaction};

const SELECT_CLASS_COUNTS_SQL: &str = "SELECT pdf_count, done_count FROM classes WHERE id = ?1";
const UPDATE_CLASS_COUNTS_SQL: &str =
    "UPDATE classes SET pdf_count = ?1, done_count = ?2 WHERE id = ?3";

impl super::Store {
    /// Applies a bounded counter delta to a class within `tx`.
    ///
    /// Counters are floored at zero and `done_count` is clamped to
    /// `pdf_count`, so a stale or drifted counter can never go negative or
    /// invert the invariant.
    ///
    /// A missing class is not an error: the document side of the mutation
    /// stands and the dangling reference is accepted. Likewise, a storage
    /// failure inside counter maintenance is logged and swallowed rather than
    /// aborting the primary mutation; a stale counter is preferred over
    /// failing a user-visible action. This is a known eventual-consistency
    /// gap, exercised by tests.
    pub(super) fn apply_class_counter_delta(
        tx: &Transaction<'_>,
        class_id: u64,
        pdf_delta: i64,
        done_delta: i64,
    ) {
        let counts: Option<(i64, i64)> = match tx
            .query_row(SELECT_CLASS_COUNTS_SQL, params![class_id as i64], |row| {
                Ok((row.get(0)?, row.get(1)?))
            }) {
            Ok(counts) => Some(counts),
            Err(rusqlite::Error::QueryReturnedNoRows) => None,
            Err(e) => {
                warn!("Failed to read counters for class {class_id}: {e}");
                return;
            }
        };

        let Some((pdf_count, done_count)) = counts else {
            debug!("Class {class_id} not found, skipping counter update");
            return;
        };

        let new_pdf = (pdf_count + pdf_delta).max(0);
        let new_done = (done_count + done_delta).max(0).min(new_pdf);

        if let Err(e) = tx.execute(
            UPDATE_CLASS_COUNTS_SQL,
            params![new_pdf, new_done, class_id as i64],
        ) {
            warn!("Failed to update counters for class {class_id}: {e}");
        }
    }
}
