//! Display implementations for domain models.
//!
//! Separated from the model definitions to keep data structures and
//! presentation apart. Documents format as compact entries with status icons;
//! classes show their progress derived from the cached counters.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::models::{Class, Document, DocumentStatus};

impl fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Formats a byte count as a human-readable size.
fn human_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KiB", "MiB", "GiB"];

    let mut size = bytes as f64;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }

    if unit == 0 {
        format!("{bytes} B")
    } else {
        format!("{size:.1} {}", UNITS[unit])
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "### {}. {} ({})",
            self.id,
            self.name,
            self.status.with_icon()
        )?;
        writeln!(f)?;

        writeln!(f, "- Size: {}", human_size(self.size))?;
        writeln!(f, "- Added: {}", LocalDateTime(&self.date_added))?;
        if let Some(class_id) = self.class_id {
            writeln!(f, "- Class: {class_id}")?;
        }
        writeln!(f)?;

        Ok(())
    }
}

impl fmt::Display for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pin = if self.is_pinned { " 📌" } else { "" };

        writeln!(
            f,
            "## {} (ID: {}){pin} ({}/{})",
            self.name, self.id, self.done_count, self.pdf_count
        )?;
        writeln!(f)?;

        writeln!(f, "- Created: {}", LocalDateTime(&self.date_created))?;
        writeln!(f, "- Progress: {}%", self.progress_percent())?;
        writeln!(f)?;

        Ok(())
    }
}
