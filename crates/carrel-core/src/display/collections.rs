//! Collection wrapper types for displaying groups of domain objects.
//!
//! Newtype wrappers that format collections with consistent structure and
//! graceful empty-collection handling.

use std::{fmt, ops::Index};

use crate::models::{Class, Document};

/// Newtype wrapper for displaying collections of classes.
pub struct Classes(pub Vec<Class>);

impl Classes {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of classes in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get a reference to the class at the given index.
    pub fn get(&self, index: usize) -> Option<&Class> {
        self.0.get(index)
    }

    /// Get an iterator over the classes.
    pub fn iter(&self) -> std::slice::Iter<'_, Class> {
        self.0.iter()
    }

    /// Sorts pinned classes first, then by name.
    ///
    /// This is the presentation order of the class list view.
    pub fn sort_for_display(&mut self) {
        self.0
            .sort_by(|a, b| b.is_pinned.cmp(&a.is_pinned).then(a.name.cmp(&b.name)));
    }
}

impl Index<usize> for Classes {
    type Output = Class;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for Classes {
    type Item = Class;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Classes {
    type Item = &'a Class;
    type IntoIter = std::slice::Iter<'a, Class>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Classes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No classes found.")
        } else {
            for class in &self.0 {
                write!(f, "{}", class)?;
            }
            Ok(())
        }
    }
}

/// Newtype wrapper for displaying collections of documents.
pub struct Documents(pub Vec<Document>);

impl Documents {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of documents in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get a reference to the document at the given index.
    pub fn get(&self, index: usize) -> Option<&Document> {
        self.0.get(index)
    }

    /// Get an iterator over the documents.
    pub fn iter(&self) -> std::slice::Iter<'_, Document> {
        self.0.iter()
    }
}

impl Index<usize> for Documents {
    type Output = Document;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for Documents {
    type Item = Document;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Documents {
    type Item = &'a Document;
    type IntoIter = std::slice::Iter<'a, Document>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Documents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No documents found.")
        } else {
            for document in &self.0 {
                write!(f, "{}", document)?;
            }
            Ok(())
        }
    }
}
