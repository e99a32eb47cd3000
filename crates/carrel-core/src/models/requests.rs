//! Request types for updating models.

/// Parameters for a partial class update.
///
/// Deliberately has no counter fields: `pdf_count` and `done_count` are
/// maintained exclusively by the store alongside document mutations, so a
/// caller-supplied update cannot corrupt them.
#[derive(Debug, Default)]
pub struct UpdateClassRequest {
    pub name: Option<String>,
    pub is_pinned: Option<bool>,
}

impl UpdateClassRequest {
    /// Whether the request carries no changes at all.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.is_pinned.is_none()
    }
}

impl From<crate::params::UpdateClass> for UpdateClassRequest {
    fn from(params: crate::params::UpdateClass) -> Self {
        Self {
            name: params.name,
            is_pinned: params.is_pinned,
        }
    }
}
