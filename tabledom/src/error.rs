//! Document lookup errors.

use crate::types::Tag;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    /// No element with this id exists in the document.
    #[error("element '{id}' not found")]
    NotFound { id: String },

    /// The element exists but is not the kind the caller needs.
    #[error("element '{id}' is a <{actual}>, expected <{expected}>")]
    WrongTag {
        id: String,
        expected: Tag,
        actual: Tag,
    },

    /// The element produced no box during layout, so it cannot be clicked.
    #[error("element '{id}' has no layout box")]
    NotRendered { id: String },
}

impl DomError {
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }
}
