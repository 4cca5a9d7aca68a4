//! Error types

use tabledom::DomError;

/// Errors raised while attaching to or sorting a table.
///
/// None of these leave the sort state changed: state is committed only after
/// a sort completes.
#[derive(Debug, thiserror::Error)]
pub enum SortTableError {
    /// The table, its header cells or its body could not be found.
    #[error("sort target missing: {what}")]
    MissingTarget { what: String },

    /// A column outside the header range was requested.
    #[error("column {index} out of range: table has {columns} columns")]
    InvalidColumn { index: usize, columns: usize },

    /// A data row has fewer cells than the column being sorted.
    #[error("row {row} has no cell at column {column}")]
    RaggedRow { row: usize, column: usize },

    /// The surface refused an operation.
    #[error("table surface error: {0}")]
    Surface(String),

    #[error(transparent)]
    Dom(#[from] DomError),

    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

impl SortTableError {
    pub fn missing_target(what: impl Into<String>) -> Self {
        Self::MissingTarget { what: what.into() }
    }

    pub fn surface(message: impl Into<String>) -> Self {
        Self::Surface(message.into())
    }
}

pub type Result<T> = std::result::Result<T, SortTableError>;
