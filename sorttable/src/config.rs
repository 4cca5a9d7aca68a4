//! Class names and startup behavior.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::state::SortDirection;

/// Widget configuration.
///
/// Every field has a default, so a partial JSON object such as
/// `{"highlight_class": "active"}` is a valid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SortTableConfig {
    /// Added to every header once it is wired for clicks.
    pub sortable_class: String,
    /// Added to the active header while sorted ascending.
    pub ascending_class: String,
    /// Added to the active header while sorted descending.
    pub descending_class: String,
    /// Added to the active header in either direction.
    pub highlight_class: String,
    /// Class of the glyph element appended to the active header.
    pub indicator_class: String,
    /// Text of the glyph element. The same glyph is used for both directions.
    pub indicator_glyph: String,
    /// Column sorted once after wiring. `None` leaves the rows untouched.
    pub initial_column: Option<usize>,
}

impl Default for SortTableConfig {
    fn default() -> Self {
        Self {
            sortable_class: "sortable-th".to_string(),
            ascending_class: "th-sorted-asc".to_string(),
            descending_class: "th-sorted-desc".to_string(),
            highlight_class: "bg-indigo-100".to_string(),
            indicator_class: "sort-indicator".to_string(),
            indicator_glyph: "\u{25BC}".to_string(),
            initial_column: Some(0),
        }
    }
}

impl SortTableConfig {
    /// Parse a JSON object, filling missing fields with defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn direction_class(&self, direction: SortDirection) -> &str {
        match direction {
            SortDirection::Ascending => &self.ascending_class,
            SortDirection::Descending => &self.descending_class,
        }
    }

    pub fn initial_column(mut self, column: Option<usize>) -> Self {
        self.initial_column = column;
        self
    }
}
