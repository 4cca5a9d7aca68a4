//! Click-to-sort behavior for a table.
//!
//! [`SortableTable`] owns a [`TableSurface`] (anything that can report header
//! widths, hand out row handles and reorder them), pins the column widths
//! once, wires every header for sorting and then reorders rows by the
//! clicked column, toggling direction on repeated clicks.
//!
//! [`DomTable`] adapts a headless [`tabledom::Document`]; other surfaces,
//! such as a browser table, implement the same trait.

pub mod collate;
pub mod config;
pub mod dom;
pub mod engine;
pub mod error;
pub mod fixer;
pub mod key;
pub mod state;
pub mod surface;
pub mod widget;

pub use collate::{Collator, RootCollator};
pub use config::SortTableConfig;
pub use dom::DomTable;
pub use error::{Result, SortTableError};
pub use fixer::LayoutFixer;
pub use key::SortKey;
pub use state::{SortDirection, SortState};
pub use surface::TableSurface;
pub use tabledom::TableLayout;
pub use widget::SortableTable;
