//! The seam between the sorting logic and whatever renders the table.

use tabledom::TableLayout;

use crate::error::Result;

/// A table the widget can measure, decorate and reorder.
///
/// Column arguments are header indices. Implementations reject indices past
/// [`TableSurface::header_count`] with [`crate::SortTableError::InvalidColumn`].
pub trait TableSurface {
    /// Handle to one data row. Reordering moves handles; rows themselves are
    /// never recreated, so any per-row state survives a sort.
    type Row;

    fn header_count(&self) -> usize;

    fn set_table_layout(&mut self, layout: TableLayout) -> Result<()>;

    /// Rendered pixel width of a header cell under the current layout.
    fn header_width(&self, column: usize) -> Result<u16>;

    /// Pin a header cell to an explicit pixel width.
    fn set_header_width(&mut self, column: usize, px: u16) -> Result<()>;

    fn add_header_class(&mut self, column: usize, class: &str) -> Result<()>;

    fn remove_header_class(&mut self, column: usize, class: &str) -> Result<()>;

    /// Remove any indicator element carrying `class` from a header.
    fn remove_indicator(&mut self, column: usize, class: &str) -> Result<()>;

    /// Append one indicator element carrying `class` with text `glyph`.
    fn append_indicator(&mut self, column: usize, class: &str, glyph: &str) -> Result<()>;

    /// Make a header clickable, recording `column` on it for later dispatch.
    fn bind_header(&mut self, column: usize) -> Result<()>;

    /// Snapshot of the current rows in display order. Reordering the
    /// returned vector does not touch the table.
    fn rows(&self) -> Result<Vec<Self::Row>>;

    /// Text of the cell at `column`, or `None` when the row is too short.
    fn cell_text(&self, row: &Self::Row, column: usize) -> Result<Option<String>>;

    /// Text of the cell at `column` for each of `rows`, in the same order.
    ///
    /// The default asks [`TableSurface::cell_text`] once per row; surfaces
    /// whose row lookup is not constant time override it with a single pass.
    fn cell_texts(&self, rows: &[Self::Row], column: usize) -> Result<Vec<Option<String>>> {
        rows.iter().map(|row| self.cell_text(row, column)).collect()
    }

    /// Replace the displayed rows with `rows`, in order, as one update.
    fn replace_rows(&mut self, rows: Vec<Self::Row>) -> Result<()>;
}
