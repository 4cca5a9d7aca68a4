//! One-shot column width pinning.

use tabledom::TableLayout;

use crate::error::Result;
use crate::surface::TableSurface;

/// Freezes column widths so later row changes do not move column edges.
///
/// Natural widths only exist under auto layout, and auto layout recomputes
/// them whenever content changes. The fixer measures each header once under
/// auto layout, writes the measurement back as an explicit width and then
/// switches the table to fixed layout.
#[derive(Debug, Clone, Default)]
pub struct LayoutFixer {
    widths_set: bool,
}

impl LayoutFixer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn widths_set(&self) -> bool {
        self.widths_set
    }

    /// Pin every header's width. Returns `false` without touching the
    /// surface when widths were already pinned.
    pub fn fix_column_widths<S: TableSurface + ?Sized>(&mut self, surface: &mut S) -> Result<bool> {
        if self.widths_set {
            return Ok(false);
        }

        surface.set_table_layout(TableLayout::Auto)?;

        let mut widths = Vec::with_capacity(surface.header_count());
        for column in 0..surface.header_count() {
            let width = surface.header_width(column)?;
            surface.set_header_width(column, width)?;
            widths.push(width);
        }

        surface.set_table_layout(TableLayout::Fixed)?;
        self.widths_set = true;

        log::debug!("[fixer] pinned column widths {widths:?}");
        Ok(true)
    }
}
