//! The sortable table widget.

use crate::collate::{Collator, RootCollator};
use crate::config::SortTableConfig;
use crate::engine;
use crate::error::{Result, SortTableError};
use crate::fixer::LayoutFixer;
use crate::state::{SortDirection, SortState};
use crate::surface::TableSurface;

/// A table wired for click-to-sort.
///
/// Each instance owns its surface and its own sort state, so several tables
/// on one page sort independently.
///
/// # Examples
///
/// ```ignore
/// let table = DomTable::new(document, "prices")?;
/// let mut widget = SortableTable::attach(table, SortTableConfig::default())?;
/// widget.sort_by(1)?; // ascending, or descending if column 1 was active
/// ```
#[derive(Debug)]
pub struct SortableTable<S: TableSurface, C: Collator = RootCollator> {
    surface: S,
    config: SortTableConfig,
    state: SortState,
    fixer: LayoutFixer,
    collator: C,
}

impl<S: TableSurface> SortableTable<S> {
    /// Wrap a surface without touching it. Call [`SortableTable::initialize`]
    /// once the table is rendered.
    pub fn new(surface: S, config: SortTableConfig) -> Self {
        Self::with_collator(surface, config, RootCollator)
    }

    /// Wrap a surface and run the full startup sequence.
    pub fn attach(surface: S, config: SortTableConfig) -> Result<Self> {
        let mut table = Self::new(surface, config);
        table.initialize()?;
        Ok(table)
    }
}

impl<S: TableSurface, C: Collator> SortableTable<S, C> {
    pub fn with_collator(surface: S, config: SortTableConfig, collator: C) -> Self {
        Self {
            surface,
            config,
            state: SortState::new(),
            fixer: LayoutFixer::new(),
            collator,
        }
    }

    /// Pin widths, wire headers, then apply the configured initial sort.
    pub fn initialize(&mut self) -> Result<()> {
        self.wire()?;
        if let Some(column) = self.config.initial_column {
            self.sort_by(column)?;
        }
        Ok(())
    }

    /// Pin widths and wire headers, without sorting.
    ///
    /// Hosts that attach their own click listeners call this, attach, then
    /// sort the initial column themselves.
    pub fn wire(&mut self) -> Result<()> {
        let columns = self.surface.header_count();
        if columns == 0 {
            return Err(SortTableError::missing_target("table has no header cells"));
        }

        self.fixer.fix_column_widths(&mut self.surface)?;

        for column in 0..columns {
            self.surface
                .add_header_class(column, &self.config.sortable_class)?;
            self.surface.bind_header(column)?;
        }

        log::debug!("[sorttable] wired {columns} headers");
        Ok(())
    }

    /// Sort by `column`, toggling direction if it is already the active one.
    ///
    /// On error the sort state is left as it was. An out-of-range column or
    /// a short row is caught before the table is touched; a surface that
    /// fails while applying the sort may be left with its rows reordered.
    pub fn sort_by(&mut self, column: usize) -> Result<SortDirection> {
        let result = engine::sort_table(
            &mut self.surface,
            &self.state,
            column,
            &self.config,
            &self.collator,
        );
        match result {
            Ok(direction) => {
                self.state.commit(column, direction);
                Ok(direction)
            }
            Err(err) => {
                log::warn!("[sorttable] sort by column {column} rejected: {err}");
                Err(err)
            }
        }
    }

    pub fn sort_state(&self) -> &SortState {
        &self.state
    }

    pub fn config(&self) -> &SortTableConfig {
        &self.config
    }

    pub fn widths_pinned(&self) -> bool {
        self.fixer.widths_set()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }
}
