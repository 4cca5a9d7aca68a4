//! Active sort column and direction.

use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Apply this direction to a base comparison result.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }
}

impl std::fmt::Display for SortDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which column is sorted and how.
///
/// Starts with no active column. Only [`crate::SortableTable`] writes it,
/// and only after a sort has been applied to the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortState {
    column: Option<usize>,
    direction: SortDirection,
}

impl SortState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn column(&self) -> Option<usize> {
        self.column
    }

    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    /// Direction a sort of `column` would use: the same column flips,
    /// any other column starts ascending.
    pub fn next_direction(&self, column: usize) -> SortDirection {
        if self.column == Some(column) {
            self.direction.toggled()
        } else {
            SortDirection::Ascending
        }
    }

    pub(crate) fn commit(&mut self, column: usize, direction: SortDirection) {
        self.column = Some(column);
        self.direction = direction;
    }
}
