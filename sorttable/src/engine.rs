//! Row ordering and header indicators.

use crate::collate::Collator;
use crate::config::SortTableConfig;
use crate::error::{Result, SortTableError};
use crate::key::{SortKey, compare_keys};
use crate::state::{SortDirection, SortState};
use crate::surface::TableSurface;

/// Stable-sort `(key, row)` pairs by key in `direction`.
///
/// Rows with equal keys keep their relative order.
pub fn order_rows<R, C: Collator + ?Sized>(
    keyed: &mut [(SortKey, R)],
    direction: SortDirection,
    collator: &C,
) {
    keyed.sort_by(|(a, _), (b, _)| direction.apply(compare_keys(a, b, collator)));
}

/// Sort the surface's rows by `column` and mark the header.
///
/// The direction comes from `state`, which is left untouched: the caller
/// commits the returned direction once this succeeds. Every row is read and
/// classified before anything on the surface changes, so a short row aborts
/// the sort with the table as it was. Rows are replaced before the header
/// indicators, so a surface error from the indicator update leaves the new
/// row order in place.
pub fn sort_table<S, C>(
    surface: &mut S,
    state: &SortState,
    column: usize,
    config: &SortTableConfig,
    collator: &C,
) -> Result<SortDirection>
where
    S: TableSurface + ?Sized,
    C: Collator + ?Sized,
{
    let columns = surface.header_count();
    if column >= columns {
        return Err(SortTableError::InvalidColumn {
            index: column,
            columns,
        });
    }

    let direction = state.next_direction(column);

    let rows = surface.rows()?;
    let texts = surface.cell_texts(&rows, column)?;
    if texts.len() != rows.len() {
        return Err(SortTableError::surface(format!(
            "{} cell texts for {} rows",
            texts.len(),
            rows.len()
        )));
    }
    let mut keyed = Vec::with_capacity(rows.len());
    for (index, (row, text)) in rows.into_iter().zip(texts).enumerate() {
        let text = text.ok_or(SortTableError::RaggedRow { row: index, column })?;
        let key = SortKey::classify(&text);
        log::trace!("[sort] row {index}: {text:?} -> {key:?}");
        keyed.push((key, row));
    }

    order_rows(&mut keyed, direction, collator);

    let row_count = keyed.len();
    surface.replace_rows(keyed.into_iter().map(|(_, row)| row).collect())?;
    update_indicators(surface, column, direction, config)?;

    log::debug!("[sort] column {column} {direction}: {row_count} rows");
    Ok(direction)
}

/// Clear indicators from every header, then mark `column`.
///
/// The glyph is the same for both directions; only the class differs.
pub fn update_indicators<S: TableSurface + ?Sized>(
    surface: &mut S,
    column: usize,
    direction: SortDirection,
    config: &SortTableConfig,
) -> Result<()> {
    for header in 0..surface.header_count() {
        surface.remove_header_class(header, &config.ascending_class)?;
        surface.remove_header_class(header, &config.descending_class)?;
        surface.remove_header_class(header, &config.highlight_class)?;
        surface.remove_indicator(header, &config.indicator_class)?;
    }

    surface.add_header_class(column, config.direction_class(direction))?;
    surface.add_header_class(column, &config.highlight_class)?;
    surface.append_indicator(column, &config.indicator_class, &config.indicator_glyph)?;
    Ok(())
}
