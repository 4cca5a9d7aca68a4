//! Table box layout.
//!
//! Widths are derived from text: every display column of text costs
//! [`CHAR_WIDTH_PX`] pixels and every cell adds [`CELL_PADDING_PX`]. Under
//! [`TableLayout::Auto`] a column is as wide as its widest cell, so changing
//! cell content moves column edges. Under [`TableLayout::Fixed`] a column is
//! as wide as its header's explicit width and content no longer matters.

mod rect;

use std::collections::HashMap;

pub use rect::Rect;

use crate::element::{Element, query_tag};
use crate::text::display_width;
use crate::types::{TableLayout, Tag};

pub type LayoutResult = HashMap<String, Rect>;

pub const CHAR_WIDTH_PX: u16 = 8;
pub const CELL_PADDING_PX: u16 = 16;
pub const ROW_HEIGHT_PX: u16 = 24;

/// Width a cell wants for its content, ignoring any explicit width.
pub fn natural_width(cell: &Element) -> u16 {
    let columns = display_width(&cell.text_content());
    let px = columns
        .saturating_mul(CHAR_WIDTH_PX as usize)
        .saturating_add(CELL_PADDING_PX as usize);
    u16::try_from(px).unwrap_or(u16::MAX)
}

/// Header cells of the first header row, in column order.
pub fn header_cells(table: &Element) -> Vec<&Element> {
    query_tag(table, Tag::THead)
        .and_then(|head| head.child_elements().iter().find(|e| e.tag == Tag::Tr))
        .map(|row| row.child_elements().iter().filter(|e| e.tag == Tag::Th).collect())
        .unwrap_or_default()
}

/// Data rows of the first body section, in display order.
pub fn body_rows(table: &Element) -> Vec<&Element> {
    query_tag(table, Tag::TBody)
        .map(|body| body.child_elements().iter().filter(|e| e.tag == Tag::Tr).collect())
        .unwrap_or_default()
}

/// Cells of a row, skipping any non-cell children.
pub fn row_cells(row: &Element) -> impl Iterator<Item = &Element> {
    row.child_elements().iter().filter(|e| e.tag.is_cell())
}

/// Rendered width of every column, in header order.
pub fn measure_columns(table: &Element) -> Vec<u16> {
    let headers = header_cells(table);

    match table.style.table_layout {
        TableLayout::Fixed => headers
            .iter()
            .map(|th| th.style.width.unwrap_or_else(|| natural_width(th)))
            .collect(),
        TableLayout::Auto => {
            // An explicit width acts as a minimum under auto layout.
            let mut widths: Vec<u16> = headers
                .iter()
                .map(|th| natural_width(th).max(th.style.width.unwrap_or(0)))
                .collect();
            for row in body_rows(table) {
                for (i, cell) in row_cells(row).enumerate() {
                    if let Some(width) = widths.get_mut(i) {
                        *width = (*width).max(natural_width(cell));
                    }
                }
            }
            widths
        }
    }
}

/// Compute boxes for every table, section, row and cell under `root`.
pub fn layout(root: &Element) -> LayoutResult {
    let mut result = LayoutResult::new();
    layout_element(root, 0, &mut result);
    result
}

/// Lays out `element` starting at `y` and returns its height.
fn layout_element(element: &Element, y: u16, result: &mut LayoutResult) -> u16 {
    if element.tag == Tag::Table {
        return layout_table(element, y, result);
    }

    let mut height: u16 = 0;
    let mut width: u16 = 0;
    for child in element.child_elements() {
        if child.tag == Tag::Text {
            continue;
        }
        let child_height = layout_element(child, y.saturating_add(height), result);
        if let Some(rect) = result.get(&child.id) {
            width = width.max(rect.width);
        }
        height = height.saturating_add(child_height);
    }

    result.insert(element.id.clone(), Rect::new(0, y, width, height));
    height
}

fn layout_table(table: &Element, y: u16, result: &mut LayoutResult) -> u16 {
    let widths = measure_columns(table);
    let mut positions = Vec::with_capacity(widths.len());
    let mut x: u16 = 0;
    for width in &widths {
        positions.push(x);
        x = x.saturating_add(*width);
    }
    let total_width = x;

    let mut row_y = y;
    for section in table.child_elements() {
        if !matches!(section.tag, Tag::THead | Tag::TBody) {
            continue;
        }
        let section_y = row_y;
        for row in section.child_elements().iter().filter(|e| e.tag == Tag::Tr) {
            result.insert(
                row.id.clone(),
                Rect::new(0, row_y, total_width, ROW_HEIGHT_PX),
            );
            for (i, cell) in row_cells(row).enumerate() {
                let (Some(&cell_x), Some(&cell_width)) = (positions.get(i), widths.get(i)) else {
                    // Cells past the header count have no column to occupy.
                    continue;
                };
                result.insert(
                    cell.id.clone(),
                    Rect::new(cell_x, row_y, cell_width, ROW_HEIGHT_PX),
                );
            }
            row_y = row_y.saturating_add(ROW_HEIGHT_PX);
        }
        result.insert(
            section.id.clone(),
            Rect::new(0, section_y, total_width, row_y - section_y),
        );
    }

    let height = row_y - y;
    result.insert(table.id.clone(), Rect::new(0, y, total_width, height));
    log::trace!(
        "[layout] table {} ({:?}): columns={:?} height={}",
        table.id,
        table.style.table_layout,
        widths,
        height
    );
    height
}
