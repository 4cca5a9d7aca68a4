//! Plain-text rendering of a sorted table.

use clap::ValueEnum;
use sorttable::SortState;
use tabledom::Element;
use tabledom::layout::{CELL_PADDING_PX, CHAR_WIDTH_PX, body_rows, header_cells, measure_columns, row_cells};
use tabledom::text::{pad_to_width, truncate_to_width};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Html,
    Text,
}

/// Text columns that fit in a pixel width.
fn columns_for(px: u16) -> usize {
    usize::from(px.saturating_sub(CELL_PADDING_PX) / CHAR_WIDTH_PX)
}

fn render_line(cells: &[String], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(text, &width)| pad_to_width(&truncate_to_width(text, width), width))
        .collect::<Vec<_>>()
        .join(" | ")
        .trim_end()
        .to_string()
}

/// Render the table using its current column widths. Under a fixed layout
/// text wider than its pinned column is clipped with an ellipsis.
///
/// `glyph` is the indicator text appended to the active header; it is left
/// out of the header name in the footer.
pub fn render_text(table: &Element, state: &SortState, glyph: &str) -> String {
    let widths: Vec<usize> = measure_columns(table).into_iter().map(columns_for).collect();
    let headers: Vec<String> = header_cells(table).iter().map(|th| th.text_content()).collect();

    let mut lines = vec![render_line(&headers, &widths)];
    lines.push(
        widths
            .iter()
            .map(|&w| "-".repeat(w))
            .collect::<Vec<_>>()
            .join("-+-"),
    );
    for row in body_rows(table) {
        let cells: Vec<String> = row_cells(row).map(Element::text_content).collect();
        lines.push(render_line(&cells, &widths));
    }

    if let Some(column) = state.column() {
        let name = headers
            .get(column)
            .map(|h| h.strip_suffix(glyph).unwrap_or(h.as_str()))
            .unwrap_or("");
        lines.push(String::new());
        lines.push(format!("sorted by {name} ({})", state.direction()));
    }
    lines.join("\n")
}
