#![allow(dead_code)]

use std::cell::Cell;

use sorttable::{DomTable, Result, SortTableError, TableLayout, TableSurface};
use tabledom::{Document, Element};

/// Build a table element whose rows have ids `{id}-r{index}`.
pub fn build_table(id: &str, headers: &[&str], rows: &[Vec<&str>]) -> Element {
    Element::table()
        .id(id)
        .child(
            Element::thead().child(
                Element::tr().children(
                    headers
                        .iter()
                        .enumerate()
                        .map(|(i, text)| Element::th(*text).id(format!("{id}-h{i}"))),
                ),
            ),
        )
        .child(Element::tbody().children(rows.iter().enumerate().map(|(i, row)| {
            Element::tr()
                .id(format!("{id}-r{i}"))
                .children(row.iter().map(|text| Element::td(*text)))
        })))
}

pub fn dom_table(headers: &[&str], rows: &[Vec<&str>]) -> DomTable {
    DomTable::new(Document::new(build_table("data", headers, rows)), "data").unwrap()
}

pub fn column(table: &DomTable, index: usize) -> Vec<String> {
    table.column_texts(index).unwrap()
}

pub fn row_ids(table: &DomTable) -> Vec<String> {
    tabledom::layout::body_rows(table.table().unwrap())
        .iter()
        .map(|row| row.id.clone())
        .collect()
}

/// Headers carrying `class`, by column index.
pub fn headers_with_class(table: &DomTable, class: &str) -> Vec<usize> {
    tabledom::layout::header_cells(table.table().unwrap())
        .iter()
        .enumerate()
        .filter(|(_, th)| th.has_class(class))
        .map(|(i, _)| i)
        .collect()
}

/// Number of indicator glyph elements under each header.
pub fn indicator_counts(table: &DomTable) -> Vec<usize> {
    tabledom::layout::header_cells(table.table().unwrap())
        .iter()
        .map(|th| {
            th.child_elements()
                .iter()
                .filter(|e| e.has_class("sort-indicator"))
                .count()
        })
        .collect()
}

/// In-memory surface with scripted natural widths.
///
/// Under auto layout each indicator glyph widens its header by
/// `GLYPH_PX`, the way real content changes reflow an auto table.
#[derive(Debug, Default)]
pub struct MockSurface {
    pub layout: TableLayout,
    pub natural_widths: Vec<u16>,
    pub explicit_widths: Vec<Option<u16>>,
    pub classes: Vec<Vec<String>>,
    pub indicators: Vec<Vec<String>>,
    pub bound: Vec<bool>,
    pub rows: Vec<Vec<String>>,
    pub replace_calls: usize,
    pub cell_text_calls: Cell<usize>,
    pub cell_texts_calls: Cell<usize>,
    /// Makes `append_indicator` fail, after rows have been replaced.
    pub fail_indicators: bool,
}

pub const GLYPH_PX: u16 = 12;

impl MockSurface {
    pub fn new(natural_widths: &[u16], rows: &[Vec<&str>]) -> Self {
        let columns = natural_widths.len();
        Self {
            layout: TableLayout::Auto,
            natural_widths: natural_widths.to_vec(),
            explicit_widths: vec![None; columns],
            classes: vec![Vec::new(); columns],
            indicators: vec![Vec::new(); columns],
            bound: vec![false; columns],
            rows: rows
                .iter()
                .map(|row| row.iter().map(|s| s.to_string()).collect())
                .collect(),
            replace_calls: 0,
            cell_text_calls: Cell::new(0),
            cell_texts_calls: Cell::new(0),
            fail_indicators: false,
        }
    }

    fn check(&self, column: usize) -> Result<()> {
        if column >= self.natural_widths.len() {
            return Err(SortTableError::InvalidColumn {
                index: column,
                columns: self.natural_widths.len(),
            });
        }
        Ok(())
    }

    pub fn rendered_widths(&self) -> Vec<u16> {
        (0..self.natural_widths.len())
            .map(|i| self.header_width(i).unwrap())
            .collect()
    }
}

impl TableSurface for MockSurface {
    type Row = usize;

    fn header_count(&self) -> usize {
        self.natural_widths.len()
    }

    fn set_table_layout(&mut self, layout: TableLayout) -> Result<()> {
        self.layout = layout;
        Ok(())
    }

    fn header_width(&self, column: usize) -> Result<u16> {
        self.check(column)?;
        let content = self.natural_widths[column] + GLYPH_PX * self.indicators[column].len() as u16;
        Ok(match self.layout {
            TableLayout::Auto => content.max(self.explicit_widths[column].unwrap_or(0)),
            TableLayout::Fixed => self.explicit_widths[column].unwrap_or(content),
        })
    }

    fn set_header_width(&mut self, column: usize, px: u16) -> Result<()> {
        self.check(column)?;
        self.explicit_widths[column] = Some(px);
        Ok(())
    }

    fn add_header_class(&mut self, column: usize, class: &str) -> Result<()> {
        self.check(column)?;
        if !self.classes[column].iter().any(|c| c == class) {
            self.classes[column].push(class.to_string());
        }
        Ok(())
    }

    fn remove_header_class(&mut self, column: usize, class: &str) -> Result<()> {
        self.check(column)?;
        self.classes[column].retain(|c| c != class);
        Ok(())
    }

    fn remove_indicator(&mut self, column: usize, _class: &str) -> Result<()> {
        self.check(column)?;
        self.indicators[column].clear();
        Ok(())
    }

    fn append_indicator(&mut self, column: usize, _class: &str, glyph: &str) -> Result<()> {
        self.check(column)?;
        if self.fail_indicators {
            return Err(SortTableError::surface("indicator rejected"));
        }
        self.indicators[column].push(glyph.to_string());
        Ok(())
    }

    fn bind_header(&mut self, column: usize) -> Result<()> {
        self.check(column)?;
        self.bound[column] = true;
        Ok(())
    }

    fn rows(&self) -> Result<Vec<usize>> {
        Ok((0..self.rows.len()).collect())
    }

    fn cell_text(&self, row: &usize, column: usize) -> Result<Option<String>> {
        self.cell_text_calls.set(self.cell_text_calls.get() + 1);
        let cells = self
            .rows
            .get(*row)
            .ok_or_else(|| SortTableError::surface(format!("no row {row}")))?;
        Ok(cells.get(column).cloned())
    }

    fn cell_texts(&self, rows: &[usize], column: usize) -> Result<Vec<Option<String>>> {
        self.cell_texts_calls.set(self.cell_texts_calls.get() + 1);
        rows.iter()
            .map(|&row| {
                let cells = self
                    .rows
                    .get(row)
                    .ok_or_else(|| SortTableError::surface(format!("no row {row}")))?;
                Ok(cells.get(column).cloned())
            })
            .collect()
    }

    fn replace_rows(&mut self, rows: Vec<usize>) -> Result<()> {
        self.rows = rows.iter().map(|&i| self.rows[i].clone()).collect();
        self.replace_calls += 1;
        Ok(())
    }
}
