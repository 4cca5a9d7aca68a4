//! [`TableSurface`] over a headless [`tabledom::Document`].

use tabledom::element::{find_element, query_tag, query_tag_mut};
use tabledom::layout::{body_rows, header_cells, measure_columns, row_cells};
use tabledom::{Document, Element, Event, MouseButton, TableLayout, Tag};

use crate::collate::Collator;
use crate::error::{Result, SortTableError};
use crate::state::SortDirection;
use crate::surface::TableSurface;
use crate::widget::SortableTable;

/// `data-*` key holding the column index bound to a header.
pub const COLUMN_DATA_KEY: &str = "sort-column";

/// A table inside a [`Document`], addressed by element id.
///
/// Row handles are positions in the body at the time of
/// [`TableSurface::rows`]; [`TableSurface::replace_rows`] moves the existing
/// row elements into the new order, so ids and data survive.
#[derive(Debug, Clone)]
pub struct DomTable {
    document: Document,
    table_id: String,
}

impl DomTable {
    /// Bind to the table with `table_id`, checking that it has header cells
    /// and a body.
    pub fn new(document: Document, table_id: impl Into<String>) -> Result<Self> {
        let table_id = table_id.into();
        let table = document
            .element_with_tag(&table_id, Tag::Table)
            .map_err(|err| SortTableError::missing_target(err.to_string()))?;

        if header_cells(table).is_empty() {
            return Err(SortTableError::missing_target(format!(
                "table '{table_id}' has no header cells"
            )));
        }
        if query_tag(table, Tag::TBody).is_none() {
            return Err(SortTableError::missing_target(format!(
                "table '{table_id}' has no body"
            )));
        }

        Ok(Self { document, table_id })
    }

    pub fn table_id(&self) -> &str {
        &self.table_id
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    pub fn into_document(self) -> Document {
        self.document
    }

    pub fn table(&self) -> Result<&Element> {
        Ok(self.document.element_with_tag(&self.table_id, Tag::Table)?)
    }

    fn table_mut(&mut self) -> Result<&mut Element> {
        let id = self.table_id.clone();
        self.document
            .get_element_by_id_mut(&id)
            .ok_or_else(|| tabledom::DomError::not_found(id).into())
    }

    fn header(&self, column: usize) -> Result<&Element> {
        let headers = header_cells(self.table()?);
        let columns = headers.len();
        headers
            .into_iter()
            .nth(column)
            .ok_or(SortTableError::InvalidColumn {
                index: column,
                columns,
            })
    }

    fn header_mut(&mut self, column: usize) -> Result<&mut Element> {
        let columns = self.header_count();
        let invalid = SortTableError::InvalidColumn {
            index: column,
            columns,
        };
        let Some(head) = query_tag_mut(self.table_mut()?, Tag::THead) else {
            return Err(invalid);
        };
        let Some(row) = head.child_elements_mut().iter_mut().find(|e| e.tag == Tag::Tr) else {
            return Err(invalid);
        };
        row.child_elements_mut()
            .iter_mut()
            .filter(|e| e.tag == Tag::Th)
            .nth(column)
            .ok_or(invalid)
    }

    fn body_mut(&mut self) -> Result<&mut Element> {
        let table_id = self.table_id.clone();
        query_tag_mut(self.table_mut()?, Tag::TBody)
            .ok_or_else(|| SortTableError::missing_target(format!("table '{table_id}' has no body")))
    }

    /// Id of the header element for `column`.
    pub fn header_id(&self, column: usize) -> Result<String> {
        Ok(self.header(column)?.id.clone())
    }

    /// Column bound to the element `id`, if it is one of this table's wired
    /// headers.
    pub fn bound_column(&self, id: &str) -> Option<usize> {
        let table = self.table().ok()?;
        let element = find_element(table, id)?;
        if element.tag != Tag::Th {
            return None;
        }
        element.get_data(COLUMN_DATA_KEY)?.parse().ok()
    }

    /// Rendered widths of all columns under the current layout.
    pub fn column_widths(&self) -> Result<Vec<u16>> {
        Ok(measure_columns(self.table()?))
    }

    /// Column `column` of every row, in display order.
    pub fn column_texts(&self, column: usize) -> Result<Vec<String>> {
        Ok(body_rows(self.table()?)
            .into_iter()
            .map(|row| {
                row_cells(row)
                    .nth(column)
                    .map(Element::text_content)
                    .unwrap_or_default()
            })
            .collect())
    }
}

fn is_permutation(order: &[usize], len: usize) -> bool {
    if order.len() != len {
        return false;
    }
    let mut seen = vec![false; len];
    for &index in order {
        match seen.get_mut(index) {
            Some(slot) if !*slot => *slot = true,
            _ => return false,
        }
    }
    true
}

impl TableSurface for DomTable {
    type Row = usize;

    fn header_count(&self) -> usize {
        self.table().map(|t| header_cells(t).len()).unwrap_or(0)
    }

    fn set_table_layout(&mut self, layout: TableLayout) -> Result<()> {
        self.table_mut()?.style.table_layout = layout;
        Ok(())
    }

    fn header_width(&self, column: usize) -> Result<u16> {
        let widths = self.column_widths()?;
        widths
            .get(column)
            .copied()
            .ok_or(SortTableError::InvalidColumn {
                index: column,
                columns: widths.len(),
            })
    }

    fn set_header_width(&mut self, column: usize, px: u16) -> Result<()> {
        self.header_mut(column)?.style.width = Some(px);
        Ok(())
    }

    fn add_header_class(&mut self, column: usize, class: &str) -> Result<()> {
        self.header_mut(column)?.add_class(class);
        Ok(())
    }

    fn remove_header_class(&mut self, column: usize, class: &str) -> Result<()> {
        self.header_mut(column)?.remove_class(class);
        Ok(())
    }

    fn remove_indicator(&mut self, column: usize, class: &str) -> Result<()> {
        self.header_mut(column)?.remove_descendants_with_class(class);
        Ok(())
    }

    fn append_indicator(&mut self, column: usize, class: &str, glyph: &str) -> Result<()> {
        self.header_mut(column)?
            .append_child(Element::span(glyph).class(class));
        Ok(())
    }

    fn bind_header(&mut self, column: usize) -> Result<()> {
        let header = self.header_mut(column)?;
        header.clickable = true;
        header
            .data
            .insert(COLUMN_DATA_KEY.to_string(), column.to_string());
        Ok(())
    }

    fn rows(&self) -> Result<Vec<usize>> {
        Ok((0..body_rows(self.table()?).len()).collect())
    }

    fn cell_text(&self, row: &usize, column: usize) -> Result<Option<String>> {
        let rows = body_rows(self.table()?);
        let element = rows
            .get(*row)
            .ok_or_else(|| SortTableError::surface(format!("no row at position {row}")))?;
        Ok(row_cells(element).nth(column).map(Element::text_content))
    }

    fn cell_texts(&self, rows: &[usize], column: usize) -> Result<Vec<Option<String>>> {
        let elements = body_rows(self.table()?);
        rows.iter()
            .map(|&row| {
                let element = elements.get(row).ok_or_else(|| {
                    SortTableError::surface(format!("no row at position {row}"))
                })?;
                Ok(row_cells(element).nth(column).map(Element::text_content))
            })
            .collect()
    }

    fn replace_rows(&mut self, order: Vec<usize>) -> Result<()> {
        let body = self.body_mut()?;
        let (rows, others): (Vec<Element>, Vec<Element>) = body
            .take_children()
            .into_iter()
            .partition(|e| e.tag == Tag::Tr);

        if !is_permutation(&order, rows.len()) {
            let count = rows.len();
            let mut restored = rows;
            restored.extend(others);
            body.set_children(restored);
            return Err(SortTableError::surface(format!(
                "row order {order:?} is not a permutation of {count} rows"
            )));
        }

        let mut slots: Vec<Option<Element>> = rows.into_iter().map(Some).collect();
        let mut sorted: Vec<Element> = order
            .iter()
            .filter_map(|&index| slots[index].take())
            .collect();
        sorted.extend(others);
        body.set_children(sorted);
        Ok(())
    }
}

impl<C: Collator> SortableTable<DomTable, C> {
    /// Route a document event to the sort bound on its target header.
    ///
    /// Returns `Ok(None)` for events this table does not handle: non-left
    /// clicks, clicks that hit nothing and clicks on other elements.
    pub fn handle_event(&mut self, event: &Event) -> Result<Option<SortDirection>> {
        let Event::Click {
            target: Some(target),
            button: MouseButton::Left,
            ..
        } = event
        else {
            return Ok(None);
        };
        let Some(column) = self.surface().bound_column(target) else {
            return Ok(None);
        };
        self.sort_by(column).map(Some)
    }

    /// Click the center of a header through the document's hit testing.
    pub fn click_header(&mut self, column: usize) -> Result<Option<SortDirection>> {
        let id = self.surface().header_id(column)?;
        let event = self.surface_mut().document_mut().click_element(&id)?;
        self.handle_event(&event)
    }
}
