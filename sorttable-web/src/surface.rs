//! [`TableSurface`] over a live `<table>` element.

use sorttable::{Result, SortTableError, TableLayout, TableSurface};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, HtmlCollection, HtmlElement, HtmlTableElement, HtmlTableRowElement,
    HtmlTableSectionElement,
};

use crate::options::px_from_client_width;

/// Attribute recording the column a header was bound to.
pub const COLUMN_ATTRIBUTE: &str = "data-sort-column";

pub(crate) fn js_error(err: JsValue) -> SortTableError {
    SortTableError::surface(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

fn collect<T: JsCast>(collection: &HtmlCollection) -> Vec<T> {
    (0..collection.length())
        .filter_map(|i| collection.item(i))
        .filter_map(|element| element.dyn_into::<T>().ok())
        .collect()
}

/// A `<table>` with a `<thead>` header row and a `<tbody>`.
///
/// Rows are handed out as the row elements themselves, so reordering moves
/// the existing nodes along with their listeners and attributes.
#[derive(Debug, Clone)]
pub struct WebTable {
    document: Document,
    table: HtmlTableElement,
}

impl WebTable {
    /// Look up the table by id in `document`.
    pub fn from_id(document: Document, table_id: &str) -> Result<Self> {
        let table = document
            .get_element_by_id(table_id)
            .ok_or_else(|| SortTableError::missing_target(format!("no element '{table_id}'")))?
            .dyn_into::<HtmlTableElement>()
            .map_err(|_| SortTableError::missing_target(format!("'{table_id}' is not a table")))?;
        let surface = Self { document, table };

        if surface.header_elements().is_empty() {
            return Err(SortTableError::missing_target(format!(
                "table '{table_id}' has no header cells"
            )));
        }
        surface.body()?;
        Ok(surface)
    }

    pub fn table(&self) -> &HtmlTableElement {
        &self.table
    }

    /// Header cells of the first header row, in column order.
    pub fn header_elements(&self) -> Vec<HtmlElement> {
        self.table
            .t_head()
            .and_then(|head| head.rows().item(0))
            .and_then(|row| row.dyn_into::<HtmlTableRowElement>().ok())
            .map(|row| collect(&row.cells()))
            .unwrap_or_default()
    }

    fn header(&self, column: usize) -> Result<HtmlElement> {
        let mut headers = self.header_elements();
        let columns = headers.len();
        if column >= columns {
            return Err(SortTableError::InvalidColumn {
                index: column,
                columns,
            });
        }
        Ok(headers.swap_remove(column))
    }

    fn body(&self) -> Result<HtmlTableSectionElement> {
        self.table
            .t_bodies()
            .item(0)
            .and_then(|body| body.dyn_into::<HtmlTableSectionElement>().ok())
            .ok_or_else(|| SortTableError::missing_target("table has no body"))
    }
}

impl TableSurface for WebTable {
    type Row = HtmlTableRowElement;

    fn header_count(&self) -> usize {
        self.header_elements().len()
    }

    fn set_table_layout(&mut self, layout: TableLayout) -> Result<()> {
        self.table
            .style()
            .set_property("table-layout", layout.as_css())
            .map_err(js_error)
    }

    fn header_width(&self, column: usize) -> Result<u16> {
        let width = self.header(column)?.get_bounding_client_rect().width();
        Ok(px_from_client_width(width))
    }

    fn set_header_width(&mut self, column: usize, px: u16) -> Result<()> {
        self.header(column)?
            .style()
            .set_property("width", &format!("{px}px"))
            .map_err(js_error)
    }

    fn add_header_class(&mut self, column: usize, class: &str) -> Result<()> {
        self.header(column)?.class_list().add_1(class).map_err(js_error)
    }

    fn remove_header_class(&mut self, column: usize, class: &str) -> Result<()> {
        self.header(column)?
            .class_list()
            .remove_1(class)
            .map_err(js_error)
    }

    fn remove_indicator(&mut self, column: usize, class: &str) -> Result<()> {
        // The collection is live; snapshot it before removing anything.
        let indicators: Vec<web_sys::Element> =
            collect(&self.header(column)?.get_elements_by_class_name(class));
        for indicator in indicators {
            indicator.remove();
        }
        Ok(())
    }

    fn append_indicator(&mut self, column: usize, class: &str, glyph: &str) -> Result<()> {
        let header = self.header(column)?;
        let span = self.document.create_element("span").map_err(js_error)?;
        span.set_class_name(class);
        span.set_text_content(Some(glyph));
        header.append_child(&span).map_err(js_error)?;
        Ok(())
    }

    fn bind_header(&mut self, column: usize) -> Result<()> {
        self.header(column)?
            .set_attribute(COLUMN_ATTRIBUTE, &column.to_string())
            .map_err(js_error)
    }

    fn rows(&self) -> Result<Vec<HtmlTableRowElement>> {
        Ok(collect(&self.body()?.rows()))
    }

    fn cell_text(&self, row: &HtmlTableRowElement, column: usize) -> Result<Option<String>> {
        let Ok(index) = u32::try_from(column) else {
            return Ok(None);
        };
        Ok(row
            .cells()
            .item(index)
            .map(|cell| cell.text_content().unwrap_or_default()))
    }

    fn replace_rows(&mut self, rows: Vec<HtmlTableRowElement>) -> Result<()> {
        let body = self.body()?;
        // Appending an attached node moves it, so the fragment collects the
        // existing rows and one insertion puts them back in order.
        let fragment = self.document.create_document_fragment();
        for row in &rows {
            fragment.append_child(row).map_err(js_error)?;
        }
        body.append_child(&fragment).map_err(js_error)?;
        log::trace!("[web] reinserted {} rows", rows.len());
        Ok(())
    }
}
