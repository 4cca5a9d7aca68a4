use std::cell::RefCell;
use std::rc::Rc;

use sorttable::{SortTableError, SortableTable};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, MouseEvent};

use crate::collate::BrowserCollator;
use crate::listeners::register_all;
use crate::options::parse_options;
use crate::surface::WebTable;

type Widget = SortableTable<WebTable, BrowserCollator>;

fn to_js(err: SortTableError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn report(err: &SortTableError) {
    web_sys::console::error_1(&JsValue::from_str(&err.to_string()));
}

type ClickListener = Closure<dyn FnMut(MouseEvent)>;

/// Remove a header's click listener, reporting failure to the console.
fn remove_listener(header: &HtmlElement, closure: &ClickListener) {
    if let Err(err) =
        header.remove_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
    {
        web_sys::console::error_1(&err);
    }
}

fn document() -> Result<web_sys::Document, JsValue> {
    web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("no document available"))
}

/// A table wired for click-to-sort.
///
/// Each instance owns its own sort state and its header listeners; call
/// `destroy` to detach the listeners before dropping the table from the page.
#[wasm_bindgen]
pub struct SortableTableWeb {
    widget: Rc<RefCell<Widget>>,
    headers: Vec<HtmlElement>,
    closures: Vec<ClickListener>,
}

#[wasm_bindgen]
impl SortableTableWeb {
    /// Attach to the table with id `table_id`.
    ///
    /// `options` is an optional JSON object overriding class names, the glyph
    /// or the initial column. Widths are pinned and headers wired before the
    /// initial sort runs.
    #[wasm_bindgen(constructor)]
    pub fn new(table_id: &str, options: Option<String>) -> Result<SortableTableWeb, JsValue> {
        let config = parse_options(options.as_deref()).map_err(to_js)?;
        let initial_column = config.initial_column;
        let surface = WebTable::from_id(document()?, table_id).map_err(to_js)?;
        let headers = surface.header_elements();

        let mut widget = SortableTable::with_collator(surface, config, BrowserCollator);
        widget.wire().map_err(to_js)?;
        let widget = Rc::new(RefCell::new(widget));

        let closures: Vec<ClickListener> = (0..headers.len())
            .map(|column| {
                let widget = widget.clone();
                Closure::wrap(Box::new(move |_event: MouseEvent| {
                    let Ok(mut widget) = widget.try_borrow_mut() else {
                        return;
                    };
                    if let Err(err) = widget.sort_by(column) {
                        report(&err);
                    }
                }) as Box<dyn FnMut(MouseEvent)>)
            })
            .collect();

        let pairs: Vec<(&HtmlElement, &ClickListener)> = headers.iter().zip(&closures).collect();
        register_all(
            &pairs,
            |(header, closure)| {
                header.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
            },
            |(header, closure)| remove_listener(header, closure),
        )?;

        if let Some(column) = initial_column {
            let sorted = widget.borrow_mut().sort_by(column);
            if let Err(err) = sorted {
                for (header, closure) in &pairs {
                    remove_listener(header, closure);
                }
                return Err(to_js(err));
            }
        }

        log::debug!("[web] attached to '{table_id}' with {} headers", headers.len());
        Ok(Self {
            widget,
            headers,
            closures,
        })
    }

    /// Sort by `column`, returning `"asc"` or `"desc"`.
    #[wasm_bindgen(js_name = sortBy)]
    pub fn sort_by(&self, column: usize) -> Result<String, JsValue> {
        let direction = self.widget.borrow_mut().sort_by(column).map_err(to_js)?;
        Ok(direction.as_str().to_string())
    }

    /// Active column, or `undefined` before the first sort.
    #[wasm_bindgen(getter, js_name = activeColumn)]
    pub fn active_column(&self) -> Option<usize> {
        self.widget.borrow().sort_state().column()
    }

    /// `"asc"` or `"desc"`.
    #[wasm_bindgen(getter)]
    pub fn direction(&self) -> String {
        self.widget.borrow().sort_state().direction().as_str().to_string()
    }

    /// Remove the header listeners. The table keeps its current order and
    /// pinned widths.
    pub fn destroy(&mut self) {
        for (header, closure) in self.headers.iter().zip(&self.closures) {
            remove_listener(header, closure);
        }
        self.closures.clear();
        self.headers.clear();
    }
}

thread_local! {
    static ATTACHED: RefCell<Vec<SortableTableWeb>> = const { RefCell::new(Vec::new()) };
}

fn attach_and_keep(table_id: &str, options: Option<String>) {
    match SortableTableWeb::new(table_id, options) {
        Ok(table) => ATTACHED.with(|attached| attached.borrow_mut().push(table)),
        Err(err) => web_sys::console::error_1(&err),
    }
}

/// Attach to `table_id` once the document has been parsed.
///
/// The instance is kept alive for the lifetime of the page. Failures are
/// reported to the console, since there is no caller left to return them to.
#[wasm_bindgen(js_name = attachOnReady)]
pub fn attach_on_ready(table_id: String, options: Option<String>) -> Result<(), JsValue> {
    let document = document()?;
    if document.ready_state() != "loading" {
        attach_and_keep(&table_id, options);
        return Ok(());
    }

    let callback = Closure::once_into_js(move || attach_and_keep(&table_id, options));
    document.add_event_listener_with_callback("DOMContentLoaded", callback.unchecked_ref())
}
