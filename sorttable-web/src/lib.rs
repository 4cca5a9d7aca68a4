#![forbid(unsafe_code)]

//! Click-to-sort for a `<table>` in the browser.
//!
//! The sorting itself lives in `sorttable`; this crate provides a
//! [`sorttable::TableSurface`] over `web_sys` elements, a collator backed by
//! `String.prototype.localeCompare`, and the `wasm-bindgen` entry points.
//!
//! ```js
//! import init, { SortableTableWeb, attachOnReady } from "sorttable_web";
//! await init();
//! const prices = new SortableTableWeb("prices", '{"highlight_class": "active"}');
//! attachOnReady("inventory");
//! ```

pub mod listeners;
pub mod options;

#[cfg(target_arch = "wasm32")]
mod collate;
#[cfg(target_arch = "wasm32")]
mod surface;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(target_arch = "wasm32")]
pub use collate::BrowserCollator;
#[cfg(target_arch = "wasm32")]
pub use surface::WebTable;
#[cfg(target_arch = "wasm32")]
pub use wasm::{SortableTableWeb, attach_on_ready};

pub use listeners::register_all;
pub use options::{parse_options, px_from_client_width};
