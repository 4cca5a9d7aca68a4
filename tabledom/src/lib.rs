//! Headless table document.
//!
//! A small element tree that models the parts of an HTML table a sorting
//! widget touches: tags, classes, inline widths, the table layout mode and
//! click targets. Column widths are measured from text content so layout
//! behavior can be asserted without a browser.

pub mod document;
pub mod element;
pub mod error;
pub mod event;
pub mod hit;
pub mod html;
pub mod layout;
pub mod text;
pub mod types;

pub use document::Document;
pub use element::Element;
pub use error::DomError;
pub use event::{Event, MouseButton};
pub use hit::{hit_test, hit_test_any};
pub use html::to_html;
pub use layout::{LayoutResult, Rect};
pub use types::*;
