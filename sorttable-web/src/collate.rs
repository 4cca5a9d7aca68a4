use std::cmp::Ordering;

use js_sys::{Array, JsString, Object};
use sorttable::Collator;

/// Collation by the browser's default locale, via `localeCompare`.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserCollator;

impl Collator for BrowserCollator {
    fn compare(&self, a: &str, b: &str) -> Ordering {
        JsString::from(a)
            .locale_compare(b, &Array::new(), &Object::new())
            .cmp(&0)
    }
}
