//! Cell classification and pairwise comparison.

use std::cmp::Ordering;

use crate::collate::Collator;

/// How a cell takes part in a sort.
#[derive(Debug, Clone, PartialEq)]
pub enum SortKey {
    /// The cell reads as a finite number once stripped to `[0-9.-]`.
    Numeric(f64),
    /// Anything else, compared as trimmed text.
    Text(String),
}

impl SortKey {
    /// Classify raw cell text.
    ///
    /// `"$1,200.50"` is `Numeric(1200.5)`, `"Row 7"` is `Numeric(7.0)` and
    /// `"n/a"` is `Text("n/a")`.
    pub fn classify(cell_text: &str) -> Self {
        let text = cell_text.trim();
        match numeric_value(text) {
            Some(value) => SortKey::Numeric(value),
            None => SortKey::Text(text.to_string()),
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, SortKey::Numeric(_))
    }
}

/// Numeric reading of `text`: every character other than ASCII digits, `.`
/// and `-` is dropped, then the longest leading float literal is parsed.
/// Returns `None` when nothing parses or the value is not finite.
pub fn numeric_value(text: &str) -> Option<f64> {
    let cleaned: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    parse_float_prefix(&cleaned).filter(|value| value.is_finite())
}

/// Parse the longest prefix of `s` shaped like `-?digits(.digits)?`.
///
/// Trailing garbage is ignored, so `"1.2.3"` is `1.2` and `"5-3"` is `5`.
/// A prefix without any digit (`"-"`, `"."`, `"-."`) does not parse.
fn parse_float_prefix(s: &str) -> Option<f64> {
    let bytes = s.as_bytes();
    let negative = bytes.first() == Some(&b'-');
    let mut pos = usize::from(negative);

    let int_start = pos;
    while pos < bytes.len() && bytes[pos].is_ascii_digit() {
        pos += 1;
    }
    let int_digits = &s[int_start..pos];

    let mut frac_digits = "";
    if bytes.get(pos) == Some(&b'.') {
        let frac_start = pos + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        frac_digits = &s[frac_start..frac_end];
    }

    if int_digits.is_empty() && frac_digits.is_empty() {
        return None;
    }

    let mut literal = String::with_capacity(int_digits.len() + frac_digits.len() + 3);
    if negative {
        literal.push('-');
    }
    literal.push_str(if int_digits.is_empty() { "0" } else { int_digits });
    if !frac_digits.is_empty() {
        literal.push('.');
        literal.push_str(frac_digits);
    }
    literal.parse().ok()
}

/// Compare two keys before any direction is applied.
///
/// - Two numbers compare as `second - first`, so the base order is largest
///   first. This is the established behavior of the widget and is kept as is.
/// - Two texts compare with `collator`.
/// - A number always precedes a text, which keeps the order total on mixed
///   columns.
pub fn compare_keys<C: Collator + ?Sized>(a: &SortKey, b: &SortKey, collator: &C) -> Ordering {
    match (a, b) {
        (SortKey::Numeric(a), SortKey::Numeric(b)) => {
            b.partial_cmp(a).unwrap_or(Ordering::Equal)
        }
        (SortKey::Text(a), SortKey::Text(b)) => collator.compare(a, b),
        (SortKey::Numeric(_), SortKey::Text(_)) => Ordering::Less,
        (SortKey::Text(_), SortKey::Numeric(_)) => Ordering::Greater,
    }
}
