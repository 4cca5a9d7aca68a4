//! Locale-style string comparison.

use std::cmp::Ordering;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Compares two cell texts.
pub trait Collator {
    fn compare(&self, a: &str, b: &str) -> Ordering;
}

/// Root-locale approximation of `localeCompare`.
///
/// Strings are decomposed (NFD) and compared in three passes:
/// 1. base characters, case-folded, with whitespace before punctuation
///    before digits before letters;
/// 2. accents attached to each base character (unaccented first);
/// 3. case (lowercase first).
///
/// Ties after the three passes fall back to code point order, so the result
/// is a total order.
#[derive(Debug, Clone, Copy, Default)]
pub struct RootCollator;

#[derive(Debug)]
struct CollationElement {
    primary: (u8, char),
    accents: Vec<char>,
    upper: bool,
}

fn script_class(ch: char) -> u8 {
    if ch.is_whitespace() {
        0
    } else if ch.is_numeric() {
        2
    } else if ch.is_alphabetic() {
        3
    } else {
        1
    }
}

fn elements(s: &str) -> Vec<CollationElement> {
    let mut out: Vec<CollationElement> = Vec::with_capacity(s.len());
    for ch in s.nfd() {
        if is_combining_mark(ch)
            && let Some(last) = out.last_mut()
        {
            last.accents.push(ch);
            continue;
        }
        let folded = ch.to_lowercase().next().unwrap_or(ch);
        out.push(CollationElement {
            primary: (script_class(folded), folded),
            accents: Vec::new(),
            upper: ch.is_uppercase(),
        });
    }
    out
}

impl Collator for RootCollator {
    fn compare(&self, a: &str, b: &str) -> Ordering {
        let left = elements(a);
        let right = elements(b);

        left.iter()
            .map(|e| e.primary)
            .cmp(right.iter().map(|e| e.primary))
            .then_with(|| {
                left.iter()
                    .map(|e| &e.accents)
                    .cmp(right.iter().map(|e| &e.accents))
            })
            .then_with(|| left.iter().map(|e| e.upper).cmp(right.iter().map(|e| e.upper)))
            .then_with(|| a.cmp(b))
    }
}
