//! Display-column arithmetic for cell text.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Terminal-style display columns of `s`; wide characters count twice.
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Right-pad `s` with spaces to `width` columns. Longer text is returned
/// unchanged.
pub fn pad_to_width(s: &str, width: usize) -> String {
    let missing = width.saturating_sub(display_width(s));
    format!("{s}{}", " ".repeat(missing))
}

/// Clip `s` to at most `max_width` columns, marking the cut with `…`.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if display_width(s) <= max_width {
        return s.to_string();
    }
    let Some(budget) = max_width.checked_sub(1) else {
        return String::new();
    };

    let mut used = 0;
    let kept: String = s
        .chars()
        .take_while(|ch| {
            used += ch.width().unwrap_or(0);
            used <= budget
        })
        .collect();
    kept + "…"
}
