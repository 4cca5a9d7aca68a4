//! Host-independent helpers shared by the browser binding.

use sorttable::{Result, SortTableConfig};

/// Parse the optional JSON options string passed from JavaScript.
///
/// A missing or blank string selects the defaults.
pub fn parse_options(options: Option<&str>) -> Result<SortTableConfig> {
    match options.map(str::trim) {
        None | Some("") => Ok(SortTableConfig::default()),
        Some(json) => SortTableConfig::from_json(json),
    }
}

/// Whole pixels for a fractional layout width.
///
/// Browsers report sub-pixel widths; the pinned width is rounded so the
/// fixed layout matches what was on screen.
pub fn px_from_client_width(width: f64) -> u16 {
    if !width.is_finite() || width <= 0.0 {
        return 0;
    }
    let rounded = width.round();
    if rounded >= f64::from(u16::MAX) {
        u16::MAX
    } else {
        rounded as u16
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sorttable::SortTableError;

    #[test]
    fn missing_or_blank_options_use_defaults() {
        assert_eq!(parse_options(None).unwrap(), SortTableConfig::default());
        assert_eq!(parse_options(Some("  ")).unwrap(), SortTableConfig::default());
    }

    #[test]
    fn options_override_single_fields() {
        let config = parse_options(Some(r#"{"indicator_glyph": "v", "initial_column": 2}"#)).unwrap();

        assert_eq!(config.indicator_glyph, "v");
        assert_eq!(config.initial_column, Some(2));
        assert_eq!(config.sortable_class, "sortable-th");
    }

    #[test]
    fn malformed_options_are_config_errors() {
        let err = parse_options(Some("{highlight")).unwrap_err();
        assert!(matches!(err, SortTableError::Config(_)));
    }

    #[test]
    fn client_widths_round_and_clamp() {
        assert_eq!(px_from_client_width(119.6), 120);
        assert_eq!(px_from_client_width(80.2), 80);
        assert_eq!(px_from_client_width(-3.0), 0);
        assert_eq!(px_from_client_width(f64::NAN), 0);
        assert_eq!(px_from_client_width(1e9), u16::MAX);
    }
}
