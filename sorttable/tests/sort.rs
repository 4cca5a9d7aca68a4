mod common;

use common::{MockSurface, column, dom_table, headers_with_class, indicator_counts, row_ids};
use sorttable::{SortDirection, SortTableConfig, SortTableError, SortableTable, TableSurface};

fn no_initial_sort() -> SortTableConfig {
    SortTableConfig::default().initial_column(None)
}

// ============================================================================
// Text columns
// ============================================================================

#[test]
fn test_text_column_sorts_in_locale_order_then_reverses() {
    let table = dom_table(&["Fruit"], &[vec!["Banana"], vec!["apple"], vec!["Cherry"]]);
    let mut widget = SortableTable::attach(table, no_initial_sort()).unwrap();

    assert_eq!(widget.sort_by(0).unwrap(), SortDirection::Ascending);
    assert_eq!(column(widget.surface(), 0), vec!["apple", "Banana", "Cherry"]);

    assert_eq!(widget.sort_by(0).unwrap(), SortDirection::Descending);
    assert_eq!(column(widget.surface(), 0), vec!["Cherry", "Banana", "apple"]);
}

#[test]
fn test_cell_text_is_trimmed_before_comparison() {
    let table = dom_table(&["Name"], &[vec!["  zeta"], vec!["alpha  "], vec!["\tmid"]]);
    let widget = SortableTable::attach(table, SortTableConfig::default()).unwrap();

    assert_eq!(column(widget.surface(), 0), vec!["alpha  ", "\tmid", "  zeta"]);
}

// ============================================================================
// Numeric columns
// ============================================================================

#[test]
fn test_numeric_ascending_is_largest_first() {
    let table = dom_table(
        &["Item", "Price"],
        &[vec!["a", "$30"], vec!["b", "$5"], vec!["c", "$100"]],
    );
    let mut widget = SortableTable::attach(table, SortTableConfig::default()).unwrap();

    assert_eq!(widget.sort_by(1).unwrap(), SortDirection::Ascending);
    assert_eq!(column(widget.surface(), 1), vec!["$100", "$30", "$5"]);

    assert_eq!(widget.sort_by(1).unwrap(), SortDirection::Descending);
    assert_eq!(column(widget.surface(), 1), vec!["$5", "$30", "$100"]);

    widget.sort_by(1).unwrap();
    assert_eq!(column(widget.surface(), 1), vec!["$100", "$30", "$5"]);
}

#[test]
fn test_numeric_handles_negatives_and_decimals() {
    let table = dom_table(
        &["Delta"],
        &[vec!["-2.5 kt"], vec!["0.75 kt"], vec!["-10 kt"], vec!["3 kt"]],
    );
    let widget = SortableTable::attach(table, SortTableConfig::default()).unwrap();

    assert_eq!(
        column(widget.surface(), 0),
        vec!["3 kt", "0.75 kt", "-2.5 kt", "-10 kt"]
    );
}

// ============================================================================
// Mixed columns
// ============================================================================

#[test]
fn test_mixed_column_keeps_numbers_and_text_apart() {
    let table = dom_table(
        &["Value"],
        &[
            vec!["pear"],
            vec!["$3"],
            vec!["apple"],
            vec!["10"],
            vec!["n/a"],
        ],
    );
    let mut widget = SortableTable::attach(table, SortTableConfig::default()).unwrap();

    assert_eq!(
        column(widget.surface(), 0),
        vec!["10", "$3", "apple", "n/a", "pear"]
    );

    widget.sort_by(0).unwrap();
    assert_eq!(
        column(widget.surface(), 0),
        vec!["pear", "n/a", "apple", "$3", "10"]
    );
}

// ============================================================================
// Stability and identity
// ============================================================================

#[test]
fn test_equal_keys_keep_relative_order() {
    let table = dom_table(
        &["Group", "Name"],
        &[
            vec!["b", "first"],
            vec!["a", "second"],
            vec!["b", "third"],
            vec!["a", "fourth"],
        ],
    );
    let widget = SortableTable::attach(table, SortTableConfig::default()).unwrap();

    assert_eq!(
        column(widget.surface(), 1),
        vec!["second", "fourth", "first", "third"]
    );
}

#[test]
fn test_rows_are_moved_not_recreated() {
    let table = dom_table(&["N"], &[vec!["b"], vec!["c"], vec!["a"]]);
    let widget = SortableTable::attach(table, SortTableConfig::default()).unwrap();

    assert_eq!(
        row_ids(widget.surface()),
        vec!["data-r2", "data-r0", "data-r1"]
    );
}

// ============================================================================
// Direction state
// ============================================================================

#[test]
fn test_switching_column_restarts_ascending() {
    let table = dom_table(&["A", "B"], &[vec!["x", "2"], vec!["y", "1"]]);
    let mut widget = SortableTable::attach(table, SortTableConfig::default()).unwrap();

    assert_eq!(widget.sort_state().column(), Some(0));
    assert_eq!(widget.sort_by(0).unwrap(), SortDirection::Descending);
    assert_eq!(widget.sort_by(1).unwrap(), SortDirection::Ascending);
    assert_eq!(widget.sort_by(0).unwrap(), SortDirection::Ascending);
    assert_eq!(widget.sort_state().column(), Some(0));
}

#[test]
fn test_initial_sort_matches_first_click() {
    let rows = [vec!["Banana", "2"], vec!["apple", "3"], vec!["Cherry", "1"]];

    let attached = SortableTable::attach(
        dom_table(&["Fruit", "Qty"], &rows),
        SortTableConfig::default(),
    )
    .unwrap();

    let mut clicked =
        SortableTable::attach(dom_table(&["Fruit", "Qty"], &rows), no_initial_sort()).unwrap();
    assert_eq!(clicked.sort_state().column(), None);
    clicked.sort_by(0).unwrap();

    assert_eq!(column(attached.surface(), 0), column(clicked.surface(), 0));
    assert_eq!(attached.sort_state(), clicked.sort_state());
}

// ============================================================================
// Indicators
// ============================================================================

#[test]
fn test_indicator_follows_active_header() {
    let table = dom_table(&["A", "B", "C"], &[vec!["1", "2", "3"]]);
    let mut widget = SortableTable::attach(table, SortTableConfig::default()).unwrap();

    assert_eq!(headers_with_class(widget.surface(), "th-sorted-asc"), vec![0]);
    assert_eq!(headers_with_class(widget.surface(), "bg-indigo-100"), vec![0]);
    assert_eq!(indicator_counts(widget.surface()), vec![1, 0, 0]);

    widget.sort_by(2).unwrap();
    widget.sort_by(2).unwrap();

    assert!(headers_with_class(widget.surface(), "th-sorted-asc").is_empty());
    assert_eq!(headers_with_class(widget.surface(), "th-sorted-desc"), vec![2]);
    assert_eq!(headers_with_class(widget.surface(), "bg-indigo-100"), vec![2]);
    assert_eq!(indicator_counts(widget.surface()), vec![0, 0, 1]);
}

#[test]
fn test_indicator_glyph_is_the_same_for_both_directions() {
    let table = dom_table(&["Name"], &[vec!["x"], vec!["y"]]);
    let mut widget = SortableTable::attach(table, SortTableConfig::default()).unwrap();
    let header_text = |w: &SortableTable<sorttable::DomTable>| {
        tabledom::layout::header_cells(w.surface().table().unwrap())[0].text_content()
    };

    assert_eq!(header_text(&widget), "Name\u{25BC}");
    widget.sort_by(0).unwrap();
    assert_eq!(header_text(&widget), "Name\u{25BC}");
}

#[test]
fn test_custom_class_names() {
    let config = SortTableConfig::from_json(
        r#"{"sortable_class": "clickable", "highlight_class": "active", "indicator_glyph": "v"}"#,
    )
    .unwrap();
    let table = dom_table(&["A", "B"], &[vec!["1", "2"]]);
    let widget = SortableTable::attach(table, config).unwrap();

    assert_eq!(headers_with_class(widget.surface(), "clickable"), vec![0, 1]);
    assert_eq!(headers_with_class(widget.surface(), "active"), vec![0]);
    assert!(headers_with_class(widget.surface(), "bg-indigo-100").is_empty());
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_out_of_range_column_is_rejected_without_side_effects() {
    let table = dom_table(&["A", "B"], &[vec!["b", "1"], vec!["a", "2"]]);
    let mut widget = SortableTable::attach(table, SortTableConfig::default()).unwrap();
    let before_rows = column(widget.surface(), 0);
    let before_state = *widget.sort_state();

    let err = widget.sort_by(5).unwrap_err();

    assert!(matches!(
        err,
        SortTableError::InvalidColumn {
            index: 5,
            columns: 2
        }
    ));
    assert_eq!(column(widget.surface(), 0), before_rows);
    assert_eq!(*widget.sort_state(), before_state);
}

#[test]
fn test_short_row_aborts_sort_and_keeps_state() {
    let table = dom_table(&["A", "B"], &[vec!["b", "1"], vec!["a"]]);
    let mut widget = SortableTable::attach(table, SortTableConfig::default()).unwrap();
    let before = row_ids(widget.surface());

    let err = widget.sort_by(1).unwrap_err();

    // Row positions are display positions: the short "a" row sorted first.
    assert!(matches!(err, SortTableError::RaggedRow { row: 0, column: 1 }));
    assert_eq!(row_ids(widget.surface()), before);
    assert_eq!(widget.sort_state().column(), Some(0));
    assert_eq!(indicator_counts(widget.surface()), vec![1, 0]);
}

#[test]
fn test_initial_column_out_of_range_fails_attach() {
    let table = dom_table(&["A"], &[vec!["x"]]);

    let err = SortableTable::attach(table, SortTableConfig::default().initial_column(Some(3)))
        .unwrap_err();

    assert!(matches!(err, SortTableError::InvalidColumn { index: 3, .. }));
}

#[test]
fn test_empty_body_sorts_to_empty() {
    let table = dom_table(&["A"], &[]);
    let mut widget = SortableTable::attach(table, SortTableConfig::default()).unwrap();

    assert_eq!(widget.sort_by(0).unwrap(), SortDirection::Descending);
    assert!(widget.surface().rows().unwrap().is_empty());
}

#[test]
fn test_surface_failure_after_reorder_keeps_state() {
    let surface = MockSurface::new(&[50], &[vec!["b"], vec!["a"]]);
    let mut widget = SortableTable::attach(surface, no_initial_sort()).unwrap();
    widget.surface_mut().fail_indicators = true;

    let err = widget.sort_by(0).unwrap_err();

    assert!(matches!(err, SortTableError::Surface(_)));
    // Rows were already replaced when the indicator failed.
    assert_eq!(widget.surface().replace_calls, 1);
    assert_eq!(widget.sort_state().column(), None);
    assert_eq!(widget.sort_state().direction(), SortDirection::Ascending);
}

// ============================================================================
// Row extraction
// ============================================================================

#[test]
fn test_sort_reads_column_in_one_batch() {
    let rows: Vec<Vec<&str>> = ["d", "b", "e", "a", "c"].iter().map(|s| vec![*s]).collect();
    let surface = MockSurface::new(&[50], &rows);
    let mut widget = SortableTable::attach(surface, no_initial_sort()).unwrap();

    widget.sort_by(0).unwrap();
    widget.sort_by(0).unwrap();

    assert_eq!(widget.surface().cell_texts_calls.get(), 2);
    assert_eq!(widget.surface().cell_text_calls.get(), 0);
    let texts: Vec<&str> = widget.surface().rows.iter().map(|r| r[0].as_str()).collect();
    assert_eq!(texts, vec!["e", "d", "c", "b", "a"]);
}

#[test]
fn test_document_batch_matches_single_cell_reads() {
    let table = dom_table(
        &["Name", "Qty"],
        &[vec!["pear", "4"], vec!["fig"], vec!["kiwi", "12"]],
    );
    let order = [2, 0, 1];

    let batch = table.cell_texts(&order, 1).unwrap();
    let single: Vec<Option<String>> = order
        .iter()
        .map(|row| table.cell_text(row, 1).unwrap())
        .collect();

    assert_eq!(batch, single);
    assert_eq!(batch, vec![Some("12".to_string()), Some("4".to_string()), None]);
    assert!(matches!(
        table.cell_texts(&[3], 0),
        Err(SortTableError::Surface(_))
    ));
}

#[test]
fn test_large_document_sorts_in_order() {
    let values: Vec<String> = (0..5_000).map(|i| format!("${}", (i * 7919) % 5_000)).collect();
    let rows: Vec<Vec<&str>> = values.iter().map(|v| vec![v.as_str()]).collect();
    let mut widget = SortableTable::attach(dom_table(&["Amount"], &rows), SortTableConfig::default())
        .unwrap();

    widget.sort_by(0).unwrap();

    let sorted = column(widget.surface(), 0);
    assert_eq!(sorted.first().map(String::as_str), Some("$0"));
    assert_eq!(sorted.last().map(String::as_str), Some("$4999"));
}
