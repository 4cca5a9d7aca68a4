//! CSV to headless table.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, bail};
use csv::ReaderBuilder;
use tabledom::{Document, Element};

/// Id of the loaded table element.
pub const TABLE_ID: &str = "table";

/// Build a document holding one table: the first CSV record becomes the
/// header row and every following record a body row.
///
/// Records may be shorter than the header; sorting by a column such a
/// record lacks is then reported as a ragged row.
pub fn load_csv<R: Read>(reader: R) -> Result<Document> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    if headers.is_empty() {
        bail!("CSV has no header record");
    }

    let header_row = Element::tr().id("head").children(
        headers
            .iter()
            .enumerate()
            .map(|(i, text)| Element::th(text).id(format!("h{i}"))),
    );

    let mut rows = Vec::new();
    for (i, record) in reader.records().enumerate() {
        let record = record.with_context(|| format!("Failed to read CSV record {}", i + 1))?;
        rows.push(
            Element::tr()
                .id(format!("r{i}"))
                .children(record.iter().map(Element::td)),
        );
    }
    log::debug!("[loader] {} columns, {} rows", headers.len(), rows.len());

    let table = Element::table()
        .id(TABLE_ID)
        .child(Element::thead().child(header_row))
        .child(Element::tbody().children(rows));
    Ok(Document::new(table))
}

pub fn load_csv_file(path: &Path) -> Result<Document> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open CSV file: {}", path.display()))?;
    load_csv(file)
}
