// JSON grid documents
//
// A document is one flat object: cell key -> cell text. Keys follow the
// configured `KeyEncoding` in both directions.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use serde_json::{Map, Value};

use gridnote_engine::cell_key::KeyEncoding;
use gridnote_engine::grid::Grid;

/// Outcome of applying a document to a grid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportReport {
    /// Cells overwritten from the document
    pub applied: usize,
    /// Keys left out, either undecodable or holding a non-string value
    pub skipped: Vec<String>,
}

/// Build the document for every data cell, text trimmed.
pub fn to_document(grid: &Grid, encoding: KeyEncoding) -> Map<String, Value> {
    grid.cells_iter()
        .map(|(pos, text)| (encoding.encode(pos), Value::String(text.trim().to_string())))
        .collect()
}

/// Write the cells named by `doc` into `grid`.
///
/// Cells the document doesn't mention keep their text. A top level that is not
/// an object is an error; per-key problems only skip that key.
pub fn apply_document(
    grid: &mut Grid,
    encoding: KeyEncoding,
    doc: &Value,
) -> Result<ImportReport, String> {
    let Value::Object(entries) = doc else {
        return Err("expected a JSON object at the top level".to_string());
    };

    let mut report = ImportReport::default();
    for (key, value) in entries {
        match (encoding.decode(key), value.as_str()) {
            (Some(pos), Some(text)) => {
                grid.set(pos, text);
                report.applied += 1;
            }
            _ => {
                log::warn!("skipping import key {key:?}");
                report.skipped.push(key.clone());
            }
        }
    }
    Ok(report)
}

pub fn export(grid: &Grid, encoding: KeyEncoding, path: &Path) -> Result<(), String> {
    let file = File::create(path).map_err(|e| e.to_string())?;
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, &to_document(grid, encoding))
        .map_err(|e| e.to_string())?;

    log::info!("exported grid to {}", path.display());
    Ok(())
}

/// Read and parse a document without touching any grid.
pub fn read_document(path: &Path) -> Result<Value, String> {
    let content = std::fs::read_to_string(path).map_err(|e| e.to_string())?;
    serde_json::from_str(&content).map_err(|e| e.to_string())
}

pub fn import(grid: &mut Grid, encoding: KeyEncoding, path: &Path) -> Result<ImportReport, String> {
    let doc = read_document(path)?;

    let report = apply_document(grid, encoding, &doc)?;
    log::info!(
        "imported {} cells from {} ({} skipped)",
        report.applied,
        path.display(),
        report.skipped.len()
    );
    Ok(report)
}
