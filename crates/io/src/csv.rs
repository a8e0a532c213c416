// CSV export
//
// The file is always 6 records of 3 fields: a header block naming every
// position ("Cell 01" .. "Cell 09"), then the cell text. The control cell holds
// no text, so its data field is empty.

use std::path::Path;

use gridnote_engine::grid::{CellPos, Grid, GRID_SIZE};

/// Header label pattern.
///
/// `{seq}` expands to the two-digit 1-based sequence number, `{row}` and
/// `{col}` to the 0-based coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderTemplate(String);

impl Default for HeaderTemplate {
    fn default() -> Self {
        Self("Cell {seq}".to_string())
    }
}

impl HeaderTemplate {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self(pattern.into())
    }

    pub fn render(&self, pos: CellPos) -> String {
        self.0
            .replace("{seq}", &format!("{:02}", pos.sequence()))
            .replace("{row}", &pos.row.to_string())
            .replace("{col}", &pos.col.to_string())
    }
}

/// The full record block: 3 header rows then 3 data rows.
pub fn to_records(grid: &Grid, header: &HeaderTemplate) -> Vec<Vec<String>> {
    let mut records = block(|pos| header.render(pos));
    records.extend(block(|pos| {
        if pos.is_control() {
            String::new()
        } else {
            grid.get(pos).trim().to_string()
        }
    }));
    records
}

fn block(field: impl Fn(CellPos) -> String) -> Vec<Vec<String>> {
    (0..GRID_SIZE)
        .map(|row| {
            (0..GRID_SIZE)
                .filter_map(|col| CellPos::new(row, col))
                .map(&field)
                .collect()
        })
        .collect()
}

pub fn export(grid: &Grid, header: &HeaderTemplate, path: &Path) -> Result<(), String> {
    let mut writer = csv::WriterBuilder::new()
        .from_path(path)
        .map_err(|e| e.to_string())?;

    for record in to_records(grid, header) {
        writer.write_record(&record).map_err(|e| e.to_string())?;
    }

    writer.flush().map_err(|e| e.to_string())?;
    log::info!("exported CSV to {}", path.display());
    Ok(())
}
