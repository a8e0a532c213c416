//! Cell keys used by the JSON grid document.
//!
//! Two encodings exist in files written by earlier builds: the raw row/column
//! digits (`"01"` is row 0, col 1) and a 1-based sequence number (`"02"` is the
//! second cell). Decoding always uses the same encoding that was configured for
//! encoding, so a file is read back the way it was written.

use serde::{Deserialize, Serialize};

use crate::grid::{CellPos, GRID_SIZE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyEncoding {
    /// `"{row}{col}"`
    #[default]
    RowCol,
    /// `"{row*3+col+1:02}"`
    Sequential,
}

impl KeyEncoding {
    pub fn encode(&self, pos: CellPos) -> String {
        match self {
            KeyEncoding::RowCol => format!("{}{}", pos.row, pos.col),
            KeyEncoding::Sequential => format!("{:02}", pos.sequence()),
        }
    }

    /// Decode a key into a data cell position.
    ///
    /// Returns `None` for anything that is not exactly two ASCII digits naming a
    /// data cell. The control cell never decodes.
    pub fn decode(&self, key: &str) -> Option<CellPos> {
        let bytes = key.as_bytes();
        if bytes.len() != 2 || !bytes.iter().all(u8::is_ascii_digit) {
            return None;
        }
        let hi = (bytes[0] - b'0') as usize;
        let lo = (bytes[1] - b'0') as usize;

        let pos = match self {
            KeyEncoding::RowCol => CellPos::new(hi, lo)?,
            KeyEncoding::Sequential => {
                let seq = hi * 10 + lo;
                if seq == 0 || seq > GRID_SIZE * GRID_SIZE {
                    return None;
                }
                CellPos::new((seq - 1) / GRID_SIZE, (seq - 1) % GRID_SIZE)?
            }
        };

        if pos.is_control() {
            None
        } else {
            Some(pos)
        }
    }
}
