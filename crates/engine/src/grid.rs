//! The 3x3 grid of text cells.
//!
//! Cell (0, 0) is reserved for the control panel. It holds no text and every
//! write to it is rejected, so callers never need to filter it out of exports.

use std::fmt;

/// Number of rows (and columns) in the grid.
pub const GRID_SIZE: usize = 3;

/// Position of a cell in the grid (0-based).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellPos {
    pub row: usize,
    pub col: usize,
}

impl CellPos {
    /// The control panel cell.
    pub const CONTROL: CellPos = CellPos { row: 0, col: 0 };

    /// Create a position, returning `None` if it falls outside the grid.
    pub fn new(row: usize, col: usize) -> Option<Self> {
        if row < GRID_SIZE && col < GRID_SIZE {
            Some(Self { row, col })
        } else {
            None
        }
    }

    #[inline]
    pub fn is_control(&self) -> bool {
        *self == Self::CONTROL
    }

    /// 1-based sequence number in row-major order (1..=9).
    #[inline]
    pub fn sequence(&self) -> usize {
        self.row * GRID_SIZE + self.col + 1
    }

    fn index(&self) -> usize {
        self.row * GRID_SIZE + self.col
    }
}

impl fmt::Display for CellPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cell {:02}", self.sequence())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    cells: [String; GRID_SIZE * GRID_SIZE],
}

impl Grid {
    pub fn new() -> Self {
        Self::default()
    }

    /// All positions in row-major order, control cell included.
    pub fn positions() -> impl Iterator<Item = CellPos> {
        (0..GRID_SIZE).flat_map(|row| (0..GRID_SIZE).map(move |col| CellPos { row, col }))
    }

    /// Data cell positions in scan order (row-major, control cell skipped).
    pub fn data_positions() -> impl Iterator<Item = CellPos> {
        Self::positions().filter(|pos| !pos.is_control())
    }

    /// Text of a cell. The control cell always reads as empty.
    pub fn get(&self, pos: CellPos) -> &str {
        &self.cells[pos.index()]
    }

    /// Replace the text of a data cell.
    ///
    /// Returns `false` (and leaves the grid untouched) for the control cell.
    pub fn set(&mut self, pos: CellPos, text: impl Into<String>) -> bool {
        if pos.is_control() {
            return false;
        }
        self.cells[pos.index()] = text.into();
        true
    }

    /// Replace a byte range of a cell's text.
    pub(crate) fn splice(&mut self, pos: CellPos, range: std::ops::Range<usize>, with: &str) {
        if pos.is_control() {
            return;
        }
        self.cells[pos.index()].replace_range(range, with);
    }

    /// Iterate over `(pos, text)` for every data cell in scan order.
    pub fn cells_iter(&self) -> impl Iterator<Item = (CellPos, &str)> {
        Self::data_positions().map(move |pos| (pos, self.get(pos)))
    }

    pub fn clear(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.clear();
        }
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|c| c.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_control_cell_rejects_writes() {
        let mut grid = Grid::new();
        assert!(!grid.set(CellPos::CONTROL, "menu"));
        assert_eq!(grid.get(CellPos::CONTROL), "");
        assert!(grid.is_empty());
    }

    #[test]
    fn test_data_positions_skip_control() {
        let positions: Vec<CellPos> = Grid::data_positions().collect();
        assert_eq!(positions.len(), 8);
        assert_eq!(positions[0], CellPos { row: 0, col: 1 });
        assert_eq!(positions[7], CellPos { row: 2, col: 2 });
        assert!(!positions.contains(&CellPos::CONTROL));
    }

    #[test]
    fn test_new_out_of_range() {
        assert!(CellPos::new(3, 0).is_none());
        assert!(CellPos::new(0, 3).is_none());
        assert_eq!(CellPos::new(2, 2), Some(CellPos { row: 2, col: 2 }));
    }

    #[test]
    fn test_set_and_clear() {
        let mut grid = Grid::new();
        let pos = CellPos::new(1, 2).unwrap();
        assert!(grid.set(pos, "hello"));
        assert_eq!(grid.get(pos), "hello");
        assert_eq!(grid.cells_iter().filter(|(_, t)| !t.is_empty()).count(), 1);

        grid.clear();
        assert!(grid.is_empty());
    }

    #[test]
    fn test_display_uses_sequence() {
        assert_eq!(CellPos::new(0, 1).unwrap().to_string(), "Cell 02");
        assert_eq!(CellPos::new(2, 2).unwrap().to_string(), "Cell 09");
    }
}
