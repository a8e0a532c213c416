//! Template Maker send operation.

use crate::grid::{CellPos, Grid};

/// The cell next to the control panel receives sent templates.
pub const TEMPLATE_TARGET: CellPos = CellPos { row: 0, col: 1 };

/// Copy template text into [`TEMPLATE_TARGET`].
///
/// The text is trimmed first; whitespace-only text leaves the cell alone and
/// returns `false`.
pub fn send(grid: &mut Grid, text: &str) -> bool {
    let content = text.trim();
    if content.is_empty() {
        return false;
    }
    grid.set(TEMPLATE_TARGET, content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_send_overwrites_target() {
        let mut grid = Grid::new();
        grid.set(TEMPLATE_TARGET, "old");
        assert!(send(&mut grid, "  Dear team,\nthanks.\n\n"));
        assert_eq!(grid.get(TEMPLATE_TARGET), "Dear team,\nthanks.");
    }

    #[test]
    fn test_send_blank_is_noop() {
        let mut grid = Grid::new();
        grid.set(TEMPLATE_TARGET, "keep me");
        assert!(!send(&mut grid, " \n\t "));
        assert_eq!(grid.get(TEMPLATE_TARGET), "keep me");
    }
}
