use crate::cell::CellState;
use crate::grid::Grid;

/// A named seed pattern, cells given relative to the pattern's own top-left.
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Block",
        cells: &[(0, 0), (1, 0), (0, 1), (1, 1)],
    },
    Pattern {
        name: "Blinker",
        cells: &[(0, 0), (1, 0), (2, 0)],
    },
    Pattern {
        name: "Glider",
        cells: &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
    },
    Pattern {
        name: "Toad",
        cells: &[(1, 0), (2, 0), (3, 0), (0, 1), (1, 1), (2, 1)],
    },
    Pattern {
        name: "Beacon",
        cells: &[
            (0, 0), (1, 0), (0, 1), (1, 1),
            (2, 2), (3, 2), (2, 3), (3, 3),
        ],
    },
    Pattern {
        name: "R-pentomino",
        cells: &[(1, 0), (2, 0), (0, 1), (1, 1), (1, 2)],
    },
];

impl Pattern {
    /// Bounding-box size of the pattern.
    fn extent(&self) -> (usize, usize) {
        let w = self.cells.iter().map(|&(x, _)| x).max().unwrap_or(0) + 1;
        let h = self.cells.iter().map(|&(_, y)| y).max().unwrap_or(0) + 1;
        (w, h)
    }

    /// Stamps the pattern centered on the grid. Cells that would land
    /// outside the field are dropped silently.
    pub fn stamp_centered(&self, grid: &mut Grid) {
        let (pw, ph) = self.extent();
        let off_x = grid.width().saturating_sub(pw) / 2;
        let off_y = grid.height().saturating_sub(ph) / 2;
        for &(x, y) in self.cells {
            grid.set(off_x + x, off_y + y, CellState::Alive);
        }
    }
}
