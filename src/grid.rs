use crate::cell::CellState;

/// Fixed-size field of cells, (0, 0) at the top-left.
/// Stored as a flat vector indexed `y * width + x`. Dimensions never change
/// after construction; reads and writes outside the field are clamped away
/// rather than wrapped.
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<CellState>,
}

impl Grid {
    /// Creates a grid with every cell Dead.
    pub fn new(width: usize, height: usize) -> Self {
        Grid {
            width,
            height,
            cells: vec![CellState::Dead; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Cell at (x, y). Positions outside the field read as Dead.
    pub fn get(&self, x: usize, y: usize) -> CellState {
        if x < self.width && y < self.height {
            self.cells[self.index(x, y)]
        } else {
            CellState::Dead
        }
    }

    /// Writes a cell. A no-op when (x, y) is outside the field.
    pub fn set(&mut self, x: usize, y: usize, state: CellState) {
        if x < self.width && y < self.height {
            let idx = self.index(x, y);
            self.cells[idx] = state;
        }
    }

    /// Resets every cell to Dead.
    pub fn clear(&mut self) {
        self.cells.fill(CellState::Dead);
    }

    /// Sets each cell Alive with the given probability.
    pub fn randomize(&mut self, fill_probability: f32) {
        use macroquad::rand;

        for cell in &mut self.cells {
            *cell = if rand::gen_range(0.0, 1.0) < fill_probability {
                CellState::Alive
            } else {
                CellState::Dead
            };
        }
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    /// Live cells among the 8 adjacent positions. Positions beyond the
    /// border count as Dead; the field does not wrap.
    pub fn live_neighbors(&self, x: usize, y: usize) -> u8 {
        let mut count = 0;
        for dy in -1i32..=1 {
            for dx in -1i32..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let nx = x as i32 + dx;
                let ny = y as i32 + dy;
                if nx < 0 || ny < 0 {
                    continue;
                }
                if self.get(nx as usize, ny as usize).is_alive() {
                    count += 1;
                }
            }
        }
        count
    }

    /// Iterates over all cells with their positions, row by row.
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, CellState)> + '_ {
        (0..self.height)
            .flat_map(move |y| (0..self.width).map(move |x| (x, y)))
            .map(|(x, y)| (x, y, self.get(x, y)))
    }
}
