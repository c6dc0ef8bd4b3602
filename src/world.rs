use crate::cell::CellState;
use crate::grid::Grid;
use crate::rules;

/// Double-buffered simulation state.
///
/// `current` is what gets painted and rendered; `next` is fully overwritten
/// by each step and then swapped in, so no generation is ever built from a
/// half-updated field.
pub struct World {
    current: Grid,
    next: Grid,
    pub generation: u32,
    frames_per_step: u32,
    frames_until_step: u32,
    pub paused: bool,
}

/// Computes the next generation of `current` into `next`.
/// Every cell of `next` is written; `current` is untouched.
pub fn step_into(current: &Grid, next: &mut Grid) {
    for y in 0..current.height() {
        for x in 0..current.width() {
            let cell = current.get(x, y);
            let neighbors = current.live_neighbors(x, y);
            next.set(x, y, rules::next_state(cell, neighbors));
        }
    }
}

/// Convenience for callers that want a fresh grid back.
pub fn step(current: &Grid) -> Grid {
    let mut next = Grid::new(current.width(), current.height());
    step_into(current, &mut next);
    next
}

impl World {
    pub fn new(width: usize, height: usize, frames_per_step: u32) -> Self {
        World {
            current: Grid::new(width, height),
            next: Grid::new(width, height),
            generation: 0,
            frames_per_step,
            frames_until_step: frames_per_step,
            paused: false,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.current
    }

    /// Mutable access to the live generation, for painting and stamping.
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.current
    }

    pub fn frames_per_step(&self) -> u32 {
        self.frames_per_step
    }

    /// Advances one generation: fills `next` from `current`, then swaps the
    /// buffers instead of copying.
    pub fn step(&mut self) {
        step_into(&self.current, &mut self.next);
        std::mem::swap(&mut self.current, &mut self.next);
        self.generation += 1;
    }

    /// Called once per rendered frame; steps every Nth frame while running.
    pub fn tick(&mut self) {
        if self.paused {
            return;
        }
        if self.frames_until_step == 0 {
            self.frames_until_step = self.frames_per_step;
            self.step();
        } else {
            self.frames_until_step -= 1;
        }
    }

    /// Marks a cell Alive (painting with the mouse).
    pub fn paint(&mut self, x: usize, y: usize) {
        self.current.set(x, y, CellState::Alive);
    }

    /// Marks a cell Dead (erasing).
    pub fn erase(&mut self, x: usize, y: usize) {
        self.current.set(x, y, CellState::Dead);
    }

    pub fn clear(&mut self) {
        self.current.clear();
        self.generation = 0;
    }

    pub fn randomize(&mut self, fill_probability: f32) {
        self.current.randomize(fill_probability);
        self.generation = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_from(width: usize, height: usize, live: &[(usize, usize)]) -> Grid {
        let mut grid = Grid::new(width, height);
        for &(x, y) in live {
            grid.set(x, y, CellState::Alive);
        }
        grid
    }

    fn live_cells(grid: &Grid) -> Vec<(usize, usize)> {
        grid.iter_cells()
            .filter(|(_, _, c)| c.is_alive())
            .map(|(x, y, _)| (x, y))
            .collect()
    }

    #[test]
    fn test_empty_grid_stays_empty() {
        let next = step(&Grid::new(10, 10));
        assert_eq!(next.live_count(), 0);
    }

    #[test]
    fn test_step_preserves_dimensions() {
        let next = step(&Grid::new(7, 13));
        assert_eq!(next.width(), 7);
        assert_eq!(next.height(), 13);
    }

    #[test]
    fn test_lone_cell_dies() {
        let grid = grid_from(5, 5, &[(2, 2)]);
        assert_eq!(step(&grid).live_count(), 0);
    }

    #[test]
    fn test_step_leaves_input_untouched() {
        let grid = grid_from(5, 5, &[(2, 2)]);
        let _ = step(&grid);
        assert_eq!(grid.get(2, 2), CellState::Alive);
        assert_eq!(grid.live_count(), 1);
    }

    #[test]
    fn test_block_is_still_life() {
        let block = [(1, 1), (2, 1), (1, 2), (2, 2)];
        let grid = grid_from(5, 5, &block);
        let next = step(&grid);
        assert_eq!(live_cells(&next), live_cells(&grid));
    }

    #[test]
    fn test_blinker_oscillates_with_period_two() {
        let grid = grid_from(5, 5, &[(1, 2), (2, 2), (3, 2)]);
        let after_one = step(&grid);
        // Horizontal bar turns vertical...
        assert_eq!(live_cells(&after_one), vec![(2, 1), (2, 2), (2, 3)]);
        // ...and back.
        let after_two = step(&after_one);
        assert_eq!(live_cells(&after_two), live_cells(&grid));
    }

    #[test]
    fn test_blinker_on_top_border_oscillates() {
        // Exercises neighbor counting at y = 0, where the original C code
        // dropped neighbors entirely.
        let grid = grid_from(5, 5, &[(1, 0), (2, 0), (3, 0)]);
        let after_one = step(&grid);
        assert_eq!(live_cells(&after_one), vec![(2, 0), (2, 1)]);
    }

    #[test]
    fn test_border_does_not_wrap() {
        // A column on the left edge; with wraparound the right edge would
        // see it as neighbors and spawn cells there.
        let grid = grid_from(5, 5, &[(0, 1), (0, 2), (0, 3)]);
        let next = step(&grid);
        for y in 0..5 {
            assert_eq!(next.get(4, y), CellState::Dead);
        }
        // Clamped blinker still behaves: cells beyond the border read Dead.
        assert_eq!(live_cells(&next), vec![(0, 2), (1, 2)]);
    }

    #[test]
    fn test_world_step_swaps_and_counts_generations() {
        let mut world = World::new(5, 5, 10);
        world.paint(1, 2);
        world.paint(2, 2);
        world.paint(3, 2);
        world.step();
        world.step();
        assert_eq!(world.generation, 2);
        assert_eq!(live_cells(world.grid()), vec![(1, 2), (2, 2), (3, 2)]);
    }

    #[test]
    fn test_tick_steps_every_nth_frame() {
        let mut world = World::new(5, 5, 3);
        world.paint(2, 2);
        // Frames 1..=3 count down, the 4th performs the step.
        for _ in 0..3 {
            world.tick();
            assert_eq!(world.generation, 0);
        }
        world.tick();
        assert_eq!(world.generation, 1);
    }

    #[test]
    fn test_tick_is_inert_while_paused() {
        let mut world = World::new(5, 5, 0);
        world.paused = true;
        for _ in 0..10 {
            world.tick();
        }
        assert_eq!(world.generation, 0);
    }

    #[test]
    fn test_paint_out_of_bounds_is_ignored() {
        let mut world = World::new(5, 5, 10);
        world.paint(9, 9);
        assert_eq!(world.grid().live_count(), 0);
    }
}
