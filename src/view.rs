use crate::grid::Grid;
use macroquad::prelude::*;

const LIVE_COLOR: Color = Color::new(0.9, 0.1, 0.1, 1.0);
const DEAD_COLOR: Color = WHITE;

/// Screen-to-grid mapping and grid rendering. The grid is drawn at an
/// integer scale with (0, 0) in the window's top-left corner.
pub struct View {
    scale: usize,
}

impl View {
    pub fn new(scale: usize) -> Self {
        View { scale: scale.max(1) }
    }

    /// Maps a screen position to the cell under it. Positions left of or
    /// above the field map to None; positions past the right/bottom edge
    /// map to out-of-range cells, which the grid ignores.
    pub fn cell_at(&self, screen_x: f32, screen_y: f32) -> Option<(usize, usize)> {
        if screen_x < 0.0 || screen_y < 0.0 {
            return None;
        }
        let x = screen_x as usize / self.scale;
        let y = screen_y as usize / self.scale;
        Some((x, y))
    }

    /// Paints the whole field: dead background, then one filled square per
    /// live cell. Cell state is the only input; nothing is read back from
    /// the screen.
    pub fn render(&self, grid: &Grid) {
        clear_background(DEAD_COLOR);

        let size = self.scale as f32;
        for (x, y, cell) in grid.iter_cells() {
            if cell.is_alive() {
                draw_rectangle(x as f32 * size, y as f32 * size, size, size, LIVE_COLOR);
            }
        }

        self.render_boundary(grid);
    }

    fn render_boundary(&self, grid: &Grid) {
        let boundary_color = Color::new(0.3, 0.3, 0.3, 1.0);
        let line_thickness = 1.0;
        let w = (grid.width() * self.scale) as f32;
        let h = (grid.height() * self.scale) as f32;

        draw_line(0.0, 0.0, w, 0.0, line_thickness, boundary_color);
        draw_line(0.0, h, w, h, line_thickness, boundary_color);
        draw_line(0.0, 0.0, 0.0, h, line_thickness, boundary_color);
        draw_line(w, 0.0, w, h, line_thickness, boundary_color);
    }
}
