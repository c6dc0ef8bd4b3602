use crate::world::World;
use macroquad::prelude::*;

/// Text overlay in the top-left corner. Reads the world, mutates nothing.
pub struct Stats {
    visible: bool,
}

impl Stats {
    pub fn new(visible: bool) -> Self {
        Stats { visible }
    }

    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }

    pub fn render(&self, world: &World) {
        if !self.visible {
            return;
        }

        let padding = 10.0;
        let font_size = 20.0;
        let line_height = 22.0;
        let text_color = DARKGRAY;

        let line1 = format!("Generation: {}", world.generation);
        let line2 = format!("Population: {}", world.grid().live_count());
        let line3 = if world.paused {
            "Paused (Space to resume, N to step)".to_owned()
        } else {
            format!("Stepping every {} frames", world.frames_per_step())
        };

        draw_text(&line1, padding, padding + font_size, font_size, text_color);
        draw_text(
            &line2,
            padding,
            padding + font_size + line_height,
            font_size,
            text_color,
        );
        draw_text(
            &line3,
            padding,
            padding + font_size + line_height * 2.0,
            font_size,
            text_color,
        );
    }
}
