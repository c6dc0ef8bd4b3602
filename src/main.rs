use macroquad::prelude::*;

mod cell;
mod config;
mod grid;
mod patterns;
mod rules;
mod stats;
mod view;
mod world;

use stats::Stats;
use view::View;
use world::World;

fn window_conf() -> Conf {
    let config = config::get_config();
    Conf {
        window_title: "Life".to_owned(),
        window_width: (config.grid_width * config.scale) as i32,
        window_height: (config.grid_height * config.scale) as i32,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let config = config::get_config();

    let mut world = World::new(
        config.grid_width,
        config.grid_height,
        config.frames_per_step,
    );
    let view = View::new(config.scale);
    let mut stats = Stats::new(config.show_stats);

    loop {
        // Keyboard controls
        if is_key_pressed(KeyCode::Space) {
            world.paused = !world.paused;
        }
        if is_key_pressed(KeyCode::N) && world.paused {
            world.step();
        }
        if is_key_pressed(KeyCode::C) {
            world.clear();
        }
        if is_key_pressed(KeyCode::R) {
            world.randomize(config.fill_probability);
        }
        if is_key_pressed(KeyCode::T) {
            stats.toggle();
        }

        // Number keys stamp preset patterns
        let pattern_keys = [
            KeyCode::Key1,
            KeyCode::Key2,
            KeyCode::Key3,
            KeyCode::Key4,
            KeyCode::Key5,
            KeyCode::Key6,
        ];
        for (i, key) in pattern_keys.iter().enumerate() {
            if is_key_pressed(*key)
                && let Some(pattern) = patterns::PATTERNS.get(i)
            {
                pattern.stamp_centered(world.grid_mut());
                println!("Stamped {}", pattern.name);
            }
        }

        // Painting: left button marks cells alive, right button erases.
        // Checked every frame so dragging leaves a trail.
        let (mouse_x, mouse_y) = mouse_position();
        if let Some((x, y)) = view.cell_at(mouse_x, mouse_y) {
            if is_mouse_button_down(MouseButton::Left) {
                world.paint(x, y);
            } else if is_mouse_button_down(MouseButton::Right) {
                world.erase(x, y);
            }
        }

        // Cells are only processed every Nth frame
        world.tick();

        view.render(world.grid());
        stats.render(&world);

        next_frame().await
    }
}
