use macroquad::prelude::*;

use crate::application::{Camera, Config, GameState};
use crate::domain::Grid;

const ALIVE_COLOR: Color = BLACK;
const GRID_LINE_COLOR: Color = Color::new(0.78, 0.78, 0.78, 1.0);
const HUD_COLOR: Color = DARKGRAY;

/// Draw the background grid lines, one every on-screen tile width, with the
/// endpoints routed through the camera so the lattice pans with the world.
pub fn draw_background(camera: &Camera, config: &Config) {
    let step = config.tile_size * camera.zoom();

    let mut x = 0.0;
    while x <= config.screen_width {
        let top = camera.translate(vec2(x, 0.0));
        let bottom = camera.translate(vec2(x, config.screen_height));
        draw_line(top.x, top.y, bottom.x, bottom.y, 1.0, GRID_LINE_COLOR);
        x += step;
    }

    let mut y = 0.0;
    while y <= config.screen_height {
        let left = camera.translate(vec2(0.0, y));
        let right = camera.translate(vec2(config.screen_width, y));
        draw_line(left.x, left.y, right.x, right.y, 1.0, GRID_LINE_COLOR);
        y += step;
    }
}

/// Draw every live tile in view.
///
/// The visible tile range comes from the inverse transform applied to the
/// viewport corners, padded by one tile to absorb the forward/inverse
/// round-trip slack, then clamped to the map.
pub fn draw_cells(grid: &Grid, camera: &Camera, config: &Config) {
    let tile_size = config.tile_size * camera.zoom();
    let (grid_width, grid_height) = grid.dimensions();

    let (min_x, min_y) = camera.tile_id_for_screen_pos(Vec2::ZERO);
    let (max_x, max_y) =
        camera.tile_id_for_screen_pos(vec2(config.screen_width, config.screen_height));

    let start_x = (min_x - 1).max(0);
    let start_y = (min_y - 1).max(0);
    let end_x = (max_x + 1).min(grid_width as i32 - 1);
    let end_y = (max_y + 1).min(grid_height as i32 - 1);

    for y in start_y..=end_y {
        for x in start_x..=end_x {
            if grid.get_tile(x, y).is_alive() {
                let pos = camera.screen_pos_for_tile_id(x, y);
                draw_rectangle(pos.x, pos.y, tile_size, tile_size, ALIVE_COLOR);
            }
        }
    }
}

/// Generation counter, run state and view readout in the corner
pub fn draw_hud(state: &GameState, camera: &Camera) {
    let status = if state.is_running { "running" } else { "paused" };
    draw_text(
        &format!(
            "gen {} | {} | {:.0} gen/s | pop {}",
            state.generation,
            status,
            state.updates_per_second,
            state.grid.population()
        ),
        8.0,
        16.0,
        16.0,
        HUD_COLOR,
    );
    draw_text(
        &format!("zoom {:.1}x  offset ({:.0}, {:.0})", camera.zoom(), camera.offset().x, camera.offset().y),
        8.0,
        32.0,
        16.0,
        HUD_COLOR,
    );
}
