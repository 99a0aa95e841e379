use log::info;
use macroquad::prelude::*;

use life_editor::{Camera, Config, GameState, InputState, input, rendering};

fn window_conf() -> Conf {
    let config = Config::default();
    Conf {
        window_title: "Game of Life Editor".to_owned(),
        window_width: config.screen_width as i32,
        window_height: config.screen_height as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    let config = Config::default();
    let mut state = GameState::new(&config);
    let mut camera = Camera::new(config);
    let mut pointer = InputState::default();

    info!(
        "starting: {}x{} tiles, tile size {} px",
        config.grid_width, config.grid_height, config.tile_size
    );

    loop {
        if is_key_released(KeyCode::Escape) {
            break;
        }

        // Input first, then at most one simulation step, then one render.
        input::handle_zoom(&mut camera);
        input::handle_pointer(&mut pointer, &mut state, &mut camera);
        state = input::process_keyboard_input(state, &mut camera);

        state = state.tick(get_frame_time());

        clear_background(WHITE);
        rendering::draw_background(&camera, &config);
        rendering::draw_cells(&state.grid, &camera, &config);
        rendering::draw_hud(&state, &camera);

        next_frame().await;
    }

    info!("stopped after {} generations", state.generation);
}
