use macroquad::prelude::*;

use crate::application::{Camera, GameState};
use crate::domain::Cell;

/// What a pointer-move paints while the primary button is held
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PaintMode {
    Draw,
    Erase,
}

/// Transient pointer state for the current frame sequence. Owned by the main
/// loop and passed in each frame; the handlers themselves keep no state.
#[derive(Default)]
pub struct InputState {
    paint: Option<PaintMode>,
    dragging: bool,
    last_mouse: Option<Vec2>,
}

impl InputState {
    pub fn paint_mode(&self) -> Option<PaintMode> {
        self.paint
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }
}

/// Handle zoom with the mouse wheel; a tenth of the wheel delta per step
pub fn handle_zoom(camera: &mut Camera) {
    let wheel = mouse_wheel().1;
    if wheel != 0.0 {
        camera.set_zoom(wheel / 10.0);
    }
}

/// Pointer buttons and motion: primary button paints (toggle on press, then
/// draw or erase per mode on motion), secondary button drags the camera.
pub fn handle_pointer(input: &mut InputState, state: &mut GameState, camera: &mut Camera) {
    let mouse = Vec2::from(mouse_position());

    if is_mouse_button_pressed(MouseButton::Left) {
        let mode = if is_key_down(KeyCode::LeftShift) {
            PaintMode::Erase
        } else {
            PaintMode::Draw
        };
        let (tx, ty) = camera.tile_id_for_screen_pos(mouse);
        match mode {
            // Press toggles the tile under the pointer.
            PaintMode::Draw => state.grid.set_tile(tx, ty, state.grid.get_tile(tx, ty).toggle()),
            PaintMode::Erase => state.grid.set_tile(tx, ty, Cell::Dead),
        }
        input.paint = Some(mode);
    }
    if is_mouse_button_released(MouseButton::Left) {
        input.paint = None;
    }

    if is_mouse_button_pressed(MouseButton::Right) {
        input.dragging = true;
    }
    if is_mouse_button_released(MouseButton::Right) {
        input.dragging = false;
    }

    let motion = input.last_mouse.map_or(Vec2::ZERO, |last| mouse - last);
    if motion != Vec2::ZERO {
        if let Some(mode) = input.paint {
            let (tx, ty) = camera.tile_id_for_screen_pos(mouse);
            let cell = match mode {
                PaintMode::Draw => Cell::Alive,
                PaintMode::Erase => Cell::Dead,
            };
            state.grid.set_tile(tx, ty, cell);
        }
        if input.dragging {
            camera.pan(motion);
        }
    }
    input.last_mouse = Some(mouse);
}

/// Process keyboard input functionally
pub fn process_keyboard_input(state: GameState, camera: &mut Camera) -> GameState {
    type KeyAction = (KeyCode, fn(GameState) -> GameState);

    let actions: [KeyAction; 4] = [
        (KeyCode::C, GameState::clear),
        (KeyCode::R, GameState::randomize),
        (KeyCode::Up, |s| s.adjust_speed(1.0)),
        (KeyCode::Down, |s| s.adjust_speed(-1.0)),
    ];

    let state = actions.iter().fold(state, |s, (key, action)| {
        if is_key_pressed(*key) { action(s) } else { s }
    });

    // Run toggle fires on key release so holding Space cannot retrigger it.
    let state = if is_key_released(KeyCode::Space) {
        state.toggle_running()
    } else {
        state
    };

    // Reset camera with 'H' (home)
    if is_key_pressed(KeyCode::H) {
        camera.reset();
    }

    state
}
