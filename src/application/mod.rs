mod camera;
mod config;
mod game_state;
pub mod numeric;

pub use camera::Camera;
pub use config::Config;
pub use game_state::GameState;
