// Domain layer - automaton engine
pub mod domain;

// Application layer - camera, configuration, simulation state
pub mod application;

// Infrastructure layer - rendering, input
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Cell, Grid, Pattern, presets};
pub use application::{Camera, Config, GameState};
pub use input::{InputState, PaintMode};
