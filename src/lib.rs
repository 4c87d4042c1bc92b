//! Shapes Sandbox - bouncing, colliding squares in a window
//!
//! Core modules:
//! - `sim`: Simulation core (shapes, collision resolution, the sandbox)
//! - `renderer`: WebGPU rendering pipeline
//! - `platform`: Window, input, frame timing and logging
//! - `settings`: Build-time configuration

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::Settings;
pub use sim::{CollisionResolver, DefaultCollisionResolver, Sandbox, SandboxConfig, Shape};

/// Sandbox configuration constants
pub mod consts {
    /// Window (and world) dimensions in logical pixels
    pub const WIDTH: f32 = 800.0;
    pub const HEIGHT: f32 = 600.0;

    /// Population floor; despawn never goes below this
    pub const MIN_SHAPES: usize = 100;
    /// Shapes spawned at startup
    pub const INITIAL_SHAPES: usize = MIN_SHAPES;

    /// Spawn velocity range per axis is [-MAX_SPEED, MAX_SPEED) (pixels/s)
    pub const MAX_SPEED: f32 = 100.0;
    /// Spawn size range is [SIZE_MIN, SIZE_MAX) (half-extent, pixels)
    pub const SIZE_MIN: f32 = 10.0;
    pub const SIZE_MAX: f32 = 30.0;

    pub const WINDOW_TITLE: &str = "Shapes Sandbox";
    pub const CLEAR_COLOR: [f32; 3] = [0.1, 0.1, 0.1];
}
