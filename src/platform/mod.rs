//! Platform layer
//!
//! Handles everything outside the simulation core:
//! - Window and event loop (winit)
//! - Input events
//! - Frame timing
//! - Logger setup

mod app;
pub mod input;
mod logging;
pub mod time;

pub use app::run;
pub use logging::init_logging;
