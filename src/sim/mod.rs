//! Simulation module
//!
//! Everything that moves lives here. This module must stay free of
//! windowing and GPU dependencies:
//! - Time only enters through `dt`
//! - Seeded RNG only
//! - Stable iteration order (collection index)
//! - Rendering goes out through the `RenderSink` trait

pub mod collision;
pub mod sandbox;
pub mod shape;

pub use collision::{CollisionResolver, DefaultCollisionResolver};
pub use sandbox::{PopulationCommand, RenderSink, Sandbox, SandboxConfig};
pub use shape::Shape;
