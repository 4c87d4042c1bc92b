//! WebGPU rendering module
//!
//! Each shape becomes one instance of a unit quad; the vertex shader scales
//! and places it in world pixels.

pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use pipeline::{RenderState, SurfaceErrorAction, world_to_ndc};
pub use shapes::ShapeBatch;
