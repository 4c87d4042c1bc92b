//! CPU-side batch of squares collected from the sandbox each frame

use glam::Vec2;

use super::vertex::ShapeInstance;
use crate::sim::RenderSink;

/// Collects `fill_square` calls into GPU instance data
#[derive(Debug, Default)]
pub struct ShapeBatch {
    instances: Vec<ShapeInstance>,
}

impl ShapeBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop the previous frame's squares, keeping the allocation
    pub fn clear(&mut self) {
        self.instances.clear();
    }

    pub fn instances(&self) -> &[ShapeInstance] {
        &self.instances
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}

impl RenderSink for ShapeBatch {
    fn fill_square(&mut self, center: Vec2, half_extent: f32, color: [f32; 3]) {
        self.instances.push(ShapeInstance {
            center: center.to_array(),
            half_extent,
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Sandbox, SandboxConfig};

    #[test]
    fn test_batch_mirrors_sandbox() {
        let config = SandboxConfig {
            min_shapes: 8,
            initial_shapes: 8,
            ..Default::default()
        };
        let sandbox = Sandbox::new(config, 77);
        let mut batch = ShapeBatch::new();
        sandbox.draw(&mut batch);

        assert_eq!(batch.len(), sandbox.len());
        for (inst, shape) in batch.instances().iter().zip(sandbox.shapes()) {
            assert_eq!(inst.center, shape.pos.to_array());
            assert_eq!(inst.half_extent, shape.size);
            assert_eq!(inst.color, shape.color);
        }
    }

    #[test]
    fn test_clear_between_frames() {
        let mut batch = ShapeBatch::new();
        batch.fill_square(Vec2::new(1.0, 1.0), 2.0, [0.0; 3]);
        batch.fill_square(Vec2::new(3.0, 3.0), 2.0, [0.0; 3]);
        assert_eq!(batch.len(), 2);

        batch.clear();
        assert!(batch.is_empty());
    }
}
