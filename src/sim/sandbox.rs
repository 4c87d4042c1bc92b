//! The sandbox: owns the shapes and drives one simulation step per frame

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::{CollisionResolver, DefaultCollisionResolver};
use super::shape::Shape;
use crate::consts::*;

/// Population and spawn parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SandboxConfig {
    /// World extent; shapes live in [0, bounds.x] x [0, bounds.y]
    pub bounds: Vec2,
    /// Population floor enforced by `despawn`
    pub min_shapes: usize,
    /// Shapes created by `Sandbox::new` (never fewer than `min_shapes`)
    pub initial_shapes: usize,
    /// Spawn velocity range per axis is [-max_speed, max_speed)
    pub max_speed: f32,
    /// Spawn size range is [size_min, size_max)
    pub size_min: f32,
    pub size_max: f32,
}

impl Default for SandboxConfig {
    fn default() -> Self {
        Self {
            bounds: Vec2::new(WIDTH, HEIGHT),
            min_shapes: MIN_SHAPES,
            initial_shapes: INITIAL_SHAPES,
            max_speed: MAX_SPEED,
            size_min: SIZE_MIN,
            size_max: SIZE_MAX,
        }
    }
}

impl SandboxConfig {
    /// Reject configurations whose spawn ranges would be empty
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.bounds.x > 0.0 && self.bounds.y > 0.0,
            "bounds must be positive, got {}x{}",
            self.bounds.x,
            self.bounds.y
        );
        anyhow::ensure!(
            self.max_speed > 0.0,
            "max_speed must be positive, got {}",
            self.max_speed
        );
        anyhow::ensure!(
            self.size_min >= 0.0 && self.size_min < self.size_max,
            "size range [{}, {}) is empty",
            self.size_min,
            self.size_max
        );
        Ok(())
    }
}

/// The two population commands coming from input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopulationCommand {
    Spawn,
    Despawn,
}

/// Receiver of draw calls, one per shape per frame
pub trait RenderSink {
    /// Draw a solid square centered at `center` with the given half-extent
    fn fill_square(&mut self, center: Vec2, half_extent: f32, color: [f32; 3]);
}

/// Owns the shape collection and the collision strategy
pub struct Sandbox {
    config: SandboxConfig,
    shapes: Vec<Shape>,
    resolver: Box<dyn CollisionResolver>,
    rng: Pcg32,
    seed: u64,
}

impl Sandbox {
    /// Create a sandbox populated with `max(initial_shapes, min_shapes)`
    /// random shapes, using the pairwise resolver
    ///
    /// `config` must pass `SandboxConfig::validate`.
    pub fn new(config: SandboxConfig, seed: u64) -> Self {
        let mut sandbox = Self::with_shapes(config, seed, Vec::new());
        let count = sandbox.config.initial_shapes.max(sandbox.config.min_shapes);
        sandbox.shapes.reserve(count);
        for _ in 0..count {
            let shape = Shape::random(&mut sandbox.rng, &sandbox.config);
            sandbox.shapes.push(shape);
        }
        sandbox
    }

    /// Create a sandbox around an explicit collection
    pub fn with_shapes(config: SandboxConfig, seed: u64, shapes: Vec<Shape>) -> Self {
        Self {
            config,
            shapes,
            resolver: Box::new(DefaultCollisionResolver::new()),
            rng: Pcg32::seed_from_u64(seed),
            seed,
        }
    }

    /// Builder form of `set_resolver`
    pub fn with_resolver<R: CollisionResolver + 'static>(mut self, resolver: R) -> Self {
        self.set_resolver(Box::new(resolver));
        self
    }

    /// Swap the collision strategy
    pub fn set_resolver(&mut self, resolver: Box<dyn CollisionResolver>) {
        log::debug!(
            "collision resolver: {} -> {}",
            self.resolver.name(),
            resolver.name()
        );
        self.resolver = resolver;
    }

    /// Advance the simulation by `dt` seconds
    ///
    /// Every shape is integrated first, then the resolver runs once over the
    /// whole collection. Velocity swaps from this pass only affect movement
    /// on the next call.
    pub fn update(&mut self, dt: f32) {
        let bounds = self.config.bounds;
        for shape in &mut self.shapes {
            shape.integrate(dt, bounds);
        }
        self.resolver.resolve_collisions(&mut self.shapes);
    }

    /// Append one random shape
    pub fn spawn(&mut self) {
        let shape = Shape::random(&mut self.rng, &self.config);
        self.shapes.push(shape);
        log::debug!("spawned shape, population {}", self.shapes.len());
    }

    /// Remove the last shape unless the population is at the floor
    ///
    /// Returns the removed shape, or `None` when the floor blocked removal.
    pub fn despawn(&mut self) -> Option<Shape> {
        if self.shapes.len() <= self.config.min_shapes {
            return None;
        }
        let removed = self.shapes.pop();
        log::debug!("despawned shape, population {}", self.shapes.len());
        removed
    }

    /// Apply a population command from input
    pub fn apply(&mut self, command: PopulationCommand) {
        match command {
            PopulationCommand::Spawn => self.spawn(),
            PopulationCommand::Despawn => {
                self.despawn();
            }
        }
    }

    /// Emit one filled square per shape, in collection order
    pub fn draw<S: RenderSink + ?Sized>(&self, sink: &mut S) {
        for shape in &self.shapes {
            sink.fill_square(shape.pos, shape.size, shape.color);
        }
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn config(&self) -> &SandboxConfig {
        &self.config
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn resolver_name(&self) -> &'static str {
        self.resolver.name()
    }
}
