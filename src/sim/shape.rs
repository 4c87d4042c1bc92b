//! Shape entity: a colored point mass that bounces off the window edges

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::sandbox::SandboxConfig;

/// A simulated body, drawn as a filled square
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    pub pos: Vec2,
    /// Velocity in pixels/second
    pub vel: Vec2,
    /// Half-extent when drawn, radius for collision checks
    pub size: f32,
    /// Linear RGB, each channel in [0, 1]
    pub color: [f32; 3],
}

impl Shape {
    pub fn new(pos: Vec2, vel: Vec2, size: f32, color: [f32; 3]) -> Self {
        Self {
            pos,
            vel,
            size,
            color,
        }
    }

    /// Random shape using the spawn ranges of `config`
    ///
    /// Position is uniform over the bounds, each velocity component uniform
    /// over [-max_speed, max_speed), size uniform over [size_min, size_max)
    /// and each color channel uniform over [0, 1].
    pub fn random<R: Rng>(rng: &mut R, config: &SandboxConfig) -> Self {
        let pos = Vec2::new(
            rng.random_range(0.0..config.bounds.x),
            rng.random_range(0.0..config.bounds.y),
        );
        let vel = Vec2::new(
            rng.random_range(-config.max_speed..config.max_speed),
            rng.random_range(-config.max_speed..config.max_speed),
        );
        let size = rng.random_range(config.size_min..config.size_max);
        let color = [
            rng.random_range(0.0..=1.0),
            rng.random_range(0.0..=1.0),
            rng.random_range(0.0..=1.0),
        ];

        Self::new(pos, vel, size, color)
    }

    /// Advance position by `vel * dt`, then bounce off the edges of
    /// [0, bounds.x] x [0, bounds.y]
    ///
    /// Each axis is checked once: an axis that ends up out of range has its
    /// velocity negated and its coordinate clamped to the nearest edge. A
    /// large overshoot still reflects only once.
    pub fn integrate(&mut self, dt: f32, bounds: Vec2) {
        self.pos += self.vel * dt;

        if self.pos.x < 0.0 || self.pos.x > bounds.x {
            self.vel.x = -self.vel.x;
            self.pos.x = self.pos.x.clamp(0.0, bounds.x);
        }
        if self.pos.y < 0.0 || self.pos.y > bounds.y {
            self.vel.y = -self.vel.y;
            self.pos.y = self.pos.y.clamp(0.0, bounds.y);
        }
    }

    /// True if the bounding circles of `self` and `other` overlap
    ///
    /// Touching circles (distance equal to the sum of sizes) do not overlap.
    #[inline]
    pub fn overlaps(&self, other: &Shape) -> bool {
        self.pos.distance(other.pos) < self.size + other.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{HEIGHT, WIDTH};
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    const BOUNDS: Vec2 = Vec2::new(WIDTH, HEIGHT);

    fn shape_at(x: f32, y: f32, dx: f32, dy: f32) -> Shape {
        Shape::new(Vec2::new(x, y), Vec2::new(dx, dy), 5.0, [1.0, 1.0, 1.0])
    }

    #[test]
    fn test_integrate_moves_by_velocity() {
        let mut shape = shape_at(100.0, 200.0, 30.0, -40.0);
        shape.integrate(0.5, BOUNDS);

        assert!((shape.pos.x - 115.0).abs() < 1e-4);
        assert!((shape.pos.y - 180.0).abs() < 1e-4);
        assert_eq!(shape.vel, Vec2::new(30.0, -40.0));
    }

    #[test]
    fn test_reflect_at_right_edge() {
        let mut shape = shape_at(WIDTH - 1.0, 300.0, 50.0, 0.0);
        shape.integrate(0.1, BOUNDS);

        assert_eq!(shape.vel.x, -50.0);
        assert_eq!(shape.pos.x, WIDTH);
        assert_eq!(shape.pos.y, 300.0);
    }

    #[test]
    fn test_reflect_at_top_edge() {
        let mut shape = shape_at(400.0, 2.0, 0.0, -100.0);
        shape.integrate(0.1, BOUNDS);

        assert_eq!(shape.vel.y, 100.0);
        assert_eq!(shape.pos.y, 0.0);
    }

    #[test]
    fn test_axes_reflect_independently() {
        // Corner hit: both axes overshoot in the same step
        let mut shape = shape_at(1.0, HEIGHT - 1.0, -20.0, 20.0);
        shape.integrate(0.5, BOUNDS);

        assert_eq!(shape.vel, Vec2::new(20.0, -20.0));
        assert_eq!(shape.pos, Vec2::new(0.0, HEIGHT));
    }

    #[test]
    fn test_large_overshoot_reflects_once() {
        let mut shape = shape_at(10.0, 10.0, 5000.0, 0.0);
        shape.integrate(1.0, BOUNDS);

        assert_eq!(shape.vel.x, -5000.0);
        assert_eq!(shape.pos.x, WIDTH);
    }

    #[test]
    fn test_zero_dt_is_noop() {
        let mut shape = shape_at(42.0, 24.0, 10.0, 10.0);
        let before = shape.clone();
        shape.integrate(0.0, BOUNDS);
        assert_eq!(shape, before);
    }

    #[test]
    fn test_overlaps() {
        let a = shape_at(10.0, 10.0, 0.0, 0.0);
        let b = shape_at(12.0, 10.0, 0.0, 0.0);
        let far = shape_at(500.0, 500.0, 0.0, 0.0);
        let touching = shape_at(20.0, 10.0, 0.0, 0.0);

        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&far));
        assert!(!a.overlaps(&touching));
    }

    #[test]
    fn test_random_within_config_ranges() {
        let config = SandboxConfig::default();
        let mut rng = Pcg32::seed_from_u64(7);

        for _ in 0..500 {
            let s = Shape::random(&mut rng, &config);
            assert!(s.pos.x >= 0.0 && s.pos.x < config.bounds.x);
            assert!(s.pos.y >= 0.0 && s.pos.y < config.bounds.y);
            assert!(s.vel.x >= -config.max_speed && s.vel.x < config.max_speed);
            assert!(s.vel.y >= -config.max_speed && s.vel.y < config.max_speed);
            assert!(s.size >= config.size_min && s.size < config.size_max);
            assert!(s.color.iter().all(|c| (0.0..=1.0).contains(c)));
        }
    }
}
