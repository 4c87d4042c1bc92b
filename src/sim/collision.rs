//! Collision detection and response between shapes
//!
//! A resolver gets the whole live collection once per tick, after
//! integration, and mutates shapes in place. It sees a slice, so it cannot
//! add or remove shapes.

use super::shape::Shape;

/// Strategy for one resolution pass over the shape collection
pub trait CollisionResolver {
    /// Detect overlapping pairs and apply a response in place
    ///
    /// Must be a no-op for zero or one shape.
    fn resolve_collisions(&mut self, shapes: &mut [Shape]);

    /// Short name for logging
    fn name(&self) -> &'static str;
}

/// Brute-force pairwise resolver that swaps velocities of overlapping shapes
///
/// Every unordered pair (i, j) with i < j is checked in index order, i
/// ascending then j ascending. Overlap means the center distance is less
/// than the sum of sizes. The response is an unconditional swap of the full
/// velocity vectors; mass and approach direction are ignored.
///
/// Swaps apply immediately and later pairs in the same pass see them, so a
/// shape touching several others can be swapped more than once and the
/// outcome depends on index order.
///
/// Cost is O(n²) distance checks per pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultCollisionResolver;

impl DefaultCollisionResolver {
    pub fn new() -> Self {
        Self
    }
}

impl CollisionResolver for DefaultCollisionResolver {
    fn resolve_collisions(&mut self, shapes: &mut [Shape]) {
        let n = shapes.len();
        for i in 0..n {
            for j in (i + 1)..n {
                if shapes[i].overlaps(&shapes[j]) {
                    swap_velocities(shapes, i, j);
                }
            }
        }
    }

    fn name(&self) -> &'static str {
        "pairwise-swap"
    }
}

/// Exchange the velocity vectors of `shapes[i]` and `shapes[j]` (i < j)
#[inline]
fn swap_velocities(shapes: &mut [Shape], i: usize, j: usize) {
    debug_assert!(i < j);
    let (head, tail) = shapes.split_at_mut(j);
    std::mem::swap(&mut head[i].vel, &mut tail[0].vel);
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn shape(x: f32, y: f32, dx: f32, dy: f32, size: f32) -> Shape {
        Shape::new(Vec2::new(x, y), Vec2::new(dx, dy), size, [0.5, 0.5, 0.5])
    }

    fn velocities(shapes: &[Shape]) -> Vec<Vec2> {
        shapes.iter().map(|s| s.vel).collect()
    }

    #[test]
    fn test_empty_and_single_are_noops() {
        let mut resolver = DefaultCollisionResolver::new();

        let mut none: Vec<Shape> = Vec::new();
        resolver.resolve_collisions(&mut none);
        assert!(none.is_empty());

        let mut one = vec![shape(10.0, 10.0, 3.0, 4.0, 5.0)];
        resolver.resolve_collisions(&mut one);
        assert_eq!(one[0].vel, Vec2::new(3.0, 4.0));
    }

    #[test]
    fn test_distant_pair_untouched() {
        let mut shapes = vec![
            shape(100.0, 100.0, 1.0, 2.0, 10.0),
            shape(200.0, 100.0, -3.0, 4.0, 10.0),
        ];
        DefaultCollisionResolver.resolve_collisions(&mut shapes);
        assert_eq!(
            velocities(&shapes),
            vec![Vec2::new(1.0, 2.0), Vec2::new(-3.0, 4.0)]
        );
    }

    #[test]
    fn test_overlapping_pair_swaps_exactly() {
        let mut shapes = vec![
            shape(100.0, 100.0, 12.5, -7.25, 10.0),
            shape(110.0, 105.0, -3.0, 99.0, 10.0),
        ];
        DefaultCollisionResolver.resolve_collisions(&mut shapes);
        assert_eq!(shapes[0].vel, Vec2::new(-3.0, 99.0));
        assert_eq!(shapes[1].vel, Vec2::new(12.5, -7.25));
        // Positions are never touched
        assert_eq!(shapes[0].pos, Vec2::new(100.0, 100.0));
        assert_eq!(shapes[1].pos, Vec2::new(110.0, 105.0));
    }

    #[test]
    fn test_touching_pair_does_not_swap() {
        let mut shapes = vec![
            shape(0.0, 0.0, 1.0, 0.0, 5.0),
            shape(10.0, 0.0, -1.0, 0.0, 5.0),
        ];
        DefaultCollisionResolver.resolve_collisions(&mut shapes);
        assert_eq!(
            velocities(&shapes),
            vec![Vec2::new(1.0, 0.0), Vec2::new(-1.0, 0.0)]
        );
    }

    #[test]
    fn test_three_shape_scenario() {
        let mut shapes = vec![
            shape(10.0, 10.0, 10.0, 0.0, 5.0),
            shape(12.0, 10.0, -10.0, 0.0, 5.0),
            shape(500.0, 500.0, 5.0, 5.0, 5.0),
        ];
        DefaultCollisionResolver.resolve_collisions(&mut shapes);
        assert_eq!(
            velocities(&shapes),
            vec![
                Vec2::new(-10.0, 0.0),
                Vec2::new(10.0, 0.0),
                Vec2::new(5.0, 5.0)
            ]
        );
    }

    #[test]
    fn test_multiway_contact_follows_index_order() {
        // All three overlap each other. Pairs run (0,1), (0,2), (1,2):
        //   (0,1): a=vb b=va
        //   (0,2): a=vc c=vb
        //   (1,2): b=vb c=va
        let va = Vec2::new(1.0, 0.0);
        let vb = Vec2::new(0.0, 2.0);
        let vc = Vec2::new(-3.0, -3.0);
        let mut shapes = vec![
            shape(50.0, 50.0, va.x, va.y, 10.0),
            shape(52.0, 50.0, vb.x, vb.y, 10.0),
            shape(51.0, 52.0, vc.x, vc.y, 10.0),
        ];
        DefaultCollisionResolver.resolve_collisions(&mut shapes);
        assert_eq!(velocities(&shapes), vec![vc, vb, va]);
    }

    #[test]
    fn test_static_non_overlapping_is_idempotent() {
        let original = vec![
            shape(10.0, 10.0, 1.0, 1.0, 5.0),
            shape(40.0, 10.0, 2.0, 2.0, 5.0),
            shape(10.0, 40.0, 3.0, 3.0, 5.0),
        ];
        let mut shapes = original.clone();
        let mut resolver = DefaultCollisionResolver::new();

        resolver.resolve_collisions(&mut shapes);
        assert_eq!(shapes, original);
        resolver.resolve_collisions(&mut shapes);
        assert_eq!(shapes, original);
    }

    #[test]
    fn test_swap_velocities_non_adjacent() {
        let mut shapes = vec![
            shape(0.0, 0.0, 1.0, 1.0, 1.0),
            shape(0.0, 0.0, 2.0, 2.0, 1.0),
            shape(0.0, 0.0, 3.0, 3.0, 1.0),
        ];
        swap_velocities(&mut shapes, 0, 2);
        assert_eq!(
            velocities(&shapes),
            vec![Vec2::new(3.0, 3.0), Vec2::new(2.0, 2.0), Vec2::new(1.0, 1.0)]
        );
    }
}
