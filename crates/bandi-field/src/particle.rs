//! A single drifting particle.

use rand::Rng;

use crate::{POINTER_RADIUS, REPEL_STEP};

/// One particle of the field. Radius and opacity are fixed at creation;
/// only position and velocity mutate afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub dx: f32,
    pub dy: f32,
    pub radius: f32,
    pub opacity: f32,
}

impl Particle {
    /// Create a particle with randomized position, drift, size, and
    /// opacity, uniform over the canvas. A degenerate canvas extent is
    /// treated as one unit so the sample range stays non-empty.
    pub fn random<R: Rng>(rng: &mut R, width: f32, height: f32) -> Self {
        Self {
            x: rng.random_range(0.0..width.max(1.0)),
            y: rng.random_range(0.0..height.max(1.0)),
            dx: rng.random_range(-0.25..0.25),
            dy: rng.random_range(-0.25..0.25),
            radius: rng.random_range(1.0..3.0),
            opacity: rng.random_range(0.2..0.7),
        }
    }

    /// Move by one frame's velocity and wrap onto the canvas.
    pub fn advance(&mut self, width: f32, height: f32) {
        self.x = wrap(self.x + self.dx, width);
        self.y = wrap(self.y + self.dy, height);
    }

    /// Push away from the pointer if it is within [`POINTER_RADIUS`].
    ///
    /// The force fades linearly from full at the pointer to nothing at
    /// the radius edge. The displacement is additive on top of the
    /// normal drift and recomputed fresh every frame; it is not wrapped
    /// until the next advance.
    pub fn repel_from(&mut self, px: f32, py: f32) {
        let dx = self.x - px;
        let dy = self.y - py;
        let distance = (dx * dx + dy * dy).sqrt();
        if distance >= POINTER_RADIUS {
            return;
        }
        let force = (POINTER_RADIUS - distance) / POINTER_RADIUS;
        let angle = dy.atan2(dx);
        self.x += angle.cos() * force * REPEL_STEP;
        self.y += angle.sin() * force * REPEL_STEP;
    }
}

/// Hard wrap onto [0, extent): overshoot past the far edge restarts at
/// zero, motion past zero re-enters from the far edge.
fn wrap(coord: f32, extent: f32) -> f32 {
    if coord >= extent {
        return 0.0;
    }
    if coord < 0.0 {
        let folded = extent + coord;
        if folded < 0.0 || folded >= extent {
            return 0.0;
        }
        return folded;
    }
    coord
}

#[cfg(test)]
mod tests {
    use super::*;

    fn particle(x: f32, y: f32, dx: f32, dy: f32) -> Particle {
        Particle {
            x,
            y,
            dx,
            dy,
            radius: 1.5,
            opacity: 0.5,
        }
    }

    #[test]
    fn test_advance_adds_velocity() {
        let mut p = particle(10.0, 20.0, 0.25, -0.1);
        p.advance(100.0, 100.0);
        assert_eq!(p.x, 10.25);
        assert!((p.y - 19.9).abs() < 1e-4, "y = {}", p.y);
    }

    #[test]
    fn test_advance_wraps_past_far_edge() {
        let mut p = particle(99.9, 50.0, 0.2, 0.0);
        p.advance(100.0, 100.0);
        assert_eq!(p.x, 0.0);
        assert_eq!(p.y, 50.0);
    }

    #[test]
    fn test_advance_wraps_past_zero() {
        let mut p = particle(0.1, 50.0, -0.25, 0.0);
        p.advance(100.0, 100.0);
        // Re-enters from the far edge
        assert!(p.x > 99.0 && p.x < 100.0, "x = {}", p.x);
    }

    #[test]
    fn test_wrap_invariant_holds_over_many_frames() {
        let mut p = particle(0.0, 0.0, 0.24, -0.17);
        for _ in 0..10_000 {
            p.advance(37.0, 53.0);
            assert!((0.0..37.0).contains(&p.x), "x = {}", p.x);
            assert!((0.0..53.0).contains(&p.y), "y = {}", p.y);
        }
    }

    #[test]
    fn test_wrap_after_shrinking_canvas() {
        // Resize does not rescale positions; a particle stranded outside
        // the new bounds wraps on its next advance.
        let mut p = particle(500.0, 400.0, 0.1, 0.1);
        p.advance(100.0, 100.0);
        assert!((0.0..100.0).contains(&p.x));
        assert!((0.0..100.0).contains(&p.y));
    }

    #[test]
    fn test_repulsion_is_maximal_at_the_pointer() {
        let mut p = particle(50.0, 50.0, 0.0, 0.0);
        p.repel_from(50.0, 50.0);
        // Full force along atan2(0, 0) == 0, i.e. straight +x
        assert_eq!(p.x, 53.0);
        assert_eq!(p.y, 50.0);
    }

    #[test]
    fn test_no_repulsion_at_or_past_the_radius() {
        let mut p = particle(200.0, 50.0, 0.0, 0.0);
        p.repel_from(50.0, 50.0); // distance 150, exactly the radius
        assert_eq!(p.x, 200.0);
        assert_eq!(p.y, 50.0);

        p.repel_from(0.0, 50.0); // distance 200
        assert_eq!(p.x, 200.0);
    }

    #[test]
    fn test_repulsion_points_away_from_the_pointer() {
        let mut p = particle(60.0, 50.0, 0.0, 0.0);
        p.repel_from(50.0, 50.0);
        // distance 10, force (150 - 10) / 150, displacement along +x
        let expected = 60.0 + (150.0 - 10.0) / 150.0 * 3.0;
        assert!((p.x - expected).abs() < 1e-4, "x = {}", p.x);
        assert_eq!(p.y, 50.0);

        let mut below = particle(50.0, 70.0, 0.0, 0.0);
        below.repel_from(50.0, 50.0);
        assert_eq!(below.x, 50.0);
        assert!(below.y > 70.0);
    }

    #[test]
    fn test_repulsion_weakens_with_distance() {
        let mut near = particle(60.0, 50.0, 0.0, 0.0);
        let mut far = particle(140.0, 50.0, 0.0, 0.0);
        near.repel_from(50.0, 50.0);
        far.repel_from(50.0, 50.0);
        assert!(near.x - 60.0 > far.x - 140.0);
    }
}
