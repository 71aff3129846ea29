use glam::Vec2;

use crate::{Config, Particle};

/// Seeded random number generator for particle spawning
pub struct FieldRng(pub rand::rngs::StdRng);

impl FieldRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for FieldRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Background particle field
///
/// Positions advance by one velocity step per frame; a velocity component is
/// reflected after the coordinate leaves `[0, extent]` on its axis, so a
/// particle can overshoot the boundary by at most one step before turning
/// around.
#[derive(Debug, Clone)]
pub struct ParticleField {
    particles: Vec<Particle>,
    extent: Vec2,
}

impl ParticleField {
    /// Create a field with `config.particle_count` randomly placed particles
    pub fn spawn(config: &Config, extent: Vec2, rng: &mut FieldRng) -> Self {
        let particles = (0..config.particle_count)
            .map(|_| Particle::spawn(rng, extent, config))
            .collect();
        Self { particles, extent }
    }

    /// Advance every particle one frame, bouncing off the field edges
    pub fn step(&mut self) {
        for p in &mut self.particles {
            p.pos += p.vel;

            if p.pos.x < 0.0 || p.pos.x > self.extent.x {
                p.vel.x = -p.vel.x;
            }
            if p.pos.y < 0.0 || p.pos.y > self.extent.y {
                p.vel.y = -p.vel.y;
            }
        }
    }

    /// Replace the drawable extent
    ///
    /// Existing positions are not reclamped; after a shrink a particle can sit
    /// outside the new extent until its next bounce check.
    pub fn resize(&mut self, extent: Vec2) {
        self.extent = extent;
    }

    pub fn extent(&self) -> Vec2 {
        self.extent
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_field(extent: Vec2) -> ParticleField {
        let config = Config::new();
        let mut rng = FieldRng::new(42);
        ParticleField::spawn(&config, extent, &mut rng)
    }

    #[test]
    fn test_spawn_count() {
        let field = small_field(Vec2::new(800.0, 600.0));
        assert_eq!(field.len(), Config::new().particle_count);
    }

    #[test]
    fn test_step_advances_positions() {
        let mut field = small_field(Vec2::new(800.0, 600.0));
        let before: Vec<Vec2> = field.particles().iter().map(|p| p.pos).collect();

        field.step();

        let moved = field
            .particles()
            .iter()
            .zip(&before)
            .any(|(p, prev)| p.pos != *prev);
        assert!(moved, "at least one particle should move per step");
    }

    #[test]
    fn test_bounce_reflects_velocity_on_exit() {
        let mut field = ParticleField {
            particles: vec![Particle::new(
                Vec2::new(0.05, 5.0),
                Vec2::new(-0.1, 0.0),
                1.0,
            )],
            extent: Vec2::new(10.0, 10.0),
        };

        field.step();

        let p = field.particles()[0];
        assert!(p.pos.x < 0.0, "particle overshoots before the flip");
        assert!(p.vel.x > 0.0, "x velocity reflected after exit");

        field.step();
        let p = field.particles()[0];
        assert!(p.pos.x > -0.1, "particle heads back inside");
    }

    #[test]
    fn test_positions_stay_within_one_step_of_bounds() {
        let mut field = small_field(Vec2::new(400.0, 300.0));
        let max_step = Config::new().particle_speed;

        for _ in 0..50_000 {
            field.step();
        }

        let extent = field.extent();
        for p in field.particles() {
            assert!(
                p.pos.x >= -max_step && p.pos.x <= extent.x + max_step,
                "x within one velocity step of bounds, got {}",
                p.pos.x
            );
            assert!(
                p.pos.y >= -max_step && p.pos.y <= extent.y + max_step,
                "y within one velocity step of bounds, got {}",
                p.pos.y
            );
        }
    }

    #[test]
    fn test_resize_does_not_reclamp_positions() {
        let mut field = small_field(Vec2::new(1920.0, 1080.0));
        let before: Vec<Vec2> = field.particles().iter().map(|p| p.pos).collect();

        field.resize(Vec2::new(640.0, 480.0));

        for (p, prev) in field.particles().iter().zip(&before) {
            assert_eq!(p.pos, *prev, "resize must not move particles");
        }
        assert_eq!(field.extent(), Vec2::new(640.0, 480.0));
    }

    #[test]
    fn test_bounce_uses_new_extent_after_resize() {
        let mut field = ParticleField {
            particles: vec![Particle::new(
                Vec2::new(7.95, 5.0),
                Vec2::new(0.1, 0.0),
                1.0,
            )],
            extent: Vec2::new(100.0, 100.0),
        };

        // Shrink so the particle now sits near the new right edge
        field.resize(Vec2::new(8.0, 100.0));
        field.step();

        let p = field.particles()[0];
        assert!(
            p.vel.x < 0.0,
            "bounce check must use the post-resize extent"
        );
    }
}
