use glam::Vec2;

use crate::{Config, FieldRng};

/// A single background particle
#[derive(Debug, Clone, Copy)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Particle {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self { pos, vel, radius }
    }

    /// Spawn with a uniform position across `extent` and a small random drift
    pub fn spawn(rng: &mut FieldRng, extent: Vec2, config: &Config) -> Self {
        use rand::Rng;
        let pos = Vec2::new(
            rng.0.gen::<f32>() * extent.x,
            rng.0.gen::<f32>() * extent.y,
        );
        // Components land in [-particle_speed, particle_speed]
        let vel = Vec2::new(
            (rng.0.gen::<f32>() - 0.5) * 2.0 * config.particle_speed,
            (rng.0.gen::<f32>() - 0.5) * 2.0 * config.particle_speed,
        );
        let radius = rng.0.gen::<f32>() * config.particle_radius_max;
        Self { pos, vel, radius }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_within_extent() {
        let config = Config::new();
        let mut rng = FieldRng::new(7);
        let extent = Vec2::new(1280.0, 720.0);

        for _ in 0..200 {
            let p = Particle::spawn(&mut rng, extent, &config);
            assert!(p.pos.x >= 0.0 && p.pos.x <= extent.x, "x within extent");
            assert!(p.pos.y >= 0.0 && p.pos.y <= extent.y, "y within extent");
            assert!(
                p.vel.x.abs() <= config.particle_speed && p.vel.y.abs() <= config.particle_speed,
                "drift bounded by particle speed"
            );
            assert!(
                p.radius >= 0.0 && p.radius < config.particle_radius_max,
                "radius in [0, max)"
            );
        }
    }
}
