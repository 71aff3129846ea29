/// Tuning parameters for the page's decorative effects
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Particle field
    pub const PARTICLE_COUNT: usize = 40;
    pub const PARTICLE_SPEED: f32 = 0.15; // max |velocity component| per frame
    pub const PARTICLE_RADIUS_MAX: f32 = 1.5;
    pub const PARTICLE_FILL: &'static str = "rgba(255,255,255,0.03)";
    pub const MIN_DESKTOP_WIDTH: u32 = 768;

    // Cursor follower
    pub const RING_FOLLOW_DURATION: f32 = 0.15;
    pub const RING_HOVER_SCALE: f32 = 1.5;

    // Magnetic elements
    pub const MAGNET_DEFAULT_STRENGTH: f32 = 50.0;
    pub const MAGNET_FOLLOW_DURATION: f32 = 0.5;
    pub const MAGNET_RELEASE_DURATION: f32 = 0.8;

    // Card tilt
    pub const TILT_MAX_DEG: f32 = 3.0;
    pub const TILT_FOLLOW_DURATION: f32 = 0.1;
    pub const TILT_RELEASE_DURATION: f32 = 0.5;
    pub const TILT_HOVER_SCALE: f32 = 1.02;
    pub const TILT_PERSPECTIVE_PX: f32 = 1000.0;

    // Spotlight
    pub const SPOTLIGHT_RADIUS_PX: f32 = 600.0;
    pub const SPOTLIGHT_ALPHA: f32 = 0.06;

    // Smooth scroll
    pub const SCROLL_DURATION: f32 = 1.2;
}

/// Effect configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub particle_count: usize,
    pub particle_speed: f32,
    pub particle_radius_max: f32,
    pub particle_fill: &'static str,
    pub min_desktop_width: u32,
    pub ring_follow_duration: f32,
    pub ring_hover_scale: f32,
    pub magnet_default_strength: f32,
    pub magnet_follow_duration: f32,
    pub magnet_release_duration: f32,
    pub tilt_max_deg: f32,
    pub tilt_follow_duration: f32,
    pub tilt_release_duration: f32,
    pub tilt_hover_scale: f32,
    pub spotlight_radius_px: f32,
    pub spotlight_alpha: f32,
    pub scroll_duration: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            particle_count: Params::PARTICLE_COUNT,
            particle_speed: Params::PARTICLE_SPEED,
            particle_radius_max: Params::PARTICLE_RADIUS_MAX,
            particle_fill: Params::PARTICLE_FILL,
            min_desktop_width: Params::MIN_DESKTOP_WIDTH,
            ring_follow_duration: Params::RING_FOLLOW_DURATION,
            ring_hover_scale: Params::RING_HOVER_SCALE,
            magnet_default_strength: Params::MAGNET_DEFAULT_STRENGTH,
            magnet_follow_duration: Params::MAGNET_FOLLOW_DURATION,
            magnet_release_duration: Params::MAGNET_RELEASE_DURATION,
            tilt_max_deg: Params::TILT_MAX_DEG,
            tilt_follow_duration: Params::TILT_FOLLOW_DURATION,
            tilt_release_duration: Params::TILT_RELEASE_DURATION,
            tilt_hover_scale: Params::TILT_HOVER_SCALE,
            spotlight_radius_px: Params::SPOTLIGHT_RADIUS_PX,
            spotlight_alpha: Params::SPOTLIGHT_ALPHA,
            scroll_duration: Params::SCROLL_DURATION,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Media query gating the cursor follower and magnetic elements
    pub fn pointer_media_query(&self) -> &'static str {
        "(hover: hover) and (pointer: fine)"
    }

    /// Media query gating the card tilt
    pub fn hover_media_query(&self) -> &'static str {
        "(hover: hover)"
    }

    /// Media query gating the particle field
    pub fn desktop_media_query(&self) -> String {
        format!("(min-width: {}px)", self.min_desktop_width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_matches_params() {
        let config = Config::new();
        assert_eq!(config.particle_count, 40);
        assert_eq!(config.particle_speed, 0.15);
        assert_eq!(config.magnet_default_strength, 50.0);
        assert_eq!(config.tilt_max_deg, 3.0);
    }

    #[test]
    fn test_desktop_media_query() {
        let config = Config::new();
        assert_eq!(config.desktop_media_query(), "(min-width: 768px)");
    }

    #[test]
    fn test_pointer_media_query() {
        let config = Config::new();
        assert_eq!(
            config.pointer_media_query(),
            "(hover: hover) and (pointer: fine)"
        );
    }
}
