use glam::Vec2;

use crate::Config;

/// Commanded translation toward the pointer for a magnetic element
///
/// A strength of 100 tracks the pointer offset exactly; 50 halves it.
pub fn pull(pointer: Vec2, center: Vec2, strength: f32) -> Vec2 {
    (pointer - center) / (100.0 / strength)
}

/// Parse an element-supplied strength attribute, falling back to the default
pub fn strength_from_attr(attr: Option<&str>, config: &Config) -> f32 {
    attr.and_then(|s| s.trim().parse::<f32>().ok())
        .filter(|s| *s > 0.0)
        .unwrap_or(config.magnet_default_strength)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pull_default_strength_halves_offset() {
        let offset = pull(Vec2::new(120.0, 80.0), Vec2::new(100.0, 100.0), 50.0);
        assert_eq!(offset, Vec2::new(10.0, -10.0));
    }

    #[test]
    fn test_pull_full_strength_tracks_pointer() {
        let pointer = Vec2::new(33.0, -7.5);
        let offset = pull(pointer, Vec2::ZERO, 100.0);
        assert_eq!(offset, pointer);
    }

    #[test]
    fn test_pull_is_exact_for_arbitrary_strength() {
        let pointer = Vec2::new(250.0, 40.0);
        let center = Vec2::new(200.0, 60.0);
        let strength = 25.0;

        let offset = pull(pointer, center, strength);

        assert_eq!(offset, (pointer - center) / 4.0);
    }

    #[test]
    fn test_strength_from_attr() {
        let config = Config::new();
        assert_eq!(strength_from_attr(Some("80"), &config), 80.0);
        assert_eq!(strength_from_attr(Some(" 25 "), &config), 25.0);
        assert_eq!(strength_from_attr(None, &config), 50.0);
        assert_eq!(
            strength_from_attr(Some("not-a-number"), &config),
            50.0,
            "garbage falls back to default"
        );
        assert_eq!(
            strength_from_attr(Some("-10"), &config),
            50.0,
            "non-positive strength falls back to default"
        );
    }
}
