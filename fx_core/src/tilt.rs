use glam::Vec2;

use crate::{Config, Params};

/// Rotation angles in degrees for a pointer at `local` within a card of `size`
///
/// Vertical offset from center drives a negative X rotation, horizontal a
/// positive Y rotation; both reach `max_deg` at the card edges.
pub fn angles(local: Vec2, size: Vec2, max_deg: f32) -> (f32, f32) {
    let cx = size.x / 2.0;
    let cy = size.y / 2.0;
    let rotate_x = ((local.y - cy) / cy) * -max_deg;
    let rotate_y = ((local.x - cx) / cx) * max_deg;
    (rotate_x, rotate_y)
}

/// CSS transform for a tilted card
pub fn transform(rotate_x: f32, rotate_y: f32, scale: f32) -> String {
    format!(
        "perspective({}px) rotateX({}deg) rotateY({}deg) scale3d({}, {}, {})",
        Params::TILT_PERSPECTIVE_PX,
        rotate_x,
        rotate_y,
        scale,
        scale,
        scale
    )
}

/// CSS transform for a card at rest
pub fn neutral_transform() -> String {
    format!(
        "perspective({}px) rotateX(0) rotateY(0) scale3d(1, 1, 1)",
        Params::TILT_PERSPECTIVE_PX
    )
}

/// Radial highlight background centered at the pointer
pub fn spotlight_css(local: Vec2, config: &Config) -> String {
    format!(
        "radial-gradient({}px circle at {}px {}px, rgba(255,255,255,{}), transparent 40%)",
        config.spotlight_radius_px, local.x, local.y, config.spotlight_alpha
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_angles_center_is_flat() {
        let (rx, ry) = angles(Vec2::new(150.0, 100.0), Vec2::new(300.0, 200.0), 3.0);
        assert_eq!(rx, 0.0);
        assert_eq!(ry, 0.0);
    }

    #[test]
    fn test_angles_at_corners() {
        let size = Vec2::new(300.0, 200.0);

        // Top-left: pointer above center tips the card away (+X), left of
        // center turns it left (-Y)
        let (rx, ry) = angles(Vec2::ZERO, size, 3.0);
        assert_eq!(rx, 3.0);
        assert_eq!(ry, -3.0);

        // Bottom-right
        let (rx, ry) = angles(size, size, 3.0);
        assert_eq!(rx, -3.0);
        assert_eq!(ry, 3.0);
    }

    #[test]
    fn test_angles_formula_exact() {
        let size = Vec2::new(240.0, 180.0);
        let local = Vec2::new(60.0, 135.0);

        let (rx, ry) = angles(local, size, 3.0);

        assert_eq!(rx, ((135.0 - 90.0) / 90.0) * -3.0);
        assert_eq!(ry, ((60.0 - 120.0) / 120.0) * 3.0);
    }

    #[test]
    fn test_transform_string() {
        let css = transform(1.5, -2.0, 1.02);
        assert_eq!(
            css,
            "perspective(1000px) rotateX(1.5deg) rotateY(-2deg) scale3d(1.02, 1.02, 1.02)"
        );
    }

    #[test]
    fn test_neutral_transform_string() {
        assert_eq!(
            neutral_transform(),
            "perspective(1000px) rotateX(0) rotateY(0) scale3d(1, 1, 1)"
        );
    }

    #[test]
    fn test_spotlight_css() {
        let config = Config::new();
        let css = spotlight_css(Vec2::new(42.0, 17.5), &config);
        assert_eq!(
            css,
            "radial-gradient(600px circle at 42px 17.5px, rgba(255,255,255,0.06), transparent 40%)"
        );
    }
}
