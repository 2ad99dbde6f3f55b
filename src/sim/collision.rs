//! Collision detection for axis-aligned shapes
//!
//! The ball is tested by its bounding square, so paddle hits reduce to
//! rectangle overlap plus a coarse three-way bounce angle.

use std::f32::consts::FRAC_PI_4;

use serde::{Deserialize, Serialize};

/// Axis-aligned box in field coordinates (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

/// Strict overlap test; boxes that only touch do not collide
pub fn overlaps(a: &Aabb, b: &Aabb) -> bool {
    a.left < b.right && a.top < b.bottom && a.right > b.left && a.bottom > b.top
}

/// Bounce angle for a ball at `ball_y` striking a paddle centered at `paddle_center_y`
///
/// Upper half deflects up (-45°), lower half down (+45°), dead center flat.
pub fn bounce_angle(ball_y: f32, paddle_center_y: f32) -> f32 {
    if ball_y < paddle_center_y {
        -FRAC_PI_4
    } else if ball_y > paddle_center_y {
        FRAC_PI_4
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(left: f32, top: f32, right: f32, bottom: f32) -> Aabb {
        Aabb {
            left,
            top,
            right,
            bottom,
        }
    }

    #[test]
    fn test_overlapping_boxes() {
        let paddle = rect(40.0, 162.5, 50.0, 237.5);
        let ball = rect(43.0, 193.0, 57.0, 207.0);
        assert!(overlaps(&ball, &paddle));
        assert!(overlaps(&paddle, &ball));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let paddle = rect(40.0, 162.5, 50.0, 237.5);
        let ball = rect(50.0, 193.0, 64.0, 207.0);
        assert!(!overlaps(&ball, &paddle));

        let below = rect(43.0, 237.5, 57.0, 251.5);
        assert!(!overlaps(&below, &paddle));
    }

    #[test]
    fn test_separated_boxes() {
        let paddle = rect(550.0, 0.0, 560.0, 75.0);
        let ball = rect(293.0, 193.0, 307.0, 207.0);
        assert!(!overlaps(&ball, &paddle));
    }

    #[test]
    fn test_bounce_angle_regions() {
        assert_eq!(bounce_angle(200.0, 200.0), 0.0);
        assert_eq!(bounce_angle(180.0, 200.0), -FRAC_PI_4);
        assert_eq!(bounce_angle(220.0, 200.0), FRAC_PI_4);
    }
}
