//! Shape generation for 2D primitives

use glam::Vec2;
use std::f32::consts::PI;

use super::scene::{Frame, Shape};
use super::vertex::{Rgba, Vertex};

/// Segments used for the ball; plenty at a 7px radius
pub const CIRCLE_SEGMENTS: u32 = 24;

/// Generate vertices for an axis-aligned filled rectangle
pub fn rect(x: f32, y: f32, width: f32, height: f32, color: Rgba) -> Vec<Vertex> {
    let (x2, y2) = (x + width, y + height);
    vec![
        Vertex::new(x, y, color),
        Vertex::new(x2, y, color),
        Vertex::new(x, y2, color),
        Vertex::new(x, y2, color),
        Vertex::new(x2, y, color),
        Vertex::new(x2, y2, color),
    ]
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: Rgba, segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Triangulate every shape of a frame, preserving draw order
pub fn tessellate(frame: &Frame) -> Vec<Vertex> {
    let mut vertices = Vec::new();
    for shape in &frame.shapes {
        match *shape {
            Shape::Rect {
                x,
                y,
                width,
                height,
                color,
            } => vertices.extend(rect(x, y, width, height, color.to_rgba())),
            Shape::Circle {
                center,
                radius,
                color,
            } => vertices.extend(circle(center, radius, color.to_rgba(), CIRCLE_SEGMENTS)),
        }
    }
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::compose;
    use crate::settings::Settings;
    use crate::sim::GameState;

    #[test]
    fn test_rect_covers_corners() {
        let verts = rect(40.0, 162.5, 10.0, 75.0, [1.0; 4]);
        assert_eq!(verts.len(), 6);
        let xs: Vec<f32> = verts.iter().map(|v| v.position[0]).collect();
        let ys: Vec<f32> = verts.iter().map(|v| v.position[1]).collect();
        assert_eq!(xs.iter().cloned().fold(f32::MAX, f32::min), 40.0);
        assert_eq!(xs.iter().cloned().fold(f32::MIN, f32::max), 50.0);
        assert_eq!(ys.iter().cloned().fold(f32::MAX, f32::min), 162.5);
        assert_eq!(ys.iter().cloned().fold(f32::MIN, f32::max), 237.5);
    }

    #[test]
    fn test_circle_stays_within_radius() {
        let center = Vec2::new(300.0, 200.0);
        let verts = circle(center, 7.0, [1.0; 4], 12);
        assert_eq!(verts.len(), 36);
        for v in verts {
            let d = Vec2::new(v.position[0], v.position[1]).distance(center);
            assert!(d <= 7.0 + 1e-4);
        }
    }

    #[test]
    fn test_tessellate_frame() {
        let frame = compose(&GameState::new(), &Settings::default());
        let verts = tessellate(&frame);
        // Background + two paddles, then the ball
        assert_eq!(verts.len(), 3 * 6 + CIRCLE_SEGMENTS as usize * 3);
        assert_eq!(verts[0].position, [0.0, 0.0]);
    }
}
