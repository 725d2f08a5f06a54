//! Shape tessellation for 2D primitives
//!
//! Everything is emitted as a plain triangle list.

use glam::Vec2;
use std::f32::consts::TAU;

use super::vertex::{Color, Vertex};

fn push_triangle(out: &mut Vec<Vertex>, a: Vec2, b: Vec2, c: Vec2, color: Color) {
    out.push(Vertex::new(a.x, a.y, color));
    out.push(Vertex::new(b.x, b.y, color));
    out.push(Vertex::new(c.x, c.y, color));
}

fn push_quad(out: &mut Vec<Vertex>, a: Vec2, b: Vec2, c: Vec2, d: Vec2, color: Color) {
    push_triangle(out, a, b, c, color);
    push_triangle(out, c, b, d, color);
}

/// Point on a circle of `radius` around `center` at angle `theta`
#[inline]
fn on_circle(center: Vec2, radius: f32, theta: f32) -> Vec2 {
    center + Vec2::new(theta.cos(), theta.sin()) * radius
}

/// Segment count that keeps chords short for a given radius
pub fn segments_for_radius(radius: f32) -> u32 {
    ((radius * 0.75) as u32).clamp(12, 96)
}

/// Filled circle as a triangle fan
pub fn circle(center: Vec2, radius: f32, color: Color, segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * TAU;
        let theta2 = ((i + 1) as f32 / segments as f32) * TAU;
        push_triangle(
            &mut vertices,
            center,
            on_circle(center, radius, theta1),
            on_circle(center, radius, theta2),
            color,
        );
    }

    vertices
}

/// Hollow circle of the given line width, centered on `radius`
pub fn ring(center: Vec2, radius: f32, line_width: f32, color: Color, segments: u32) -> Vec<Vertex> {
    let inner_radius = (radius - line_width / 2.0).max(0.0);
    let outer_radius = radius + line_width / 2.0;
    let mut vertices = Vec::with_capacity((segments * 6) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * TAU;
        let theta2 = ((i + 1) as f32 / segments as f32) * TAU;
        push_quad(
            &mut vertices,
            on_circle(center, inner_radius, theta1),
            on_circle(center, outer_radius, theta1),
            on_circle(center, inner_radius, theta2),
            on_circle(center, outer_radius, theta2),
            color,
        );
    }

    vertices
}

/// Closed outline through `points`, one quad per edge
pub fn polyline_closed(points: &[Vec2], line_width: f32, color: Color) -> Vec<Vertex> {
    if points.len() < 2 {
        return Vec::new();
    }

    let half = line_width / 2.0;
    let mut vertices = Vec::with_capacity(points.len() * 6);

    for (i, &p1) in points.iter().enumerate() {
        let p2 = points[(i + 1) % points.len()];
        let dir = (p2 - p1).normalize_or_zero();
        // Perpendicular for width
        let perp = Vec2::new(-dir.y, dir.x) * half;
        push_quad(&mut vertices, p1 + perp, p1 - perp, p2 + perp, p2 - perp, color);
    }

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: Color = [1.0; 4];

    #[test]
    fn test_circle_vertex_count() {
        assert_eq!(circle(Vec2::ZERO, 10.0, WHITE, 16).len(), 48);
    }

    #[test]
    fn test_ring_stays_within_band() {
        let vertices = ring(Vec2::new(5.0, 5.0), 20.0, 2.0, WHITE, 24);
        assert_eq!(vertices.len(), 24 * 6);
        for v in vertices {
            let d = Vec2::from(v.position).distance(Vec2::new(5.0, 5.0));
            assert!((19.0 - 1e-3..=21.0 + 1e-3).contains(&d), "distance {d}");
        }
    }

    #[test]
    fn test_triangle_outline() {
        let points = [Vec2::ZERO, Vec2::new(10.0, 0.0), Vec2::new(0.0, 10.0)];
        assert_eq!(polyline_closed(&points, 2.0, WHITE).len(), 18);
        assert!(polyline_closed(&points[..1], 2.0, WHITE).is_empty());
    }

    #[test]
    fn test_segments_clamped() {
        assert_eq!(segments_for_radius(1.0), 12);
        assert_eq!(segments_for_radius(1000.0), 96);
    }
}
