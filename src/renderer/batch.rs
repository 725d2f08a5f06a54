//! Tessellating renderer
//!
//! Collects each frame into a single triangle list that a GPU backend can
//! upload as-is.

use glam::Vec2;

use super::shapes;
use super::vertex::{Color, Vertex};
use super::Renderer;

/// Batches one frame of draw requests into vertices
#[derive(Debug, Clone, Default)]
pub struct VertexRenderer {
    vertices: Vec<Vertex>,
    clear_color: Color,
    frames: u64,
}

impl VertexRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Raw vertex bytes for buffer upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    pub fn clear_color(&self) -> Color {
        self.clear_color
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Renderer for VertexRenderer {
    fn clear(&mut self, color: Color) {
        self.vertices.clear();
        self.clear_color = color;
    }

    fn circle_outline(&mut self, center: Vec2, radius: f32, color: Color, line_width: f32) {
        let segments = shapes::segments_for_radius(radius);
        self.vertices
            .extend(shapes::ring(center, radius, line_width, color, segments));
    }

    fn circle_filled(&mut self, center: Vec2, radius: f32, color: Color) {
        let segments = shapes::segments_for_radius(radius);
        self.vertices
            .extend(shapes::circle(center, radius, color, segments));
    }

    fn polygon_outline(&mut self, points: &[Vec2], color: Color, line_width: f32) {
        self.vertices
            .extend(shapes::polyline_closed(points, line_width, color));
    }

    fn present(&mut self) {
        self.frames += 1;
        log::trace!("Frame {}: {} vertices", self.frames, self.vertices.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::renderer::{colors, draw_state};
    use crate::sim::{Asteroid, GameState};

    #[test]
    fn test_batch_bytes_match_vertices() {
        let mut state = GameState::new(GameConfig::default(), 1);
        state.add_asteroid(Asteroid::new(Vec2::new(100.0, 100.0), 20.0, Vec2::ZERO));

        let mut renderer = VertexRenderer::new();
        draw_state(&state, &mut renderer);

        let ring = shapes::segments_for_radius(20.0) as usize * 6;
        let ship = 3 * 6;
        assert_eq!(renderer.vertices().len(), ring + ship);
        assert_eq!(renderer.as_bytes().len(), renderer.vertices().len() * Vertex::STRIDE);
        assert_eq!(renderer.clear_color(), colors::BACKGROUND);
        assert_eq!(renderer.frames(), 1);
    }
}
