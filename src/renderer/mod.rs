//! Rendering module
//!
//! The simulation never draws. A `Renderer` receives outline/fill requests
//! and owns whatever surface ends up on screen. Two backends live here:
//! a recorded display list and a tessellated vertex batch.

pub mod batch;
pub mod shapes;
pub mod vertex;

pub use batch::VertexRenderer;
pub use vertex::{Color, Vertex, colors};

use glam::Vec2;

use crate::sim::{Entity, GameState, Group};

/// Draw-request sink for one frame
pub trait Renderer {
    /// Start a frame filled with `color`
    fn clear(&mut self, color: Color);
    fn circle_outline(&mut self, center: Vec2, radius: f32, color: Color, line_width: f32);
    fn circle_filled(&mut self, center: Vec2, radius: f32, color: Color);
    fn polygon_outline(&mut self, points: &[Vec2], color: Color, line_width: f32);
    /// Finish the frame
    fn present(&mut self) {}
}

/// Draw the whole game: every drawable entity, then the ship
pub fn draw_state(state: &GameState, renderer: &mut dyn Renderer) {
    let line_width = state.config.line_width;

    renderer.clear(colors::BACKGROUND);
    for (_, entity) in state.registry.iter_group(Group::Drawable) {
        match entity {
            Entity::Asteroid(a) => {
                renderer.circle_outline(a.body.pos, a.body.radius, colors::ASTEROID, line_width)
            }
            Entity::Projectile(p) => renderer.circle_filled(p.body.pos, p.body.radius, colors::SHOT),
        }
    }
    renderer.polygon_outline(&state.player.triangle(), colors::SHIP, line_width);
    renderer.present();
}

/// A single recorded draw request
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Color),
    CircleOutline {
        center: Vec2,
        radius: f32,
        color: Color,
        line_width: f32,
    },
    CircleFilled {
        center: Vec2,
        radius: f32,
        color: Color,
    },
    PolygonOutline {
        points: Vec<Vec2>,
        color: Color,
        line_width: f32,
    },
}

/// Display list of the most recent frame
#[derive(Debug, Clone, Default)]
pub struct CommandList {
    pub commands: Vec<DrawCommand>,
    /// Frames presented so far
    pub frames: u64,
}

impl CommandList {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Renderer for CommandList {
    fn clear(&mut self, color: Color) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear(color));
    }

    fn circle_outline(&mut self, center: Vec2, radius: f32, color: Color, line_width: f32) {
        self.commands.push(DrawCommand::CircleOutline {
            center,
            radius,
            color,
            line_width,
        });
    }

    fn circle_filled(&mut self, center: Vec2, radius: f32, color: Color) {
        self.commands.push(DrawCommand::CircleFilled {
            center,
            radius,
            color,
        });
    }

    fn polygon_outline(&mut self, points: &[Vec2], color: Color, line_width: f32) {
        self.commands.push(DrawCommand::PolygonOutline {
            points: points.to_vec(),
            color,
            line_width,
        });
    }

    fn present(&mut self) {
        self.frames += 1;
    }
}
