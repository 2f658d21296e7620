//! Letterboxed mapping between game pixels and the surface
//!
//! The play field keeps its 900x600 aspect; leftover space becomes bars.

use glam::Vec2;

use super::vertex::Vertex;
use crate::consts::{HEIGHT, WIDTH};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Surface size in physical pixels
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width.max(1) as f32,
            height: height.max(1) as f32,
        }
    }

    /// Game pixels -> surface pixels
    pub fn scale(&self) -> f32 {
        (self.width / WIDTH).min(self.height / HEIGHT)
    }

    /// Top-left of the play field on the surface
    pub fn offset(&self) -> Vec2 {
        let s = self.scale();
        Vec2::new((self.width - WIDTH * s) / 2.0, (self.height - HEIGHT * s) / 2.0)
    }

    /// Game pixel (y down) to normalized device coordinates (y up)
    pub fn to_ndc(&self, x: f32, y: f32) -> (f32, f32) {
        let s = self.scale();
        let o = self.offset();
        let sx = o.x + x * s;
        let sy = o.y + y * s;
        (sx / self.width * 2.0 - 1.0, 1.0 - sy / self.height * 2.0)
    }

    /// Scene vertices in game pixels, ready for the pipeline
    pub fn project(&self, scene: &[Vertex]) -> Vec<Vertex> {
        scene
            .iter()
            .map(|v| {
                let (x, y) = self.to_ndc(v.position[0], v.position[1]);
                Vertex::new(x, y, v.color)
            })
            .collect()
    }

    /// Pointer position in CSS pixels to game pixels; `None` on the bars
    pub fn from_client(&self, x: f32, y: f32, client_w: f32, client_h: f32) -> Option<Vec2> {
        if client_w <= 0.0 || client_h <= 0.0 {
            return None;
        }
        let px = x * self.width / client_w;
        let py = y * self.height / client_h;
        let p = (Vec2::new(px, py) - self.offset()) / self.scale();
        let inside = (0.0..=WIDTH).contains(&p.x) && (0.0..=HEIGHT).contains(&p.y);
        inside.then_some(p)
    }
}
