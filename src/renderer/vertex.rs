//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Colors for game elements (sRGB, converted in the shader)
pub mod colors {
    const fn rgb(r: u8, g: u8, b: u8) -> [f32; 4] {
        [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0]
    }

    pub const BACKGROUND: [f32; 4] = rgb(26, 34, 52);
    pub const WATER: [f32; 4] = rgb(55, 105, 150);
    pub const DOCK: [f32; 4] = rgb(85, 60, 40);
    pub const DOCK_PLANK: [f32; 4] = rgb(70, 48, 30);
    pub const PANEL: [f32; 4] = rgb(20, 22, 28);
    pub const CHECK: [f32; 4] = rgb(105, 215, 120);
    pub const CHECKBOX: [f32; 4] = rgb(40, 40, 50);
    pub const CHECKBOX_LOCKED: [f32; 4] = rgb(60, 60, 66);
    pub const HULL: [f32; 4] = rgb(120, 70, 30);
    pub const MAST: [f32; 4] = rgb(90, 60, 35);
    pub const SAIL: [f32; 4] = rgb(235, 230, 215);
    pub const CRATE: [f32; 4] = rgb(195, 170, 110);
    pub const CRATE_EDGE: [f32; 4] = rgb(120, 100, 60);
    pub const PLAYER: [f32; 4] = rgb(200, 200, 200);
    pub const PASSENGER: [f32; 4] = rgb(255, 220, 180);
    /// End-of-round dim (black at 170/255)
    pub const OVERLAY: [f32; 4] = [0.0, 0.0, 0.0, 170.0 / 255.0];
}
