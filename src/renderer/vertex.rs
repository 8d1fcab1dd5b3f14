//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
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

/// Colors for game elements
pub mod colors {
    pub const BACKGROUND: [f32; 4] = [0.067, 0.094, 0.153, 1.0];
    pub const TRACK_LINE: [f32; 4] = [0.549, 0.627, 1.0, 0.12];
    pub const TRACK_BORDER: [f32; 4] = [0.353, 0.431, 0.627, 0.5];
    pub const FINISH_BAND: [f32; 4] = [1.0, 1.0, 1.0, 0.2];
    pub const FINISH_GOLD: [f32; 4] = [0.98, 0.8, 0.082, 1.0];
    pub const PLAYER: [f32; 4] = [0.486, 0.961, 1.0, 1.0];
    pub const UPGRADE: [f32; 4] = [0.553, 1.0, 0.569, 1.0];
    pub const OBSTACLE: [f32; 4] = [1.0, 0.42, 0.478, 1.0];
}
