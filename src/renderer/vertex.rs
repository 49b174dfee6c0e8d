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

/// Colors for game elements (sRGB, straight alpha)
pub mod colors {
    /// Opaque color from a 0xRRGGBB literal
    pub const fn rgb(hex: u32) -> [f32; 4] {
        rgba(hex, 1.0)
    }

    pub const fn rgba(hex: u32, alpha: f32) -> [f32; 4] {
        [
            ((hex >> 16) & 0xFF) as f32 / 255.0,
            ((hex >> 8) & 0xFF) as f32 / 255.0,
            (hex & 0xFF) as f32 / 255.0,
            alpha,
        ]
    }

    pub const SKY_TOP: [f32; 4] = rgb(0xAADBEA);
    pub const SKY_BOTTOM: [f32; 4] = rgb(0xFEF1E1);
    pub const HILL: [f32; 4] = rgb(0x26532B);
    pub const BACKGROUND_TRUNK: [f32; 4] = rgb(0x7D833C);
    pub const TRUNK: [f32; 4] = rgb(0x885F37);
    pub const CART: [f32; 4] = rgb(0xF08080);
    pub const ENVELOPE: [f32; 4] = rgb(0xAD7953);
    pub const EYE: [f32; 4] = rgb(0x000000);
    pub const MOUTH: [f32; 4] = rgb(0xFFFFFF);
    pub const FEET: [f32; 4] = rgb(0x000000);
    pub const FUEL_OUTLINE: [f32; 4] = rgb(0xFFFFFF);
    pub const FUEL_WARNING: [f32; 4] = rgb(0xFF0000);
    pub const FUEL_FILL: [f32; 4] = rgba(0x3296C8, 0.5);
    pub const FUEL_FILL_LOW: [f32; 4] = rgba(0xFF0000, 0.5);
}

#[cfg(test)]
mod tests {
    use super::colors::*;

    #[test]
    fn test_hex_colors() {
        assert_eq!(rgb(0xFF0000), [1.0, 0.0, 0.0, 1.0]);
        assert_eq!(rgba(0x0000FF, 0.5), [0.0, 0.0, 1.0, 0.5]);
        assert!((SKY_TOP[0] - 170.0 / 255.0).abs() < 1e-6);
    }
}
