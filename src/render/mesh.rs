use bytemuck::{Pod, Zeroable};
use glam::IVec3;

use super::texture::TextureDescriptor;
use crate::utils::math::cube_vertices;

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct QuadVertex {
    pub position: [f32; 3],
    pub tex_coord: [f32; 2],
}

/// Six textured quads, four vertices each, making up one unit cube.
pub type BlockQuads = [QuadVertex; 24];

pub fn block_quads(position: IVec3, descriptor: &TextureDescriptor) -> BlockQuads {
    let vertices = cube_vertices(position.as_vec3(), 0.5);
    let mut quads = [QuadVertex::zeroed(); 24];
    for ((quad, vertex), uv) in quads.iter_mut().zip(vertices).zip(descriptor.tex_coords()) {
        *quad = QuadVertex {
            position: vertex.to_array(),
            tex_coord: uv.to_array(),
        };
    }
    quads
}
