//! Renderer-facing stream contract.
//!
//! The static mesh is bound at slot 0 (locations 0..=2) and the per-frame
//! displacement stream at slot 1 (location 3). Both advance per vertex, so
//! the two arrays must stay index-aligned.

use crate::error::{OceanError, Result};
use crate::ocean::{Displacement, GridVertex};

/// Vertex buffer slot of the static position/color/UV stream
pub const MESH_STREAM_SLOT: u32 = 0;

/// Vertex buffer slot of the displacement stream
pub const DISPLACEMENT_STREAM_SLOT: u32 = 1;

const MESH_ATTRIBUTES: [wgpu::VertexAttribute; 3] =
    wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3, 2 => Float32x2];

const DISPLACEMENT_ATTRIBUTES: [wgpu::VertexAttribute; 1] =
    wgpu::vertex_attr_array![3 => Float32x3];

impl GridVertex {
    /// Layout of the static stream: position @0, color @1, uv @2
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<GridVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &MESH_ATTRIBUTES,
        }
    }
}

impl Displacement {
    /// Layout of the displacement stream: offset @3
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Displacement>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &DISPLACEMENT_ATTRIBUTES,
        }
    }
}

/// Both stream layouts in slot order, ready for a pipeline descriptor
pub fn stream_layouts() -> [wgpu::VertexBufferLayout<'static>; 2] {
    [GridVertex::layout(), Displacement::layout()]
}

/// Fail unless every vertex has exactly one displacement
pub fn check_stream_alignment(vertices: &[GridVertex], displacements: &[Displacement]) -> Result<()> {
    if vertices.len() != displacements.len() {
        return Err(OceanError::StreamMismatch {
            vertices: vertices.len(),
            displacements: displacements.len(),
        });
    }
    Ok(())
}

/// Bytes for one frame's displacement upload, after checking alignment
pub fn displacement_bytes<'a>(
    vertices: &[GridVertex],
    displacements: &'a [Displacement],
) -> Result<&'a [u8]> {
    check_stream_alignment(vertices, displacements)?;
    Ok(bytemuck::cast_slice(displacements))
}

/// Bytes for the one-time static mesh upload (vertices, indices)
pub fn mesh_bytes<'a>(vertices: &'a [GridVertex], indices: &'a [u32]) -> (&'a [u8], &'a [u8]) {
    (bytemuck::cast_slice(vertices), bytemuck::cast_slice(indices))
}
