//! Static grid topology for terrain rendering

use basalt_core::{BasaltError, Result};
use bytemuck::{Pod, Zeroable};

use crate::terrain::TerrainConfig;

/// One terrain vertex, laid out for direct GPU upload
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct TerrainVertex {
    /// World-space position on the XZ plane; elevation is applied by the
    /// renderer from the heightmap.
    pub position: [f32; 3],
    pub tex_coord: [f32; 2],
}

/// Vertex/index topology for a regular grid, two triangles per cell
///
/// Pure topology: generation depends only on the grid dimension and the
/// terrain scales, never on height values. Generated once at terrain
/// construction and static afterwards.
pub struct TriangleList {
    vertices: Vec<TerrainVertex>,
    indices: Vec<u32>,
    size: usize,
}

impl TriangleList {
    /// Generate the topology for a `size` x `size` vertex grid.
    ///
    /// Vertex positions are spaced by `world_scale` on the XZ plane and
    /// texture coordinates span `[0, texture_scale]` across the grid.
    /// A grid smaller than 2x2 has no cells and is an
    /// [`BasaltError::InvalidConfiguration`].
    pub fn new(size: usize, config: &TerrainConfig) -> Result<Self> {
        if size < 2 {
            return Err(BasaltError::InvalidConfiguration(format!(
                "terrain grid needs at least 2x2 vertices, got {size}x{size}"
            )));
        }

        let mut vertices = Vec::with_capacity(size * size);
        for z in 0..size {
            for x in 0..size {
                vertices.push(TerrainVertex {
                    position: [
                        x as f32 * config.world_scale,
                        0.0,
                        z as f32 * config.world_scale,
                    ],
                    tex_coord: [
                        config.texture_scale * x as f32 / (size - 1) as f32,
                        config.texture_scale * z as f32 / (size - 1) as f32,
                    ],
                });
            }
        }

        // Two CCW triangles per cell
        let cells = size - 1;
        let mut indices = Vec::with_capacity(cells * cells * 6);
        for z in 0..cells {
            for x in 0..cells {
                let tl = (z * size + x) as u32;
                let tr = tl + 1;
                let bl = tl + size as u32;
                let br = bl + 1;

                indices.push(tl);
                indices.push(bl);
                indices.push(br);

                indices.push(tl);
                indices.push(br);
                indices.push(tr);
            }
        }

        Ok(Self {
            vertices,
            indices,
            size,
        })
    }

    pub fn vertices(&self) -> &[TerrainVertex] {
        &self.vertices
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Grid dimension in vertices along each axis
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}
