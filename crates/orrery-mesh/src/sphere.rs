//! UV-sphere mesh generation.

use std::f32::consts::{FRAC_PI_2, PI, TAU};

use tracing::debug;

use crate::error::MeshError;
use crate::vertex::SphereVertex;

/// Fewest longitude divisions that still enclose a volume.
pub const MIN_SECTOR_COUNT: u32 = 3;
/// Fewest latitude divisions that leave one ring between the poles.
pub const MIN_STACK_COUNT: u32 = 2;

/// Immutable sphere geometry: interleaved vertices and triangle indices.
///
/// Vertices are laid out ring by ring from the north pole (`+Y`) to the
/// south pole, `sector_count + 1` per ring. The first and last column of each
/// ring share a position but carry different `s` coordinates so the texture
/// seam closes cleanly.
#[derive(Clone, Debug, PartialEq)]
pub struct SphereMesh {
    radius: f32,
    sector_count: u32,
    stack_count: u32,
    vertices: Vec<SphereVertex>,
    indices: Vec<u32>,
}

impl SphereMesh {
    /// Generate a sphere of the given radius.
    ///
    /// `sector_count` is the number of longitude slices, `stack_count` the
    /// number of latitude bands. The rows touching each pole emit one
    /// triangle per quad instead of two, since the pole row collapses to a
    /// single point and the second triangle would have zero area.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError`] when the radius is not finite and positive,
    /// when either division count is below its minimum, or when the vertex
    /// count would not fit in `u32` indices.
    pub fn generate(radius: f32, sector_count: u32, stack_count: u32) -> Result<Self, MeshError> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(MeshError::InvalidRadius(radius));
        }
        if sector_count < MIN_SECTOR_COUNT {
            return Err(MeshError::TooFewSectors {
                got: sector_count,
                min: MIN_SECTOR_COUNT,
            });
        }
        if stack_count < MIN_STACK_COUNT {
            return Err(MeshError::TooFewStacks {
                got: stack_count,
                min: MIN_STACK_COUNT,
            });
        }
        let vertex_count = (u64::from(sector_count) + 1).checked_mul(u64::from(stack_count) + 1);
        if vertex_count.is_none_or(|n| n > u64::from(u32::MAX)) {
            return Err(MeshError::IndexOverflow {
                sectors: sector_count,
                stacks: stack_count,
            });
        }

        let vertices = build_vertices(radius, sector_count, stack_count);
        let indices = build_indices(sector_count, stack_count);

        debug!(
            radius,
            sector_count,
            stack_count,
            vertices = vertices.len(),
            triangles = indices.len() / 3,
            "generated sphere mesh"
        );

        Ok(Self {
            radius,
            sector_count,
            stack_count,
            vertices,
            indices,
        })
    }

    /// Radius the mesh was generated with.
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Longitude divisions.
    pub fn sector_count(&self) -> u32 {
        self.sector_count
    }

    /// Latitude divisions.
    pub fn stack_count(&self) -> u32 {
        self.stack_count
    }

    /// All vertices in ring order.
    pub fn vertices(&self) -> &[SphereVertex] {
        &self.vertices
    }

    /// Triangle list indices, three per triangle, counter-clockwise seen from outside.
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of indices (three per triangle).
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    /// Number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Interleaved vertex data as `f32`s, eight per vertex.
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Vertex buffer contents as raw bytes.
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Index buffer contents as raw bytes.
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }

    /// Iterate triangles as index triples.
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }
}

fn build_vertices(radius: f32, sector_count: u32, stack_count: u32) -> Vec<SphereVertex> {
    let sector_step = TAU / sector_count as f32;
    let stack_step = PI / stack_count as f32;
    let inv_radius = 1.0 / radius;

    let mut vertices =
        Vec::with_capacity(((sector_count + 1) * (stack_count + 1)) as usize);

    for i in 0..=stack_count {
        // +90° at the north pole down to -90° at the south pole.
        let stack_angle = FRAC_PI_2 - i as f32 * stack_step;
        let xy = radius * stack_angle.cos();
        let y = radius * stack_angle.sin();

        for j in 0..=sector_count {
            let sector_angle = j as f32 * sector_step;
            let x = xy * sector_angle.cos();
            let z = xy * sector_angle.sin();

            vertices.push(SphereVertex {
                position: [x, y, z],
                normal: [x * inv_radius, y * inv_radius, z * inv_radius],
                uv: [
                    1.0 - j as f32 / sector_count as f32,
                    1.0 - i as f32 / stack_count as f32,
                ],
            });
        }
    }

    vertices
}

fn build_indices(sector_count: u32, stack_count: u32) -> Vec<u32> {
    let triangles = 2 * sector_count as usize * (stack_count as usize - 1);
    let mut indices = Vec::with_capacity(triangles * 3);

    for i in 0..stack_count {
        let mut k1 = i * (sector_count + 1);
        let mut k2 = k1 + sector_count + 1;

        for _ in 0..sector_count {
            if i != 0 {
                indices.extend_from_slice(&[k1, k1 + 1, k2]);
            }
            if i != stack_count - 1 {
                indices.extend_from_slice(&[k1 + 1, k2 + 1, k2]);
            }
            k1 += 1;
            k2 += 1;
        }
    }

    indices
}
