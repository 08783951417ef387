//! Interleaved vertex format for the sphere mesh.
//!
//! ## Attribute Packing
//!
//! | Location | Offset | Components | Field    |
//! |----------|--------|------------|----------|
//! | 0        | 0      | 3 × f32    | position |
//! | 1        | 12     | 3 × f32    | normal   |
//! | 2        | 24     | 2 × f32    | uv       |

use std::mem;

use glam::Vec3;

/// One sphere vertex: position, outward normal, and texture coordinate.
///
/// `#[repr(C)]` and `Pod` so a vertex slice can be uploaded to a GPU buffer
/// as raw bytes without conversion.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SphereVertex {
    /// Object-space position.
    pub position: [f32; 3],
    /// Unit normal pointing away from the sphere center.
    pub normal: [f32; 3],
    /// Texture coordinate, both components in `[0, 1]`.
    pub uv: [f32; 2],
}

static_assertions::assert_eq_size!(SphereVertex, [f32; 8]);

impl SphereVertex {
    /// Number of `f32` values per vertex in the interleaved layout.
    pub const FLOATS: usize = 8;

    /// Position as a glam vector.
    pub fn position(&self) -> Vec3 {
        Vec3::from_array(self.position)
    }

    /// Normal as a glam vector.
    pub fn normal(&self) -> Vec3 {
        Vec3::from_array(self.normal)
    }
}

/// A single attribute within the interleaved vertex stride.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VertexAttributeDesc {
    /// Shader input location.
    pub location: u32,
    /// Byte offset from the start of the vertex.
    pub offset: u64,
    /// Number of `f32` components.
    pub components: u32,
}

/// Buffer layout a renderer needs to bind [`SphereVertex`] data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VertexLayout {
    /// Bytes between consecutive vertices.
    pub stride: u64,
    /// Position, normal, uv in location order.
    pub attributes: [VertexAttributeDesc; 3],
}

const F32: u64 = mem::size_of::<f32>() as u64;

/// The canonical layout for [`SphereVertex`].
pub const fn vertex_layout() -> VertexLayout {
    VertexLayout {
        stride: mem::size_of::<SphereVertex>() as u64,
        attributes: [
            VertexAttributeDesc {
                location: 0,
                offset: 0,
                components: 3,
            },
            VertexAttributeDesc {
                location: 1,
                offset: 3 * F32,
                components: 3,
            },
            VertexAttributeDesc {
                location: 2,
                offset: 6 * F32,
                components: 2,
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_covers_whole_stride() {
        let layout = vertex_layout();
        assert_eq!(layout.stride, 32);
        let last = layout.attributes[2];
        assert_eq!(last.offset + u64::from(last.components) * F32, layout.stride);
    }

    #[test]
    fn test_offsets_match_field_order() {
        let v = SphereVertex {
            position: [1.0, 2.0, 3.0],
            normal: [4.0, 5.0, 6.0],
            uv: [7.0, 8.0],
        };
        let floats: &[f32] = bytemuck::cast_slice(std::slice::from_ref(&v));
        for attr in vertex_layout().attributes {
            let first = (attr.offset / F32) as usize;
            assert_eq!(floats[first], [1.0, 4.0, 7.0][attr.location as usize]);
        }
    }
}
