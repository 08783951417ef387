//! Procedural UV-sphere geometry shared by every body in the scene.
//!
//! One [`SphereMesh`] is generated at startup and referenced by every draw
//! command; only the per-draw model transform differs.

mod error;
mod sphere;
mod vertex;

pub use error::MeshError;
pub use sphere::{MIN_SECTOR_COUNT, MIN_STACK_COUNT, SphereMesh};
pub use vertex::{SphereVertex, VertexAttributeDesc, VertexLayout, vertex_layout};
