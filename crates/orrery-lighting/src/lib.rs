//! Per-frame light parameters for the Phong-style scene shader.
//!
//! The core only decides where lights are and what constants they carry;
//! the shading math lives with the renderer. [`LightSet::around_star`]
//! builds the complete set for one frame.

mod directional;
mod light_set;
mod point;
mod spot;

pub use directional::{DirectionalLight, DirectionalLightUniform};
pub use light_set::{
    LightSet, MATERIAL_SHININESS, SECONDARY_LIGHT_COUNT, SECONDARY_RING_RADIUS,
    secondary_light_offset,
};
pub use point::{PointLight, PointLightGpu};
pub use spot::{SpotLight, SpotLightUniform};
