//! Directional light. The scene keeps one in the shader interface but
//! leaves it dark; all visible light comes from the star.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

/// CPU-side directional light description.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DirectionalLight {
    /// Normalized direction the light travels in.
    pub direction: Vec3,
    /// Ambient contribution.
    pub ambient: Vec3,
    /// Diffuse contribution.
    pub diffuse: Vec3,
    /// Specular contribution.
    pub specular: Vec3,
}

impl DirectionalLight {
    /// A light with the given direction and all color terms zeroed.
    pub fn disabled(direction: Vec3) -> Self {
        Self {
            direction: direction.normalize_or_zero(),
            ambient: Vec3::ZERO,
            diffuse: Vec3::ZERO,
            specular: Vec3::ZERO,
        }
    }

    /// Whether the light contributes anything.
    pub fn is_enabled(&self) -> bool {
        self.ambient != Vec3::ZERO || self.diffuse != Vec3::ZERO || self.specular != Vec3::ZERO
    }

    /// Build the GPU-side uniform.
    pub fn to_uniform(&self) -> DirectionalLightUniform {
        DirectionalLightUniform {
            direction: self.direction.extend(0.0).to_array(),
            ambient: self.ambient.extend(0.0).to_array(),
            diffuse: self.diffuse.extend(0.0).to_array(),
            specular: self.specular.extend(0.0).to_array(),
        }
    }
}

impl Default for DirectionalLight {
    fn default() -> Self {
        Self::disabled(Vec3::new(-0.2, -1.0, -0.3))
    }
}

/// GPU-side representation, 64 bytes, std140-compatible.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct DirectionalLightUniform {
    /// xyz = direction.
    pub direction: [f32; 4],
    /// xyz = ambient.
    pub ambient: [f32; 4],
    /// xyz = diffuse.
    pub diffuse: [f32; 4],
    /// xyz = specular.
    pub specular: [f32; 4],
}

static_assertions::assert_eq_size!(DirectionalLightUniform, [f32; 16]);
