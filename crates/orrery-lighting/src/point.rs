//! Point light: a positioned source with constant/linear/quadratic falloff.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

/// CPU-side point light descriptor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointLight {
    /// World position.
    pub position: Vec3,
    /// Ambient contribution (linear RGB).
    pub ambient: Vec3,
    /// Diffuse contribution (linear RGB).
    pub diffuse: Vec3,
    /// Specular contribution (linear RGB).
    pub specular: Vec3,
    /// Constant attenuation term.
    pub constant: f32,
    /// Linear attenuation term.
    pub linear: f32,
    /// Quadratic attenuation term.
    pub quadratic: f32,
}

impl PointLight {
    /// Attenuation factor at `distance`: `1 / (c + l·d + q·d²)`.
    pub fn attenuation(&self, distance: f32) -> f32 {
        let denom = self.constant + self.linear * distance + self.quadratic * distance * distance;
        if denom <= 0.0 { 0.0 } else { 1.0 / denom }
    }

    /// Pack for a std140 uniform array.
    pub fn to_gpu(&self) -> PointLightGpu {
        PointLightGpu {
            position_constant: self.position.extend(self.constant).to_array(),
            ambient_linear: self.ambient.extend(self.linear).to_array(),
            diffuse_quadratic: self.diffuse.extend(self.quadratic).to_array(),
            specular: self.specular.extend(0.0).to_array(),
        }
    }
}

/// GPU-side point light, 64 bytes, std140-compatible.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct PointLightGpu {
    /// xyz = position, w = constant term.
    pub position_constant: [f32; 4],
    /// xyz = ambient, w = linear term.
    pub ambient_linear: [f32; 4],
    /// xyz = diffuse, w = quadratic term.
    pub diffuse_quadratic: [f32; 4],
    /// xyz = specular, w = padding.
    pub specular: [f32; 4],
}

static_assertions::assert_eq_size!(PointLightGpu, [f32; 16]);
