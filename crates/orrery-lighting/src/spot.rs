//! Camera-mounted spotlight, present in the shader interface but dark by default.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

/// CPU-side spotlight.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpotLight {
    /// World position (the camera eye).
    pub position: Vec3,
    /// Normalized aim direction (the camera front).
    pub direction: Vec3,
    /// Ambient contribution.
    pub ambient: Vec3,
    /// Diffuse contribution.
    pub diffuse: Vec3,
    /// Specular contribution.
    pub specular: Vec3,
    /// Constant attenuation term.
    pub constant: f32,
    /// Linear attenuation term.
    pub linear: f32,
    /// Quadratic attenuation term.
    pub quadratic: f32,
    /// Cosine of the inner cone half-angle.
    pub cut_off: f32,
    /// Cosine of the outer cone half-angle.
    pub outer_cut_off: f32,
}

impl SpotLight {
    /// A dark spotlight mounted on the camera.
    pub fn headlamp(position: Vec3, direction: Vec3) -> Self {
        Self {
            position,
            direction,
            ambient: Vec3::ZERO,
            diffuse: Vec3::ZERO,
            specular: Vec3::ZERO,
            constant: 1.0,
            linear: 0.09,
            quadratic: 0.032,
            cut_off: 12.5_f32.to_radians().cos(),
            outer_cut_off: 15.0_f32.to_radians().cos(),
        }
    }

    /// Build the GPU-side uniform.
    pub fn to_uniform(&self) -> SpotLightUniform {
        SpotLightUniform {
            position_constant: self.position.extend(self.constant).to_array(),
            direction_linear: self.direction.extend(self.linear).to_array(),
            ambient_quadratic: self.ambient.extend(self.quadratic).to_array(),
            diffuse_cut_off: self.diffuse.extend(self.cut_off).to_array(),
            specular_outer_cut_off: self.specular.extend(self.outer_cut_off).to_array(),
        }
    }
}

/// GPU-side spotlight, 80 bytes, std140-compatible.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct SpotLightUniform {
    /// xyz = position, w = constant term.
    pub position_constant: [f32; 4],
    /// xyz = direction, w = linear term.
    pub direction_linear: [f32; 4],
    /// xyz = ambient, w = quadratic term.
    pub ambient_quadratic: [f32; 4],
    /// xyz = diffuse, w = cos(inner cut-off).
    pub diffuse_cut_off: [f32; 4],
    /// xyz = specular, w = cos(outer cut-off).
    pub specular_outer_cut_off: [f32; 4],
}

static_assertions::assert_eq_size!(SpotLightUniform, [f32; 20]);
