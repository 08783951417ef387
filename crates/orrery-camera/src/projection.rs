//! View and projection matrices.

use glam::{Mat4, Vec3};

/// Starting field of view in both modes, and the widest free-fly FOV.
pub const DEFAULT_FOV_DEG: f32 = 45.0;

/// Where the eye is and which way it looks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraView {
    /// Eye position.
    pub eye: Vec3,
    /// Unit view direction.
    pub front: Vec3,
    /// Unit up vector.
    pub up: Vec3,
    /// Vertical field of view in degrees.
    pub fov_deg: f32,
}

impl CameraView {
    /// Right-handed look-at matrix toward `eye + front`.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.eye + self.front, self.up)
    }
}

/// Perspective parameters that do not depend on the camera mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Width / height.
    pub aspect_ratio: f32,
    /// Near clip distance.
    pub near: f32,
    /// Far clip distance.
    pub far: f32,
}

impl Default for Projection {
    fn default() -> Self {
        Self {
            aspect_ratio: 1280.0 / 720.0,
            near: 0.1,
            far: 250.0,
        }
    }
}

impl Projection {
    /// Projection for a `width` x `height` viewport. A zero height falls
    /// back to a square aspect.
    pub fn for_viewport(width: u32, height: u32, near: f32, far: f32) -> Self {
        let aspect_ratio = if height == 0 {
            1.0
        } else {
            width as f32 / height as f32
        };
        Self {
            aspect_ratio,
            near,
            far,
        }
    }

    /// Right-handed perspective matrix, OpenGL depth range.
    pub fn matrix(&self, fov_deg: f32) -> Mat4 {
        Mat4::perspective_rh_gl(fov_deg.to_radians(), self.aspect_ratio, self.near, self.far)
    }
}
