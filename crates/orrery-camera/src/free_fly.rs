//! Free-fly camera: mouse look, WASD flight, wheel zoom.

use glam::{Vec2, Vec3};
use orrery_space::BodyId;

use crate::projection::{CameraView, DEFAULT_FOV_DEG};

/// Look elevation limit in degrees.
pub const PITCH_LIMIT_DEG: f32 = 89.0;
/// Narrowest field of view in degrees.
pub const MIN_FOV_DEG: f32 = 1.0;
/// Widest field of view in degrees.
pub const MAX_FOV_DEG: f32 = DEFAULT_FOV_DEG;

/// Unconstrained fly-through camera.
///
/// `front`, `right` and `up` are always derived from `yaw` and `pitch`
/// (degrees); call [`look`](Self::look) rather than editing the angles.
#[derive(Debug, Clone, PartialEq)]
pub struct FreeFlyCamera {
    /// Eye position.
    pub position: Vec3,
    /// Unit view direction.
    pub front: Vec3,
    /// Unit up vector.
    pub up: Vec3,
    /// Unit right vector.
    pub right: Vec3,
    /// Heading in degrees. -90 looks down -Z.
    pub yaw: f32,
    /// Elevation in degrees.
    pub pitch: f32,
    /// Vertical field of view in degrees.
    pub fov: f32,
    /// Units per second.
    pub speed: f32,
    /// Degrees per pixel of pointer motion.
    pub sensitivity: f32,
    /// Body that was followed before flying off; cycling resumes from here.
    pub last_target: BodyId,
}

impl FreeFlyCamera {
    /// Camera at `position` facing along `yaw`/`pitch`.
    pub fn new(position: Vec3, yaw: f32, pitch: f32, speed: f32, sensitivity: f32) -> Self {
        let mut camera = Self {
            position,
            front: Vec3::NEG_Z,
            up: Vec3::Y,
            right: Vec3::X,
            yaw,
            pitch: pitch.clamp(-PITCH_LIMIT_DEG, PITCH_LIMIT_DEG),
            fov: DEFAULT_FOV_DEG,
            speed,
            sensitivity,
            last_target: BodyId(0),
        };
        camera.update_vectors();
        camera
    }

    /// Take over from another view, keeping its eye, heading and field of view.
    pub fn from_view(view: &CameraView, speed: f32, sensitivity: f32, last_target: BodyId) -> Self {
        let front = view.front.normalize_or(Vec3::NEG_Z);
        let yaw = front.z.atan2(front.x).to_degrees();
        let pitch = front.y.clamp(-1.0, 1.0).asin().to_degrees();
        let fov = if view.fov_deg.is_finite() {
            view.fov_deg.clamp(MIN_FOV_DEG, MAX_FOV_DEG)
        } else {
            DEFAULT_FOV_DEG
        };
        Self {
            fov,
            last_target,
            ..Self::new(view.eye, yaw, pitch, speed, sensitivity)
        }
    }

    /// Turn by a pointer delta in pixels (y down). Non-finite input is dropped.
    pub fn look(&mut self, delta: Vec2) {
        if !delta.is_finite() {
            return;
        }
        self.yaw += delta.x * self.sensitivity;
        self.pitch =
            (self.pitch - delta.y * self.sensitivity).clamp(-PITCH_LIMIT_DEG, PITCH_LIMIT_DEG);
        self.update_vectors();
    }

    /// Narrow the view for positive `scroll`, widen it for negative.
    pub fn zoom(&mut self, scroll: f32) {
        if !scroll.is_finite() {
            return;
        }
        self.fov = (self.fov - scroll).clamp(MIN_FOV_DEG, MAX_FOV_DEG);
    }

    /// Move along the held directions for `dt` seconds. Each held direction
    /// contributes `speed * dt` on its own axis.
    pub fn fly(&mut self, forward: f32, strafe: f32, dt: f32) {
        if !dt.is_finite() || dt <= 0.0 {
            return;
        }
        let step = self.speed * dt;
        self.position += self.front * forward * step + self.right * strafe * step;
    }

    /// Current view.
    pub fn view(&self) -> CameraView {
        CameraView {
            eye: self.position,
            front: self.front,
            up: self.up,
            fov_deg: self.fov,
        }
    }

    fn update_vectors(&mut self) {
        let (sin_yaw, cos_yaw) = self.yaw.to_radians().sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.to_radians().sin_cos();
        self.front = Vec3::new(cos_yaw * cos_pitch, sin_pitch, sin_yaw * cos_pitch).normalize();
        self.right = self.front.cross(Vec3::Y).normalize();
        self.up = self.right.cross(self.front).normalize();
    }
}

impl Default for FreeFlyCamera {
    /// Above and behind the star, looking down -Z.
    fn default() -> Self {
        Self::new(Vec3::new(0.0, 5.0, 20.0), -90.0, 0.0, 2.5, 0.1)
    }
}
