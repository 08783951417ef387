//! Orbit camera locked onto one body.

use glam::{Vec2, Vec3};
use orrery_space::BodyId;

use crate::free_fly::{MAX_FOV_DEG, MIN_FOV_DEG};
use crate::projection::{CameraView, DEFAULT_FOV_DEG};

/// Orbit elevation limit in degrees, either side of the horizon.
pub const PITCH_LIMIT_DEG: f32 = 89.0;
/// Closest orbit distance, before the size padding.
pub const MIN_DISTANCE: f32 = 0.5;
/// Farthest orbit distance, before the size padding.
pub const MAX_DISTANCE: f32 = 30.0;

/// Extra distance per unit of target size, so large bodies do not fill
/// the screen.
const SIZE_PADDING: f32 = 4.0;

/// Orbit camera around [`target`](Self::target).
///
/// Angles are in degrees. Yaw 0 / pitch 0 puts the eye on the target's +Z
/// side; positive pitch raises it.
#[derive(Debug, Clone, PartialEq)]
pub struct FollowCamera {
    /// Followed body. Never the central star unless the roster has nothing else.
    pub target: BodyId,
    /// Azimuth in degrees, unbounded.
    pub orbit_yaw: f32,
    /// Elevation in degrees, within `±PITCH_LIMIT_DEG`.
    pub orbit_pitch: f32,
    /// Distance from the target surface region, within `[MIN_DISTANCE, MAX_DISTANCE]`.
    pub orbit_distance: f32,
    /// Degrees per pixel of pointer motion.
    pub sensitivity: f32,
    /// Distance change per wheel notch.
    pub zoom_step: f32,
    /// Vertical field of view in degrees. The wheel changes distance here,
    /// so this only carries the free camera's zoom across mode switches.
    pub fov: f32,
}

impl FollowCamera {
    /// Follow `target` with the default orbit. A target outside
    /// `1..=cyclable_count` is folded back into that range.
    pub fn new(target: BodyId, cyclable_count: usize, sensitivity: f32, zoom_step: f32) -> Self {
        Self {
            target: fold_target(target, cyclable_count),
            orbit_yaw: 0.0,
            orbit_pitch: 20.0,
            orbit_distance: 3.0,
            sensitivity,
            zoom_step,
            fov: DEFAULT_FOV_DEG,
        }
    }

    /// Same camera with field of view `fov`, clamped to the free-camera range.
    #[must_use]
    pub fn with_fov(mut self, fov: f32) -> Self {
        if fov.is_finite() {
            self.fov = fov.clamp(MIN_FOV_DEG, MAX_FOV_DEG);
        }
        self
    }

    /// Orbit by a pointer delta in pixels (y down). Non-finite input is dropped.
    pub fn look(&mut self, delta: Vec2) {
        if !delta.is_finite() {
            return;
        }
        self.orbit_yaw += delta.x * self.sensitivity;
        self.orbit_pitch = (self.orbit_pitch - delta.y * self.sensitivity)
            .clamp(-PITCH_LIMIT_DEG, PITCH_LIMIT_DEG);
    }

    /// Move closer for positive `scroll`, farther for negative.
    pub fn zoom(&mut self, scroll: f32) {
        if !scroll.is_finite() {
            return;
        }
        self.orbit_distance =
            (self.orbit_distance - scroll * self.zoom_step).clamp(MIN_DISTANCE, MAX_DISTANCE);
    }

    /// Eye position for a target at `target_position` with scale `target_size`.
    ///
    /// Pitch is clamped again here, since the fields are public.
    pub fn eye(&self, target_position: Vec3, target_size: f32) -> Vec3 {
        let d = self.orbit_distance + SIZE_PADDING * target_size;
        let pitch = self.orbit_pitch.clamp(-PITCH_LIMIT_DEG, PITCH_LIMIT_DEG);
        let (sin_yaw, cos_yaw) = self.orbit_yaw.to_radians().sin_cos();
        let (sin_pitch, cos_pitch) = pitch.to_radians().sin_cos();
        target_position + Vec3::new(d * cos_pitch * sin_yaw, d * sin_pitch, d * cos_pitch * cos_yaw)
    }

    /// Look at the target from the orbit position.
    pub fn view(&self, target_position: Vec3, target_size: f32) -> CameraView {
        let eye = self.eye(target_position, target_size);
        CameraView {
            eye,
            front: (target_position - eye).normalize_or(Vec3::NEG_Z),
            up: Vec3::Y,
            fov_deg: self.fov,
        }
    }
}

/// Fold an arbitrary index into `1..=cyclable_count`.
fn fold_target(target: BodyId, cyclable_count: usize) -> BodyId {
    if cyclable_count == 0 {
        return BodyId(0);
    }
    let i = target.index();
    if (1..=cyclable_count).contains(&i) {
        target
    } else {
        BodyId(i.saturating_sub(1) % cyclable_count + 1)
    }
}

/// The body after `current`, wrapping from the last back to index 1.
pub fn next_target(current: BodyId, cyclable_count: usize) -> BodyId {
    if cyclable_count == 0 {
        return BodyId(0);
    }
    let i = fold_target(current, cyclable_count).index();
    BodyId(i % cyclable_count + 1)
}

/// The body before `current`, wrapping from index 1 to the last.
pub fn previous_target(current: BodyId, cyclable_count: usize) -> BodyId {
    if cyclable_count == 0 {
        return BodyId(0);
    }
    let i = fold_target(current, cyclable_count).index();
    BodyId((i - 1 + cyclable_count - 1) % cyclable_count + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CYCLABLE: usize = 9;

    fn cam() -> FollowCamera {
        FollowCamera::new(BodyId(3), CYCLABLE, 0.15, 0.2)
    }

    #[test]
    fn test_nine_nexts_return_to_start() {
        let mut t = BodyId(3);
        let mut seen = Vec::new();
        for _ in 0..9 {
            t = next_target(t, CYCLABLE);
            seen.push(t.index());
        }
        assert_eq!(t, BodyId(3));
        assert_eq!(seen, vec![4, 5, 6, 7, 8, 9, 1, 2, 3]);
    }

    #[test]
    fn test_previous_wraps_from_first_to_last() {
        assert_eq!(previous_target(BodyId(1), CYCLABLE), BodyId(9));
        assert_eq!(previous_target(BodyId(9), CYCLABLE), BodyId(8));
    }

    #[test]
    fn test_star_is_never_a_cycle_target() {
        for i in 0..=CYCLABLE {
            assert_ne!(next_target(BodyId(i), CYCLABLE), BodyId(0));
            assert_ne!(previous_target(BodyId(i), CYCLABLE), BodyId(0));
        }
    }

    #[test]
    fn test_out_of_range_target_is_folded() {
        assert_eq!(FollowCamera::new(BodyId(0), CYCLABLE, 0.1, 0.2).target, BodyId(1));
        assert_eq!(FollowCamera::new(BodyId(10), CYCLABLE, 0.1, 0.2).target, BodyId(1));
        assert_eq!(FollowCamera::new(BodyId(25), CYCLABLE, 0.1, 0.2).target, BodyId(7));
        assert_eq!(FollowCamera::new(BodyId(5), 0, 0.1, 0.2).target, BodyId(0));
    }

    #[test]
    fn test_pitch_clamped_under_extreme_input() {
        let mut c = cam();
        c.look(Vec2::new(0.0, -1e9));
        assert_eq!(c.orbit_pitch, PITCH_LIMIT_DEG);
        c.look(Vec2::new(0.0, 1e9));
        assert_eq!(c.orbit_pitch, -PITCH_LIMIT_DEG);
    }

    #[test]
    fn test_distance_clamped_under_extreme_input() {
        let mut c = cam();
        c.zoom(1e9);
        assert_eq!(c.orbit_distance, MIN_DISTANCE);
        c.zoom(-1e9);
        assert_eq!(c.orbit_distance, MAX_DISTANCE);
    }

    #[test]
    fn test_non_finite_input_ignored() {
        let mut c = cam();
        let before = c.clone();
        c.look(Vec2::new(f32::NAN, 1.0));
        c.zoom(f32::INFINITY);
        assert_eq!(c, before);
    }

    #[test]
    fn test_mouse_up_raises_orbit() {
        let mut c = cam();
        let before = c.orbit_pitch;
        c.look(Vec2::new(0.0, -10.0));
        assert!(c.orbit_pitch > before);
    }

    #[test]
    fn test_default_eye_offset() {
        let c = cam();
        let size = 0.125;
        let eye = c.eye(Vec3::ZERO, size);
        let d = 3.0 + 4.0 * size;
        let p = 20.0_f32.to_radians();
        assert!((eye - Vec3::new(0.0, d * p.sin(), d * p.cos())).length() < 1e-5);
    }

    #[test]
    fn test_out_of_range_pitch_field_clamped_in_eye() {
        let mut c = cam();
        c.orbit_pitch = 400.0;
        let eye = c.eye(Vec3::ZERO, 0.0);
        let limit = PITCH_LIMIT_DEG.to_radians();
        let expected = Vec3::new(0.0, 3.0 * limit.sin(), 3.0 * limit.cos());
        assert!((eye - expected).length() < 1e-5);
        // The view never flips past the pole.
        assert!(c.view(Vec3::ZERO, 0.0).front.y < 0.0);
    }

    #[test]
    fn test_with_fov_clamps() {
        assert_eq!(cam().with_fov(20.0).fov, 20.0);
        assert_eq!(cam().with_fov(0.0).fov, MIN_FOV_DEG);
        assert_eq!(cam().with_fov(f32::NAN).fov, DEFAULT_FOV_DEG);
    }

    #[test]
    fn test_view_looks_at_target() {
        let c = cam();
        let target = Vec3::new(2.5, 0.0, 0.0);
        let view = c.view(target, 0.125);
        let to_target = (target - view.eye).normalize();
        assert!((view.front - to_target).length() < 1e-5);
        assert_eq!(view.up, Vec3::Y);
        assert_eq!(view.fov_deg, DEFAULT_FOV_DEG);
    }
}
