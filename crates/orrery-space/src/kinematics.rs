//! Circular-orbit kinematics.
//!
//! Every quantity here is a pure function of simulation time. Nothing is
//! integrated frame to frame, so evaluating the same time twice gives the
//! same answer no matter what was evaluated in between.

use std::f64::consts::TAU;

use glam::{Mat4, Quat, Vec3};

use crate::body::{BodyId, CelestialBody};
use crate::roster::BodyRoster;

/// Orbit angle in radians at time `t` seconds, wrapped to `[0, 2π)`.
pub fn orbit_angle(body: &CelestialBody, t: f64) -> f32 {
    (t * f64::from(body.orbit_angular_speed)).rem_euclid(TAU) as f32
}

/// Spin angle about the vertical axis at time `t`, wrapped to `[0, 2π)`.
pub fn rotation_angle(body: &CelestialBody, t: f64) -> f32 {
    (t * f64::from(body.self_rotation_speed)).rem_euclid(TAU) as f32
}

/// World position of `body` at time `t`, given its parent's resolved
/// position for the same `t` (the origin for top-level bodies).
///
/// A body with zero orbit radius sits exactly on its parent, which is how the
/// central star stays at the origin without a special case.
pub fn compute_position(body: &CelestialBody, t: f64, parent_position: Vec3) -> Vec3 {
    let angle = orbit_angle(body, t);
    parent_position
        + Vec3::new(
            body.orbit_radius * angle.cos(),
            0.0,
            body.orbit_radius * angle.sin(),
        )
}

/// Derived per-frame state of one body.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BodyState {
    /// Current orbit angle in radians.
    pub orbit_angle: f32,
    /// Current spin angle in radians.
    pub rotation_angle: f32,
    /// Resolved world position.
    pub position: Vec3,
}

impl BodyState {
    /// Model transform: translate to the position, spin about +Y, then scale
    /// the unit sphere to `size`.
    pub fn model_matrix(&self, size: f32) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            Vec3::splat(size),
            Quat::from_rotation_y(self.rotation_angle),
            self.position,
        )
    }
}

/// Per-body states for the current simulation time.
#[derive(Clone, Debug)]
pub struct Kinematics {
    time: f64,
    states: Vec<BodyState>,
}

impl Kinematics {
    /// Evaluate every body at `t = 0`.
    pub fn new(roster: &BodyRoster) -> Self {
        let mut kinematics = Self {
            time: 0.0,
            states: vec![BodyState::default(); roster.len()],
        };
        kinematics.update(roster, 0.0);
        kinematics
    }

    /// Recompute every body at `time`, parents before children.
    pub fn update(&mut self, roster: &BodyRoster, time: f64) {
        self.time = time;
        self.states.resize(roster.len(), BodyState::default());

        for &id in roster.update_order() {
            let Some(body) = roster.get(id) else {
                continue;
            };
            let parent_position = body
                .parent
                .and_then(|p| self.states.get(p.index()))
                .map_or(Vec3::ZERO, |s| s.position);

            self.states[id.index()] = BodyState {
                orbit_angle: orbit_angle(body, time),
                rotation_angle: rotation_angle(body, time),
                position: compute_position(body, time, parent_position),
            };
        }
    }

    /// Simulation time of the last update.
    pub fn time(&self) -> f64 {
        self.time
    }

    /// State of one body.
    pub fn state(&self, id: BodyId) -> Option<&BodyState> {
        self.states.get(id.index())
    }

    /// Resolved world position of one body.
    pub fn position(&self, id: BodyId) -> Option<Vec3> {
        self.state(id).map(|s| s.position)
    }

    /// All states, indexed like the roster.
    pub fn states(&self) -> &[BodyState] {
        &self.states
    }
}
