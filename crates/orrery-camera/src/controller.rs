//! Camera state machine.
//!
//! ```text
//!            movement starts
//!   Follow ──────────────────▶ Free
//!     ▲ │                        │
//!     └─┘ next / previous body   │ next / previous body
//!     ▲                          │
//!     └──────────────────────────┘
//! ```
//!
//! Retargeting from Follow keeps the orbit angles and distance; entering
//! Follow from Free starts from the default orbit. The field of view
//! carries over in both directions.

use glam::{Vec2, Vec3};
use orrery_space::{BodyId, BodyRoster, Kinematics};
use tracing::debug;

use crate::follow::{FollowCamera, next_target, previous_target};
use crate::free_fly::FreeFlyCamera;
use crate::projection::CameraView;

/// Tunables shared by both modes.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraSettings {
    /// Follow-mode degrees per pixel.
    pub follow_sensitivity: f32,
    /// Free-mode degrees per pixel.
    pub free_sensitivity: f32,
    /// Follow-mode distance per wheel notch.
    pub zoom_step: f32,
    /// Free-mode flight speed in units per second.
    pub free_speed: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            follow_sensitivity: 0.15,
            free_sensitivity: 0.1,
            zoom_step: 0.2,
            free_speed: 2.5,
        }
    }
}

/// Scene data the camera reads but never changes.
#[derive(Clone, Copy)]
pub struct CameraContext<'a> {
    /// Body list, for sizes and the cyclable count.
    pub roster: &'a BodyRoster,
    /// This frame's resolved positions.
    pub kinematics: &'a Kinematics,
    /// Sensitivities and speeds.
    pub settings: &'a CameraSettings,
}

impl CameraContext<'_> {
    fn target(&self, id: BodyId) -> (Vec3, f32) {
        let position = self.kinematics.position(id).unwrap_or(Vec3::ZERO);
        let size = self.roster.get(id).map_or(0.0, |b| b.size);
        (position, size)
    }
}

/// Held flight directions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveIntent {
    /// Along the view direction.
    pub forward: bool,
    /// Against the view direction.
    pub back: bool,
    /// Against the right vector.
    pub left: bool,
    /// Along the right vector.
    pub right: bool,
}

impl MoveIntent {
    fn axes(self) -> (f32, f32) {
        let axis = |pos: bool, neg: bool| f32::from(u8::from(pos)) - f32::from(u8::from(neg));
        (axis(self.forward, self.back), axis(self.right, self.left))
    }
}

/// Everything that can happen to the camera in a frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CameraEvent {
    /// Follow the next body.
    NextBody,
    /// Follow the previous body.
    PreviousBody,
    /// A flight direction was just pressed.
    MovementStarted,
    /// Pointer motion in pixels, y down.
    Look(Vec2),
    /// Wheel notches.
    Scroll(f32),
    /// Held directions and the frame's duration in seconds.
    Move(MoveIntent, f32),
}

/// The active camera.
#[derive(Debug, Clone, PartialEq)]
pub enum CameraState {
    /// Orbiting a body.
    Follow(FollowCamera),
    /// Flying freely.
    Free(FreeFlyCamera),
}

impl CameraState {
    /// Start by following `target`.
    pub fn following(target: BodyId, cyclable_count: usize, settings: &CameraSettings) -> Self {
        Self::Follow(FollowCamera::new(
            target,
            cyclable_count,
            settings.follow_sensitivity,
            settings.zoom_step,
        ))
    }

    /// Apply one event.
    pub fn transition(self, event: CameraEvent, ctx: &CameraContext<'_>) -> Self {
        let cyclable = ctx.roster.cyclable_count();
        match (self, event) {
            (Self::Follow(mut follow), CameraEvent::NextBody | CameraEvent::PreviousBody) => {
                follow.target = step(follow.target, event, cyclable);
                debug!(target_body = follow.target.index(), "follow camera retargeted");
                Self::Follow(follow)
            }
            (Self::Free(free), CameraEvent::NextBody | CameraEvent::PreviousBody) => {
                let target = step(free.last_target, event, cyclable);
                debug!(target_body = target.index(), "free camera -> follow");
                let follow = FollowCamera::new(
                    target,
                    cyclable,
                    ctx.settings.follow_sensitivity,
                    ctx.settings.zoom_step,
                );
                Self::Follow(follow.with_fov(free.fov))
            }
            (Self::Follow(follow), CameraEvent::MovementStarted) => {
                let (position, size) = ctx.target(follow.target);
                let free = FreeFlyCamera::from_view(
                    &follow.view(position, size),
                    ctx.settings.free_speed,
                    ctx.settings.free_sensitivity,
                    follow.target,
                );
                debug!(eye = ?free.position, "follow camera -> free");
                Self::Free(free)
            }
            (Self::Follow(mut follow), CameraEvent::Look(delta)) => {
                follow.look(delta);
                Self::Follow(follow)
            }
            (Self::Free(mut free), CameraEvent::Look(delta)) => {
                free.look(delta);
                Self::Free(free)
            }
            (Self::Follow(mut follow), CameraEvent::Scroll(scroll)) => {
                follow.zoom(scroll);
                Self::Follow(follow)
            }
            (Self::Free(mut free), CameraEvent::Scroll(scroll)) => {
                free.zoom(scroll);
                Self::Free(free)
            }
            (Self::Free(mut free), CameraEvent::Move(intent, dt)) => {
                let (forward, strafe) = intent.axes();
                free.fly(forward, strafe, dt);
                Self::Free(free)
            }
            (state @ Self::Free(_), CameraEvent::MovementStarted)
            | (state @ Self::Follow(_), CameraEvent::Move(..)) => state,
        }
    }

    /// Current view.
    pub fn view(&self, ctx: &CameraContext<'_>) -> CameraView {
        match self {
            Self::Follow(follow) => {
                let (position, size) = ctx.target(follow.target);
                follow.view(position, size)
            }
            Self::Free(free) => free.view(),
        }
    }

    /// Whether the camera is following a body.
    pub fn is_following(&self) -> bool {
        matches!(self, Self::Follow(_))
    }

    /// The followed body, if any.
    pub fn target(&self) -> Option<BodyId> {
        match self {
            Self::Follow(follow) => Some(follow.target),
            Self::Free(_) => None,
        }
    }
}

fn step(current: BodyId, event: CameraEvent, cyclable: usize) -> BodyId {
    if event == CameraEvent::PreviousBody {
        previous_target(current, cyclable)
    } else {
        next_target(current, cyclable)
    }
}
