//! Mutable simulation state owned by the orchestrator.

use orrery_camera::{CameraContext, CameraEvent, CameraSettings, CameraState, FreeFlyCamera};
use orrery_input::ActionState;
use orrery_space::{BodyId, BodyRoster, Kinematics};

use crate::clock::FrameClock;

/// Everything that changes from frame to frame.
#[derive(Debug, Clone)]
pub struct SimulationState {
    /// Fixed bodies.
    pub roster: BodyRoster,
    /// Positions and angles for the current time.
    pub kinematics: Kinematics,
    /// Active camera.
    pub camera: CameraState,
    /// Previous and current input, for edges.
    pub actions: ActionState,
    /// Frame deltas and simulation time.
    pub clock: FrameClock,
    /// Camera tunables.
    pub camera_settings: CameraSettings,
}

impl SimulationState {
    /// Fresh state at `t = 0`, following `start_body`.
    pub fn new(roster: BodyRoster, start_body: BodyId, camera_settings: CameraSettings) -> Self {
        let kinematics = Kinematics::new(&roster);
        let camera =
            CameraState::following(start_body, roster.cyclable_count(), &camera_settings);
        Self {
            roster,
            kinematics,
            camera,
            actions: ActionState::new(),
            clock: FrameClock::new(),
            camera_settings,
        }
    }

    /// Scene data borrowed for a camera update.
    pub fn camera_context(&self) -> CameraContext<'_> {
        CameraContext {
            roster: &self.roster,
            kinematics: &self.kinematics,
            settings: &self.camera_settings,
        }
    }

    /// Feed one event through the camera state machine.
    pub fn apply_camera_event(&mut self, event: CameraEvent) {
        let ctx = CameraContext {
            roster: &self.roster,
            kinematics: &self.kinematics,
            settings: &self.camera_settings,
        };
        let current =
            std::mem::replace(&mut self.camera, CameraState::Free(FreeFlyCamera::default()));
        self.camera = current.transition(event, &ctx);
    }
}
