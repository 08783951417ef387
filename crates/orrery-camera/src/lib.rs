//! Camera controller: an orbit camera that follows a body, a free-fly camera,
//! and the state machine that switches between them.

pub mod controller;
pub mod follow;
pub mod free_fly;
pub mod projection;

pub use controller::{CameraContext, CameraEvent, CameraSettings, CameraState, MoveIntent};
pub use follow::{FollowCamera, next_target, previous_target};
pub use free_fly::FreeFlyCamera;
pub use projection::{CameraView, Projection};
