//! Frame orchestration: advances time, drives kinematics and the camera
//! from sampled input, and assembles the data a renderer needs to draw one
//! frame.

pub mod clock;
mod error;
pub mod frame;
pub mod orchestrator;
pub mod sink;
pub mod state;

pub use clock::{FrameClock, FrameTime, MAX_FRAME_DT, ManualClock, TimeSource, WallClock};
pub use error::SimError;
pub use frame::{DrawCommand, DrawKind, FrameOutput, LIGHT_MARKER_SCALE};
pub use orchestrator::{Orchestrator, SimParams};
pub use sink::{FrameSink, TracingSink};
pub use state::SimulationState;
