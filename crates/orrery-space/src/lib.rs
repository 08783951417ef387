//! Celestial bodies, circular-orbit kinematics, and the decorative asteroid belt.
//!
//! Bodies live in a fixed [`BodyRoster`] built once at startup. Every frame,
//! [`Kinematics::update`] derives each body's orbit angle, spin angle, and
//! world position from the simulation time alone, resolving parents before
//! children. The [`AsteroidField`] is generated once from a seeded RNG and
//! never changes afterwards.

pub mod asteroid_field;
pub mod body;
mod error;
pub mod kinematics;
pub mod roster;

pub use asteroid_field::{AsteroidField, AsteroidInstance, BeltParams};
pub use body::{BodyId, CelestialBody, TextureSlot};
pub use error::SpaceError;
pub use kinematics::{BodyState, Kinematics, compute_position, orbit_angle, rotation_angle};
pub use roster::BodyRoster;
