//! Error types for roster and belt construction.

use crate::body::BodyId;

/// Errors raised while building the body roster or the asteroid belt.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SpaceError {
    /// A roster must contain at least the central body.
    #[error("body roster is empty")]
    EmptyRoster,

    /// A body names a parent index that does not exist.
    #[error("body {body:?} references missing parent {parent:?}")]
    UnknownParent {
        /// The child body.
        body: BodyId,
        /// The parent index it referenced.
        parent: BodyId,
    },

    /// Following parent links from this body never reaches a root.
    #[error("body {0:?} is part of a parent cycle")]
    ParentCycle(BodyId),

    /// Asteroid belt parameters are out of range.
    #[error("invalid asteroid belt: {0}")]
    InvalidBelt(&'static str),
}
