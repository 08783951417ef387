//! Mesh generation error types.

/// Errors returned when sphere parameters would produce degenerate geometry.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MeshError {
    /// Radius was zero, negative, or not a finite number.
    #[error("sphere radius must be finite and positive, got {0}")]
    InvalidRadius(f32),

    /// Too few longitude divisions to enclose any volume.
    #[error("sector count must be at least {min}, got {got}")]
    TooFewSectors {
        /// Value that was supplied.
        got: u32,
        /// Smallest accepted value.
        min: u32,
    },

    /// Too few latitude divisions to produce a single non-pole row.
    #[error("stack count must be at least {min}, got {got}")]
    TooFewStacks {
        /// Value that was supplied.
        got: u32,
        /// Smallest accepted value.
        min: u32,
    },

    /// Requested tessellation does not fit in 32-bit indices.
    #[error("sphere with {sectors}x{stacks} divisions exceeds u32 index range")]
    IndexOverflow {
        /// Longitude divisions.
        sectors: u32,
        /// Latitude divisions.
        stacks: u32,
    },
}
