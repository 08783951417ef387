//! Orchestrator errors.

use orrery_mesh::MeshError;
use orrery_space::SpaceError;

/// Building or presenting a frame failed.
#[derive(Debug, thiserror::Error)]
pub enum SimError {
    /// The shared sphere could not be generated.
    #[error("mesh generation failed: {0}")]
    Mesh(#[from] MeshError),

    /// The roster or belt parameters were rejected.
    #[error("scene setup failed: {0}")]
    Space(#[from] SpaceError),

    /// The frame consumer reported a failure.
    #[error("frame sink failed: {0}")]
    Sink(#[source] Box<dyn std::error::Error + Send + Sync>),
}
