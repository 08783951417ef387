//! The seam between frame assembly and drawing.

use orrery_mesh::SphereMesh;
use tracing::{debug, info};

use crate::error::SimError;
use crate::frame::FrameOutput;

/// Consumes assembled frames. A GPU renderer implements this; so do the
/// logging sink and test recorders.
pub trait FrameSink {
    /// Called once before the first frame with the shared sphere, so the
    /// sink can upload it.
    fn prepare(&mut self, _mesh: &SphereMesh) -> Result<(), SimError> {
        Ok(())
    }

    /// Draw or otherwise consume one frame.
    fn submit(&mut self, frame: &FrameOutput) -> Result<(), SimError>;
}

/// Logs a frame summary at a fixed interval instead of drawing.
#[derive(Debug, Clone)]
pub struct TracingSink {
    every: u64,
    submitted: u64,
}

impl TracingSink {
    /// Log every `every`-th frame (at least every frame).
    pub fn new(every: u64) -> Self {
        Self {
            every: every.max(1),
            submitted: 0,
        }
    }

    /// Frames received so far.
    pub fn submitted(&self) -> u64 {
        self.submitted
    }
}

impl Default for TracingSink {
    /// One summary per second at 60 Hz.
    fn default() -> Self {
        Self::new(60)
    }
}

impl FrameSink for TracingSink {
    fn prepare(&mut self, mesh: &SphereMesh) -> Result<(), SimError> {
        info!(
            vertices = mesh.vertex_count(),
            triangles = mesh.triangle_count(),
            bytes = mesh.vertex_bytes().len() + mesh.index_bytes().len(),
            "shared sphere ready"
        );
        Ok(())
    }

    fn submit(&mut self, frame: &FrameOutput) -> Result<(), SimError> {
        if self.submitted % self.every == 0 {
            info!(
                frame = self.submitted,
                draws = frame.draws.len(),
                eye = ?frame.eye,
                star = ?frame.lights.primary.position,
                "frame"
            );
        } else {
            debug!(frame = self.submitted, draws = frame.draws.len(), "frame");
        }
        self.submitted += 1;
        Ok(())
    }
}
