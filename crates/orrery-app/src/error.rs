//! Fatal startup and run errors.

use orrery_config::ConfigError;
use orrery_sim::SimError;
use thiserror::Error;

use crate::platform::PlatformError;

/// Anything that ends the program with a non-zero exit code.
#[derive(Debug, Error)]
pub enum AppError {
    /// Directory resolution failed.
    #[error(transparent)]
    Platform(#[from] PlatformError),

    /// `config.ron` could not be read or written.
    #[error("configuration: {0}")]
    Config(#[from] ConfigError),

    /// The scene could not be built or a frame could not be presented.
    #[error(transparent)]
    Sim(#[from] SimError),

    /// The window system refused to start or stopped abnormally.
    #[error("event loop: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    /// The window could not be created.
    #[error("window creation: {0}")]
    Window(#[from] winit::error::OsError),
}
