//! The orrery application shell: platform directories, the windowed event
//! loop, and headless runs.

pub mod error;
pub mod headless;
pub mod platform;
pub mod window;

pub use error::AppError;
pub use headless::{HEADLESS_DT, headless_orchestrator, run_headless};
pub use platform::{KEYBINDINGS_FILE_NAME, LoadedConfig, PlatformDirs, PlatformError};
pub use window::{OrreryApp, run, window_attributes};
