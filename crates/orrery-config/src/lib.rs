//! Settings for the orrery, persisted as `config.ron` and overridable from
//! the command line.
//!
//! Every section is `#[serde(default)]`, so old files keep loading as new
//! settings are added, and hand-edited files only need the fields they change.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{
    BeltConfig, CONFIG_FILE_NAME, CameraConfig, Config, DebugConfig, RenderConfig, WindowConfig,
};
pub use error::ConfigError;
