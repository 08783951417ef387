//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Orrery command-line arguments. Values given here override `config.ron`
/// for this run only.
#[derive(Parser, Debug, Default)]
#[command(name = "orrery", about = "Real-time solar system", version)]
pub struct CliArgs {
    /// Initial inner width in logical pixels.
    #[arg(long)]
    pub width: Option<u32>,

    /// Initial inner height in logical pixels.
    #[arg(long)]
    pub height: Option<u32>,

    /// Asteroid belt seed.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Number of asteroids.
    #[arg(long)]
    pub asteroids: Option<usize>,

    /// Roster index to follow at startup.
    #[arg(long)]
    pub start_body: Option<usize>,

    /// `tracing` filter, e.g. `debug` or `orrery_sim=trace`.
    #[arg(long)]
    pub log_level: Option<String>,

    /// Config directory (overrides the platform default).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Run this many frames without a window, then exit.
    #[arg(long, value_name = "FRAMES")]
    pub headless: Option<u64>,
}

impl Config {
    /// Overlay every flag that was given onto `self`.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(width) = args.width {
            self.window.width = width;
        }
        if let Some(height) = args.height {
            self.window.height = height;
        }
        if let Some(seed) = args.seed {
            self.belt.seed = seed;
        }
        if let Some(count) = args.asteroids {
            self.belt.count = count;
        }
        if let Some(body) = args.start_body {
            self.camera.start_body = body;
        }
        if let Some(level) = &args.log_level {
            self.debug.log_level.clone_from(level);
        }
    }
}
