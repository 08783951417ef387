//! The `orrery` binary.
//!
//! Run with: `cargo run -p orrery-app -- --help`

use clap::Parser;
use orrery_app::{AppError, LoadedConfig, PlatformDirs, headless_orchestrator, run_headless};
use orrery_config::CliArgs;
use orrery_input::InputMap;
use orrery_sim::{Orchestrator, SimParams, TracingSink, WallClock};
use tracing::{error, info};

fn main() {
    let args = CliArgs::parse();
    if let Err(err) = start(&args) {
        error!(%err, "fatal");
        eprintln!("orrery: {err}");
        std::process::exit(1);
    }
}

fn start(args: &CliArgs) -> Result<(), AppError> {
    let dirs = PlatformDirs::resolve_or(args.config.as_deref())?;
    dirs.create_dirs()?;

    let LoadedConfig {
        config,
        path: config_path,
        created,
    } = dirs.load_config(args)?;

    orrery_log::init_logging(Some(&dirs.log_dir), cfg!(debug_assertions), Some(&config));
    if created {
        info!(path = %config_path.display(), "wrote default config");
    } else {
        info!(path = %config_path.display(), "config loaded");
    }
    info!(
        config_dir = %dirs.config_dir.display(),
        width = config.window.width,
        height = config.window.height,
        seed = config.belt.seed,
        "orrery starting"
    );

    let params = SimParams::from(&config);

    if let Some(frames) = args.headless {
        let mut orchestrator = headless_orchestrator(params)?;
        run_headless(&mut orchestrator, &mut TracingSink::default(), frames)?;
        return Ok(());
    }

    let mut input_map = InputMap::load_or_default(&dirs.keybindings_path());
    input_map.invert_y |= config.camera.invert_y;

    let orchestrator = Orchestrator::new(params, WallClock::new())?;
    orrery_app::run(
        config.window.clone(),
        input_map,
        orchestrator,
        TracingSink::default(),
    )
}
