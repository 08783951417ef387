//! Structured logging for the orrery.
//!
//! Console output always; a JSON file in debug builds for post-mortem
//! reading. `RUST_LOG` wins over the configured level.

use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use orrery_config::Config;
use tracing::Subscriber;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Name of the JSON log file inside the log directory.
pub const LOG_FILE_NAME: &str = "orrery.log";

/// Filter used when neither `RUST_LOG` nor the config sets one.
const DEFAULT_DIRECTIVES: &str = "info,winit=warn";

/// Install the global subscriber.
///
/// * `log_dir` - where `orrery.log` goes; ignored unless `debug_build`
/// * `debug_build` - also write JSON lines to a file
/// * `config` - source of `debug.log_level`
///
/// Calling this twice is harmless; the second call is reported and ignored.
///
/// ```no_run
/// use orrery_config::Config;
/// use orrery_log::init_logging;
///
/// let config = Config::default();
/// init_logging(Some(std::path::Path::new("./logs")), cfg!(debug_assertions), Some(&config));
/// ```
pub fn init_logging(log_dir: Option<&Path>, debug_build: bool, config: Option<&Config>) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directives(config)));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_thread_names(true)
        .with_level(true)
        .with_timer(fmt::time::uptime());

    let file_layer = if debug_build {
        log_dir.and_then(open_log_file).map(json_file_layer)
    } else {
        None
    };

    let result = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .try_init();

    if let Err(err) = result {
        tracing::warn!(%err, "logging already initialized");
    }
}

/// Filter string for `config`: its `debug.log_level` when set, otherwise
/// [`default_env_filter`]'s directives.
pub fn filter_directives(config: Option<&Config>) -> String {
    config
        .map(|c| c.debug.log_level.trim())
        .filter(|level| !level.is_empty())
        .map_or_else(|| DEFAULT_DIRECTIVES.to_string(), str::to_string)
}

/// The filter used without any override.
pub fn default_env_filter() -> EnvFilter {
    EnvFilter::new(DEFAULT_DIRECTIVES)
}

fn open_log_file(dir: &Path) -> Option<File> {
    std::fs::create_dir_all(dir).ok()?;
    File::create(dir.join(LOG_FILE_NAME)).ok()
}

/// JSON lines without ANSI codes, one object per event.
fn json_file_layer<S>(file: File) -> impl Layer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fmt::layer()
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .with_target(true)
        .with_timer(fmt::time::uptime())
        .json()
}
