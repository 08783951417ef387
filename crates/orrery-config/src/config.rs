//! Configuration sections, defaults, and RON persistence.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// File name inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.ron";

/// All settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Window and viewport.
    pub window: WindowConfig,
    /// Mesh detail, clip planes, background.
    pub render: RenderConfig,
    /// Asteroid belt shape and seed.
    pub belt: BeltConfig,
    /// Camera start and feel.
    pub camera: CameraConfig,
    /// Logging and diagnostics.
    pub debug: DebugConfig,
}

/// Window configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    /// Requested inner width in logical pixels.
    pub width: u32,
    /// Requested inner height in logical pixels.
    pub height: u32,
    /// Window title.
    pub title: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            title: "Orrery".to_string(),
        }
    }
}

/// Rendering parameters the core owns.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RenderConfig {
    /// Sphere longitude subdivisions.
    pub sphere_sectors: u32,
    /// Sphere latitude subdivisions.
    pub sphere_stacks: u32,
    /// Near clip distance.
    pub near: f32,
    /// Far clip distance.
    pub far: f32,
    /// Background RGBA.
    pub clear_color: [f32; 4],
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            sphere_sectors: 64,
            sphere_stacks: 64,
            near: 0.1,
            far: 250.0,
            clear_color: [0.02, 0.02, 0.08, 1.0],
        }
    }
}

/// Asteroid belt.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BeltConfig {
    /// Number of asteroids.
    pub count: usize,
    /// Inner edge distance from the star.
    pub inner_radius: f32,
    /// Outer edge distance from the star.
    pub outer_radius: f32,
    /// Total height spread around the orbital plane.
    pub vertical_jitter: f32,
    /// Smallest asteroid scale.
    pub scale_base: f32,
    /// Random scale added on top of `scale_base`.
    pub scale_spread: f32,
    /// RNG seed; the same seed gives the same belt.
    pub seed: u64,
}

impl Default for BeltConfig {
    fn default() -> Self {
        Self {
            count: 200,
            inner_radius: 5.5,
            outer_radius: 8.0,
            vertical_jitter: 0.25,
            scale_base: 0.02,
            scale_spread: 0.0175,
            seed: 42,
        }
    }
}

/// Camera.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CameraConfig {
    /// Roster index followed at startup.
    pub start_body: usize,
    /// Follow-mode degrees per pixel.
    pub follow_sensitivity_deg: f32,
    /// Free-mode degrees per pixel.
    pub free_sensitivity_deg: f32,
    /// Follow-mode distance per wheel notch.
    pub zoom_step: f32,
    /// Free-mode speed in units per second.
    pub free_speed: f32,
    /// Flip vertical mouse look.
    pub invert_y: bool,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            start_body: 3,
            follow_sensitivity_deg: 0.15,
            free_sensitivity_deg: 0.1,
            zoom_step: 0.2,
            free_speed: 2.5,
            invert_y: false,
        }
    }
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log filter when `RUST_LOG` is unset (e.g. "info", "orrery_sim=debug").
    pub log_level: String,
    /// Log every frame's summary at debug level.
    pub trace_frames: bool,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            trace_frames: false,
        }
    }
}

impl Config {
    /// Load `config.ron` from `config_dir`, writing the defaults there first
    /// if the file does not exist yet.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE_NAME);

        if config_path.exists() {
            let config = Self::read(&config_path)?;
            log::info!("config read from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("no config found, wrote defaults to {}", config_path.display());
            Ok(config)
        }
    }

    /// Write `config.ron` into `config_dir`, creating the directory.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(|source| ConfigError::Write {
            path: config_dir.to_path_buf(),
            source,
        })?;

        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(2)
            .separate_tuple_members(true);
        let serialized = ron::ser::to_string_pretty(self, pretty)?;

        let path = config_dir.join(CONFIG_FILE_NAME);
        std::fs::write(&path, serialized)
            .map_err(|source| ConfigError::Write { path, source })?;
        log::debug!("config written under {}", config_dir.display());
        Ok(())
    }

    /// Re-read the file. `Some` only when it differs from `self`.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let fresh = Self::read(&config_dir.join(CONFIG_FILE_NAME))?;
        if &fresh == self {
            Ok(None)
        } else {
            log::info!("config changed on disk");
            Ok(Some(fresh))
        }
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        ron::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!((config.window.width, config.window.height), (1280, 720));
        assert_eq!(config.render.sphere_sectors, 64);
        assert_eq!(config.belt.count, 200);
        assert_eq!(config.belt.seed, 42);
        assert_eq!(config.camera.start_body, 3);
        assert_eq!(config.debug.log_level, "info");
    }

    #[test]
    fn test_missing_section_uses_default() {
        let config: Config = ron::from_str("(window: (width: 800))").unwrap();
        assert_eq!(config.window.width, 800);
        assert_eq!(config.window.height, 720);
        assert_eq!(config.belt, BeltConfig::default());
    }

    #[test]
    fn test_unknown_field_ignored() {
        let result: Result<Config, _> = ron::from_str("(warp_drive: true, belt: (seed: 7))");
        assert_eq!(result.unwrap().belt.seed, 7);
    }

    #[test]
    fn test_comments_allowed() {
        let text = "// orrery settings\n(\n  // nothing overridden\n)";
        assert_eq!(ron::from_str::<Config>(text).unwrap(), Config::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.belt.count = 500;
        config.camera.invert_y = true;
        config.render.clear_color = [0.0, 0.0, 0.0, 1.0];

        config.save(dir.path()).unwrap();
        assert_eq!(Config::load_or_create(dir.path()).unwrap(), config);
    }

    #[test]
    fn test_load_or_create_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("orrery");
        let config = Config::load_or_create(&nested).unwrap();
        assert_eq!(config, Config::default());
        assert!(nested.join(CONFIG_FILE_NAME).exists());
    }

    #[test]
    fn test_reload_detects_changes() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::default();
        config.save(dir.path()).unwrap();
        assert!(config.reload(dir.path()).unwrap().is_none());

        let mut modified = config.clone();
        modified.camera.start_body = 5;
        modified.save(dir.path()).unwrap();
        let reloaded = config.reload(dir.path()).unwrap();
        assert_eq!(reloaded.map(|c| c.camera.start_body), Some(5));
    }

    #[test]
    fn test_invalid_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE_NAME), "{{nope").unwrap();
        assert!(matches!(
            Config::load_or_create(dir.path()),
            Err(ConfigError::Parse { .. })
        ));
    }
}
