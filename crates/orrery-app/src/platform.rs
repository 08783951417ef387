//! Where the orrery keeps its files.
//!
//! Config and key bindings live in the OS config directory, logs in a
//! sibling `logs` directory. `--config` replaces the whole root.

use std::path::{Path, PathBuf};

use orrery_config::{CONFIG_FILE_NAME, CliArgs, Config, ConfigError};
use thiserror::Error;

const APP_NAME: &str = "orrery";

/// Name of the key-binding file inside the config directory.
pub const KEYBINDINGS_FILE_NAME: &str = "keybindings.ron";

/// Errors resolving or creating the app directories.
#[derive(Debug, Error)]
pub enum PlatformError {
    /// The OS did not provide a configuration directory.
    #[error("could not determine OS configuration directory")]
    NoConfigDir,
    /// Creating a directory failed.
    #[error("failed to create {path}: {source}")]
    CreateDir {
        /// Directory that could not be created.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },
}

/// A config ready for use, with where it came from.
///
/// Config loading happens before the subscriber exists, so the caller logs
/// these details once logging is up.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedConfig {
    /// File contents with CLI overrides applied.
    pub config: Config,
    /// The `config.ron` that was read or written.
    pub path: PathBuf,
    /// Whether defaults were written because no file existed.
    pub created: bool,
}

/// Resolved app directories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformDirs {
    /// `config.ron` and `keybindings.ron`.
    pub config_dir: PathBuf,
    /// `orrery.log` in debug builds.
    pub log_dir: PathBuf,
}

impl PlatformDirs {
    /// OS defaults (XDG on Linux, Known Folders on Windows, Library on
    /// macOS).
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError::NoConfigDir`] if the OS exposes no config
    /// directory.
    pub fn resolve() -> Result<Self, PlatformError> {
        let base = dirs::config_dir().ok_or(PlatformError::NoConfigDir)?;
        Ok(Self::under(&base.join(APP_NAME)))
    }

    /// Directories rooted at `root` instead of the OS location.
    pub fn under(root: &Path) -> Self {
        Self {
            config_dir: root.to_path_buf(),
            log_dir: root.join("logs"),
        }
    }

    /// `root` when given, otherwise the OS defaults.
    ///
    /// # Errors
    ///
    /// See [`resolve`](Self::resolve).
    pub fn resolve_or(root: Option<&Path>) -> Result<Self, PlatformError> {
        match root {
            Some(root) => Ok(Self::under(root)),
            None => Self::resolve(),
        }
    }

    /// Create every directory on disk.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError::CreateDir`] naming the first failure.
    pub fn create_dirs(&self) -> Result<(), PlatformError> {
        for dir in [&self.config_dir, &self.log_dir] {
            std::fs::create_dir_all(dir).map_err(|source| PlatformError::CreateDir {
                path: dir.clone(),
                source,
            })?;
        }
        Ok(())
    }

    /// Load or create `config.ron` and overlay `args`.
    ///
    /// # Errors
    ///
    /// See [`Config::load_or_create`].
    pub fn load_config(&self, args: &CliArgs) -> Result<LoadedConfig, ConfigError> {
        let path = self.config_dir.join(CONFIG_FILE_NAME);
        let created = !path.exists();
        let mut config = Config::load_or_create(&self.config_dir)?;
        config.apply_cli_overrides(args);
        Ok(LoadedConfig {
            config,
            path,
            created,
        })
    }

    /// Path of the key-binding file.
    pub fn keybindings_path(&self) -> PathBuf {
        self.config_dir.join(KEYBINDINGS_FILE_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_under_root_layout() {
        let dirs = PlatformDirs::under(Path::new("/tmp/orrery-root"));
        assert_eq!(dirs.config_dir, Path::new("/tmp/orrery-root"));
        assert_eq!(dirs.log_dir, Path::new("/tmp/orrery-root").join("logs"));
        assert_eq!(
            dirs.keybindings_path(),
            Path::new("/tmp/orrery-root").join(KEYBINDINGS_FILE_NAME)
        );
    }

    #[test]
    fn test_override_wins() {
        let root = Path::new("/somewhere/else");
        let dirs = PlatformDirs::resolve_or(Some(root)).unwrap();
        assert_eq!(dirs.config_dir, root);
    }

    #[test]
    fn test_resolve_is_absolute() {
        if let Ok(dirs) = PlatformDirs::resolve() {
            assert!(dirs.config_dir.is_absolute());
            assert!(dirs.config_dir.ends_with(APP_NAME));
        }
    }

    #[test]
    fn test_create_dirs() {
        let tmp = tempfile::tempdir().unwrap();
        let dirs = PlatformDirs::under(&tmp.path().join("nested"));
        dirs.create_dirs().unwrap();
        assert!(dirs.config_dir.is_dir());
        assert!(dirs.log_dir.is_dir());
    }

    #[test]
    fn test_load_config_reports_source() {
        let tmp = tempfile::tempdir().unwrap();
        let dirs = PlatformDirs::under(tmp.path());
        let args = CliArgs {
            seed: Some(7),
            ..CliArgs::default()
        };

        let first = dirs.load_config(&args).unwrap();
        assert!(first.created);
        assert_eq!(first.path, tmp.path().join(CONFIG_FILE_NAME));
        assert!(first.path.is_file());
        assert_eq!(first.config.belt.seed, 7);

        let second = dirs.load_config(&CliArgs::default()).unwrap();
        assert!(!second.created);
        assert_eq!(second.config, Config::default());
    }
}
