//! Configuration file handling for linefield.
//!
//! The file lives at `<config_dir>/linefield/config.toml` and every field is
//! optional; missing fields take their defaults.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use linefield_core::{AnimationTiming, ColorTheme, GridConfig, InputMode};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Errors from loading, validating or saving the configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("cannot serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("invalid animation timing: {0}")]
    InvalidTiming(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Input routing settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    pub mode: InputMode,
    /// Delay between the end of an interaction and the start of the shrink.
    pub release_delay_ms: u64,
    /// Trailing debounce applied to terminal resizes.
    pub resize_debounce_ms: u64,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            mode: InputMode::default(),
            release_delay_ms: 0,
            resize_debounce_ms: 200,
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub theme: ColorTheme,
    pub animation: AnimationTiming,
    pub grid: GridConfig,
    pub input: InputConfig,
}

impl Config {
    /// Platform location of the config file, if a home directory is known.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "linefield").map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Load the configuration.
    ///
    /// An explicit `path` must exist. Without one the default location is
    /// used, and a missing file there yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => match Self::default_path() {
                Some(path) if path.exists() => path,
                _ => {
                    debug!("no config file, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        let contents = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        let config = Self::from_toml(&contents)?;
        info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Parse and validate a TOML document.
    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Write the configuration, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| ConfigError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(path, self.to_toml()?).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), "saved config");
        Ok(())
    }

    /// Check the animation scales. Grid sizes are checked when the grid is
    /// built, since they can depend on the viewport.
    pub fn validate(&self) -> Result<()> {
        let AnimationTiming {
            resting_scale,
            target_scale,
            ..
        } = self.animation;
        if !resting_scale.is_finite() || !target_scale.is_finite() {
            return Err(ConfigError::InvalidTiming(
                "scales must be finite numbers".into(),
            ));
        }
        if resting_scale <= 0.0 {
            return Err(ConfigError::InvalidTiming(format!(
                "resting_scale must be positive, got {resting_scale}"
            )));
        }
        if target_scale <= resting_scale {
            return Err(ConfigError::InvalidTiming(format!(
                "target_scale ({target_scale}) must exceed resting_scale ({resting_scale})"
            )));
        }
        Ok(())
    }
}
