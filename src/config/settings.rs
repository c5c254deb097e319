//! Settings file
//!
//! A small TOML file next to the executable's working directory. Every key
//! is optional; a missing file means all defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::game::Variant;

/// Environment variable naming the settings file
pub const CONFIG_ENV_VAR: &str = "BINGO_CALLER_CONFIG";

/// Settings file used when the environment variable is unset
pub const DEFAULT_CONFIG_PATH: &str = "bingo-caller.toml";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid settings file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("window scale must be between {min} and {max}, got {value}")]
    InvalidScale { value: u32, min: u32, max: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub variant: Variant,
    pub log: LogSettings,
    pub display: DisplaySettings,
}

impl Settings {
    /// Loads the file named by `BINGO_CALLER_CONFIG`, or the default path
    pub fn load_default() -> Result<Self, SettingsError> {
        let path = std::env::var_os(CONFIG_ENV_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));
        Self::load(&path)
    }

    /// Loads settings from `path`; a missing file yields the defaults
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(SettingsError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        Self::parse(&text).map_err(|e| match e {
            SettingsError::Parse { source, .. } => SettingsError::Parse {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })
    }

    /// Parses settings from TOML text
    pub fn parse(text: &str) -> Result<Self, SettingsError> {
        let settings: Settings = toml::from_str(text).map_err(|source| SettingsError::Parse {
            path: PathBuf::new(),
            source,
        })?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), SettingsError> {
        let scale = self.display.scale;
        if !(DisplaySettings::MIN_SCALE..=DisplaySettings::MAX_SCALE).contains(&scale) {
            return Err(SettingsError::InvalidScale {
                value: scale,
                min: DisplaySettings::MIN_SCALE,
                max: DisplaySettings::MAX_SCALE,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    pub level: LogLevel,
    /// Directory receiving the daily rolling log file
    pub directory: PathBuf,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            directory: PathBuf::from("logs"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_tracing_level(&self) -> tracing::Level {
        match self {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}

/// Which front-end presents the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HostKind {
    /// Window on Windows, terminal elsewhere
    #[default]
    Auto,
    Terminal,
    Window,
}

impl HostKind {
    /// Resolves `Auto` for the current platform
    pub fn resolve(self) -> HostKind {
        match self {
            HostKind::Auto if cfg!(windows) => HostKind::Window,
            HostKind::Auto => HostKind::Terminal,
            other => other,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    pub host: HostKind,
    /// Window pixels per canvas pixel
    pub scale: u32,
    /// Optional TrueType font replacing the built-in bitmap font
    pub font: Option<PathBuf>,
}

impl DisplaySettings {
    pub const MIN_SCALE: u32 = 1;
    pub const MAX_SCALE: u32 = 12;
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            host: HostKind::Auto,
            scale: 4,
            font: None,
        }
    }
}
