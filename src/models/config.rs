use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the optional configuration file looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "splitclone.toml";

/// Configuration loaded from splitclone.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub split: SplitConfig,
    #[serde(default)]
    pub behavior: BehaviorConfig,
}

/// Defaults applied when the command line leaves them unset
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitConfig {
    /// Lines per part when no strategy option is given
    #[serde(default = "default_line_count")]
    pub line_count: i64,
    /// Directory receiving the parts; empty means the working directory
    #[serde(default)]
    pub output_dir: PathBuf,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            line_count: default_line_count(),
            output_dir: PathBuf::new(),
        }
    }
}

pub fn default_line_count() -> i64 {
    1000
}

/// Behavior configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BehaviorConfig {
    /// Create the output directory if it does not exist
    #[serde(default)]
    pub create_output_dir: bool,
}

impl Config {
    /// Load config from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::ReadError(path.to_path_buf(), e))?;
        toml::from_str(&contents)
            .map_err(|e| ConfigError::ParseError(path.to_path_buf(), e))
    }

    /// Try to load config from splitclone.toml in the given directory
    pub fn load_from_dir(dir: &Path) -> Result<Self, ConfigError> {
        let config_path = dir.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            Self::load_from_file(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Merge CLI overrides into the config
    pub fn with_overrides(mut self, output_dir: Option<PathBuf>) -> Self {
        if let Some(dir) = output_dir {
            self.split.output_dir = dir;
        }
        self
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {0}: {1}")]
    ReadError(PathBuf, std::io::Error),
    #[error("Failed to parse config file {0}: {1}")]
    ParseError(PathBuf, toml::de::Error),
}
