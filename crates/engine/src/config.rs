//! Engine configuration loaded from a TOML file

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::core::{BoardConfig, BoardError};
use crate::types::{DEFAULT_COLUMNS, DEFAULT_ROWS};

/// Default config file path
const CONFIG_FILE_PATH: &str = "frag_tetris.toml";

/// Environment variable overriding the config file path
pub const CONFIG_ENV_VAR: &str = "FRAG_TETRIS_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub rows: usize,
    pub columns: usize,
    /// Seed of the shape generator
    pub seed: u32,
    /// Upper bound on gravity ticks for headless runs
    pub max_ticks: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            columns: DEFAULT_COLUMNS,
            seed: 1,
            max_ticks: 100_000,
        }
    }
}

impl EngineConfig {
    pub fn board_config(&self) -> BoardConfig {
        BoardConfig::new(self.rows, self.columns)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.board_config().validate()?;
        Ok(())
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Read and validate a config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&contents)?;
        info!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Like [`load`](Self::load), but a missing file yields the defaults
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load(path)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, self.to_toml_string()?)?;
        Ok(())
    }
}

/// Config file path: the environment override, else the working directory default
pub fn config_file_path() -> PathBuf {
    match std::env::var(CONFIG_ENV_VAR) {
        Ok(path) => PathBuf::from(path),
        Err(_) => PathBuf::from(CONFIG_FILE_PATH),
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(io::Error),
    Parse(toml::de::Error),
    Serialize(toml::ser::Error),
    Invalid(BoardError),
}

impl ConfigError {
    pub fn code(&self) -> &'static str {
        match self {
            ConfigError::Io(_) => "config_io",
            ConfigError::Parse(_) => "config_parse",
            ConfigError::Serialize(_) => "config_serialize",
            ConfigError::Invalid(err) => err.code(),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(err) => write!(f, "config file error: {}", err),
            ConfigError::Parse(err) => write!(f, "config parse error: {}", err),
            ConfigError::Serialize(err) => write!(f, "config serialize error: {}", err),
            ConfigError::Invalid(err) => write!(f, "invalid config: {}", err),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(err) => Some(err),
            ConfigError::Parse(err) => Some(err),
            ConfigError::Serialize(err) => Some(err),
            ConfigError::Invalid(err) => Some(err),
        }
    }
}

impl From<io::Error> for ConfigError {
    fn from(err: io::Error) -> Self {
        ConfigError::Io(err)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Parse(err)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(err: toml::ser::Error) -> Self {
        ConfigError::Serialize(err)
    }
}

impl From<BoardError> for ConfigError {
    fn from(err: BoardError) -> Self {
        ConfigError::Invalid(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_toml_falls_back_to_defaults() {
        let config = EngineConfig::from_toml_str("seed = 99\n").unwrap();
        assert_eq!(config.seed, 99);
        assert_eq!(config.rows, DEFAULT_ROWS);
        assert_eq!(config.columns, DEFAULT_COLUMNS);
    }

    #[test]
    fn zero_columns_is_invalid() {
        let err = EngineConfig::from_toml_str("columns = 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
        assert_eq!(err.code(), "invalid_dimensions");
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = EngineConfig::from_toml_str("rows = [").unwrap_err();
        assert_eq!(err.code(), "config_parse");
    }

    #[test]
    fn save_then_load_preserves_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("engine.toml");
        let config = EngineConfig {
            rows: 12,
            columns: 8,
            seed: 5,
            max_ticks: 300,
        };

        config.save(&path).unwrap();
        assert_eq!(EngineConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn env_var_overrides_config_path() {
        std::env::set_var(CONFIG_ENV_VAR, "/tmp/elsewhere/engine.toml");
        assert_eq!(config_file_path(), PathBuf::from("/tmp/elsewhere/engine.toml"));

        std::env::remove_var(CONFIG_ENV_VAR);
        assert_eq!(config_file_path(), PathBuf::from(CONFIG_FILE_PATH));
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = EngineConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, EngineConfig::default());

        let err = EngineConfig::load(dir.path().join("absent.toml")).unwrap_err();
        assert_eq!(err.code(), "config_io");
    }
}
