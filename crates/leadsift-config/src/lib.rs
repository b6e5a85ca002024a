use std::env;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use leadsift_core::rules::{validate_batch_size, DEFAULT_BATCH_SIZE};
use serde::Deserialize;
use thiserror::Error;

const APP_DIR: &str = "leadsift";
const CONFIG_FILENAME: &str = "config.toml";

pub const DEFAULT_MAX_INPUT_MB: u64 = 50;
const BYTES_PER_MB: u64 = 1024 * 1024;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub batch_size: usize,
    pub max_input_bytes: u64,
    pub output_dir: Option<PathBuf>,
    /// The file these values were read from; `None` when running on defaults.
    pub source: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            max_input_bytes: DEFAULT_MAX_INPUT_MB * BYTES_PER_MB,
            output_dir: None,
            source: None,
        }
    }
}

impl AppConfig {
    pub fn output_dir(&self) -> PathBuf {
        self.output_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing home directory")]
    MissingHomeDir,
    #[error("invalid config path: {0}")]
    InvalidConfigPath(PathBuf),
    #[error("config file not found: {0}")]
    MissingConfigFile(PathBuf),
    #[error("invalid batch_size value: {0}")]
    InvalidBatchSize(i64),
    #[error("invalid max_input_mb value: {0}")]
    InvalidMaxInput(i64),
    #[error("invalid output_dir value: {0}")]
    InvalidOutputDir(PathBuf),
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    batch_size: Option<i64>,
    max_input_mb: Option<i64>,
    output_dir: Option<PathBuf>,
}

/// Where the config file is looked up, and whether it has to exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigLocation {
    /// Given with `--config`; a missing file is an error.
    Explicit(PathBuf),
    /// `leadsift/config.toml` under the user config directory; optional.
    Default(PathBuf),
}

impl ConfigLocation {
    pub fn locate(custom: Option<PathBuf>) -> Result<Self> {
        match custom {
            Some(path) if path.as_os_str().is_empty() => Err(ConfigError::InvalidConfigPath(path)),
            Some(path) => Ok(Self::Explicit(path)),
            None => Ok(Self::Default(
                user_config_dir()?.join(APP_DIR).join(CONFIG_FILENAME),
            )),
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            Self::Explicit(path) | Self::Default(path) => path,
        }
    }

    pub fn is_required(&self) -> bool {
        matches!(self, Self::Explicit(_))
    }
}

fn user_config_dir() -> Result<PathBuf> {
    match env::var_os("XDG_CONFIG_HOME").map(PathBuf::from) {
        Some(dir) if dir.as_os_str().is_empty() => Err(ConfigError::InvalidConfigPath(dir)),
        Some(dir) => Ok(dir),
        None => dirs::home_dir()
            .map(|home| home.join(".config"))
            .ok_or(ConfigError::MissingHomeDir),
    }
}

/// Loads the config for this run. Without `--config`, an unusable or empty
/// default location means built-in defaults.
pub fn load(custom: Option<PathBuf>) -> Result<AppConfig> {
    let explicit = custom.is_some();
    match ConfigLocation::locate(custom) {
        Ok(location) => load_from(&location),
        Err(ConfigError::MissingHomeDir | ConfigError::InvalidConfigPath(_)) if !explicit => {
            Ok(AppConfig::default())
        }
        Err(err) => Err(err),
    }
}

pub fn load_from(location: &ConfigLocation) -> Result<AppConfig> {
    let path = location.path();
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            if location.is_required() {
                return Err(ConfigError::MissingConfigFile(path.to_path_buf()));
            }
            return Ok(AppConfig::default());
        }
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let parsed: ConfigFile = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    let mut config = merge_config(parsed)?;
    config.source = Some(path.to_path_buf());
    Ok(config)
}

fn merge_config(parsed: ConfigFile) -> Result<AppConfig> {
    let mut config = AppConfig::default();

    if let Some(batch_size) = parsed.batch_size {
        config.batch_size = validate_batch_size(batch_size)
            .map_err(|_| ConfigError::InvalidBatchSize(batch_size))?;
    }

    if let Some(max_mb) = parsed.max_input_mb {
        let bytes = u64::try_from(max_mb)
            .ok()
            .filter(|mb| *mb > 0)
            .and_then(|mb| mb.checked_mul(BYTES_PER_MB))
            .ok_or(ConfigError::InvalidMaxInput(max_mb))?;
        config.max_input_bytes = bytes;
    }

    if let Some(dir) = parsed.output_dir {
        if dir.as_os_str().is_empty() {
            return Err(ConfigError::InvalidOutputDir(dir));
        }
        config.output_dir = Some(dir);
    }

    Ok(config)
}
