use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf, time::Duration};

pub const DEFAULT_USERS_BASE: &str = "https://jsonplaceholder.typicode.com";
pub const DEFAULT_CRYPTO_BASE: &str = "https://api.coinpaprika.com/v1";
pub const DEFAULT_GEOCODING_BASE: &str = "https://geocoding-api.open-meteo.com/v1";
pub const DEFAULT_FORECAST_BASE: &str = "https://api.open-meteo.com/v1";
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Base URLs of the public services queried by the menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Endpoints {
    /// Serves `/users`, `/posts` and `/todos`.
    pub users_base: String,
    /// Serves `/tickers/{coin}`.
    pub crypto_base: String,
    /// Serves `/search` (city name to coordinates).
    pub geocoding_base: String,
    /// Serves `/forecast`.
    pub forecast_base: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            users_base: DEFAULT_USERS_BASE.to_string(),
            crypto_base: DEFAULT_CRYPTO_BASE.to_string(),
            geocoding_base: DEFAULT_GEOCODING_BASE.to_string(),
            forecast_base: DEFAULT_FORECAST_BASE.to_string(),
        }
    }
}

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// timeout_secs = 5
///
/// [endpoints]
/// users_base = "https://jsonplaceholder.typicode.com"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub endpoints: Endpoints,

    /// Applied to every request, from connect until the body is read.
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self { endpoints: Endpoints::default(), timeout_secs: DEFAULT_TIMEOUT_SECS }
    }
}

impl Config {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Load config from disk, or return the defaults if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        let cfg: Config = toml::from_str(contents)?;
        if cfg.timeout_secs == 0 {
            return Err(anyhow!("timeout_secs must be greater than zero"));
        }
        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(path)
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "apiquery", "apiquery-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}
