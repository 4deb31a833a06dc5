use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{fmt, fs, path::PathBuf, time::Duration};

use crate::theme::ThemeMode;

pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5/weather";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Environment variables consulted for the API key, in order.
pub const API_KEY_VARS: &[&str] = &["OPENWEATHER_API_KEY", "WEATHER_API_KEY"];

/// Runtime configuration.
///
/// Example TOML:
/// ```toml
/// base_url = "https://api.openweathermap.org/data/2.5/weather"
/// timeout_secs = 10
/// theme = "light"
/// ```
///
/// The API key is never read from the file, only from the environment.
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    #[serde(skip)]
    pub api_key: Option<String>,

    pub base_url: String,

    pub timeout_secs: u64,

    /// Theme used at startup.
    pub theme: ThemeMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            theme: ThemeMode::default(),
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .field("theme", &self.theme)
            .finish()
    }
}

impl Config {
    /// Load the optional config file, then apply the process environment.
    pub fn load() -> Result<Self> {
        let mut cfg = Self::load_file()?;
        cfg.apply_env(|name| std::env::var(name).ok());
        Ok(cfg)
    }

    /// Load config from disk, or return defaults if it doesn't exist.
    pub fn load_file() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let cfg: Config = toml::from_str(contents)?;
        if cfg.timeout_secs == 0 {
            return Err(anyhow!("timeout_secs must be greater than zero"));
        }
        Ok(cfg)
    }

    /// Pick up the API key using `lookup` for environment access.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let key = API_KEY_VARS
            .iter()
            .filter_map(|name| lookup(*name))
            .map(|value| value.trim().to_string())
            .find(|value| !value.is_empty());

        if key.is_some() {
            self.api_key = key;
        }
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "weathercast", "weather-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}
