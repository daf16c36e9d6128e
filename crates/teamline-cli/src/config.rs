//! Configuration loading from TOML files

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;
use teamline_core::JitterWindow;

/// Global configuration for teamline
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub source: SourceConfig,
    pub harvest: HarvestConfig,
    pub http: HttpConfig,
    pub store: StoreConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    pub endpoint: String,
    pub event: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        let defaults = teamline_spaceapps::Config::default();
        Self {
            endpoint: defaults.endpoint,
            event: defaults.event,
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct HarvestConfig {
    pub page_size: u64,
    pub workers: usize,
    pub fallback_total: u64,
}

impl Default for HarvestConfig {
    fn default() -> Self {
        Self {
            page_size: 50,
            workers: 5,
            fallback_total: 20_000,
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    pub timeout_secs: u64,
    pub jitter_min_ms: u64,
    pub jitter_max_ms: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            jitter_min_ms: 500,
            jitter_max_ms: 2000,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub db_path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from("teams.db"),
        }
    }
}

impl Config {
    /// Load configuration from default locations
    ///
    /// Search order:
    /// 1. ./teamline.toml (current directory)
    /// 2. ~/.config/teamline/config.toml
    ///
    /// If no config file found, returns default config.
    pub fn load() -> Result<Self> {
        let local_config = PathBuf::from("teamline.toml");
        if local_config.exists() {
            return Self::from_file(&local_config);
        }

        if let Some(config_dir) = directories::ProjectDirs::from("", "", "teamline") {
            let user_config = config_dir.config_dir().join("config.toml");
            if user_config.exists() {
                return Self::from_file(&user_config);
            }
        }

        log::debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Load configuration from a specific file
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Build the pipeline config from file settings.
    pub fn to_harvest_config(&self) -> teamline_spaceapps::Config {
        teamline_spaceapps::Config {
            endpoint: self.source.endpoint.clone(),
            event: self.source.event.clone(),
            page_size: self.harvest.page_size,
            workers: self.harvest.workers,
            request_timeout: Duration::from_secs(self.http.timeout_secs),
            jitter: JitterWindow::new(self.http.jitter_min_ms, self.http.jitter_max_ms),
            fallback_total: self.harvest.fallback_total,
            max_pages: None,
        }
    }
}
