//! Configuration management for reelfeed
//!
//! Handles config file loading/saving and API key resolution.
//! Config is stored at ~/.config/reelfeed/config.toml

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application configuration.
///
/// The TMDB API key is a deployment secret and is never bundled with the
/// binary: it comes from the environment or the config file, in that order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// TMDB API key (overridden by the TMDB_API_KEY env var)
    pub tmdb_api_key: Option<String>,
}

impl Config {
    /// Get config file path (~/.config/reelfeed/config.toml)
    pub fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("reelfeed").join("config.toml"))
    }

    /// Load config from file, or return default if not found
    pub fn load() -> Self {
        Self::path()
            .and_then(|p| std::fs::read_to_string(p).ok())
            .and_then(|s| toml::from_str(&s).ok())
            .unwrap_or_default()
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let path = Self::path().ok_or_else(|| anyhow::anyhow!("Could not determine config path"))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let toml = toml::to_string_pretty(self)?;
        std::fs::write(path, toml)?;
        Ok(())
    }

    /// Resolve the TMDB API key:
    /// 1. Environment variable TMDB_API_KEY
    /// 2. Key from the config file
    pub fn tmdb_api_key(&self) -> Option<String> {
        std::env::var("TMDB_API_KEY")
            .ok()
            .filter(|k| !k.is_empty())
            .or_else(|| self.tmdb_api_key.clone())
    }
}
