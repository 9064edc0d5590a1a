//! Configuration management for India Tools.
//!
//! Loads settings from a TOML file or uses defaults. Lookup order:
//! explicit path, `$INDIA_TOOLS_CONFIG`, `/etc/india-tools/config.toml`.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// System-wide config file path
pub const CONFIG_PATH: &str = "/etc/india-tools/config.toml";

/// Environment variable naming an alternative config file
pub const CONFIG_ENV: &str = "INDIA_TOOLS_CONFIG";

/// Calculation server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Listen address
    #[serde(default = "default_bind")]
    pub bind: String,

    /// Send `Access-Control-Allow-Origin: *` so browser front-ends can call the API
    #[serde(default = "default_cors")]
    pub cors_allow_any_origin: bool,
}

fn default_bind() -> String {
    "127.0.0.1:8000".to_string()
}

fn default_cors() -> bool {
    true
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            cors_allow_any_origin: default_cors(),
        }
    }
}

/// CLI client settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the calculation server
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "http://127.0.0.1:8000".to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub client: ClientConfig,
}

impl Config {
    /// Load config from the first readable location, or return defaults
    pub fn load(explicit: Option<&Path>) -> Self {
        let mut candidates: Vec<String> = Vec::new();
        if let Some(path) = explicit {
            candidates.push(path.display().to_string());
        }
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            candidates.push(path);
        }
        candidates.push(CONFIG_PATH.to_string());

        for path in &candidates {
            match Self::load_from_path(Path::new(path)) {
                Ok(config) => return config,
                Err(e) if Path::new(path).exists() => warn!("Ignoring config {}: {:#}", path, e),
                Err(_) => {}
            }
        }

        info!("Config not found, using defaults");
        Config::default()
    }

    /// Load config from specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save default config to path (for first-time setup)
    pub fn save_default(path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(&Config::default())?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
        info!("Saved default config to {}", path.display());
        Ok(())
    }
}
