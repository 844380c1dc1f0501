use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::time::Duration;

/// Client configuration
#[derive(Debug, Deserialize, Clone)]
pub struct FinderConfig {
    /// Base URL of the recipe backend, without the `/api` prefix
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// Origin used when building share links
    #[serde(default = "default_share_origin")]
    pub share_origin: String,
    /// Bearer token for an already logged in session
    #[serde(default)]
    pub token: Option<String>,
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout: default_timeout(),
            share_origin: default_share_origin(),
            token: None,
        }
    }
}

// Default value functions
fn default_base_url() -> String {
    "http://localhost:8001".to_string()
}

// Recipe generation is slow; two minutes before giving up
fn default_timeout() -> u64 {
    120
}

fn default_share_origin() -> String {
    "http://localhost:3000".to_string()
}

impl FinderConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with KITCHEN__ prefix
    /// 2. kitchen.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: KITCHEN__BASE_URL
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}

/// Load configuration from file and environment variables
///
/// See [`FinderConfig::load`] for the source priority.
pub fn load_config() -> Result<FinderConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("kitchen").required(false))
        .add_source(
            Environment::with_prefix("KITCHEN")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
