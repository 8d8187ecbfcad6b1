use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

use super::hue::HUE_COUNT;
use super::scheme::DEFAULT_SCHEME_COUNT;
use crate::error::ConfigError;

/// Default scheme endpoint of The Color API
pub const DEFAULT_ENDPOINT: &str = "https://www.thecolorapi.com/scheme";

/// Application configuration loaded from huewheel.yaml
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Remote color provider settings
    #[serde(default)]
    pub provider: ProviderConfig,

    /// Hues served per batch
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,

    /// Colors requested by a single-shot fetch
    #[serde(default = "default_scheme_count")]
    pub scheme_count: usize,
}

fn default_batch_size() -> usize {
    36 // ten batches per wheel
}

fn default_scheme_count() -> usize {
    DEFAULT_SCHEME_COUNT
}

/// Configuration for the HTTP color provider
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ProviderConfig {
    /// Scheme endpoint URL
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_timeout() -> u64 {
    10
}

impl ProviderConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_secs: default_timeout(),
        }
    }
}

impl AppConfig {
    /// Parse and validate configuration from a YAML string
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate configuration from a file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_yaml(&content)
    }

    /// Load configuration, falling back to defaults when the file is
    /// missing or invalid
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(config) => {
                tracing::info!(
                    path = %path.display(),
                    batch_size = config.batch_size,
                    endpoint = %config.provider.endpoint,
                    "Loaded configuration"
                );
                config
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), %e, "Failed to load config, using defaults");
                Self::default()
            }
        }
    }

    /// Check that batch and scheme sizes are usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.batch_size == 0 || self.batch_size > HUE_COUNT as usize {
            return Err(ConfigError::InvalidBatchSize(self.batch_size));
        }
        if self.scheme_count == 0 {
            return Err(ConfigError::InvalidSchemeCount(self.scheme_count));
        }
        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            provider: ProviderConfig::default(),
            batch_size: default_batch_size(),
            scheme_count: default_scheme_count(),
        }
    }
}
