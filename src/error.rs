use thiserror::Error;

/// Errors surfaced to callers of the color fetching operations
#[derive(Debug, Error)]
pub enum ColorError {
    #[error("No more colors available for this saturation and lightness. Reset to start over.")]
    Exhausted,

    #[error("Failed to fetch color data. Please check your inputs or try again later.")]
    FetchFailed {
        #[source]
        source: ProviderError,
    },
}

impl From<ProviderError> for ColorError {
    fn from(source: ProviderError) -> Self {
        ColorError::FetchFailed { source }
    }
}

/// Errors raised by a color provider
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Unexpected HTTP status: {0}")]
    Status(u16),

    #[error("Unexpected API response format: {0}")]
    Malformed(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid batch size: {0} (must be between 1 and 360)")]
    InvalidBatchSize(usize),

    #[error("Invalid scheme count: {0} (must be at least 1)")]
    InvalidSchemeCount(usize),
}
