use thiserror::Error;

/// Custom error types for the Refute system
#[derive(Debug, Error)]
pub enum RefuteError {
    #[error("Malformed property: {0}")]
    MalformedProperty(String),

    #[error("Challenge unfolding exceeded the depth limit of {limit}")]
    DepthLimitExceeded { limit: usize },

    #[error("Unknown challenge strategy: {0}")]
    UnknownStrategy(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse property file: {0}")]
    PropertyParse(#[from] serde_json::Error),

    #[error("Failed to parse config file: {0}")]
    ConfigParse(#[from] serde_yaml::Error),
}

/// Result type specific to Refute operations
pub type RefuteResult<T> = Result<T, RefuteError>;
