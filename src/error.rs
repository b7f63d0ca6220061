use thiserror::Error;

/// Errors raised while loading configuration or decoding door properties
/// handed over by the host.
#[derive(Debug, Error)]
pub enum Error {
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Unknown facing '{0}' (expected north, east, south or west)")]
    UnknownFacing(String),

    #[error("Unknown hinge side '{0}' (expected left or right)")]
    UnknownHinge(String),

    #[error("Unknown door half '{0}' (expected lower or upper)")]
    UnknownHalf(String),
}

pub type Result<T> = std::result::Result<T, Error>;
