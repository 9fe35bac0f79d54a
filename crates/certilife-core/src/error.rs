// crates/certilife-core/src/error.rs
// Error types

use thiserror::Error;

/// Failure to load `landing.toml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse landing config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid value for `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

pub type Result<T, E = ConfigError> = std::result::Result<T, E>;
