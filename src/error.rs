//! Error types for SetuNav

use thiserror::Error;

/// SetuNav error type.
///
/// Covers usage and configuration errors only. Behavioral outcomes (no plan
/// found, collision predicted, canceled, ...) are never errors; they travel
/// as [`Outcome`](crate::outcome::Outcome) codes inside the behavior results.
#[derive(Error, Debug)]
pub enum SetuError {
    #[error("Plugin '{0}' used before initialize()")]
    NotInitialized(String),

    #[error("Plugin '{0}' initialized twice")]
    AlreadyInitialized(String),

    #[error("Plugin '{name}' failed to load: {reason}")]
    LoadFailed { name: String, reason: String },

    #[error("No plugin registered under name '{0}'")]
    UnknownPlugin(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<toml::de::Error> for SetuError {
    fn from(e: toml::de::Error) -> Self {
        SetuError::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SetuError>;
