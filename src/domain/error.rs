use super::severity::UnsupportedLevelError;
use thiserror::Error;

/// Top-level error type for the facade.
#[derive(Error, Debug)]
pub enum FacadeError {
    #[error("configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    #[error("engine error: {0}")]
    Engine(#[from] crate::engine::EngineError),

    #[error(transparent)]
    Level(#[from] UnsupportedLevelError),
}
