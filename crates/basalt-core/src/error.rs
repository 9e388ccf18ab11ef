//! Error types for Basalt

use thiserror::Error;

/// The main error type for Basalt operations
#[derive(Debug, Error)]
pub enum BasaltError {
    #[error("Coordinates out of bounds: ({x}, {z}) on a {size}x{size} grid")]
    OutOfBounds { x: i64, z: i64, size: usize },

    #[error("Load failure: {0}")]
    LoadFailure(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Invalid scene object handle: {0}")]
    InvalidHandle(u32),

    #[error("Scene is full: capacity {0} exhausted")]
    SceneFull(usize),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParseError(String),

    #[error("TOML serialization error: {0}")]
    TomlSerError(String),
}

/// Result type alias for Basalt operations
pub type Result<T> = std::result::Result<T, BasaltError>;

impl From<toml::de::Error> for BasaltError {
    fn from(err: toml::de::Error) -> Self {
        BasaltError::TomlParseError(err.to_string())
    }
}

impl From<toml::ser::Error> for BasaltError {
    fn from(err: toml::ser::Error) -> Self {
        BasaltError::TomlSerError(err.to_string())
    }
}
