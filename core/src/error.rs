use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the bulk keyword loaders.
///
/// Single-keyword operations and text scans never fail; only loaders that
/// accept dynamically shaped input or read from disk return this type.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("keyword source not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("toml error: {0}")]
    Toml(#[from] toml::de::Error),
}
