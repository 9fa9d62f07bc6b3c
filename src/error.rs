//! @acp:module "Errors"
//! @acp:summary "Error types shared by the generator, renderer and config loader"
//! @acp:domain cli
//! @acp:layer types

use thiserror::Error;

/// Errors raised by the NebulaForge library
#[derive(Debug, Error)]
pub enum ForgeError {
    /// A selection was requested from an empty table
    #[error("Cannot select from an empty {0} table")]
    EmptySelection(&'static str),

    /// Focus value that names no stack category
    #[error("Unknown focus '{0}' (expected one of: {1})")]
    UnknownFocus(String, String),

    #[error("Unknown output format: {0}")]
    UnknownFormat(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias used across the library
pub type Result<T> = std::result::Result<T, ForgeError>;
