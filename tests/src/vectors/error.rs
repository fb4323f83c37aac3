//! Errors raised while loading or running a vector suite

use thiserror::Error;

#[derive(Debug, Error)]
pub enum VectorError {
    #[error("hex decode error: {0}")]
    Hex(#[from] hex::FromHexError),

    #[error("cannot read suite: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot parse suite: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("card operation failed: {0}")]
    Host(#[from] se25519_host::HostError),

    #[error("field {field} must be 32 bytes, got {actual}")]
    Length { field: &'static str, actual: usize },

    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("mismatch - expected: {expected}, got: {actual}")]
    Mismatch { expected: String, actual: String },

    #[error("{failed} of {total} cases failed")]
    SuiteFailed { failed: usize, total: usize },
}

pub type Result<T> = std::result::Result<T, VectorError>;
