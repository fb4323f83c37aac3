//! Error handling for the se25519 workspace

pub mod engine;
pub mod traits;
pub mod types;
pub mod validate;

// Re-export the primary error type and result
pub use types::{Error, Result};

// Engine reason codes travel separately from the API error
pub use engine::{EngineError, EngineResult};

pub use traits::ResultExt;

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for EngineError {}

#[cfg(test)]
mod tests;
