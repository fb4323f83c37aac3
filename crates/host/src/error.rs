//! Errors seen by the host-side peer

use se25519_api::StatusWord;
use thiserror::Error;

/// Everything that can go wrong talking to the applet
#[derive(Debug, Error)]
pub enum HostError {
    /// The channel failed to move the request
    #[error("channel error: {0}")]
    Channel(#[from] se25519_api::Error),

    /// No successful select yet
    #[error("not connected to the applet")]
    NotConnected,

    /// Select answered with a non-success status word
    #[error("applet selection failed: {0}")]
    SelectFailed(StatusWord),

    /// The applet reports another version
    #[error("unexpected applet version {actual:#06x}, expected {expected:#06x}")]
    VersionMismatch {
        /// Version from the configuration
        expected: u16,
        /// Version the applet sent
        actual: u16,
    },

    /// A request was answered with a non-success status word
    #[error("request rejected: {0}")]
    Rejected(StatusWord),

    /// The engine failed and the applet returned its status code
    #[error("card reported status {0:#06x}")]
    Card(u16),

    /// A response body of the wrong size
    #[error("unexpected {actual}-byte response to {context}")]
    UnexpectedLength {
        /// What was being parsed
        context: &'static str,
        /// Length received
        actual: usize,
    },

    /// A card value has no X25519 counterpart
    #[error("point conversion failed: {0}")]
    Conversion(#[from] se25519_algorithms::Error),

    /// A self-test step produced the wrong value
    #[error("self-test failed at {step}")]
    SelfTest {
        /// Name of the failing step
        step: &'static str,
    },

    /// Configuration could not be parsed or is out of range
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Reading a configuration file failed
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type for host operations
pub type Result<T> = std::result::Result<T, HostError>;

impl From<toml::de::Error> for HostError {
    fn from(err: toml::de::Error) -> Self {
        HostError::Config(err.to_string())
    }
}
