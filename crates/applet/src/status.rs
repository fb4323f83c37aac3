//! Failure causes and their wire encoding
//!
//! A protocol failure is a channel status word with no body. Engine and
//! internal failures complete normally (0x9000) and carry a two-byte status
//! code as the whole body: the engine's reason code unchanged, or
//! [`INTERNAL_FAULT`] for anything else.

use core::fmt;
use se25519_api::{EngineError, Response, StatusWord};
use se25519_params::applet::INTERNAL_FAULT;

/// Why a request failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Failure {
    /// Malformed request or wrong session state
    Protocol(StatusWord),
    /// The EC engine rejected an operation
    Engine(EngineError),
    /// Anything neither the caller nor the engine reported
    Internal(&'static str),
}

/// Result type for request handlers
pub type Result<T> = core::result::Result<T, Failure>;

impl Failure {
    /// Wrong body length or missing key
    pub const fn data_invalid() -> Self {
        Failure::Protocol(StatusWord::DATA_INVALID)
    }

    /// Unknown operation code
    pub const fn ins_not_supported() -> Self {
        Failure::Protocol(StatusWord::INS_NOT_SUPPORTED)
    }

    /// Two-byte status code, or `None` for a protocol failure
    ///
    /// A zero reason code would read as success, so it is reported as an
    /// internal fault. [`INTERNAL_FAULT`] is reserved for the applet: an
    /// engine reporting that code is treated as faulty as well.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Failure::Protocol(_) => None,
            Failure::Engine(e) if Self::is_engine_reason(e.reason()) => Some(e.reason()),
            Failure::Engine(_) | Failure::Internal(_) => Some(INTERNAL_FAULT),
        }
    }

    /// Whether `reason` can be forwarded as the engine's own status code
    pub const fn is_engine_reason(reason: u16) -> bool {
        reason != 0 && reason != INTERNAL_FAULT
    }

    /// Encode as the response sent back to the peer
    pub fn to_response(&self) -> Response {
        match *self {
            Failure::Protocol(sw) => Response::status_only(sw),
            _ => {
                let code = self.status_code().unwrap_or(INTERNAL_FAULT);
                Response::success(&code.to_be_bytes())
            }
        }
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Failure::Protocol(sw) => write!(f, "protocol rejection: {}", sw),
            Failure::Engine(e) => write!(f, "{}", e),
            Failure::Internal(context) => write!(f, "internal fault: {}", context),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Failure {}

impl From<EngineError> for Failure {
    fn from(err: EngineError) -> Self {
        Failure::Engine(err)
    }
}
