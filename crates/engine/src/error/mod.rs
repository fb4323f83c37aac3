//! Error handling for the software engine

use core::fmt;
use se25519_algorithms::error::Error as PrimitiveError;
use se25519_api::EngineError;

/// Error type for engine operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Curve arithmetic rejected an operand
    Primitive(PrimitiveError),

    /// A value has the wrong size or is out of range
    InvalidValue {
        context: &'static str,
        details: &'static str,
    },

    /// A key object is missing its scalar or part of its domain
    Uninitialized { context: &'static str },

    /// The engine cannot build keys of this length
    UnsupportedKeyLength { bits: u16 },

    /// The private and public key objects disagree on the domain
    InconsistentDomain,

    /// The operation is disabled on this engine
    IllegalUse { context: &'static str },
}

/// Result type for engine operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Primitive(e) => write!(f, "Primitive error: {}", e),
            Error::InvalidValue { context, details } => {
                write!(f, "Invalid value for {}: {}", context, details)
            }
            Error::Uninitialized { context } => write!(f, "{} is not initialized", context),
            Error::UnsupportedKeyLength { bits } => {
                write!(f, "Unsupported key length: {} bits", bits)
            }
            Error::InconsistentDomain => {
                write!(f, "Private and public keys use different domain parameters")
            }
            Error::IllegalUse { context } => write!(f, "Illegal use: {}", context),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Primitive(e) => Some(e),
            _ => None,
        }
    }
}

impl From<PrimitiveError> for Error {
    fn from(err: PrimitiveError) -> Self {
        Error::Primitive(err)
    }
}

// Every engine failure surfaces as a reason code
impl From<Error> for EngineError {
    fn from(err: Error) -> Self {
        match err {
            Error::Primitive(_) | Error::InvalidValue { .. } => EngineError::illegal_value(),
            Error::Uninitialized { .. } => EngineError::uninitialized_key(),
            Error::UnsupportedKeyLength { .. } => EngineError::new(EngineError::NO_SUCH_ALGORITHM),
            Error::InconsistentDomain => EngineError::new(EngineError::INVALID_INIT),
            Error::IllegalUse { .. } => EngineError::illegal_use(),
        }
    }
}

pub mod validate;
