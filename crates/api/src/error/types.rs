//! Error type definitions

#[cfg(feature = "std")]
use std::string::String;

/// Primary error type for the API surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid length error with context
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Invalid parameter error
    InvalidParameter {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },

    /// The channel to the applet failed or refused the exchange
    Transport {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },
}

/// Result type for API operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Shorthand to create an InvalidParameter error
    pub fn param(context: &'static str, _message: &'static str) -> Self {
        Self::InvalidParameter {
            context,
            #[cfg(feature = "std")]
            message: String::from(_message),
        }
    }

    /// Replace the context of an existing error, keeping its message
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidLength {
                expected, actual, ..
            } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            #[cfg(feature = "std")]
            Self::InvalidParameter { message, .. } => Self::InvalidParameter { context, message },
            #[cfg(not(feature = "std"))]
            Self::InvalidParameter { .. } => Self::InvalidParameter { context },
            #[cfg(feature = "std")]
            Self::Transport { message, .. } => Self::Transport { context, message },
            #[cfg(not(feature = "std"))]
            Self::Transport { .. } => Self::Transport { context },
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidLength {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "{}: invalid length (expected {}, got {})",
                    context, expected, actual
                )
            }
            #[cfg(feature = "std")]
            Self::InvalidParameter { context, message } => write!(f, "{}: {}", context, message),
            #[cfg(not(feature = "std"))]
            Self::InvalidParameter { context } => write!(f, "Invalid parameter: {}", context),
            #[cfg(feature = "std")]
            Self::Transport { context, message } => {
                write!(f, "Transport error: {}: {}", context, message)
            }
            #[cfg(not(feature = "std"))]
            Self::Transport { context } => write!(f, "Transport error: {}", context),
        }
    }
}
