//! Failures reported by an EC engine
//!
//! An engine rejects an operation with a 16-bit reason code. The codes below
//! are the ones a card's crypto provider raises; an engine may report others
//! and they are carried through unchanged.

use core::fmt;

/// Rejection raised by an [`EcEngine`](crate::EcEngine)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EngineError {
    reason: u16,
}

/// Result type for engine operations
pub type EngineResult<T> = core::result::Result<T, EngineError>;

impl EngineError {
    /// A parameter or operand has an unacceptable value or length
    pub const ILLEGAL_VALUE: u16 = 1;
    /// The key used has not been fully initialized
    pub const UNINITIALIZED_KEY: u16 = 2;
    /// The requested algorithm is not supported
    pub const NO_SUCH_ALGORITHM: u16 = 3;
    /// The operation was not initialized
    pub const INVALID_INIT: u16 = 4;
    /// The operation is not allowed in the current state
    pub const ILLEGAL_USE: u16 = 5;

    /// Wrap an engine reason code
    pub const fn new(reason: u16) -> Self {
        Self { reason }
    }

    /// Shorthand for [`Self::ILLEGAL_VALUE`]
    pub const fn illegal_value() -> Self {
        Self::new(Self::ILLEGAL_VALUE)
    }

    /// Shorthand for [`Self::UNINITIALIZED_KEY`]
    pub const fn uninitialized_key() -> Self {
        Self::new(Self::UNINITIALIZED_KEY)
    }

    /// Shorthand for [`Self::ILLEGAL_USE`]
    pub const fn illegal_use() -> Self {
        Self::new(Self::ILLEGAL_USE)
    }

    /// The raw reason code
    pub const fn reason(&self) -> u16 {
        self.reason
    }

    fn name(&self) -> &'static str {
        match self.reason {
            Self::ILLEGAL_VALUE => "ILLEGAL_VALUE",
            Self::UNINITIALIZED_KEY => "UNINITIALIZED_KEY",
            Self::NO_SUCH_ALGORITHM => "NO_SUCH_ALGORITHM",
            Self::INVALID_INIT => "INVALID_INIT",
            Self::ILLEGAL_USE => "ILLEGAL_USE",
            _ => "UNKNOWN",
        }
    }
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "engine rejected operation: {} ({:#06x})", self.name(), self.reason)
    }
}
