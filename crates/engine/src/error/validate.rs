//! Validation utilities for engine inputs

use super::{Error, Result};

/// Validate an exact length
#[inline(always)]
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::InvalidValue {
            context,
            details: "wrong length",
        });
    }
    Ok(())
}

/// Validate that an output buffer can hold `needed` bytes
#[inline(always)]
pub fn capacity(context: &'static str, available: usize, needed: usize) -> Result<()> {
    if available < needed {
        return Err(Error::InvalidValue {
            context,
            details: "output buffer too small",
        });
    }
    Ok(())
}

/// Validate a value condition
#[inline(always)]
pub fn value(condition: bool, context: &'static str, details: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::InvalidValue { context, details });
    }
    Ok(())
}
