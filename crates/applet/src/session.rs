//! Per-selection key state of the applet

use crate::clamp::ReducedScalar;

/// Protocol state derived from the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No usable key; only generate and load are accepted
    Uninitialized,
    /// A key was generated or loaded and shared secrets can be computed
    KeyLoaded,
}

/// The loaded private scalar and whether it may be used
///
/// A scalar is only installed once the operation that produced it has fully
/// succeeded. Dropping or replacing it zeroizes the old value.
#[derive(Debug, Default)]
pub struct Session {
    key: Option<ReducedScalar>,
}

impl Session {
    /// A session with no key
    pub fn new() -> Self {
        Self { key: None }
    }

    /// Current protocol state
    pub fn state(&self) -> SessionState {
        match self.key {
            Some(_) => SessionState::KeyLoaded,
            None => SessionState::Uninitialized,
        }
    }

    /// Whether a key is loaded
    pub fn is_valid(&self) -> bool {
        self.key.is_some()
    }

    /// Drop the key, zeroizing it
    pub fn invalidate(&mut self) {
        self.key = None;
    }

    /// Install the key of a completed generate or load
    pub fn install(&mut self, key: ReducedScalar) {
        self.key = Some(key);
    }

    /// The loaded key, if any
    pub fn key(&self) -> Option<&ReducedScalar> {
        self.key.as_ref()
    }
}
