//! Public API traits and types for the se25519 workspace
//!
//! This crate provides the seams between the applet core, the EC engine it
//! drives and the channel a peer uses to reach it: error types, the
//! [`EcEngine`] and [`Channel`] traits, and the command/response wire types.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{EngineError, EngineResult, Error, Result};
pub use types::*;

pub use traits::{Channel, DomainComponent, EcEngine, KeyRole};
