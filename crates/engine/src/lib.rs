//! Software stand-in for a secure element's EC engine
//!
//! [`SoftEngine`] implements [`EcEngine`](se25519_api::EcEngine) with the
//! semantics of a card's key objects: domain parameters are set component by
//! component on a private and a public key, the private scalar is set and can
//! be read back, and plain Diffie-Hellman returns either the full product
//! point or its x-coordinate. Misuse is reported through the engine reason
//! codes of [`EngineError`](se25519_api::EngineError).
//!
//! Only the field 2²⁵⁵ − 19 is available, which covers Wei25519.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod error;
pub mod options;
pub mod soft;

pub use error::{Error, Result};
pub use options::{CofactorPolicy, EngineOptions};
pub use soft::SoftEngine;
