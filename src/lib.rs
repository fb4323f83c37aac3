//! # se25519
//!
//! X25519-compatible Diffie-Hellman on secure elements whose EC engine only
//! knows short Weierstrass curves.
//!
//! The applet loads the Wei25519 domain into the engine, clamps and divides
//! private scalars by the cofactor, and answers three requests. A host peer
//! converts between what the card computes and standard RFC 7748 values.
//!
//! ## Usage
//!
//! ```toml
//! [dependencies]
//! se25519 = { version = "0.3", features = ["host"] }
//! ```
//!
//! ## Features
//!
//! - `applet` (default): the applet, with the software engine behind it
//! - `diagnostic-export` (default): `GenerateKeypair` also returns the reduced scalar
//! - `host`: [`CardClient`](host::CardClient), the loopback channel and the self-test
//! - `serde`: serializable status words and applet configuration
//! - `full`: everything
//!
//! ## Crate Structure
//!
//! - [`api`]: request and response types, the engine and channel traits
//! - [`params`]: the Wei25519 domain table and protocol constants
//! - [`algorithms`]: field, Weierstrass and Montgomery arithmetic
//! - [`engine`]: a software EC engine with card semantics
//! - [`applet`]: the on-card request handler
//! - [`host`]: the X25519 peer

#![cfg_attr(not(feature = "std"), no_std)]

// Core re-exports (always available)
pub use se25519_api as api;
pub use se25519_common as common;
pub use se25519_internal as internal;
pub use se25519_params as params;

// Feature-gated re-exports
#[cfg(feature = "algorithms")]
pub use se25519_algorithms as algorithms;

#[cfg(feature = "engine")]
pub use se25519_engine as engine;

#[cfg(feature = "applet")]
pub use se25519_applet as applet;

#[cfg(feature = "host")]
pub use se25519_host as host;

/// Common imports for se25519 users
pub mod prelude {
    // Error types
    pub use crate::api::{EngineError, EngineResult, Error, Result};

    // Wire types and the seams between crates
    pub use crate::api::{
        Channel, Command, DomainComponent, EcEngine, Instruction, KeyRole, Response, StatusWord,
    };

    // Domain table
    pub use crate::params::traditional::wei25519::WEI25519;

    // Security types
    pub use crate::common::{SecretBuffer, TransientBuffer};
    pub use zeroize::Zeroizing;

    #[cfg(feature = "algorithms")]
    pub use crate::algorithms::MontgomeryPoint;

    #[cfg(feature = "engine")]
    pub use crate::engine::{CofactorPolicy, EngineOptions, SoftEngine};

    #[cfg(feature = "applet")]
    pub use crate::applet::{Applet, AppletConfig, SessionState};

    #[cfg(feature = "host")]
    pub use crate::host::{CardClient, HostConfig, HostError, LoopbackChannel};
}
