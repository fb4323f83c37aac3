//! X25519-compatible Diffie-Hellman on a Weierstrass-only EC engine
//!
//! The applet maps Curve25519 onto its short Weierstrass model Wei25519 and
//! drives an [`EcEngine`](se25519_api::EcEngine) that only knows that form.
//! The engine cannot apply the cofactor, so every scalar is clamped and then
//! divided by 8 before use; the peer finishes the job with three x-only
//! doublings.
//!
//! # Protocol
//!
//! | ins | request | response |
//! |-----|---------|----------|
//! | select | – | `55 19` |
//! | 0x01 | – | reduced scalar ∥ X ∥ Y (96), or X ∥ Y without diagnostic export |
//! | 0x02 | 32-byte scalar | X ∥ Y (64) |
//! | 0x03 | X ∥ Y (64) | shared X (32) |
//!
//! Engine failures complete with a two-byte status body; malformed requests
//! get 0x6984 or 0x6D00.
//!
//! # Warning
//!
//! GenerateKeypair hands out the private scalar when diagnostic export is on.
//! This is a test vehicle, not a deployable key agreement.
//!
//! # Example
//!
//! ```ignore
//! use se25519_applet::Applet;
//! use se25519_api::{Command, Instruction};
//!
//! let mut applet = Applet::new(engine, rng);
//! applet.select();
//! let rsp = applet.process(&Command::new(Instruction::LoadPrivateKey, &[0u8; 32]));
//! assert_eq!(rsp.data().len(), 64);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

extern crate alloc;

pub mod adapter;
pub mod applet;
pub mod clamp;
pub mod config;
pub mod session;
pub mod status;

pub use adapter::EngineAdapter;
pub use applet::Applet;
pub use clamp::ReducedScalar;
pub use config::AppletConfig;
pub use session::{Session, SessionState};
pub use status::Failure;
