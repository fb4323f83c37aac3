//! Host-side peer for the se25519 applet
//!
//! The applet speaks Wei25519 with reduced scalars; [`CardClient`] turns
//! that into plain X25519 so its results compare byte for byte with any
//! RFC 7748 implementation. [`LoopbackChannel`] hosts an applet in-process,
//! which is how the test suites drive it without hardware.
//!
//! ```no_run
//! use rand::rngs::OsRng;
//! use se25519_applet::Applet;
//! use se25519_engine::SoftEngine;
//! use se25519_host::{CardClient, HostConfig, LoopbackChannel};
//!
//! let channel = LoopbackChannel::new(Applet::new(SoftEngine::new(), OsRng));
//! let mut client = CardClient::new(channel, HostConfig::default());
//! client.connect()?;
//! let keypair = client.generate_keypair()?;
//! println!("{}", hex::encode(keypair.public.as_bytes()));
//! # Ok::<(), se25519_host::HostError>(())
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod client;
pub mod config;
pub mod convert;
pub mod error;
pub mod loopback;
pub mod selftest;

pub use client::{CardClient, CardKeypair};
pub use config::HostConfig;
pub use error::{HostError, Result};
pub use loopback::LoopbackChannel;
pub use selftest::{run_self_test, SelfTestReport, SelfTestStep};
