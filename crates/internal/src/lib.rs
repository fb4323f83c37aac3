//! Internal utilities for the se25519 workspace
//!
//! Not part of the public API; helpers shared by the field arithmetic,
//! the session state and the host-side encoding code.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod constant_time;
pub mod endian;

pub use constant_time::{ct_eq, ct_is_zero};
