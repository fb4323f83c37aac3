//! Secret-holding buffers shared across the se25519 workspace
//!
//! Everything here zeroizes itself: fixed-size secrets on drop, transient
//! working buffers both when they are leased and when the lease ends.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod security;

pub use security::{SecretBuffer, TransientBuffer, TransientLease};
