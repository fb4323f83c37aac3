//! Constants for elliptic curves

pub mod curve25519;
pub mod wei25519;
