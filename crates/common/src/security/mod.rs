//! Zeroizing containers for key material and intermediate values

pub mod secret;
pub mod transient;

pub use secret::SecretBuffer;
pub use transient::{TransientBuffer, TransientLease};
