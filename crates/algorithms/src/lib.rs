//! Curve25519 arithmetic in both of its models
//!
//! This crate provides the field 𝔽ₚ with p = 2²⁵⁵ − 19, affine and Jacobian
//! arithmetic on the short Weierstrass model Wei25519 with caller-supplied
//! coefficients, and x-only arithmetic on the Montgomery model used by
//! X25519, together with the maps between the two.
//!
//! The Weierstrass side is what a secure element's EC engine computes; the
//! Montgomery side is what its peer speaks.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

extern crate alloc;

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Elliptic curve primitives
pub mod ec;
pub use ec::{
    montgomery, wei25519, Curve, FieldElement, MontgomeryPoint, Point, PointFormat, Scalar,
};

// Re-export security types from the common crate
pub use se25519_common::security::SecretBuffer;
