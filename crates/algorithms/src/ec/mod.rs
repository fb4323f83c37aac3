//! Elliptic Curve Primitives
//!
//! Curve25519 over 𝔽ₚ, p = 2²⁵⁵ − 19, in two birationally equivalent models:
//! - [`wei25519`]: y² = x³ + a·x + b with Jacobian projective arithmetic,
//! - [`montgomery`]: v² = u³ + A·u² + u with x-only ladder arithmetic.

pub mod montgomery;
pub mod wei25519;

pub use montgomery::MontgomeryPoint;
pub use wei25519::{Curve, FieldElement, Point, PointFormat, Scalar};
