//! Wei25519: the short Weierstrass model of Curve25519
//!
//! Curve equation: y² = x³ + a·x + b over 𝔽ₚ, where
//! - p = 2²⁵⁵ − 19,
//! - a, b are the images of the Montgomery coefficients A = 486662, B = 1,
//! - the base point has order r = 2²⁵² + 27742317777372353535851937790883648493
//!   and the full group has cofactor 8.
//!
//! Implements:
//! - pseudo-Mersenne reduction for 𝔽ₚ (2²⁵⁶ ≡ 38),
//! - Jacobian projective coordinates with a general coefficient a,
//! - double‐and‐add scalar multiplication.

mod constants;
mod curve;
mod field;
mod point;
mod scalar;

pub use constants::{
    WEI25519_COORDINATES_SIZE, WEI25519_FIELD_ELEMENT_SIZE, WEI25519_POINT_SIZE,
    WEI25519_SCALAR_SIZE,
};
pub use curve::Curve;
pub use field::FieldElement;
pub use point::{Point, PointFormat};
pub use scalar::Scalar;

use crate::error::{Error, Result};
use rand::{CryptoRng, RngCore};

/// Get the standard base point G of Wei25519
pub fn base_point_g() -> Point {
    *Curve::wei25519().generator()
}

/// Scalar multiplication with the base point: scalar * G
pub fn scalar_mult_base_g(scalar: &Scalar) -> Point {
    Curve::wei25519().mul_generator(scalar)
}

/// General scalar multiplication: compute scalar * arbitrary point
pub fn scalar_mult(scalar: &Scalar, point: &Point) -> Point {
    Curve::wei25519().mul(point, scalar)
}

/// Generate a keypair with a scalar in [1, r)
pub fn generate_keypair<R: CryptoRng + RngCore>(rng: &mut R) -> Result<(Scalar, Point)> {
    let curve = Curve::wei25519();
    let scalar = Scalar::random(rng, curve.order())?;
    let public = curve.mul_generator(&scalar);
    if public.is_identity() {
        return Err(Error::Processing {
            operation: "Wei25519 keypair",
            details: "Public point is the identity",
        });
    }
    Ok((scalar, public))
}
