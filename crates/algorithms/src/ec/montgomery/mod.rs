//! Curve25519 in Montgomery form: v² = u³ + A·u² + u over 𝔽ₚ
//!
//! x-only arithmetic as used by X25519 (RFC 7748):
//! - projective doubling (X:Z) → ((X² − Z²)², 4XZ(X² + A·XZ + Z²)),
//! - differential addition given the u-coordinate of the difference,
//! - the Montgomery ladder with a24 = (A − 2)/4 = 121665.
//!
//! The map to the short Weierstrass model is x = u + A/3, y = v, which lets
//! a peer translate between X25519 values and what a Wei25519 engine outputs.

use crate::ec::wei25519::{Curve, FieldElement, Point};
use crate::error::Result;
use se25519_internal::endian::swap_endianness;
use se25519_params::traditional::curve25519::{CURVE25519, X25519_SIZE};
use subtle::{Choice, ConditionallySelectable};
use zeroize::Zeroize;

/// The X25519 base point, u = 9, little‐endian
pub const X25519_BASEPOINT: [u8; X25519_SIZE] = {
    let mut u = [0u8; X25519_SIZE];
    u[0] = CURVE25519.base_u;
    u
};

/// A u-coordinate in the little‐endian encoding of RFC 7748
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MontgomeryPoint(pub [u8; X25519_SIZE]);

impl MontgomeryPoint {
    /// The base point u = 9
    pub fn base() -> Self {
        MontgomeryPoint(X25519_BASEPOINT)
    }

    /// Encode a field element as a u-coordinate
    pub fn from_field(u: &FieldElement) -> Self {
        MontgomeryPoint(swap_endianness(&u.to_bytes()))
    }

    /// Decode the u-coordinate: the top bit is ignored and the value reduced mod p
    pub fn to_field(&self) -> FieldElement {
        let mut be = swap_endianness(&self.0);
        be[0] &= 0x7F;
        FieldElement::from_bytes_reduced(&be)
    }

    /// Little‐endian bytes
    pub fn as_bytes(&self) -> &[u8; X25519_SIZE] {
        &self.0
    }

    /// The Montgomery image of a Wei25519 x-coordinate: u = x − A/3
    pub fn from_weierstrass_x(x: &FieldElement) -> Self {
        Self::from_field(&x.sub(&a_over_3()))
    }

    /// The Wei25519 x-coordinate of this point: x = u + A/3
    pub fn to_weierstrass_x(&self) -> FieldElement {
        self.to_field().add(&a_over_3())
    }

    /// Lift to a full Wei25519 point, choosing the y given by [`Curve::lift_x`]
    pub fn lift(&self, curve: &Curve) -> Result<Point> {
        curve.lift_x(&self.to_weierstrass_x())
    }

    /// 2ⁿ·P by repeated x-only doubling; the identity encodes as u = 0
    pub fn double_n(&self, n: u32) -> Self {
        let mut x = self.to_field();
        let mut z = FieldElement::one();
        for _ in 0..n {
            let (x2, z2) = xdbl(&x, &z);
            x = x2;
            z = z2;
        }
        Self::from_field(&x.mul(&z.invert_or_zero()))
    }

    /// Multiply by the cofactor 8
    pub fn clear_cofactor(&self) -> Self {
        self.double_n(CURVE25519.cofactor_bits)
    }

    /// X25519 with this point as u
    pub fn mul_clamped(&self, scalar: &[u8; X25519_SIZE]) -> Self {
        MontgomeryPoint(x25519(scalar, &self.0))
    }
}

/// Clamp an X25519 scalar: clear the low three bits and bit 255, set bit 254
pub fn clamp_scalar(mut k: [u8; X25519_SIZE]) -> [u8; X25519_SIZE] {
    k[0] &= 248;
    k[31] &= 127;
    k[31] |= 64;
    k
}

/// The X25519 function of RFC 7748: clamped k times u, both little‐endian
pub fn x25519(k: &[u8; X25519_SIZE], u: &[u8; X25519_SIZE]) -> [u8; X25519_SIZE] {
    let mut clamped = clamp_scalar(*k);
    let result = ladder(&clamped, &MontgomeryPoint(*u).to_field());
    clamped.zeroize();
    MontgomeryPoint::from_field(&result).0
}

/// X25519 with the base point
pub fn x25519_base(k: &[u8; X25519_SIZE]) -> [u8; X25519_SIZE] {
    x25519(k, &X25519_BASEPOINT)
}

/// Montgomery ladder over bits 254..0 of a little‐endian scalar
///
/// Returns the affine u-coordinate, zero for the point at infinity.
pub fn ladder(k: &[u8; X25519_SIZE], u: &FieldElement) -> FieldElement {
    let mut x2 = FieldElement::one();
    let mut z2 = FieldElement::zero();
    let mut x3 = *u;
    let mut z3 = FieldElement::one();
    let mut swap = Choice::from(0);

    for t in (0..255).rev() {
        let k_t = Choice::from((k[t / 8] >> (t % 8)) & 1);
        swap ^= k_t;
        FieldElement::conditional_swap(&mut x2, &mut x3, swap);
        FieldElement::conditional_swap(&mut z2, &mut z3, swap);
        swap = k_t;

        let (nx3, nz3) = xadd(&x2, &z2, &x3, &z3, u);
        let (nx2, nz2) = xdbl(&x2, &z2);
        x2 = nx2;
        z2 = nz2;
        x3 = nx3;
        z3 = nz3;
    }
    FieldElement::conditional_swap(&mut x2, &mut x3, swap);
    FieldElement::conditional_swap(&mut z2, &mut z3, swap);

    x2.mul(&z2.invert_or_zero())
}

/// x-only doubling in projective (X:Z) coordinates
pub fn xdbl(x: &FieldElement, z: &FieldElement) -> (FieldElement, FieldElement) {
    let aa = x.add(z).square();
    let bb = x.sub(z).square();
    let e = aa.sub(&bb); // 4XZ
    let a24 = FieldElement::from_u32(CURVE25519.a24);
    (aa.mul(&bb), e.mul(&aa.add(&a24.mul(&e))))
}

/// Differential addition: (P, Q) ↦ P + Q given u(P − Q)
pub fn xadd(
    x_p: &FieldElement,
    z_p: &FieldElement,
    x_q: &FieldElement,
    z_q: &FieldElement,
    u_diff: &FieldElement,
) -> (FieldElement, FieldElement) {
    let a = x_p.add(z_p);
    let b = x_p.sub(z_p);
    let c = x_q.add(z_q);
    let d = x_q.sub(z_q);
    let da = d.mul(&a);
    let cb = c.mul(&b);
    (da.add(&cb).square(), u_diff.mul(&da.sub(&cb).square()))
}

fn a_over_3() -> FieldElement {
    FieldElement::from_bytes_reduced(&CURVE25519.a_over_3)
}
