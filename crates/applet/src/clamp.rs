//! Scalar normalization before it reaches the engine
//!
//! A raw 32-byte scalar (big-endian) is clamped the X25519 way and then
//! divided by the cofactor with a three-bit right shift. The result lies in
//! [2²⁵¹, 2²⁵²), so it is below the Wei25519 order and never zero. The peer
//! restores the factor 8 with three doublings.

use core::fmt;
use se25519_common::security::SecretBuffer;
use se25519_params::applet::SCALAR_SIZE;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Clear bit 255, set bit 254 and clear the three low bits (big-endian)
#[inline]
pub fn clamp(s: &mut [u8; SCALAR_SIZE]) {
    s[0] &= 0x7F;
    s[0] |= 0x40;
    s[SCALAR_SIZE - 1] &= 0xF8;
}

/// Logical right shift by three bits across the whole array
#[inline]
pub fn shift_right_3(s: &mut [u8; SCALAR_SIZE]) {
    for i in (1..SCALAR_SIZE).rev() {
        s[i] = (s[i] >> 3) | ((s[i - 1] & 0x07) << 5);
    }
    s[0] >>= 3;
}

/// A scalar that went through [`clamp`] and [`shift_right_3`] exactly once
///
/// Only [`ReducedScalar::from_raw`] builds one, so any value of this type is
/// safe to hand to the engine.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct ReducedScalar(SecretBuffer<SCALAR_SIZE>);

impl ReducedScalar {
    /// Clamp and shift a raw scalar; the input is left untouched
    pub fn from_raw(raw: &[u8; SCALAR_SIZE]) -> Self {
        let mut s = *raw;
        clamp(&mut s);
        shift_right_3(&mut s);
        let reduced = Self(SecretBuffer::new(s));
        s.zeroize();
        reduced
    }

    /// Big-endian bytes
    pub fn as_bytes(&self) -> &[u8; SCALAR_SIZE] {
        self.0.as_array()
    }
}

impl fmt::Debug for ReducedScalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ReducedScalar([REDACTED])")
    }
}
