//! Wei25519 scalars

use crate::ec::wei25519::constants::WEI25519_SCALAR_SIZE;
use crate::error::{validate, Error, Result};
use rand::{CryptoRng, RngCore};
use se25519_common::security::SecretBuffer;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Non-zero scalar for point multiplication, 32 bytes big‐endian.
///
/// Unlike a group-order scalar this type is not reduced: the engine it serves
/// multiplies by exactly the integer it was given, and range checks against a
/// subgroup order are left to [`Scalar::is_below`].
#[derive(Clone, Zeroize, ZeroizeOnDrop, Debug)]
pub struct Scalar(SecretBuffer<WEI25519_SCALAR_SIZE>);

impl Scalar {
    /// Create a scalar from raw big‐endian bytes. Errors if the value is zero.
    pub fn new(data: [u8; WEI25519_SCALAR_SIZE]) -> Result<Self> {
        let buffer = SecretBuffer::new(data);
        if bool::from(buffer.is_zero()) {
            return Err(Error::param("Wei25519 Scalar", "Scalar cannot be zero"));
        }
        Ok(Scalar(buffer))
    }

    /// Deserialize from a byte slice (with validation)
    pub fn deserialize(bytes: &[u8]) -> Result<Self> {
        validate::length("Wei25519 Scalar", bytes.len(), WEI25519_SCALAR_SIZE)?;
        let mut tmp = [0u8; WEI25519_SCALAR_SIZE];
        tmp.copy_from_slice(bytes);
        let scalar = Self::new(tmp);
        tmp.zeroize();
        scalar
    }

    /// Draw a uniformly random non-zero scalar below `bound` (big-endian)
    pub fn random<R: RngCore + CryptoRng>(
        rng: &mut R,
        bound: &[u8; WEI25519_SCALAR_SIZE],
    ) -> Result<Self> {
        validate::parameter(
            bound.iter().any(|&b| b != 0),
            "Wei25519 Scalar",
            "Bound cannot be zero",
        )?;
        // Mask to the bit length of the bound so rejection terminates quickly
        let top = bound.iter().position(|&b| b != 0).unwrap_or(0);
        let mask = 0xFFu8 >> bound[top].leading_zeros();
        let mut bytes = [0u8; WEI25519_SCALAR_SIZE];
        loop {
            rng.try_fill_bytes(&mut bytes).map_err(|_| Error::Processing {
                operation: "Wei25519 Scalar",
                details: "Random source failed",
            })?;
            bytes[..top].fill(0);
            bytes[top] &= mask;
            if let Ok(scalar) = Self::new(bytes) {
                if scalar.is_below(bound) {
                    bytes.zeroize();
                    return Ok(scalar);
                }
            }
        }
    }

    /// Access the underlying SecretBuffer
    pub fn as_secret_buffer(&self) -> &SecretBuffer<WEI25519_SCALAR_SIZE> {
        &self.0
    }

    /// Serialize to big‐endian bytes
    pub fn serialize(&self) -> [u8; WEI25519_SCALAR_SIZE] {
        *self.0.as_array()
    }

    /// Is this scalar strictly below `bound` (both big‐endian)?
    pub fn is_below(&self, bound: &[u8; WEI25519_SCALAR_SIZE]) -> bool {
        let mut gt = 0u8;
        let mut lt = 0u8;
        for (&x, &y) in self.0.as_slice().iter().zip(bound.iter()) {
            gt |= ((x > y) as u8) & (!lt & 1);
            lt |= ((x < y) as u8) & (!gt & 1);
        }
        lt == 1
    }

    /// Bits from most to least significant
    pub(crate) fn bits_be(&self) -> impl Iterator<Item = bool> + '_ {
        self.0
            .as_slice()
            .iter()
            .flat_map(|&byte| (0..8).rev().map(move |i| (byte >> i) & 1 == 1))
    }
}
