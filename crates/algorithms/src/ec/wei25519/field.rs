//! Arithmetic in 𝔽ₚ with p = 2²⁵⁵ − 19

use crate::ec::wei25519::constants::WEI25519_FIELD_ELEMENT_SIZE;
use crate::error::{Error, Result};
use se25519_internal::endian::{limbs_from_be_bytes, limbs_to_be_bytes};
use subtle::{Choice, ConditionallySelectable};

/// Number of 32‐bit limbs for a field element (8 × 32 = 256 bits)
const NLIMBS: usize = 8;

/// p − 2, the inversion exponent (big-endian)
const P_MINUS_2: [u8; WEI25519_FIELD_ELEMENT_SIZE] = [
    0x7f, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xeb,
];

/// (p + 3) / 8 = 2²⁵² − 2, the square root exponent (big-endian)
const SQRT_EXP: [u8; WEI25519_FIELD_ELEMENT_SIZE] = [
    0x0f, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xfe,
];

/// √−1 = 2^((p−1)/4) (big-endian)
const SQRT_M1: [u8; WEI25519_FIELD_ELEMENT_SIZE] = [
    0x2b, 0x83, 0x24, 0x80, 0x4f, 0xc1, 0xdf, 0x0b, 0x2b, 0x4d, 0x00, 0x99, 0x3d, 0xfb, 0xd7, 0xa7,
    0x2f, 0x43, 0x18, 0x06, 0xad, 0x2f, 0xe4, 0x78, 0xc4, 0xee, 0x1b, 0x27, 0x4a, 0x0e, 0xa0, 0xb0,
];

/// Field element representing values in 𝔽ₚ, where p = 2²⁵⁵ − 19.
/// Internally stored as 8 little‐endian 32‐bit limbs, always fully reduced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldElement(pub(crate) [u32; NLIMBS]);

impl FieldElement {
    /// p = 0x7FFFFFFF FFFFFFFF … FFFFFFED in little‐endian limbs
    pub(crate) const MOD_LIMBS: [u32; NLIMBS] = [
        0xFFFF_FFED, // least significant
        0xFFFF_FFFF,
        0xFFFF_FFFF,
        0xFFFF_FFFF,
        0xFFFF_FFFF,
        0xFFFF_FFFF,
        0xFFFF_FFFF,
        0x7FFF_FFFF, // most significant
    ];

    /// Build a field element from a small literal (`0 ≤ n < 2³²`)
    #[inline]
    pub fn from_u32(n: u32) -> Self {
        let mut limbs = [0u32; NLIMBS];
        limbs[0] = n;
        FieldElement(limbs)
    }

    /// The additive identity: 0
    #[inline]
    pub fn zero() -> Self {
        FieldElement([0u32; NLIMBS])
    }

    /// The multiplicative identity: 1
    #[inline]
    pub fn one() -> Self {
        Self::from_u32(1)
    }

    /// Create a field element from big‐endian bytes.
    /// Rejects non-canonical encodings (value ≥ p).
    pub fn from_bytes(bytes: &[u8; WEI25519_FIELD_ELEMENT_SIZE]) -> Result<Self> {
        let fe = FieldElement(limbs_from_be_bytes(bytes));
        if !fe.is_valid() {
            return Err(Error::param("FieldElement 2^255-19", "Value ≥ modulus"));
        }
        Ok(fe)
    }

    /// Create a field element from any 256-bit big‐endian value, reducing mod p
    pub fn from_bytes_reduced(bytes: &[u8; WEI25519_FIELD_ELEMENT_SIZE]) -> Self {
        // 2²⁵⁶ − 1 < 3p, so two subtractions always suffice
        let mut out = limbs_from_be_bytes(bytes);
        for _ in 0..2 {
            let (sub, borrow) = Self::sbb8(out, Self::MOD_LIMBS);
            out = Self::conditional_select_limbs(&out, &sub, Choice::from((borrow ^ 1) as u8));
        }
        FieldElement(out)
    }

    /// Convert this field element into big‐endian bytes.
    pub fn to_bytes(&self) -> [u8; WEI25519_FIELD_ELEMENT_SIZE] {
        limbs_to_be_bytes(&self.0)
    }

    /// Constant‐time check: is self < p ?
    #[inline(always)]
    pub fn is_valid(&self) -> bool {
        let (_, borrow) = Self::sbb8(self.0, Self::MOD_LIMBS);
        borrow == 1
    }

    /// Check if element is zero
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&w| w == 0)
    }

    /// Return true if the element is odd (least‐significant bit = 1).
    pub fn is_odd(&self) -> bool {
        (self.0[0] & 1) == 1
    }

    /// Constant‐time addition: (self + other) mod p
    pub fn add(&self, other: &Self) -> Self {
        let (sum, carry) = Self::adc8(self.0, other.0);

        // If carry = 1 or sum ≥ p, subtract p
        let (reduced, borrow) = Self::sbb8(sum, Self::MOD_LIMBS);
        let need_reduce = (carry | (borrow ^ 1)) & 1;

        FieldElement(Self::conditional_select_limbs(
            &sum,
            &reduced,
            Choice::from(need_reduce as u8),
        ))
    }

    /// Constant‐time subtraction: (self - other) mod p
    pub fn sub(&self, other: &Self) -> Self {
        let (diff, borrow) = Self::sbb8(self.0, other.0);
        let (diff_plus_p, _) = Self::adc8(diff, Self::MOD_LIMBS);
        FieldElement(Self::conditional_select_limbs(
            &diff,
            &diff_plus_p,
            Choice::from(borrow as u8),
        ))
    }

    /// Field multiplication: (self * other) mod p
    /// Schoolbook 8×8 → 16‐limb product, then reduction
    pub fn mul(&self, other: &Self) -> Self {
        let mut t = [0u128; NLIMBS * 2];
        for i in 0..NLIMBS {
            for j in 0..NLIMBS {
                t[i + j] += (self.0[i] as u128) * (other.0[j] as u128);
            }
        }

        let mut wide = [0u32; NLIMBS * 2];
        let mut carry: u128 = 0;
        for (w, &acc) in wide.iter_mut().zip(t.iter()) {
            let v = acc + carry;
            *w = (v & 0xFFFF_FFFF) as u32;
            carry = v >> 32;
        }

        Self::reduce_wide(wide)
    }

    /// Field squaring: (self²) mod p
    #[inline(always)]
    pub fn square(&self) -> Self {
        self.mul(self)
    }

    /// Raise to a big‐endian exponent by square-and-multiply
    pub fn pow(&self, exp_be: &[u8]) -> Self {
        let mut result = FieldElement::one();
        for &byte in exp_be.iter() {
            for bit in (0..8).rev() {
                result = result.square();
                if (byte >> bit) & 1 == 1 {
                    result = result.mul(self);
                }
            }
        }
        result
    }

    /// Compute multiplicative inverse via Fermat: a^(p-2) mod p
    pub fn invert(&self) -> Result<Self> {
        if self.is_zero() {
            return Err(Error::param("FieldElement 2^255-19", "Inverse of zero"));
        }
        Ok(self.pow(&P_MINUS_2))
    }

    /// a^(p-2) mod p, which maps zero to zero
    pub fn invert_or_zero(&self) -> Self {
        self.pow(&P_MINUS_2)
    }

    /// Negate this field element: p - self, or zero
    pub fn negate(&self) -> Self {
        FieldElement::zero().sub(self)
    }

    /// Compute a square root, using p ≡ 5 (mod 8)
    ///
    /// The candidate c = x^((p+3)/8) satisfies c² = ±x; when c² = −x the root
    /// is c·√−1. Returns `None` for non-residues.
    pub fn sqrt(&self) -> Option<Self> {
        if self.is_zero() {
            return Some(FieldElement::zero());
        }

        let candidate = self.pow(&SQRT_EXP);
        if candidate.square() == *self {
            return Some(candidate);
        }

        let sqrt_m1 = FieldElement(limbs_from_be_bytes(&SQRT_M1));
        let adjusted = candidate.mul(&sqrt_m1);
        if adjusted.square() == *self {
            Some(adjusted)
        } else {
            None
        }
    }

    /* ================================================================= */
    /*  Private helper methods (constant‐time arithmetic)                */
    /* ================================================================= */

    /// 8‐limb addition with carry
    #[inline(always)]
    fn adc8(a: [u32; NLIMBS], b: [u32; NLIMBS]) -> ([u32; NLIMBS], u32) {
        let mut r = [0u32; NLIMBS];
        let mut carry = 0u64;
        for ((&a_limb, &b_limb), r_limb) in a.iter().zip(b.iter()).zip(r.iter_mut()) {
            let tmp = (a_limb as u64) + (b_limb as u64) + carry;
            *r_limb = (tmp & 0xFFFF_FFFF) as u32;
            carry = tmp >> 32;
        }
        (r, carry as u32)
    }

    /// 8‐limb subtraction with borrow
    #[inline(always)]
    fn sbb8(a: [u32; NLIMBS], b: [u32; NLIMBS]) -> ([u32; NLIMBS], u32) {
        let mut r = [0u32; NLIMBS];
        let mut borrow = 0u32;
        for ((&a_limb, &b_limb), r_limb) in a.iter().zip(b.iter()).zip(r.iter_mut()) {
            let ai = a_limb as u64;
            let bi = b_limb as u64 + borrow as u64;
            *r_limb = ai.wrapping_sub(bi) as u32;
            borrow = (ai < bi) as u32;
        }
        (r, borrow)
    }

    /// Constant‐time select: if flag == 0 return a else return b
    fn conditional_select_limbs(
        a: &[u32; NLIMBS],
        b: &[u32; NLIMBS],
        flag: Choice,
    ) -> [u32; NLIMBS] {
        let mut out = [0u32; NLIMBS];
        for ((a_limb, b_limb), out_limb) in a.iter().zip(b.iter()).zip(out.iter_mut()) {
            *out_limb = u32::conditional_select(a_limb, b_limb, flag);
        }
        out
    }

    /// Reduce a 16-word (512-bit) value modulo p = 2²⁵⁵ − 19.
    ///
    /// Folds the high half with 2²⁵⁶ ≡ 38 (mod p) until no carry is left,
    /// then applies two conditional subtractions of p.
    fn reduce_wide(t: [u32; NLIMBS * 2]) -> FieldElement {
        // step 1: r = low + 38·high
        let mut r = [0u64; NLIMBS];
        for (i, r_limb) in r.iter_mut().enumerate() {
            *r_limb = t[i] as u64 + 38 * (t[i + NLIMBS] as u64);
        }

        // step 2: propagate carries over the eight 32-bit limbs
        let mut carry = 0u64;
        for limb in &mut r {
            let tmp = *limb + carry;
            *limb = tmp & 0xFFFF_FFFF;
            carry = tmp >> 32;
        }

        // step 3: fold the residual carry, again with 2²⁵⁶ ≡ 38
        while carry != 0 {
            let mut c = carry * 38;
            for limb in &mut r {
                let tmp = *limb + c;
                *limb = tmp & 0xFFFF_FFFF;
                c = tmp >> 32;
            }
            carry = c;
        }

        // step 4: at most two conditional subtractions of p
        let mut out = [0u32; NLIMBS];
        for (out_limb, &r_limb) in out.iter_mut().zip(r.iter()) {
            *out_limb = r_limb as u32;
        }
        for _ in 0..2 {
            let (sub, borrow) = Self::sbb8(out, Self::MOD_LIMBS);
            out = Self::conditional_select_limbs(&out, &sub, Choice::from((borrow ^ 1) as u8));
        }

        FieldElement(out)
    }
}

impl ConditionallySelectable for FieldElement {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        FieldElement(Self::conditional_select_limbs(&a.0, &b.0, choice))
    }
}
