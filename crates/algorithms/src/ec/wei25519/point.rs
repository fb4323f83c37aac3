//! Wei25519 point representations and the group law
//!
//! Points carry no curve reference; operations that depend on the curve
//! coefficients live on [`Curve`](super::Curve) and pass `a` down to the
//! Jacobian doubling.

use crate::ec::wei25519::{
    constants::{WEI25519_COORDINATES_SIZE, WEI25519_FIELD_ELEMENT_SIZE, WEI25519_POINT_SIZE},
    field::FieldElement,
};
use crate::error::{Error, Result};
use subtle::Choice;

/// Format of a serialized elliptic‐curve point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointFormat {
    /// Identity point (all zeros)
    Identity,
    /// Uncompressed: 0x04 ∥ x ∥ y
    Uncompressed,
}

/// Affine coordinates (x, y) or identity
#[derive(Clone, Copy, Debug)]
pub struct Point {
    pub(crate) is_identity: Choice,
    pub(crate) x: FieldElement,
    pub(crate) y: FieldElement,
}

/// Jacobian coordinates (X:Y:Z) for efficient arithmetic
#[derive(Clone, Copy, Debug)]
pub(crate) struct ProjectivePoint {
    pub(crate) is_identity: Choice,
    pub(crate) x: FieldElement,
    pub(crate) y: FieldElement,
    pub(crate) z: FieldElement,
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        let a_id: bool = self.is_identity.into();
        let b_id: bool = other.is_identity.into();
        if a_id || b_id {
            return a_id == b_id;
        }
        self.x == other.x && self.y == other.y
    }
}

impl Eq for Point {}

impl Point {
    /// Wrap affine coordinates without checking the curve equation
    pub(crate) fn from_affine_unchecked(x: FieldElement, y: FieldElement) -> Self {
        Point {
            is_identity: Choice::from(0),
            x,
            y,
        }
    }

    /// The identity (point at infinity)
    pub fn identity() -> Self {
        Point {
            is_identity: Choice::from(1),
            x: FieldElement::zero(),
            y: FieldElement::zero(),
        }
    }

    /// Is this the identity point?
    pub fn is_identity(&self) -> bool {
        self.is_identity.into()
    }

    /// Affine x-coordinate
    pub fn x(&self) -> &FieldElement {
        &self.x
    }

    /// Affine y-coordinate
    pub fn y(&self) -> &FieldElement {
        &self.y
    }

    /// Extract x‐coordinate as big‐endian bytes
    pub fn x_coordinate_bytes(&self) -> [u8; WEI25519_FIELD_ELEMENT_SIZE] {
        self.x.to_bytes()
    }

    /// Extract y‐coordinate as big‐endian bytes
    pub fn y_coordinate_bytes(&self) -> [u8; WEI25519_FIELD_ELEMENT_SIZE] {
        self.y.to_bytes()
    }

    /// Detect serialized point format
    pub fn detect_format(bytes: &[u8]) -> Result<PointFormat> {
        if bytes.is_empty() {
            return Err(Error::param("Wei25519 Point", "Empty encoding"));
        }
        match (bytes[0], bytes.len()) {
            (0x00, WEI25519_POINT_SIZE) => {
                if bytes.iter().all(|&b| b == 0) {
                    Ok(PointFormat::Identity)
                } else {
                    Err(Error::param("Wei25519 Point", "Invalid identity encoding"))
                }
            }
            (0x04, WEI25519_POINT_SIZE) => Ok(PointFormat::Uncompressed),
            _ => Err(Error::param("Wei25519 Point", "Unknown or malformed format")),
        }
    }

    /// Serialize this point as uncompressed: 0x04 ∥ x ∥ y
    pub fn serialize_uncompressed(&self) -> [u8; WEI25519_POINT_SIZE] {
        let mut out = [0u8; WEI25519_POINT_SIZE];
        if self.is_identity() {
            return out; // all zeros
        }
        out[0] = 0x04;
        out[1..].copy_from_slice(&self.coordinates());
        out
    }

    /// x ∥ y without the format byte
    pub fn coordinates(&self) -> [u8; WEI25519_COORDINATES_SIZE] {
        let mut out = [0u8; WEI25519_COORDINATES_SIZE];
        out[..WEI25519_FIELD_ELEMENT_SIZE].copy_from_slice(&self.x.to_bytes());
        out[WEI25519_FIELD_ELEMENT_SIZE..].copy_from_slice(&self.y.to_bytes());
        out
    }

    /// The inverse point (x, −y)
    pub fn negate(&self) -> Self {
        if self.is_identity() {
            return *self;
        }
        Point::from_affine_unchecked(self.x, self.y.negate())
    }

    /// Convert affine to Jacobian for intermediate computations
    pub(crate) fn to_projective(self) -> ProjectivePoint {
        if self.is_identity() {
            ProjectivePoint::identity()
        } else {
            ProjectivePoint {
                is_identity: Choice::from(0),
                x: self.x,
                y: self.y,
                z: FieldElement::one(),
            }
        }
    }
}

impl ProjectivePoint {
    /// Identity in Jacobian form: (0 : 1 : 0)
    pub fn identity() -> Self {
        ProjectivePoint {
            is_identity: Choice::from(1),
            x: FieldElement::zero(),
            y: FieldElement::one(),
            z: FieldElement::zero(),
        }
    }

    /// Point addition (Jacobian coordinates); `a` is only used on doubling
    pub fn add(&self, other: &Self, a: &FieldElement) -> Self {
        if self.is_identity.into() {
            return *other;
        }
        if other.is_identity.into() {
            return *self;
        }

        // Z₁², Z₂², Z₁³, Z₂³
        let z1_sq = self.z.square();
        let z2_sq = other.z.square();
        let z1_cu = z1_sq.mul(&self.z);
        let z2_cu = z2_sq.mul(&other.z);

        let u1 = self.x.mul(&z2_sq); // X₁·Z₂²
        let u2 = other.x.mul(&z1_sq); // X₂·Z₁²
        let s1 = self.y.mul(&z2_cu); // Y₁·Z₂³
        let s2 = other.y.mul(&z1_cu); // Y₂·Z₁³

        let h = u2.sub(&u1);
        let r = s2.sub(&s1);

        if h.is_zero() {
            if r.is_zero() {
                return self.double(a);
            } else {
                return ProjectivePoint::identity();
            }
        }

        let h2 = h.square();
        let h3 = h2.mul(&h);
        let v = u1.mul(&h2);

        // X₃ = r² - h³ - 2v
        let x3 = r.square().sub(&h3).sub(&v.add(&v));

        // Y₃ = r·(v - X₃) - s1·h³
        let y3 = r.mul(&v.sub(&x3)).sub(&s1.mul(&h3));

        // Z₃ = Z₁·Z₂·h
        let z3 = self.z.mul(&other.z).mul(&h);

        ProjectivePoint {
            is_identity: Choice::from(0),
            x: x3,
            y: y3,
            z: z3,
        }
    }

    /// Point doubling (Jacobian coordinates) for a general coefficient `a`
    pub fn double(&self, a: &FieldElement) -> Self {
        if self.is_identity.into() {
            return *self;
        }
        if self.y.is_zero() {
            return ProjectivePoint::identity();
        }

        //   S  = 4·X·Y²
        //   M  = 3·X² + a·Z⁴
        //   X₃ = M² − 2·S
        //   Y₃ = M·(S − X₃) − 8·Y⁴
        //   Z₃ = 2·Y·Z
        let yy = self.y.square();
        let s = {
            let xyy = self.x.mul(&yy);
            let two = xyy.add(&xyy);
            two.add(&two)
        };
        let m = {
            let xx = self.x.square();
            let three_xx = xx.add(&xx).add(&xx);
            let z4 = self.z.square().square();
            three_xx.add(&a.mul(&z4))
        };

        let x3 = m.square().sub(&s.add(&s));

        let eight_y4 = {
            let y4 = yy.square();
            let two = y4.add(&y4);
            let four = two.add(&two);
            four.add(&four)
        };
        let y3 = m.mul(&s.sub(&x3)).sub(&eight_y4);

        let yz = self.y.mul(&self.z);
        let z3 = yz.add(&yz);

        ProjectivePoint {
            is_identity: Choice::from(0),
            x: x3,
            y: y3,
            z: z3,
        }
    }

    /// Convert Jacobian back to affine coordinates
    pub fn to_affine(self) -> Point {
        if self.is_identity.into() {
            return Point::identity();
        }
        let z_inv = match self.z.invert() {
            Ok(z_inv) => z_inv,
            // Z = 0 is the point at infinity
            Err(_) => return Point::identity(),
        };
        let z_inv_sq = z_inv.square();
        let z_inv_cu = z_inv_sq.mul(&z_inv);
        Point::from_affine_unchecked(self.x.mul(&z_inv_sq), self.y.mul(&z_inv_cu))
    }
}
