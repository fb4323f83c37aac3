//! Short Weierstrass curves over 𝔽ₚ, p = 2²⁵⁵ − 19
//!
//! The field is fixed; the coefficients, base point and order are runtime
//! values so that an engine can be configured byte by byte.

use crate::ec::wei25519::{
    constants::{WEI25519_FIELD_ELEMENT_SIZE, WEI25519_POINT_SIZE},
    field::FieldElement,
    point::{Point, PointFormat, ProjectivePoint},
    scalar::Scalar,
};
use crate::error::{validate, Error, Result};
use se25519_params::traditional::wei25519::{DomainParameters, WEI25519};

/// y² = x³ + a·x + b over 𝔽ₚ with a base point G of order r
#[derive(Clone, Debug)]
pub struct Curve {
    a: FieldElement,
    b: FieldElement,
    generator: Point,
    order: [u8; WEI25519_FIELD_ELEMENT_SIZE],
}

impl Curve {
    /// The Wei25519 curve from the domain parameter table
    pub fn wei25519() -> Self {
        let domain = &WEI25519;
        Curve {
            a: FieldElement::from_bytes_reduced(&domain.a),
            b: FieldElement::from_bytes_reduced(&domain.b),
            generator: Point::from_affine_unchecked(
                FieldElement::from_bytes_reduced(&domain.g_x()),
                FieldElement::from_bytes_reduced(&domain.g_y()),
            ),
            order: domain.r,
        }
    }

    /// Build a curve from a domain parameter record, validating every component
    pub fn from_domain(domain: &DomainParameters) -> Result<Self> {
        Self::new(&domain.p, &domain.a, &domain.b, &domain.g, &domain.r)
    }

    /// Build a curve from big‐endian components
    ///
    /// `p` must be 2²⁵⁵ − 19, `a` and `b` canonical and non-singular, `g` an
    /// uncompressed point on the curve and `r` non-zero.
    pub fn new(p: &[u8], a: &[u8], b: &[u8], g: &[u8], r: &[u8]) -> Result<Self> {
        validate::length("Curve prime", p.len(), WEI25519_FIELD_ELEMENT_SIZE)?;
        validate::parameter(
            p == WEI25519.p.as_slice(),
            "Curve prime",
            "Only 2^255-19 is supported",
        )?;

        let a = Self::decode_coefficient("Curve coefficient a", a)?;
        let b = Self::decode_coefficient("Curve coefficient b", b)?;
        validate::parameter(
            !Self::discriminant(&a, &b).is_zero(),
            "Curve coefficients",
            "Curve is singular",
        )?;

        validate::length("Curve order", r.len(), WEI25519_FIELD_ELEMENT_SIZE)?;
        validate::parameter(r.iter().any(|&v| v != 0), "Curve order", "Order cannot be zero")?;
        let mut order = [0u8; WEI25519_FIELD_ELEMENT_SIZE];
        order.copy_from_slice(r);

        let mut curve = Curve {
            a,
            b,
            generator: Point::identity(),
            order,
        };
        let generator = curve.decode_uncompressed(g)?;
        validate::parameter(
            !generator.is_identity(),
            "Curve generator",
            "Generator cannot be the identity",
        )?;
        curve.generator = generator;
        Ok(curve)
    }

    /// Coefficient a
    pub fn a(&self) -> &FieldElement {
        &self.a
    }

    /// Coefficient b
    pub fn b(&self) -> &FieldElement {
        &self.b
    }

    /// Base point G
    pub fn generator(&self) -> &Point {
        &self.generator
    }

    /// Order r of G (big‐endian)
    pub fn order(&self) -> &[u8; WEI25519_FIELD_ELEMENT_SIZE] {
        &self.order
    }

    /// x³ + a·x + b
    pub fn rhs(&self, x: &FieldElement) -> FieldElement {
        let x3 = x.square().mul(x);
        x3.add(&self.a.mul(x)).add(&self.b)
    }

    /// Check that (x, y) satisfies y² = x³ + a·x + b
    pub fn contains(&self, x: &FieldElement, y: &FieldElement) -> bool {
        y.square() == self.rhs(x)
    }

    /// Create a point from big‐endian affine coordinates, checking the curve equation
    pub fn point(
        &self,
        x_bytes: &[u8; WEI25519_FIELD_ELEMENT_SIZE],
        y_bytes: &[u8; WEI25519_FIELD_ELEMENT_SIZE],
    ) -> Result<Point> {
        let x = FieldElement::from_bytes(x_bytes)?;
        let y = FieldElement::from_bytes(y_bytes)?;
        if !self.contains(&x, &y) {
            return Err(Error::param("Wei25519 Point", "Point not on curve"));
        }
        Ok(Point::from_affine_unchecked(x, y))
    }

    /// Deserialize from uncompressed bytes (0x04 ∥ x ∥ y), or all‐zeros for identity
    pub fn decode_uncompressed(&self, bytes: &[u8]) -> Result<Point> {
        validate::length("Wei25519 Point", bytes.len(), WEI25519_POINT_SIZE)?;
        match Point::detect_format(bytes)? {
            PointFormat::Identity => Ok(Point::identity()),
            PointFormat::Uncompressed => {
                let mut xb = [0u8; WEI25519_FIELD_ELEMENT_SIZE];
                let mut yb = [0u8; WEI25519_FIELD_ELEMENT_SIZE];
                xb.copy_from_slice(&bytes[1..1 + WEI25519_FIELD_ELEMENT_SIZE]);
                yb.copy_from_slice(&bytes[1 + WEI25519_FIELD_ELEMENT_SIZE..]);
                self.point(&xb, &yb)
            }
        }
    }

    /// Recover a y for the given x, if x³ + a·x + b is a square
    pub fn recover_y(&self, x: &FieldElement) -> Option<FieldElement> {
        self.rhs(x).sqrt()
    }

    /// The point with the given x and the root picked by [`FieldElement::sqrt`]
    pub fn lift_x(&self, x: &FieldElement) -> Result<Point> {
        let y = self
            .recover_y(x)
            .ok_or_else(|| Error::param("Wei25519 Point", "x is not on the curve"))?;
        Ok(Point::from_affine_unchecked(*x, y))
    }

    /// Add two points (group law)
    pub fn add(&self, p: &Point, q: &Point) -> Point {
        p.to_projective()
            .add(&q.to_projective(), &self.a)
            .to_affine()
    }

    /// Double a point: 2P
    pub fn double(&self, p: &Point) -> Point {
        p.to_projective().double(&self.a).to_affine()
    }

    /// Scalar multiplication: scalar · P, double‐and‐add from the top bit
    pub fn mul(&self, p: &Point, scalar: &Scalar) -> Point {
        if p.is_identity() {
            return Point::identity();
        }
        let base = p.to_projective();
        let mut acc = ProjectivePoint::identity();
        for bit in scalar.bits_be() {
            acc = acc.double(&self.a);
            if bit {
                acc = acc.add(&base, &self.a);
            }
        }
        acc.to_affine()
    }

    /// Scalar multiplication with the base point: scalar · G
    pub fn mul_generator(&self, scalar: &Scalar) -> Point {
        self.mul(&self.generator, scalar)
    }

    /// 4a³ + 27b²
    fn discriminant(a: &FieldElement, b: &FieldElement) -> FieldElement {
        let a3 = a.square().mul(a);
        let b2 = b.square();
        FieldElement::from_u32(4)
            .mul(&a3)
            .add(&FieldElement::from_u32(27).mul(&b2))
    }

    fn decode_coefficient(context: &'static str, bytes: &[u8]) -> Result<FieldElement> {
        validate::length(context, bytes.len(), WEI25519_FIELD_ELEMENT_SIZE)?;
        let mut tmp = [0u8; WEI25519_FIELD_ELEMENT_SIZE];
        tmp.copy_from_slice(bytes);
        FieldElement::from_bytes(&tmp)
    }
}

impl Default for Curve {
    fn default() -> Self {
        Self::wei25519()
    }
}
