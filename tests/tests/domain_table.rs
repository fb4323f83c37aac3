//! The Wei25519 table the applet loads, checked against Curve25519

use se25519_algorithms::{Curve, FieldElement, MontgomeryPoint, Scalar};
use se25519_params::traditional::curve25519::CURVE25519;
use se25519_params::traditional::wei25519::WEI25519;

fn fe(bytes: &[u8; 32]) -> FieldElement {
    FieldElement::from_bytes(bytes).unwrap()
}

fn a_over_3() -> FieldElement {
    let a = FieldElement::from_u32(CURVE25519.a);
    a.mul(&FieldElement::from_u32(3).invert().unwrap())
}

#[test]
fn test_coefficients_follow_from_montgomery_a() {
    let a = FieldElement::from_u32(CURVE25519.a);
    let three = FieldElement::from_u32(3);
    let nine = FieldElement::from_u32(9);
    let a2 = a.square();
    let a3 = a2.mul(&a);

    // a = (3 − A²) / 3
    let wa = three.sub(&a2).mul(&three.invert().unwrap());
    assert_eq!(wa, fe(&WEI25519.a));

    // b = (2A³ − 9A) / 27
    let wb = a3
        .add(&a3)
        .sub(&nine.mul(&a))
        .mul(&FieldElement::from_u32(27).invert().unwrap());
    assert_eq!(wb, fe(&WEI25519.b));
}

#[test]
fn test_a_over_3_constant() {
    assert_eq!(fe(&CURVE25519.a_over_3), a_over_3());
}

#[test]
fn test_generator_is_the_x25519_base_point() {
    let gx = fe(&WEI25519.g_x());
    assert_eq!(gx, FieldElement::from_u32(9).add(&a_over_3()));
    assert_eq!(MontgomeryPoint::from_weierstrass_x(&gx), MontgomeryPoint::base());
    assert_eq!(WEI25519.g[0], 0x04);
}

#[test]
fn test_generator_on_curve_with_prime_order() {
    let curve = Curve::from_domain(&WEI25519).unwrap();
    let g = *curve.generator();
    assert!(curve.contains(g.x(), g.y()));

    let r = Scalar::new(WEI25519.r).unwrap();
    assert!(curve.mul(&g, &r).is_identity());

    let mut r_minus_1 = WEI25519.r;
    r_minus_1[31] -= 1;
    let neg = curve.mul(&g, &Scalar::new(r_minus_1).unwrap());
    assert_eq!(neg, g.negate());
}

#[test]
fn test_table_shape() {
    // p − 1 is the largest canonical field element
    let mut p_minus_1 = WEI25519.p;
    p_minus_1[31] -= 1;
    assert_eq!(fe(&p_minus_1), FieldElement::zero().sub(&FieldElement::one()));
    assert!(FieldElement::from_bytes(&WEI25519.p).is_err());
    assert_eq!(WEI25519.h, 8);
    assert_eq!(WEI25519.key_length_bits, 255);
    assert_eq!(WEI25519.r[0], 0x10);
}
