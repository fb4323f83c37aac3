//! Constants for Curve25519 in Montgomery form (v² = u³ + A·u² + u)

/// Size of an X25519 scalar or u-coordinate in bytes
pub const X25519_SIZE: usize = 32;

/// Structure containing Montgomery curve parameters
pub struct Curve25519Params {
    /// Coefficient A
    pub a: u32,

    /// (A - 2) / 4, used by the ladder step
    pub a24: u32,

    /// u-coordinate of the base point
    pub base_u: u8,

    /// A/3 mod p (big-endian), offset between Montgomery u and Weierstrass x
    pub a_over_3: [u8; X25519_SIZE],

    /// Number of doublings that clear the cofactor (h = 2^3)
    pub cofactor_bits: u32,
}

/// Curve25519 parameters
pub const CURVE25519: Curve25519Params = Curve25519Params {
    a: 486662,
    a24: 121665,
    base_u: 9,
    a_over_3: [
        0x2a, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa,
        0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xad, 0x24, 0x51,
    ],
    cofactor_bits: 3,
};
