//! Domain parameters of Wei25519, the short Weierstrass model of Curve25519
//!
//! y² = x³ + a·x + b over 𝔽ₚ with p = 2²⁵⁵ − 19. The map from the Montgomery
//! model v² = u³ + A·u² + u is x = u + A/3, y = v.

/// Size of a field element or scalar in bytes
pub const WEI25519_FIELD_SIZE: usize = 32;

/// Size of an uncompressed point: 0x04 ∥ x ∥ y
pub const WEI25519_POINT_UNCOMPRESSED_SIZE: usize = 1 + 2 * WEI25519_FIELD_SIZE;

/// Structure containing short Weierstrass domain parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DomainParameters {
    /// Field prime p (big-endian)
    pub p: [u8; WEI25519_FIELD_SIZE],

    /// Coefficient a (big-endian)
    pub a: [u8; WEI25519_FIELD_SIZE],

    /// Coefficient b (big-endian)
    pub b: [u8; WEI25519_FIELD_SIZE],

    /// Base point G, uncompressed (0x04 ∥ x ∥ y)
    pub g: [u8; WEI25519_POINT_UNCOMPRESSED_SIZE],

    /// Order r of the subgroup generated by G (big-endian)
    pub r: [u8; WEI25519_FIELD_SIZE],

    /// Cofactor h
    pub h: u16,

    /// Key length in bits handed to the engine when building keys
    pub key_length_bits: u16,
}

impl DomainParameters {
    /// x-coordinate of the base point
    pub fn g_x(&self) -> [u8; WEI25519_FIELD_SIZE] {
        let mut x = [0u8; WEI25519_FIELD_SIZE];
        x.copy_from_slice(&self.g[1..1 + WEI25519_FIELD_SIZE]);
        x
    }

    /// y-coordinate of the base point
    pub fn g_y(&self) -> [u8; WEI25519_FIELD_SIZE] {
        let mut y = [0u8; WEI25519_FIELD_SIZE];
        y.copy_from_slice(&self.g[1 + WEI25519_FIELD_SIZE..]);
        y
    }
}

/// Wei25519 parameters
pub const WEI25519: DomainParameters = DomainParameters {
    // 2^255 - 19
    p: [
        0x7f, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xed,
    ],
    a: [
        0x2a, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa,
        0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0x98, 0x49, 0x14, 0xa1, 0x44,
    ],
    b: [
        0x7b, 0x42, 0x5e, 0xd0, 0x97, 0xb4, 0x25, 0xed, 0x09, 0x7b, 0x42, 0x5e, 0xd0, 0x97, 0xb4, 0x25,
        0xed, 0x09, 0x7b, 0x42, 0x5e, 0xd0, 0x97, 0xb4, 0x26, 0x0b, 0x5e, 0x9c, 0x77, 0x10, 0xc8, 0x64,
    ],
    g: [
        0x04,
        0x2a, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa,
        0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xad, 0x24, 0x5a,
        0x20, 0xae, 0x19, 0xa1, 0xb8, 0xa0, 0x86, 0xb4, 0xe0, 0x1e, 0xdd, 0x2c, 0x77, 0x48, 0xd1, 0x4c,
        0x92, 0x3d, 0x4d, 0x7e, 0x6d, 0x7c, 0x61, 0xb2, 0x29, 0xe9, 0xc5, 0xa2, 0x7e, 0xce, 0xd3, 0xd9,
    ],
    // 2^252 + 27742317777372353535851937790883648493
    r: [
        0x10, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x14, 0xde, 0xf9, 0xde, 0xa2, 0xf7, 0x9c, 0xd6, 0x58, 0x12, 0x63, 0x1a, 0x5c, 0xf5, 0xd3, 0xed,
    ],
    h: 8,
    key_length_bits: 255,
};
