//! Shared constants for Wei25519 operations

use se25519_params::traditional::wei25519::{
    WEI25519_FIELD_SIZE, WEI25519_POINT_UNCOMPRESSED_SIZE,
};

/// Size of a scalar in bytes (32 bytes, of which 255 bits are used)
pub const WEI25519_SCALAR_SIZE: usize = WEI25519_FIELD_SIZE;

/// Size of a field element in bytes
pub const WEI25519_FIELD_ELEMENT_SIZE: usize = WEI25519_FIELD_SIZE;

/// Size of an uncompressed point in bytes:
/// format byte (0x04) + x-coordinate + y-coordinate
pub const WEI25519_POINT_SIZE: usize = WEI25519_POINT_UNCOMPRESSED_SIZE; // 65 bytes

/// Size of a point without the format byte: x-coordinate + y-coordinate
pub const WEI25519_COORDINATES_SIZE: usize = 2 * WEI25519_FIELD_ELEMENT_SIZE; // 64 bytes
