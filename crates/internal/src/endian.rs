//! Byte-order helpers for 256-bit values

/// Split 32 big-endian bytes into eight little-endian u32 limbs
pub fn limbs_from_be_bytes(bytes: &[u8; 32]) -> [u32; 8] {
    let mut limbs = [0u32; 8];
    for (i, limb) in limbs.iter_mut().enumerate() {
        let offset = (7 - i) * 4;
        *limb = u32::from_be_bytes([
            bytes[offset],
            bytes[offset + 1],
            bytes[offset + 2],
            bytes[offset + 3],
        ]);
    }
    limbs
}

/// Join eight little-endian u32 limbs into 32 big-endian bytes
pub fn limbs_to_be_bytes(limbs: &[u32; 8]) -> [u8; 32] {
    let mut out = [0u8; 32];
    for (i, limb) in limbs.iter().enumerate() {
        let offset = (7 - i) * 4;
        out[offset..offset + 4].copy_from_slice(&limb.to_be_bytes());
    }
    out
}

/// Reverse a 32-byte string, switching between big- and little-endian encodings
pub fn swap_endianness(bytes: &[u8; 32]) -> [u8; 32] {
    let mut out = *bytes;
    out.reverse();
    out
}
