//! Conversions between card values and X25519 values
//!
//! The card works on Wei25519 with scalars divided by 8. Its x-coordinates
//! map to Montgomery u = x − A/3, and the missing factor 8 is three x-only
//! doublings. X25519 scalars and u-coordinates are little-endian, card values
//! big-endian.

use crate::error::{HostError, Result};
use se25519_algorithms::ec::montgomery::MontgomeryPoint;
use se25519_algorithms::ec::wei25519::{Curve, FieldElement};
use se25519_params::applet::{COORDINATE_SIZE, PUBLIC_POINT_SIZE, SCALAR_SIZE};
use se25519_params::traditional::curve25519::X25519_SIZE;
use zeroize::Zeroizing;

/// Reduced card scalar (big-endian) to the X25519 scalar it stands for
///
/// The result is `reduced << 3` in little-endian order.
pub fn scalar_from_card(reduced: &[u8]) -> Result<Zeroizing<[u8; X25519_SIZE]>> {
    let reduced: &[u8; SCALAR_SIZE] = reduced.try_into().map_err(|_| {
        HostError::UnexpectedLength {
            context: "card scalar",
            actual: reduced.len(),
        }
    })?;
    if reduced[0] >> 5 != 0 {
        return Err(HostError::Conversion(se25519_algorithms::Error::param(
            "card scalar",
            "not a reduced scalar",
        )));
    }
    let mut sk = Zeroizing::new([0u8; X25519_SIZE]);
    for i in 0..SCALAR_SIZE {
        let next = if i + 1 < SCALAR_SIZE { reduced[i + 1] >> 5 } else { 0 };
        // big-endian byte i lands at little-endian position 31 - i
        sk[SCALAR_SIZE - 1 - i] = (reduced[i] << 3) | next;
    }
    Ok(sk)
}

/// X25519 scalar to the big-endian integer the card expects
pub fn scalar_to_card(sk: &[u8; X25519_SIZE]) -> Zeroizing<[u8; SCALAR_SIZE]> {
    let mut be = Zeroizing::new(*sk);
    be.reverse();
    be
}

/// Card x-coordinate to the X25519 u-coordinate of eight times that point
pub fn montgomery_from_card_x(x: &[u8]) -> Result<MontgomeryPoint> {
    let x: &[u8; COORDINATE_SIZE] = x.try_into().map_err(|_| HostError::UnexpectedLength {
        context: "card coordinate",
        actual: x.len(),
    })?;
    let x = FieldElement::from_bytes(x)?;
    Ok(MontgomeryPoint::from_weierstrass_x(&x).clear_cofactor())
}

/// X25519 public key to the X ∥ Y the card takes
pub fn card_point_from_montgomery(pk: &MontgomeryPoint) -> Result<[u8; PUBLIC_POINT_SIZE]> {
    let point = pk.lift(&Curve::wei25519())?;
    Ok(point.coordinates())
}
