//! Constant-time operations on byte strings

use subtle::{Choice, ConstantTimeEq};

/// Constant-time comparison of two byte slices
///
/// Returns true if the slices are equal, false otherwise.
/// Only the lengths are compared in variable time.
pub fn ct_eq<A, B>(a: A, b: B) -> bool
where
    A: AsRef<[u8]>,
    B: AsRef<[u8]>,
{
    let a = a.as_ref();
    let b = b.as_ref();

    if a.len() != b.len() {
        return false;
    }

    a.ct_eq(b).into()
}

/// Returns a `Choice` that is set when every byte of `bytes` is zero
pub fn ct_is_zero(bytes: &[u8]) -> Choice {
    let acc = bytes.iter().fold(0u8, |acc, &b| acc | b);
    acc.ct_eq(&0u8)
}
