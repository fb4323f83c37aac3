//! Transient working memory
//!
//! A [`TransientBuffer`] stands in for clear-on-deselect RAM: it is owned for
//! the lifetime of its holder but its content only lives for one lease. Each
//! lease starts from zeroes and wipes the buffer again when it ends.

use core::fmt;
use core::ops::{Deref, DerefMut};
use zeroize::Zeroize;

/// Fixed-size working buffer whose content never outlives a lease
pub struct TransientBuffer<const N: usize> {
    data: [u8; N],
}

impl<const N: usize> TransientBuffer<N> {
    /// Allocate a zeroed buffer
    pub const fn new() -> Self {
        Self { data: [0u8; N] }
    }

    /// Borrow the buffer for one operation
    pub fn lease(&mut self) -> TransientLease<'_, N> {
        self.data.zeroize();
        TransientLease { data: &mut self.data }
    }

    /// Wipe the buffer outside a lease
    pub fn clear(&mut self) {
        self.data.zeroize();
    }

    /// Whether the buffer currently holds only zeroes
    pub fn is_clear(&self) -> bool {
        self.data.iter().all(|&b| b == 0)
    }

    /// Capacity in bytes
    pub const fn capacity(&self) -> usize {
        N
    }
}

impl<const N: usize> Default for TransientBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Drop for TransientBuffer<N> {
    fn drop(&mut self) {
        self.data.zeroize();
    }
}

impl<const N: usize> fmt::Debug for TransientBuffer<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TransientBuffer<{}>", N)
    }
}

/// Exclusive access to a [`TransientBuffer`], wiped on drop
pub struct TransientLease<'a, const N: usize> {
    data: &'a mut [u8; N],
}

impl<const N: usize> Deref for TransientLease<'_, N> {
    type Target = [u8; N];

    fn deref(&self) -> &Self::Target {
        self.data
    }
}

impl<const N: usize> DerefMut for TransientLease<'_, N> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.data
    }
}

impl<const N: usize> Drop for TransientLease<'_, N> {
    fn drop(&mut self) {
        self.data.zeroize();
    }
}
