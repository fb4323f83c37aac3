//! Trait definition for the element's elliptic-curve engine
//!
//! The engine is an opaque provider of short Weierstrass arithmetic. It is
//! configured through byte-level setters on two key objects, a private and a
//! public one, much like a card's crypto API, and performs plain
//! Diffie-Hellman with the private key.

use crate::error::EngineResult;

/// Which of the engine's key objects a setter addresses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyRole {
    /// The private key object holding the scalar
    Private,
    /// The public key object
    Public,
}

/// Domain parameter slots of a key object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DomainComponent {
    /// Prime p of the underlying field
    FieldPrime,
    /// Curve coefficient a
    CoefficientA,
    /// Curve coefficient b
    CoefficientB,
    /// Base point G, uncompressed (0x04 ∥ x ∥ y)
    Generator,
    /// Order r of G
    Order,
}

impl DomainComponent {
    /// All components, in the order an engine is configured
    pub const ALL: [DomainComponent; 5] = [
        DomainComponent::FieldPrime,
        DomainComponent::CoefficientA,
        DomainComponent::CoefficientB,
        DomainComponent::Generator,
        DomainComponent::Order,
    ];
}

/// Short Weierstrass EC engine
///
/// All values are big-endian. Every method either succeeds or rejects with an
/// [`EngineError`](crate::EngineError) carrying the engine's reason code.
pub trait EcEngine {
    /// Set one domain parameter on one key object
    fn set_domain_component(
        &mut self,
        role: KeyRole,
        component: DomainComponent,
        value: &[u8],
    ) -> EngineResult<()>;

    /// Set the cofactor on one key object
    ///
    /// Engines are free to reject this; the applet does not rely on it.
    fn set_cofactor(&mut self, role: KeyRole, cofactor: u16) -> EngineResult<()>;

    /// Set the private scalar
    fn set_private_scalar(&mut self, scalar: &[u8]) -> EngineResult<()>;

    /// Read the private scalar back into `out`, returning the number of bytes written
    fn private_scalar(&self, out: &mut [u8]) -> EngineResult<usize>;

    /// Multiply an uncompressed point by the private scalar
    ///
    /// Writes x ∥ y of the product into `out` and returns the number of bytes written.
    fn multiply(&mut self, point: &[u8], out: &mut [u8]) -> EngineResult<usize>;

    /// Plain Diffie-Hellman: like [`multiply`](Self::multiply) but writes only x
    fn agree(&mut self, point: &[u8], out: &mut [u8]) -> EngineResult<usize>;

    /// Erase the scalar and all domain parameters from both key objects
    fn clear(&mut self);
}

impl<E: EcEngine + ?Sized> EcEngine for &mut E {
    fn set_domain_component(
        &mut self,
        role: KeyRole,
        component: DomainComponent,
        value: &[u8],
    ) -> EngineResult<()> {
        (**self).set_domain_component(role, component, value)
    }

    fn set_cofactor(&mut self, role: KeyRole, cofactor: u16) -> EngineResult<()> {
        (**self).set_cofactor(role, cofactor)
    }

    fn set_private_scalar(&mut self, scalar: &[u8]) -> EngineResult<()> {
        (**self).set_private_scalar(scalar)
    }

    fn private_scalar(&self, out: &mut [u8]) -> EngineResult<usize> {
        (**self).private_scalar(out)
    }

    fn multiply(&mut self, point: &[u8], out: &mut [u8]) -> EngineResult<usize> {
        (**self).multiply(point, out)
    }

    fn agree(&mut self, point: &[u8], out: &mut [u8]) -> EngineResult<usize> {
        (**self).agree(point, out)
    }

    fn clear(&mut self) {
        (**self).clear()
    }
}
