//! The software engine

mod key;

use crate::error::{validate, Error, Result};
use crate::options::{CofactorPolicy, EngineOptions};
use key::KeyObject;
use log::trace;
use se25519_algorithms::ec::wei25519::{
    Curve, Point, Scalar, WEI25519_COORDINATES_SIZE, WEI25519_FIELD_ELEMENT_SIZE,
};
use se25519_api::{DomainComponent, EcEngine, EngineError, EngineResult, KeyRole};
use zeroize::Zeroize;

/// Software EC engine with a private and a public key object
pub struct SoftEngine {
    options: EngineOptions,
    private: KeyObject,
    public: KeyObject,
    scalar: Option<Scalar>,
}

impl SoftEngine {
    /// Create an engine with default options
    pub fn new() -> Self {
        Self {
            options: EngineOptions::default(),
            private: KeyObject::default(),
            public: KeyObject::default(),
            scalar: None,
        }
    }

    /// Create an engine with the given options
    ///
    /// Fails with NO_SUCH_ALGORITHM for a key length other than 255 bits.
    pub fn with_options(options: EngineOptions) -> EngineResult<Self> {
        if options.key_length_bits != 255 {
            return Err(Error::UnsupportedKeyLength {
                bits: options.key_length_bits,
            }
            .into());
        }
        Ok(Self {
            options,
            ..Self::new()
        })
    }

    /// Options this engine was built with
    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    /// Is a private scalar set?
    pub fn has_private_scalar(&self) -> bool {
        self.scalar.is_some()
    }

    /// Are all domain components set on the given key object?
    pub fn is_domain_initialized(&self, role: KeyRole) -> bool {
        self.key(role).is_initialized()
    }

    /// Cofactor stored on the given key object, if the policy accepted one
    pub fn cofactor(&self, role: KeyRole) -> Option<u16> {
        self.key(role).cofactor()
    }

    fn key(&self, role: KeyRole) -> &KeyObject {
        match role {
            KeyRole::Private => &self.private,
            KeyRole::Public => &self.public,
        }
    }

    fn key_mut(&mut self, role: KeyRole) -> &mut KeyObject {
        match role {
            KeyRole::Private => &mut self.private,
            KeyRole::Public => &mut self.public,
        }
    }

    fn scalar_len(&self) -> usize {
        (self.options.key_length_bits as usize + 7) / 8
    }

    /// Check both key objects and the scalar, then build the curve
    fn prepare(&self) -> Result<(Curve, &Scalar)> {
        let scalar = self.scalar.as_ref().ok_or(Error::Uninitialized {
            context: "private scalar",
        })?;
        if !self.public.is_initialized() {
            return Err(Error::Uninitialized {
                context: "public key domain",
            });
        }
        let curve = self.private.curve("private key domain")?;
        if !self.private.same_domain(&self.public) {
            return Err(Error::InconsistentDomain);
        }
        validate::value(
            scalar.is_below(curve.order()),
            "private scalar",
            "not below the order",
        )?;
        Ok((curve, scalar))
    }

    /// scalar · P for an uncompressed, on-curve, non-identity P
    fn product(&self, point: &[u8]) -> Result<Point> {
        let (curve, scalar) = self.prepare()?;
        let p = curve.decode_uncompressed(point)?;
        validate::value(!p.is_identity(), "point", "identity")?;
        let q = curve.mul(&p, scalar);
        validate::value(!q.is_identity(), "product", "identity")?;
        Ok(q)
    }
}

impl Default for SoftEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl EcEngine for SoftEngine {
    fn set_domain_component(
        &mut self,
        role: KeyRole,
        component: DomainComponent,
        value: &[u8],
    ) -> EngineResult<()> {
        trace!("set {:?} on {:?} key ({} bytes)", component, role, value.len());
        self.key_mut(role)
            .set(component, value)
            .map_err(EngineError::from)
    }

    fn set_cofactor(&mut self, role: KeyRole, cofactor: u16) -> EngineResult<()> {
        trace!("set cofactor {} on {:?} key", cofactor, role);
        match self.options.cofactor_policy {
            CofactorPolicy::Reject => Err(EngineError::illegal_value()),
            CofactorPolicy::Ignore => {
                self.key_mut(role).set_cofactor(cofactor);
                Ok(())
            }
        }
    }

    fn set_private_scalar(&mut self, scalar: &[u8]) -> EngineResult<()> {
        trace!("set private scalar ({} bytes)", scalar.len());
        validate::length("private scalar", scalar.len(), self.scalar_len())?;
        let scalar = Scalar::deserialize(scalar).map_err(Error::from)?;
        self.scalar = Some(scalar);
        Ok(())
    }

    fn private_scalar(&self, out: &mut [u8]) -> EngineResult<usize> {
        if !self.options.allow_scalar_export {
            return Err(Error::IllegalUse {
                context: "scalar export",
            }
            .into());
        }
        let scalar = self.scalar.as_ref().ok_or(Error::Uninitialized {
            context: "private scalar",
        })?;
        validate::capacity("private scalar", out.len(), WEI25519_FIELD_ELEMENT_SIZE)?;
        let mut bytes = scalar.serialize();
        out[..WEI25519_FIELD_ELEMENT_SIZE].copy_from_slice(&bytes);
        bytes.zeroize();
        Ok(WEI25519_FIELD_ELEMENT_SIZE)
    }

    fn multiply(&mut self, point: &[u8], out: &mut [u8]) -> EngineResult<usize> {
        trace!("multiply ({} byte point)", point.len());
        validate::capacity("product", out.len(), WEI25519_COORDINATES_SIZE)?;
        let q = self.product(point)?;
        out[..WEI25519_COORDINATES_SIZE].copy_from_slice(&q.coordinates());
        Ok(WEI25519_COORDINATES_SIZE)
    }

    fn agree(&mut self, point: &[u8], out: &mut [u8]) -> EngineResult<usize> {
        trace!("agree ({} byte point)", point.len());
        validate::capacity("secret", out.len(), WEI25519_FIELD_ELEMENT_SIZE)?;
        let q = self.product(point)?;
        out[..WEI25519_FIELD_ELEMENT_SIZE].copy_from_slice(&q.x_coordinate_bytes());
        Ok(WEI25519_FIELD_ELEMENT_SIZE)
    }

    fn clear(&mut self) {
        trace!("clear key objects");
        self.private.zeroize();
        self.public.zeroize();
        // Scalar zeroizes on drop
        self.scalar = None;
    }
}
