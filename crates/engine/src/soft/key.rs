//! Key objects holding per-role domain parameters

use crate::error::{validate, Error, Result};
use se25519_algorithms::ec::wei25519::{
    Curve, FieldElement, WEI25519_FIELD_ELEMENT_SIZE, WEI25519_POINT_SIZE,
};
use se25519_api::DomainComponent;
use se25519_params::traditional::wei25519::WEI25519;
use zeroize::Zeroize;

const FIELD: usize = WEI25519_FIELD_ELEMENT_SIZE;

/// Domain parameter slots of one key object, filled one setter at a time
#[derive(Clone, Default, PartialEq, Eq, Zeroize)]
pub(crate) struct KeyObject {
    field: Option<[u8; FIELD]>,
    a: Option<[u8; FIELD]>,
    b: Option<[u8; FIELD]>,
    generator: Option<[u8; WEI25519_POINT_SIZE]>,
    order: Option<[u8; FIELD]>,
    cofactor: Option<u16>,
}

impl KeyObject {
    /// Store one component after checking its encoding
    pub(crate) fn set(&mut self, component: DomainComponent, value: &[u8]) -> Result<()> {
        match component {
            DomainComponent::FieldPrime => {
                let prime = fixed::<FIELD>("field prime", value)?;
                validate::value(prime == WEI25519.p, "field prime", "unsupported field")?;
                self.field = Some(prime);
            }
            DomainComponent::CoefficientA => {
                let a = fixed::<FIELD>("coefficient a", value)?;
                FieldElement::from_bytes(&a)?;
                self.a = Some(a);
            }
            DomainComponent::CoefficientB => {
                let b = fixed::<FIELD>("coefficient b", value)?;
                FieldElement::from_bytes(&b)?;
                self.b = Some(b);
            }
            DomainComponent::Generator => {
                let g = fixed::<WEI25519_POINT_SIZE>("generator", value)?;
                // The curve equation is checked once a and b are known, in `curve`
                validate::value(g[0] == 0x04, "generator", "not uncompressed")?;
                self.generator = Some(g);
            }
            DomainComponent::Order => {
                let r = fixed::<FIELD>("order", value)?;
                validate::value(r.iter().any(|&v| v != 0), "order", "zero order")?;
                self.order = Some(r);
            }
        }
        Ok(())
    }

    /// Record a cofactor; it takes no part in the arithmetic
    pub(crate) fn set_cofactor(&mut self, cofactor: u16) {
        self.cofactor = Some(cofactor);
    }

    /// Stored cofactor, if any
    pub(crate) fn cofactor(&self) -> Option<u16> {
        self.cofactor
    }

    /// Are all five components present?
    pub(crate) fn is_initialized(&self) -> bool {
        self.field.is_some()
            && self.a.is_some()
            && self.b.is_some()
            && self.generator.is_some()
            && self.order.is_some()
    }

    /// Same curve as `other`, ignoring cofactors
    pub(crate) fn same_domain(&self, other: &Self) -> bool {
        self.field == other.field
            && self.a == other.a
            && self.b == other.b
            && self.generator == other.generator
            && self.order == other.order
    }

    /// Build the curve these parameters describe
    pub(crate) fn curve(&self, context: &'static str) -> Result<Curve> {
        match (&self.field, &self.a, &self.b, &self.generator, &self.order) {
            (Some(p), Some(a), Some(b), Some(g), Some(r)) => Ok(Curve::new(p, a, b, g, r)?),
            _ => Err(Error::Uninitialized { context }),
        }
    }
}

fn fixed<const N: usize>(context: &'static str, value: &[u8]) -> Result<[u8; N]> {
    validate::length(context, value.len(), N)?;
    let mut out = [0u8; N];
    out.copy_from_slice(value);
    Ok(out)
}
