//! Drives the EC engine with the Wei25519 domain
//!
//! Every operation configures both key objects from the domain table, sets
//! the reduced scalar, runs one engine call and clears the engine again,
//! whether the call succeeded or not. Nothing is cached between operations.

use crate::clamp::ReducedScalar;
use crate::status::{Failure, Result};
use log::trace;
use se25519_api::{DomainComponent, EcEngine, KeyRole};
use se25519_params::applet::{
    POINT_FORMAT_UNCOMPRESSED, PUBLIC_POINT_SIZE, SCALAR_SIZE, SHARED_SECRET_SIZE,
};
use se25519_params::traditional::wei25519::{DomainParameters, WEI25519};

const PEER_POINT_SIZE: usize = 1 + PUBLIC_POINT_SIZE;

/// Owner of the EC engine
#[derive(Debug)]
pub struct EngineAdapter<E> {
    engine: E,
    domain: &'static DomainParameters,
    explicit_cofactor: bool,
}

impl<E: EcEngine> EngineAdapter<E> {
    /// Wrap an engine; `explicit_cofactor` also sets h during setup
    pub fn new(engine: E, explicit_cofactor: bool) -> Self {
        Self {
            engine,
            domain: &WEI25519,
            explicit_cofactor,
        }
    }

    /// The wrapped engine
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Wipe all key material held by the engine
    pub fn clear(&mut self) {
        self.engine.clear();
    }

    /// Public point for `scalar`, written as X ∥ Y into `out[..64]`
    ///
    /// With `export_scalar` the scalar read back from the engine goes first
    /// and the point follows at `out[32..96]`. Returns the bytes written.
    pub fn public_point(
        &mut self,
        scalar: &ReducedScalar,
        export_scalar: bool,
        out: &mut [u8],
    ) -> Result<usize> {
        let offset = if export_scalar { SCALAR_SIZE } else { 0 };
        let total = offset + PUBLIC_POINT_SIZE;
        if out.len() < total {
            return Err(Failure::Internal("output buffer"));
        }
        let result = self.run(scalar, |engine, domain| {
            if export_scalar {
                let n = engine.private_scalar(&mut out[..SCALAR_SIZE])?;
                expect_size("scalar read back", n, SCALAR_SIZE)?;
            }
            let n = engine.multiply(&domain.g, &mut out[offset..total])?;
            expect_size("public point", n, PUBLIC_POINT_SIZE)
        });
        if result.is_err() {
            out[..total].fill(0);
        }
        result.map(|_| total)
    }

    /// X-coordinate of scalar times the peer point (X ∥ Y, no marker)
    ///
    /// `scratch` holds the uncompressed encoding handed to the engine and
    /// must fit 65 bytes. The secret goes to `out[..32]`.
    pub fn shared_secret(
        &mut self,
        scalar: &ReducedScalar,
        peer: &[u8],
        scratch: &mut [u8],
        out: &mut [u8],
    ) -> Result<usize> {
        if peer.len() != PUBLIC_POINT_SIZE
            || scratch.len() < PEER_POINT_SIZE
            || out.len() < SHARED_SECRET_SIZE
        {
            return Err(Failure::Internal("operand buffer"));
        }
        scratch[0] = POINT_FORMAT_UNCOMPRESSED;
        scratch[1..PEER_POINT_SIZE].copy_from_slice(peer);
        let point = &scratch[..PEER_POINT_SIZE];

        let result = self.run(scalar, |engine, _| {
            let n = engine.agree(point, &mut out[..SHARED_SECRET_SIZE])?;
            expect_size("shared secret", n, SHARED_SECRET_SIZE)
        });
        if result.is_err() {
            out[..SHARED_SECRET_SIZE].fill(0);
        }
        result.map(|_| SHARED_SECRET_SIZE)
    }

    fn run<F>(&mut self, scalar: &ReducedScalar, op: F) -> Result<()>
    where
        F: FnOnce(&mut E, &DomainParameters) -> Result<()>,
    {
        let result = self
            .load(scalar)
            .and_then(|_| op(&mut self.engine, self.domain));
        self.engine.clear();
        result
    }

    /// Configure the domain, then set the scalar on the private key
    fn load(&mut self, scalar: &ReducedScalar) -> Result<()> {
        self.configure()?;
        trace!("set private scalar");
        self.engine.set_private_scalar(scalar.as_bytes())?;
        Ok(())
    }

    /// Load the domain table onto both key objects
    fn configure(&mut self) -> Result<()> {
        let domain = self.domain;
        for role in [KeyRole::Private, KeyRole::Public] {
            trace!("configure {:?} key", role);
            for component in DomainComponent::ALL {
                self.engine
                    .set_domain_component(role, component, component_bytes(domain, component))?;
            }
            if self.explicit_cofactor {
                self.engine.set_cofactor(role, domain.h)?;
            }
        }
        Ok(())
    }
}

fn component_bytes(domain: &DomainParameters, component: DomainComponent) -> &[u8] {
    match component {
        DomainComponent::FieldPrime => &domain.p,
        DomainComponent::CoefficientA => &domain.a,
        DomainComponent::CoefficientB => &domain.b,
        DomainComponent::Generator => &domain.g,
        DomainComponent::Order => &domain.r,
    }
}

fn expect_size(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Failure::Internal(context));
    }
    Ok(())
}
