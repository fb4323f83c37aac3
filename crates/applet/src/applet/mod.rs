//! The command dispatcher
//!
//! One request is handled at a time through `&mut self`. Each request leases
//! the transient scratchpad, runs a handler, and turns the handler's result
//! into a [`Response`]. Generate and load invalidate the session before any
//! cryptographic work and install the new key only once everything succeeded;
//! an engine failure while computing a shared secret invalidates it too.

use crate::adapter::EngineAdapter;
use crate::clamp::ReducedScalar;
use crate::config::AppletConfig;
use crate::session::{Session, SessionState};
use crate::status::{Failure, Result};
use core::ops::Range;
use log::{debug, error, warn};
use rand::{CryptoRng, RngCore};
use se25519_api::{Command, EcEngine, Instruction, Response};
use se25519_common::security::TransientBuffer;
use se25519_params::applet::{
    PUBLIC_POINT_SIZE, SCALAR_SIZE, SCRATCHPAD_SIZE, SHARED_SECRET_SIZE,
};
use zeroize::Zeroizing;

// Scratchpad layout for ComputeSharedSecret: peer point, then the secret
const SECRET_OFFSET: usize = 1 + PUBLIC_POINT_SIZE;

/// Everything a handler touches apart from the scratchpad
struct Core<E, R> {
    config: AppletConfig,
    adapter: EngineAdapter<E>,
    rng: R,
    session: Session,
}

/// X25519-compatible key agreement applet over a Weierstrass engine
pub struct Applet<E, R> {
    core: Core<E, R>,
    scratch: TransientBuffer<SCRATCHPAD_SIZE>,
}

impl<E: EcEngine, R: RngCore + CryptoRng> Applet<E, R> {
    /// Install with the default configuration
    pub fn new(engine: E, rng: R) -> Self {
        Self::build(AppletConfig::default(), engine, rng)
    }

    /// Install with a custom configuration
    pub fn with_config(config: AppletConfig, engine: E, rng: R) -> se25519_api::Result<Self> {
        config.validate()?;
        Ok(Self::build(config, engine, rng))
    }

    fn build(config: AppletConfig, engine: E, rng: R) -> Self {
        let adapter = EngineAdapter::new(engine, config.explicit_cofactor);
        Self {
            core: Core {
                config,
                adapter,
                rng,
                session: Session::new(),
            },
            scratch: TransientBuffer::new(),
        }
    }

    /// Installed configuration
    pub fn config(&self) -> &AppletConfig {
        &self.core.config
    }

    /// Application identifier
    pub fn aid(&self) -> &[u8] {
        &self.core.config.aid
    }

    /// Current protocol state
    pub fn state(&self) -> SessionState {
        self.core.session.state()
    }

    /// The engine behind the adapter
    pub fn engine(&self) -> &E {
        self.core.adapter.engine()
    }

    /// Answer a selection with the version identifier; state is unchanged
    pub fn select(&mut self) -> Response {
        debug!("select");
        Response::success(&self.core.config.version.to_be_bytes())
    }

    /// Drop the session and wipe all transient memory
    pub fn deselect(&mut self) {
        debug!("deselect");
        self.core.session.invalidate();
        self.core.adapter.clear();
        self.scratch.clear();
    }

    /// Handle one request
    pub fn process(&mut self, command: &Command) -> Response {
        debug!(
            "dispatch ins={:#04x} len={}",
            command.ins(),
            command.data().len()
        );
        let mut scratch = self.scratch.lease();
        let result = match command.instruction() {
            Some(Instruction::GenerateKeypair) => self.core.generate_keypair(&mut scratch[..]),
            Some(Instruction::LoadPrivateKey) => {
                self.core.load_private_key(command.data(), &mut scratch[..])
            }
            Some(Instruction::ComputeSharedSecret) => {
                self.core.compute_shared_secret(command.data(), &mut scratch[..])
            }
            None => Err(Failure::ins_not_supported()),
        };
        match result {
            Ok(range) => Response::success(&scratch[range]),
            Err(failure) => {
                match failure {
                    Failure::Protocol(_) => warn!("rejected: {}", failure),
                    Failure::Engine(_) => warn!("engine failure: {}", failure),
                    Failure::Internal(_) => error!("{}", failure),
                }
                failure.to_response()
            }
        }
    }
}

impl<E: EcEngine, R: RngCore + CryptoRng> Core<E, R> {
    /// Fresh random key; output is [scalar ∥] X ∥ Y
    fn generate_keypair(&mut self, scratch: &mut [u8]) -> Result<Range<usize>> {
        self.session.invalidate();

        let mut raw = Zeroizing::new([0u8; SCALAR_SIZE]);
        self.rng
            .try_fill_bytes(&mut raw[..])
            .map_err(|_| Failure::Internal("random source"))?;
        let key = ReducedScalar::from_raw(&raw);

        let export = self.config.exports_private_scalar();
        let n = self.adapter.public_point(&key, export, scratch)?;
        self.session.install(key);
        Ok(0..n)
    }

    /// Caller-supplied key; output is X ∥ Y
    fn load_private_key(
        &mut self,
        data: &[u8],
        scratch: &mut [u8],
    ) -> Result<Range<usize>> {
        let raw: &[u8; SCALAR_SIZE] = data.try_into().map_err(|_| Failure::data_invalid())?;
        self.session.invalidate();

        let key = ReducedScalar::from_raw(raw);
        let n = self.adapter.public_point(&key, false, scratch)?;
        self.session.install(key);
        Ok(0..n)
    }

    /// X-coordinate of the loaded key times the peer point
    fn compute_shared_secret(
        &mut self,
        data: &[u8],
        scratch: &mut [u8],
    ) -> Result<Range<usize>> {
        let key = match self.session.key() {
            Some(key) if data.len() == PUBLIC_POINT_SIZE => key,
            _ => return Err(Failure::data_invalid()),
        };
        let (point, rest) = scratch.split_at_mut(SECRET_OFFSET);
        let result = self.adapter.shared_secret(key, data, point, rest);
        match result {
            Ok(n) => Ok(SECRET_OFFSET..SECRET_OFFSET + n),
            Err(failure) => {
                self.session.invalidate();
                Err(failure)
            }
        }
    }
}

const _: () = assert!(SECRET_OFFSET + SHARED_SECRET_SIZE <= SCRATCHPAD_SIZE);
const _: () = assert!(SCALAR_SIZE + PUBLIC_POINT_SIZE <= SCRATCHPAD_SIZE);
