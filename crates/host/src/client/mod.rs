//! The X25519 peer talking to the applet
//!
//! [`CardClient`] hides the Weierstrass detour: callers pass and receive
//! standard little-endian X25519 scalars, public keys and shared secrets.

use crate::config::HostConfig;
use crate::convert::{
    card_point_from_montgomery, montgomery_from_card_x, scalar_from_card, scalar_to_card,
};
use crate::error::{HostError, Result};
use core::fmt;
use log::{debug, info};
use se25519_algorithms::ec::montgomery::MontgomeryPoint;
use se25519_api::{Channel, Command, Instruction, Response};
use se25519_params::applet::{
    COORDINATE_SIZE, PUBLIC_POINT_SIZE, SCALAR_SIZE, SHARED_SECRET_SIZE, STATUS_SIZE,
};
use se25519_params::traditional::curve25519::X25519_SIZE;
use zeroize::Zeroizing;

/// A keypair generated on the card
#[derive(Clone)]
pub struct CardKeypair {
    /// X25519 private key; absent when the applet does not export it
    pub private: Option<Zeroizing<[u8; X25519_SIZE]>>,
    /// X25519 public key
    pub public: MontgomeryPoint,
}

impl fmt::Debug for CardKeypair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CardKeypair")
            .field("private", &self.private.as_ref().map(|_| "[REDACTED]"))
            .field("public", &self.public)
            .finish()
    }
}

/// Host side of the key agreement protocol
pub struct CardClient<C> {
    channel: C,
    config: HostConfig,
    connected: bool,
}

impl<C: Channel> CardClient<C> {
    /// Wrap a channel; nothing is sent until [`connect`](Self::connect)
    pub fn new(channel: C, config: HostConfig) -> Self {
        Self {
            channel,
            config,
            connected: false,
        }
    }

    /// Configuration in use
    pub fn config(&self) -> &HostConfig {
        &self.config
    }

    /// Whether the applet has been selected
    pub fn is_connected(&self) -> bool {
        self.connected
    }

    /// The underlying channel
    pub fn channel_mut(&mut self) -> &mut C {
        &mut self.channel
    }

    /// Select the applet and check its version
    pub fn connect(&mut self) -> Result<u16> {
        self.connected = false;
        let rsp = self.channel.select(&self.config.aid)?;
        if !rsp.is_success() {
            return Err(HostError::SelectFailed(rsp.status()));
        }
        let version = match rsp.data() {
            [hi, lo] => u16::from_be_bytes([*hi, *lo]),
            other => {
                return Err(HostError::UnexpectedLength {
                    context: "select",
                    actual: other.len(),
                })
            }
        };
        if version != self.config.expected_version {
            return Err(HostError::VersionMismatch {
                expected: self.config.expected_version,
                actual: version,
            });
        }
        info!("applet selected, version {:#06x}", version);
        self.connected = true;
        Ok(version)
    }

    /// Generate a keypair on the card
    pub fn generate_keypair(&mut self) -> Result<CardKeypair> {
        let rsp = self.exchange(
            Instruction::GenerateKeypair,
            &[],
            &[PUBLIC_POINT_SIZE, SCALAR_SIZE + PUBLIC_POINT_SIZE],
        )?;
        let data = rsp.data();
        let (private, point) = if data.len() == PUBLIC_POINT_SIZE {
            (None, data)
        } else {
            let (scalar, point) = data.split_at(SCALAR_SIZE);
            (Some(scalar_from_card(scalar)?), point)
        };
        let public = montgomery_from_card_x(&point[..COORDINATE_SIZE])?;
        Ok(CardKeypair { private, public })
    }

    /// Load an X25519 private key, returning its public key
    pub fn set_private_key(&mut self, sk: &[u8; X25519_SIZE]) -> Result<MontgomeryPoint> {
        let be = scalar_to_card(sk);
        let rsp = self.exchange(Instruction::LoadPrivateKey, &be[..], &[PUBLIC_POINT_SIZE])?;
        montgomery_from_card_x(&rsp.data()[..COORDINATE_SIZE])
    }

    /// Shared secret with an X25519 public key
    pub fn shared_secret(
        &mut self,
        pk: &MontgomeryPoint,
    ) -> Result<Zeroizing<[u8; X25519_SIZE]>> {
        let point = card_point_from_montgomery(pk)?;
        let rsp = self.exchange(
            Instruction::ComputeSharedSecret,
            &point,
            &[SHARED_SECRET_SIZE],
        )?;
        let secret = montgomery_from_card_x(rsp.data())?;
        Ok(Zeroizing::new(*secret.as_bytes()))
    }

    /// Send one request and check the response shape
    fn exchange(
        &mut self,
        instruction: Instruction,
        data: &[u8],
        expected: &[usize],
    ) -> Result<Response> {
        if !self.connected {
            return Err(HostError::NotConnected);
        }
        debug!("send {:?} ({} bytes)", instruction, data.len());
        let rsp = self.channel.transmit(&Command::new(instruction, data))?;
        if !rsp.is_success() {
            return Err(HostError::Rejected(rsp.status()));
        }
        match rsp.data().len() {
            STATUS_SIZE => {
                let code = u16::from_be_bytes([rsp.data()[0], rsp.data()[1]]);
                Err(HostError::Card(code))
            }
            n if expected.contains(&n) => Ok(rsp),
            n => Err(HostError::UnexpectedLength {
                context: "response",
                actual: n,
            }),
        }
    }
}
