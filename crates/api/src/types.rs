//! Command and response types exchanged with the applet
//!
//! A request is an instruction byte followed by an opaque body; a response is
//! a body followed by a two-byte status word. The byte-exact transport framing
//! below these types belongs to the channel.

use alloc::vec::Vec;
use core::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::error::{validate, Error, Result};
use se25519_params::applet::{
    INS_COMPUTE_SHARED_SECRET, INS_GENERATE_KEYPAIR, INS_LOAD_PRIVATE_KEY,
};

/// ISO 7816 status word closing every response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusWord(pub u16);

impl StatusWord {
    /// Normal completion
    pub const NO_ERROR: Self = Self(0x9000);
    /// Incorrect data in the request, or the request is not allowed yet
    pub const DATA_INVALID: Self = Self(0x6984);
    /// Instruction code not supported
    pub const INS_NOT_SUPPORTED: Self = Self(0x6D00);
    /// No application with the requested identifier
    pub const FILE_NOT_FOUND: Self = Self(0x6A82);

    /// Is this the normal completion status?
    pub fn is_success(self) -> bool {
        self == Self::NO_ERROR
    }

    /// First status byte
    pub fn sw1(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Second status byte
    pub fn sw2(self) -> u8 {
        self.0 as u8
    }

    /// Big-endian encoding
    pub fn to_bytes(self) -> [u8; 2] {
        self.0.to_be_bytes()
    }
}

impl fmt::Display for StatusWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SW {:04X}", self.0)
    }
}

/// Operations understood by the applet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Instruction {
    /// Generate a keypair on the element
    GenerateKeypair = INS_GENERATE_KEYPAIR,
    /// Load a caller-supplied private scalar
    LoadPrivateKey = INS_LOAD_PRIVATE_KEY,
    /// Agree on a shared secret with a peer point
    ComputeSharedSecret = INS_COMPUTE_SHARED_SECRET,
}

impl Instruction {
    /// The one-byte operation code
    pub fn code(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Instruction {
    type Error = u8;

    fn try_from(code: u8) -> core::result::Result<Self, u8> {
        match code {
            INS_GENERATE_KEYPAIR => Ok(Self::GenerateKeypair),
            INS_LOAD_PRIVATE_KEY => Ok(Self::LoadPrivateKey),
            INS_COMPUTE_SHARED_SECRET => Ok(Self::ComputeSharedSecret),
            other => Err(other),
        }
    }
}

/// A request sent to the applet
///
/// The body may carry a private scalar and is zeroized on drop.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Command {
    ins: u8,
    data: Vec<u8>,
}

impl Command {
    /// Build a request for a known instruction
    pub fn new(instruction: Instruction, data: &[u8]) -> Self {
        Self::raw(instruction.code(), data)
    }

    /// Build a request for an arbitrary operation code
    pub fn raw(ins: u8, data: &[u8]) -> Self {
        Self {
            ins,
            data: data.to_vec(),
        }
    }

    /// Parse an operation code followed by the body
    pub fn from_frame(frame: &[u8]) -> Result<Self> {
        validate::parameter(!frame.is_empty(), "Command frame", "missing operation code")?;
        Ok(Self::raw(frame[0], &frame[1..]))
    }

    /// Encode as operation code followed by the body
    ///
    /// The body may carry a private scalar, so the frame is wiped on drop.
    pub fn to_frame(&self) -> Zeroizing<Vec<u8>> {
        let mut frame = Zeroizing::new(Vec::with_capacity(1 + self.data.len()));
        frame.push(self.ins);
        frame.extend_from_slice(&self.data);
        frame
    }

    /// Raw operation code
    pub fn ins(&self) -> u8 {
        self.ins
    }

    /// Decoded instruction, if the code is known
    pub fn instruction(&self) -> Option<Instruction> {
        Instruction::try_from(self.ins).ok()
    }

    /// Request body
    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Command {{ ins: {:#04x}, len: {} }}", self.ins, self.data.len())
    }
}

/// A response returned by the applet
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Response {
    data: Vec<u8>,
    #[zeroize(skip)]
    status: StatusWord,
}

impl Response {
    /// Build a response from a body and status word
    pub fn new(data: Vec<u8>, status: StatusWord) -> Self {
        Self { data, status }
    }

    /// Normal completion with a body
    pub fn success(data: &[u8]) -> Self {
        Self::new(data.to_vec(), StatusWord::NO_ERROR)
    }

    /// A status word with no body
    pub fn status_only(status: StatusWord) -> Self {
        Self::new(Vec::new(), status)
    }

    /// Parse a body followed by a two-byte status word
    pub fn from_frame(frame: &[u8]) -> Result<Self> {
        if frame.len() < 2 {
            return Err(Error::InvalidLength {
                context: "Response frame",
                expected: 2,
                actual: frame.len(),
            });
        }
        let split = frame.len() - 2;
        let status = StatusWord(u16::from_be_bytes([frame[split], frame[split + 1]]));
        Ok(Self::new(frame[..split].to_vec(), status))
    }

    /// Encode as body followed by the status word, wiped on drop
    pub fn to_frame(&self) -> Zeroizing<Vec<u8>> {
        let mut frame = Zeroizing::new(Vec::with_capacity(self.data.len() + 2));
        frame.extend_from_slice(&self.data);
        frame.extend_from_slice(&self.status.to_bytes());
        frame
    }

    /// Response body
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Status word
    pub fn status(&self) -> StatusWord {
        self.status
    }

    /// Did the exchange complete normally?
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

impl fmt::Debug for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Response {{ len: {}, {} }}", self.data.len(), self.status)
    }
}
