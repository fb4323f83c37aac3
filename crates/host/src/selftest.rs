//! End-to-end check of an applet against RFC 7748
//!
//! Runs the reference X25519 implementation against the RFC vector first,
//! then cross-checks on-card key generation, private key loading and shared
//! secret computation.

use crate::client::CardClient;
use crate::error::{HostError, Result};
use core::fmt;
use log::info;
use se25519_algorithms::ec::montgomery::{x25519_base, MontgomeryPoint};
use se25519_api::Channel;
use se25519_internal::ct_eq;

const ALICE_SK: [u8; 32] = [
    0x77, 0x07, 0x6d, 0x0a, 0x73, 0x18, 0xa5, 0x7d, 0x3c, 0x16, 0xc1, 0x72, 0x51, 0xb2, 0x66, 0x45,
    0xdf, 0x4c, 0x2f, 0x87, 0xeb, 0xc0, 0x99, 0x2a, 0xb1, 0x77, 0xfb, 0xa5, 0x1d, 0xb9, 0x2c, 0x2a,
];

const ALICE_PK: [u8; 32] = [
    0x85, 0x20, 0xf0, 0x09, 0x89, 0x30, 0xa7, 0x54, 0x74, 0x8b, 0x7d, 0xdc, 0xb4, 0x3e, 0xf7, 0x5a,
    0x0d, 0xbf, 0x3a, 0x0d, 0x26, 0x38, 0x1a, 0xf4, 0xeb, 0xa4, 0xa9, 0x8e, 0xaa, 0x9b, 0x4e, 0x6a,
];

const BOB_PK: [u8; 32] = [
    0xde, 0x9e, 0xdb, 0x7d, 0x7b, 0x7d, 0xc1, 0xb4, 0xd3, 0x5b, 0x61, 0xc2, 0xec, 0xe4, 0x35, 0x37,
    0x3f, 0x83, 0x43, 0xc8, 0x5b, 0x78, 0x67, 0x4d, 0xad, 0xfc, 0x7e, 0x14, 0x6f, 0x88, 0x2b, 0x4f,
];

const SHARED_SECRET: [u8; 32] = [
    0x4a, 0x5d, 0x9d, 0x5b, 0xa4, 0xce, 0x2d, 0xe1, 0x72, 0x8e, 0x3b, 0xf4, 0x80, 0x35, 0x0f, 0x25,
    0xe0, 0x7e, 0x21, 0xc9, 0x47, 0xd1, 0x9e, 0x33, 0x76, 0xf0, 0x9b, 0x3c, 0x1e, 0x16, 0x17, 0x42,
];

/// One stage of the self-test
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelfTestStep {
    /// Host X25519 against the RFC 7748 vector
    ReferenceVector,
    /// On-card key generation against host X25519
    KeyGeneration,
    /// Loading the RFC 7748 private key
    PrivateKeyLoad,
    /// Shared secret with the RFC 7748 peer key
    SharedSecret,
}

impl SelfTestStep {
    fn name(self) -> &'static str {
        match self {
            SelfTestStep::ReferenceVector => "reference vector",
            SelfTestStep::KeyGeneration => "key generation",
            SelfTestStep::PrivateKeyLoad => "private key load",
            SelfTestStep::SharedSecret => "shared secret",
        }
    }
}

impl fmt::Display for SelfTestStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome of a successful self-test
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelfTestReport {
    /// Steps that ran and matched
    pub passed: Vec<SelfTestStep>,
    /// Steps that could not run, e.g. generation without a private key
    pub skipped: Vec<SelfTestStep>,
}

fn check(step: SelfTestStep, ok: bool, report: &mut SelfTestReport) -> Result<()> {
    if !ok {
        return Err(HostError::SelfTest { step: step.name() });
    }
    info!("self-test: {} ok", step);
    report.passed.push(step);
    Ok(())
}

/// Run all steps; the client must be connected
pub fn run_self_test<C: Channel>(client: &mut CardClient<C>) -> Result<SelfTestReport> {
    let mut report = SelfTestReport::default();

    check(
        SelfTestStep::ReferenceVector,
        x25519_base(&ALICE_SK) == ALICE_PK,
        &mut report,
    )?;

    let keypair = client.generate_keypair()?;
    match &keypair.private {
        Some(sk) => check(
            SelfTestStep::KeyGeneration,
            ct_eq(x25519_base(sk), keypair.public.as_bytes()),
            &mut report,
        )?,
        None => report.skipped.push(SelfTestStep::KeyGeneration),
    }

    let pk = client.set_private_key(&ALICE_SK)?;
    check(
        SelfTestStep::PrivateKeyLoad,
        *pk.as_bytes() == ALICE_PK,
        &mut report,
    )?;

    let secret = client.shared_secret(&MontgomeryPoint(BOB_PK))?;
    check(
        SelfTestStep::SharedSecret,
        ct_eq(&secret[..], SHARED_SECRET),
        &mut report,
    )?;

    Ok(report)
}
