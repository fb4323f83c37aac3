//! Generic driver that runs a suite against a pluggable target

use crate::vectors::error::{Result, VectorError};
use crate::vectors::model::{Expectation, Operation, VectorCase, VectorGroup, VectorSuite};
use se25519_algorithms::montgomery::{x25519, x25519_base};
use se25519_algorithms::MontgomeryPoint;
use se25519_api::Channel;
use se25519_host::CardClient;

/// Something that computes X25519
pub trait VectorTarget {
    /// Public key for `sk`
    fn public_key(&mut self, sk: &[u8; 32]) -> Result<[u8; 32]>;
    /// Shared secret between `sk` and `u`
    fn shared_secret(&mut self, sk: &[u8; 32], u: &[u8; 32]) -> Result<[u8; 32]>;
}

/// The host-side ladder
pub struct ReferenceTarget;

impl VectorTarget for ReferenceTarget {
    fn public_key(&mut self, sk: &[u8; 32]) -> Result<[u8; 32]> {
        Ok(x25519_base(sk))
    }

    fn shared_secret(&mut self, sk: &[u8; 32], u: &[u8; 32]) -> Result<[u8; 32]> {
        Ok(x25519(sk, u))
    }
}

/// The applet, reached through a connected client
pub struct CardTarget<'c, C> {
    client: &'c mut CardClient<C>,
}

impl<'c, C: Channel> CardTarget<'c, C> {
    pub fn new(client: &'c mut CardClient<C>) -> Self {
        Self { client }
    }
}

impl<C: Channel> VectorTarget for CardTarget<'_, C> {
    fn public_key(&mut self, sk: &[u8; 32]) -> Result<[u8; 32]> {
        Ok(self.client.set_private_key(sk)?.0)
    }

    fn shared_secret(&mut self, sk: &[u8; 32], u: &[u8; 32]) -> Result<[u8; 32]> {
        self.client.set_private_key(sk)?;
        let secret = self.client.shared_secret(&MontgomeryPoint(*u))?;
        Ok(*secret)
    }
}

/// Tally of one run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub passed: usize,
    pub failed: usize,
}

/// Walks suites and tallies results
pub struct Runner<'t, T: VectorTarget> {
    target: &'t mut T,
}

fn decode32(field: &'static str, value: Option<&str>) -> Result<[u8; 32]> {
    let value = value.ok_or(VectorError::MissingField(field))?;
    let bytes = hex::decode(value)?;
    bytes.as_slice().try_into().map_err(|_| VectorError::Length {
        field,
        actual: bytes.len(),
    })
}

impl<'t, T: VectorTarget> Runner<'t, T> {
    pub fn new(target: &'t mut T) -> Self {
        Self { target }
    }

    /// Run one case; `Ok` means the target behaved as the case expects
    pub fn run_case(&mut self, group: &VectorGroup, case: &VectorCase) -> Result<()> {
        let sk = decode32("scalar", Some(&case.scalar))?;
        let outcome = match group.operation {
            Operation::PublicKey => self.target.public_key(&sk),
            Operation::SharedSecret => {
                let u = decode32("u", case.u.as_deref())?;
                self.target.shared_secret(&sk, &u)
            }
        };
        match (outcome, case.expected) {
            (Ok(actual), Expectation::Valid) => {
                let expected = decode32("output", case.output.as_deref())?;
                if actual != expected {
                    return Err(VectorError::Mismatch {
                        expected: hex::encode(expected),
                        actual: hex::encode(actual),
                    });
                }
                Ok(())
            }
            (Err(_), Expectation::Invalid) => Ok(()),
            (Ok(actual), Expectation::Invalid) => Err(VectorError::Mismatch {
                expected: "rejection".into(),
                actual: hex::encode(actual),
            }),
            (Err(e), Expectation::Valid) => Err(e),
        }
    }

    /// Run every case and fail if any did not behave as expected
    pub fn run_suite(&mut self, suite: &VectorSuite) -> Result<Summary> {
        let mut summary = Summary::default();
        for group in &suite.groups {
            println!("Running group {} ({:?})", group.name, group.operation);
            for case in &group.cases {
                match self.run_case(group, case) {
                    Ok(()) => summary.passed += 1,
                    Err(e) => {
                        summary.failed += 1;
                        eprintln!("Case {} failed: {}", case.id, e);
                    }
                }
            }
        }
        println!(
            "Test results: {} passed, {} failed",
            summary.passed, summary.failed
        );
        if summary.failed > 0 {
            return Err(VectorError::SuiteFailed {
                failed: summary.failed,
                total: summary.passed + summary.failed,
            });
        }
        Ok(summary)
    }
}
