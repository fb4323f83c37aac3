//! Construction options for the software engine

use se25519_params::traditional::wei25519::WEI25519;

/// What the engine does when asked to set a cofactor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CofactorPolicy {
    /// Reject with ILLEGAL_VALUE, like the cards this engine models
    #[default]
    Reject,
    /// Accept and store the cofactor without using it
    Ignore,
}

/// Options for [`SoftEngine`](crate::SoftEngine)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineOptions {
    /// Key length in bits; only 255 is supported
    pub key_length_bits: u16,
    /// Handling of `set_cofactor`
    pub cofactor_policy: CofactorPolicy,
    /// Whether the private scalar can be read back
    pub allow_scalar_export: bool,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            key_length_bits: WEI25519.key_length_bits,
            cofactor_policy: CofactorPolicy::default(),
            allow_scalar_export: true,
        }
    }
}

impl EngineOptions {
    /// Create options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the key length in bits
    pub fn with_key_length_bits(mut self, bits: u16) -> Self {
        self.key_length_bits = bits;
        self
    }

    /// Set the cofactor policy
    pub fn with_cofactor_policy(mut self, policy: CofactorPolicy) -> Self {
        self.cofactor_policy = policy;
        self
    }

    /// Allow or forbid reading the private scalar back
    pub fn with_scalar_export(mut self, allow: bool) -> Self {
        self.allow_scalar_export = allow;
        self
    }
}
