//! Applet configuration

use alloc::vec::Vec;
use se25519_api::error::{validate, Result};
use se25519_params::applet::{AID_MAX_SIZE, AID_MIN_SIZE, DEFAULT_AID, VERSION_NUMBER};

/// Settings fixed when the applet is installed
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AppletConfig {
    /// Application identifier the applet answers to
    pub aid: Vec<u8>,
    /// Version identifier returned on selection
    pub version: u16,
    /// Prepend the reduced private scalar to GenerateKeypair output
    ///
    /// Only honoured with the `diagnostic-export` feature.
    pub expose_private_scalar: bool,
    /// Set the cofactor on both key objects during engine setup
    pub explicit_cofactor: bool,
}

impl Default for AppletConfig {
    fn default() -> Self {
        Self {
            aid: DEFAULT_AID.to_vec(),
            version: VERSION_NUMBER,
            expose_private_scalar: cfg!(feature = "diagnostic-export"),
            explicit_cofactor: false,
        }
    }
}

impl AppletConfig {
    /// Default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the application identifier
    pub fn with_aid(mut self, aid: &[u8]) -> Self {
        self.aid = aid.to_vec();
        self
    }

    /// Set the version identifier
    pub fn with_version(mut self, version: u16) -> Self {
        self.version = version;
        self
    }

    /// Enable or disable the private scalar in GenerateKeypair output
    pub fn with_private_scalar_export(mut self, expose: bool) -> Self {
        self.expose_private_scalar = expose;
        self
    }

    /// Enable or disable setting the cofactor on the engine
    pub fn with_explicit_cofactor(mut self, explicit: bool) -> Self {
        self.explicit_cofactor = explicit;
        self
    }

    /// Check the AID length
    pub fn validate(&self) -> Result<()> {
        validate::length_range("Applet AID", self.aid.len(), AID_MIN_SIZE, AID_MAX_SIZE)
    }

    /// Whether GenerateKeypair output starts with the private scalar
    pub fn exports_private_scalar(&self) -> bool {
        cfg!(feature = "diagnostic-export") && self.expose_private_scalar
    }
}
