//! Host configuration, loadable from TOML
//!
//! ```toml
//! aid = "0102030405060708"
//! expected_version = 0x5519
//! ```

use crate::error::{HostError, Result};
use serde::{Deserialize, Serialize};
use se25519_params::applet::{AID_MAX_SIZE, AID_MIN_SIZE, DEFAULT_AID, VERSION_NUMBER};
use std::path::Path;

/// What the host expects to find on the card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostConfig {
    /// Application identifier to select, hex in TOML
    #[serde(with = "hex::serde")]
    pub aid: Vec<u8>,
    /// Version identifier the applet must answer with
    pub expected_version: u16,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            aid: DEFAULT_AID.to_vec(),
            expected_version: VERSION_NUMBER,
        }
    }
}

impl HostConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: HostConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Serialize to TOML
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| HostError::Config(e.to_string()))
    }

    /// Check the AID length
    pub fn validate(&self) -> Result<()> {
        if !(AID_MIN_SIZE..=AID_MAX_SIZE).contains(&self.aid.len()) {
            return Err(HostError::Config(format!(
                "AID must be {} to {} bytes, got {}",
                AID_MIN_SIZE,
                AID_MAX_SIZE,
                self.aid.len()
            )));
        }
        Ok(())
    }
}
