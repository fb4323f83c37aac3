//! Pure data model for the vector files

use serde::Deserialize;

/// What a group of cases exercises
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Operation {
    /// `scalar` times the base point
    PublicKey,
    /// `scalar` times `u`
    SharedSecret,
}

/// Whether the target should produce an output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Expectation {
    #[default]
    Valid,
    /// The target must refuse the input
    Invalid,
}

/// One case
#[derive(Debug, Clone, Deserialize)]
pub struct VectorCase {
    pub id: u32,
    #[serde(default)]
    pub description: Option<String>,
    /// X25519 private scalar, little-endian hex
    pub scalar: String,
    /// Peer u-coordinate, little-endian hex
    #[serde(default)]
    pub u: Option<String>,
    /// Expected u-coordinate, little-endian hex
    #[serde(default)]
    pub output: Option<String>,
    #[serde(default)]
    pub expected: Expectation,
}

/// Cases sharing an operation
#[derive(Debug, Clone, Deserialize)]
pub struct VectorGroup {
    pub name: String,
    pub operation: Operation,
    #[serde(rename = "case", default)]
    pub cases: Vec<VectorCase>,
}

/// A whole file
#[derive(Debug, Clone, Deserialize)]
pub struct VectorSuite {
    pub source: String,
    #[serde(rename = "group", default)]
    pub groups: Vec<VectorGroup>,
}

impl VectorSuite {
    /// Number of cases across all groups
    pub fn len(&self) -> usize {
        self.groups.iter().map(|g| g.cases.len()).sum()
    }

    /// Whether the suite has no cases
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
