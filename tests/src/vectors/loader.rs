//! Loads vector suites from TOML files

use crate::vectors::error::Result;
use crate::vectors::model::VectorSuite;
use std::fs;
use std::path::{Path, PathBuf};

fn vector_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("src")
        .join("vectors")
}

/// Parse a suite from a file
pub fn load_suite(path: impl AsRef<Path>) -> Result<VectorSuite> {
    let text = fs::read_to_string(path)?;
    Ok(toml::from_str(&text)?)
}

/// Load `<name>.toml` from the bundled vector directory
pub fn load_suite_by_name(name: &str) -> Result<VectorSuite> {
    load_suite(vector_dir().join(name).with_extension("toml"))
}
