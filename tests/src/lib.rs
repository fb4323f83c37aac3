//! Shared fixtures and vector suites for the se25519 integration tests
pub mod fixtures;
pub mod vectors;
