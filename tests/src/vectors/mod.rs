//! X25519 vector suites run against the card path and the reference code
//!
//! Suites live as TOML files next to this module. Each group names one
//! operation; each case carries hex inputs, the expected output and whether
//! the target should accept the input at all.

pub mod error;
pub mod loader;
pub mod model;
pub mod runner;

pub use error::{Result, VectorError};
pub use loader::{load_suite, load_suite_by_name};
pub use model::{Expectation, Operation, VectorCase, VectorGroup, VectorSuite};
pub use runner::{CardTarget, ReferenceTarget, Runner, Summary, VectorTarget};
