//! Constant values for the se25519 workspace
//!
//! Curve parameters live under [`traditional`], the command protocol
//! constants of the applet under [`applet`].

#![no_std]

pub mod applet;
pub mod traditional;

pub use traditional::curve25519::{Curve25519Params, CURVE25519};
pub use traditional::wei25519::{DomainParameters, WEI25519};
