//! Trait definitions at the seams of the applet

pub mod channel;
pub mod engine;

pub use channel::Channel;
pub use engine::{DomainComponent, EcEngine, KeyRole};
