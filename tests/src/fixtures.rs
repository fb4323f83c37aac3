//! Ready-made applets, channels and clients

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use se25519_algorithms::MontgomeryPoint;
use se25519_applet::{Applet, AppletConfig};
use se25519_engine::SoftEngine;
use se25519_host::{CardClient, HostConfig, LoopbackChannel};

/// Applet over the software engine with a seeded generator
pub type TestApplet = Applet<SoftEngine, ChaCha20Rng>;

/// Loopback channel to a [`TestApplet`]
pub type TestChannel = LoopbackChannel<SoftEngine, ChaCha20Rng>;

/// RFC 7748 §6.1 Alice private key
pub const ALICE_SK: &str = "77076d0a7318a57d3c16c17251b26645df4c2f87ebc0992ab177fba51db92c2a";
/// RFC 7748 §6.1 Alice public key
pub const ALICE_PK: &str = "8520f0098930a754748b7ddcb43ef75a0dbf3a0d26381af4eba4a98eaa9b4e6a";
/// RFC 7748 §6.1 Bob private key
pub const BOB_SK: &str = "5dab087e624a8a4b79e17f8b83800ee66f3bb1292618b6fd1c2f8b27ff88e0eb";
/// RFC 7748 §6.1 Bob public key
pub const BOB_PK: &str = "de9edb7d7b7dc1b4d35b61c2ece435373f8343c85b78674dadfc7e146f882b4f";
/// RFC 7748 §6.1 shared secret
pub const SHARED: &str = "4a5d9d5ba4ce2de1728e3bf480350f25e07e21c947d19e3376f09b3c1e161742";

/// Decode a 32-byte hex constant
pub fn bytes32(s: &str) -> [u8; 32] {
    let mut out = [0u8; 32];
    hex::decode_to_slice(s, &mut out).expect("32-byte hex constant");
    out
}

/// Decode a hex u-coordinate
pub fn point(s: &str) -> MontgomeryPoint {
    MontgomeryPoint(bytes32(s))
}

/// Applet with `config`; panics on an invalid configuration
pub fn applet_with(config: AppletConfig, seed: u64) -> TestApplet {
    Applet::with_config(config, SoftEngine::new(), ChaCha20Rng::seed_from_u64(seed))
        .expect("valid applet configuration")
}

/// Applet with defaults
pub fn applet(seed: u64) -> TestApplet {
    applet_with(AppletConfig::new(), seed)
}

/// Client over a loopback channel, already connected
pub fn client_with(config: AppletConfig, seed: u64) -> CardClient<TestChannel> {
    let mut client = CardClient::new(
        LoopbackChannel::new(applet_with(config, seed)),
        HostConfig::default(),
    );
    client.connect().expect("loopback select");
    client
}

/// Connected client with defaults
pub fn client(seed: u64) -> CardClient<TestChannel> {
    client_with(AppletConfig::new(), seed)
}
