//! Two applets agreeing on a secret, and an applet agreeing with plain X25519

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use se25519_algorithms::montgomery::{x25519, x25519_base};
use se25519_algorithms::MontgomeryPoint;
use se25519_applet::AppletConfig;
use se25519_tests::fixtures;

#[test]
fn test_two_cards_generate_and_agree() {
    let mut alice = fixtures::client(10);
    let mut bob = fixtures::client(11);
    for _ in 0..4 {
        let a = alice.generate_keypair().unwrap();
        let b = bob.generate_keypair().unwrap();
        assert_ne!(a.public, b.public);
        let s_ab = alice.shared_secret(&b.public).unwrap();
        let s_ba = bob.shared_secret(&a.public).unwrap();
        assert_eq!(*s_ab, *s_ba);
    }
}

#[test]
fn test_card_agrees_with_software_peer() {
    let mut rng = ChaCha20Rng::seed_from_u64(12);
    let mut card = fixtures::client(13);
    for _ in 0..4 {
        let mut sk = [0u8; 32];
        rng.fill_bytes(&mut sk);
        let peer_pk = MontgomeryPoint(x25519_base(&sk));

        let card_key = card.generate_keypair().unwrap();
        let on_card = card.shared_secret(&peer_pk).unwrap();
        let in_software = x25519(&sk, card_key.public.as_bytes());
        assert_eq!(*on_card, in_software);
    }
}

#[test]
fn test_exported_scalar_is_the_x25519_key() {
    let config = AppletConfig::new().with_private_scalar_export(true);
    let exported = config.exports_private_scalar();
    let mut card = fixtures::client_with(config, 14);
    let keypair = card.generate_keypair().unwrap();
    assert_eq!(keypair.private.is_some(), exported);
    let Some(sk) = keypair.private else {
        return;
    };
    assert_eq!(x25519_base(&sk), *keypair.public.as_bytes());

    // loading the exported key reproduces the public key
    let reloaded = card.set_private_key(&sk).unwrap();
    assert_eq!(reloaded, keypair.public);
}

#[test]
fn test_loaded_key_agrees_with_software_peer() {
    let mut rng = ChaCha20Rng::seed_from_u64(15);
    let mut card = fixtures::client(16);
    let mut card_sk = [0u8; 32];
    let mut peer_sk = [0u8; 32];
    rng.fill_bytes(&mut card_sk);
    rng.fill_bytes(&mut peer_sk);

    let card_pk = card.set_private_key(&card_sk).unwrap();
    assert_eq!(*card_pk.as_bytes(), x25519_base(&card_sk));

    let peer_pk = MontgomeryPoint(x25519_base(&peer_sk));
    let secret = card.shared_secret(&peer_pk).unwrap();
    assert_eq!(*secret, x25519(&peer_sk, card_pk.as_bytes()));
}

#[test]
fn test_key_survives_several_agreements() {
    let mut card = fixtures::client(17);
    card.set_private_key(&fixtures::bytes32(fixtures::ALICE_SK))
        .unwrap();
    let bob = fixtures::point(fixtures::BOB_PK);
    for _ in 0..3 {
        let secret = card.shared_secret(&bob).unwrap();
        assert_eq!(hex::encode(*secret), fixtures::SHARED);
    }
}
