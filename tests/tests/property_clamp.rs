//! Whatever key goes in, the card path and X25519 agree

use proptest::prelude::*;
use se25519_algorithms::montgomery::{x25519, x25519_base};
use se25519_algorithms::MontgomeryPoint;
use se25519_applet::ReducedScalar;
use se25519_host::convert::{scalar_from_card, scalar_to_card};
use se25519_tests::fixtures;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn loaded_key_matches_x25519(sk in any::<[u8; 32]>()) {
        let mut client = fixtures::client(50);
        let pk = client.set_private_key(&sk).unwrap();
        prop_assert_eq!(*pk.as_bytes(), x25519_base(&sk));
    }

    #[test]
    fn shared_secret_matches_x25519(sk in any::<[u8; 32]>(), peer in any::<[u8; 32]>()) {
        let mut client = fixtures::client(51);
        client.set_private_key(&sk).unwrap();
        let peer_pk = MontgomeryPoint(x25519_base(&peer));
        let secret = client.shared_secret(&peer_pk).unwrap();
        prop_assert_eq!(*secret, x25519(&sk, peer_pk.as_bytes()));
    }
}

proptest! {
    #[test]
    fn reduced_scalar_round_trips_to_clamped_key(sk in any::<[u8; 32]>()) {
        let card = scalar_to_card(&sk);
        let reduced = ReducedScalar::from_raw(&card);
        let recovered = scalar_from_card(reduced.as_bytes()).unwrap();

        let mut clamped = sk;
        clamped[0] &= 0xF8;
        clamped[31] &= 0x7F;
        clamped[31] |= 0x40;
        prop_assert_eq!(*recovered, clamped);
    }

    #[test]
    fn clamping_ignores_masked_bits(sk in any::<[u8; 32]>(), low in 0u8..8, high in any::<bool>()) {
        let mut other = sk;
        other[0] = (other[0] & 0xF8) | low;
        other[31] = if high { other[31] | 0x80 } else { other[31] & 0x7F };
        let a = ReducedScalar::from_raw(&scalar_to_card(&sk));
        let b = ReducedScalar::from_raw(&scalar_to_card(&other));
        prop_assert_eq!(a, b);
    }
}
