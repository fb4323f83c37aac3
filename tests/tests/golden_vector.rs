//! Card-level known answers: what the applet itself puts on the wire

use se25519_api::{Channel, Command, Instruction, StatusWord};
use se25519_params::applet::DEFAULT_AID;
use se25519_tests::fixtures;

fn request(ins: Instruction, data: &[u8]) -> Vec<u8> {
    let mut ch = se25519_host::LoopbackChannel::new(fixtures::applet(40));
    ch.select(&DEFAULT_AID).unwrap();
    let rsp = ch.transmit(&Command::new(ins, data)).unwrap();
    assert_eq!(rsp.status(), StatusWord::NO_ERROR);
    rsp.data().to_vec()
}

#[test]
fn test_all_zero_key_gives_2_pow_251_times_g() {
    let data = request(Instruction::LoadPrivateKey, &[0u8; 32]);
    assert_eq!(
        hex::encode(&data[..32]),
        "2f6da00465b0a3076078f98f3ae9a8550e44db4e4d86d43463a5f5a4d26d3846"
    );
    assert_eq!(
        hex::encode(&data[32..]),
        "4e954bc02a95b4b076940dc3a881d1caa73a9fb0f9490989b24a36518c4d0434"
    );
}

#[test]
fn test_alice_public_point() {
    // RFC 7748 Alice key, byte-reversed
    let sk = fixtures::bytes32("2a2cb91da5fb77b12a99c0eb872f4cdf4566b25172c1163c7da518730a6d0777");
    let data = request(Instruction::LoadPrivateKey, &sk);
    assert_eq!(
        hex::encode(&data),
        concat!(
            "22333f35302fed96eb432e6181f9475c4b63fdf51251c18e442286a45f595ace",
            "6391a3559ad6db30a2bbf9de35d00feef179541660ba282e4858bf5bc3d496f0"
        )
    );
}

#[test]
fn test_bob_public_point() {
    let sk = fixtures::bytes32("ebe088ff278b2f1cfdb6182629b13b6fe60e80838b7fe1794b8a4a627e08ab5d");
    let data = request(Instruction::LoadPrivateKey, &sk);
    assert_eq!(
        hex::encode(&data),
        concat!(
            "2e0f09a82cb8b45c6fc0726ebc58912fb161768ab9648f9391eed9c322908888",
            "727a7a8142ef4be339b2142e1186ff4a70ae59e86cce549a1ca9bf6ad68098b8"
        )
    );
}

#[test]
fn test_raw_shared_x() {
    let mut ch = se25519_host::LoopbackChannel::new(fixtures::applet(41));
    ch.select(&DEFAULT_AID).unwrap();
    let alice = fixtures::bytes32("2a2cb91da5fb77b12a99c0eb872f4cdf4566b25172c1163c7da518730a6d0777");
    ch.transmit(&Command::new(Instruction::LoadPrivateKey, &alice))
        .unwrap();

    // Bob's public key lifted to Wei25519
    let mut peer = [0u8; 64];
    hex::decode_to_slice(
        concat!(
            "79d63319bf29a757f812230672ee2de9e1e08f976d0c067e5f6c28262888c32f",
            "029973f8fd61dd2d3f670b1a2b55e9d5712d1fc2070fc7014af56be3bb016d90"
        ),
        &mut peer,
    )
    .unwrap();
    let rsp = ch
        .transmit(&Command::new(Instruction::ComputeSharedSecret, &peer))
        .unwrap();
    assert_eq!(
        hex::encode(rsp.data()),
        "575148fdb8acecef483b4afbf0a5fd0a2cc634b49c18f1e98d426e1f79a23b56"
    );
}

#[test]
fn test_raw_shared_x_is_symmetric() {
    let mut ch = se25519_host::LoopbackChannel::new(fixtures::applet(42));
    ch.select(&DEFAULT_AID).unwrap();
    let bob = fixtures::bytes32("ebe088ff278b2f1cfdb6182629b13b6fe60e80838b7fe1794b8a4a627e08ab5d");
    ch.transmit(&Command::new(Instruction::LoadPrivateKey, &bob))
        .unwrap();

    // Alice's public key lifted to Wei25519
    let mut peer = [0u8; 64];
    hex::decode_to_slice(
        concat!(
            "14f9465539544f969ec4e2d0b7e569b805a1e95f8728361eff51db33b49d44e9",
            "28c924d74d5fef33c5b624f41f2a5ad9b2201465d6fe36b4c5f774d3cf000b5b"
        ),
        &mut peer,
    )
    .unwrap();
    let rsp = ch
        .transmit(&Command::new(Instruction::ComputeSharedSecret, &peer))
        .unwrap();
    assert_eq!(
        hex::encode(rsp.data()),
        "575148fdb8acecef483b4afbf0a5fd0a2cc634b49c18f1e98d426e1f79a23b56"
    );
}
