//! Malformed and out-of-order requests seen from the wire

use se25519_api::{Channel, Command, Instruction, StatusWord};
use se25519_applet::SessionState;
use se25519_host::HostError;
use se25519_params::applet::{DEFAULT_AID, INTERNAL_FAULT};
use se25519_tests::fixtures;

fn selected() -> fixtures::TestChannel {
    let mut ch = se25519_host::LoopbackChannel::new(fixtures::applet(30));
    assert!(ch.select(&DEFAULT_AID).unwrap().is_success());
    ch
}

fn send(ch: &mut fixtures::TestChannel, ins: u8, data: &[u8]) -> (Vec<u8>, StatusWord) {
    let rsp = ch.transmit(&Command::raw(ins, data)).unwrap();
    (rsp.data().to_vec(), rsp.status())
}

#[test]
fn test_unknown_instructions() {
    let mut ch = selected();
    for ins in [0x00, 0x04, 0x42, 0xA4, 0xFF] {
        let (data, sw) = send(&mut ch, ins, &[1, 2, 3]);
        assert_eq!(sw, StatusWord::INS_NOT_SUPPORTED, "ins {:#04x}", ins);
        assert!(data.is_empty());
    }
}

#[test]
fn test_load_lengths() {
    let mut ch = selected();
    for len in [0usize, 1, 31, 33, 64] {
        let (data, sw) = send(&mut ch, Instruction::LoadPrivateKey.code(), &vec![0x11; len]);
        assert_eq!(sw, StatusWord::DATA_INVALID, "length {}", len);
        assert!(data.is_empty());
    }
    let (data, sw) = send(&mut ch, Instruction::LoadPrivateKey.code(), &[0x11; 32]);
    assert_eq!(sw, StatusWord::NO_ERROR);
    assert_eq!(data.len(), 64);
}

#[test]
fn test_bad_load_keeps_previous_key() {
    let mut ch = selected();
    send(&mut ch, Instruction::LoadPrivateKey.code(), &[0x22; 32]);
    send(&mut ch, Instruction::LoadPrivateKey.code(), &[0x22; 31]);
    assert_eq!(ch.applet().state(), SessionState::KeyLoaded);
}

#[test]
fn test_compute_lengths() {
    let mut ch = selected();
    send(&mut ch, Instruction::LoadPrivateKey.code(), &[0x33; 32]);
    for len in [0usize, 32, 63, 65] {
        let (_, sw) = send(
            &mut ch,
            Instruction::ComputeSharedSecret.code(),
            &vec![0x01; len],
        );
        assert_eq!(sw, StatusWord::DATA_INVALID, "length {}", len);
    }
}

#[test]
fn test_compute_needs_key() {
    let mut ch = selected();
    let (_, sw) = send(&mut ch, Instruction::ComputeSharedSecret.code(), &[0x01; 64]);
    assert_eq!(sw, StatusWord::DATA_INVALID);
}

#[test]
fn test_off_curve_peer_returns_engine_code() {
    let mut ch = selected();
    send(&mut ch, Instruction::LoadPrivateKey.code(), &[0x44; 32]);
    let (data, sw) = send(&mut ch, Instruction::ComputeSharedSecret.code(), &[0x01; 64]);
    assert_eq!(sw, StatusWord::NO_ERROR);
    assert_eq!(data.len(), 2);
    assert_ne!(u16::from_be_bytes([data[0], data[1]]), INTERNAL_FAULT);
    assert_eq!(ch.applet().state(), SessionState::Uninitialized);
}

#[test]
fn test_host_reports_card_code() {
    let mut client = fixtures::client(31);
    client
        .set_private_key(&fixtures::bytes32(fixtures::ALICE_SK))
        .unwrap();
    // the lift succeeds but the product is the identity
    let err = client.shared_secret(&fixtures::point(
        "0000000000000000000000000000000000000000000000000000000000000000",
    ));
    assert!(matches!(err, Err(HostError::Card(1))));
}

#[test]
fn test_host_rejects_twist_point_before_sending() {
    let mut client = fixtures::client(32);
    client
        .set_private_key(&fixtures::bytes32(fixtures::ALICE_SK))
        .unwrap();
    let err = client.shared_secret(&fixtures::point(
        "e5210f12786811d3f4b7959d0538ae2c31dbe7106fc03c3efc4cd549c715a493",
    ));
    assert!(matches!(err, Err(HostError::Conversion(_))));
    // the loaded key is untouched
    let secret = client
        .shared_secret(&fixtures::point(fixtures::BOB_PK))
        .unwrap();
    assert_eq!(hex::encode(*secret), fixtures::SHARED);
}

#[test]
fn test_deselect_drops_key() {
    let mut ch = selected();
    send(&mut ch, Instruction::LoadPrivateKey.code(), &[0x55; 32]);
    ch.select(&DEFAULT_AID).unwrap();
    let (_, sw) = send(&mut ch, Instruction::ComputeSharedSecret.code(), &[0x01; 64]);
    assert_eq!(sw, StatusWord::DATA_INVALID);
}

#[test]
fn test_unknown_aid_leaves_selection() {
    let mut ch = selected();
    send(&mut ch, Instruction::LoadPrivateKey.code(), &[0x66; 32]);
    let rsp = ch.select(&[0xA0, 0, 0, 0, 1]).unwrap();
    assert_eq!(rsp.status(), StatusWord::FILE_NOT_FOUND);
    assert!(ch.is_selected());
    assert_eq!(ch.applet().state(), SessionState::KeyLoaded);
}
