//! RFC 7748 vectors through the full card path and the reference ladder

use se25519_tests::fixtures;
use se25519_tests::vectors::{load_suite_by_name, CardTarget, ReferenceTarget, Runner};

#[test]
fn test_reference_ladder_matches_rfc() {
    let suite = load_suite_by_name("rfc7748").unwrap();
    assert!(!suite.is_empty());
    let summary = Runner::new(&mut ReferenceTarget).run_suite(&suite).unwrap();
    assert_eq!(summary.passed, suite.len());
}

#[test]
fn test_card_matches_rfc() {
    let suite = load_suite_by_name("rfc7748").unwrap();
    let mut client = fixtures::client(1);
    let mut target = CardTarget::new(&mut client);
    let summary = Runner::new(&mut target).run_suite(&suite).unwrap();
    assert_eq!(summary.failed, 0);
    assert_eq!(summary.passed, suite.len());
}

#[test]
fn test_card_edge_cases() {
    let suite = load_suite_by_name("card_edges").unwrap();
    let mut client = fixtures::client(2);
    let mut target = CardTarget::new(&mut client);
    let summary = Runner::new(&mut target).run_suite(&suite).unwrap();
    assert_eq!(summary.passed, suite.len());
}

#[test]
fn test_card_survives_rejected_cases() {
    // a rejected request must not wedge the applet for the next one
    let edges = load_suite_by_name("card_edges").unwrap();
    let rfc = load_suite_by_name("rfc7748").unwrap();
    let mut client = fixtures::client(3);
    let mut target = CardTarget::new(&mut client);
    let mut runner = Runner::new(&mut target);
    runner.run_suite(&edges).unwrap();
    runner.run_suite(&rfc).unwrap();
}

#[test]
fn test_missing_suite() {
    assert!(load_suite_by_name("no-such-suite").is_err());
}

#[test]
fn test_self_test_against_loopback() {
    let mut client = fixtures::client(4);
    let report = se25519_host::run_self_test(&mut client).unwrap();
    assert!(report.passed.len() >= 3);
}
