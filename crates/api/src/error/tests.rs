use super::*;

#[test]
fn test_validation_functions() {
    assert!(validate::length("scalar", 32, 32).is_ok());
    match validate::length("scalar", 31, 32).unwrap_err() {
        Error::InvalidLength {
            context,
            expected,
            actual,
        } => {
            assert_eq!(context, "scalar");
            assert_eq!(expected, 32);
            assert_eq!(actual, 31);
        }
        _ => panic!("Expected InvalidLength error"),
    }

    assert!(validate::length_range("aid", 8, 5, 16).is_ok());
    assert!(validate::length_range("aid", 4, 5, 16).is_err());
    assert!(validate::length_range("aid", 17, 5, 16).is_err());

    assert!(validate::parameter(true, "version", "must be non-zero").is_ok());
    assert!(matches!(
        validate::parameter(false, "version", "must be non-zero"),
        Err(Error::InvalidParameter { context: "version", .. })
    ));
}

#[test]
fn test_with_context_keeps_lengths() {
    let err = Error::InvalidLength {
        context: "inner",
        expected: 64,
        actual: 3,
    }
    .with_context("peer point");
    assert_eq!(
        err,
        Error::InvalidLength {
            context: "peer point",
            expected: 64,
            actual: 3,
        }
    );
}

#[test]
fn test_result_ext() {
    let r: core::result::Result<(), Error> = Err(Error::param("a", "b"));
    let r = r.with_context("outer");
    assert!(matches!(r, Err(Error::InvalidParameter { context: "outer", .. })));
}

#[cfg(feature = "std")]
#[test]
fn test_with_context_keeps_message() {
    let err = Error::Transport {
        context: "channel",
        message: "no applet selected".into(),
    }
    .with_context("loopback request");
    assert_eq!(
        err.to_string(),
        "Transport error: loopback request: no applet selected"
    );
}

#[test]
fn test_engine_error_reason_codes() {
    assert_eq!(EngineError::illegal_value().reason(), 1);
    assert_eq!(EngineError::uninitialized_key().reason(), 2);
    assert_eq!(EngineError::illegal_use().reason(), 5);
    assert_eq!(EngineError::new(0x1234).reason(), 0x1234);

    let text = EngineError::illegal_value().to_string();
    assert!(text.contains("ILLEGAL_VALUE"));
    assert!(EngineError::new(0x77).to_string().contains("UNKNOWN"));
}
