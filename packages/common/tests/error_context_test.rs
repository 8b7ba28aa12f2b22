//! Tests for the shared error type: kinds, context and source chaining

use droidscope_common::{bail, err, Error, ErrorKind, Result};
use std::error::Error as _;

fn parse_threshold(raw: &str) -> Result<u8> {
    match raw.parse::<u8>() {
        Ok(n) if n <= 7 => Ok(n),
        _ => bail!(configuration, "threshold `{}` out of range", raw),
    }
}

#[test]
fn test_error_kind_and_display() {
    let error = Error::configuration();

    assert_eq!(error.kind(), &ErrorKind::Configuration);
    assert_eq!(error.to_string(), "Configuration error");
    assert!(error.get_context().is_none());
    assert!(error.source().is_none());
}

#[test]
fn test_context_is_displayed_after_kind() {
    let error = Error::configuration().context("empty level name");

    assert_eq!(error.get_context(), Some("empty level name"));
    assert_eq!(error.to_string(), "Configuration error: empty level name");
    assert!(error.source().is_none());
}

#[test]
fn test_macros_attach_location() {
    let rejected = parse_threshold("9");
    let built = err!(configuration);

    match rejected {
        Err(e) => {
            assert_eq!(e.kind(), &ErrorKind::Configuration);
            let context = e.get_context().unwrap_or_default();
            assert!(context.starts_with("threshold `9` out of range at "));
            assert!(context.contains(file!()));
        }
        Ok(_) => panic!("Expected configuration error"),
    }
    assert_eq!(parse_threshold("3").ok(), Some(3));
    assert!(built.get_context().unwrap_or_default().starts_with("at "));
}

#[test]
fn test_second_context_keeps_the_first() {
    let error = err!(configuration, "unknown log level `loud`").context("reading DROIDSCOPE_LOG");

    assert_eq!(error.get_context(), Some("reading DROIDSCOPE_LOG"));
    let inner = error.source().map(ToString::to_string).unwrap_or_default();
    assert!(inner.starts_with("Configuration error: unknown log level `loud` at "));
    assert!(error.to_string().contains("\nCaused by: Configuration error: unknown log level"));
}

#[test]
fn test_source_is_kept_through_context() {
    let cause = std::io::Error::new(std::io::ErrorKind::InvalidData, "not unicode");
    let error = Error::with_source(ErrorKind::Configuration, cause).context("reading DROIDSCOPE_LOG");

    let chain: Vec<String> = std::iter::successors(error.source(), |e: &&dyn std::error::Error| (*e).source())
        .map(ToString::to_string)
        .collect();

    assert_eq!(chain.len(), 2);
    assert!(chain[0].starts_with("Configuration error\nCaused by: not unicode"));
    assert_eq!(chain[1], "not unicode");
    assert!(error.to_string().starts_with("Configuration error: reading DROIDSCOPE_LOG\nCaused by:"));
}
