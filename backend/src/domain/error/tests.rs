//! Tests for domain error construction.

use super::*;
use rstest::rstest;

#[rstest]
fn invalid_request_constructor_sets_code() {
    let err = Error::invalid_request("bad");
    assert_eq!(err.code(), ErrorCode::InvalidRequest);
    assert_eq!(err.message(), "bad");
}

#[rstest]
fn internal_constructor_sets_code() {
    let err = Error::internal("boom");
    assert_eq!(err.code(), ErrorCode::InternalError);
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("\n\t")]
fn try_new_rejects_blank_messages(#[case] message: &str) {
    let result = Error::try_new(ErrorCode::InvalidRequest, message);
    assert_eq!(result, Err(ErrorValidationError::EmptyMessage));
}

#[rstest]
#[case(ErrorCode::InvalidRequest, "invalid request")]
#[case(ErrorCode::InternalError, "internal error")]
fn new_falls_back_to_generic_message(#[case] code: ErrorCode, #[case] expected: &str) {
    let err = Error::new(code, " ");
    assert_eq!(err.code(), code);
    assert_eq!(err.message(), expected);
}

#[rstest]
fn display_uses_message() {
    let err = Error::internal("store offline");
    assert_eq!(err.to_string(), "store offline");
}
