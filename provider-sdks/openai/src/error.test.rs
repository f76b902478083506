use super::*;

#[test]
fn rate_limited_status_is_retryable() {
    let err = open_ai_error::HttpSnafu {
        status: 429u16,
        message: "slow down",
    }
    .build();
    assert!(err.is_retryable());
}

#[test]
fn bad_request_status_is_not_retryable() {
    let err = open_ai_error::HttpSnafu {
        status: 400u16,
        message: "bad request",
    }
    .build();
    assert!(!err.is_retryable());
}

#[test]
fn parse_error_is_not_retryable() {
    let err = open_ai_error::ParseSnafu { message: "bad json" }.build();
    assert_eq!(err.status_code(), StatusCode::ParseError);
    assert!(!err.is_retryable());
}
