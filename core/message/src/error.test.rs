use super::*;
use ivo_error::ErrorExt;

#[test]
fn dangling_tool_call_id_is_invalid_request() {
    let err = message_error::DanglingToolCallIdSnafu { call_id: "abc" }.build();
    assert_eq!(err.status_code(), StatusCode::InvalidRequest);
    assert!(!err.is_retryable());
}
