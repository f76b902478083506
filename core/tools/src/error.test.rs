use super::*;
use ivo_error::ErrorExt;

#[test]
fn not_found_maps_to_invalid_arguments() {
    let err = tool_error::NotFoundSnafu { name: "missing" }.build();
    assert_eq!(err.status_code(), StatusCode::InvalidArguments);
    assert!(!err.is_retriable());
}

#[test]
fn timeout_is_retriable() {
    let err = tool_error::TimeoutSnafu { timeout_secs: 30i64 }.build();
    assert!(err.is_retriable());
    assert_eq!(err.status_code(), StatusCode::Timeout);
}

#[test]
fn io_error_is_retriable() {
    let err: ToolError = std::io::Error::new(std::io::ErrorKind::Other, "disk full").into();
    assert!(err.is_retriable());
}

#[test]
fn invalid_input_helper_builds_invalid_input_variant() {
    let err = ToolError::invalid_input("bad shape");
    assert!(matches!(err, ToolError::InvalidInput { .. }));
    assert_eq!(err.to_output_message(), "Invalid input: bad shape");
}

#[test]
fn cancelled_is_not_retriable_but_is_cancelled() {
    let err = tool_error::CancelledSnafu.build();
    assert!(err.is_cancelled());
    assert!(!err.is_retriable());
}
