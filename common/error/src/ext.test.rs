use super::*;

#[test]
fn output_msg_hides_logged_errors() {
    let err = PlainError::new("sensitive details", StatusCode::Internal);
    assert_eq!(err.output_msg(), "Internal error: 1001");
}

#[test]
fn output_msg_passes_through_non_logged_errors() {
    let err = PlainError::new("Invalid parameter: foo", StatusCode::InvalidArguments);
    assert_eq!(err.output_msg(), "Invalid parameter: foo");
}

#[test]
fn status_code_and_retryability() {
    let err = PlainError::new("rate limited", StatusCode::RateLimited);
    assert_eq!(err.status_code(), StatusCode::RateLimited);
    assert!(err.is_retryable());
}

#[test]
fn boxed_wraps_any_std_error() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
    let err = boxed(io_err, StatusCode::FileNotFound);
    assert_eq!(err.status_code(), StatusCode::FileNotFound);
    assert!(std::error::Error::source(&err).is_some());
}
