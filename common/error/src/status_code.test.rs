use super::*;

#[test]
fn retryable_network_errors() {
    assert!(StatusCode::NetworkError.is_retryable());
    assert!(StatusCode::Timeout.is_retryable());
    assert!(!StatusCode::InvalidArguments.is_retryable());
}

#[test]
fn from_i32_roundtrip() {
    assert_eq!(StatusCode::from_i32(12_002), Some(StatusCode::Timeout));
    assert_eq!(StatusCode::from_i32(99_999), None);
}

#[test]
fn category_grouping() {
    assert_eq!(StatusCode::Internal.category(), StatusCategory::Common);
    assert_eq!(StatusCode::Timeout.category(), StatusCategory::Resource);
}

#[test]
fn display_matches_name() {
    assert_eq!(StatusCode::RateLimited.to_string(), "RateLimited");
}
