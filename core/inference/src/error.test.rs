use super::*;
use ivo_error::ErrorExt;
use ivo_error::StatusCode;

fn bad_request_reqwest_error() -> reqwest::Error {
    reqwest::Client::new().get("not a url").build().unwrap_err()
}

#[test]
fn openai_transport_error_status_passes_through() {
    let source = openai_sdk::OpenAiError::from(bad_request_reqwest_error());
    let err = InferenceError::from(source);
    assert_eq!(err.status_code(), StatusCode::NetworkError);
}

#[test]
fn anthropic_transport_error_status_passes_through() {
    let source = anthropic_sdk::AnthropicError::from(bad_request_reqwest_error());
    let err = InferenceError::from(source);
    assert_eq!(err.status_code(), StatusCode::NetworkError);
    assert!(err.to_string().contains("anthropic provider error"));
}
