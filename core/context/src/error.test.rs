use super::*;

#[test]
fn not_found_message_includes_id() {
    let err = context_error::NotFoundSnafu { id: "abc1234".to_string() }.build();
    assert_eq!(err.to_string(), "no saved context with id abc1234");
}

#[test]
fn ambiguous_prefix_message_includes_prefix() {
    let err = context_error::AmbiguousPrefixSnafu { prefix: "ab".to_string() }.build();
    assert_eq!(err.to_string(), "prefix ab matches more than one saved context");
}
