use super::*;

#[test]
fn invalid_config_message_includes_reason() {
    let err = executor_error::InvalidConfigSnafu {
        message: "max_concurrent must be >= 1".to_string(),
    }
    .build();
    assert_eq!(err.to_string(), "invalid scheduler config: max_concurrent must be >= 1");
}
