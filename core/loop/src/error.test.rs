use super::*;

#[test]
fn repetitive_tool_call_message_matches_spec_wording() {
    let err = loop_error::RepetitiveToolCallSnafu { tool: "bash" }.build();
    assert_eq!(
        err.to_string(),
        "Tried running bash with the same arguments 3 times in a row. There is probably something wrong."
    );
}

#[test]
fn tool_round_ceiling_message_matches_spec_wording() {
    let err = loop_error::ToolRoundCeilingSnafu { rounds: 50u32 }.build();
    assert_eq!(err.to_string(), "Stopped after 50 tool rounds to prevent infinite loop");
}

#[test]
fn status_codes_are_non_retryable_for_loop_guards() {
    let err = loop_error::ToolRoundCeilingSnafu { rounds: 50u32 }.build();
    assert!(!err.is_retryable());
}
