use super::*;
use ivo_protocol::ToolCall;

#[test]
fn seed_with_system_prompt() {
    let conversation = Conversation::seed(Some("be helpful"), "hello");
    assert_eq!(conversation.messages().len(), 2);
    assert_eq!(conversation.messages()[0].role, Role::System);
}

#[test]
fn seed_without_system_prompt() {
    let conversation = Conversation::seed(None, "hello");
    assert_eq!(conversation.messages().len(), 1);
}

#[test]
fn validates_matching_tool_call_ids() {
    let mut conversation = Conversation::seed(None, "do it");
    conversation.push(Message::assistant_tool_calls(vec![ToolCall::new("c1", "bash", "{}")]));
    conversation.push(Message::tool_result("c1", "ok"));
    assert!(conversation.validate_ordering().is_ok());
}

#[test]
fn rejects_dangling_tool_call_id() {
    let mut conversation = Conversation::seed(None, "do it");
    conversation.push(Message::tool_result("unknown", "ok"));
    assert!(conversation.validate_ordering().is_err());
}

#[test]
fn pending_tool_call_ids_clears_after_response() {
    let mut conversation = Conversation::seed(None, "do it");
    conversation.push(Message::assistant_tool_calls(vec![ToolCall::new("c1", "bash", "{}")]));
    assert_eq!(conversation.pending_tool_call_ids().len(), 1);
    conversation.push(Message::tool_result("c1", "ok"));
    assert!(conversation.pending_tool_call_ids().is_empty());
}
