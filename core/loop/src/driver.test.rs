use super::*;
use futures::StreamExt;
use ivo_protocol::AuthType;
use ivo_protocol::ProviderKind;
use tokio_util::sync::CancellationToken;

fn unreachable_config(kind: ProviderKind) -> ProviderConfig {
    ProviderConfig {
        provider_kind: kind,
        base_url: "http://127.0.0.1:1".to_string(),
        api_key: Some("test".to_string()),
        auth_type: AuthType::ApiKey,
        model: "test-model".to_string(),
        prompt_caching: false,
        extended_thinking: None,
    }
}

#[tokio::test]
async fn run_emits_stream_start_then_error_on_connection_failure() {
    let registry = Arc::new(ToolRegistry::new());
    let agent_loop = AgentLoopBuilder::new(unreachable_config(ProviderKind::OpenAi), registry, "/tmp").build();

    let mut stream = agent_loop.run(None, "hello");
    let first = stream.next().await.expect("stream_start");
    assert_eq!(first, AgentEvent::StreamStart);

    let second = stream.next().await.expect("error event");
    assert!(matches!(second, AgentEvent::Error { .. }));

    assert!(stream.next().await.is_none());
}

#[tokio::test]
async fn run_fails_before_streaming_when_tool_round_ceiling_already_reached() {
    let registry = Arc::new(ToolRegistry::new());
    let config = LoopConfig::new(CancellationToken::new()).with_max_tool_rounds(0);
    let agent_loop = AgentLoopBuilder::new(unreachable_config(ProviderKind::OpenAi), registry, "/tmp")
        .with_config(config)
        .build();

    let mut stream = agent_loop.run(None, "hello");
    let only_event = stream.next().await.expect("ceiling error");
    match only_event {
        AgentEvent::Error { message } => {
            assert_eq!(message, "Stopped after 0 tool rounds to prevent infinite loop");
        }
        other => panic!("expected Error, got {other:?}"),
    }
    assert!(stream.next().await.is_none());
}

#[tokio::test]
async fn run_stops_immediately_when_cancelled_up_front() {
    let registry = Arc::new(ToolRegistry::new());
    let cancel_token = CancellationToken::new();
    cancel_token.cancel();
    let config = LoopConfig::new(cancel_token);
    let agent_loop = AgentLoopBuilder::new(unreachable_config(ProviderKind::OpenAi), registry, "/tmp")
        .with_config(config)
        .build();

    let mut stream = agent_loop.run(None, "hello");
    assert!(stream.next().await.is_none());
}
