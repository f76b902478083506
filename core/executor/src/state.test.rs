use super::*;
use ivo_protocol::ToolOutput;
use ivo_protocol::ToolResultContent;

fn output(is_error: bool) -> ToolOutput {
    ToolOutput {
        content: ToolResultContent::Text("ok".to_string()),
        is_error,
        modifiers: Vec::new(),
    }
}

#[test]
fn init_state_seeds_one_queued_task_per_prompt_in_order() {
    let state = init_state(&["first", "second"]);
    assert_eq!(state.tasks.len(), 2);
    assert_eq!(state.tasks[0].index, 0);
    assert_eq!(state.tasks[0].prompt, "first");
    assert_eq!(state.tasks[0].status, TaskStatus::Queued);
    assert_eq!(state.tasks[1].prompt, "second");
}

#[test]
fn task_start_marks_running_and_clears_error() {
    let mut state = init_state(&["a"]);
    state.tasks[0].error = Some("stale".to_string());
    apply_event(&mut state, &SchedulerEvent::TaskStart { task_index: 0 });
    assert_eq!(state.tasks[0].status, TaskStatus::Running);
    assert!(state.tasks[0].started_at.is_some());
    assert!(state.tasks[0].error.is_none());
}

#[test]
fn tool_start_appends_running_invocation() {
    let mut state = init_state(&["a"]);
    apply_event(&mut state, &SchedulerEvent::ToolStart { task_index: 0, name: "bash".to_string() });
    assert_eq!(state.tasks[0].tools.len(), 1);
    assert_eq!(state.tasks[0].tools[0].name, "bash");
    assert_eq!(state.tasks[0].tools[0].status, ToolInvocationStatus::Running);
}

#[test]
fn tool_end_closes_the_latest_matching_running_invocation() {
    let mut state = init_state(&["a"]);
    apply_event(&mut state, &SchedulerEvent::ToolStart { task_index: 0, name: "bash".to_string() });
    apply_event(&mut state, &SchedulerEvent::ToolStart { task_index: 0, name: "bash".to_string() });
    apply_event(
        &mut state,
        &SchedulerEvent::ToolEnd { task_index: 0, name: "bash".to_string(), output: output(false) },
    );
    assert_eq!(state.tasks[0].tools[0].status, ToolInvocationStatus::Running);
    assert_eq!(state.tasks[0].tools[1].status, ToolInvocationStatus::Success);
}

#[test]
fn tool_end_with_no_running_match_appends_a_synthetic_entry() {
    let mut state = init_state(&["a"]);
    apply_event(
        &mut state,
        &SchedulerEvent::ToolEnd { task_index: 0, name: "grep".to_string(), output: output(true) },
    );
    assert_eq!(state.tasks[0].tools.len(), 1);
    assert_eq!(state.tasks[0].tools[0].status, ToolInvocationStatus::Error);
}

#[test]
fn task_complete_sets_done_and_captures_result() {
    let mut state = init_state(&["a"]);
    apply_event(&mut state, &SchedulerEvent::TaskComplete { task_index: 0, result: "42".to_string() });
    assert_eq!(state.tasks[0].status, TaskStatus::Done);
    assert_eq!(state.tasks[0].result.as_deref(), Some("42"));
    assert!(state.tasks[0].ended_at.is_some());
}

#[test]
fn task_error_sets_error_status_and_message() {
    let mut state = init_state(&["a"]);
    apply_event(&mut state, &SchedulerEvent::TaskError { task_index: 0, error: "boom".to_string() });
    assert_eq!(state.tasks[0].status, TaskStatus::Error);
    assert_eq!(state.tasks[0].error.as_deref(), Some("boom"));
}

#[test]
fn task_retry_requeues_and_clears_tools_and_timestamps() {
    let mut state = init_state(&["a"]);
    apply_event(&mut state, &SchedulerEvent::TaskStart { task_index: 0 });
    apply_event(&mut state, &SchedulerEvent::ToolStart { task_index: 0, name: "bash".to_string() });
    apply_event(
        &mut state,
        &SchedulerEvent::TaskRetry { task_index: 0, attempt: 1, error: "timed out".to_string() },
    );
    assert_eq!(state.tasks[0].status, TaskStatus::Queued);
    assert_eq!(state.tasks[0].retries, 1);
    assert!(state.tasks[0].tools.is_empty());
    assert!(state.tasks[0].started_at.is_none());
    assert!(state.tasks[0].ended_at.is_none());
    assert_eq!(state.tasks[0].error.as_deref(), Some("timed out"));
}

#[test]
fn events_for_out_of_range_index_are_ignored() {
    let mut state = init_state(&["a"]);
    apply_event(&mut state, &SchedulerEvent::TaskStart { task_index: 5 });
    assert_eq!(state.tasks[0].status, TaskStatus::Queued);
}
