//! Task state model (C4): a pure reducer over [`SchedulerEvent`]s.
//!
//! `init_state` seeds one queued [`TaskState`] per task prompt; `apply_event`
//! mutates a state in place per the six event rules in §4.4. The reducer
//! never looks outside the event it is given -- serialization formats and
//! UI rendering are downstream of this module.

use chrono::DateTime;
use chrono::Utc;
use ivo_protocol::SchedulerEvent;
use ivo_protocol::TaskState;
use ivo_protocol::TaskStatus;
use ivo_protocol::ToolInvocation;
use ivo_protocol::ToolInvocationStatus;

/// The full state a scheduler run's observers track: when the run
/// started, and the per-task state array keyed by task index.
#[derive(Debug, Clone)]
pub struct VolleyState {
    pub start_time: DateTime<Utc>,
    pub tasks: Vec<TaskState>,
}

/// Seed one queued [`TaskState`] per task prompt, in input order.
pub fn init_state<S: AsRef<str>>(tasks: &[S]) -> VolleyState {
    VolleyState {
        start_time: Utc::now(),
        tasks: tasks
            .iter()
            .enumerate()
            .map(|(index, prompt)| TaskState::new(index, prompt.as_ref()))
            .collect(),
    }
}

/// Apply one [`SchedulerEvent`] to `state` in place. Events referencing an
/// out-of-range `task_index` are ignored.
pub fn apply_event(state: &mut VolleyState, event: &SchedulerEvent) {
    let Some(task) = state.tasks.get_mut(event.task_index()) else {
        return;
    };

    match event {
        SchedulerEvent::TaskStart { .. } => {
            task.status = TaskStatus::Running;
            task.started_at = Some(Utc::now());
            task.error = None;
        }
        SchedulerEvent::ToolStart { name, .. } => {
            task.tools.push(ToolInvocation {
                name: name.clone(),
                status: ToolInvocationStatus::Running,
            });
        }
        SchedulerEvent::ToolEnd { name, output, .. } => {
            let closed_status = if output.is_error {
                ToolInvocationStatus::Error
            } else {
                ToolInvocationStatus::Success
            };
            let running = task
                .tools
                .iter_mut()
                .rev()
                .find(|invocation| invocation.name == *name && invocation.status == ToolInvocationStatus::Running);
            match running {
                Some(invocation) => invocation.status = closed_status,
                None => task.tools.push(ToolInvocation {
                    name: name.clone(),
                    status: closed_status,
                }),
            }
        }
        SchedulerEvent::Thinking { .. } => {}
        SchedulerEvent::TaskComplete { result, .. } => {
            task.status = TaskStatus::Done;
            task.ended_at = Some(Utc::now());
            task.result = Some(result.clone());
            task.error = None;
        }
        SchedulerEvent::TaskError { error, .. } => {
            task.status = TaskStatus::Error;
            task.ended_at = Some(Utc::now());
            task.error = Some(error.clone());
        }
        SchedulerEvent::TaskRetry { attempt, error, .. } => {
            task.status = TaskStatus::Queued;
            task.retries = *attempt;
            task.tools.clear();
            task.error = Some(error.clone());
            task.started_at = None;
            task.ended_at = None;
        }
    }
}

#[cfg(test)]
#[path = "state.test.rs"]
mod tests;
