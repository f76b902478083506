//! Task state model, scheduler events, and scheduler configuration (C4/C5
//! vocabulary).

use crate::tool::ToolOutput;
use crate::usage::TokenUsage;
use serde::Deserialize;
use serde::Serialize;

/// Backoff shape applied between retry attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RetryBackoff {
    #[default]
    Exponential,
    Linear,
}

impl RetryBackoff {
    /// `linear: base * (attempt + 1)`, `exponential: base * 2^attempt`.
    pub fn delay_ms(&self, base_ms: u64, attempt: u32) -> u64 {
        match self {
            RetryBackoff::Linear => base_ms * (attempt as u64 + 1),
            RetryBackoff::Exponential => base_ms.saturating_mul(1u64 << attempt.min(32)),
        }
    }
}

/// Scheduler ("volley") configuration.
#[derive(Debug, Clone)]
pub struct SchedulerConfig {
    pub max_concurrent: usize,
    pub retry_attempts: u32,
    pub retry_backoff: RetryBackoff,
    pub retry_backoff_base_ms: u64,
    pub timeout_ms: Option<u64>,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            max_concurrent: 3,
            retry_attempts: 0,
            retry_backoff: RetryBackoff::Exponential,
            retry_backoff_base_ms: 500,
            timeout_ms: None,
        }
    }
}

/// Status of one tool call within a task, as tracked by the reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolInvocationStatus {
    Running,
    Success,
    Error,
}

/// One tool invocation as observed by the task-state reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolInvocation {
    pub name: String,
    pub status: ToolInvocationStatus,
}

/// The lifecycle status of one scheduled task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Queued,
    Running,
    Done,
    Error,
}

/// Per-task state tracked by the scheduler's reducer.
#[derive(Debug, Clone)]
pub struct TaskState {
    pub index: usize,
    pub prompt: String,
    pub status: TaskStatus,
    pub started_at: Option<chrono::DateTime<chrono::Utc>>,
    pub ended_at: Option<chrono::DateTime<chrono::Utc>>,
    pub retries: u32,
    pub tools: Vec<ToolInvocation>,
    pub result: Option<String>,
    pub error: Option<String>,
}

impl TaskState {
    pub fn new(index: usize, prompt: impl Into<String>) -> Self {
        Self {
            index,
            prompt: prompt.into(),
            status: TaskStatus::Queued,
            started_at: None,
            ended_at: None,
            retries: 0,
            tools: Vec::new(),
            result: None,
            error: None,
        }
    }
}

/// Events emitted by the agent loop and the scheduler into the shared
/// task-state reducer.
#[derive(Debug, Clone)]
pub enum SchedulerEvent {
    TaskStart { task_index: usize },
    ToolStart { task_index: usize, name: String },
    ToolEnd { task_index: usize, name: String, output: ToolOutput },
    Thinking { task_index: usize, delta: String },
    TaskComplete { task_index: usize, result: String },
    TaskError { task_index: usize, error: String },
    TaskRetry { task_index: usize, attempt: u32, error: String },
}

impl SchedulerEvent {
    pub fn task_index(&self) -> usize {
        match self {
            SchedulerEvent::TaskStart { task_index }
            | SchedulerEvent::ToolStart { task_index, .. }
            | SchedulerEvent::ToolEnd { task_index, .. }
            | SchedulerEvent::Thinking { task_index, .. }
            | SchedulerEvent::TaskComplete { task_index, .. }
            | SchedulerEvent::TaskError { task_index, .. }
            | SchedulerEvent::TaskRetry { task_index, .. } => *task_index,
        }
    }
}

/// Externalized scheduler output for one task.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskResult {
    pub task: String,
    pub status: TaskResultStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub duration_ms: u64,
    pub tools_used: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tokens: Option<TokenUsage>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskResultStatus {
    Success,
    Error,
}

#[cfg(test)]
#[path = "scheduler.test.rs"]
mod tests;
