//! The volley scheduler (C5): runs a batch of tasks under a concurrency
//! cap, with per-task timeout and retry-with-backoff, yielding results in
//! input order.
//!
//! The in-flight set is a [`FuturesUnordered`] bounded at `maxConcurrent`,
//! driven from a single `.await` loop rather than `tokio::spawn` -- per
//! §5, the scheduler is one cooperative event loop, not a thread pool.

use futures::stream::FuturesUnordered;
use futures::StreamExt;
use ivo_protocol::SchedulerConfig;
use ivo_protocol::SchedulerEvent;
use ivo_protocol::TaskResult;
use ivo_protocol::TaskResultStatus;
use ivo_protocol::TokenUsage;
use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;
use std::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::warn;

pub type BoxFuture<T> = Pin<Box<dyn Future<Output = T> + Send>>;

/// Where a task's intra-task progress (`ToolStart`/`ToolEnd`/`Thinking`)
/// and the scheduler's own lifecycle events land. Cheap to clone; shared
/// across every in-flight task.
pub type EventSink = Arc<dyn Fn(SchedulerEvent) + Send + Sync>;

/// What a successful attempt produced.
#[derive(Debug, Clone, Default)]
pub struct TaskOutcome {
    pub result: String,
    pub tools_used: Vec<String>,
    pub tokens: Option<TokenUsage>,
}

/// What a failed attempt produced. `retryable` drives whether the
/// scheduler requeues the task -- timeouts are always retryable; any
/// other failure's retryability is the caller's call (it should mirror
/// the underlying tool/provider error's own flag).
#[derive(Debug, Clone)]
pub struct TaskFailure {
    pub message: String,
    pub retryable: bool,
}

pub type ExecuteOutput = Result<TaskOutcome, TaskFailure>;

/// The caller-supplied agent driver: given the task prompt, its index,
/// the current attempt number (0-based), a fresh cancel token, and the
/// event sink to report progress through, produce a boxed future
/// resolving to the attempt's outcome.
pub type ExecuteFn = Arc<dyn Fn(String, usize, u32, CancellationToken, EventSink) -> BoxFuture<ExecuteOutput> + Send + Sync>;

struct AttemptOutcome {
    index: usize,
    prompt: String,
    attempt: u32,
    duration_ms: u64,
    outcome: ExecuteOutput,
}

async fn run_attempt(
    index: usize,
    prompt: String,
    attempt: u32,
    delay_ms: u64,
    timeout_ms: Option<u64>,
    execute_fn: ExecuteFn,
    on_event: EventSink,
) -> AttemptOutcome {
    if delay_ms > 0 {
        tokio::time::sleep(Duration::from_millis(delay_ms)).await;
    }

    on_event(SchedulerEvent::TaskStart { task_index: index });

    let cancel_token = CancellationToken::new();
    let started = Instant::now();
    let exec_future = (execute_fn)(prompt.clone(), index, attempt, cancel_token.clone(), on_event.clone());

    let outcome = match timeout_ms {
        Some(ms) => match tokio::time::timeout(Duration::from_millis(ms), exec_future).await {
            Ok(outcome) => outcome,
            Err(_) => {
                cancel_token.cancel();
                Err(TaskFailure {
                    message: format!("task timed out after {ms}ms"),
                    retryable: true,
                })
            }
        },
        None => exec_future.await,
    };

    AttemptOutcome {
        index,
        prompt,
        attempt,
        duration_ms: started.elapsed().as_millis() as u64,
        outcome,
    }
}

/// Runs a batch of task prompts against `execute_fn` under `config`.
pub struct Volley {
    config: SchedulerConfig,
}

impl Volley {
    pub fn new(config: SchedulerConfig) -> Self {
        Self { config }
    }

    /// Like [`Volley::new`], but rejects a `max_concurrent` of zero
    /// instead of silently clamping it to 1.
    pub fn try_new(config: SchedulerConfig) -> crate::error::Result<Self> {
        if config.max_concurrent == 0 {
            return crate::error::executor_error::InvalidConfigSnafu {
                message: "max_concurrent must be >= 1".to_string(),
            }
            .fail();
        }
        Ok(Self { config })
    }

    /// Run every prompt in `tasks` to completion (success, exhausted
    /// retries, or no-retry failure) and return one [`TaskResult`] per
    /// task, in the same order `tasks` was given.
    pub async fn run(&self, tasks: Vec<String>, execute_fn: ExecuteFn, on_event: EventSink) -> Vec<TaskResult> {
        let total = tasks.len();
        let mut results: Vec<Option<TaskResult>> = vec![None; total];
        if total == 0 {
            return Vec::new();
        }

        let max_concurrent = self.config.max_concurrent.max(1);
        let mut queue: VecDeque<(usize, String, u32, u64)> =
            tasks.into_iter().enumerate().map(|(index, prompt)| (index, prompt, 0, 0)).collect();

        let mut in_flight = FuturesUnordered::new();
        for _ in 0..max_concurrent {
            let Some((index, prompt, attempt, delay_ms)) = queue.pop_front() else {
                break;
            };
            in_flight.push(run_attempt(
                index,
                prompt,
                attempt,
                delay_ms,
                self.config.timeout_ms,
                Arc::clone(&execute_fn),
                Arc::clone(&on_event),
            ));
        }

        while let Some(attempt) = in_flight.next().await {
            let AttemptOutcome { index, prompt, attempt, duration_ms, outcome } = attempt;

            match outcome {
                Ok(task_outcome) => {
                    on_event(SchedulerEvent::TaskComplete { task_index: index, result: task_outcome.result.clone() });
                    results[index] = Some(TaskResult {
                        task: prompt,
                        status: TaskResultStatus::Success,
                        result: Some(task_outcome.result),
                        error: None,
                        duration_ms,
                        tools_used: task_outcome.tools_used,
                        tokens: task_outcome.tokens,
                    });
                }
                Err(failure) if attempt < self.config.retry_attempts && failure.retryable => {
                    let next_attempt = attempt + 1;
                    let delay_ms = self.config.retry_backoff.delay_ms(self.config.retry_backoff_base_ms, attempt);
                    warn!(task_index = index, attempt = next_attempt, delay_ms, error = %failure.message, "task failed, retrying");
                    on_event(SchedulerEvent::TaskRetry {
                        task_index: index,
                        attempt: next_attempt,
                        error: failure.message,
                    });
                    queue.push_back((index, prompt, next_attempt, delay_ms));
                }
                Err(failure) => {
                    on_event(SchedulerEvent::TaskError { task_index: index, error: failure.message.clone() });
                    results[index] = Some(TaskResult {
                        task: prompt,
                        status: TaskResultStatus::Error,
                        result: None,
                        error: Some(failure.message),
                        duration_ms,
                        tools_used: Vec::new(),
                        tokens: None,
                    });
                }
            }

            if let Some((index, prompt, attempt, delay_ms)) = queue.pop_front() {
                in_flight.push(run_attempt(
                    index,
                    prompt,
                    attempt,
                    delay_ms,
                    self.config.timeout_ms,
                    Arc::clone(&execute_fn),
                    Arc::clone(&on_event),
                ));
            }
        }

        results
            .into_iter()
            .enumerate()
            .map(|(index, result)| result.unwrap_or_else(|| panic!("task {index} never resolved")))
            .collect()
    }
}

#[cfg(test)]
#[path = "scheduler.test.rs"]
mod tests;
