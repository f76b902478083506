use super::*;
use std::sync::atomic::AtomicU32;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;
use std::sync::Mutex;

fn noop_sink() -> EventSink {
    Arc::new(|_event| {})
}

fn recording_sink() -> (EventSink, Arc<Mutex<Vec<SchedulerEvent>>>) {
    let events = Arc::new(Mutex::new(Vec::new()));
    let recorded = Arc::clone(&events);
    let sink: EventSink = Arc::new(move |event| recorded.lock().unwrap().push(event));
    (sink, events)
}

#[tokio::test]
async fn returns_results_in_input_order_even_when_completion_order_differs() {
    let execute_fn: ExecuteFn = Arc::new(|prompt, index, _attempt, _cancel, _events| {
        Box::pin(async move {
            // Earlier-indexed tasks sleep longer, so they finish last.
            let delay_ms = 30u64.saturating_sub(index as u64 * 10);
            tokio::time::sleep(Duration::from_millis(delay_ms)).await;
            Ok(TaskOutcome { result: format!("done:{prompt}"), tools_used: Vec::new(), tokens: None })
        })
    });

    let volley = Volley::new(SchedulerConfig { max_concurrent: 3, ..SchedulerConfig::default() });
    let results = volley
        .run(vec!["a".to_string(), "b".to_string(), "c".to_string()], execute_fn, noop_sink())
        .await;

    assert_eq!(results.len(), 3);
    assert_eq!(results[0].result.as_deref(), Some("done:a"));
    assert_eq!(results[1].result.as_deref(), Some("done:b"));
    assert_eq!(results[2].result.as_deref(), Some("done:c"));
    assert!(results.iter().all(|r| r.status == TaskResultStatus::Success));
}

#[tokio::test]
async fn retryable_failure_is_retried_and_can_succeed() {
    let attempts_seen: Arc<AtomicU32> = Arc::new(AtomicU32::new(0));
    let counter = Arc::clone(&attempts_seen);
    let execute_fn: ExecuteFn = Arc::new(move |_prompt, _index, attempt, _cancel, _events| {
        counter.fetch_add(1, Ordering::SeqCst);
        Box::pin(async move {
            if attempt == 0 {
                Err(TaskFailure { message: "flaky".to_string(), retryable: true })
            } else {
                Ok(TaskOutcome { result: "recovered".to_string(), tools_used: Vec::new(), tokens: None })
            }
        })
    });

    let volley = Volley::new(SchedulerConfig {
        max_concurrent: 1,
        retry_attempts: 1,
        retry_backoff_base_ms: 1,
        ..SchedulerConfig::default()
    });
    let (sink, events) = recording_sink();
    let results = volley.run(vec!["only".to_string()], execute_fn, sink).await;

    assert_eq!(attempts_seen.load(Ordering::SeqCst), 2);
    assert_eq!(results[0].status, TaskResultStatus::Success);
    assert_eq!(results[0].result.as_deref(), Some("recovered"));

    let recorded = events.lock().unwrap();
    assert!(recorded.iter().any(|e| matches!(e, SchedulerEvent::TaskRetry { attempt: 1, .. })));
}

#[tokio::test]
async fn non_retryable_failure_fails_immediately_without_retrying() {
    let attempts_seen: Arc<AtomicU32> = Arc::new(AtomicU32::new(0));
    let counter = Arc::clone(&attempts_seen);
    let execute_fn: ExecuteFn = Arc::new(move |_prompt, _index, _attempt, _cancel, _events| {
        counter.fetch_add(1, Ordering::SeqCst);
        Box::pin(async move { Err(TaskFailure { message: "bad input".to_string(), retryable: false }) })
    });

    let volley = Volley::new(SchedulerConfig { retry_attempts: 3, ..SchedulerConfig::default() });
    let results = volley.run(vec!["only".to_string()], execute_fn, noop_sink()).await;

    assert_eq!(attempts_seen.load(Ordering::SeqCst), 1);
    assert_eq!(results[0].status, TaskResultStatus::Error);
    assert_eq!(results[0].error.as_deref(), Some("bad input"));
}

#[tokio::test]
async fn timeout_is_retryable_and_succeeds_on_the_next_attempt() {
    let execute_fn: ExecuteFn = Arc::new(|_prompt, _index, attempt, _cancel, _events| {
        Box::pin(async move {
            if attempt == 0 {
                tokio::time::sleep(Duration::from_secs(60)).await;
                unreachable!("timeout should fire first");
            }
            Ok(TaskOutcome { result: "ok".to_string(), tools_used: Vec::new(), tokens: None })
        })
    });

    let volley = Volley::new(SchedulerConfig {
        retry_attempts: 1,
        retry_backoff_base_ms: 1,
        timeout_ms: Some(10),
        ..SchedulerConfig::default()
    });
    let results = volley.run(vec!["only".to_string()], execute_fn, noop_sink()).await;

    assert_eq!(results[0].status, TaskResultStatus::Success);
}

#[tokio::test]
async fn respects_max_concurrent_cap() {
    let in_flight = Arc::new(AtomicUsize::new(0));
    let peak = Arc::new(AtomicUsize::new(0));
    let in_flight_clone = Arc::clone(&in_flight);
    let peak_clone = Arc::clone(&peak);

    let execute_fn: ExecuteFn = Arc::new(move |prompt, _index, _attempt, _cancel, _events| {
        let in_flight = Arc::clone(&in_flight_clone);
        let peak = Arc::clone(&peak_clone);
        Box::pin(async move {
            let current = in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            peak.fetch_max(current, Ordering::SeqCst);
            tokio::time::sleep(Duration::from_millis(10)).await;
            in_flight.fetch_sub(1, Ordering::SeqCst);
            Ok(TaskOutcome { result: prompt, tools_used: Vec::new(), tokens: None })
        })
    });

    let volley = Volley::new(SchedulerConfig { max_concurrent: 2, ..SchedulerConfig::default() });
    let tasks = vec!["a".to_string(), "b".to_string(), "c".to_string(), "d".to_string()];
    let results = volley.run(tasks, execute_fn, noop_sink()).await;

    assert_eq!(results.len(), 4);
    assert!(peak.load(Ordering::SeqCst) <= 2);
}

#[tokio::test]
async fn empty_task_list_returns_empty_results() {
    let volley = Volley::new(SchedulerConfig::default());
    let execute_fn: ExecuteFn =
        Arc::new(|_p, _i, _a, _c, _e| Box::pin(async { Ok(TaskOutcome::default()) }));
    let results = volley.run(Vec::new(), execute_fn, noop_sink()).await;
    assert!(results.is_empty());
}
