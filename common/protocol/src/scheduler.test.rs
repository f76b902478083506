use super::*;

#[test]
fn linear_backoff_grows_by_base() {
    let backoff = RetryBackoff::Linear;
    assert_eq!(backoff.delay_ms(500, 0), 500);
    assert_eq!(backoff.delay_ms(500, 1), 1000);
    assert_eq!(backoff.delay_ms(500, 2), 1500);
}

#[test]
fn exponential_backoff_doubles() {
    let backoff = RetryBackoff::Exponential;
    assert_eq!(backoff.delay_ms(500, 0), 500);
    assert_eq!(backoff.delay_ms(500, 1), 1000);
    assert_eq!(backoff.delay_ms(500, 2), 2000);
}

#[test]
fn scheduler_config_defaults() {
    let config = SchedulerConfig::default();
    assert_eq!(config.max_concurrent, 3);
    assert_eq!(config.retry_attempts, 0);
    assert_eq!(config.retry_backoff, RetryBackoff::Exponential);
}

#[test]
fn scheduler_event_task_index() {
    let event = SchedulerEvent::TaskStart { task_index: 4 };
    assert_eq!(event.task_index(), 4);
}
