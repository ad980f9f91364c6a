use gencove_client::error::AppError;
use gencove_client::model::retry::{RetryConfig, retry_on_timeout};
use reqwest::StatusCode;
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

#[test]
fn test_retry_config_with_max_attempts() {
    let config = RetryConfig::with_max_attempts(3);
    assert_eq!(config.max_attempts(), 3);
    assert_eq!(config.base_delay().as_millis(), 500); // default
}

#[test]
fn test_retry_config_with_base_delay() {
    let config = RetryConfig::with_base_delay(50);
    assert_eq!(config.max_attempts(), 5); // default
    assert_eq!(config.base_delay().as_millis(), 50);
}

#[test]
fn test_retry_config_with_max_attempts_and_delay() {
    let config = RetryConfig::with_max_attempts_and_delay(3, 15);
    assert_eq!(config.max_attempts(), 3);
    assert_eq!(config.base_delay().as_millis(), 15);
}

#[test]
fn test_retry_config_getters() {
    let config = RetryConfig {
        max_attempt_count: Some(10),
        base_delay_ms: Some(25),
        max_elapsed_secs: Some(7),
    };
    assert_eq!(config.max_attempts(), 10);
    assert_eq!(config.base_delay().as_millis(), 25);
    assert_eq!(config.max_elapsed().as_secs(), 7);

    let config = RetryConfig {
        max_attempt_count: None,
        base_delay_ms: None,
        max_elapsed_secs: None,
    };
    assert_eq!(config.max_attempts(), 5);
    assert_eq!(config.base_delay().as_millis(), 500);
    assert_eq!(config.max_elapsed().as_secs(), 120);
}

#[tokio::test]
async fn first_success_needs_no_retry() {
    let config = RetryConfig::with_max_attempts_and_delay(5, 1);
    let calls = Arc::new(AtomicU32::new(0));

    let counter = calls.clone();
    let result = retry_on_timeout(&config, move || {
        let counter = counter.clone();
        async move {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok::<u32, AppError>(42)
        }
    })
    .await;

    assert_eq!(result.unwrap(), 42);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn timeouts_are_retried_until_success() {
    let config = RetryConfig::with_max_attempts_and_delay(5, 1);
    let calls = Arc::new(AtomicU32::new(0));

    let counter = calls.clone();
    let result = retry_on_timeout(&config, move || {
        let counter = counter.clone();
        async move {
            let attempt = counter.fetch_add(1, Ordering::SeqCst);
            if attempt < 2 {
                Err(AppError::Timeout)
            } else {
                Ok(7u32)
            }
        }
    })
    .await;

    assert_eq!(result.unwrap(), 7);
    assert_eq!(calls.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn timeouts_stop_at_max_attempts() {
    let config = RetryConfig::with_max_attempts_and_delay(3, 1);
    let calls = Arc::new(AtomicU32::new(0));

    let counter = calls.clone();
    let result: Result<u32, AppError> = retry_on_timeout(&config, move || {
        let counter = counter.clone();
        async move {
            counter.fetch_add(1, Ordering::SeqCst);
            Err(AppError::Timeout)
        }
    })
    .await;

    match result.err().expect("should be Err") {
        AppError::Timeout => (),
        other => panic!("Unexpected error: {other:?}"),
    }
    assert_eq!(calls.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn client_errors_are_never_retried() {
    let config = RetryConfig::with_max_attempts_and_delay(5, 1);
    let calls = Arc::new(AtomicU32::new(0));

    let counter = calls.clone();
    let result: Result<u32, AppError> = retry_on_timeout(&config, move || {
        let counter = counter.clone();
        async move {
            counter.fetch_add(1, Ordering::SeqCst);
            Err(AppError::Client {
                status: StatusCode::BAD_REQUEST,
                message: "bad input".to_string(),
            })
        }
    })
    .await;

    match result.err().expect("should be Err") {
        AppError::Client { status, .. } => assert_eq!(status, StatusCode::BAD_REQUEST),
        other => panic!("Unexpected error: {other:?}"),
    }
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn maintenance_is_never_retried() {
    let config = RetryConfig::with_max_attempts_and_delay(5, 1);
    let calls = Arc::new(AtomicU32::new(0));

    let counter = calls.clone();
    let result: Result<u32, AppError> = retry_on_timeout(&config, move || {
        let counter = counter.clone();
        async move {
            counter.fetch_add(1, Ordering::SeqCst);
            Err(AppError::Maintenance {
                message: "upgrading".to_string(),
                eta: Some("1h".to_string()),
            })
        }
    })
    .await;

    match result.err().expect("should be Err") {
        AppError::Maintenance { .. } => (),
        other => panic!("Unexpected error: {other:?}"),
    }
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn exhausted_elapsed_budget_stops_retrying() {
    // Zero elapsed budget: the first timeout already exceeds it
    let config = RetryConfig {
        max_attempt_count: Some(10),
        base_delay_ms: Some(1),
        max_elapsed_secs: Some(0),
    };
    let calls = Arc::new(AtomicU32::new(0));

    let counter = calls.clone();
    let result: Result<u32, AppError> = retry_on_timeout(&config, move || {
        let counter = counter.clone();
        async move {
            counter.fetch_add(1, Ordering::SeqCst);
            Err(AppError::Timeout)
        }
    })
    .await;

    match result.err().expect("should be Err") {
        AppError::Timeout => (),
        other => panic!("Unexpected error: {other:?}"),
    }
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}
