use std::sync::atomic::{AtomicU32, Ordering};

use super::*;

fn server_error() -> UpstreamError {
    UpstreamError::Status {
        label: "list users".to_string(),
        status: 503,
        message: "Service Unavailable".to_string(),
    }
}

#[tokio::test]
async fn default_policy_makes_exactly_one_attempt() {
    let calls = &AtomicU32::new(0);
    let out: Result<(), _> = with_retries(RetryPolicy::default(), "t", move || async move {
        calls.fetch_add(1, Ordering::SeqCst);
        Err(server_error())
    })
    .await;
    assert!(out.is_err());
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn retryable_errors_are_retried_up_to_the_limit() {
    let calls = &AtomicU32::new(0);
    let policy = RetryPolicy::new(3, Duration::from_millis(1));
    let out = with_retries(policy, "t", move || async move {
        let n = calls.fetch_add(1, Ordering::SeqCst);
        if n < 2 { Err(server_error()) } else { Ok(n) }
    })
    .await
    .expect("third attempt succeeds");
    assert_eq!(out, 2);
    assert_eq!(calls.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn client_errors_are_not_retried() {
    let calls = &AtomicU32::new(0);
    let policy = RetryPolicy::new(5, Duration::from_millis(1));
    let out: Result<(), _> = with_retries(policy, "t", move || async move {
        calls.fetch_add(1, Ordering::SeqCst);
        Err(UpstreamError::Unauthorized {
            label: "t".to_string(),
        })
    })
    .await;
    assert!(matches!(out, Err(UpstreamError::Unauthorized { .. })));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn backoff_doubles_per_retry() {
    let policy = RetryPolicy::new(4, Duration::from_millis(100));
    assert_eq!(policy.delay_before(0), Duration::from_millis(100));
    assert_eq!(policy.delay_before(2), Duration::from_millis(400));
    assert_eq!(RetryPolicy::new(0, Duration::ZERO).attempts, 1);
}

#[tokio::test]
async fn unreachable_upstream_surfaces_a_transport_error() {
    let client = UpstreamClient::new(UpstreamConfig {
        base_url: "http://127.0.0.1:9/".to_string(),
        timeout: Duration::from_millis(500),
        ..UpstreamConfig::default()
    })
    .expect("build client");
    let err = client
        .list_users(None, PageRequest::default())
        .await
        .expect_err("nothing listens on the discard port");
    assert!(err.is_retryable());
    assert!(err.to_string().starts_with("list users"));
}
