use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use axum::Router;
use axum::middleware;
use tower_http::catch_panic::CatchPanicLayer;

use dashgate::session::{CookieSettings, RouteMatcher, RoutePatterns, SessionGate};
use dashgate::upstream::{RetryPolicy, UpstreamClient, UpstreamConfig};

use super::super::gate_middleware::{error_boundary, panic_response, session_gate, track_requests};
use super::super::metrics::Metrics;
use super::super::routes::{api_router, page_router, system_router};
use super::super::types::AppState;
use super::Args;

pub(super) fn build_state(args: &Args) -> Result<Arc<AppState>> {
    let mut patterns = RoutePatterns::default();
    patterns.excluded.extend(args.exclude.iter().cloned());
    let matcher = RouteMatcher::new(&patterns).context("invalid route pattern")?;

    let upstream = UpstreamClient::new(UpstreamConfig {
        base_url: args.upstream_url.clone(),
        timeout: Duration::from_millis(args.upstream_timeout_ms),
        retry: RetryPolicy::new(
            args.upstream_attempts,
            Duration::from_millis(args.upstream_backoff_ms),
        ),
        session_ttl_mins: args.session_ttl_mins,
    })
    .context("build upstream client")?;

    Ok(Arc::new(AppState {
        gate: SessionGate::new(matcher, upstream),
        cookie: CookieSettings {
            name: args.cookie_name.clone(),
            secure: args.cookie_secure,
            max_age_secs: args.session_ttl_mins * 60,
        },
        metrics: Metrics::new(),
    }))
}

/// Layers run outside-in: tracking, error boundary, panic capture, then the
/// session gate.
pub(super) fn build_app_router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(page_router())
        .merge(api_router(state.clone()))
        .merge(system_router())
        .layer(middleware::from_fn_with_state(state.clone(), session_gate))
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(middleware::from_fn(error_boundary))
        .layer(middleware::from_fn_with_state(state.clone(), track_requests))
        .with_state(state)
}
