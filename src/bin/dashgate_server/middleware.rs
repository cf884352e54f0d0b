use std::any::Any;
use std::time::Instant;

use tracing::Instrument;

use super::*;
use dashgate::session::{GateDecision, request_token};

/// Outermost layer: request counting, 5xx accounting and the `http.request` span.
pub(super) async fn track_requests(
    State(state): State<Arc<AppState>>,
    req: axum::extract::Request,
    next: Next,
) -> Response {
    let span = tracing::info_span!(
        "http.request",
        method = %req.method(),
        path = %req.uri().path(),
    );
    let started = Instant::now();
    state.metrics.request();

    async move {
        let resp = next.run(req).await;
        let status = resp.status();
        if status.is_server_error() {
            state.metrics.error();
        }
        tracing::info!(
            status = status.as_u16(),
            latency_ms = started.elapsed().as_millis() as u64,
            "request completed"
        );
        resp
    }
    .instrument(span)
    .await
}

/// Runs the session gate before any page handler produces output.
pub(super) async fn session_gate(
    State(state): State<Arc<AppState>>,
    req: axum::extract::Request,
    next: Next,
) -> Response {
    let token = state.cookie.read(req.headers()).map(str::to_string);
    let target = req
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| req.uri().path().to_string());

    match state.gate.evaluate(&target, token.as_deref()).await {
        GateDecision::Allow(user) => {
            let viewer = Viewer {
                token: user.as_ref().and(token),
                user,
            };
            let mut req = req;
            req.extensions_mut().insert(viewer);
            next.run(req).await
        }
        GateDecision::Redirect {
            location,
            clear_cookie,
        } => {
            tracing::debug!(request = %target, %location, clear_cookie, "gate redirect");
            let cookie = clear_cookie.then(|| state.cookie.clear());
            // 303 so a gated POST is followed up with a GET.
            redirect_with_cookie(Redirect::to(&location), cookie)
        }
    }
}

/// Bearer or cookie authentication for the JSON API.
pub(super) async fn require_session(
    State(state): State<Arc<AppState>>,
    req: axum::extract::Request,
    next: Next,
) -> Response {
    let Some(token) = request_token(&state.cookie, req.headers()).map(str::to_string) else {
        return unauthorized();
    };

    let Some(user) = state.gate.resolve(Some(&token)).await else {
        return unauthorized();
    };

    let mut req = req;
    req.extensions_mut().insert(Viewer {
        user: Some(user),
        token: Some(token),
    });
    next.run(req).await
}

/// Turns a handler panic into a marked 500 for [`error_boundary`] to render.
pub(super) fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let message = err
        .downcast_ref::<String>()
        .cloned()
        .or_else(|| err.downcast_ref::<&str>().map(|s| s.to_string()))
        .unwrap_or_else(|| "unknown panic payload".to_string());
    PageError::Panic(message).into_response()
}

/// Replaces a response marked with [`RenderFailure`] by the error page.
pub(super) async fn error_boundary(req: axum::extract::Request, next: Next) -> Response {
    let retry = req
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| "/".to_string());

    let resp = next.run(req).await;
    let Some(RenderFailure(message)) = resp.extensions().get::<RenderFailure>().cloned() else {
        return resp;
    };

    tracing::error!(error = %message, "page render failed");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Html(render::error_page("Something went wrong", &retry)),
    )
        .into_response()
}

#[cfg(test)]
#[path = "../../tests/bin/dashgate_server/middleware_tests.rs"]
mod tests;
