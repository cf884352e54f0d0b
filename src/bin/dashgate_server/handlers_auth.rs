use std::collections::BTreeMap;

use serde::Deserialize;

use super::*;
use dashgate::model::LoginPayload;
use dashgate::token_fingerprint;

const INVALID_CREDENTIALS: &str = "Invalid username or password";

#[derive(Debug, Default, Deserialize)]
pub(super) struct LoginQuery {
    #[serde(default)]
    from: Option<String>,
}

pub(super) async fn login_page(Query(q): Query<LoginQuery>) -> Result<Html<String>, PageError> {
    let no_errors = BTreeMap::new();
    render::login_page(&render::LoginView {
        username: "",
        from: q.from.as_deref(),
        field_errors: &no_errors,
        alert: None,
    })
    .map(Html)
    .map_err(|err| PageError::render("login", err))
}

pub(super) async fn login_submit(
    State(state): State<Arc<AppState>>,
    Form(form): Form<LoginForm>,
) -> Response {
    let from = form.from.clone();
    let username = form.username.trim().to_string();

    let credentials = match form.check() {
        Ok(c) => c,
        Err(fields) => {
            return login_form_response(
                StatusCode::UNPROCESSABLE_ENTITY,
                &username,
                from.as_deref(),
                &fields,
                None,
            );
        }
    };

    match state.upstream().login(&credentials).await {
        Ok(payload) => {
            tracing::info!(
                user = %payload.username,
                token = %token_fingerprint(&payload.access_token),
                "signed in"
            );
            let target = safe_return_path(from.as_deref()).to_string();
            redirect_with_cookie(
                Redirect::to(&target),
                Some(state.cookie.issue(&payload.access_token)),
            )
        }
        Err(UpstreamError::InvalidCredentials) => {
            tracing::info!(user = %credentials.username, "sign-in rejected");
            login_form_response(
                StatusCode::UNAUTHORIZED,
                &username,
                from.as_deref(),
                &BTreeMap::new(),
                Some(INVALID_CREDENTIALS),
            )
        }
        Err(err) => {
            state.metrics.upstream_error();
            tracing::warn!(error = %err, "sign-in failed");
            let alert = format!("Sign-in is unavailable: {}", err);
            login_form_response(
                StatusCode::BAD_GATEWAY,
                &username,
                from.as_deref(),
                &BTreeMap::new(),
                Some(&alert),
            )
        }
    }
}

fn login_form_response(
    status: StatusCode,
    username: &str,
    from: Option<&str>,
    field_errors: &BTreeMap<String, String>,
    alert: Option<&str>,
) -> Response {
    let view = render::LoginView {
        username,
        from,
        field_errors,
        alert,
    };
    match render::login_page(&view) {
        Ok(html) => (status, Html(html)).into_response(),
        Err(err) => PageError::render("login", err).into_response(),
    }
}

pub(super) async fn logout_submit(State(state): State<Arc<AppState>>) -> Response {
    redirect_with_cookie(
        Redirect::to(dashgate::LOGIN_ROUTE),
        Some(state.cookie.clear()),
    )
}

pub(super) async fn api_login(
    State(state): State<Arc<AppState>>,
    Json(form): Json<LoginForm>,
) -> Response {
    let credentials = match form.check() {
        Ok(c) => c,
        Err(fields) => return unprocessable(&fields),
    };

    let payload: LoginPayload = match state.upstream().login(&credentials).await {
        Ok(p) => p,
        Err(UpstreamError::InvalidCredentials) => {
            return (
                StatusCode::UNAUTHORIZED,
                Json(serde_json::json!({"error": INVALID_CREDENTIALS})),
            )
                .into_response();
        }
        Err(err) => {
            state.metrics.upstream_error();
            return bad_gateway(&err);
        }
    };

    tracing::info!(
        user = %payload.username,
        token = %token_fingerprint(&payload.access_token),
        "signed in via api"
    );
    (
        [(header::SET_COOKIE, state.cookie.issue(&payload.access_token))],
        Json(payload),
    )
        .into_response()
}

pub(super) async fn api_logout(State(state): State<Arc<AppState>>) -> Response {
    (
        [(header::SET_COOKIE, state.cookie.clear())],
        Json(serde_json::json!({"ok": true})),
    )
        .into_response()
}

pub(super) async fn api_me(Extension(viewer): Extension<Viewer>) -> Response {
    match viewer.user {
        Some(user) => Json(user).into_response(),
        None => unauthorized(),
    }
}
