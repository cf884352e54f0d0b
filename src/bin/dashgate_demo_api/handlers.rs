use serde::Deserialize;

use super::*;
use dashgate::model::LoginPayload;

fn message(status: StatusCode, msg: &str) -> Response {
    (status, Json(serde_json::json!({"message": msg}))).into_response()
}

pub(super) async fn healthz() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct LoginBody {
    #[serde(default)]
    username: String,
    #[serde(default)]
    password: String,
    #[serde(default)]
    expires_in_mins: Option<u64>,
}

pub(super) async fn login(
    State(state): State<Arc<DemoState>>,
    Json(body): Json<LoginBody>,
) -> Response {
    if body.username.trim().is_empty() || body.password.is_empty() {
        return message(StatusCode::BAD_REQUEST, "Username and password required");
    }
    let Some(account) = authenticate(&state.accounts, &body.username, &body.password) else {
        tracing::info!(username = %body.username, "demo login rejected");
        return message(StatusCode::BAD_REQUEST, "Invalid credentials");
    };

    let ttl = body.expires_in_mins.unwrap_or(DEFAULT_TTL_MINS);
    let issued = async {
        let access = issue_session(&state, account.user.id, ttl).await?;
        let refresh = generate_token_secret()?;
        anyhow::Ok((access, refresh))
    }
    .await;
    let (access_token, refresh_token) = match issued {
        Ok(pair) => pair,
        Err(err) => {
            tracing::error!(error = %err, "issue token");
            return message(StatusCode::INTERNAL_SERVER_ERROR, "could not issue token");
        }
    };

    let user = &account.user;
    Json(LoginPayload {
        id: user.id,
        username: user.username.clone(),
        email: user.email.clone(),
        first_name: user.first_name.clone(),
        last_name: user.last_name.clone(),
        role: user.role.clone(),
        image: user.image.clone(),
        access_token,
        refresh_token: Some(refresh_token),
    })
    .into_response()
}

pub(super) async fn me(State(state): State<Arc<DemoState>>, headers: HeaderMap) -> Response {
    match bearer_user(&state, &headers).await {
        Some(user) => Json(user).into_response(),
        None => message(StatusCode::UNAUTHORIZED, "Invalid/expired Token!"),
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct PageQuery {
    #[serde(default = "default_limit")]
    limit: usize,
    #[serde(default)]
    skip: usize,
}

fn default_limit() -> usize {
    30
}

/// `limit=0` returns everything after `skip`, like DummyJSON.
fn window<T: Clone>(items: &[T], q: &PageQuery) -> (Vec<T>, usize) {
    let rest = items.iter().skip(q.skip);
    let page: Vec<T> = if q.limit == 0 {
        rest.cloned().collect()
    } else {
        rest.take(q.limit).cloned().collect()
    };
    let limit = page.len();
    (page, limit)
}

pub(super) async fn users(
    State(state): State<Arc<DemoState>>,
    Query(q): Query<PageQuery>,
) -> Json<serde_json::Value> {
    let all: Vec<WireUser> = state.accounts.iter().map(|a| a.user.clone()).collect();
    let (users, limit) = window(&all, &q);
    Json(serde_json::json!({
        "users": users,
        "total": all.len(),
        "skip": q.skip,
        "limit": limit,
    }))
}

pub(super) async fn products(
    State(state): State<Arc<DemoState>>,
    Query(q): Query<PageQuery>,
) -> Json<serde_json::Value> {
    let (products, limit) = window(&state.products, &q);
    Json(serde_json::json!({
        "products": products,
        "total": state.products.len(),
        "skip": q.skip,
        "limit": limit,
    }))
}

pub(super) async fn categories(State(state): State<Arc<DemoState>>) -> Response {
    if state.fail_categories {
        return message(StatusCode::SERVICE_UNAVAILABLE, "categories unavailable");
    }
    Json(&state.categories).into_response()
}

#[cfg(test)]
#[path = "../../tests/bin/dashgate_demo_api/handlers_tests.rs"]
mod tests;
