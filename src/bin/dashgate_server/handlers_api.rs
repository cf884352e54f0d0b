use super::*;

pub(super) async fn api_users(
    State(state): State<Arc<AppState>>,
    Extension(viewer): Extension<Viewer>,
    Query(page): Query<PageRequest>,
) -> Response {
    let result = state
        .upstream()
        .list_users(viewer.token.as_deref(), clamp_page(page))
        .await;
    match state.observe(result) {
        Ok(listing) => Json(listing).into_response(),
        Err(err) => bad_gateway(&err),
    }
}

pub(super) async fn api_products(
    State(state): State<Arc<AppState>>,
    Extension(viewer): Extension<Viewer>,
    Query(page): Query<PageRequest>,
) -> Response {
    let result = state
        .upstream()
        .list_products(viewer.token.as_deref(), clamp_page(page))
        .await;
    match state.observe(result) {
        Ok(listing) => Json(listing).into_response(),
        Err(err) => bad_gateway(&err),
    }
}

/// Always answers; `fallback` is set when the default list was served.
pub(super) async fn api_categories(
    State(state): State<Arc<AppState>>,
    Extension(viewer): Extension<Viewer>,
) -> Response {
    let load = state
        .upstream()
        .categories_or_default(viewer.token.as_deref())
        .await;
    if load.error.is_some() {
        state.metrics.upstream_error();
    }
    Json(serde_json::json!({
        "categories": load.categories,
        "fallback": load.error.is_some(),
        "error": load.error,
    }))
    .into_response()
}
