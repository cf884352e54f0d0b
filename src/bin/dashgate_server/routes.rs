//! HTTP route registration for the dashboard server.

use super::*;

pub(super) fn page_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(root))
        .route("/login", get(login_page).post(login_submit))
        .route("/logout", post(logout_submit))
        .route("/dashboard", get(dashboard))
        .route("/users", get(users_page))
        .route("/products", get(products_page))
}

/// JSON API. Everything except sign-in/out requires a verified session.
pub(super) fn api_router(state: Arc<AppState>) -> Router<Arc<AppState>> {
    let authed = Router::new()
        .route("/api/auth/me", get(api_me))
        .route("/api/users", get(api_users))
        .route("/api/products", get(api_products))
        .route("/api/categories", get(api_categories))
        .layer(middleware::from_fn_with_state(state, require_session));

    Router::new()
        .route("/api/auth/login", post(api_login))
        .route("/api/auth/logout", post(api_logout))
        .merge(authed)
}

pub(super) fn system_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/metrics", get(metrics_endpoint))
}
