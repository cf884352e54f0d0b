use super::*;

pub(super) fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(serde_json::json!({"error": "unauthorized"})),
    )
        .into_response()
}

pub(super) fn bad_gateway(err: &UpstreamError) -> Response {
    (
        StatusCode::BAD_GATEWAY,
        Json(serde_json::json!({"error": err.to_string()})),
    )
        .into_response()
}

pub(super) fn unprocessable(fields: &std::collections::BTreeMap<String, String>) -> Response {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(serde_json::json!({"error": "validation failed", "fields": fields})),
    )
        .into_response()
}

/// Redirect, optionally carrying a `Set-Cookie` value.
pub(super) fn redirect_with_cookie(redirect: Redirect, set_cookie: Option<String>) -> Response {
    match set_cookie {
        Some(cookie) => ([(header::SET_COOKIE, cookie)], redirect).into_response(),
        None => redirect.into_response(),
    }
}

/// Marker left on responses whose page failed to render; see [`error_boundary`].
#[derive(Clone, Debug)]
pub(crate) struct RenderFailure(pub(crate) String);

#[derive(Debug, thiserror::Error)]
pub(crate) enum PageError {
    #[error("render {page}: {message}")]
    Render { page: &'static str, message: String },

    #[error("handler panicked: {0}")]
    Panic(String),
}

impl PageError {
    pub(crate) fn render(page: &'static str, err: impl std::fmt::Display) -> Self {
        PageError::Render {
            page,
            message: err.to_string(),
        }
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let mut resp = StatusCode::INTERNAL_SERVER_ERROR.into_response();
        resp.extensions_mut().insert(RenderFailure(self.to_string()));
        resp
    }
}
