use axum::http::StatusCode;
use tower_http::catch_panic::CatchPanicLayer;

use super::*;

async fn failing_page() -> Result<Html<String>, PageError> {
    Err(PageError::render("users", "template state missing"))
}

async fn panicking_page() -> Html<String> {
    panic!("row renderer blew up")
}

async fn upstream_down() -> Response {
    bad_gateway(&UpstreamError::Status {
        label: "list users".to_string(),
        status: 503,
        message: "down".to_string(),
    })
}

async fn healthy_page() -> Html<String> {
    Html("<p>ok</p>".to_string())
}

fn guarded() -> Router {
    Router::new()
        .route("/users", get(failing_page))
        .route("/products", get(panicking_page))
        .route("/api/users", get(upstream_down))
        .route("/dashboard", get(healthy_page))
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(middleware::from_fn(error_boundary))
}

async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });
    format!("http://{}", addr)
}

#[tokio::test]
async fn render_failure_becomes_error_page_with_retry_link() {
    let base = serve(guarded()).await;
    let resp = reqwest::get(format!("{}/users?search=a&skip=30", base))
        .await
        .expect("GET /users");
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let html = resp.text().await.expect("body");
    assert!(html.contains("Something went wrong"));
    assert!(html.contains("href=\"/users?search=a&amp;skip=30\""));
}

#[tokio::test]
async fn handler_panic_is_caught_and_rendered() {
    let base = serve(guarded()).await;
    let resp = reqwest::get(format!("{}/products?category=beauty", base))
        .await
        .expect("GET /products");
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let html = resp.text().await.expect("body");
    assert!(html.contains("Something went wrong"));
    assert!(html.contains("href=\"/products?category=beauty\""));

    // The server keeps serving after the panic.
    let again = reqwest::get(format!("{}/dashboard", base))
        .await
        .expect("GET /dashboard");
    assert_eq!(again.status(), StatusCode::OK);
}

#[tokio::test]
async fn unmarked_errors_pass_through_untouched() {
    let base = serve(guarded()).await;
    let resp = reqwest::get(format!("{}/api/users", base))
        .await
        .expect("GET /api/users");
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    let body: serde_json::Value = resp.json().await.expect("json body");
    assert!(body["error"].is_string());
}

#[test]
fn panic_payloads_become_marked_responses() {
    let resp = panic_response(Box::new("static message"));
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let marker = resp.extensions().get::<RenderFailure>().expect("marker");
    assert!(marker.0.contains("static message"));
}
