use super::*;

async fn body_json(resp: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("json body")
}

fn state(fail_categories: bool) -> Arc<DemoState> {
    super::super::runtime::build_state(fail_categories)
}

#[test]
fn window_applies_skip_and_limit() {
    let items: Vec<u32> = (1..=10).collect();
    let (page, limit) = window(&items, &PageQuery { limit: 3, skip: 8 });
    assert_eq!(page, vec![9, 10]);
    assert_eq!(limit, 2);

    let (all, _) = window(&items, &PageQuery { limit: 0, skip: 0 });
    assert_eq!(all.len(), 10);
}

#[tokio::test]
async fn login_returns_tokens_for_valid_credentials() {
    let state = state(false);
    let resp = login(
        State(state.clone()),
        Json(LoginBody {
            username: "emilys".to_string(),
            password: "emilyspass".to_string(),
            expires_in_mins: Some(5),
        }),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    assert_eq!(body["username"], "emilys");
    assert_eq!(body["role"], "admin");
    assert!(body["accessToken"].as_str().is_some_and(|t| t.len() == 64));
    assert_eq!(state.sessions.read().await.len(), 1);
}

#[tokio::test]
async fn login_rejects_bad_password_with_400() {
    let resp = login(
        State(state(false)),
        Json(LoginBody {
            username: "emilys".to_string(),
            password: "nope".to_string(),
            expires_in_mins: None,
        }),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(resp).await["message"], "Invalid credentials");
}

#[tokio::test]
async fn categories_can_be_forced_to_fail() {
    assert_eq!(
        categories(State(state(true))).await.status(),
        StatusCode::SERVICE_UNAVAILABLE
    );
    let ok = categories(State(state(false))).await;
    assert_eq!(ok.status(), StatusCode::OK);
    let body = body_json(ok).await;
    assert_eq!(body[0]["slug"], "beauty");
}
