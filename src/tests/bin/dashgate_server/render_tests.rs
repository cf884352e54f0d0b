use super::*;

#[test]
fn escape_covers_markup_and_quotes() {
    assert_eq!(
        escape(r#"<a href="x">Tom & 'Jerry'</a>"#),
        "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
    );
}

#[test]
fn href_omits_empty_query() {
    assert_eq!(href("/users", ""), "/users");
    assert_eq!(href("/users", "skip=30"), "/users?skip=30");
}

#[test]
fn auth_state_script_never_carries_the_token() {
    let state = dashgate::auth_store::AuthState {
        user: None,
        token: Some("secret-token".to_string()),
        is_authenticated: true,
        is_loading: false,
    };
    let html = auth_state_script(&state).expect("serialize");
    assert!(html.starts_with("<script type=\"application/json\" id=\"auth-state\">"));
    assert!(!html.contains("secret-token"));
    assert!(html.contains("\"isAuthenticated\":true"));
}

#[test]
fn auth_state_script_cannot_close_its_own_tag() {
    let user = User {
        id: 1,
        username: "x".to_string(),
        name: "</script><script>alert(1)".to_string(),
        email: "x@example.com".to_string(),
        role: "user".to_string(),
        image: None,
    };
    let html = auth_state_script(&dashgate::auth_store::AuthState::for_identity(Some(&user)))
        .expect("serialize");
    assert_eq!(html.matches("</script>").count(), 1);
}

#[test]
fn page_marks_active_nav_and_offers_sign_out() {
    let user = User {
        id: 1,
        username: "emilys".to_string(),
        name: "Emily Johnson".to_string(),
        email: "emily.johnson@x.dummyjson.com".to_string(),
        role: "admin".to_string(),
        image: None,
    };
    let html = page("Users", NavItem::Users, Some(&user), "<p>body</p>").expect("render");
    assert!(html.contains("<a href=\"/users\" class=\"active\">Users</a>"));
    assert!(html.contains("action=\"/logout\""));
    assert!(html.contains("Emily Johnson"));
    assert!(html.contains("<p>body</p>"));
}

#[test]
fn error_page_links_back_to_the_failed_url() {
    let html = error_page("Something went wrong", "/products?search=a&skip=30");
    assert!(html.contains("href=\"/products?search=a&amp;skip=30\""));
    assert!(html.contains("Try again"));
}

#[test]
fn inline_error_offers_a_retry_link() {
    let html = inline_error("users", "upstream returned 503", "/users?skip=30");
    assert!(html.contains("role=\"alert\""));
    assert!(html.contains("Could not load users: upstream returned 503"));
    assert!(html.contains("<a class=\"retry\" href=\"/users?skip=30\">Retry</a>"));
}
