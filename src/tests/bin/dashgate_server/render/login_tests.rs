use std::collections::BTreeMap;

use super::*;

#[test]
fn login_form_shows_field_errors_and_keeps_username() {
    let mut errors = BTreeMap::new();
    errors.insert("password".to_string(), "Password is required".to_string());
    let html = login_page(&LoginView {
        username: "emilys",
        from: Some("/products"),
        field_errors: &errors,
        alert: None,
    })
    .expect("render");

    assert!(html.contains("value=\"emilys\""));
    assert!(html.contains("Password is required"));
    assert!(html.contains("name=\"from\" value=\"/products\""));
    assert!(!html.contains("role=\"alert\""));
}

#[test]
fn login_form_shows_alert() {
    let errors = BTreeMap::new();
    let html = login_page(&LoginView {
        username: "",
        from: None,
        field_errors: &errors,
        alert: Some("Invalid username or password"),
    })
    .expect("render");
    assert!(html.contains("<p class=\"alert\" role=\"alert\">Invalid username or password</p>"));
    assert!(html.contains("\"isAuthenticated\":false"));
}
