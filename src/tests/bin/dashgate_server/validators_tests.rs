use super::*;

#[test]
fn blank_fields_produce_field_level_messages() {
    let form = LoginForm {
        username: "   ".to_string(),
        password: String::new(),
        from: None,
    };
    let errors = form.check().expect_err("blank form is invalid");
    assert_eq!(errors.get("username").map(String::as_str), Some("Username is required"));
    assert_eq!(errors.get("password").map(String::as_str), Some("Password is required"));
}

#[test]
fn valid_form_yields_trimmed_credentials() {
    let form = LoginForm {
        username: " emilys ".to_string(),
        password: "emilyspass".to_string(),
        from: Some("/users".to_string()),
    };
    let creds = form.check().expect("valid");
    assert_eq!(creds.username, "emilys");
    assert_eq!(creds.password, "emilyspass");
}

#[test]
fn return_path_rejects_offsite_targets() {
    assert_eq!(safe_return_path(Some("/products?skip=30")), "/products?skip=30");
    assert_eq!(safe_return_path(Some("//evil.example")), "/dashboard");
    assert_eq!(safe_return_path(Some("https://evil.example")), "/dashboard");
    assert_eq!(safe_return_path(Some("/login")), "/dashboard");
    assert_eq!(safe_return_path(None), "/dashboard");
}

#[test]
fn return_path_rejects_control_and_non_header_characters() {
    assert_eq!(safe_return_path(Some("/\t/evil.example")), "/dashboard");
    assert_eq!(safe_return_path(Some("/\nx")), "/dashboard");
    assert_eq!(safe_return_path(Some("/users\r\nSet-Cookie: x=1")), "/dashboard");
    assert_eq!(safe_return_path(Some("/caf\u{e9}")), "/dashboard");
}

#[test]
fn accepted_return_paths_are_valid_redirect_targets() {
    for from in ["/users?search=a%20b", "/products?skip=30&sortOrder=desc", "/\nx", "/\t/x"] {
        let target = safe_return_path(Some(from));
        let resp = Redirect::to(target).into_response();
        assert_eq!(resp.status(), StatusCode::SEE_OTHER, "{:?}", from);
    }
}

#[test]
fn page_limit_is_clamped() {
    let page = clamp_page(PageRequest { limit: 0, skip: 5 });
    assert_eq!(page, PageRequest { limit: 1, skip: 5 });
    assert_eq!(clamp_page(PageRequest { limit: 500, skip: 0 }).limit, MAX_PAGE_LIMIT);
}
