use super::*;

fn payload() -> LoginPayload {
    LoginPayload {
        id: 1,
        username: "emilys".to_string(),
        email: "emily.johnson@x.dummyjson.com".to_string(),
        first_name: "Emily".to_string(),
        last_name: "Johnson".to_string(),
        role: None,
        image: None,
        access_token: "secret".to_string(),
        refresh_token: None,
    }
}

#[test]
fn login_payload_derives_display_user() {
    let user = payload().to_user();
    assert_eq!(user.name, "Emily Johnson");
    assert_eq!(user.role, DEFAULT_ROLE);
    assert_eq!(user.initials(), "EJ");
    assert!(!user.is_admin());
}

#[test]
fn explicit_role_is_kept() {
    let mut p = payload();
    p.role = Some("admin".to_string());
    assert!(p.to_user().is_admin());
}

#[test]
fn login_payload_parses_camel_case_wire_shape() {
    let p: LoginPayload = serde_json::from_value(serde_json::json!({
        "id": 1,
        "username": "emilys",
        "email": "e@example.com",
        "firstName": "Emily",
        "lastName": "Johnson",
        "gender": "female",
        "image": "https://example.com/1.png",
        "accessToken": "abc",
        "refreshToken": "def"
    }))
    .expect("parse payload");
    assert_eq!(p.access_token, "abc");
    assert_eq!(p.refresh_token.as_deref(), Some("def"));
}

#[test]
fn display_name_falls_back_to_username() {
    assert_eq!(display_name(" ", "", "ghost"), "ghost");
    assert_eq!(display_name("Ann", "", "ann"), "Ann");
}
