use std::collections::BTreeMap;

use super::*;
use dashgate::auth_store::AuthState;

#[derive(Clone, Debug)]
pub(crate) struct LoginView<'a> {
    pub(crate) username: &'a str,
    pub(crate) from: Option<&'a str>,
    pub(crate) field_errors: &'a BTreeMap<String, String>,
    /// Form-level message, e.g. rejected credentials.
    pub(crate) alert: Option<&'a str>,
}

pub(crate) fn login_page(view: &LoginView<'_>) -> Result<String, serde_json::Error> {
    let alert = view
        .alert
        .map(|msg| format!("<p class=\"alert\" role=\"alert\">{}</p>", escape(msg)))
        .unwrap_or_default();

    let from = view
        .from
        .map(|from| {
            format!(
                "<input type=\"hidden\" name=\"from\" value=\"{}\">",
                escape(from)
            )
        })
        .unwrap_or_default();

    let body = format!(
        "<main style=\"max-width:24rem\"><h1>Sign in</h1>{alert}\
<form method=\"post\" action=\"{action}\" novalidate>{from}\
<p><label for=\"username\">Username</label><br>\
<input id=\"username\" name=\"username\" autocomplete=\"username\" value=\"{username}\">{username_error}</p>\
<p><label for=\"password\">Password</label><br>\
<input id=\"password\" name=\"password\" type=\"password\" autocomplete=\"current-password\">{password_error}</p>\
<p><button type=\"submit\">Sign in</button></p></form></main>{state}",
        alert = alert,
        action = dashgate::LOGIN_ROUTE,
        from = from,
        username = escape(view.username),
        username_error = field_error(view.field_errors, "username"),
        password_error = field_error(view.field_errors, "password"),
        state = auth_state_script(&AuthState::for_identity(None))?,
    );
    Ok(document("Sign in", &body))
}

fn field_error(errors: &BTreeMap<String, String>, field: &str) -> String {
    errors
        .get(field)
        .map(|msg| format!("<br><span class=\"field-error\">{}</span>", escape(msg)))
        .unwrap_or_default()
}

#[cfg(test)]
#[path = "../../../tests/bin/dashgate_server/render/login_tests.rs"]
mod tests;
