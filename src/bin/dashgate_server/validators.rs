use std::collections::BTreeMap;

use axum::http::HeaderValue;
use serde::Deserialize;
use validator::{Validate, ValidationErrors};

use super::*;
use dashgate::upstream::Credentials;

pub(super) const MAX_PAGE_LIMIT: u64 = 100;

#[derive(Clone, Debug, Default, Deserialize, Validate)]
pub(crate) struct LoginForm {
    #[serde(default)]
    #[validate(length(min = 1, message = "Username is required"))]
    pub(crate) username: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Password is required"))]
    pub(crate) password: String,

    /// Page to return to after signing in.
    #[serde(default)]
    pub(crate) from: Option<String>,
}

impl LoginForm {
    /// Trims the username, then validates. Returns the first message per field.
    pub(crate) fn check(mut self) -> Result<Credentials, BTreeMap<String, String>> {
        self.username = self.username.trim().to_string();
        self.validate().map_err(|errs| field_messages(&errs))?;
        Ok(Credentials {
            username: self.username,
            password: self.password,
        })
    }
}

pub(crate) fn field_messages(errs: &ValidationErrors) -> BTreeMap<String, String> {
    errs.field_errors()
        .into_iter()
        .map(|(field, list)| {
            let message = list
                .first()
                .and_then(|e| e.message.as_ref())
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("{} is invalid", field));
            (field.to_string(), message)
        })
        .collect()
}

/// Only same-site absolute paths are honored as post-login destinations.
/// The result is always a valid `Location` header value.
pub(super) fn safe_return_path(from: Option<&str>) -> &str {
    match from {
        Some(path) if is_local_path(path) => {
            if path == dashgate::LOGIN_ROUTE {
                dashgate::LANDING_ROUTE
            } else {
                path
            }
        }
        _ => dashgate::LANDING_ROUTE,
    }
}

// Browsers drop tabs and newlines before resolving, so `/\t/host` means `//host`.
fn is_local_path(path: &str) -> bool {
    path.starts_with('/')
        && !path.starts_with("//")
        && !path.contains('\\')
        && !path.chars().any(char::is_control)
        && HeaderValue::from_str(path).is_ok()
}

pub(super) fn clamp_page(page: PageRequest) -> PageRequest {
    PageRequest {
        limit: page.limit.clamp(1, MAX_PAGE_LIMIT),
        skip: page.skip,
    }
}

#[cfg(test)]
#[path = "../../tests/bin/dashgate_server/validators_tests.rs"]
mod tests;
