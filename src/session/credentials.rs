use axum::http::{HeaderMap, header};

pub const DEFAULT_COOKIE_NAME: &str = "dashgate_session";

/// How the session cookie is written and read.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CookieSettings {
    pub name: String,
    pub secure: bool,
    pub max_age_secs: u64,
}

impl Default for CookieSettings {
    fn default() -> Self {
        Self {
            name: DEFAULT_COOKIE_NAME.to_string(),
            secure: false,
            max_age_secs: 60 * 60,
        }
    }
}

impl CookieSettings {
    /// `Set-Cookie` value carrying a freshly issued token.
    pub fn issue(&self, token: &str) -> String {
        self.render(token, self.max_age_secs)
    }

    /// `Set-Cookie` value that removes the session cookie.
    pub fn clear(&self) -> String {
        self.render("", 0)
    }

    fn render(&self, value: &str, max_age: u64) -> String {
        let mut out = format!(
            "{}={}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
            self.name, value, max_age
        );
        if self.secure {
            out.push_str("; Secure");
        }
        out
    }

    /// Session token from the request's `Cookie` headers, if any.
    pub fn read<'a>(&self, headers: &'a HeaderMap) -> Option<&'a str> {
        headers
            .get_all(header::COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .flat_map(|v| v.split(';'))
            .filter_map(|pair| pair.trim().split_once('='))
            .find(|(name, _)| *name == self.name)
            .map(|(_, value)| value.trim().trim_matches('"'))
            .filter(|value| !value.is_empty())
    }
}

pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let token = value.strip_prefix("Bearer ")?.trim();
    (!token.is_empty()).then_some(token)
}

/// Cookie first (browser), then bearer header (CLI and other API clients).
pub fn request_token<'a>(settings: &CookieSettings, headers: &'a HeaderMap) -> Option<&'a str> {
    settings.read(headers).or_else(|| bearer_token(headers))
}

#[cfg(test)]
#[path = "../tests/session/credentials_tests.rs"]
mod tests;
