use anyhow::{Context, Result};

use dashgate::model::{Listing, LoginPayload, PageRequest, ProductRow, User, UserRow};
use dashgate::upstream::Credentials;

/// Blocking client for the dashboard server's JSON API.
pub(crate) struct DashboardClient {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl DashboardClient {
    pub(crate) fn new(base_url: &str) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("dashgate-cli/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("build reqwest client")?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn ensure_ok(
        &self,
        resp: reqwest::blocking::Response,
        label: &str,
    ) -> Result<reqwest::blocking::Response> {
        if resp.status() == reqwest::StatusCode::UNAUTHORIZED {
            anyhow::bail!("unauthorized (session invalid/expired; run `dashgate login`)");
        }
        if !resp.status().is_success() {
            let status = resp.status();
            let msg = resp
                .json::<serde_json::Value>()
                .ok()
                .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(str::to_string))
                .unwrap_or_else(|| status.to_string());
            anyhow::bail!("{}: {}", label, msg);
        }
        Ok(resp)
    }

    pub(crate) fn login(&self, credentials: &Credentials) -> Result<LoginPayload> {
        let resp = self
            .client
            .post(self.url("/api/auth/login"))
            .json(credentials)
            .send()
            .context("login")?;
        if resp.status() == reqwest::StatusCode::UNAUTHORIZED {
            anyhow::bail!("invalid username or password");
        }
        self.ensure_ok(resp, "login")?
            .json()
            .context("parse login response")
    }

    pub(crate) fn logout(&self, token: &str) -> Result<()> {
        let resp = self
            .client
            .post(self.url("/api/auth/logout"))
            .bearer_auth(token)
            .send()
            .context("logout")?;
        self.ensure_ok(resp, "logout")?;
        Ok(())
    }

    pub(crate) fn me(&self, token: &str) -> Result<User> {
        let resp = self
            .client
            .get(self.url("/api/auth/me"))
            .bearer_auth(token)
            .send()
            .context("whoami")?;
        self.ensure_ok(resp, "whoami")?
            .json()
            .context("parse whoami response")
    }

    pub(crate) fn users(&self, token: &str, page: PageRequest) -> Result<Listing<UserRow>> {
        let resp = self
            .client
            .get(self.url("/api/users"))
            .query(&page)
            .bearer_auth(token)
            .send()
            .context("list users")?;
        self.ensure_ok(resp, "list users")?
            .json()
            .context("parse users response")
    }

    pub(crate) fn products(&self, token: &str, page: PageRequest) -> Result<Listing<ProductRow>> {
        let resp = self
            .client
            .get(self.url("/api/products"))
            .query(&page)
            .bearer_auth(token)
            .send()
            .context("list products")?;
        self.ensure_ok(resp, "list products")?
            .json()
            .context("parse products response")
    }
}
