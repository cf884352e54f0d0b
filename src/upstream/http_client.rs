use std::future::Future;

use super::*;

#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    #[error("invalid username or password")]
    InvalidCredentials,

    #[error("{label}: unauthorized")]
    Unauthorized { label: String },

    #[error("{label}: upstream returned HTTP {status}: {message}")]
    Status {
        label: String,
        status: u16,
        message: String,
    },

    #[error("{label}: {source}")]
    Transport {
        label: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{label}: unexpected response body: {source}")]
    Decode {
        label: String,
        #[source]
        source: reqwest::Error,
    },
}

impl UpstreamError {
    /// Transport failures and 5xx responses may succeed on a later attempt.
    pub fn is_retryable(&self) -> bool {
        match self {
            UpstreamError::Transport { .. } => true,
            UpstreamError::Status { status, .. } => *status >= 500,
            _ => false,
        }
    }
}

/// How many times an upstream call is attempted, and how long to wait between
/// attempts. The wait doubles after each failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RetryPolicy {
    pub attempts: u32,
    pub backoff: Duration,
}

impl RetryPolicy {
    /// A single attempt.
    pub fn none() -> Self {
        Self {
            attempts: 1,
            backoff: Duration::ZERO,
        }
    }

    pub fn new(attempts: u32, backoff: Duration) -> Self {
        Self {
            attempts: attempts.max(1),
            backoff,
        }
    }

    pub fn delay_before(&self, retry: u32) -> Duration {
        self.backoff.saturating_mul(1u32 << retry.min(16))
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::none()
    }
}

pub(crate) async fn with_retries<T, F, Fut>(
    policy: RetryPolicy,
    label: &str,
    mut f: F,
) -> Result<T, UpstreamError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, UpstreamError>>,
{
    let attempts = policy.attempts.max(1);
    let mut attempt = 0;
    loop {
        match f().await {
            Ok(v) => return Ok(v),
            Err(err) if err.is_retryable() && attempt + 1 < attempts => {
                let delay = policy.delay_before(attempt);
                tracing::warn!(
                    call = label,
                    attempt = attempt + 1,
                    delay_ms = delay.as_millis() as u64,
                    error = %err,
                    "upstream call failed, retrying"
                );
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
            Err(err) => return Err(err),
        }
    }
}

impl UpstreamClient {
    pub(super) fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    pub(super) async fn send(
        &self,
        req: reqwest::RequestBuilder,
        label: &str,
    ) -> Result<reqwest::Response, UpstreamError> {
        let resp = req.send().await.map_err(|source| UpstreamError::Transport {
            label: label.to_string(),
            source,
        })?;
        ensure_ok(resp, label).await
    }

    pub(super) async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        bearer: Option<&str>,
        label: &str,
    ) -> Result<T, UpstreamError> {
        with_retries(self.config.retry, label, move || async move {
            let mut req = self.client.get(self.url(path));
            if let Some(token) = bearer {
                req = req.bearer_auth(token);
            }
            let resp = self.send(req, label).await?;
            decode(resp, label).await
        })
        .await
    }
}

async fn ensure_ok(resp: reqwest::Response, label: &str) -> Result<reqwest::Response, UpstreamError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
        return Err(UpstreamError::Unauthorized {
            label: label.to_string(),
        });
    }
    let message = error_message(resp).await;
    Err(UpstreamError::Status {
        label: label.to_string(),
        status: status.as_u16(),
        message,
    })
}

/// Upstream errors look like `{"message": "..."}`; fall back to the status text.
pub(super) async fn error_message(resp: reqwest::Response) -> String {
    let reason = resp
        .status()
        .canonical_reason()
        .unwrap_or("error")
        .to_string();
    match resp.json::<serde_json::Value>().await {
        Ok(v) => v
            .get("message")
            .and_then(|m| m.as_str())
            .map(str::to_string)
            .unwrap_or(reason),
        Err(_) => reason,
    }
}

pub(super) async fn decode<T: serde::de::DeserializeOwned>(
    resp: reqwest::Response,
    label: &str,
) -> Result<T, UpstreamError> {
    resp.json::<T>().await.map_err(|source| UpstreamError::Decode {
        label: label.to_string(),
        source,
    })
}

#[cfg(test)]
#[path = "../tests/upstream/http_client_tests.rs"]
mod tests;
