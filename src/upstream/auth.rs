use super::*;
use crate::session::{SessionVerifier, VerifyError};

impl UpstreamClient {
    /// Exchanges credentials for a token and profile.
    ///
    /// The upstream answers bad credentials with 400 or 401; both map to
    /// [`UpstreamError::InvalidCredentials`].
    pub async fn login(&self, credentials: &Credentials) -> Result<LoginPayload, UpstreamError> {
        let label = "login";
        let body = LoginRequest {
            username: credentials.username.trim(),
            password: &credentials.password,
            expires_in_mins: self.config.session_ttl_mins,
        };
        let body = &body;
        let result = with_retries(self.config.retry, label, move || async move {
            let req = self.client.post(self.url("/auth/login")).json(body);
            let resp = self.send(req, label).await?;
            http_client::decode::<LoginPayload>(resp, label).await
        })
        .await;

        match result {
            Err(UpstreamError::Unauthorized { .. }) => Err(UpstreamError::InvalidCredentials),
            Err(UpstreamError::Status { status: 400, .. }) => Err(UpstreamError::InvalidCredentials),
            other => other,
        }
    }

    /// Identity behind `token`, as reported by the upstream.
    pub async fn current_user(&self, token: &str) -> Result<User, UpstreamError> {
        let wire: WireUser = self.get_json("/auth/me", Some(token), "current user").await?;
        Ok(wire.into_session_user())
    }
}

impl SessionVerifier for UpstreamClient {
    async fn verify(&self, token: &str) -> Result<User, VerifyError> {
        self.current_user(token).await.map_err(|err| match err {
            UpstreamError::Unauthorized { .. } | UpstreamError::InvalidCredentials => {
                VerifyError::Rejected
            }
            other => VerifyError::Unavailable(other.to_string()),
        })
    }
}
