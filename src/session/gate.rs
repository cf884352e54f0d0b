use std::future::Future;

use super::*;
use super::routes::{RouteClass, RouteMatcher};
use crate::{LANDING_ROUTE, LOGIN_ROUTE, token_fingerprint};

#[derive(Debug, thiserror::Error)]
pub enum VerifyError {
    #[error("session token rejected by identity source")]
    Rejected,

    #[error("malformed session token")]
    Malformed,

    #[error("identity source unavailable: {0}")]
    Unavailable(String),
}

/// Resolves a session token to the identity it belongs to.
pub trait SessionVerifier: Send + Sync {
    fn verify(&self, token: &str) -> impl Future<Output = Result<User, VerifyError>> + Send;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GateDecision {
    /// Render the route; carries the verified identity when there is one.
    Allow(Option<User>),
    Redirect {
        location: String,
        /// Set when a presented token failed verification.
        clear_cookie: bool,
    },
}

pub struct SessionGate<V> {
    matcher: RouteMatcher,
    verifier: V,
}

impl<V: SessionVerifier> SessionGate<V> {
    pub fn new(matcher: RouteMatcher, verifier: V) -> Self {
        Self { matcher, verifier }
    }

    pub fn matcher(&self) -> &RouteMatcher {
        &self.matcher
    }

    pub fn verifier(&self) -> &V {
        &self.verifier
    }

    /// Verifies `token`, failing closed: any error yields `None`.
    pub async fn resolve(&self, token: Option<&str>) -> Option<User> {
        let token = token?;
        let outcome = if is_well_formed(token) {
            self.verifier.verify(token).await
        } else {
            Err(VerifyError::Malformed)
        };
        match outcome {
            Ok(user) => Some(user),
            Err(err) => {
                tracing::info!(
                    token = %token_fingerprint(token),
                    error = %err,
                    "session verification failed"
                );
                None
            }
        }
    }

    /// `target` is the request path, optionally with its query string; the
    /// query only travels along in the login redirect.
    pub async fn evaluate(&self, target: &str, token: Option<&str>) -> GateDecision {
        let class = self.matcher.classify(target);
        if class == RouteClass::Excluded {
            return GateDecision::Allow(None);
        }

        let identity = self.resolve(token).await;
        match (class, identity) {
            (RouteClass::PublicOnly, Some(user)) => {
                tracing::debug!(path = target, user = %user.username, "signed-in user sent to landing");
                GateDecision::Redirect {
                    location: LANDING_ROUTE.to_string(),
                    clear_cookie: false,
                }
            }
            (RouteClass::Protected, None) => GateDecision::Redirect {
                location: login_location(target),
                clear_cookie: token.is_some(),
            },
            (_, identity) => GateDecision::Allow(identity),
        }
    }
}

/// Login route carrying `from=<target>` so sign-in can return to the page.
pub fn login_location(target: &str) -> String {
    match serde_urlencoded::to_string([("from", target)].as_slice()) {
        Ok(query) => format!("{}?{}", LOGIN_ROUTE, query),
        Err(_) => LOGIN_ROUTE.to_string(),
    }
}

// Tokens travel in a cookie and a header; anything outside visible ASCII is not ours.
fn is_well_formed(token: &str) -> bool {
    !token.is_empty() && token.len() <= 4096 && token.bytes().all(|b| b.is_ascii_graphic())
}

#[cfg(test)]
#[path = "../tests/session/gate_tests.rs"]
mod tests;
