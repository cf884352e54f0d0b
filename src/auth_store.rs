//! Client-side auth state with an explicit persistence boundary.
//!
//! The store is a rendering convenience: it remembers who signed in so a UI
//! can show it across restarts. It is never consulted for authorization; the
//! [`crate::session::SessionGate`] re-verifies the token on every protected
//! request.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::LOGIN_ROUTE;
use crate::model::{LoginPayload, User};

mod persistence;

pub use self::persistence::{FileStatePersistence, MemoryStatePersistence, StatePersistence};
pub(crate) use self::persistence::write_atomic;

const SNAPSHOT_VERSION: u32 = 1;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthState {
    #[serde(default)]
    pub user: Option<User>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    #[serde(default)]
    pub is_authenticated: bool,

    #[serde(default)]
    pub is_loading: bool,
}

impl AuthState {
    /// Copy without the token, safe to embed in rendered pages.
    pub fn projection(&self) -> AuthState {
        AuthState {
            token: None,
            ..self.clone()
        }
    }

    /// Projection for a server-verified identity.
    pub fn for_identity(user: Option<&User>) -> AuthState {
        AuthState {
            user: user.cloned(),
            token: None,
            is_authenticated: user.is_some(),
            is_loading: false,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct Snapshot {
    version: u32,
    state: AuthState,
}

pub fn encode_state(state: &AuthState) -> Result<Vec<u8>> {
    serde_json::to_vec_pretty(&Snapshot {
        version: SNAPSHOT_VERSION,
        state: state.clone(),
    })
    .context("serialize auth state")
}

pub fn decode_state(bytes: &[u8]) -> Result<AuthState> {
    let snapshot: Snapshot = serde_json::from_slice(bytes).context("parse auth state")?;
    if snapshot.version != SNAPSHOT_VERSION {
        anyhow::bail!("unsupported auth state version {}", snapshot.version);
    }
    Ok(snapshot.state)
}

pub struct AuthStore<P> {
    state: AuthState,
    persistence: P,
}

impl<P: StatePersistence> AuthStore<P> {
    /// Loads the persisted snapshot, or starts signed out when there is none.
    pub fn hydrate(persistence: P) -> Result<Self> {
        let state = match persistence.load()? {
            Some(bytes) => match decode_state(&bytes) {
                Ok(state) => state,
                Err(err) => {
                    tracing::warn!(error = %format!("{:#}", err), "discarding unreadable auth state");
                    AuthState::default()
                }
            },
            None => AuthState::default(),
        };
        Ok(Self { state, persistence })
    }

    pub fn state(&self) -> &AuthState {
        &self.state
    }

    pub fn projection(&self) -> AuthState {
        self.state.projection()
    }

    pub fn token(&self) -> Option<&str> {
        self.state.token.as_deref()
    }

    pub fn set_user(&mut self, payload: &LoginPayload) -> Result<()> {
        self.state = AuthState {
            user: Some(payload.to_user()),
            token: Some(payload.access_token.clone()),
            is_authenticated: true,
            is_loading: false,
        };
        self.persist()
    }

    pub fn set_loading(&mut self, loading: bool) -> Result<()> {
        self.state.is_loading = loading;
        self.persist()
    }

    pub fn clear_auth(&mut self) -> Result<()> {
        self.state = AuthState::default();
        self.persist()
    }

    /// Resets to the initial state, then clears the server-side session.
    ///
    /// Local state is reset and persisted before `clear_session` runs, so a
    /// failure there never leaves a signed-in projection behind. Returns the
    /// route to navigate to.
    pub fn logout<F>(&mut self, clear_session: F) -> Result<&'static str>
    where
        F: FnOnce(Option<&str>) -> Result<()>,
    {
        let token = self.state.token.take();
        self.state = AuthState::default();
        self.persistence.clear().context("clear persisted auth state")?;
        clear_session(token.as_deref()).context("clear session cookie")?;
        Ok(LOGIN_ROUTE)
    }

    fn persist(&self) -> Result<()> {
        let bytes = encode_state(&self.state)?;
        self.persistence.save(&bytes)
    }
}

#[cfg(test)]
#[path = "tests/auth_store_tests.rs"]
mod tests;
