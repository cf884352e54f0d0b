use time::{Duration, OffsetDateTime};

use super::*;

pub(crate) const DEFAULT_TTL_MINS: u64 = 60;

#[derive(Clone, Debug)]
pub(crate) struct IssuedSession {
    pub(crate) user_id: u64,
    pub(crate) expires_at: OffsetDateTime,
}

impl IssuedSession {
    pub(crate) fn is_expired(&self, now: OffsetDateTime) -> bool {
        now >= self.expires_at
    }
}

pub(crate) fn hash_secret(secret: &str) -> String {
    blake3::hash(secret.as_bytes()).to_hex().to_string()
}

pub(crate) fn generate_token_secret() -> Result<String> {
    // 32 bytes of entropy, hex-encoded.
    let mut bytes = [0u8; 32];
    getrandom::getrandom(&mut bytes).map_err(|e| anyhow::anyhow!("getrandom: {:?}", e))?;
    let mut out = String::with_capacity(64);
    for b in &bytes {
        out.push_str(&format!("{:02x}", b));
    }
    Ok(out)
}

/// Account matching the username (case-insensitive) and password.
pub(crate) fn authenticate<'a>(
    accounts: &'a [Account],
    username: &str,
    password: &str,
) -> Option<&'a Account> {
    let hash = hash_secret(password);
    accounts
        .iter()
        .find(|a| a.user.username.eq_ignore_ascii_case(username.trim()))
        .filter(|a| a.password_hash == hash)
}

/// Issues an access token for `user_id`; only its hash is kept.
pub(crate) async fn issue_session(state: &DemoState, user_id: u64, ttl_mins: u64) -> Result<String> {
    let secret = generate_token_secret()?;
    let ttl = Duration::minutes(ttl_mins.clamp(1, 24 * 60) as i64);
    let session = IssuedSession {
        user_id,
        expires_at: OffsetDateTime::now_utc() + ttl,
    };
    state
        .sessions
        .write()
        .await
        .insert(hash_secret(&secret), session);
    Ok(secret)
}

/// User behind the request's bearer token, if it is known and unexpired.
pub(crate) async fn bearer_user(state: &DemoState, headers: &HeaderMap) -> Option<WireUser> {
    let token = headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")?
        .trim();

    let hash = hash_secret(token);
    let session = state.sessions.read().await.get(&hash).cloned()?;
    if session.is_expired(OffsetDateTime::now_utc()) {
        state.sessions.write().await.remove(&hash);
        return None;
    }
    state
        .accounts
        .iter()
        .find(|a| a.user.id == session.user_id)
        .map(|a| a.user.clone())
}

#[cfg(test)]
#[path = "../../tests/bin/dashgate_demo_api/identity_tests.rs"]
mod tests;
