//! Server-rendered admin dashboard over a DummyJSON-shaped upstream API.
//!
//! The library holds everything shared between the binaries: the session gate,
//! the persisted auth store, the upstream client, filtering and formatting.

pub mod auth_store;
pub mod format;
pub mod listen;
pub mod listing;
pub mod model;
pub mod session;
pub mod upstream;

/// Route unauthenticated users are sent to.
pub const LOGIN_ROUTE: &str = "/login";

/// Route authenticated users land on.
pub const LANDING_ROUTE: &str = "/dashboard";

/// Short, log-safe fingerprint of a bearer token.
pub fn token_fingerprint(token: &str) -> String {
    let hex = blake3::hash(token.as_bytes()).to_hex();
    hex.as_str()[..12].to_string()
}
