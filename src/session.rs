//! Server-side session gate.
//!
//! The gate is the only authority on identity: it resolves the session token
//! carried by the request (cookie, or bearer header for API clients) against a
//! [`SessionVerifier`] and decides whether the request may proceed. Client-side
//! state such as the [`crate::auth_store::AuthStore`] never feeds into it.

use crate::model::User;

mod credentials;
mod gate;
mod routes;

pub use self::credentials::{CookieSettings, DEFAULT_COOKIE_NAME, bearer_token, request_token};
pub use self::gate::{GateDecision, SessionGate, SessionVerifier, VerifyError, login_location};
pub use self::routes::{RouteClass, RouteConfigError, RouteMatcher, RoutePatterns, normalize_path};
