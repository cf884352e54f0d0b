//! Development stand-in for the DummyJSON user/product API.
//!
//! Serves the handful of endpoints the dashboard calls, backed by a fixed
//! seed. Used by the integration tests and for local development without
//! network access.

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::Result;
use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use tokio::sync::RwLock;

use dashgate::upstream::{WireCategory, WireProduct, WireUser};

#[path = "dashgate_demo_api/seed.rs"]
mod seed;
use self::seed::*;
#[path = "dashgate_demo_api/identity.rs"]
mod identity;
use self::identity::*;
#[path = "dashgate_demo_api/handlers.rs"]
mod handlers;
use self::handlers::*;
#[path = "dashgate_demo_api/runtime.rs"]
mod runtime;

struct DemoState {
    accounts: Vec<Account>,
    products: Vec<WireProduct>,
    categories: Vec<WireCategory>,

    // token hash -> session
    sessions: RwLock<HashMap<String, IssuedSession>>,

    fail_categories: bool,
}

#[tokio::main]
async fn main() {
    if let Err(err) = runtime::run().await {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}
