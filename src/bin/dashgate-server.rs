use std::sync::Arc;

use axum::extract::{Extension, Query, State};
use axum::http::{StatusCode, header};
use axum::middleware::{self, Next};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use axum::{Form, Json, Router};

use dashgate::model::{FilterState, PageRequest, User};
use dashgate::session::{CookieSettings, SessionGate};
use dashgate::upstream::{UpstreamClient, UpstreamError};

#[path = "dashgate_server/types.rs"]
mod types;
use self::types::*;
#[path = "dashgate_server/http_error.rs"]
mod http_error;
use self::http_error::*;
#[path = "dashgate_server/metrics.rs"]
mod metrics;
use self::metrics::*;
#[path = "dashgate_server/render.rs"]
mod render;
#[path = "dashgate_server/validators.rs"]
mod validators;
use self::validators::*;
#[path = "dashgate_server/middleware.rs"]
mod gate_middleware;
use self::gate_middleware::*;
#[path = "dashgate_server/handlers_auth.rs"]
mod handlers_auth;
use self::handlers_auth::*;
#[path = "dashgate_server/handlers_pages.rs"]
mod handlers_pages;
use self::handlers_pages::*;
#[path = "dashgate_server/handlers_api.rs"]
mod handlers_api;
use self::handlers_api::*;
#[path = "dashgate_server/handlers_system.rs"]
mod handlers_system;
use self::handlers_system::*;
#[path = "dashgate_server/routes.rs"]
mod routes;
use self::routes::*;
#[path = "dashgate_server/runtime/mod.rs"]
mod runtime;

#[tokio::main]
async fn main() {
    if let Err(err) = runtime::run().await {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}
