use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use dashgate::listen::bind_announced;
use dashgate::session::DEFAULT_COOKIE_NAME;
use dashgate::upstream::DEFAULT_UPSTREAM_URL;

mod app;
mod shutdown;

use self::app::{build_app_router, build_state};
use self::shutdown::shutdown_signal;

#[derive(Parser, Debug)]
#[command(name = "dashgate-server")]
#[command(about = "Server-rendered admin dashboard with a cookie session gate", long_about = None)]
pub(super) struct Args {
    /// Address to listen on
    #[arg(long, env = "DASHGATE_ADDR", default_value = "127.0.0.1:3000")]
    pub(super) addr: SocketAddr,

    /// Write bound address to this file (dev/test convenience)
    #[arg(long)]
    pub(super) addr_file: Option<PathBuf>,

    /// Base URL of the user/product REST API
    #[arg(long, env = "DASHGATE_UPSTREAM_URL", default_value = DEFAULT_UPSTREAM_URL)]
    pub(super) upstream_url: String,

    /// Per-request upstream timeout
    #[arg(long, env = "DASHGATE_UPSTREAM_TIMEOUT_MS", default_value_t = 10_000)]
    pub(super) upstream_timeout_ms: u64,

    /// Attempts per upstream call; only transport errors and 5xx are retried
    #[arg(long, env = "DASHGATE_UPSTREAM_ATTEMPTS", default_value_t = 1)]
    pub(super) upstream_attempts: u32,

    /// Delay before the first retry; doubles on each further retry
    #[arg(long, env = "DASHGATE_UPSTREAM_BACKOFF_MS", default_value_t = 200)]
    pub(super) upstream_backoff_ms: u64,

    /// Session cookie name
    #[arg(long, env = "DASHGATE_COOKIE_NAME", default_value = DEFAULT_COOKIE_NAME)]
    pub(super) cookie_name: String,

    /// Mark the session cookie `Secure` (serve over HTTPS)
    #[arg(long)]
    pub(super) cookie_secure: bool,

    /// Session lifetime requested from the upstream and used as cookie Max-Age
    #[arg(long, env = "DASHGATE_SESSION_TTL_MINS", default_value_t = 60)]
    pub(super) session_ttl_mins: u64,

    /// Extra path globs the session gate skips (repeatable, must start with `/`)
    #[arg(long = "exclude", value_name = "GLOB")]
    pub(super) exclude: Vec<String>,
}

pub(super) async fn run() -> Result<()> {
    let args = Args::parse();
    init_tracing();

    let state = build_state(&args)?;
    let app = build_app_router(state);

    let (listener, local_addr) = bind_announced(args.addr, args.addr_file.as_deref()).await?;
    tracing::info!(addr = %local_addr, upstream = %args.upstream_url, "dashgate-server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("dashgate-server stopped");
    Ok(())
}

// RUST_LOG wins; otherwise info. Logs go to stderr so stdout stays clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
