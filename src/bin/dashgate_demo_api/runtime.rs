use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use dashgate::listen::bind_announced;

use super::*;

#[derive(Parser, Debug)]
#[command(name = "dashgate-demo-api")]
#[command(about = "Seeded stand-in for the DummyJSON API (development/tests)", long_about = None)]
struct Args {
    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:3001")]
    addr: SocketAddr,

    /// Write bound address to this file (dev/test convenience)
    #[arg(long)]
    addr_file: Option<PathBuf>,

    /// Answer `GET /products/categories` with 503
    #[arg(long)]
    fail_categories: bool,
}

pub(super) fn build_state(fail_categories: bool) -> Arc<DemoState> {
    Arc::new(DemoState {
        accounts: seed_accounts(),
        products: seed_products(),
        categories: seed_categories(),
        sessions: RwLock::new(HashMap::new()),
        fail_categories,
    })
}

pub(super) fn build_router(state: Arc<DemoState>) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/auth/login", post(login))
        .route("/auth/me", get(me))
        .route("/users", get(users))
        .route("/products", get(products))
        .route("/products/categories", get(categories))
        .with_state(state)
}

pub(super) async fn run() -> Result<()> {
    let args = Args::parse();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let app = build_router(build_state(args.fail_categories));
    let (listener, local_addr) = bind_announced(args.addr, args.addr_file.as_deref()).await?;
    tracing::info!(addr = %local_addr, fail_categories = args.fail_categories, "dashgate-demo-api listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await
        .context("server error")?;
    Ok(())
}
