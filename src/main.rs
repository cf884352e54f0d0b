use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt};

use dashgate::model::SortOrder;

mod cli_client;
mod cli_exec;

#[derive(Parser)]
#[command(name = "dashgate")]
#[command(about = "Command-line client for the dashgate admin dashboard", long_about = None)]
struct Cli {
    /// Dashboard server URL
    #[arg(long, global = true, env = "DASHGATE_URL", default_value = "http://127.0.0.1:3000")]
    url: String,

    /// Where the signed-in session is kept (defaults to ~/.dashgate/auth.json)
    #[arg(long, global = true, env = "DASHGATE_STATE_FILE")]
    state_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in and remember the session
    Login {
        #[arg(long)]
        username: String,
        #[arg(long, env = "DASHGATE_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Sign out and forget the session
    Logout,

    /// Show the signed-in user
    Whoami {
        /// Re-check the session against the server
        #[arg(long)]
        verify: bool,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// List users
    Users {
        #[command(flatten)]
        filter: FilterArgs,
        /// Only users with this role
        #[arg(long)]
        role: Option<String>,
    },

    /// List products
    Products {
        #[command(flatten)]
        filter: FilterArgs,
        /// Only products in this category (slug)
        #[arg(long)]
        category: Option<String>,
    },
}

#[derive(Args, Debug)]
struct FilterArgs {
    /// Case-insensitive search text
    #[arg(long)]
    search: Option<String>,
    #[arg(long)]
    sort_by: Option<String>,
    /// Sort descending
    #[arg(long)]
    desc: bool,
    #[arg(long, default_value_t = dashgate::model::DEFAULT_PAGE_LIMIT)]
    limit: u64,
    #[arg(long, default_value_t = 0)]
    skip: u64,
    /// Emit JSON
    #[arg(long)]
    json: bool,
}

impl FilterArgs {
    fn sort_order(&self) -> SortOrder {
        if self.desc {
            SortOrder::Desc
        } else {
            SortOrder::Asc
        }
    }
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let state_file = match cli.state_file {
        Some(path) => path,
        None => default_state_file()?,
    };
    cli_exec::handle_command(&cli.url, state_file, cli.command)
}

fn default_state_file() -> Result<PathBuf> {
    let home = std::env::var_os("HOME").context("HOME is not set (pass --state-file)")?;
    Ok(PathBuf::from(home).join(".dashgate").join("auth.json"))
}
