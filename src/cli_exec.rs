use std::path::PathBuf;

use anyhow::{Context, Result};

use dashgate::auth_store::{AuthStore, FileStatePersistence};
use dashgate::format::{format_currency, format_number, format_percent};
use dashgate::listing::{filter_products, filter_users};
use dashgate::model::{FilterBar, FilterState, Listing, PageRequest, ProductRow, UserRow};
use dashgate::upstream::Credentials;

use crate::cli_client::DashboardClient;
use crate::{Commands, FilterArgs};

type Store = AuthStore<FileStatePersistence>;

pub(crate) fn handle_command(url: &str, state_file: PathBuf, command: Commands) -> Result<()> {
    let mut store = AuthStore::hydrate(FileStatePersistence::new(state_file))
        .context("load saved session")?;
    let client = DashboardClient::new(url)?;

    match command {
        Commands::Login { username, password } => {
            login(&mut store, &client, Credentials { username, password })
        }
        Commands::Logout => {
            let route = store.logout(|token| match token {
                Some(token) => client.logout(token),
                None => Ok(()),
            })?;
            println!("Signed out (next: {})", route);
            Ok(())
        }
        Commands::Whoami { verify, json } => whoami(&mut store, &client, verify, json),
        Commands::Users { filter, role } => {
            let state = build_filter(&filter, |bar| {
                if let Some(role) = role {
                    bar.set_role(role);
                }
            });
            let token = require_token(&store)?;
            let listing = client.users(token, page(&filter))?;
            let rows = filter_users(&listing.items, &state);
            if filter.json {
                print_json(&listing_with(listing, rows))
            } else {
                for line in user_lines(&rows) {
                    println!("{}", line);
                }
                println!("{}", footer(rows.len(), &listing));
                Ok(())
            }
        }
        Commands::Products { filter, category } => {
            let state = build_filter(&filter, |bar| {
                if let Some(category) = category {
                    bar.set_category(category);
                }
            });
            let token = require_token(&store)?;
            let listing = client.products(token, page(&filter))?;
            let rows = filter_products(&listing.items, &state);
            if filter.json {
                print_json(&listing_with(listing, rows))
            } else {
                for line in product_lines(&rows) {
                    println!("{}", line);
                }
                println!("{}", footer(rows.len(), &listing));
                Ok(())
            }
        }
    }
}

fn login(store: &mut Store, client: &DashboardClient, credentials: Credentials) -> Result<()> {
    store.set_loading(true)?;
    match client.login(&credentials) {
        Ok(payload) => {
            store.set_user(&payload)?;
            let user = payload.to_user();
            println!("Signed in as {} ({})", user.name, user.role);
            Ok(())
        }
        Err(err) => {
            store.clear_auth()?;
            Err(err)
        }
    }
}

fn whoami(store: &mut Store, client: &DashboardClient, verify: bool, json: bool) -> Result<()> {
    if verify {
        let token = require_token(store)?.to_string();
        match client.me(&token) {
            Ok(user) => {
                tracing::debug!(user = %user.username, "session verified");
            }
            Err(err) => {
                store.clear_auth()?;
                return Err(err.context("session no longer valid; signed out locally"));
            }
        }
    }

    let projection = store.projection();
    if json {
        return print_json(&projection);
    }
    match &projection.user {
        Some(user) if projection.is_authenticated => {
            println!("{} <{}>", user.name, user.email);
            println!("username: {}", user.username);
            println!("role: {}", user.role);
        }
        _ => println!("Not signed in"),
    }
    Ok(())
}

fn require_token(store: &Store) -> Result<&str> {
    store
        .token()
        .context("not signed in (run `dashgate login --username ... --password ...`)")
}

/// Feeds CLI flags through a [`FilterBar`] so the CLI and pages share one filter model.
fn build_filter(
    args: &FilterArgs,
    extra: impl FnOnce(&mut FilterBar<fn(&FilterState)>),
) -> FilterState {
    let on_change: fn(&FilterState) = |state| tracing::debug!(?state, "filter changed");
    let mut bar = FilterBar::new(on_change);
    if let Some(search) = &args.search {
        bar.set_search(search.clone());
    }
    if let Some(sort_by) = &args.sort_by {
        bar.set_sort_by(sort_by.clone());
    }
    bar.set_sort_order(args.sort_order());
    extra(&mut bar);
    bar.into_state().normalized()
}

fn page(args: &FilterArgs) -> PageRequest {
    PageRequest {
        limit: args.limit,
        skip: args.skip,
    }
}

fn listing_with<T, U>(listing: Listing<T>, rows: Vec<U>) -> Listing<U> {
    Listing {
        items: rows,
        total: listing.total,
        skip: listing.skip,
        limit: listing.limit,
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(value).context("serialize json")?
    );
    Ok(())
}

pub(crate) fn user_lines(rows: &[UserRow]) -> Vec<String> {
    rows.iter()
        .map(|u| format!("{:>4}  {:<24} {:<10} {}", u.id, u.name, u.role, u.email))
        .collect()
}

pub(crate) fn product_lines(rows: &[ProductRow]) -> Vec<String> {
    rows.iter()
        .map(|p| {
            format!(
                "{:>4}  {:<40} {:<12} {:>10} {:>6} {:>6}{}",
                p.id,
                p.name,
                p.category,
                format_currency(p.price),
                format_percent(p.discount_percentage),
                format_number(p.stock),
                if p.is_low_stock() { "  low stock" } else { "" }
            )
        })
        .collect()
}

pub(crate) fn footer<T>(shown: usize, listing: &Listing<T>) -> String {
    format!(
        "{} shown ({} fetched, skip {}, {} total)",
        shown,
        listing.items.len(),
        listing.skip,
        format_number(listing.total)
    )
}

#[cfg(test)]
#[path = "tests/cli_exec_tests.rs"]
mod tests;
