//! HTML renderers for the dashboard pages.
//!
//! Every function here is pure: it takes display records and returns markup.
//! All interpolated text goes through [`escape`].

use dashgate::format::{format_currency, format_date, format_number, format_percent};
use dashgate::model::{
    Category, FilterState, Listing, PageRequest, ProductRow, SortOrder, User, UserRow,
};

#[path = "render/layout.rs"]
mod layout;
pub(super) use self::layout::*;
#[path = "render/login.rs"]
mod login;
pub(super) use self::login::{LoginView, login_page};
#[path = "render/tables.rs"]
mod tables;
pub(super) use self::tables::*;
#[path = "render/cards.rs"]
mod cards;
pub(super) use self::cards::*;
#[path = "render/charts.rs"]
mod charts;
pub(super) use self::charts::*;
#[path = "render/filter_bar.rs"]
mod filter_bar;
pub(super) use self::filter_bar::*;
#[path = "render/error.rs"]
mod error;
pub(super) use self::error::*;

pub(super) fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// `path?query`, or just `path` when the query is empty.
pub(super) fn href(path: &str, query: &str) -> String {
    if query.is_empty() {
        path.to_string()
    } else {
        format!("{}?{}", path, query)
    }
}

#[cfg(test)]
#[path = "../../tests/bin/dashgate_server/render_tests.rs"]
mod tests;
