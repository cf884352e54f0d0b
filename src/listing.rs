//! Applies a [`FilterState`] to table rows.
//!
//! Search is a case-insensitive substring match; `category` and `role` are
//! case-insensitive equality filters and are ignored when empty. Unknown sort
//! keys fall back to sorting by name.

use std::cmp::Ordering;

use crate::model::{FilterState, ProductRow, SortOrder, UserRow};

pub const USER_SORT_KEYS: &[&str] = &["name", "email", "role", "id"];
pub const PRODUCT_SORT_KEYS: &[&str] = &["name", "price", "stock", "rating", "category"];

pub fn filter_users(rows: &[UserRow], filter: &FilterState) -> Vec<UserRow> {
    let needle = filter.search.to_lowercase();
    let mut out: Vec<UserRow> = rows
        .iter()
        .filter(|u| {
            needle.is_empty()
                || contains_folded(&u.name, &needle)
                || contains_folded(&u.email, &needle)
                || contains_folded(&u.username, &needle)
        })
        .filter(|u| filter.role.is_empty() || u.role.eq_ignore_ascii_case(&filter.role))
        .cloned()
        .collect();

    out.sort_by(|a, b| {
        let ord = match filter.sort_by.as_str() {
            "email" => cmp_folded(&a.email, &b.email),
            "role" => cmp_folded(&a.role, &b.role).then_with(|| cmp_folded(&a.name, &b.name)),
            "id" => a.id.cmp(&b.id),
            _ => cmp_folded(&a.name, &b.name),
        };
        directed(ord, filter.sort_order)
    });
    out
}

pub fn filter_products(rows: &[ProductRow], filter: &FilterState) -> Vec<ProductRow> {
    let needle = filter.search.to_lowercase();
    let mut out: Vec<ProductRow> = rows
        .iter()
        .filter(|p| {
            needle.is_empty()
                || contains_folded(&p.name, &needle)
                || p.brand.as_deref().is_some_and(|b| contains_folded(b, &needle))
                || contains_folded(&p.category, &needle)
        })
        .filter(|p| filter.category.is_empty() || p.category.eq_ignore_ascii_case(&filter.category))
        .cloned()
        .collect();

    out.sort_by(|a, b| {
        let ord = match filter.sort_by.as_str() {
            "price" => a.price.total_cmp(&b.price),
            "stock" => a.stock.cmp(&b.stock),
            "rating" => a.rating.total_cmp(&b.rating),
            "category" => {
                cmp_folded(&a.category, &b.category).then_with(|| cmp_folded(&a.name, &b.name))
            }
            _ => cmp_folded(&a.name, &b.name),
        };
        directed(ord, filter.sort_order)
    });
    out
}

/// Distinct roles present in `rows`, sorted, for the role filter options.
pub fn distinct_roles(rows: &[UserRow]) -> Vec<String> {
    let mut roles: Vec<String> = rows.iter().map(|u| u.role.to_lowercase()).collect();
    roles.sort();
    roles.dedup();
    roles
}

/// `(label, count)` pairs sorted by count descending, then label.
pub fn count_by<T>(rows: &[T], key: impl Fn(&T) -> &str) -> Vec<(String, u64)> {
    let mut counts: std::collections::BTreeMap<String, u64> = std::collections::BTreeMap::new();
    for row in rows {
        *counts.entry(key(row).to_string()).or_default() += 1;
    }
    let mut out: Vec<(String, u64)> = counts.into_iter().collect();
    out.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    out
}

fn contains_folded(haystack: &str, folded_needle: &str) -> bool {
    haystack.to_lowercase().contains(folded_needle)
}

fn cmp_folded(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

fn directed(ord: Ordering, order: SortOrder) -> Ordering {
    match order {
        SortOrder::Asc => ord,
        SortOrder::Desc => ord.reverse(),
    }
}

#[cfg(test)]
#[path = "tests/listing_tests.rs"]
mod tests;
