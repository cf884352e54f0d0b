mod filter;
mod product;
mod user;

use serde::{Deserialize, Serialize};

pub use self::filter::{FilterBar, FilterState, SortOrder};
pub use self::product::{Category, LOW_STOCK_THRESHOLD, ProductRow, default_categories};
pub use self::user::{DEFAULT_ROLE, LoginPayload, User, UserRow, display_name};

/// Offset/limit window passed straight through to the upstream API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    #[serde(default = "default_limit")]
    pub limit: u64,

    #[serde(default)]
    pub skip: u64,
}

pub const DEFAULT_PAGE_LIMIT: u64 = 30;

fn default_limit() -> u64 {
    DEFAULT_PAGE_LIMIT
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            limit: DEFAULT_PAGE_LIMIT,
            skip: 0,
        }
    }
}

impl PageRequest {
    pub fn next(&self, total: u64) -> Option<PageRequest> {
        let skip = self.skip.checked_add(self.limit)?;
        (self.limit > 0 && skip < total).then_some(PageRequest {
            limit: self.limit,
            skip,
        })
    }

    pub fn previous(&self) -> Option<PageRequest> {
        (self.skip > 0).then(|| PageRequest {
            limit: self.limit,
            skip: self.skip.saturating_sub(self.limit),
        })
    }
}

/// One page of display rows plus the upstream's paging counters.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Listing<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub skip: u64,
    pub limit: u64,
}

impl<T> Listing<T> {
    pub fn map_items<U>(self, f: impl FnMut(T) -> U) -> Listing<U> {
        Listing {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            skip: self.skip,
            limit: self.limit,
        }
    }
}

#[cfg(test)]
#[path = "../tests/model/page_tests.rs"]
mod tests;
