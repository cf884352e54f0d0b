use serde::{Deserialize, Serialize};

use super::PageRequest;

pub const DEFAULT_SORT_BY: &str = "name";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

// Unknown values fall back to ascending rather than rejecting the query.
impl From<String> for SortOrder {
    fn from(value: String) -> Self {
        if value.trim().eq_ignore_ascii_case("desc") {
            SortOrder::Desc
        } else {
            SortOrder::Asc
        }
    }
}

/// Complete description of a list view's query.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterState {
    pub search: String,
    pub category: String,
    pub role: String,
    pub sort_by: String,
    pub sort_order: SortOrder,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: String::new(),
            role: String::new(),
            sort_by: DEFAULT_SORT_BY.to_string(),
            sort_order: SortOrder::Asc,
        }
    }
}

impl FilterState {
    /// Trims inputs and restores the default sort key when a form submits it blank.
    pub fn normalized(mut self) -> Self {
        self.search = self.search.trim().to_string();
        self.category = self.category.trim().to_string();
        self.role = self.role.trim().to_string();
        self.sort_by = self.sort_by.trim().to_string();
        if self.sort_by.is_empty() {
            self.sort_by = DEFAULT_SORT_BY.to_string();
        }
        self
    }

    pub fn is_default(&self) -> bool {
        *self == FilterState::default()
    }

    /// Sorting by the current key flips the order; a new key starts ascending.
    pub fn toggled_sort(&self, sort_by: &str) -> FilterState {
        let mut next = self.clone();
        if self.sort_by == sort_by {
            next.sort_order = self.sort_order.flipped();
        } else {
            next.sort_by = sort_by.to_string();
            next.sort_order = SortOrder::Asc;
        }
        next
    }

    pub fn to_query_string(&self, page: Option<PageRequest>) -> String {
        let mut pairs: Vec<(&str, String)> = Vec::new();
        if !self.search.is_empty() {
            pairs.push(("search", self.search.clone()));
        }
        if !self.category.is_empty() {
            pairs.push(("category", self.category.clone()));
        }
        if !self.role.is_empty() {
            pairs.push(("role", self.role.clone()));
        }
        pairs.push(("sortBy", self.sort_by.clone()));
        pairs.push(("sortOrder", self.sort_order.as_str().to_string()));
        if let Some(page) = page {
            pairs.push(("limit", page.limit.to_string()));
            pairs.push(("skip", page.skip.to_string()));
        }
        serde_urlencoded::to_string(&pairs).unwrap_or_default()
    }
}

/// Filter controls for a list view.
///
/// Every setter hands the complete, current [`FilterState`] to the change
/// callback. There is no debouncing: each keystroke fed through
/// [`FilterBar::set_search`] produces one callback.
pub struct FilterBar<F>
where
    F: FnMut(&FilterState),
{
    state: FilterState,
    on_change: F,
}

impl<F> FilterBar<F>
where
    F: FnMut(&FilterState),
{
    pub fn new(on_change: F) -> Self {
        Self::with_state(FilterState::default(), on_change)
    }

    pub fn with_state(state: FilterState, on_change: F) -> Self {
        Self { state, on_change }
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn set_search(&mut self, value: impl Into<String>) {
        self.state.search = value.into();
        self.emit();
    }

    pub fn set_category(&mut self, value: impl Into<String>) {
        self.state.category = value.into();
        self.emit();
    }

    pub fn set_role(&mut self, value: impl Into<String>) {
        self.state.role = value.into();
        self.emit();
    }

    pub fn set_sort_by(&mut self, value: impl Into<String>) {
        self.state.sort_by = value.into();
        self.emit();
    }

    pub fn set_sort_order(&mut self, order: SortOrder) {
        self.state.sort_order = order;
        self.emit();
    }

    pub fn clear(&mut self) {
        self.state = FilterState::default();
        self.emit();
    }

    pub fn into_state(self) -> FilterState {
        self.state
    }

    fn emit(&mut self) {
        (self.on_change)(&self.state);
    }
}

#[cfg(test)]
#[path = "../tests/model/filter_tests.rs"]
mod tests;
