use super::*;

/// The select box a list page offers next to the search field.
#[derive(Clone, Debug)]
pub(crate) struct FilterSelect {
    pub(crate) name: &'static str,
    pub(crate) label: &'static str,
    pub(crate) options: Vec<(String, String)>,
}

impl FilterSelect {
    pub(crate) fn categories(categories: &[Category]) -> Self {
        Self {
            name: "category",
            label: "All categories",
            options: categories
                .iter()
                .map(|c| (c.slug.clone(), c.name.clone()))
                .collect(),
        }
    }

    pub(crate) fn roles(roles: &[String]) -> Self {
        Self {
            name: "role",
            label: "All roles",
            options: roles.iter().map(|r| (r.clone(), r.clone())).collect(),
        }
    }

    fn selected<'a>(&self, state: &'a FilterState) -> &'a str {
        match self.name {
            "category" => &state.category,
            _ => &state.role,
        }
    }
}

/// GET form: each submit produces the complete filter state as query parameters.
pub(crate) fn filter_form(
    action: &str,
    state: &FilterState,
    select: &FilterSelect,
    sort_keys: &[&str],
) -> String {
    let selected = select.selected(state);
    let mut options = format!("<option value=\"\">{}</option>", escape(select.label));
    for (value, label) in &select.options {
        let sel = if value.eq_ignore_ascii_case(selected) { " selected" } else { "" };
        options.push_str(&format!(
            "<option value=\"{}\"{}>{}</option>",
            escape(value),
            sel,
            escape(label)
        ));
    }

    let mut sorts = String::new();
    for key in sort_keys {
        let sel = if state.sort_by == *key { " selected" } else { "" };
        sorts.push_str(&format!("<option value=\"{}\"{}>{}</option>", key, sel, key));
    }

    let order = |o: SortOrder| {
        let sel = if state.sort_order == o { " selected" } else { "" };
        format!("<option value=\"{}\"{}>{}</option>", o.as_str(), sel, o.as_str())
    };

    let clear = if state.is_default() {
        String::new()
    } else {
        format!(" <a class=\"clear\" href=\"{}\">Clear</a>", escape(action))
    };

    format!(
        "<form class=\"filter-bar\" method=\"get\" action=\"{action}\">\
<input type=\"search\" name=\"search\" placeholder=\"Search…\" value=\"{search}\">\
<select name=\"{select_name}\">{options}</select>\
<select name=\"sortBy\">{sorts}</select>\
<select name=\"sortOrder\">{asc}{desc}</select>\
<button type=\"submit\">Apply</button>{clear}</form>",
        action = escape(action),
        search = escape(&state.search),
        select_name = select.name,
        options = options,
        sorts = sorts,
        asc = order(SortOrder::Asc),
        desc = order(SortOrder::Desc),
        clear = clear,
    )
}

#[cfg(test)]
#[path = "../../../tests/bin/dashgate_server/render/filter_bar_tests.rs"]
mod tests;
