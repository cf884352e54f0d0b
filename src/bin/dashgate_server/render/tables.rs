use super::*;

/// Column header that re-sorts the listing; the active column shows its direction.
fn sort_header(path: &str, filter: &FilterState, key: &str, label: &str) -> String {
    let target = href(path, &filter.toggled_sort(key).to_query_string(None));
    let marker = if filter.sort_by == key {
        match filter.sort_order {
            SortOrder::Asc => " ▲",
            SortOrder::Desc => " ▼",
        }
    } else {
        ""
    };
    format!(
        "<th><a href=\"{}\">{}{}</a></th>",
        escape(&target),
        escape(label),
        marker
    )
}

pub(crate) fn users_table(path: &str, filter: &FilterState, rows: &[UserRow]) -> String {
    if rows.is_empty() {
        return "<p class=\"empty\">No users match the current filters.</p>".to_string();
    }

    let mut out = String::from("<table id=\"users\"><thead><tr>");
    out.push_str(&sort_header(path, filter, "id", "ID"));
    out.push_str(&sort_header(path, filter, "name", "Name"));
    out.push_str(&sort_header(path, filter, "email", "Email"));
    out.push_str(&sort_header(path, filter, "role", "Role"));
    out.push_str("<th>Company</th><th>Phone</th></tr></thead><tbody>");
    for row in rows {
        out.push_str(&format!(
            "<tr><td>{}</td><td>{}<br><small>@{}</small></td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            row.id,
            escape(&row.name),
            escape(&row.username),
            escape(&row.email),
            escape(&row.role),
            escape(row.company.as_deref().unwrap_or("—")),
            escape(row.phone.as_deref().unwrap_or("—")),
        ));
    }
    out.push_str("</tbody></table>");
    out
}

pub(crate) fn products_table(path: &str, filter: &FilterState, rows: &[ProductRow]) -> String {
    if rows.is_empty() {
        return "<p class=\"empty\">No products match the current filters.</p>".to_string();
    }

    let mut out = String::from("<table id=\"products\"><thead><tr>");
    out.push_str(&sort_header(path, filter, "name", "Product"));
    out.push_str(&sort_header(path, filter, "category", "Category"));
    out.push_str(&sort_header(path, filter, "price", "Price"));
    out.push_str("<th>Discount</th>");
    out.push_str(&sort_header(path, filter, "rating", "Rating"));
    out.push_str(&sort_header(path, filter, "stock", "Stock"));
    out.push_str("<th>Updated</th></tr></thead><tbody>");
    for row in rows {
        let stock_class = if row.is_low_stock() { " class=\"low-stock\"" } else { "" };
        out.push_str(&format!(
            "<tr><td>{}{}</td><td>{}</td><td>{}</td><td>{}</td><td>{:.1}</td><td{}>{}</td><td>{}</td></tr>",
            escape(&row.name),
            row.brand
                .as_deref()
                .map(|b| format!("<br><small>{}</small>", escape(b)))
                .unwrap_or_default(),
            escape(&row.category),
            format_currency(row.price),
            format_percent(row.discount_percentage),
            row.rating,
            stock_class,
            format_number(row.stock),
            row.updated_at
                .as_deref()
                .map(|ts| escape(&format_date(ts)))
                .unwrap_or_else(|| "—".to_string()),
        ));
    }
    out.push_str("</tbody></table>");
    out
}

/// "Showing a–b of n" plus previous/next links that keep the filters.
pub(crate) fn pagination<T>(path: &str, filter: &FilterState, listing: &Listing<T>) -> String {
    let window = PageRequest {
        limit: listing.limit,
        skip: listing.skip,
    };
    let first = if listing.items.is_empty() {
        0
    } else {
        listing.skip.saturating_add(1)
    };
    let last = listing.skip.saturating_add(listing.items.len() as u64);

    let mut out = format!(
        "<nav class=\"pagination\"><span>Showing {}–{} of {}</span>",
        first,
        last,
        format_number(listing.total)
    );
    if let Some(prev) = window.previous() {
        let target = href(path, &filter.to_query_string(Some(prev)));
        out.push_str(&format!(" <a rel=\"prev\" href=\"{}\">Previous</a>", escape(&target)));
    }
    if let Some(next) = window.next(listing.total) {
        let target = href(path, &filter.to_query_string(Some(next)));
        out.push_str(&format!(" <a rel=\"next\" href=\"{}\">Next</a>", escape(&target)));
    }
    out.push_str("</nav>");
    out
}

#[cfg(test)]
#[path = "../../../tests/bin/dashgate_server/render/tables_tests.rs"]
mod tests;
