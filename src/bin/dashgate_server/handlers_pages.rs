use super::*;
use dashgate::format::{format_currency, format_number};
use dashgate::listing::{
    PRODUCT_SORT_KEYS, USER_SORT_KEYS, count_by, distinct_roles, filter_products, filter_users,
};
use dashgate::model::{Listing, ProductRow, UserRow};
use super::render::{FilterSelect, NavItem, StatCard};

// The dashboard summarises one large window rather than paging.
const DASHBOARD_WINDOW: PageRequest = PageRequest {
    limit: 100,
    skip: 0,
};

pub(super) async fn root() -> Redirect {
    Redirect::temporary(dashgate::LANDING_ROUTE)
}

pub(super) async fn dashboard(
    State(state): State<Arc<AppState>>,
    Extension(viewer): Extension<Viewer>,
) -> Result<Html<String>, PageError> {
    let upstream = state.upstream();
    let token = viewer.token.as_deref();
    let (users, products) = tokio::join!(
        upstream.list_users(token, DASHBOARD_WINDOW),
        upstream.list_products(token, DASHBOARD_WINDOW),
    );
    let users = state.observe(users);
    let products = state.observe(products);

    let mut body = render::stat_cards(&summary_cards(users.as_ref().ok(), products.as_ref().ok()));

    body.push_str("<section class=\"charts\">");
    match &products {
        Ok(listing) => body.push_str(&render::bar_chart(
            "Products per category",
            &count_by(&listing.items, |p| p.category.as_str()),
        )),
        Err(err) => body.push_str(&render::inline_error("products", &err.to_string(), "/dashboard")),
    }
    match &users {
        Ok(listing) => body.push_str(&render::bar_chart(
            "Users per role",
            &count_by(&listing.items, |u| u.role.as_str()),
        )),
        Err(err) => body.push_str(&render::inline_error("users", &err.to_string(), "/dashboard")),
    }
    body.push_str("</section>");

    render::page("Dashboard", NavItem::Dashboard, viewer.user(), &body)
        .map(Html)
        .map_err(|err| PageError::render("dashboard", err))
}

fn summary_cards(
    users: Option<&Listing<UserRow>>,
    products: Option<&Listing<ProductRow>>,
) -> Vec<StatCard> {
    let unavailable = || "—".to_string();

    let average_price = products.and_then(|p| {
        (!p.items.is_empty())
            .then(|| p.items.iter().map(|row| row.price).sum::<f64>() / p.items.len() as f64)
    });
    let low_stock = products.map(|p| p.items.iter().filter(|row| row.is_low_stock()).count());

    vec![
        StatCard {
            label: "Total users",
            value: users.map(|u| format_number(u.total)).unwrap_or_else(unavailable),
            hint: None,
        },
        StatCard {
            label: "Total products",
            value: products
                .map(|p| format_number(p.total))
                .unwrap_or_else(unavailable),
            hint: None,
        },
        StatCard {
            label: "Average price",
            value: average_price.map(format_currency).unwrap_or_else(unavailable),
            hint: products.map(|p| format!("across {} products", p.items.len())),
        },
        StatCard {
            label: "Low stock",
            value: low_stock
                .map(|n| format_number(n as u64))
                .unwrap_or_else(unavailable),
            hint: Some(format!(
                "fewer than {} in stock",
                dashgate::model::LOW_STOCK_THRESHOLD
            )),
        },
    ]
}

pub(super) async fn users_page(
    State(state): State<Arc<AppState>>,
    Extension(viewer): Extension<Viewer>,
    Query(filter): Query<FilterState>,
    Query(page): Query<PageRequest>,
) -> Result<Html<String>, PageError> {
    let filter = filter.normalized();
    let page = clamp_page(page);
    let retry = render::href("/users", &filter.to_query_string(Some(page)));

    let listing = state.observe(
        state
            .upstream()
            .list_users(viewer.token.as_deref(), page)
            .await,
    );

    let body = match listing {
        Ok(listing) => {
            let select = FilterSelect::roles(&distinct_roles(&listing.items));
            let rows = filter_users(&listing.items, &filter);
            format!(
                "{}{}{}",
                render::filter_form("/users", &filter, &select, USER_SORT_KEYS),
                render::users_table("/users", &filter, &rows),
                render::pagination("/users", &filter, &listing),
            )
        }
        Err(err) => format!(
            "{}{}",
            render::filter_form("/users", &filter, &FilterSelect::roles(&[]), USER_SORT_KEYS),
            render::inline_error("users", &err.to_string(), &retry),
        ),
    };

    render::page("Users", NavItem::Users, viewer.user(), &body)
        .map(Html)
        .map_err(|err| PageError::render("users", err))
}

pub(super) async fn products_page(
    State(state): State<Arc<AppState>>,
    Extension(viewer): Extension<Viewer>,
    Query(filter): Query<FilterState>,
    Query(page): Query<PageRequest>,
) -> Result<Html<String>, PageError> {
    let filter = filter.normalized();
    let page = clamp_page(page);
    let retry = render::href("/products", &filter.to_query_string(Some(page)));
    let token = viewer.token.as_deref();

    let upstream = state.upstream();
    let (listing, categories) = tokio::join!(
        upstream.list_products(token, page),
        upstream.categories_or_default(token),
    );
    let listing = state.observe(listing);
    if categories.error.is_some() {
        state.metrics.upstream_error();
    }

    let select = FilterSelect::categories(&categories.categories);
    let mut body = render::filter_form("/products", &filter, &select, PRODUCT_SORT_KEYS);
    if categories.error.is_some() {
        body.push_str(
            "<p class=\"notice\" id=\"category-fallback\">Categories are unavailable; showing defaults.</p>",
        );
    }
    match listing {
        Ok(listing) => {
            let rows = filter_products(&listing.items, &filter);
            body.push_str(&render::products_table("/products", &filter, &rows));
            body.push_str(&render::pagination("/products", &filter, &listing));
        }
        Err(err) => body.push_str(&render::inline_error("products", &err.to_string(), &retry)),
    }

    render::page("Products", NavItem::Products, viewer.user(), &body)
        .map(Html)
        .map_err(|err| PageError::render("products", err))
}

#[cfg(test)]
#[path = "../../tests/bin/dashgate_server/handlers_pages_tests.rs"]
mod tests;
