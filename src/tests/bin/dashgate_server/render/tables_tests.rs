use super::*;

fn row(id: u64, name: &str) -> UserRow {
    UserRow {
        id,
        name: name.to_string(),
        username: name.to_lowercase(),
        email: format!("{}@example.com", name.to_lowercase()),
        role: "user".to_string(),
        phone: None,
        company: Some("Acme & Sons".to_string()),
        age: None,
        image: None,
    }
}

#[test]
fn sort_header_flips_active_column() {
    let filter = FilterState::default();
    let html = users_table("/users", &filter, &[row(1, "Ada")]);
    assert!(html.contains("href=\"/users?sortBy=name&amp;sortOrder=desc\">Name ▲</a>"));
    assert!(html.contains("href=\"/users?sortBy=email&amp;sortOrder=asc\">Email</a>"));
    assert!(html.contains("Acme &amp; Sons"));
}

#[test]
fn empty_rows_render_message() {
    let html = users_table("/users", &FilterState::default(), &[]);
    assert!(html.contains("No users match"));
}

#[test]
fn low_stock_is_flagged() {
    let rows = vec![ProductRow {
        id: 1,
        name: "Mascara".to_string(),
        category: "beauty".to_string(),
        brand: None,
        price: 9.99,
        discount_percentage: 7.17,
        rating: 4.94,
        stock: 5,
        thumbnail: None,
        updated_at: Some("2024-05-23T08:56:21Z".to_string()),
    }];
    let html = products_table("/products", &FilterState::default(), &rows);
    assert!(html.contains("<td class=\"low-stock\">5</td>"));
    assert!(html.contains("$9.99"));
    assert!(html.contains("7.2%"));
    assert!(html.contains("May 23, 2024"));
}

#[test]
fn pagination_links_keep_filters() {
    let filter = FilterState {
        search: "a".to_string(),
        ..FilterState::default()
    };
    let listing = Listing {
        items: vec![row(31, "B"), row(32, "C")],
        total: 100,
        skip: 30,
        limit: 30,
    };
    let html = pagination("/users", &filter, &listing);
    assert!(html.contains("Showing 31–32 of 100"));
    assert!(html.contains("rel=\"prev\" href=\"/users?search=a&amp;sortBy=name&amp;sortOrder=asc&amp;limit=30&amp;skip=0\""));
    assert!(html.contains("rel=\"next\" href=\"/users?search=a&amp;sortBy=name&amp;sortOrder=asc&amp;limit=30&amp;skip=60\""));
}

#[test]
fn last_page_has_no_next_link() {
    let listing = Listing {
        items: vec![row(1, "A")],
        total: 1,
        skip: 0,
        limit: 30,
    };
    let html = pagination("/users", &FilterState::default(), &listing);
    assert!(!html.contains("rel=\"next\""));
    assert!(!html.contains("rel=\"prev\""));
}

#[test]
fn pagination_saturates_at_huge_offsets() {
    let listing = Listing {
        items: vec![row(1, "A")],
        total: 208,
        skip: u64::MAX,
        limit: 30,
    };
    let html = pagination("/users", &FilterState::default(), &listing);
    assert!(html.contains(&format!("Showing {}–{} of 208", u64::MAX, u64::MAX)));
    assert!(!html.contains("rel=\"next\""));
    assert!(html.contains("rel=\"prev\""));
}
