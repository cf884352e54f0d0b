use super::*;

#[test]
fn wire_user_maps_to_row_with_company_and_default_role() {
    let wire: WireUser = serde_json::from_value(serde_json::json!({
        "id": 5,
        "username": "ava",
        "email": "ava@example.com",
        "firstName": "Ava",
        "lastName": "Taylor",
        "age": 31,
        "company": { "name": "Acme", "title": "CTO" }
    }))
    .expect("parse user");
    let row = wire.into_row();
    assert_eq!(row.name, "Ava Taylor");
    assert_eq!(row.role, "user");
    assert_eq!(row.company.as_deref(), Some("Acme"));
    assert_eq!(row.age, Some(31));
}

#[test]
fn wire_product_prefers_updated_timestamp_and_drops_blank_brand() {
    let wire: WireProduct = serde_json::from_value(serde_json::json!({
        "id": 1,
        "title": "Essence Mascara",
        "category": "beauty",
        "brand": " ",
        "price": 9.99,
        "discountPercentage": 7.17,
        "rating": 4.94,
        "stock": 5,
        "meta": { "createdAt": "2024-05-23T08:56:21Z", "updatedAt": "2024-05-24T08:56:21Z" }
    }))
    .expect("parse product");
    let row = wire.into_row();
    assert_eq!(row.name, "Essence Mascara");
    assert!(row.brand.is_none());
    assert_eq!(row.updated_at.as_deref(), Some("2024-05-24T08:56:21Z"));
    assert!(row.is_low_stock());
}

#[test]
fn categories_accept_objects_and_bare_slugs() {
    let wire: Vec<WireCategory> = serde_json::from_value(serde_json::json!([
        { "slug": "home-decoration", "name": "Home Decoration", "url": "https://x/home-decoration" },
        "mens-shirts"
    ]))
    .expect("parse categories");
    let categories: Vec<Category> = wire.into_iter().map(WireCategory::into_category).collect();
    assert_eq!(categories[0], Category::new("home-decoration", "Home Decoration"));
    assert_eq!(categories[1], Category::new("mens-shirts", "Mens Shirts"));
}
