use super::*;

#[test]
fn filter_form_reflects_current_state() {
    let state = FilterState {
        search: "phone".to_string(),
        category: "beauty".to_string(),
        sort_by: "price".to_string(),
        sort_order: SortOrder::Desc,
        ..FilterState::default()
    };
    let select = FilterSelect::categories(&[
        Category::new("beauty", "Beauty"),
        Category::new("groceries", "Groceries"),
    ]);
    let html = filter_form("/products", &state, &select, &["name", "price"]);

    assert!(html.contains("name=\"search\""));
    assert!(html.contains("value=\"phone\""));
    assert!(html.contains("<option value=\"beauty\" selected>Beauty</option>"));
    assert!(html.contains("<option value=\"groceries\">Groceries</option>"));
    assert!(html.contains("<option value=\"price\" selected>price</option>"));
    assert!(html.contains("<option value=\"desc\" selected>desc</option>"));
    assert!(html.contains("class=\"clear\""));
}

#[test]
fn default_state_has_no_clear_link() {
    let select = FilterSelect::roles(&["admin".to_string(), "user".to_string()]);
    let html = filter_form("/users", &FilterState::default(), &select, &["name"]);
    assert!(html.contains("<select name=\"role\">"));
    assert!(!html.contains("class=\"clear\""));
}
