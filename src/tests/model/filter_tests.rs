use super::*;

fn expected(search: &str) -> FilterState {
    FilterState {
        search: search.to_string(),
        category: String::new(),
        role: String::new(),
        sort_by: "name".to_string(),
        sort_order: SortOrder::Asc,
    }
}

#[test]
fn typing_into_search_emits_full_filter_per_keystroke() {
    let mut seen = Vec::new();
    {
        let mut bar = FilterBar::new(|state: &FilterState| seen.push(state.clone()));
        let mut typed = String::new();
        for ch in "test".chars() {
            typed.push(ch);
            bar.set_search(typed.clone());
        }
    }

    assert_eq!(seen.len(), 4);
    assert_eq!(seen[0], expected("t"));
    assert_eq!(seen.last(), Some(&expected("test")));
}

#[test]
fn clear_resets_and_still_notifies() {
    let mut seen = Vec::new();
    {
        let mut bar = FilterBar::new(|state: &FilterState| seen.push(state.clone()));
        bar.set_category("groceries");
        bar.set_role("admin");
        bar.set_sort_by("price");
        bar.set_sort_order(SortOrder::Desc);
        bar.clear();
        assert!(bar.state().is_default());
    }

    assert_eq!(seen.len(), 5);
    assert_eq!(seen[3].sort_order, SortOrder::Desc);
    assert_eq!(seen[4], expected(""));
}

#[test]
fn every_setter_reports_the_other_fields_too() {
    let mut last = None;
    {
        let mut bar = FilterBar::new(|state: &FilterState| last = Some(state.clone()));
        bar.set_search("phone");
        bar.set_category("smartphones");
    }
    let last = last.expect("callback invoked");
    assert_eq!(last.search, "phone");
    assert_eq!(last.category, "smartphones");
    assert_eq!(last.sort_by, "name");
}

#[test]
fn query_parsing_uses_defaults_and_tolerates_bad_order() {
    let state: FilterState =
        serde_urlencoded::from_str("search=%20ann%20&sortBy=&sortOrder=sideways").expect("parse");
    let state = state.normalized();
    assert_eq!(state, expected("ann"));

    let state: FilterState = serde_urlencoded::from_str("sortOrder=DESC&role=admin").expect("parse");
    assert_eq!(state.sort_order, SortOrder::Desc);
    assert_eq!(state.role, "admin");
}

#[test]
fn toggled_sort_flips_same_key_and_resets_new_key() {
    let state = FilterState::default();
    let flipped = state.toggled_sort("name");
    assert_eq!(flipped.sort_order, SortOrder::Desc);

    let other = flipped.toggled_sort("price");
    assert_eq!(other.sort_by, "price");
    assert_eq!(other.sort_order, SortOrder::Asc);
}

#[test]
fn query_string_round_trips_through_the_parser() {
    let state = FilterState {
        search: "a b&c".to_string(),
        category: "home-decoration".to_string(),
        ..FilterState::default()
    };
    let query = state.to_query_string(Some(PageRequest { limit: 10, skip: 20 }));
    assert!(query.contains("limit=10"));
    assert!(query.contains("skip=20"));

    let parsed: FilterState = serde_urlencoded::from_str(&query).expect("parse");
    assert_eq!(parsed, state);
}
