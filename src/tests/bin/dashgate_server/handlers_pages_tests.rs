use super::*;

fn product(price: f64, stock: u64) -> ProductRow {
    ProductRow {
        id: 1,
        name: "Item".to_string(),
        category: "beauty".to_string(),
        brand: None,
        price,
        discount_percentage: 0.0,
        rating: 4.0,
        stock,
        thumbnail: None,
        updated_at: None,
    }
}

#[test]
fn summary_cards_compute_average_and_low_stock() {
    let products = Listing {
        items: vec![product(10.0, 3), product(20.0, 50), product(30.0, 9)],
        total: 1250,
        skip: 0,
        limit: 100,
    };
    let cards = summary_cards(None, Some(&products));

    assert_eq!(cards[0].label, "Total users");
    assert_eq!(cards[0].value, "—");
    assert_eq!(cards[1].value, "1.3K");
    assert_eq!(cards[2].value, "$20.00");
    assert_eq!(cards[3].value, "2");
}

#[test]
fn summary_cards_without_products_show_placeholders() {
    let cards = summary_cards(None, None);
    assert!(cards.iter().all(|c| c.value == "—"));
}
