use serde::{Deserialize, Serialize};

/// Products with fewer units than this are flagged as low stock.
pub const LOW_STOCK_THRESHOLD: u64 = 10;

/// Row of the products table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProductRow {
    pub id: u64,
    pub name: String,
    pub category: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,

    pub price: f64,

    #[serde(default)]
    pub discount_percentage: f64,

    #[serde(default)]
    pub rating: f64,

    #[serde(default)]
    pub stock: u64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl ProductRow {
    pub fn is_low_stock(&self) -> bool {
        self.stock < LOW_STOCK_THRESHOLD
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub slug: String,
    pub name: String,
}

impl Category {
    pub fn new(slug: &str, name: &str) -> Self {
        Self {
            slug: slug.to_string(),
            name: name.to_string(),
        }
    }
}

/// Used by the products view when the category endpoint is unavailable.
pub fn default_categories() -> Vec<Category> {
    vec![
        Category::new("beauty", "Beauty"),
        Category::new("fragrances", "Fragrances"),
        Category::new("furniture", "Furniture"),
        Category::new("groceries", "Groceries"),
    ]
}
