use super::*;
use dashgate::upstream::{WireCompany, WireProductMeta};

/// A seeded user with the hash of their password.
#[derive(Clone, Debug)]
pub(crate) struct Account {
    pub(crate) user: WireUser,
    pub(crate) password_hash: String,
}

// (username, password, first, last, role, company, age)
const USERS: &[(&str, &str, &str, &str, &str, &str, u32)] = &[
    ("emilys", "emilyspass", "Emily", "Johnson", "admin", "Dooley, Kozey and Cronin", 28),
    ("michaelw", "michaelwpass", "Michael", "Williams", "admin", "Spinka - Dickinson", 35),
    ("sophiab", "sophiabpass", "Sophia", "Brown", "admin", "Schiller - Zieme", 42),
    ("jamesd", "jamesdpass", "James", "Davis", "admin", "Pagac and Sons", 45),
    ("emmaj", "emmajpass", "Emma", "Miller", "admin", "Graham - Gulgowski", 30),
    ("oliviaw", "oliviawpass", "Olivia", "Wilson", "moderator", "Langosh - Gerlach", 22),
    ("alexanderj", "alexanderjpass", "Alexander", "Jones", "moderator", "Bruen LLC", 38),
    ("avat", "avatpass", "Ava", "Taylor", "moderator", "Koss - Kuhic", 27),
    ("ethanm", "ethanmpass", "Ethan", "Martinez", "user", "Hagenes Group", 33),
    ("isabellad", "isabelladpass", "Isabella", "Anderson", "user", "Runolfsdottir LLC", 31),
    ("liamg", "liamgpass", "Liam", "Garcia", "user", "Romaguera Inc", 29),
    ("miat", "miatpass", "Mia", "Rodriguez", "user", "Moen - Watsica", 24),
];

// (title, category, brand, price, discount, rating, stock)
const PRODUCTS: &[(&str, &str, &str, f64, f64, f64, u64)] = &[
    ("Essence Mascara Lash Princess", "beauty", "Essence", 9.99, 7.17, 4.94, 5),
    ("Eyeshadow Palette with Mirror", "beauty", "Glamour Beauty", 19.99, 5.5, 3.28, 44),
    ("Powder Canister", "beauty", "Velvet Touch", 14.99, 18.14, 3.82, 59),
    ("Red Lipstick", "beauty", "Chic Cosmetics", 12.99, 19.03, 2.51, 68),
    ("Red Nail Polish", "beauty", "Nail Couture", 8.99, 2.46, 3.91, 71),
    ("Calvin Klein CK One", "fragrances", "Calvin Klein", 49.99, 0.32, 4.85, 17),
    ("Chanel Coco Noir Eau De", "fragrances", "Chanel", 129.99, 18.64, 2.76, 41),
    ("Dior J'adore", "fragrances", "Dior", 89.99, 17.44, 3.31, 91),
    ("Dolce Shine Eau de", "fragrances", "Dolce & Gabbana", 69.99, 11.47, 2.68, 3),
    ("Gucci Bloom Eau de", "fragrances", "Gucci", 79.99, 8.9, 2.69, 93),
    ("Annibale Colombo Bed", "furniture", "Annibale Colombo", 1899.99, 8.57, 4.14, 47),
    ("Annibale Colombo Sofa", "furniture", "Annibale Colombo", 2499.99, 14.4, 3.08, 16),
    ("Bedside Table African Cherry", "furniture", "Furniture Co.", 299.99, 19.09, 2.48, 16),
    ("Knoll Saarinen Executive Conference Chair", "furniture", "Knoll", 499.99, 2.01, 4.11, 47),
    ("Wooden Bathroom Sink With Mirror", "furniture", "Bath Trends", 799.99, 8.8, 3.59, 95),
    ("Apple", "groceries", "", 1.99, 1.97, 4.19, 9),
    ("Beef Steak", "groceries", "", 12.99, 17.99, 4.47, 96),
    ("Cat Food", "groceries", "", 8.99, 9.57, 3.13, 13),
    ("Chicken Meat", "groceries", "", 9.99, 10.46, 3.19, 69),
    ("Cooking Oil", "groceries", "", 4.99, 18.65, 4.8, 22),
];

const CATEGORIES: &[(&str, &str)] = &[
    ("beauty", "Beauty"),
    ("fragrances", "Fragrances"),
    ("furniture", "Furniture"),
    ("groceries", "Groceries"),
];

pub(crate) fn seed_accounts() -> Vec<Account> {
    USERS
        .iter()
        .enumerate()
        .map(|(i, (username, password, first, last, role, company, age))| Account {
            user: WireUser {
                id: i as u64 + 1,
                username: username.to_string(),
                email: format!(
                    "{}.{}@x.dummyjson.com",
                    first.to_lowercase(),
                    last.to_lowercase()
                ),
                first_name: first.to_string(),
                last_name: last.to_string(),
                role: Some(role.to_string()),
                image: Some(format!("https://dummyjson.com/icon/{}/128", username)),
                phone: Some(format!("+1 555-01{:02}", i + 1)),
                age: Some(*age),
                company: Some(WireCompany {
                    name: Some(company.to_string()),
                }),
            },
            password_hash: hash_secret(password),
        })
        .collect()
}

pub(crate) fn seed_products() -> Vec<WireProduct> {
    PRODUCTS
        .iter()
        .enumerate()
        .map(|(i, (title, category, brand, price, discount, rating, stock))| WireProduct {
            id: i as u64 + 1,
            title: title.to_string(),
            description: format!("{} from the demo catalog.", title),
            category: category.to_string(),
            brand: (!brand.is_empty()).then(|| brand.to_string()),
            price: *price,
            discount_percentage: *discount,
            rating: *rating,
            stock: *stock,
            thumbnail: None,
            meta: Some(WireProductMeta {
                created_at: Some("2024-05-23T08:56:21Z".to_string()),
                updated_at: Some(format!("2024-05-{:02}T08:56:21Z", (i % 28) + 1)),
            }),
        })
        .collect()
}

pub(crate) fn seed_categories() -> Vec<WireCategory> {
    CATEGORIES
        .iter()
        .map(|(slug, name)| WireCategory::Detailed {
            slug: slug.to_string(),
            name: name.to_string(),
            url: Some(format!("https://dummyjson.com/products/category/{}", slug)),
        })
        .collect()
}
