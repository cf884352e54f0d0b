//! Wire shapes of the upstream API and their mapping into display records.

use serde::{Deserialize, Serialize};

use crate::model::{Category, DEFAULT_ROLE, ProductRow, User, UserRow, display_name};

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireUser {
    pub id: u64,
    pub username: String,

    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub first_name: String,

    #[serde(default)]
    pub last_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<WireCompany>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WireCompany {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl WireUser {
    fn role_or_default(&self) -> String {
        self.role
            .clone()
            .filter(|r| !r.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ROLE.to_string())
    }

    pub fn into_session_user(self) -> User {
        User {
            id: self.id,
            name: display_name(&self.first_name, &self.last_name, &self.username),
            role: self.role_or_default(),
            username: self.username,
            email: self.email,
            image: self.image,
        }
    }

    pub fn into_row(self) -> UserRow {
        UserRow {
            id: self.id,
            name: display_name(&self.first_name, &self.last_name, &self.username),
            role: self.role_or_default(),
            username: self.username,
            email: self.email,
            phone: self.phone,
            company: self.company.and_then(|c| c.name),
            age: self.age,
            image: self.image,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireProduct {
    pub id: u64,
    pub title: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub category: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,

    #[serde(default)]
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
    pub meta: Option<WireProductMeta>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireProductMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl WireProduct {
    pub fn into_row(self) -> ProductRow {
        ProductRow {
            id: self.id,
            name: self.title,
            category: self.category,
            brand: self.brand.filter(|b| !b.trim().is_empty()),
            price: self.price,
            discount_percentage: self.discount_percentage,
            rating: self.rating,
            stock: self.stock,
            thumbnail: self.thumbnail,
            updated_at: self.meta.and_then(|m| m.updated_at.or(m.created_at)),
        }
    }
}

/// Older deployments list categories as bare slugs, newer ones as objects.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WireCategory {
    Detailed {
        slug: String,
        name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        url: Option<String>,
    },
    Slug(String),
}

impl WireCategory {
    pub fn into_category(self) -> Category {
        match self {
            WireCategory::Detailed { slug, name, .. } => Category { slug, name },
            WireCategory::Slug(slug) => Category {
                name: title_case(&slug),
                slug,
            },
        }
    }
}

fn title_case(slug: &str) -> String {
    slug.split(['-', '_'])
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[derive(Debug, Deserialize)]
pub(super) struct UsersPage {
    pub(super) users: Vec<WireUser>,

    #[serde(default)]
    pub(super) total: u64,

    #[serde(default)]
    pub(super) skip: u64,

    #[serde(default)]
    pub(super) limit: u64,
}

#[derive(Debug, Deserialize)]
pub(super) struct ProductsPage {
    pub(super) products: Vec<WireProduct>,

    #[serde(default)]
    pub(super) total: u64,

    #[serde(default)]
    pub(super) skip: u64,

    #[serde(default)]
    pub(super) limit: u64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct LoginRequest<'a> {
    pub(super) username: &'a str,
    pub(super) password: &'a str,
    pub(super) expires_in_mins: u64,
}

#[cfg(test)]
#[path = "../tests/upstream/types_tests.rs"]
mod tests;
