use super::*;
use crate::model::default_categories;

/// Categories for the product filter, plus the error that forced the fallback list.
#[derive(Clone, Debug)]
pub struct CategoryLoad {
    pub categories: Vec<Category>,
    pub error: Option<String>,
}

impl UpstreamClient {
    pub async fn list_users(
        &self,
        token: Option<&str>,
        page: PageRequest,
    ) -> Result<Listing<UserRow>, UpstreamError> {
        let path = format!("/users?limit={}&skip={}", page.limit, page.skip);
        let wire: UsersPage = self.get_json(&path, token, "list users").await?;
        Ok(Listing {
            items: wire.users,
            total: wire.total,
            skip: wire.skip,
            limit: wire.limit,
        }
        .map_items(WireUser::into_row))
    }

    pub async fn list_products(
        &self,
        token: Option<&str>,
        page: PageRequest,
    ) -> Result<Listing<ProductRow>, UpstreamError> {
        let path = format!("/products?limit={}&skip={}", page.limit, page.skip);
        let wire: ProductsPage = self.get_json(&path, token, "list products").await?;
        Ok(Listing {
            items: wire.products,
            total: wire.total,
            skip: wire.skip,
            limit: wire.limit,
        }
        .map_items(WireProduct::into_row))
    }

    pub async fn list_categories(&self, token: Option<&str>) -> Result<Vec<Category>, UpstreamError> {
        let wire: Vec<WireCategory> = self
            .get_json("/products/categories", token, "list categories")
            .await?;
        Ok(wire.into_iter().map(WireCategory::into_category).collect())
    }

    /// Like [`UpstreamClient::list_categories`], but never fails: on error the
    /// fixed default list is returned together with the error message.
    pub async fn categories_or_default(&self, token: Option<&str>) -> CategoryLoad {
        match self.list_categories(token).await {
            Ok(categories) => CategoryLoad {
                categories,
                error: None,
            },
            Err(err) => {
                tracing::warn!(error = %err, "category fetch failed, using defaults");
                CategoryLoad {
                    categories: default_categories(),
                    error: Some(err.to_string()),
                }
            }
        }
    }
}
