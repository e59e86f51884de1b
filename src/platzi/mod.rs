mod client;
mod error;
mod resource;

pub use error::PlatziError;
pub use resource::*;

use client::Client;
use log::*;
use reqwest::Method;

/// Responsible for asynchronous interaction with the Platzi Fake Store API
/// including decoding of response data into explicitly-defined types.
///
/// Every operation makes a single attempt: no retry, no backoff, no timeout.
/// Failures never escape as panics; they are normalized into [`PlatziError`].
///
pub struct Platzi {
    client: Client,
}

impl Platzi {
    /// Returns a new instance for the given API base URL.
    ///
    pub fn new(base_url: &str) -> Platzi {
        debug!("Initializing store API client for {}...", base_url);
        Platzi {
            client: Client::new(base_url),
        }
    }

    /// Returns the full product collection in server response order.
    ///
    pub async fn products(&self) -> Result<Vec<Product>, PlatziError> {
        debug!("Requesting product collection...");
        let products: Vec<Product> = self.client.get("products").await?;
        debug!("Retrieved {} products", products.len());
        Ok(products)
    }

    /// Returns the full category collection in server response order.
    ///
    pub async fn categories(&self) -> Result<Vec<Category>, PlatziError> {
        debug!("Requesting category collection...");
        let categories: Vec<Category> = self.client.get("categories").await?;
        debug!("Retrieved {} categories", categories.len());
        Ok(categories)
    }

    /// Returns the full user collection in server response order.
    ///
    pub async fn users(&self) -> Result<Vec<User>, PlatziError> {
        debug!("Requesting user collection...");
        let users: Vec<User> = self.client.get("users").await?;
        debug!("Retrieved {} users", users.len());
        Ok(users)
    }

    /// Create a product from the given draft. Returns the created product
    /// with its server-assigned id.
    ///
    pub async fn create_product(&self, draft: &ProductDraft) -> Result<Product, PlatziError> {
        debug!("Creating product '{}'...", draft.title);
        let body = serde_json::to_value(draft).map_err(PlatziError::Decode)?;
        self.client.call(Method::POST, "products", Some(body)).await
    }

    /// Update the identified product with the given partial fields. Returns
    /// the updated product as the server sees it.
    ///
    pub async fn update_product(
        &self,
        id: i64,
        patch: &ProductPatch,
    ) -> Result<Product, PlatziError> {
        debug!("Updating product {}...", id);
        let body = serde_json::to_value(patch).map_err(PlatziError::Decode)?;
        self.client
            .call(Method::PUT, &format!("products/{}", id), Some(body))
            .await
    }

    /// Delete the identified product. Returns the same id on success; the
    /// response body is discarded.
    ///
    pub async fn delete_product(&self, id: i64) -> Result<i64, PlatziError> {
        debug!("Deleting product {}...", id);
        self.client
            .call_discard_body(Method::DELETE, &format!("products/{}", id))
            .await?;
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::{Fake, Faker};
    use httpmock::MockServer;
    use serde_json::json;

    #[tokio::test]
    async fn products_success() -> Result<(), PlatziError> {
        let products: [Product; 2] = [Faker.fake(), Faker.fake()];

        let server = MockServer::start();
        let mock = server
            .mock_async(|when, then| {
                when.method("GET").path("/products");
                then.status(200)
                    .json_body(serde_json::to_value(&products).unwrap());
            })
            .await;

        let platzi = Platzi::new(&server.base_url());
        let fetched = platzi.products().await?;
        mock.assert_async().await;
        assert_eq!(fetched, products);
        Ok(())
    }

    #[tokio::test]
    async fn products_server_error() {
        let server = MockServer::start();
        let mock = server
            .mock_async(|when, then| {
                when.method("GET").path("/products");
                then.status(500);
            })
            .await;

        let platzi = Platzi::new(&server.base_url());
        let result = platzi.products().await;
        mock.assert_async().await;
        assert!(matches!(result, Err(PlatziError::Status { status: 500 })));
    }

    #[tokio::test]
    async fn products_malformed_payload() {
        let server = MockServer::start();
        let mock = server
            .mock_async(|when, then| {
                when.method("GET").path("/products");
                then.status(200)
                    .json_body(json!([{ "id": "not-a-number", "nope": true }]));
            })
            .await;

        let platzi = Platzi::new(&server.base_url());
        let result = platzi.products().await;
        mock.assert_async().await;
        assert!(matches!(result, Err(PlatziError::Decode(_))));
    }

    #[tokio::test]
    async fn products_transport_error() {
        // Nothing is listening on this port
        let platzi = Platzi::new("http://127.0.0.1:1");
        let result = platzi.products().await;
        assert!(matches!(result, Err(PlatziError::Http(_))));
    }

    #[tokio::test]
    async fn categories_success() -> Result<(), PlatziError> {
        let categories: [Category; 3] = Faker.fake();

        let server = MockServer::start();
        let mock = server
            .mock_async(|when, then| {
                when.method("GET").path("/categories");
                then.status(200)
                    .json_body(serde_json::to_value(&categories).unwrap());
            })
            .await;

        let platzi = Platzi::new(&server.base_url());
        let fetched = platzi.categories().await?;
        mock.assert_async().await;
        assert_eq!(fetched, categories);
        Ok(())
    }

    #[tokio::test]
    async fn users_success() -> Result<(), PlatziError> {
        let users: [User; 2] = Faker.fake();

        let server = MockServer::start();
        let mock = server
            .mock_async(|when, then| {
                when.method("GET").path("/users");
                then.status(200)
                    .json_body(serde_json::to_value(&users).unwrap());
            })
            .await;

        let platzi = Platzi::new(&server.base_url());
        let fetched = platzi.users().await?;
        mock.assert_async().await;
        assert_eq!(fetched, users);
        Ok(())
    }

    #[tokio::test]
    async fn create_product_success() -> Result<(), PlatziError> {
        let created: Product = Faker.fake();
        let draft = ProductDraft {
            title: created.title.clone(),
            price: created.price,
            description: created.description.clone(),
            category_id: created.category.id,
            images: created.images.clone(),
        };

        let server = MockServer::start();
        let mock = server
            .mock_async(|when, then| {
                when.method("POST")
                    .path("/products")
                    .header("content-type", "application/json")
                    .json_body_partial(
                        json!({ "title": draft.title, "categoryId": draft.category_id })
                            .to_string(),
                    );
                then.status(201)
                    .json_body(serde_json::to_value(&created).unwrap());
            })
            .await;

        let platzi = Platzi::new(&server.base_url());
        let product = platzi.create_product(&draft).await?;
        mock.assert_async().await;
        assert_eq!(product, created);
        Ok(())
    }

    #[tokio::test]
    async fn update_product_success() -> Result<(), PlatziError> {
        let updated: Product = Faker.fake();
        let patch = ProductPatch {
            title: Some(updated.title.clone()),
            ..ProductPatch::default()
        };

        let server = MockServer::start();
        let mock = server
            .mock_async(|when, then| {
                when.method("PUT")
                    .path(format!("/products/{}", updated.id))
                    .json_body(json!({ "title": updated.title }));
                then.status(200)
                    .json_body(serde_json::to_value(&updated).unwrap());
            })
            .await;

        let platzi = Platzi::new(&server.base_url());
        let product = platzi.update_product(updated.id, &patch).await?;
        mock.assert_async().await;
        assert_eq!(product, updated);
        Ok(())
    }

    #[tokio::test]
    async fn delete_product_returns_id_and_discards_body() -> Result<(), PlatziError> {
        let server = MockServer::start();
        let mock = server
            .mock_async(|when, then| {
                when.method("DELETE").path("/products/42");
                then.status(200).json_body(json!(true));
            })
            .await;

        let platzi = Platzi::new(&server.base_url());
        let id = platzi.delete_product(42).await?;
        mock.assert_async().await;
        assert_eq!(id, 42);
        Ok(())
    }

    #[tokio::test]
    async fn delete_product_not_found() {
        let server = MockServer::start();
        let mock = server
            .mock_async(|when, then| {
                when.method("DELETE").path("/products/42");
                then.status(404);
            })
            .await;

        let platzi = Platzi::new(&server.base_url());
        let result = platzi.delete_product(42).await;
        mock.assert_async().await;
        assert!(matches!(result, Err(PlatziError::Status { status: 404 })));
    }
}
