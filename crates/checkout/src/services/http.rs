//! HTTP client for the inventory backend.
//!
//! # Endpoints
//!
//! - `GET  {base}/products/all`: list every product
//! - `PUT  {base}/products/update/{id}`: replace a product record
//!
//! Product records are camelCase JSON with decimal prices.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use cart::{Money, Product};
use common::ProductId;
use serde::{Deserialize, Deserializer, Serialize};

use super::catalog::CatalogService;
use super::inventory::{InventoryService, ProductUpdate};
use crate::error::CheckoutError;

/// Product record as exchanged with the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    pub id: i64,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub flavor: String,
    pub price: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub quantity_available: i64,
}

/// Reads an explicit `null` as the type's default. Unset backend columns
/// arrive as `null` rather than being omitted.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl From<ProductRecord> for Product {
    fn from(record: ProductRecord) -> Self {
        let on_hand = u32::try_from(record.quantity_available.max(0)).unwrap_or(u32::MAX);
        Product::new(
            record.id,
            record.name,
            record.description,
            record.flavor,
            Money::from_major(record.price),
            on_hand,
        )
    }
}

/// Body of an update request. The identity travels in the path.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct UpdateBody<'a> {
    quantity_available: i64,
    name: &'a str,
    description: &'a str,
    flavor: &'a str,
    price: f64,
}

impl<'a> From<&'a ProductUpdate> for UpdateBody<'a> {
    fn from(update: &'a ProductUpdate) -> Self {
        Self {
            quantity_available: update.quantity_available,
            name: &update.name,
            description: &update.description,
            flavor: &update.flavor,
            price: update.price.to_major(),
        }
    }
}

/// Inventory backend client.
///
/// Implements both [`CatalogService`] and [`InventoryService`].
#[derive(Clone)]
pub struct BackendClient {
    inner: Arc<BackendClientInner>,
}

struct BackendClientInner {
    client: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    /// Create a client for the backend at `base_url`.
    ///
    /// No request timeout is applied unless one is given.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client fails to build.
    pub fn new(
        base_url: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, CheckoutError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let base_url = base_url.into().trim_end_matches('/').to_string();

        Ok(Self {
            inner: Arc::new(BackendClientInner {
                client: builder.build()?,
                base_url,
            }),
        })
    }

    /// Returns the backend base URL.
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.inner.base_url)
    }

    /// Fetches the raw product records.
    #[tracing::instrument(skip(self))]
    pub async fn fetch_products(&self) -> Result<Vec<ProductRecord>, CheckoutError> {
        let response = self
            .inner
            .client
            .get(self.url("/products/all"))
            .send()
            .await?;

        let response = Self::check_status(response).await?;
        response
            .json()
            .await
            .map_err(|e| CheckoutError::Decode(format!("Failed to parse products: {e}")))
    }

    /// Sends one product update.
    #[tracing::instrument(skip(self, update), fields(product_id = %product_id))]
    pub async fn put_product(
        &self,
        product_id: ProductId,
        update: &ProductUpdate,
    ) -> Result<(), CheckoutError> {
        let response = self
            .inner
            .client
            .put(self.url(&format!("/products/update/{product_id}")))
            .json(&UpdateBody::from(update))
            .send()
            .await?;

        Self::check_status(response).await?;
        Ok(())
    }

    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, CheckoutError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        Err(CheckoutError::Backend {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl CatalogService for BackendClient {
    async fn list_products(&self) -> Result<Vec<Product>, CheckoutError> {
        let records = self.fetch_products().await?;
        Ok(records.into_iter().map(Product::from).collect())
    }
}

#[async_trait]
impl InventoryService for BackendClient {
    async fn update_product(&self, update: &ProductUpdate) -> Result<(), CheckoutError> {
        self.put_product(update.product_id, update).await
    }
}
