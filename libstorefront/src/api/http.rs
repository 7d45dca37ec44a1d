//! HTTP implementation of the cart backend
//!
//! Consumes the conventional CRUD surface:
//! `GET /api/carts`, `GET /api/carts/:id`, `POST /api/carts`,
//! `PUT /api/carts`, `DELETE /api/carts/:id`. Pagination metadata is read
//! from the `link` and `x-total-count` response headers.

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use tracing::debug;

use crate::api::{CartApi, CartPage};
use crate::config::ApiConfig;
use crate::error::{ApiError, Result};
use crate::model::Cart;
use crate::pagination::PageLinks;

const API_PATH: &str = "/api/carts";

pub struct HttpCartApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpCartApi {
    /// Create a client for the backend described by `config`
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Transport` if the underlying HTTP client cannot
    /// be constructed.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(ApiError::Transport)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn collection_url(&self) -> String {
        format!("{}{}", self.base_url, API_PATH)
    }

    fn entity_url(&self, id: i64) -> String {
        format!("{}{}/{}", self.base_url, API_PATH, id)
    }
}

/// Collapse a non-2xx response into `ApiError::Status`
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::Status {
        code: status.as_u16(),
        body,
    }
    .into())
}

async fn decode_cart(response: reqwest::Response) -> Result<Cart> {
    response
        .json::<Cart>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()).into())
}

#[async_trait]
impl CartApi for HttpCartApi {
    async fn list(&self, page: u64, size: u64, sort: Option<&str>) -> Result<CartPage> {
        let mut request = self.client.get(self.collection_url());
        if let Some(sort) = sort {
            request = request.query(&[
                ("page", page.to_string()),
                ("size", size.to_string()),
                ("sort", sort.to_string()),
            ]);
        }
        // Timestamp defeats intermediary caches on repeated listings
        let cache_buster = Utc::now().timestamp_millis();
        request = request.query(&[("cacheBuster", cache_buster.to_string())]);

        debug!(page, size, sort = ?sort, "listing carts");
        let response = request.send().await.map_err(ApiError::Transport)?;
        let response = check_status(response).await?;

        let links = response
            .headers()
            .get("link")
            .and_then(|value| value.to_str().ok())
            .map(PageLinks::parse)
            .unwrap_or_default();
        let total_count: Option<u64> = response
            .headers()
            .get("x-total-count")
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.parse().ok());

        let carts: Vec<Cart> = response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        let total_items = total_count.unwrap_or(carts.len() as u64);

        Ok(CartPage {
            carts,
            links,
            total_items,
        })
    }

    async fn get(&self, id: i64) -> Result<Cart> {
        debug!(id, "fetching cart");
        let response = self
            .client
            .get(self.entity_url(id))
            .send()
            .await
            .map_err(ApiError::Transport)?;
        decode_cart(check_status(response).await?).await
    }

    async fn create(&self, cart: &Cart) -> Result<Cart> {
        debug!("creating cart");
        let response = self
            .client
            .post(self.collection_url())
            .json(cart)
            .send()
            .await
            .map_err(ApiError::Transport)?;
        decode_cart(check_status(response).await?).await
    }

    async fn update(&self, cart: &Cart) -> Result<Cart> {
        debug!(id = ?cart.id(), "updating cart");
        let response = self
            .client
            .put(self.collection_url())
            .json(cart)
            .send()
            .await
            .map_err(ApiError::Transport)?;
        decode_cart(check_status(response).await?).await
    }

    async fn delete(&self, id: i64) -> Result<()> {
        debug!(id, "deleting cart");
        let response = self
            .client
            .delete(self.entity_url(id))
            .send()
            .await
            .map_err(ApiError::Transport)?;
        check_status(response).await?;
        Ok(())
    }
}
