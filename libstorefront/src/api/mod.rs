//! Backend abstraction and implementations
//!
//! This module provides a unified trait for the cart CRUD surface of the
//! backend. The HTTP implementation talks to a real server; the mock
//! implementation backs integration tests without network access.

use async_trait::async_trait;

use crate::error::Result;
use crate::model::Cart;
use crate::pagination::PageLinks;

pub mod http;
pub mod mock;

pub use http::HttpCartApi;
pub use mock::MockCartApi;

/// One page of a cart listing, with its pagination cursor and total count
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CartPage {
    pub carts: Vec<Cart>,
    pub links: PageLinks,
    pub total_items: u64,
}

/// Cart CRUD operations exposed by the backend
///
/// All methods perform exactly one request and surface its failure as-is;
/// retries and caching are the caller's concern.
#[async_trait]
pub trait CartApi: Send + Sync {
    /// Fetch one page of carts
    ///
    /// `page` and `size` are only transmitted when a `sort` order is
    /// supplied; the backend's defaults apply otherwise.
    async fn list(&self, page: u64, size: u64, sort: Option<&str>) -> Result<CartPage>;

    /// Fetch a single cart by id
    async fn get(&self, id: i64) -> Result<Cart>;

    /// Create a cart and return the server's copy
    async fn create(&self, cart: &Cart) -> Result<Cart>;

    /// Update a cart and return the server's copy
    async fn update(&self, cart: &Cart) -> Result<Cart>;

    /// Delete a cart by id
    async fn delete(&self, id: i64) -> Result<()>;
}
