//! Mock cart backend for testing
//!
//! An in-memory implementation of [`CartApi`] with configurable failures
//! and call counting, so store behavior can be exercised in integration
//! tests without a server. Available in all builds to support the `tests/`
//! directory.

use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::json;

use crate::api::{CartApi, CartPage};
use crate::error::{ApiError, Result};
use crate::model::Cart;
use crate::pagination::PageLinks;

#[derive(Debug, Default)]
struct CallCounts {
    list: usize,
    get: usize,
    create: usize,
    update: usize,
    delete: usize,
}

/// In-memory cart backend
pub struct MockCartApi {
    carts: Mutex<Vec<Cart>>,
    next_id: Mutex<i64>,
    fail_error: Option<String>,
    calls: Mutex<CallCounts>,
}

impl MockCartApi {
    /// Create an empty backend where every call succeeds
    pub fn new() -> Self {
        Self {
            carts: Mutex::new(Vec::new()),
            next_id: Mutex::new(1),
            fail_error: None,
            calls: Mutex::new(CallCounts::default()),
        }
    }

    /// Create a backend seeded with the given carts
    pub fn with_carts(carts: Vec<Cart>) -> Self {
        let max_id = carts.iter().filter_map(Cart::id).max().unwrap_or(0);
        let mock = Self::new();
        *mock.carts.lock().unwrap() = carts;
        *mock.next_id.lock().unwrap() = max_id + 1;
        mock
    }

    /// Create a backend where every call fails with the given message
    pub fn failing(error: &str) -> Self {
        Self {
            fail_error: Some(error.to_string()),
            ..Self::new()
        }
    }

    /// Number of list calls made so far
    pub fn list_call_count(&self) -> usize {
        self.calls.lock().unwrap().list
    }

    /// Number of create calls made so far
    pub fn create_call_count(&self) -> usize {
        self.calls.lock().unwrap().create
    }

    /// Number of delete calls made so far
    pub fn delete_call_count(&self) -> usize {
        self.calls.lock().unwrap().delete
    }

    /// Snapshot of the carts currently held
    pub fn stored_carts(&self) -> Vec<Cart> {
        self.carts.lock().unwrap().clone()
    }

    fn check_failure(&self) -> Result<()> {
        if let Some(error) = &self.fail_error {
            return Err(ApiError::Status {
                code: 500,
                body: error.clone(),
            }
            .into());
        }
        Ok(())
    }

    fn not_found(id: i64) -> ApiError {
        ApiError::Status {
            code: 404,
            body: format!("cart {} not found", id),
        }
    }
}

impl Default for MockCartApi {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CartApi for MockCartApi {
    async fn list(&self, page: u64, size: u64, sort: Option<&str>) -> Result<CartPage> {
        self.calls.lock().unwrap().list += 1;
        self.check_failure()?;

        let carts = self.carts.lock().unwrap();
        let total_items = carts.len() as u64;

        // Without a sort order the backend receives no paging parameters
        // and answers with the whole collection as a single page.
        if sort.is_none() {
            return Ok(CartPage {
                carts: carts.clone(),
                links: PageLinks::default(),
                total_items,
            });
        }

        let size = size.max(1);
        let last = if total_items == 0 {
            0
        } else {
            (total_items - 1) / size
        };
        let start = (page * size).min(total_items) as usize;
        let end = ((page + 1) * size).min(total_items) as usize;

        let links = PageLinks {
            first: Some(0),
            prev: page.checked_sub(1),
            next: if page < last { Some(page + 1) } else { None },
            last: Some(last),
        };

        Ok(CartPage {
            carts: carts[start..end].to_vec(),
            links,
            total_items,
        })
    }

    async fn get(&self, id: i64) -> Result<Cart> {
        self.calls.lock().unwrap().get += 1;
        self.check_failure()?;

        let carts = self.carts.lock().unwrap();
        carts
            .iter()
            .find(|cart| cart.id() == Some(id))
            .cloned()
            .ok_or_else(|| Self::not_found(id).into())
    }

    async fn create(&self, cart: &Cart) -> Result<Cart> {
        self.calls.lock().unwrap().create += 1;
        self.check_failure()?;

        let mut stored = cart.clone();
        if stored.id().is_none() {
            let mut next_id = self.next_id.lock().unwrap();
            stored.set("id", json!(*next_id));
            *next_id += 1;
        }
        self.carts.lock().unwrap().push(stored.clone());
        Ok(stored)
    }

    async fn update(&self, cart: &Cart) -> Result<Cart> {
        self.calls.lock().unwrap().update += 1;
        self.check_failure()?;

        let id = cart.id().ok_or_else(|| ApiError::Status {
            code: 400,
            body: "cart has no id".to_string(),
        })?;

        let mut carts = self.carts.lock().unwrap();
        let slot = carts
            .iter_mut()
            .find(|stored| stored.id() == Some(id))
            .ok_or_else(|| Self::not_found(id))?;
        *slot = cart.clone();
        Ok(cart.clone())
    }

    async fn delete(&self, id: i64) -> Result<()> {
        self.calls.lock().unwrap().delete += 1;
        self.check_failure()?;

        let mut carts = self.carts.lock().unwrap();
        let position = carts
            .iter()
            .position(|cart| cart.id() == Some(id))
            .ok_or_else(|| Self::not_found(id))?;
        carts.remove(position);
        Ok(())
    }
}
