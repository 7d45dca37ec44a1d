//! Storefront - client-side state management for a REST cart backend
//!
//! This library provides a small state store for the cart entity of a
//! conventional CRUD backend: an HTTP client layer, a tagged action
//! vocabulary, and a pure reducer folding the request lifecycle into an
//! immutable state value.

pub mod api;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod pagination;
pub mod store;

// Re-export commonly used types
pub use api::{CartApi, CartPage};
pub use config::Config;
pub use error::{Result, StorefrontError};
pub use model::Cart;
pub use pagination::PageLinks;
pub use store::{Action, CartState, CartStore, Lifecycle};
