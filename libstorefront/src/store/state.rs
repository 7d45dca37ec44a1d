//! Cart store state
//!
//! Immutable state value consumed by callers. All transitions happen
//! through the reducer (see `reducer.rs`).

use crate::model::Cart;
use crate::pagination::PageLinks;

/// State of the cart entity as last reported by the backend
///
/// `loading` is driven only by read operations, `updating` only by write
/// operations; both return to false when their operation completes, whether
/// it succeeded or failed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CartState {
    /// A list or single fetch is in flight
    pub loading: bool,

    /// Message of the most recent failure, cleared by any new request
    pub error_message: Option<String>,

    /// Carts accumulated across fetched pages
    pub entities: Vec<Cart>,

    /// The cart last fetched, created, or updated
    pub entity: Cart,

    /// Pagination cursor from the last list response
    pub links: PageLinks,

    /// A create, update, or delete is in flight
    pub updating: bool,

    /// Total cart count reported by the backend
    pub total_items: u64,

    /// True only immediately after a successful write
    pub update_success: bool,
}

impl CartState {
    /// Create the initial state
    pub fn new() -> Self {
        Self::default()
    }

    /// True while any request is in flight
    pub fn in_flight(&self) -> bool {
        self.loading || self.updating
    }
}
