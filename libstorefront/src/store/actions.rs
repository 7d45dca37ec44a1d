//! Actions for the cart store
//!
//! Every state transition is triggered by an action. An operation against
//! the backend produces one action per lifecycle phase; the reducer (see
//! `reducer.rs`) folds them into state.

use crate::api::CartPage;
use crate::model::Cart;

/// Where in an asynchronous operation's lifecycle an action falls
#[derive(Debug, Clone, PartialEq)]
pub enum Lifecycle<T> {
    /// The request was just issued
    Request,
    /// The request resolved with a payload
    Success(T),
    /// The request failed with an error message
    Failure(String),
}

/// Actions that trigger cart state transitions
///
/// The enum is closed: there is no unrecognized-action case to handle, the
/// type system rules it out.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// List carts (paged)
    FetchCartList(Lifecycle<CartPage>),

    /// Fetch a single cart
    FetchCart(Lifecycle<Cart>),

    /// Create a cart
    CreateCart(Lifecycle<Cart>),

    /// Update a cart
    UpdateCart(Lifecycle<Cart>),

    /// Delete a cart
    DeleteCart(Lifecycle<()>),

    /// Return the store to its initial state
    Reset,
}
