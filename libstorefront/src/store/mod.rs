//! Cart state store
//!
//! Ties the backend to the reducer:
//! - Actions: what can happen
//! - State: what is true right now
//! - Reducer: pure function (State, Action) -> State
//! - `CartStore`: dispatches lifecycle actions around each backend call
//!
//! The store tracks one request at a time per kind; a superseded in-flight
//! request's resolution still updates state (last write wins).

pub mod actions;
pub mod reducer;
pub mod state;

pub use actions::{Action, Lifecycle};
pub use reducer::reduce;
pub use state::CartState;

use tracing::warn;

use crate::api::{CartApi, CartPage};
use crate::error::Result;
use crate::model::Cart;

/// State store for the cart entity
///
/// Owns the current [`CartState`] and a backend. Each operation dispatches
/// the request action, performs one call, dispatches the success or failure
/// action, and hands the call's outcome back so callers can chain follow-up
/// work.
pub struct CartStore {
    state: CartState,
    api: Box<dyn CartApi>,
}

impl CartStore {
    /// Create a store over the given backend
    pub fn new(api: Box<dyn CartApi>) -> Self {
        Self {
            state: CartState::new(),
            api,
        }
    }

    /// The current state
    pub fn state(&self) -> &CartState {
        &self.state
    }

    /// Apply one action to the state through the reducer
    pub fn dispatch(&mut self, action: Action) {
        let state = std::mem::take(&mut self.state);
        self.state = reduce(state, action);
    }

    /// Fetch one page of carts and fold it into the entity list
    pub async fn get_entities(
        &mut self,
        page: u64,
        size: u64,
        sort: Option<&str>,
    ) -> Result<CartPage> {
        self.dispatch(Action::FetchCartList(Lifecycle::Request));
        match self.api.list(page, size, sort).await {
            Ok(fetched) => {
                self.dispatch(Action::FetchCartList(Lifecycle::Success(fetched.clone())));
                Ok(fetched)
            }
            Err(e) => {
                warn!(error = %e, "cart listing failed");
                self.dispatch(Action::FetchCartList(Lifecycle::Failure(e.to_string())));
                Err(e)
            }
        }
    }

    /// Fetch a single cart by id
    pub async fn get_entity(&mut self, id: i64) -> Result<Cart> {
        self.dispatch(Action::FetchCart(Lifecycle::Request));
        match self.api.get(id).await {
            Ok(cart) => {
                self.dispatch(Action::FetchCart(Lifecycle::Success(cart.clone())));
                Ok(cart)
            }
            Err(e) => {
                warn!(error = %e, id, "cart fetch failed");
                self.dispatch(Action::FetchCart(Lifecycle::Failure(e.to_string())));
                Err(e)
            }
        }
    }

    /// Create a cart from the given record
    ///
    /// The record is sanitized before submission; the server's copy becomes
    /// the store's current entity.
    pub async fn create_entity(&mut self, cart: &Cart) -> Result<Cart> {
        let payload = cart.sanitized();
        self.dispatch(Action::CreateCart(Lifecycle::Request));
        match self.api.create(&payload).await {
            Ok(created) => {
                self.dispatch(Action::CreateCart(Lifecycle::Success(created.clone())));
                Ok(created)
            }
            Err(e) => {
                warn!(error = %e, "cart create failed");
                self.dispatch(Action::CreateCart(Lifecycle::Failure(e.to_string())));
                Err(e)
            }
        }
    }

    /// Update a cart from the given record
    ///
    /// The record is sanitized before submission; the server's copy becomes
    /// the store's current entity.
    pub async fn update_entity(&mut self, cart: &Cart) -> Result<Cart> {
        let payload = cart.sanitized();
        self.dispatch(Action::UpdateCart(Lifecycle::Request));
        match self.api.update(&payload).await {
            Ok(updated) => {
                self.dispatch(Action::UpdateCart(Lifecycle::Success(updated.clone())));
                Ok(updated)
            }
            Err(e) => {
                warn!(error = %e, id = ?cart.id(), "cart update failed");
                self.dispatch(Action::UpdateCart(Lifecycle::Failure(e.to_string())));
                Err(e)
            }
        }
    }

    /// Delete a cart by id
    pub async fn delete_entity(&mut self, id: i64) -> Result<()> {
        self.dispatch(Action::DeleteCart(Lifecycle::Request));
        match self.api.delete(id).await {
            Ok(()) => {
                self.dispatch(Action::DeleteCart(Lifecycle::Success(())));
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, id, "cart delete failed");
                self.dispatch(Action::DeleteCart(Lifecycle::Failure(e.to_string())));
                Err(e)
            }
        }
    }

    /// Return the store to its initial state
    pub fn reset(&mut self) {
        self.dispatch(Action::Reset);
    }
}
