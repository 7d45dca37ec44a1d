//! Pure reducer function for cart state transitions
//!
//! The reducer is a total pure function `(CartState, Action) -> CartState`:
//! no I/O, no side effects, deterministic. All network activity happens in
//! the store before an action reaches this point.

use super::actions::{Action, Lifecycle};
use super::state::CartState;
use crate::pagination;

/// Apply one action to the current state, returning the next state
pub fn reduce(state: CartState, action: Action) -> CartState {
    match action {
        Action::FetchCartList(Lifecycle::Request) | Action::FetchCart(Lifecycle::Request) => {
            CartState {
                error_message: None,
                update_success: false,
                loading: true,
                ..state
            }
        }

        Action::CreateCart(Lifecycle::Request)
        | Action::UpdateCart(Lifecycle::Request)
        | Action::DeleteCart(Lifecycle::Request) => CartState {
            error_message: None,
            update_success: false,
            updating: true,
            ..state
        },

        Action::FetchCartList(Lifecycle::Failure(message))
        | Action::FetchCart(Lifecycle::Failure(message))
        | Action::CreateCart(Lifecycle::Failure(message))
        | Action::UpdateCart(Lifecycle::Failure(message))
        | Action::DeleteCart(Lifecycle::Failure(message)) => CartState {
            loading: false,
            updating: false,
            update_success: false,
            error_message: Some(message),
            ..state
        },

        Action::FetchCartList(Lifecycle::Success(page)) => {
            let entities = pagination::merge_page(state.entities.clone(), page.carts, &page.links);
            CartState {
                loading: false,
                links: page.links,
                total_items: page.total_items,
                entities,
                ..state
            }
        }

        Action::FetchCart(Lifecycle::Success(cart)) => CartState {
            loading: false,
            entity: cart,
            ..state
        },

        Action::CreateCart(Lifecycle::Success(cart))
        | Action::UpdateCart(Lifecycle::Success(cart)) => CartState {
            updating: false,
            update_success: true,
            entity: cart,
            ..state
        },

        Action::DeleteCart(Lifecycle::Success(())) => CartState {
            updating: false,
            update_success: true,
            entity: Default::default(),
            ..state
        },

        Action::Reset => CartState::default(),
    }
}
