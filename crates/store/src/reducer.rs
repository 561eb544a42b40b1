//! The pure reducer.
//!
//! `reduce` is the only way state changes: it consumes the previous state
//! and an [`Action`] and returns the next state, with no I/O and no ambient
//! clock (token validation takes `now` in the action). Cart and profile
//! mutations require an active session and fail with
//! [`StoreError::NoActiveSession`] otherwise; every other action always
//! succeeds.

use shopcart_core::{CartLine, Customer, RequestStatus};

use crate::action::Action;
use crate::error::StoreError;
use crate::state::{ProductCache, SessionState};
use crate::token;

/// Apply one action to the state.
///
/// # Errors
///
/// Returns [`StoreError::NoActiveSession`] when a cart or profile action is
/// applied while signed out. The caller keeps its state in that case.
#[allow(clippy::too_many_lines)]
pub fn reduce(state: SessionState, action: Action) -> Result<SessionState, StoreError> {
    match action {
        // --- auth lifecycle ---------------------------------------------------
        Action::AuthRequest => Ok(SessionState {
            status: RequestStatus::Loading,
            ..state
        }),
        Action::AuthSuccess(user) => Ok(SessionState {
            current_role: Some(user.role),
            current_token: user.token.clone(),
            // Invariant: never logged in without a token.
            is_logged_in: user.token.is_some(),
            current_user: Some(*user),
            status: RequestStatus::Success,
            response: None,
            error: None,
            ..state
        }),
        Action::AuthFailed(message) => Ok(SessionState {
            status: RequestStatus::Failed,
            response: Some(message),
            error: None,
            is_logged_in: false,
            ..state
        }),
        Action::AuthError(message) => Ok(SessionState {
            status: RequestStatus::Error,
            error: Some(message),
            response: None,
            is_logged_in: false,
            ..state
        }),
        Action::Logout => Ok(SessionState::default()),
        Action::ValidateToken { now } => {
            let live = state
                .current_token
                .as_deref()
                .is_some_and(|t| !token::expired(t, now));
            if live {
                Ok(SessionState {
                    is_logged_in: true,
                    ..state
                })
            } else {
                Ok(SessionState::default())
            }
        }
        Action::UpdateCurrentUser(user) => Ok(SessionState {
            current_role: Some(user.role),
            current_token: user.token.clone(),
            // Invariant: never logged in without a token.
            is_logged_in: state.is_logged_in && user.token.is_some(),
            current_user: Some(*user),
            ..state
        }),
        Action::UpdateShipping(shipping) => with_session(state, |user| {
            user.shipping_data = Some(shipping);
        }),

        // --- cart -------------------------------------------------------------
        Action::AddToCart(product) => with_session(state, |user| {
            match user
                .cart_details
                .iter_mut()
                .find(|line| line.product_id() == &product.id)
            {
                Some(line) => line.quantity += 1,
                None => user.cart_details.push(CartLine::new(*product)),
            }
        }),
        Action::RemoveFromCart(product_id) => with_session(state, |user| {
            if let Some(index) = user
                .cart_details
                .iter()
                .position(|line| line.product_id() == &product_id)
            {
                let last_unit = user
                    .cart_details
                    .get(index)
                    .is_none_or(|line| line.quantity <= 1);
                if last_unit {
                    user.cart_details.remove(index);
                } else if let Some(line) = user.cart_details.get_mut(index) {
                    line.quantity -= 1;
                }
            }
        }),
        Action::RemoveSpecificProduct(product_id) => with_session(state, |user| {
            user.cart_details
                .retain(|line| line.product_id() != &product_id);
        }),
        Action::RemoveAllFromCart => with_session(state, |user| {
            user.cart_details.clear();
        }),
        Action::FetchCartLineDetail(product_id) => {
            let user = state
                .current_user
                .as_ref()
                .ok_or(StoreError::NoActiveSession)?;
            let found = user
                .cart_details
                .iter()
                .find(|line| line.product_id() == &product_id)
                .cloned();
            Ok(SessionState {
                product_details_cart: found,
                ..state
            })
        }

        // --- generic request lifecycle ---------------------------------------
        Action::GetRequest => Ok(SessionState {
            loading: true,
            ..state
        }),
        Action::UnderControl => Ok(SessionState {
            status: RequestStatus::Idle,
            response: None,
            ..state
        }),
        Action::StuffAdded => Ok(SessionState {
            status: RequestStatus::Added,
            response: None,
            error: None,
            ..state
        }),
        Action::StuffUpdated => Ok(SessionState {
            status: RequestStatus::Updated,
            response: None,
            error: None,
            ..state
        }),
        Action::UpdateFailed(message) => Ok(SessionState {
            status: RequestStatus::Failed,
            response_review: Some(message),
            error: None,
            ..state
        }),
        Action::GetDeleteSuccess => Ok(SessionState {
            status: RequestStatus::Deleted,
            loading: false,
            response: None,
            error: None,
            ..state
        }),
        Action::GetFailed(message) => Ok(SessionState {
            status: RequestStatus::Failed,
            response: Some(message),
            loading: false,
            error: None,
            ..state
        }),
        Action::GetError(message) => Ok(SessionState {
            status: RequestStatus::Error,
            error: Some(message),
            loading: false,
            ..state
        }),

        // --- product cache ----------------------------------------------------
        Action::ProductsFetched(products) => Ok(fetch_done(state, |cache| {
            cache.product_data = products;
            cache.response_products = None;
        })),
        Action::ProductsFailed(message) => Ok(fetch_failed(state, |cache| {
            cache.response_products = Some(message);
        })),
        Action::SellerProductsFetched(products) => Ok(fetch_done(state, |cache| {
            cache.seller_product_data = products;
            cache.response_seller_products = None;
        })),
        Action::SellerProductsFailed(message) => Ok(fetch_failed(state, |cache| {
            cache.response_seller_products = Some(message);
        })),
        Action::SpecificProductsFetched(products) => Ok(fetch_done(state, |cache| {
            cache.specific_product_data = products;
            cache.response_specific_products = None;
        })),
        Action::SpecificProductsFailed(message) => Ok(fetch_failed(state, |cache| {
            cache.response_specific_products = Some(message);
        })),
        Action::ProductDetailFetched(product) => Ok(fetch_done(state, |cache| {
            cache.product_details = Some(*product);
            cache.response_details = None;
        })),
        Action::ProductDetailFailed(message) => Ok(fetch_failed(state, |cache| {
            cache.response_details = Some(message);
        })),
        Action::CustomersListFetched(customers) => Ok(fetch_done(state, |cache| {
            cache.customers_list = customers;
            cache.response_customers_list = None;
        })),
        Action::CustomersListFailed(message) => Ok(fetch_failed(state, |cache| {
            cache.response_customers_list = Some(message);
        })),
        Action::SearchResults(products) => Ok(fetch_done(state, |cache| {
            cache.filtered_products = products;
            cache.response_search = None;
        })),
        Action::SearchFailed(message) => Ok(fetch_failed(state, |cache| {
            cache.response_search = Some(message);
        })),
    }
}

/// Run a mutation against the signed-in customer record.
fn with_session(
    mut state: SessionState,
    f: impl FnOnce(&mut Customer),
) -> Result<SessionState, StoreError> {
    let user = state
        .current_user
        .as_mut()
        .ok_or(StoreError::NoActiveSession)?;
    f(user);
    Ok(state)
}

/// A fetch came back: loading ends, any stale transport error clears, and
/// the category replaces its slice wholesale.
fn fetch_done(mut state: SessionState, f: impl FnOnce(&mut ProductCache)) -> SessionState {
    state.loading = false;
    state.error = None;
    f(&mut state.cache);
    state
}

/// A fetch was rejected: same as [`fetch_done`] but the rejection is a
/// surfaced domain failure, so the status flips too. Only the category's
/// own failure field is written.
fn fetch_failed(mut state: SessionState, f: impl FnOnce(&mut ProductCache)) -> SessionState {
    state.status = RequestStatus::Failed;
    state.loading = false;
    state.error = None;
    f(&mut state.cache);
    state
}
