//! Named mutations accepted by the container.

use chrono::{DateTime, Utc};
use shopcart_core::{Customer, CustomerSummary, Product, ProductId, ShippingData};

/// Every mutation the container understands.
///
/// Fetch results arrive as plain values: the HTTP layer that produced them
/// is outside this crate, and the reducer only consumes the final shapes.
/// Failure payloads are the API's error message for that category.
#[derive(Debug, Clone)]
pub enum Action {
    // -------------------------------------------------------------------------
    // Auth lifecycle
    // -------------------------------------------------------------------------
    /// An auth request went out.
    AuthRequest,
    /// Login/registration succeeded; the record replaces the session wholesale.
    AuthSuccess(Box<Customer>),
    /// The API rejected the credentials (domain failure).
    AuthFailed(String),
    /// The auth request itself failed (transport error).
    AuthError(String),
    /// Clear session, cache, and all derived state.
    Logout,
    /// Re-check the held token's expiry claim against `now`.
    ValidateToken {
        now: DateTime<Utc>,
    },
    /// Replace the account record after a profile edit.
    UpdateCurrentUser(Box<Customer>),
    /// Save a shipping address on the account record.
    UpdateShipping(ShippingData),

    // -------------------------------------------------------------------------
    // Cart
    // -------------------------------------------------------------------------
    /// Add one unit of a product; repeat adds bump the existing line.
    AddToCart(Box<Product>),
    /// Remove one unit; drops the line at quantity 1, no-op when absent.
    RemoveFromCart(ProductId),
    /// Drop the matching line outright, whatever its quantity.
    RemoveSpecificProduct(ProductId),
    /// Empty the cart.
    RemoveAllFromCart,
    /// Copy the matching cart line into the transient detail field.
    FetchCartLineDetail(ProductId),

    // -------------------------------------------------------------------------
    // Generic request lifecycle
    // -------------------------------------------------------------------------
    /// A list fetch went out.
    GetRequest,
    /// Acknowledge a handled response; back to idle.
    UnderControl,
    /// A create call was acknowledged.
    StuffAdded,
    /// An update call was acknowledged.
    StuffUpdated,
    /// A review update was rejected.
    UpdateFailed(String),
    /// A delete call was acknowledged.
    GetDeleteSuccess,
    /// A request came back with a well-formed error body.
    GetFailed(String),
    /// A request failed at the transport level.
    GetError(String),

    // -------------------------------------------------------------------------
    // Product cache
    // -------------------------------------------------------------------------
    ProductsFetched(Vec<Product>),
    ProductsFailed(String),
    SellerProductsFetched(Vec<Product>),
    SellerProductsFailed(String),
    SpecificProductsFetched(Vec<Product>),
    SpecificProductsFailed(String),
    ProductDetailFetched(Box<Product>),
    ProductDetailFailed(String),
    CustomersListFetched(Vec<CustomerSummary>),
    CustomersListFailed(String),
    SearchResults(Vec<Product>),
    SearchFailed(String),
}
