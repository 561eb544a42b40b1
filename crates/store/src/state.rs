//! Container state.
//!
//! [`SessionState`] is plain data: every mutation goes through
//! [`crate::reducer::reduce`], and persistence happens outside the pure core
//! (see [`crate::store::SessionStore`]). `PartialEq` is derived so the
//! dispatcher can diff the mirrored slices before and after a reduction.

use shopcart_core::{CartLine, Customer, CustomerSummary, Product, RequestStatus, Role};

/// The full container state: auth session, cart, and product cache.
///
/// `current_role` and `current_token` are denormalized copies of fields on
/// `current_user`, kept so callers can check them without unwrapping the
/// record. The reducer keeps them in sync on every session change.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    /// Outcome of the most recent tracked request.
    pub status: RequestStatus,
    /// Whether a list fetch is in flight.
    pub loading: bool,
    /// The signed-in account record, cart included.
    pub current_user: Option<Customer>,
    /// Role of the signed-in account.
    pub current_role: Option<Role>,
    /// Bearer token of the signed-in account.
    pub current_token: Option<String>,
    /// Whether the session is considered live. Never true without a token.
    pub is_logged_in: bool,
    /// Transport-level error message, shared across request categories.
    pub error: Option<String>,
    /// Domain-failure message for auth and uncategorized requests.
    pub response: Option<String>,
    /// Domain-failure message for review updates.
    pub response_review: Option<String>,
    /// Transient copy of a cart line looked up for the detail view.
    pub product_details_cart: Option<CartLine>,
    /// Last-known results of the product read queries.
    pub cache: ProductCache,
}

impl SessionState {
    /// True when a customer record is present.
    #[must_use]
    pub const fn has_session(&self) -> bool {
        self.current_user.is_some()
    }

    /// The current cart lines, empty when signed out.
    #[must_use]
    pub fn cart(&self) -> &[CartLine] {
        self.current_user
            .as_ref()
            .map_or(&[], |user| user.cart_details.as_slice())
    }
}

/// Read-through cache of the product query endpoints.
///
/// Each successful fetch replaces its field wholesale; there is no partial
/// merge and no pagination state. Failures land in the category's own
/// `response_*` field so one failing query never clobbers another's data.
/// Only `product_data` survives a reload (it is mirrored to storage).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductCache {
    /// General product listing.
    pub product_data: Vec<Product>,
    /// Listing scoped to the signed-in seller.
    pub seller_product_data: Vec<Product>,
    /// Single-product listing (same product across sellers).
    pub specific_product_data: Vec<Product>,
    /// Most recently fetched product detail view.
    pub product_details: Option<Product>,
    /// Search / filter results.
    pub filtered_products: Vec<Product>,
    /// Seller-facing customers list.
    pub customers_list: Vec<CustomerSummary>,
    /// Failure message for the general listing.
    pub response_products: Option<String>,
    /// Failure message for the seller listing.
    pub response_seller_products: Option<String>,
    /// Failure message for the single-product listing.
    pub response_specific_products: Option<String>,
    /// Failure message for the detail view.
    pub response_details: Option<String>,
    /// Failure message for the customers list.
    pub response_customers_list: Option<String>,
    /// Failure message for search.
    pub response_search: Option<String>,
}
