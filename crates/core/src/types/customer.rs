//! Customer account records.

use serde::{Deserialize, Serialize};

use crate::types::email::Email;
use crate::types::id::CustomerId;
use crate::types::product::{CartLine, ShippingData};
use crate::types::role::Role;

/// An authenticated account record, as returned by the auth endpoints and
/// persisted locally between sessions.
///
/// The record embeds the cart (`cartDetails`) rather than referencing it, so
/// persisting the record persists the cart. The bearer token rides along in
/// the same document; its expiry claim is what the session validator checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    /// Upstream document id.
    #[serde(rename = "_id")]
    pub id: CustomerId,
    /// Display name.
    pub name: String,
    /// Account email.
    pub email: Email,
    /// Account role.
    pub role: Role,
    /// Bearer token issued at login, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Cart line items, at most one per product.
    #[serde(default)]
    pub cart_details: Vec<CartLine>,
    /// Saved shipping address, once the customer has provided one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping_data: Option<ShippingData>,
}

/// Slim customer view for the seller-facing customers list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerSummary {
    /// Upstream document id.
    #[serde(rename = "_id")]
    pub id: CustomerId,
    /// Display name.
    pub name: String,
    /// Account email.
    pub email: Email,
}
