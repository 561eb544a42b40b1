//! Product and cart wire types.
//!
//! These mirror the JSON documents the upstream catalog API returns. Field
//! names are camelCase on the wire (`productName`, `cartDetails`), with the
//! document id under `_id`.

use serde::{Deserialize, Serialize};

use crate::types::id::{ProductId, SellerId};
use crate::types::price::Price;

/// A catalog product as returned by the listing and detail endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Upstream document id.
    #[serde(rename = "_id")]
    pub id: ProductId,
    /// Display name.
    pub product_name: String,
    /// Retail pricing.
    pub price: Price,
    /// Top-level category (e.g. "Electronics").
    pub category: String,
    /// Category refinement (e.g. "Headphones").
    pub subcategory: String,
    /// Long-form description.
    pub description: String,
    /// Image URL.
    pub product_image: String,
    /// Optional marketing one-liner.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,
    /// Owning merchant, when the listing is seller-scoped.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seller: Option<SellerId>,
}

/// One product entry in a cart with a quantity.
///
/// Serialized as the product snapshot's own fields plus `quantity`, the
/// same flattened shape the upstream cart endpoints accept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    /// Snapshot of the product at the time it was added.
    #[serde(flatten)]
    pub product: Product,
    /// Number of units; always at least 1.
    pub quantity: u32,
}

impl CartLine {
    /// Create a fresh line for a product, at quantity 1.
    #[must_use]
    pub const fn new(product: Product) -> Self {
        Self {
            product,
            quantity: 1,
        }
    }

    /// Id of the product this line holds.
    #[must_use]
    pub const fn product_id(&self) -> &ProductId {
        &self.product.id
    }
}

/// Shipping address attached to a customer record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingData {
    pub address: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub pin_code: u32,
    pub phone_no: String,
}
