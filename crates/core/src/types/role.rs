//! Account roles.

use serde::{Deserialize, Serialize};

/// Role attached to an authenticated account.
///
/// Serialized capitalized (`"Customer"`, `"Seller"`, `"Shopcart"`) to match
/// the role strings the upstream API stores on account records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Shopper: can browse, hold a cart, and place orders.
    Customer,
    /// Merchant: owns product listings and sees the customers list.
    Seller,
    /// First-party catalog account used for curated uploads.
    Shopcart,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Customer => write!(f, "Customer"),
            Self::Seller => write!(f, "Seller"),
            Self::Shopcart => write!(f, "Shopcart"),
        }
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Customer" => Ok(Self::Customer),
            "Seller" => Ok(Self::Seller),
            "Shopcart" => Ok(Self::Shopcart),
            _ => Err(format!("invalid role: {s}")),
        }
    }
}
