//! Integration tests for Shopcart.
//!
//! Shared fixtures for the scenario tests under `tests/`: sample catalog
//! records, forged bearer tokens with chosen expiry claims, and unique
//! temp directories for exercising the file backend.
//!
//! # Test Categories
//!
//! - `cart_flow` - Cart semantics through the full dispatcher
//! - `session_lifecycle` - Rehydration and clearing through `FileStorage`
//! - `token_expiry` - Token validation side effects

use std::path::PathBuf;

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use rust_decimal::Decimal;
use shopcart_core::{Customer, CustomerId, Email, Price, Product, ProductId, Role};

/// A unique, disposable directory for one file-backed test.
#[must_use]
pub fn temp_data_dir(label: &str) -> PathBuf {
    std::env::temp_dir().join(format!("shopcart-it-{label}-{}", uuid::Uuid::new_v4()))
}

/// A catalog product fixture.
#[must_use]
pub fn sample_product(id: &str, name: &str) -> Product {
    Product {
        id: ProductId::new(id),
        product_name: name.to_owned(),
        price: Price::new(Decimal::from(2999), Decimal::from(1499), Decimal::from(50)),
        category: "Electronics".to_owned(),
        subcategory: "Audio".to_owned(),
        description: "Integration test product".to_owned(),
        product_image: "https://img.example/p.jpg".to_owned(),
        tagline: Some("Big sound".to_owned()),
        seller: None,
    }
}

/// A customer record fixture carrying the given token.
///
/// # Panics
///
/// Panics if the fixture email fails validation; it cannot.
#[must_use]
#[allow(clippy::unwrap_used)]
pub fn sample_customer(token: Option<String>) -> Customer {
    Customer {
        id: CustomerId::new("cust-1"),
        name: "Rita Mehta".to_owned(),
        email: Email::parse("rita@example.com").unwrap(),
        role: Role::Customer,
        token,
        cart_details: Vec::new(),
        shipping_data: None,
    }
}

/// Forge an unsigned compact JWS with the given expiry claim.
///
/// # Panics
///
/// Panics if the claims fail to serialize; they cannot.
#[must_use]
#[allow(clippy::unwrap_used)]
pub fn forge_token(exp_seconds: i64) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let claims = serde_json::json!({ "userId": "cust-1", "exp": exp_seconds });
    let payload = URL_SAFE_NO_PAD.encode(serde_json::to_vec(&claims).unwrap());
    format!("{header}.{payload}.forged")
}
