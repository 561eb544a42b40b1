//! Shopcart Core - Shared types library.
//!
//! This crate provides common types used across all Shopcart components:
//! - `store` - Session and cart state container
//! - `cli` - Command-line maintenance tools
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, emails, roles,
//!   and the product/customer wire types shared with the upstream API

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
