//! Inspect the persisted session records.
//!
//! Rehydrates a [`SessionStore`] from the configured data directory and
//! reports what it found, the same way the application would see it on
//! startup.

use shopcart_store::{SessionStore, StoreConfig};

/// Summarize the persisted session and product snapshot.
///
/// # Errors
///
/// Returns an error if the data directory cannot be opened or read.
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = StoreConfig::from_env()?;
    tracing::info!(data_dir = %config.data_dir.display(), "inspecting session data");

    let mut store = SessionStore::open(&config)?;
    store.initialize()?;
    let state = store.state();

    match &state.current_user {
        Some(user) => {
            tracing::info!(
                name = %user.name,
                email = %user.email,
                role = %user.role,
                cart_lines = user.cart_details.len(),
                has_token = user.token.is_some(),
                "found persisted session"
            );
            for line in &user.cart_details {
                tracing::info!(
                    product = %line.product.product_name,
                    quantity = line.quantity,
                    "cart line"
                );
            }
        }
        None => tracing::info!("no persisted session"),
    }

    tracing::info!(
        products = state.cache.product_data.len(),
        "cached product listing"
    );

    Ok(())
}
