//! Clear the persisted session records.
//!
//! Shows what is stored, then deletes both records. Useful after schema
//! changes or when testing against a fresh state.

use shopcart_store::{FileStorage, SessionStorage, StoreConfig, keys};

/// Delete the persisted session and product records.
///
/// # Errors
///
/// Returns an error if the data directory cannot be opened or written.
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = StoreConfig::from_env()?;
    let mut storage = FileStorage::new(&config.data_dir)?;

    for key in [keys::USER, keys::PRODUCT_DATA] {
        match storage.get(key)? {
            Some(value) => {
                tracing::info!(key, bytes = value.len(), "deleting record");
                storage.delete(key)?;
            }
            None => tracing::info!(key, "no record to delete"),
        }
    }

    tracing::info!("session data cleared");
    Ok(())
}
