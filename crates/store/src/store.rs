//! The session store dispatcher.
//!
//! [`SessionStore`] wraps the pure reducer with the persistence mirror:
//! after each successful dispatch it diffs the two durable slices of state
//! (the customer record and the general product listing) and writes or
//! deletes the corresponding storage records. Mirror failures are logged
//! and never fail the dispatch; a crash between the in-memory update and
//! the write leaves storage stale, which the next login or fetch repairs.

use chrono::Utc;
use shopcart_core::{Customer, Product};

use crate::action::Action;
use crate::config::StoreConfig;
use crate::error::StoreError;
use crate::persist::{FileStorage, SessionStorage, StorageError, keys};
use crate::reducer::reduce;
use crate::state::SessionState;

/// Owns the container state and its persistence backend.
pub struct SessionStore {
    state: SessionState,
    storage: Box<dyn SessionStorage>,
}

impl SessionStore {
    /// Create a store over the given backend, starting from empty state.
    ///
    /// Call [`initialize`](Self::initialize) to rehydrate from whatever the
    /// backend already holds.
    #[must_use]
    pub fn new(storage: Box<dyn SessionStorage>) -> Self {
        Self {
            state: SessionState::default(),
            storage,
        }
    }

    /// Create a store over a [`FileStorage`] rooted at the configured
    /// data directory.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the data directory cannot be created.
    pub fn open(config: &StoreConfig) -> Result<Self, StorageError> {
        Ok(Self::new(Box::new(FileStorage::new(&config.data_dir)?)))
    }

    /// The current state.
    #[must_use]
    pub const fn state(&self) -> &SessionState {
        &self.state
    }

    /// Rehydrate state from the persisted snapshots.
    ///
    /// Each record is handled independently: a snapshot that parses
    /// populates its slice (a session record also flips `is_logged_in`),
    /// and a corrupt snapshot is logged, deleted, and skipped - never an
    /// error to the caller.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] only when the backend itself cannot be
    /// read or the corrupt-record cleanup cannot be written.
    pub fn initialize(&mut self) -> Result<(), StoreError> {
        if let Some(raw) = self.storage.get(keys::USER)? {
            match serde_json::from_str::<Customer>(&raw) {
                Ok(user) => {
                    self.state.current_role = Some(user.role);
                    self.state.current_token = user.token.clone();
                    // Invariant: never logged in without a token.
                    self.state.is_logged_in = user.token.is_some();
                    self.state.current_user = Some(user);
                }
                Err(e) => {
                    tracing::warn!(error = %e, "discarding corrupt session record");
                    self.storage.delete(keys::USER)?;
                }
            }
        }

        if let Some(raw) = self.storage.get(keys::PRODUCT_DATA)? {
            match serde_json::from_str::<Vec<Product>>(&raw) {
                Ok(products) => self.state.cache.product_data = products,
                Err(e) => {
                    tracing::warn!(error = %e, "discarding corrupt product snapshot");
                    self.storage.delete(keys::PRODUCT_DATA)?;
                }
            }
        }

        Ok(())
    }

    /// Apply an action, then mirror the durable slices into storage.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NoActiveSession`] for cart/profile actions
    /// dispatched while signed out; state and storage are left untouched.
    pub fn dispatch(&mut self, action: Action) -> Result<(), StoreError> {
        let next = reduce(self.state.clone(), action)?;
        self.mirror(&next);
        self.state = next;
        Ok(())
    }

    /// Validate the held token against the wall clock.
    ///
    /// # Errors
    ///
    /// Infallible in practice; shares [`dispatch`](Self::dispatch)'s
    /// signature.
    pub fn validate_token(&mut self) -> Result<(), StoreError> {
        self.dispatch(Action::ValidateToken { now: Utc::now() })
    }

    /// Write the durable slices that changed in this transition.
    ///
    /// An empty product listing and a signed-out session are represented
    /// by record absence, so session-clearing transitions delete both
    /// records.
    fn mirror(&mut self, next: &SessionState) {
        if next.current_user != self.state.current_user {
            match &next.current_user {
                Some(user) => match serde_json::to_string(user) {
                    Ok(json) => Self::log_write(self.storage.set(keys::USER, &json), keys::USER),
                    Err(e) => {
                        tracing::error!(error = %e, "failed to serialize session record");
                    }
                },
                None => Self::log_write(self.storage.delete(keys::USER), keys::USER),
            }
        }

        if next.cache.product_data != self.state.cache.product_data {
            if next.cache.product_data.is_empty() {
                Self::log_write(self.storage.delete(keys::PRODUCT_DATA), keys::PRODUCT_DATA);
            } else {
                match serde_json::to_string(&next.cache.product_data) {
                    Ok(json) => {
                        Self::log_write(self.storage.set(keys::PRODUCT_DATA, &json), keys::PRODUCT_DATA);
                    }
                    Err(e) => {
                        tracing::error!(error = %e, "failed to serialize product snapshot");
                    }
                }
            }
        }
    }

    fn log_write(result: Result<(), StorageError>, key: &str) {
        match result {
            Ok(()) => tracing::debug!(key, "mirrored state to storage"),
            Err(e) => tracing::error!(key, error = %e, "failed to mirror state to storage"),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::persist::MemoryStorage;
    use rust_decimal::Decimal;
    use shopcart_core::{CustomerId, Email, Price, ProductId, RequestStatus, Role};

    fn product(id: &str) -> Product {
        Product {
            id: ProductId::new(id),
            product_name: format!("Product {id}"),
            price: Price::new(Decimal::from(500), Decimal::from(300), Decimal::from(40)),
            category: "Electronics".to_owned(),
            subcategory: "Audio".to_owned(),
            description: "Test product".to_owned(),
            product_image: "https://img.example/p.jpg".to_owned(),
            tagline: None,
            seller: None,
        }
    }

    fn customer() -> Customer {
        Customer {
            id: CustomerId::new("c1"),
            name: "Rita".to_owned(),
            email: Email::parse("rita@example.com").unwrap(),
            role: Role::Customer,
            token: Some("header.payload.sig".to_owned()),
            cart_details: Vec::new(),
            shipping_data: None,
        }
    }

    fn store() -> SessionStore {
        SessionStore::new(Box::new(MemoryStorage::new()))
    }

    fn stored(store: &SessionStore, key: &str) -> Option<String> {
        store.storage.get(key).unwrap()
    }

    #[test]
    fn test_auth_success_mirrors_user_record() {
        let mut store = store();
        store
            .dispatch(Action::AuthSuccess(Box::new(customer())))
            .unwrap();

        let raw = stored(&store, keys::USER).unwrap();
        let record: Customer = serde_json::from_str(&raw).unwrap();
        assert_eq!(record.id.as_str(), "c1");
    }

    #[test]
    fn test_cart_mutations_mirror_the_cart() {
        let mut store = store();
        store
            .dispatch(Action::AuthSuccess(Box::new(customer())))
            .unwrap();
        store
            .dispatch(Action::AddToCart(Box::new(product("p1"))))
            .unwrap();
        store
            .dispatch(Action::AddToCart(Box::new(product("p1"))))
            .unwrap();

        let record: Customer =
            serde_json::from_str(&stored(&store, keys::USER).unwrap()).unwrap();
        assert_eq!(record.cart_details.len(), 1);
        assert_eq!(record.cart_details.first().unwrap().quantity, 2);
    }

    #[test]
    fn test_logout_deletes_both_records() {
        let mut store = store();
        store
            .dispatch(Action::AuthSuccess(Box::new(customer())))
            .unwrap();
        store
            .dispatch(Action::ProductsFetched(vec![product("p1")]))
            .unwrap();
        assert!(stored(&store, keys::USER).is_some());
        assert!(stored(&store, keys::PRODUCT_DATA).is_some());

        store.dispatch(Action::Logout).unwrap();
        assert!(stored(&store, keys::USER).is_none());
        assert!(stored(&store, keys::PRODUCT_DATA).is_none());
        assert_eq!(*store.state(), SessionState::default());

        // Idempotent: a second logout changes nothing.
        store.dispatch(Action::Logout).unwrap();
        assert_eq!(*store.state(), SessionState::default());
    }

    #[test]
    fn test_failed_dispatch_leaves_storage_untouched() {
        let mut store = store();
        let err = store
            .dispatch(Action::AddToCart(Box::new(product("p1"))))
            .unwrap_err();
        assert!(matches!(err, StoreError::NoActiveSession));
        assert!(stored(&store, keys::USER).is_none());
        assert_eq!(*store.state(), SessionState::default());
    }

    #[test]
    fn test_initialize_rehydrates_session() {
        let mut backing = MemoryStorage::new();
        backing
            .set(
                keys::USER,
                &serde_json::to_string(&customer()).unwrap(),
            )
            .unwrap();

        let mut store = SessionStore::new(Box::new(backing));
        store.initialize().unwrap();

        assert!(store.state().is_logged_in);
        assert_eq!(store.state().current_role, Some(Role::Customer));
        assert_eq!(
            store.state().current_user.as_ref().unwrap().id.as_str(),
            "c1"
        );
        assert_eq!(store.state().status, RequestStatus::Idle);
    }

    #[test]
    fn test_initialize_discards_corrupt_records() {
        let mut backing = MemoryStorage::new();
        backing.set(keys::USER, "{ not json").unwrap();
        backing.set(keys::PRODUCT_DATA, "also not json").unwrap();

        let mut store = SessionStore::new(Box::new(backing));
        store.initialize().unwrap();

        assert!(!store.state().is_logged_in);
        assert!(store.state().current_user.is_none());
        assert!(store.state().cache.product_data.is_empty());
        // The bad records are gone.
        assert!(stored(&store, keys::USER).is_none());
        assert!(stored(&store, keys::PRODUCT_DATA).is_none());
    }

    #[test]
    fn test_product_fetch_mirrors_listing_only() {
        let mut store = store();
        store
            .dispatch(Action::ProductsFetched(vec![product("p1"), product("p2")]))
            .unwrap();
        store
            .dispatch(Action::SellerProductsFetched(vec![product("s1")]))
            .unwrap();

        let raw = stored(&store, keys::PRODUCT_DATA).unwrap();
        let listing: Vec<Product> = serde_json::from_str(&raw).unwrap();
        assert_eq!(listing.len(), 2);
        // The seller listing is memory-only.
        assert!(stored(&store, keys::USER).is_none());
    }
}
