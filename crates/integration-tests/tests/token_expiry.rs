//! Token validation side effects.

#![allow(clippy::unwrap_used)]

use chrono::Utc;
use shopcart_integration_tests::{forge_token, sample_customer, sample_product, temp_data_dir};
use shopcart_store::{
    Action, FileStorage, MemoryStorage, SessionState, SessionStorage, SessionStore, keys, token,
};

#[test]
fn expired_token_clears_session_and_disk() {
    let dir = temp_data_dir("expired");
    let now = Utc::now();
    let stale = forge_token(now.timestamp() - 1);

    let mut store = SessionStore::new(Box::new(FileStorage::new(&dir).unwrap()));
    store
        .dispatch(Action::AuthSuccess(Box::new(sample_customer(Some(
            stale,
        )))))
        .unwrap();
    store
        .dispatch(Action::ProductsFetched(vec![sample_product("p1", "Headphones")]))
        .unwrap();

    store.dispatch(Action::ValidateToken { now }).unwrap();

    assert_eq!(*store.state(), SessionState::default());
    let storage = FileStorage::new(&dir).unwrap();
    assert!(storage.get(keys::USER).unwrap().is_none());
    assert!(storage.get(keys::PRODUCT_DATA).unwrap().is_none());

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn live_token_only_flips_the_login_flag() {
    let now = Utc::now();
    let fresh = forge_token(now.timestamp() + 3600);

    let mut store = SessionStore::new(Box::new(MemoryStorage::new()));
    store
        .dispatch(Action::AuthSuccess(Box::new(sample_customer(Some(
            fresh.clone(),
        )))))
        .unwrap();
    store
        .dispatch(Action::AddToCart(Box::new(sample_product("p1", "Headphones"))))
        .unwrap();

    let before = store.state().clone();
    store.dispatch(Action::ValidateToken { now }).unwrap();
    let after = store.state();

    assert!(after.is_logged_in);
    assert_eq!(after.current_token.as_deref(), Some(fresh.as_str()));
    assert_eq!(after.cart(), before.cart());
    assert_eq!(after.cache, before.cache);
}

#[test]
fn absent_token_counts_as_expired() {
    let now = Utc::now();

    let mut store = SessionStore::new(Box::new(MemoryStorage::new()));
    store
        .dispatch(Action::AuthSuccess(Box::new(sample_customer(None))))
        .unwrap();

    store.dispatch(Action::ValidateToken { now }).unwrap();
    assert_eq!(*store.state(), SessionState::default());
}

#[test]
fn expiry_decision_matches_the_pure_function() {
    let now = Utc::now();

    assert!(token::expired(&forge_token(now.timestamp() - 1), now));
    assert!(!token::expired(&forge_token(now.timestamp() + 3600), now));
    assert!(token::expired("mangled", now));
}
