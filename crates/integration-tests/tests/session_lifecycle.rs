//! Session persistence through the file backend.
//!
//! Each test gets its own data directory; a second store over the same
//! directory plays the part of a process restart.

#![allow(clippy::unwrap_used)]

use shopcart_core::{RequestStatus, Role};
use shopcart_integration_tests::{sample_customer, sample_product, temp_data_dir};
use shopcart_store::{Action, FileStorage, SessionState, SessionStorage, SessionStore, keys};

fn open(dir: &std::path::Path) -> SessionStore {
    let mut store = SessionStore::new(Box::new(FileStorage::new(dir).unwrap()));
    store.initialize().unwrap();
    store
}

#[test]
fn session_survives_a_restart() {
    let dir = temp_data_dir("restart");

    {
        let mut store = open(&dir);
        store
            .dispatch(Action::AuthSuccess(Box::new(sample_customer(Some(
                "h.p.s".to_owned(),
            )))))
            .unwrap();
        store
            .dispatch(Action::AddToCart(Box::new(sample_product("p1", "Headphones"))))
            .unwrap();
        store
            .dispatch(Action::ProductsFetched(vec![sample_product("p2", "Keyboard")]))
            .unwrap();
    }

    // "Restart": a fresh store over the same directory.
    let store = open(&dir);
    let state = store.state();

    assert!(state.is_logged_in);
    assert_eq!(state.current_role, Some(Role::Customer));
    assert_eq!(state.cart().len(), 1);
    assert_eq!(state.cart().first().unwrap().quantity, 1);
    assert_eq!(state.cache.product_data.len(), 1);
    // Request status is transient, not persisted.
    assert_eq!(state.status, RequestStatus::Idle);

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn corrupt_session_record_is_discarded() {
    let dir = temp_data_dir("corrupt");

    {
        let mut storage = FileStorage::new(&dir).unwrap();
        storage.set(keys::USER, "{ definitely not json").unwrap();
    }

    let store = open(&dir);
    assert!(!store.state().is_logged_in);
    assert!(store.state().current_user.is_none());

    // The bad record was cleared; a re-read sees nothing.
    let storage = FileStorage::new(&dir).unwrap();
    assert!(storage.get(keys::USER).unwrap().is_none());

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn corrupt_product_record_does_not_affect_session() {
    let dir = temp_data_dir("corrupt-products");

    {
        let mut store = open(&dir);
        store
            .dispatch(Action::AuthSuccess(Box::new(sample_customer(Some(
                "h.p.s".to_owned(),
            )))))
            .unwrap();
        let mut storage = FileStorage::new(&dir).unwrap();
        storage.set(keys::PRODUCT_DATA, "[truncated").unwrap();
    }

    let store = open(&dir);
    // Session rehydrated fine; only the product snapshot was dropped.
    assert!(store.state().is_logged_in);
    assert!(store.state().cache.product_data.is_empty());

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn logout_clears_memory_and_disk() {
    let dir = temp_data_dir("logout");

    let mut store = open(&dir);
    store
        .dispatch(Action::AuthSuccess(Box::new(sample_customer(Some(
            "h.p.s".to_owned(),
        )))))
        .unwrap();
    store
        .dispatch(Action::AddToCart(Box::new(sample_product("p1", "Headphones"))))
        .unwrap();
    store
        .dispatch(Action::ProductsFetched(vec![sample_product("p2", "Keyboard")]))
        .unwrap();

    store.dispatch(Action::Logout).unwrap();
    assert_eq!(*store.state(), SessionState::default());

    // Idempotent terminal state.
    store.dispatch(Action::Logout).unwrap();
    assert_eq!(*store.state(), SessionState::default());

    let storage = FileStorage::new(&dir).unwrap();
    assert!(storage.get(keys::USER).unwrap().is_none());
    assert!(storage.get(keys::PRODUCT_DATA).unwrap().is_none());

    // And a restart comes up empty.
    let store = open(&dir);
    assert_eq!(*store.state(), SessionState::default());

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn auth_failure_leaves_persisted_session_alone() {
    let dir = temp_data_dir("auth-failure");

    let mut store = open(&dir);
    store
        .dispatch(Action::AuthSuccess(Box::new(sample_customer(Some(
            "h.p.s".to_owned(),
        )))))
        .unwrap();

    // A later failed login attempt must not wipe the stored record.
    store
        .dispatch(Action::AuthFailed("Invalid password".to_owned()))
        .unwrap();
    assert!(!store.state().is_logged_in);

    let storage = FileStorage::new(&dir).unwrap();
    assert!(storage.get(keys::USER).unwrap().is_some());

    std::fs::remove_dir_all(&dir).ok();
}
