//! Cart persistence round-trips through file-backed durable slots.
//!
//! These tests exercise the full stack a real consumer uses: `AppState`
//! over a `FileStore`, mutations mirrored to disk, and a fresh process
//! (simulated by a second store over the same directory) hydrating what
//! the first one persisted.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use pomelo_core::{Product, ProductId};
use pomelo_storefront::config::StorefrontConfig;
use pomelo_storefront::services::cart::CartStore;
use pomelo_storefront::state::AppState;
use pomelo_storefront::storage::{FileStore, KeyValueStore};

use pomelo_integration_tests::init_tracing;

fn product(id: i64, price: f64, name: &str) -> Product {
    Product::new(id)
        .with_field("price", price)
        .with_field("name", name)
        .with_field("image", format!("/img/{id}.png"))
}

#[test]
fn test_reload_round_trips_items_structurally() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();

    let before = {
        let storage: Arc<dyn KeyValueStore> = Arc::new(FileStore::new(dir.path()));
        let cart = CartStore::new(storage, "cart");
        cart.add_to_cart(&product(1, 10.0, "Tea"), 2).unwrap();
        cart.add_to_cart(&product(2, 5.5, "Mug"), "3").unwrap();
        cart.items()
    };

    let storage: Arc<dyn KeyValueStore> = Arc::new(FileStore::new(dir.path()));
    let reloaded = CartStore::new(storage, "cart");
    assert_eq!(reloaded.items(), before);
    assert!((reloaded.total_price() - 36.5).abs() < f64::EPSILON);
}

#[test]
fn test_slot_format_is_a_json_array_of_lines() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let state = AppState::new(StorefrontConfig::new(dir.path()));

    state.cart().add_to_cart(&product(7, 9.99, "Pot"), 1).unwrap();

    let raw = std::fs::read_to_string(dir.path().join("cart.json")).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let lines = parsed.as_array().unwrap();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0]["id"], 7);
    assert_eq!(lines[0]["name"], "Pot");
    assert_eq!(lines[0]["quantity"], 1);
}

#[test]
fn test_every_mutation_overwrites_the_slot() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let storage: Arc<dyn KeyValueStore> = Arc::new(FileStore::new(dir.path()));
    let cart = CartStore::new(Arc::clone(&storage), "cart");

    cart.add_to_cart(&product(1, 10.0, "Tea"), 2).unwrap();
    cart.remove_item(&ProductId::Int(1)).unwrap();
    assert_eq!(storage.read("cart").unwrap().as_deref(), Some("[]"));

    cart.add_to_cart(&product(2, 3.0, "Cup"), 1).unwrap();
    cart.clear_cart().unwrap();
    assert_eq!(storage.read("cart").unwrap().as_deref(), Some("[]"));
}

#[test]
fn test_corrupt_slot_falls_open_to_empty_cart() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("cart.json"), "not json at all").unwrap();

    let state = AppState::new(StorefrontConfig::new(dir.path()));
    assert!(state.cart().items().is_empty());

    // The next mutation repairs the slot.
    state.cart().add_to_cart(&product(1, 1.0, "Tea"), 1).unwrap();
    let reloaded = AppState::new(StorefrontConfig::new(dir.path()));
    assert_eq!(reloaded.cart().items().len(), 1);
}

#[test]
fn test_two_stores_on_one_slot_last_writer_wins() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();

    // Two tabs over the same profile, no coordination.
    let tab_a = AppState::new(StorefrontConfig::new(dir.path()));
    let tab_b = AppState::new(StorefrontConfig::new(dir.path()));

    tab_a.cart().add_to_cart(&product(1, 1.0, "Tea"), 1).unwrap();
    tab_b.cart().add_to_cart(&product(2, 2.0, "Mug"), 1).unwrap();

    // Tab B wrote last; a fresh hydration sees only its cart.
    let fresh = AppState::new(StorefrontConfig::new(dir.path()));
    let items = fresh.cart().items();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, ProductId::Int(2));
}

#[test]
fn test_string_and_numeric_ids_do_not_collide() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let state = AppState::new(StorefrontConfig::new(dir.path()));

    state.cart().add_to_cart(&product(1, 1.0, "Tea"), 1).unwrap();
    state
        .cart()
        .add_to_cart(
            &Product::new("1").with_field("price", 2.0).with_field("name", "Sku"),
            1,
        )
        .unwrap();

    let reloaded = AppState::new(StorefrontConfig::new(dir.path()));
    assert_eq!(reloaded.cart().items().len(), 2);
}
