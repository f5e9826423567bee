//! Integration tests for the product catalog.

#![allow(clippy::unwrap_used)]

use stockroom_core::{Price, ProductId, Role};
use stockroom_integration_tests::TestStore;
use stockroom_inventory::CatalogService;
use stockroom_inventory::models::ProductInput;

fn widget() -> ProductInput {
    ProductInput::new("Widget", "Blue widget", 5, Price::from_cents(999))
}

fn gadget() -> ProductInput {
    ProductInput::new("Gadget", "", 1, Price::from_cents(1250))
}

// =============================================================================
// List / Add
// =============================================================================

#[tokio::test]
async fn test_empty_catalog_lists_nothing() {
    let store = TestStore::new().await.unwrap();
    let session = store.session("a@example.com", Role::User).await.unwrap();

    let products = CatalogService::new(&store.pool)
        .list_products(&session)
        .await
        .unwrap();

    assert!(products.is_empty());
}

#[tokio::test]
async fn test_added_products_are_listed_in_insertion_order() {
    let store = TestStore::new().await.unwrap();
    let session = store.session("a@example.com", Role::User).await.unwrap();
    let catalog = CatalogService::new(&store.pool);

    let first = catalog.add_product(&session, &widget()).await.unwrap();
    let second = catalog.add_product(&session, &gadget()).await.unwrap();

    let products = catalog.list_products(&session).await.unwrap();
    assert_eq!(products, vec![first.clone(), second]);
    assert_eq!(ProductInput::from(&first), widget());
}

#[tokio::test]
async fn test_catalog_stores_values_as_given() {
    let store = TestStore::new().await.unwrap();
    let session = store.session("a@example.com", Role::User).await.unwrap();
    let catalog = CatalogService::new(&store.pool);

    // Range checks belong to the entry form, not the catalog
    let odd = ProductInput::new("", "", -3, Price::from_cents(0));
    let product = catalog.add_product(&session, &odd).await.unwrap();

    let stored = catalog
        .get_product(&session, product.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(ProductInput::from(&stored), odd);
}

#[tokio::test]
async fn test_catalog_is_shared_between_users() {
    let store = TestStore::new().await.unwrap();
    let admin = store.session("admin@example.com", Role::Admin).await.unwrap();
    let user = store.session("user@example.com", Role::User).await.unwrap();
    let catalog = CatalogService::new(&store.pool);

    let product = catalog.add_product(&admin, &widget()).await.unwrap();

    assert_eq!(catalog.list_products(&user).await.unwrap(), vec![product]);
}

// =============================================================================
// Get
// =============================================================================

#[tokio::test]
async fn test_get_unknown_product_is_none() {
    let store = TestStore::new().await.unwrap();
    let session = store.session("a@example.com", Role::User).await.unwrap();

    let product = CatalogService::new(&store.pool)
        .get_product(&session, ProductId::new(42))
        .await
        .unwrap();

    assert!(product.is_none());
}

// =============================================================================
// Update
// =============================================================================

#[tokio::test]
async fn test_update_overwrites_all_fields() {
    let store = TestStore::new().await.unwrap();
    let session = store.session("a@example.com", Role::User).await.unwrap();
    let catalog = CatalogService::new(&store.pool);
    let product = catalog.add_product(&session, &widget()).await.unwrap();

    let changed = ProductInput::new("Widget XL", "Bigger", 2, Price::from_cents(1999));
    catalog
        .update_product(&session, product.id, &changed)
        .await
        .unwrap();

    let stored = catalog
        .get_product(&session, product.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.id, product.id);
    assert_eq!(ProductInput::from(&stored), changed);
}

#[tokio::test]
async fn test_update_unknown_product_is_noop() {
    let store = TestStore::new().await.unwrap();
    let session = store.session("a@example.com", Role::User).await.unwrap();
    let catalog = CatalogService::new(&store.pool);
    let product = catalog.add_product(&session, &widget()).await.unwrap();

    catalog
        .update_product(&session, ProductId::new(999), &gadget())
        .await
        .unwrap();

    assert_eq!(catalog.list_products(&session).await.unwrap(), vec![product]);
}

// =============================================================================
// Delete
// =============================================================================

#[tokio::test]
async fn test_delete_removes_only_that_product() {
    let store = TestStore::new().await.unwrap();
    let session = store.session("a@example.com", Role::User).await.unwrap();
    let catalog = CatalogService::new(&store.pool);
    let first = catalog.add_product(&session, &widget()).await.unwrap();
    let second = catalog.add_product(&session, &gadget()).await.unwrap();

    catalog.delete_product(&session, first.id).await.unwrap();

    assert_eq!(catalog.list_products(&session).await.unwrap(), vec![second]);
    assert!(
        catalog
            .get_product(&session, first.id)
            .await
            .unwrap()
            .is_none()
    );
}

#[tokio::test]
async fn test_delete_twice_is_noop() {
    let store = TestStore::new().await.unwrap();
    let session = store.session("a@example.com", Role::User).await.unwrap();
    let catalog = CatalogService::new(&store.pool);
    let product = catalog.add_product(&session, &widget()).await.unwrap();

    catalog.delete_product(&session, product.id).await.unwrap();
    catalog.delete_product(&session, product.id).await.unwrap();

    assert!(catalog.list_products(&session).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_ids_are_not_reused_after_delete() {
    let store = TestStore::new().await.unwrap();
    let session = store.session("a@example.com", Role::User).await.unwrap();
    let catalog = CatalogService::new(&store.pool);

    let first = catalog.add_product(&session, &widget()).await.unwrap();
    catalog.delete_product(&session, first.id).await.unwrap();
    let second = catalog.add_product(&session, &gadget()).await.unwrap();

    assert_ne!(first.id, second.id);
}

// =============================================================================
// Persistence
// =============================================================================

#[tokio::test]
async fn test_reopening_store_keeps_data() {
    let store = TestStore::new().await.unwrap();
    let session = store.session("a@example.com", Role::User).await.unwrap();
    let product = CatalogService::new(&store.pool)
        .add_product(&session, &widget())
        .await
        .unwrap();

    // Migrations run again on every open and must leave existing rows alone
    stockroom_inventory::db::run_migrations(&store.pool)
        .await
        .unwrap();

    let products = CatalogService::new(&store.pool)
        .list_products(&session)
        .await
        .unwrap();
    assert_eq!(products, vec![product]);
}
