//! Catalog service.
//!
//! Product CRUD. Every call takes the caller's [`Session`] so log events carry
//! who made the change; no permission check is made from it.
//!
//! Values are stored as given. Update and delete of a missing ID succeed
//! silently, and concurrent writers to the same row are last-write-wins.

use sqlx::SqlitePool;

use stockroom_core::ProductId;

use crate::db::RepositoryError;
use crate::db::products::ProductRepository;
use crate::models::product::{Product, ProductInput};
use crate::models::user::Session;

/// Catalog service.
pub struct CatalogService<'a> {
    products: ProductRepository<'a>,
}

impl<'a> CatalogService<'a> {
    /// Create a new catalog service.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self {
            products: ProductRepository::new(pool),
        }
    }

    /// List all products in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the query fails or a row is invalid.
    pub async fn list_products(&self, session: &Session) -> Result<Vec<Product>, RepositoryError> {
        let products = self.products.list_all().await?;
        tracing::debug!(actor = session.actor(), count = products.len(), "Listed products");
        Ok(products)
    }

    /// Look up a single product.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the query fails or the row is invalid.
    pub async fn get_product(
        &self,
        session: &Session,
        id: ProductId,
    ) -> Result<Option<Product>, RepositoryError> {
        let product = self.products.get(id).await?;
        tracing::debug!(actor = session.actor(), product_id = %id, found = product.is_some(), "Fetched product");
        Ok(product)
    }

    /// Add a product and return it with its assigned ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the insert fails.
    pub async fn add_product(
        &self,
        session: &Session,
        input: &ProductInput,
    ) -> Result<Product, RepositoryError> {
        let product = self.products.create(input).await?;
        tracing::info!(
            actor = session.actor(),
            product_id = %product.id,
            name = %product.name,
            "Product added"
        );
        Ok(product)
    }

    /// Overwrite all fields of a product. Does nothing if the ID is unknown.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the update fails.
    pub async fn update_product(
        &self,
        session: &Session,
        id: ProductId,
        input: &ProductInput,
    ) -> Result<(), RepositoryError> {
        if self.products.update(id, input).await? {
            tracing::info!(actor = session.actor(), product_id = %id, "Product updated");
        } else {
            tracing::debug!(actor = session.actor(), product_id = %id, "Update skipped, no such product");
        }
        Ok(())
    }

    /// Delete a product. Does nothing if the ID is unknown.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the delete fails.
    pub async fn delete_product(
        &self,
        session: &Session,
        id: ProductId,
    ) -> Result<(), RepositoryError> {
        if self.products.delete(id).await? {
            tracing::info!(actor = session.actor(), product_id = %id, "Product deleted");
        } else {
            tracing::debug!(actor = session.actor(), product_id = %id, "Delete skipped, no such product");
        }
        Ok(())
    }
}
