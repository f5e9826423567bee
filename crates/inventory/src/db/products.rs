//! Product repository for database operations.
//!
//! Every method is a single autocommit statement. Updates and deletes report
//! whether a row was touched; nothing here treats a missing id as an error.

use sqlx::SqlitePool;

use stockroom_core::{Price, ProductId};

use super::RepositoryError;
use crate::models::product::{Product, ProductInput};

// =============================================================================
// Internal Row Types
// =============================================================================

/// Internal row type for `products` queries.
///
/// The columns are nullable in the schema, so every field is optional here
/// and validated on conversion.
#[derive(Debug, sqlx::FromRow)]
struct ProductRow {
    id: ProductId,
    name: Option<String>,
    description: Option<String>,
    quantity: Option<i64>,
    price: Option<f64>,
}

impl TryFrom<ProductRow> for Product {
    type Error = RepositoryError;

    fn try_from(row: ProductRow) -> Result<Self, Self::Error> {
        let id = row.id;
        let missing = |column: &str| {
            RepositoryError::DataCorruption(format!("product {id}: {column} is NULL"))
        };

        let price = row.price.ok_or_else(|| missing("price"))?;
        let price = Price::from_f64(price)
            .map_err(|e| RepositoryError::DataCorruption(format!("product {id}: {e}")))?;

        Ok(Self {
            id,
            name: row.name.ok_or_else(|| missing("name"))?,
            description: row.description.ok_or_else(|| missing("description"))?,
            quantity: row.quantity.ok_or_else(|| missing("quantity"))?,
            price,
        })
    }
}

// =============================================================================
// Repository
// =============================================================================

/// Repository for product database operations.
pub struct ProductRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ProductRepository<'a> {
    /// Create a new product repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List every product in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if any row is invalid.
    pub async fn list_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let rows = sqlx::query_as::<_, ProductRow>(
            r"
            SELECT id, name, description, quantity, price
            FROM products
            ORDER BY id
            ",
        )
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(TryInto::try_into).collect()
    }

    /// Get a product by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the row is invalid.
    pub async fn get(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        let row = sqlx::query_as::<_, ProductRow>(
            r"
            SELECT id, name, description, quantity, price
            FROM products
            WHERE id = ?
            ",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        row.map(TryInto::try_into).transpose()
    }

    /// Insert a product and return it with its assigned ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(&self, input: &ProductInput) -> Result<Product, RepositoryError> {
        let row = sqlx::query_as::<_, ProductRow>(
            r"
            INSERT INTO products (name, description, quantity, price)
            VALUES (?, ?, ?, ?)
            RETURNING id, name, description, quantity, price
            ",
        )
        .bind(&input.name)
        .bind(&input.description)
        .bind(input.quantity)
        .bind(input.price)
        .fetch_one(self.pool)
        .await?;

        row.try_into()
    }

    /// Overwrite every field of a product.
    ///
    /// # Returns
    ///
    /// Returns `true` if the product existed, `false` otherwise.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the update fails.
    pub async fn update(
        &self,
        id: ProductId,
        input: &ProductInput,
    ) -> Result<bool, RepositoryError> {
        let result = sqlx::query(
            r"
            UPDATE products
            SET name = ?, description = ?, quantity = ?, price = ?
            WHERE id = ?
            ",
        )
        .bind(&input.name)
        .bind(&input.description)
        .bind(input.quantity)
        .bind(input.price)
        .bind(id)
        .execute(self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Delete a product by ID.
    ///
    /// # Returns
    ///
    /// Returns `true` if the product was deleted, `false` if it didn't exist.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn delete(&self, id: ProductId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM products WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
