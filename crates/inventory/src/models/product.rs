//! Product catalog domain models.

use core::fmt;

use serde::{Deserialize, Serialize};

use stockroom_core::{Price, ProductId};

/// A catalog product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    /// Unique product ID.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// Units in stock.
    pub quantity: i64,
    /// Unit price.
    pub price: Price,
}

/// Field values for creating or overwriting a product.
///
/// Values are taken as-is: the catalog performs no range checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductInput {
    /// Product name.
    pub name: String,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
    /// Units in stock.
    pub quantity: i64,
    /// Unit price.
    pub price: Price,
}

impl ProductInput {
    /// Collect the four product fields.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        quantity: i64,
        price: Price,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            quantity,
            price,
        }
    }
}

impl From<&Product> for ProductInput {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            description: product.description.clone(),
            quantity: product.quantity,
            price: product.price,
        }
    }
}

impl fmt::Display for Product {
    /// One-line listing: `#id | name | description | qty N | price P`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} | {} | {} | qty {} | price {}",
            self.id, self.name, self.description, self.quantity, self.price
        )
    }
}
