//! Product catalog commands.
//!
//! The entry-form rules (quantity >= 1, price >= 0.01 in whole cents) are enforced here,
//! at argument parsing time. The catalog service itself stores whatever it is
//! given.
//!
//! # Usage
//!
//! ```bash
//! stockroom product list --format json
//! stockroom product show 3
//! stockroom product add --name Widget --description "Blue" --quantity 5 --price 9.99
//! stockroom product update 3 --price 4.50
//! stockroom product delete 3
//! ```

use sqlx::SqlitePool;

use stockroom_core::{Price, ProductId};
use stockroom_inventory::CatalogService;
use stockroom_inventory::models::{Product, ProductInput, Session};

use super::CliError;
use crate::OutputFormat;

/// Field overrides for `product update`. `None` keeps the stored value.
#[derive(Debug, Default)]
pub struct ProductChanges {
    pub name: Option<String>,
    pub description: Option<String>,
    pub quantity: Option<i64>,
    pub price: Option<Price>,
}

impl ProductChanges {
    /// Merge the overrides onto the current record, yielding a full overwrite.
    #[must_use]
    pub fn apply(self, current: &Product) -> ProductInput {
        let mut input = ProductInput::from(current);
        if let Some(name) = self.name {
            input.name = name;
        }
        if let Some(description) = self.description {
            input.description = description;
        }
        if let Some(quantity) = self.quantity {
            input.quantity = quantity;
        }
        if let Some(price) = self.price {
            input.price = price;
        }
        input
    }
}

/// Parse a price argument and apply the form rules.
///
/// # Errors
///
/// Returns a message if the value is not a decimal or breaks a form rule.
pub fn parse_form_price(s: &str) -> Result<Price, String> {
    let price: Price = s.parse().map_err(|e| format!("{e}"))?;
    check_form_price(price)
}

/// Apply the entry-form price rules: 0.01 to [`Price::FORM_MAXIMUM`], whole
/// cents only.
///
/// # Errors
///
/// Returns a message naming the first rule broken.
pub fn check_form_price(price: Price) -> Result<Price, String> {
    if !price.meets_form_minimum() {
        return Err(format!("price must be at least {}", Price::FORM_MINIMUM));
    }
    if !price.within_form_maximum() {
        return Err(format!("price must be at most {}", Price::FORM_MAXIMUM));
    }
    if !price.has_cent_precision() {
        return Err(format!("price {price} has more than 2 decimal places"));
    }
    Ok(price)
}

/// Print every product.
///
/// # Errors
///
/// Returns a storage error, or `CliError::Json` if encoding fails.
pub async fn list(
    pool: &SqlitePool,
    session: &Session,
    format: OutputFormat,
) -> Result<(), CliError> {
    let products = CatalogService::new(pool).list_products(session).await?;

    #[allow(clippy::print_stdout)]
    {
        match format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&products)?),
            OutputFormat::Table if products.is_empty() => println!("No products available."),
            OutputFormat::Table => {
                for product in &products {
                    println!("{product}");
                }
            }
        }
    }
    Ok(())
}

/// Print one product.
///
/// # Errors
///
/// Returns `CliError::ProductNotFound` if the ID is unknown.
pub async fn show(pool: &SqlitePool, session: &Session, id: ProductId) -> Result<(), CliError> {
    let product = find(&CatalogService::new(pool), session, id).await?;

    #[allow(clippy::print_stdout)]
    {
        println!("{product}");
    }
    Ok(())
}

/// Add a product.
///
/// # Errors
///
/// Returns a storage error if the insert fails.
pub async fn add(
    pool: &SqlitePool,
    session: &Session,
    name: String,
    description: String,
    quantity: i64,
    price: Price,
) -> Result<(), CliError> {
    let input = ProductInput::new(name, description, quantity, price);
    let product = CatalogService::new(pool)
        .add_product(session, &input)
        .await?;

    #[allow(clippy::print_stdout)]
    {
        println!("Product '{}' added with id {}.", product.name, product.id);
    }
    Ok(())
}

/// Update a product, keeping the current value of every field not given.
///
/// # Errors
///
/// Returns `CliError::ProductNotFound` if the ID is unknown.
pub async fn update(
    pool: &SqlitePool,
    session: &Session,
    id: ProductId,
    changes: ProductChanges,
) -> Result<(), CliError> {
    let catalog = CatalogService::new(pool);
    let current = find(&catalog, session, id).await?;

    let input = changes.apply(&current);
    catalog.update_product(session, id, &input).await?;

    #[allow(clippy::print_stdout)]
    {
        println!("Product {id} updated.");
    }
    Ok(())
}

/// Show a product, then delete it.
///
/// # Errors
///
/// Returns `CliError::ProductNotFound` if the ID is unknown.
pub async fn delete(pool: &SqlitePool, session: &Session, id: ProductId) -> Result<(), CliError> {
    let catalog = CatalogService::new(pool);
    let product = find(&catalog, session, id).await?;

    catalog.delete_product(session, id).await?;

    #[allow(clippy::print_stdout)]
    {
        println!("{product}");
        println!("Product {id} deleted.");
    }
    Ok(())
}

/// Fetch a product the user selected, or report it missing.
async fn find(
    catalog: &CatalogService<'_>,
    session: &Session,
    id: ProductId,
) -> Result<Product, CliError> {
    catalog
        .get_product(session, id)
        .await?
        .ok_or(CliError::ProductNotFound(id))
}
