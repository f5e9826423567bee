//! Seed the catalog with products from a YAML file.
//!
//! The file is a list of products:
//!
//! ```yaml
//! - name: Widget
//!   description: Blue widget
//!   quantity: 5
//!   price: 9.99
//! - name: Gadget
//!   quantity: 1
//!   price: "12.50"
//! ```
//!
//! Every entry is checked against the entry-form rules before anything is
//! inserted; one bad entry aborts the whole run.

use std::path::Path;

use sqlx::SqlitePool;
use tracing::{error, info};

use stockroom_inventory::CatalogService;
use stockroom_inventory::models::{ProductInput, Session};

use super::CliError;
use super::product::check_form_price;

/// Insert every product listed in `file_path`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, if any entry breaks
/// the form rules, or if an insert fails.
pub async fn products(
    pool: &SqlitePool,
    session: &Session,
    file_path: &str,
) -> Result<(), CliError> {
    info!(path = %file_path, "Loading products from file");

    // Read and validate YAML before touching the database
    let content = tokio::fs::read_to_string(Path::new(file_path))
        .await
        .map_err(|source| CliError::ReadFile {
            path: file_path.to_owned(),
            source,
        })?;
    let entries = parse_entries(&content)?;

    info!(products = entries.len(), "Parsed seed file");

    let errors = validate_entries(&entries);
    if !errors.is_empty() {
        error!("Seed file validation failed:");
        for err in &errors {
            error!("  - {err}");
        }
        return Err(CliError::InvalidSeed(errors.len()));
    }

    let catalog = CatalogService::new(pool);
    for entry in &entries {
        catalog.add_product(session, entry).await?;
    }

    info!(inserted = entries.len(), "Seeding complete!");
    Ok(())
}

fn parse_entries(content: &str) -> Result<Vec<ProductInput>, CliError> {
    Ok(serde_yaml::from_str(content)?)
}

/// Check entries against the entry-form rules. Returns one message per
/// offending entry (1-based index).
fn validate_entries(entries: &[ProductInput]) -> Vec<String> {
    entries
        .iter()
        .enumerate()
        .filter_map(|(i, entry)| {
            let mut problems = Vec::new();
            if entry.name.trim().is_empty() {
                problems.push("name is empty".to_owned());
            }
            if entry.quantity < 1 {
                problems.push(format!("quantity {} is below 1", entry.quantity));
            }
            if let Err(e) = check_form_price(entry.price) {
                problems.push(e);
            }
            (!problems.is_empty()).then(|| format!("entry {}: {}", i + 1, problems.join(", ")))
        })
        .collect()
}
