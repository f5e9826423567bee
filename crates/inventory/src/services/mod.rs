//! Business logic services.
//!
//! # Services
//!
//! - `account` - Registration and password login
//! - `catalog` - Product list/get/add/update/delete
//!
//! The two services never call each other; they share only the pool they are
//! constructed with.

pub mod account;
pub mod catalog;

pub use account::{AccountError, AccountService};
pub use catalog::CatalogService;
