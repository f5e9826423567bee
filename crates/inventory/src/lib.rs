//! Stockroom inventory library.
//!
//! Account registration/login and product catalog CRUD on top of a single
//! embedded `SQLite` database.
//!
//! # Layout
//!
//! - [`config`] - Environment-driven configuration
//! - [`db`] - Connection pool, migrations and repositories
//! - [`models`] - Domain records (`User`, `Session`, `Product`)
//! - [`password`] - Password digests
//! - [`services`] - `AccountService` and `CatalogService`
//!
//! The storage handle is always passed in explicitly; there is no global
//! connection.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod models;
pub mod password;
pub mod services;

pub use services::{AccountError, AccountService, CatalogService};
