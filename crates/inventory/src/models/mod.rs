//! Domain records returned by the services.
//!
//! These types are separate from the database row types in [`crate::db`].

pub mod product;
pub mod user;

pub use product::{Product, ProductInput};
pub use user::{Session, User};
