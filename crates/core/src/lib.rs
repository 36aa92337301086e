//! Spendwise Core - Domain entities, services, and traits.
//!
//! This crate contains the business logic of the expense tracker: categories,
//! expenses, budgets and the reporting engine that aggregates spend per day,
//! week and month. It is database-agnostic and defines traits that are
//! implemented by the `storage-sqlite` crate.

pub mod budgets;
pub mod categories;
pub mod constants;
pub mod errors;
pub mod expenses;
pub mod pagination;
pub mod reports;
pub mod utils;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
