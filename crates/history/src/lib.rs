//! # Tally History Library
//!
//! Calculation records and their persistence. A `Calculation` captures one
//! evaluation (operation key, both operands, result, UTC timestamp); the
//! `HistoryStore` keeps a size-capped, chronological list of them and reads
//! and writes the whole list as a CSV file.
//!
//! This crate consumes the `operations` core through its public contract
//! only: records are performed through a borrowed `OperationRegistry`, and
//! loading re-runs each stored calculation to catch rows whose persisted
//! result no longer matches what the core computes.

// Declare the modules that make up this crate.
pub mod calculation;
pub mod error;
pub mod store;

// Re-export the core types to provide a clean public API.
pub use calculation::Calculation;
pub use error::HistoryError;
pub use store::HistoryStore;
