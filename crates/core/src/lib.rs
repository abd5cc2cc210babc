//! `stockroom-core` — shared building blocks.
//!
//! This crate holds the error model used by the inventory store and its callers.

pub mod error;

pub use error::{InventoryError, InventoryResult};
