//! Inventory store: item quantities held in memory and persisted to a JSON file.
//!
//! All state lives in an explicit [`Inventory`] value; there is no process-wide
//! singleton. File I/O happens only in [`Inventory::load_data`] and
//! [`Inventory::save_data`].

pub mod config;
pub mod mutation_log;
pub mod persistence;
pub mod store;

pub use config::{DEFAULT_DATA_PATH, DEFAULT_LOW_STOCK_THRESHOLD, InventoryConfig};
pub use mutation_log::{Action, LogEntry};
pub use persistence::LoadOutcome;
pub use store::{Inventory, Removal};
