//! Inventory error model.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type used across the inventory crates.
pub type InventoryResult<T> = Result<T, InventoryError>;

/// Inventory-level error.
///
/// Recoverable conditions (a missing item on removal, a missing or corrupt
/// data file on load) are modelled as values by the store and never surface
/// here unless a caller asks for it.
#[derive(Debug, Error)]
pub enum InventoryError {
    /// The named item is not held in the inventory.
    #[error("item '{0}' not in inventory")]
    ItemNotFound(String),

    /// A stock change would take the quantity outside the `i64` range.
    #[error("quantity overflow for item '{0}'")]
    QuantityOverflow(String),

    /// Reading or writing the data file failed.
    #[error("i/o error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The inventory could not be encoded.
    #[error("failed to serialize inventory: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl InventoryError {
    pub fn item_not_found(item: impl Into<String>) -> Self {
        Self::ItemNotFound(item.into())
    }

    pub fn quantity_overflow(item: impl Into<String>) -> Self {
        Self::QuantityOverflow(item.into())
    }

    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether this error is the "not found" condition.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ItemNotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_not_found_message_names_the_item() {
        let err = InventoryError::item_not_found("orange");
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "item 'orange' not in inventory");
    }

    #[test]
    fn quantity_overflow_names_the_item() {
        let err = InventoryError::quantity_overflow("apple");
        assert!(!err.is_not_found());
        assert_eq!(err.to_string(), "quantity overflow for item 'apple'");
    }

    #[test]
    fn io_error_keeps_path_and_source() {
        let err = InventoryError::io(
            "missing/inventory.json",
            io::Error::new(io::ErrorKind::NotFound, "no such directory"),
        );
        assert!(!err.is_not_found());
        let msg = err.to_string();
        assert!(msg.contains("missing/inventory.json"));
        assert!(msg.contains("no such directory"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
