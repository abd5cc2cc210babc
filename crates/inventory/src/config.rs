//! Store configuration (data file location, low-stock threshold).

use std::path::{Path, PathBuf};

/// Data file used when no path is given.
pub const DEFAULT_DATA_PATH: &str = "inventory.json";

/// Items strictly below this quantity are reported as low.
pub const DEFAULT_LOW_STOCK_THRESHOLD: i64 = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryConfig {
    data_path: PathBuf,
    low_stock_threshold: i64,
}

impl InventoryConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_data_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_path = path.into();
        self
    }

    pub fn with_low_stock_threshold(mut self, threshold: i64) -> Self {
        self.low_stock_threshold = threshold;
        self
    }

    pub fn data_path(&self) -> &Path {
        &self.data_path
    }

    pub fn low_stock_threshold(&self) -> i64 {
        self.low_stock_threshold
    }
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_inventory_json_with_threshold_five() {
        let config = InventoryConfig::new();
        assert_eq!(config.data_path(), Path::new("inventory.json"));
        assert_eq!(config.low_stock_threshold(), 5);
    }

    #[test]
    fn builder_overrides_fields() {
        let config = InventoryConfig::new()
            .with_data_path("/tmp/stock.json")
            .with_low_stock_threshold(2);
        assert_eq!(config.data_path(), Path::new("/tmp/stock.json"));
        assert_eq!(config.low_stock_threshold(), 2);
    }
}
