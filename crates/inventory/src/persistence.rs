//! JSON file persistence for [`Inventory`].
//!
//! The data file is a single JSON object mapping item name to quantity,
//! pretty-printed with four-space indentation. Writes overwrite the file in
//! full; there is no atomic rename or backup.

use std::fs;
use std::io;
use std::path::Path;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use stockroom_core::{InventoryError, InventoryResult};

use crate::store::Inventory;

const INDENT: &[u8] = b"    ";

/// Result of [`Inventory::load_data`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The file was read and replaced the in-memory inventory.
    Loaded { items: usize },
    /// The file was missing or unreadable as an inventory; started empty.
    StartedFresh { reason: String },
}

impl LoadOutcome {
    pub fn started_fresh(&self) -> bool {
        matches!(self, LoadOutcome::StartedFresh { .. })
    }
}

impl Inventory {
    /// Replace the inventory with the content of the file at `path`.
    ///
    /// A missing file or content that is not a name -> integer object resets
    /// the inventory to empty and returns [`LoadOutcome::StartedFresh`]. Other
    /// I/O failures are returned as errors and leave the inventory untouched.
    pub fn load_data(&mut self, path: impl AsRef<Path>) -> InventoryResult<LoadOutcome> {
        let path = path.as_ref();

        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Ok(self.start_fresh(path, e.to_string()));
            }
            Err(e) => return Err(InventoryError::io(path, e)),
        };

        match serde_json::from_str::<Inventory>(&raw) {
            Ok(loaded) => {
                let count = loaded.len();
                self.replace(loaded);
                tracing::debug!(path = %path.display(), items = count, "inventory loaded");
                Ok(LoadOutcome::Loaded { items: count })
            }
            Err(e) => Ok(self.start_fresh(path, e.to_string())),
        }
    }

    /// Overwrite the file at `path` with the whole inventory.
    pub fn save_data(&self, path: impl AsRef<Path>) -> InventoryResult<()> {
        let path = path.as_ref();
        let encoded = self.to_pretty_json()?;
        fs::write(path, encoded).map_err(|e| InventoryError::io(path, e))?;
        tracing::debug!(path = %path.display(), items = self.len(), "inventory saved");
        Ok(())
    }

    /// Encode the inventory the way it is written to disk.
    pub fn to_pretty_json(&self) -> InventoryResult<Vec<u8>> {
        let mut buf = Vec::new();
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
        self.serialize(&mut ser)?;
        Ok(buf)
    }

    fn start_fresh(&mut self, path: &Path, reason: String) -> LoadOutcome {
        tracing::info!(path = %path.display(), %reason, "data file not found or corrupt; starting empty");
        self.replace(Inventory::new());
        LoadOutcome::StartedFresh { reason }
    }
}
