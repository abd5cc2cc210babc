//! The in-memory [`Inventory`] and its mutation and query operations.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use stockroom_core::{InventoryError, InventoryResult};

use crate::mutation_log::{Action, LogEntry};

const REPORT_HEADER: &str = "--- Items Report ---";
const REPORT_FOOTER: &str = "--------------------";

/// Outcome of [`Inventory::remove_item`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Removal {
    /// The item is still held with this quantity.
    Remaining(i64),
    /// The quantity reached zero or below and the item was dropped.
    Depleted,
    /// The item was not held; nothing changed.
    NotFound,
}

impl Removal {
    pub fn is_not_found(self) -> bool {
        matches!(self, Removal::NotFound)
    }

    /// Turn `NotFound` into an error for callers that propagate with `?`.
    pub fn into_result(self, item: &str) -> InventoryResult<Removal> {
        match self {
            Removal::NotFound => Err(InventoryError::item_not_found(item)),
            other => Ok(other),
        }
    }
}

/// In-memory stock: item name -> quantity.
///
/// Invariant: mutations through `add_item`/`remove_item` never leave an item
/// stored with a quantity <= 0. Content replaced by `load_data` is stored as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inventory {
    items: BTreeMap<String, i64>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn replace(&mut self, other: Inventory) {
        *self = other;
    }

    /// Add `qty` of `item`, appending a log entry to `log` when one is given.
    ///
    /// An empty item name is ignored and produces no entry. The quantity is not
    /// sign-checked; if the resulting stock is <= 0 the item is dropped. A
    /// result outside the `i64` range fails with
    /// [`InventoryError::QuantityOverflow`] and leaves the inventory unchanged.
    pub fn add_item(
        &mut self,
        item: &str,
        qty: i64,
        log: Option<&mut Vec<LogEntry>>,
    ) -> InventoryResult<Option<LogEntry>> {
        if item.is_empty() {
            return Ok(None);
        }

        let stock = self
            .items
            .get(item)
            .copied()
            .unwrap_or(0)
            .checked_add(qty)
            .ok_or_else(|| InventoryError::quantity_overflow(item))?;
        if stock > 0 {
            self.items.insert(item.to_string(), stock);
        } else {
            self.items.remove(item);
        }
        tracing::debug!(item, qty, stock, "stock added");

        let entry = LogEntry::new(Action::Added, item, qty);
        if let Some(log) = log {
            log.push(entry.clone());
        }
        Ok(Some(entry))
    }

    /// Subtract `qty` of `item`.
    ///
    /// A missing item is reported through [`Removal::NotFound`] and leaves the
    /// inventory untouched. A result outside the `i64` range fails with
    /// [`InventoryError::QuantityOverflow`], also without touching the inventory.
    pub fn remove_item(&mut self, item: &str, qty: i64) -> InventoryResult<Removal> {
        let Some(stock) = self.items.get_mut(item) else {
            tracing::warn!(item, "item not in inventory");
            return Ok(Removal::NotFound);
        };

        let remaining = stock
            .checked_sub(qty)
            .ok_or_else(|| InventoryError::quantity_overflow(item))?;
        tracing::debug!(item, qty, stock = remaining, "stock removed");

        if remaining <= 0 {
            self.items.remove(item);
            Ok(Removal::Depleted)
        } else {
            *stock = remaining;
            Ok(Removal::Remaining(remaining))
        }
    }

    /// Like [`Inventory::remove_item`], recording successful removals in `log`.
    pub fn remove_item_logged(
        &mut self,
        item: &str,
        qty: i64,
        log: &mut Vec<LogEntry>,
    ) -> InventoryResult<Removal> {
        let removal = self.remove_item(item, qty)?;
        if !removal.is_not_found() {
            log.push(LogEntry::new(Action::Removed, item, qty));
        }
        Ok(removal)
    }

    /// Current quantity of `item`, or 0 when it is not held.
    pub fn get_qty(&self, item: &str) -> i64 {
        self.items.get(item).copied().unwrap_or(0)
    }

    /// Names of items whose quantity is strictly below `threshold`.
    pub fn check_low_items(&self, threshold: i64) -> Vec<String> {
        self.items
            .iter()
            .filter(|(_, qty)| **qty < threshold)
            .map(|(item, _)| item.clone())
            .collect()
    }

    pub fn contains(&self, item: &str) -> bool {
        self.items.contains_key(item)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.items.iter().map(|(item, qty)| (item.as_str(), *qty))
    }

    /// Human-readable listing of every item, framed by a header and footer.
    pub fn report(&self) -> String {
        self.to_string()
    }

    /// Print [`Inventory::report`] to stdout.
    pub fn print_data(&self) {
        print!("{self}");
    }
}

impl core::fmt::Display for Inventory {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{REPORT_HEADER}")?;
        for (item, qty) in self.iter() {
            writeln!(f, "{item} -> {qty}")?;
        }
        writeln!(f, "{REPORT_FOOTER}")
    }
}
