//! Demonstration run of the inventory store.

use std::io::Write;

use anyhow::Context;

use stockroom_inventory::{Inventory, InventoryConfig, LoadOutcome, Removal};

/// Render names as a bracketed, single-quoted list: `['apple', 'pear']`.
pub fn name_list(names: &[String]) -> String {
    let quoted: Vec<String> = names.iter().map(|name| format!("'{name}'")).collect();
    format!("[{}]", quoted.join(", "))
}

/// Load, mutate, query and save the inventory at `config.data_path()`,
/// writing the user-facing output to `out`.
///
/// Recoverable conditions (missing data file, removing an unknown item) are
/// reported to `out`; a quantity overflow or a failed save is returned as an error.
pub fn run_demo(config: &InventoryConfig, out: &mut impl Write) -> anyhow::Result<Inventory> {
    let path = config.data_path();
    let mut inventory = Inventory::new();

    let outcome = inventory
        .load_data(path)
        .with_context(|| format!("failed to load inventory from {}", path.display()))?;
    if let LoadOutcome::StartedFresh { reason } = &outcome {
        writeln!(
            out,
            "Info: '{}' not found or corrupt ({reason}). Starting with empty inventory.",
            path.display()
        )?;
    }

    let mut log = Vec::new();
    inventory.add_item("apple", 10, Some(&mut log))?;
    inventory.add_item("banana", 12, Some(&mut log))?;

    for (item, qty) in [("apple", 3), ("orange", 1)] {
        if let Removal::NotFound = inventory.remove_item_logged(item, qty, &mut log)? {
            writeln!(out, "Error: Item '{item}' not in inventory.")?;
        }
    }
    for entry in &log {
        tracing::debug!(%entry, "mutation");
    }

    writeln!(out, "Apple stock: {}", inventory.get_qty("apple"))?;
    let low = inventory.check_low_items(config.low_stock_threshold());
    writeln!(out, "Low items: {}", name_list(&low))?;

    inventory
        .save_data(path)
        .with_context(|| format!("failed to save inventory to {}", path.display()))?;
    write!(out, "{}", inventory.report())?;

    Ok(inventory)
}
