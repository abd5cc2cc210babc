use std::fs;

use stockroom_cli::run_demo;
use stockroom_inventory::InventoryConfig;
use tempfile::TempDir;

fn run(config: &InventoryConfig) -> String {
    let mut out = Vec::new();
    run_demo(config, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn fresh_run_reports_and_saves() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("inventory.json");
    let config = InventoryConfig::new().with_data_path(&path);

    let output = run(&config);

    let lines: Vec<&str> = output.lines().collect();
    assert!(lines[0].starts_with(&format!("Info: '{}' not found or corrupt (", path.display())));
    assert!(lines[0].ends_with("). Starting with empty inventory."));
    assert_eq!(
        &lines[1..],
        &[
            "Error: Item 'orange' not in inventory.",
            "Apple stock: 7",
            "Low items: []",
            "--- Items Report ---",
            "apple -> 7",
            "banana -> 12",
            "--------------------",
        ]
    );

    let saved: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(saved, serde_json::json!({ "apple": 7, "banana": 12 }));
}

#[test]
fn second_run_builds_on_saved_state() {
    let dir = TempDir::new().unwrap();
    let config = InventoryConfig::new().with_data_path(dir.path().join("inventory.json"));

    run(&config);
    let output = run(&config);

    assert!(!output.contains("Info:"));
    assert!(output.contains("Apple stock: 14\n"));
    assert!(output.contains("banana -> 24\n"));
}

#[test]
fn threshold_comes_from_config() {
    let dir = TempDir::new().unwrap();
    let config = InventoryConfig::new()
        .with_data_path(dir.path().join("inventory.json"))
        .with_low_stock_threshold(10);

    let output = run(&config);

    assert!(output.contains("Low items: ['apple']\n"));
}

#[test]
fn unwritable_path_fails_the_run() {
    let dir = TempDir::new().unwrap();
    let config = InventoryConfig::new().with_data_path(dir.path().join("missing").join("inventory.json"));

    let mut out = Vec::new();
    let err = run_demo(&config, &mut out).unwrap_err();

    assert!(err.to_string().contains("failed to save inventory"));
}

#[test]
fn overflowing_saved_stock_fails_the_run_and_keeps_the_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("inventory.json");
    let original = format!(r#"{{"apple": {}}}"#, i64::MAX);
    fs::write(&path, &original).unwrap();
    let config = InventoryConfig::new().with_data_path(&path);

    let mut out = Vec::new();
    let err = run_demo(&config, &mut out).unwrap_err();

    assert!(err.to_string().contains("quantity overflow for item 'apple'"));
    assert_eq!(fs::read_to_string(&path).unwrap(), original);
}
