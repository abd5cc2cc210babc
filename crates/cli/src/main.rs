use stockroom_inventory::InventoryConfig;

fn main() -> anyhow::Result<()> {
    stockroom_observability::init();

    let config = InventoryConfig::default();
    tracing::info!(path = %config.data_path().display(), "running inventory demo");

    let mut stdout = std::io::stdout().lock();
    stockroom_cli::run_demo(&config, &mut stdout)?;
    Ok(())
}
