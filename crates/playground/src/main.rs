use anyhow::Context;

fn main() -> anyhow::Result<()> {
    solid_observability::init_default();

    let config = solid_playground::PlaygroundConfig::from_env()
        .context("invalid playground configuration")?;

    let summary = solid_playground::run(&config, std::io::stdout())?;

    tracing::info!(
        invoice_id = %summary.invoice_id,
        store = %config.store,
        persisted = summary.persisted.is_ok(),
        "playground finished"
    );
    Ok(())
}
