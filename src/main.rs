use anyhow::Context;
use projble::config::ChatConfig;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}

fn main() -> anyhow::Result<()> {
    // A missing .env is fine; the defaults cover local development.
    let _ = dotenvy::dotenv();
    init_tracing();

    let config = ChatConfig::from_env().context("invalid PROJBLE_* configuration")?;
    tracing::info!(
        responder = ?config.responder,
        endpoint = %config.endpoint,
        data_dir = %config.data_dir.display(),
        "starting PROJ-BLE chat"
    );

    dioxus::LaunchBuilder::new()
        .with_context(config)
        .launch(projble::ui::App);
    Ok(())
}
