use mimalloc::MiMalloc;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cfg = aurora_init::config::AppConfig::load()?;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cfg.log_level.clone()));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_level(true)
                .with_target(false),
        )
        .init();

    info!(
        database_url = %cfg.database_url,
        proxy = %cfg.proxy,
        proxy_enabled = cfg.proxy_enabled,
        log_level = %cfg.log_level
    );

    info!("initializing database");
    let storage = aurora_init::db::SettingsStorage::connect(&cfg.database_url).await?;
    storage.init_schema().await?;
    info!("database schema ready");

    aurora_init::seed::seed_default_settings(&storage, &cfg).await?;

    info!("database initialization complete");
    Ok(())
}
