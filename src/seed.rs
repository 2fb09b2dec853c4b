//! One-shot seeding of the default settings rows.
//!
//! The `initialized` marker row guards against re-seeding: when it exists the
//! whole operation is a no-op. Otherwise exactly five rows are written in one
//! transaction, so readers never observe a partially seeded table.

use bcrypt::DEFAULT_COST;
use tracing::info;

use crate::config::AppConfig;
use crate::db::models::Setting;
use crate::db::sqlite::SettingsStorage;
use crate::error::InitError;

/// Key of the marker row that makes seeding idempotent.
pub const INITIALIZED_KEY: &str = "initialized";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    Seeded,
    AlreadyInitialized,
}

pub async fn seed_default_settings(
    storage: &SettingsStorage,
    cfg: &AppConfig,
) -> Result<SeedOutcome, InitError> {
    if storage.get(INITIALIZED_KEY).await?.is_some() {
        info!("database already initialized, skipping default settings");
        return Ok(SeedOutcome::AlreadyInitialized);
    }

    let password_hash = bcrypt::hash(&cfg.admin_password, DEFAULT_COST)?;

    let defaults = vec![
        Setting::new(INITIALIZED_KEY, "true", "database initialization marker"),
        Setting::new(
            "admin_password_hash",
            password_hash,
            "administrator password hash",
        ),
        Setting::new(
            "proxy",
            cfg.proxy.clone(),
            "proxy address (supports http:// and socks5://)",
        ),
        Setting::new(
            "proxy_enabled",
            cfg.proxy_enabled.to_string(),
            "whether outbound traffic goes through the proxy",
        ),
        Setting::new("log_level", cfg.log_level.clone(), "log level"),
    ];

    storage.insert_many(defaults).await?;
    info!("default settings created");
    Ok(SeedOutcome::Seeded)
}
