//! Runtime configuration, loaded from the environment with figment.
//!
//! All fields have defaults so the tool runs out of the box; any of them can
//! be overridden with an `AURORA_`-prefixed environment variable (read after
//! `dotenvy` has loaded `.env`).

use figment::providers::{Env, Serialized};
use figment::Figment;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::InitError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// SQLite connection string, e.g. `sqlite://aurora.db?mode=rwc`.
    pub database_url: String,
    /// Plaintext admin password; only its bcrypt hash is persisted.
    pub admin_password: String,
    /// Proxy address in URI form, `http://` or `socks5://`.
    pub proxy: String,
    pub proxy_enabled: bool,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: "sqlite://aurora.db?mode=rwc".to_string(),
            admin_password: "admin123".to_string(),
            proxy: "http://127.0.0.1:7890".to_string(),
            proxy_enabled: false,
            log_level: "INFO".to_string(),
        }
    }
}

impl AppConfig {
    /// Defaults merged with `AURORA_*` environment variables.
    pub fn load() -> Result<Self, InitError> {
        let cfg: AppConfig = Figment::from(Serialized::defaults(AppConfig::default()))
            .merge(Env::prefixed("AURORA_"))
            .extract()?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject proxy values that are not valid `http://` or `socks5://` URIs.
    /// The value itself is stored verbatim, not in normalized URL form.
    pub fn validate(&self) -> Result<(), InitError> {
        let proxy = Url::parse(&self.proxy)?;
        match proxy.scheme() {
            "http" | "socks5" => Ok(()),
            other => Err(InitError::UnsupportedProxyScheme(other.to_string())),
        }
    }
}
