pub mod config;
pub mod db;
pub mod error;
pub mod seed;

pub use config::AppConfig;
pub use error::InitError;
pub use seed::{SeedOutcome, seed_default_settings};
