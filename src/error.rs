use bcrypt::BcryptError;
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum InitError {
    #[error("Config error: {0}")]
    Config(#[from] figment::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Unsupported proxy scheme '{0}' (expected http:// or socks5://)")]
    UnsupportedProxyScheme(String),

    #[error("Password hash error: {0}")]
    PasswordHash(#[from] BcryptError),

    #[error("Database error: {0}")]
    DatabaseError(#[from] SqlxError),
}
