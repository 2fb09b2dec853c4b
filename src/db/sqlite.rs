use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Pool, Row, Sqlite};

use crate::db::models::{DbSetting, Setting};
use crate::db::schema::SQLITE_INIT;
use crate::error::InitError;

pub type SqlitePool = Pool<Sqlite>;

#[derive(Clone)]
pub struct SettingsStorage {
    pool: SqlitePool,
}

impl SettingsStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn connect(database_url: &str) -> Result<Self, InitError> {
        let pool = SqlitePool::connect(database_url).await?;
        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Initialize the schema by executing the bundled DDL.
    pub async fn init_schema(&self) -> Result<(), InitError> {
        // execute multiple statements safely (SQLite supports multi-commands but sqlx::query doesn't)
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }

    pub async fn get(&self, key: &str) -> Result<Option<DbSetting>, InitError> {
        let row = sqlx::query(
            "SELECT id, key, value, description, updated_at FROM settings WHERE key = ?",
        )
        .bind(key)
        .fetch_optional(&self.pool)
        .await?;
        row.map(Self::row_to_model).transpose()
    }

    /// Insert all records in a single transaction. Any failure drops the
    /// transaction, rolling back every insert made so far.
    pub async fn insert_many(&self, items: Vec<Setting>) -> Result<(), InitError> {
        let mut tx = self.pool.begin().await?;
        let now = Utc::now().to_rfc3339();

        for item in items.into_iter() {
            sqlx::query(
                "INSERT INTO settings (key, value, description, updated_at) VALUES (?, ?, ?, ?)",
            )
            .bind(item.key)
            .bind(item.value)
            .bind(item.description)
            .bind(&now)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(())
    }

    pub async fn list_all(&self) -> Result<Vec<DbSetting>, InitError> {
        let rows = sqlx::query(
            "SELECT id, key, value, description, updated_at FROM settings ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        rows.into_iter().map(Self::row_to_model).collect()
    }

    fn row_to_model(row: SqliteRow) -> Result<DbSetting, InitError> {
        let id: i64 = row.try_get("id")?;
        let key: String = row.try_get("key")?;
        let value: String = row.try_get("value")?;
        let description: String = row.try_get("description")?;
        let updated_at_str: String = row.try_get("updated_at")?;

        let updated_at: DateTime<Utc> = chrono::DateTime::parse_from_rfc3339(&updated_at_str)
            .map_err(|e| sqlx::Error::Decode(Box::new(e)))?
            .with_timezone(&Utc);

        Ok(DbSetting {
            id,
            key,
            value,
            description,
            updated_at,
        })
    }
}
