use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One configuration item to be persisted: key, value and a human-readable
/// description. Row id and timestamp are assigned by the storage layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Setting {
    pub key: String,
    pub value: String,
    pub description: String,
}

impl Setting {
    pub fn new(
        key: impl Into<String>,
        value: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            description: description.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DbSetting {
    pub id: i64,
    pub key: String,
    pub value: String,
    pub description: String,
    pub updated_at: DateTime<Utc>,
}
