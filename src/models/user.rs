use chrono::{DateTime, Utc};
use rusqlite::Row;
use serde::{Deserialize, Serialize};

use super::FromSqliteRow;

#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: String,
    pub username: String,
    #[serde(skip_serializing)]
    pub created_at: DateTime<Utc>,
}

impl FromSqliteRow for User {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            username: row.get("username")?,
            created_at: row.get("created_at")?,
        })
    }
}

/// Username is kept exactly as sent; only its absence is rejected.
#[derive(Debug, Deserialize)]
pub struct CreateUser {
    pub username: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_serializes_public_fields_only() {
        let user = User {
            id: "abc".to_string(),
            username: "fcc_test".to_string(),
            created_at: Utc::now(),
        };

        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "id": "abc", "username": "fcc_test" })
        );
    }

    #[test]
    fn test_create_user_missing_username_is_none() {
        let payload: CreateUser = serde_json::from_str("{}").unwrap();
        assert_eq!(payload.username, None);
    }

    #[test]
    fn test_create_user_keeps_whitespace() {
        let payload: CreateUser = serde_json::from_str(r#"{"username":"  bob  "}"#).unwrap();
        assert_eq!(payload.username.as_deref(), Some("  bob  "));
    }
}
