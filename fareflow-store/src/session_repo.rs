use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Pool, Row, Sqlite};
use uuid::Uuid;

use fareflow_quote::{PriceSession, SessionStore};

use crate::database::Database;

/// SQLite implementation of the session port. Rows are write-once; expiry
/// is evaluated in code against created_at + ttl_seconds.
pub struct SqliteSessionStore {
    pool: Pool<Sqlite>,
}

impl SqliteSessionStore {
    pub fn new(db: &Database) -> Self {
        Self {
            pool: db.pool.clone(),
        }
    }
}

fn row_to_session(row: &SqliteRow) -> Result<PriceSession, Box<dyn std::error::Error + Send + Sync>> {
    let inventory_id: String = row.try_get("inventory_id")?;
    Ok(PriceSession {
        token: row.try_get("token")?,
        inventory_id: Uuid::parse_str(&inventory_id)?,
        product_name: row.try_get("product_name")?,
        price_snapshot: row.try_get("price_snapshot")?,
        created_at: row.try_get("created_at")?,
        ttl_seconds: row.try_get("ttl_seconds")?,
    })
}

#[async_trait]
impl SessionStore for SqliteSessionStore {
    async fn save_session(
        &self,
        session: &PriceSession,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        sqlx::query(
            r#"
            INSERT INTO price_sessions (token, inventory_id, product_name, price_snapshot, created_at, ttl_seconds)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&session.token)
        .bind(session.inventory_id.to_string())
        .bind(&session.product_name)
        .bind(session.price_snapshot)
        .bind(session.created_at)
        .bind(session.ttl_seconds)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn get_session(
        &self,
        token: &str,
    ) -> Result<Option<PriceSession>, Box<dyn std::error::Error + Send + Sync>> {
        let row = sqlx::query("SELECT * FROM price_sessions WHERE token = ?")
            .bind(token)
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(row) => Ok(Some(row_to_session(&row)?)),
            None => Ok(None),
        }
    }

    async fn purge_expired(
        &self,
        now: DateTime<Utc>,
    ) -> Result<usize, Box<dyn std::error::Error + Send + Sync>> {
        let rows = sqlx::query("SELECT * FROM price_sessions")
            .fetch_all(&self.pool)
            .await?;

        let mut purged = 0;
        for row in &rows {
            let session = row_to_session(row)?;
            if session.remaining_seconds_at(now) == 0 {
                sqlx::query("DELETE FROM price_sessions WHERE token = ?")
                    .bind(&session.token)
                    .execute(&self.pool)
                    .await?;
                purged += 1;
            }
        }
        Ok(purged)
    }

    async fn active_count(
        &self,
        now: DateTime<Utc>,
    ) -> Result<usize, Box<dyn std::error::Error + Send + Sync>> {
        let rows = sqlx::query("SELECT * FROM price_sessions")
            .fetch_all(&self.pool)
            .await?;

        let mut active = 0;
        for row in &rows {
            if row_to_session(row)?.remaining_seconds_at(now) > 0 {
                active += 1;
            }
        }
        Ok(active)
    }
}
