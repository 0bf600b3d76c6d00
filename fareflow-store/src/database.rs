use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;
use std::time::Duration;
use tracing::info;

/// SQLite storage handle shared by the repositories.
#[derive(Clone)]
pub struct Database {
    pub pool: Pool<Sqlite>,
}

impl Database {
    pub async fn new(connection_string: &str) -> Result<Self, sqlx::Error> {
        let options = SqliteConnectOptions::from_str(connection_string)?.create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .connect_with(options)
            .await?;

        Ok(Self { pool })
    }

    /// Create the tables if they do not exist. Called once at startup.
    pub async fn ensure_schema(&self) -> Result<(), sqlx::Error> {
        info!("Ensuring database schema...");

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS inventory (
                id              TEXT PRIMARY KEY,
                name            TEXT NOT NULL,
                category        TEXT NOT NULL,
                description     TEXT,
                total_stock     INTEGER NOT NULL,
                remaining_stock INTEGER NOT NULL,
                base_price      INTEGER NOT NULL,
                created_at      TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS price_sessions (
                token          TEXT PRIMARY KEY,
                inventory_id   TEXT NOT NULL,
                product_name   TEXT NOT NULL,
                price_snapshot INTEGER NOT NULL,
                created_at     TEXT NOT NULL,
                ttl_seconds    INTEGER NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

#[cfg(test)]
pub(crate) async fn test_database() -> Database {
    // A single connection keeps every statement on the same in-memory DB.
    let options = SqliteConnectOptions::from_str("sqlite::memory:").unwrap();
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .unwrap();
    let db = Database { pool };
    db.ensure_schema().await.unwrap();
    db
}
