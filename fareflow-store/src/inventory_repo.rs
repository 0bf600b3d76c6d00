use async_trait::async_trait;
use sqlx::sqlite::SqliteRow;
use sqlx::{Pool, Row, Sqlite};
use uuid::Uuid;

use fareflow_catalog::{InventoryItem, InventoryStore};

use crate::database::Database;

/// SQLite implementation of the inventory port. Ids are stored as
/// hyphenated uuid text.
pub struct SqliteInventoryStore {
    pool: Pool<Sqlite>,
}

impl SqliteInventoryStore {
    pub fn new(db: &Database) -> Self {
        Self {
            pool: db.pool.clone(),
        }
    }
}

fn row_to_item(row: &SqliteRow) -> Result<InventoryItem, Box<dyn std::error::Error + Send + Sync>> {
    let id: String = row.try_get("id")?;
    Ok(InventoryItem {
        id: Uuid::parse_str(&id)?,
        name: row.try_get("name")?,
        category: row.try_get("category")?,
        description: row.try_get("description")?,
        total_stock: row.try_get("total_stock")?,
        remaining_stock: row.try_get("remaining_stock")?,
        base_price: row.try_get("base_price")?,
        created_at: row.try_get("created_at")?,
    })
}

#[async_trait]
impl InventoryStore for SqliteInventoryStore {
    async fn create_item(
        &self,
        item: &InventoryItem,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        sqlx::query(
            r#"
            INSERT INTO inventory (id, name, category, description, total_stock, remaining_stock, base_price, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(item.id.to_string())
        .bind(&item.name)
        .bind(&item.category)
        .bind(&item.description)
        .bind(item.total_stock)
        .bind(item.remaining_stock)
        .bind(item.base_price)
        .bind(item.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn get_item(
        &self,
        id: Uuid,
    ) -> Result<Option<InventoryItem>, Box<dyn std::error::Error + Send + Sync>> {
        let row = sqlx::query("SELECT * FROM inventory WHERE id = ?")
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(row) => Ok(Some(row_to_item(&row)?)),
            None => Ok(None),
        }
    }

    async fn list_items(
        &self,
    ) -> Result<Vec<InventoryItem>, Box<dyn std::error::Error + Send + Sync>> {
        let rows = sqlx::query("SELECT * FROM inventory ORDER BY created_at")
            .fetch_all(&self.pool)
            .await?;

        let mut items = Vec::with_capacity(rows.len());
        for row in &rows {
            items.push(row_to_item(row)?);
        }
        Ok(items)
    }

    async fn update_remaining_stock(
        &self,
        id: Uuid,
        new_value: i64,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        sqlx::query("UPDATE inventory SET remaining_stock = ? WHERE id = ?")
            .bind(new_value)
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn delete_item(
        &self,
        id: Uuid,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        sqlx::query("DELETE FROM inventory WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
