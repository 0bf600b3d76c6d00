use chrono::{DateTime, Utc};
use fareflow_core::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A sellable unit of travel stock (charter seat block, hotel room, tour slot).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub description: Option<String>,
    /// Capacity fixed at creation.
    pub total_stock: i64,
    /// Mutated only by admin updates. Always within 0..=total_stock.
    pub remaining_stock: i64,
    /// Cost basis in whole yen. Never exposed to non-admin callers.
    pub base_price: i64,
    pub created_at: DateTime<Utc>,
}

impl InventoryItem {
    pub fn is_sold_out(&self) -> bool {
        self.remaining_stock <= 0
    }

    /// Bounds check for an admin stock update.
    pub fn validate_stock_update(&self, new_value: i64) -> CoreResult<()> {
        if new_value < 0 || new_value > self.total_stock {
            return Err(CoreError::InvalidInput(format!(
                "remaining_stock must be within 0..={}, got {}",
                self.total_stock, new_value
            )));
        }
        Ok(())
    }
}

/// Creation payload for an inventory item (admin only).
#[derive(Debug, Clone, Deserialize)]
pub struct NewInventoryItem {
    pub name: String,
    pub category: String,
    pub description: Option<String>,
    pub total_stock: i64,
    pub remaining_stock: i64,
    pub base_price: i64,
}

impl NewInventoryItem {
    /// Validate the payload and mint the item.
    pub fn into_item(self) -> CoreResult<InventoryItem> {
        if self.total_stock < 1 {
            return Err(CoreError::InvalidInput(format!(
                "total_stock must be >= 1, got {}",
                self.total_stock
            )));
        }
        if self.remaining_stock < 0 || self.remaining_stock > self.total_stock {
            return Err(CoreError::InvalidInput(format!(
                "remaining_stock must be within 0..={}, got {}",
                self.total_stock, self.remaining_stock
            )));
        }
        if self.base_price < 0 {
            return Err(CoreError::InvalidInput(format!(
                "base_price must be >= 0, got {}",
                self.base_price
            )));
        }

        Ok(InventoryItem {
            id: Uuid::new_v4(),
            name: self.name,
            category: self.category,
            description: self.description,
            total_stock: self.total_stock,
            remaining_stock: self.remaining_stock,
            base_price: self.base_price,
            created_at: Utc::now(),
        })
    }
}
