use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::item::InventoryItem;

/// Port for inventory persistence. Unknown ids are reported as `Ok(None)`
/// by `get_item`; the boundary layer decides what "not found" means.
#[async_trait]
pub trait InventoryStore: Send + Sync {
    async fn create_item(
        &self,
        item: &InventoryItem,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;

    async fn get_item(
        &self,
        id: Uuid,
    ) -> Result<Option<InventoryItem>, Box<dyn std::error::Error + Send + Sync>>;

    async fn list_items(
        &self,
    ) -> Result<Vec<InventoryItem>, Box<dyn std::error::Error + Send + Sync>>;

    /// Last write wins; bounds are validated by the caller.
    async fn update_remaining_stock(
        &self,
        id: Uuid,
        new_value: i64,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;

    async fn delete_item(
        &self,
        id: Uuid,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}

/// In-memory inventory store. Used by tests and demos; the SQLite
/// implementation lives in fareflow-store.
pub struct MemoryInventoryStore {
    items: RwLock<HashMap<Uuid, InventoryItem>>,
}

impl MemoryInventoryStore {
    pub fn new() -> Self {
        Self {
            items: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for MemoryInventoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl InventoryStore for MemoryInventoryStore {
    async fn create_item(
        &self,
        item: &InventoryItem,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.items.write().await.insert(item.id, item.clone());
        Ok(())
    }

    async fn get_item(
        &self,
        id: Uuid,
    ) -> Result<Option<InventoryItem>, Box<dyn std::error::Error + Send + Sync>> {
        Ok(self.items.read().await.get(&id).cloned())
    }

    async fn list_items(
        &self,
    ) -> Result<Vec<InventoryItem>, Box<dyn std::error::Error + Send + Sync>> {
        let mut items: Vec<InventoryItem> = self.items.read().await.values().cloned().collect();
        items.sort_by_key(|item| item.created_at);
        Ok(items)
    }

    async fn update_remaining_stock(
        &self,
        id: Uuid,
        new_value: i64,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        if let Some(item) = self.items.write().await.get_mut(&id) {
            item.remaining_stock = new_value;
        }
        Ok(())
    }

    async fn delete_item(
        &self,
        id: Uuid,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.items.write().await.remove(&id);
        Ok(())
    }
}
