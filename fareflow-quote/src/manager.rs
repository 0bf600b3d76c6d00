use std::sync::Arc;
use uuid::Uuid;

use fareflow_catalog::{compute_dynamic_price, InventoryStore};
use fareflow_core::{CoreError, CoreResult};

use crate::models::{PriceSession, SessionView, DEFAULT_TTL_SECONDS};
use crate::store::SessionStore;

/// Issues and evaluates time-bound price quotes against the catalog.
pub struct SessionManager {
    inventory: Arc<dyn InventoryStore>,
    sessions: Arc<dyn SessionStore>,
    ttl_seconds: i64,
}

impl SessionManager {
    pub fn new(inventory: Arc<dyn InventoryStore>, sessions: Arc<dyn SessionStore>) -> Self {
        Self::with_ttl(inventory, sessions, DEFAULT_TTL_SECONDS)
    }

    pub fn with_ttl(
        inventory: Arc<dyn InventoryStore>,
        sessions: Arc<dyn SessionStore>,
        ttl_seconds: i64,
    ) -> Self {
        Self {
            inventory,
            sessions,
            ttl_seconds,
        }
    }

    /// Issue a quote for an inventory item, snapshotting its current
    /// dynamic price for the validity window.
    ///
    /// A quote is not a reservation: stock is never decremented here, so
    /// two sessions may reference the same dwindling unit.
    pub async fn create_session(&self, inventory_id: Uuid) -> CoreResult<SessionView> {
        let item = self
            .inventory
            .get_item(inventory_id)
            .await?
            .ok_or_else(|| CoreError::NotFound(format!("inventory item {inventory_id}")))?;

        if item.is_sold_out() {
            return Err(CoreError::Conflict(format!("item {} is sold out", item.id)));
        }

        let price_snapshot =
            compute_dynamic_price(item.base_price, item.remaining_stock, item.total_stock)?;

        let session = PriceSession::new(item.id, item.name.clone(), price_snapshot, self.ttl_seconds);
        self.sessions.save_session(&session).await?;

        Ok(session.view())
    }

    /// Look up a quote by token and evaluate its countdown. The stored
    /// snapshot is returned as-is; an expired session is a normal terminal
    /// state, not an error.
    pub async fn get_session(&self, token: &str) -> CoreResult<SessionView> {
        let session = self
            .sessions
            .get_session(token)
            .await?
            .ok_or_else(|| CoreError::NotFound(format!("price session for token {token}")))?;

        Ok(session.view())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SessionStatus;
    use crate::store::MemorySessionStore;
    use chrono::{Duration, Utc};
    use fareflow_catalog::{InventoryItem, MemoryInventoryStore, NewInventoryItem};

    async fn seed_item(
        inventory: &MemoryInventoryStore,
        total: i64,
        remaining: i64,
        base: i64,
    ) -> InventoryItem {
        let item = NewInventoryItem {
            name: "Hawaii charter, seat block B".to_string(),
            category: "flight".to_string(),
            description: None,
            total_stock: total,
            remaining_stock: remaining,
            base_price: base,
        }
        .into_item()
        .unwrap();
        inventory.create_item(&item).await.unwrap();
        item
    }

    fn manager(
        inventory: Arc<MemoryInventoryStore>,
        sessions: Arc<MemorySessionStore>,
    ) -> SessionManager {
        SessionManager::new(inventory, sessions)
    }

    #[tokio::test]
    async fn test_create_then_get_returns_same_snapshot() {
        let inventory = Arc::new(MemoryInventoryStore::new());
        let sessions = Arc::new(MemorySessionStore::new());
        let item = seed_item(&inventory, 10, 1, 80000).await;
        let manager = manager(inventory, sessions);

        let created = manager.create_session(item.id).await.unwrap();
        // ratio 0.1 -> multiplier 1.4
        assert_eq!(created.price_snapshot, 112000);
        assert!(created.remaining_seconds > 895 && created.remaining_seconds <= 900);

        let fetched = manager.get_session(&created.token).await.unwrap();
        assert_eq!(fetched.price_snapshot, created.price_snapshot);
        assert_eq!(fetched.product_name, "Hawaii charter, seat block B");
        assert!(fetched.remaining_seconds > 895 && fetched.remaining_seconds <= 900);
    }

    #[tokio::test]
    async fn test_snapshot_survives_stock_change() {
        let inventory = Arc::new(MemoryInventoryStore::new());
        let sessions = Arc::new(MemorySessionStore::new());
        let item = seed_item(&inventory, 10, 10, 80000).await;
        let manager = manager(inventory.clone(), sessions);

        let created = manager.create_session(item.id).await.unwrap();
        assert_eq!(created.price_snapshot, 56000);

        // Stock collapses after the quote was issued
        inventory.update_remaining_stock(item.id, 1).await.unwrap();

        let fetched = manager.get_session(&created.token).await.unwrap();
        assert_eq!(fetched.price_snapshot, 56000);

        // A new session sees the new scarcity
        let fresh = manager.create_session(item.id).await.unwrap();
        assert_eq!(fresh.price_snapshot, 112000);
    }

    #[tokio::test]
    async fn test_expired_session_keeps_snapshot() {
        let inventory = Arc::new(MemoryInventoryStore::new());
        let sessions = Arc::new(MemorySessionStore::new());
        seed_item(&inventory, 10, 5, 80000).await;

        // Persist a session created over 900 seconds ago
        let mut stale = PriceSession::new(Uuid::new_v4(), "Old quote".to_string(), 80000, 900);
        stale.created_at = Utc::now() - Duration::seconds(901);
        sessions.save_session(&stale).await.unwrap();

        let manager = manager(inventory, sessions);
        let view = manager.get_session(&stale.token).await.unwrap();
        assert_eq!(view.remaining_seconds, 0);
        assert_eq!(view.status, SessionStatus::Expired);
        assert_eq!(view.price_snapshot, 80000);
    }

    #[tokio::test]
    async fn test_unknown_inventory_id_is_not_found() {
        let inventory = Arc::new(MemoryInventoryStore::new());
        let sessions = Arc::new(MemorySessionStore::new());
        let manager = manager(inventory, sessions);

        let err = manager.create_session(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, CoreError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_unknown_token_is_not_found() {
        let inventory = Arc::new(MemoryInventoryStore::new());
        let sessions = Arc::new(MemorySessionStore::new());
        let manager = manager(inventory, sessions);

        let err = manager.get_session("garbled-token").await.unwrap_err();
        assert!(matches!(err, CoreError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_sold_out_item_is_conflict() {
        let inventory = Arc::new(MemoryInventoryStore::new());
        let sessions = Arc::new(MemorySessionStore::new());
        let item = seed_item(&inventory, 10, 0, 80000).await;
        let manager = manager(inventory, sessions);

        let err = manager.create_session(item.id).await.unwrap_err();
        assert!(matches!(err, CoreError::Conflict(_)));
    }
}
