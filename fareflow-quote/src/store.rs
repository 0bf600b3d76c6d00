use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::models::PriceSession;

/// Port for price-session persistence. Sessions are write-once; expiry is
/// computed on read, so nothing here mutates a stored record.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn save_session(
        &self,
        session: &PriceSession,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;

    async fn get_session(
        &self,
        token: &str,
    ) -> Result<Option<PriceSession>, Box<dyn std::error::Error + Send + Sync>>;

    /// Drop sessions whose validity window has closed. Storage reclamation
    /// only; correctness never depends on this running.
    async fn purge_expired(
        &self,
        now: DateTime<Utc>,
    ) -> Result<usize, Box<dyn std::error::Error + Send + Sync>>;

    async fn active_count(
        &self,
        now: DateTime<Utc>,
    ) -> Result<usize, Box<dyn std::error::Error + Send + Sync>>;
}

/// In-memory session store.
pub struct MemorySessionStore {
    sessions: RwLock<HashMap<String, PriceSession>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for MemorySessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn save_session(
        &self,
        session: &PriceSession,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.sessions
            .write()
            .await
            .insert(session.token.clone(), session.clone());
        Ok(())
    }

    async fn get_session(
        &self,
        token: &str,
    ) -> Result<Option<PriceSession>, Box<dyn std::error::Error + Send + Sync>> {
        Ok(self.sessions.read().await.get(token).cloned())
    }

    async fn purge_expired(
        &self,
        now: DateTime<Utc>,
    ) -> Result<usize, Box<dyn std::error::Error + Send + Sync>> {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, session| session.remaining_seconds_at(now) > 0);
        Ok(before - sessions.len())
    }

    async fn active_count(
        &self,
        now: DateTime<Utc>,
    ) -> Result<usize, Box<dyn std::error::Error + Send + Sync>> {
        Ok(self
            .sessions
            .read()
            .await
            .values()
            .filter(|session| session.remaining_seconds_at(now) > 0)
            .count())
    }
}
