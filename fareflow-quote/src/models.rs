use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::token;

/// Default validity window for a price session: 15 minutes.
pub const DEFAULT_TTL_SECONDS: i64 = 900;

/// Session lifecycle. The transition is one-way and purely a function of
/// wall-clock time; no external event drives it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SessionStatus {
    Active,
    Expired,
}

/// A time-bound price quote. The snapshot is taken once at creation and
/// never recomputed, even if the underlying item's stock moves afterward.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceSession {
    pub token: String,
    pub inventory_id: Uuid,
    /// Item name at quote time, denormalized so the checkout view needs
    /// no catalog lookup.
    pub product_name: String,
    pub price_snapshot: i64,
    pub created_at: DateTime<Utc>,
    pub ttl_seconds: i64,
}

impl PriceSession {
    /// Create a session locking `price_snapshot` for `ttl_seconds` from now.
    pub fn new(
        inventory_id: Uuid,
        product_name: String,
        price_snapshot: i64,
        ttl_seconds: i64,
    ) -> Self {
        Self {
            token: token::generate(),
            inventory_id,
            product_name,
            price_snapshot,
            created_at: Utc::now(),
            ttl_seconds,
        }
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        self.created_at + Duration::seconds(self.ttl_seconds)
    }

    /// Seconds left in the validity window at `now`, clamped at zero.
    pub fn remaining_seconds_at(&self, now: DateTime<Utc>) -> i64 {
        (self.expires_at() - now).num_seconds().max(0)
    }

    pub fn remaining_seconds(&self) -> i64 {
        self.remaining_seconds_at(Utc::now())
    }

    pub fn is_expired(&self) -> bool {
        self.remaining_seconds() == 0
    }

    pub fn status_at(&self, now: DateTime<Utc>) -> SessionStatus {
        if self.remaining_seconds_at(now) == 0 {
            SessionStatus::Expired
        } else {
            SessionStatus::Active
        }
    }

    /// Boundary view with the countdown evaluated at `now`.
    pub fn view_at(&self, now: DateTime<Utc>) -> SessionView {
        SessionView {
            token: self.token.clone(),
            inventory_id: self.inventory_id,
            product_name: self.product_name.clone(),
            price_snapshot: self.price_snapshot,
            expires_at: self.expires_at(),
            remaining_seconds: self.remaining_seconds_at(now),
            status: self.status_at(now),
        }
    }

    pub fn view(&self) -> SessionView {
        self.view_at(Utc::now())
    }
}

/// What the checkout page sees: the frozen price plus the countdown.
/// Expiry is reported, not enforced; the caller decides what to do when
/// `remaining_seconds` hits zero.
#[derive(Debug, Clone, Serialize)]
pub struct SessionView {
    pub token: String,
    pub inventory_id: Uuid,
    pub product_name: String,
    pub price_snapshot: i64,
    pub expires_at: DateTime<Utc>,
    pub remaining_seconds: i64,
    pub status: SessionStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> PriceSession {
        PriceSession::new(Uuid::new_v4(), "Okinawa tour".to_string(), 56000, 900)
    }

    #[test]
    fn test_fresh_session_is_active() {
        let s = session();
        let remaining = s.remaining_seconds();
        assert!(remaining > 895 && remaining <= 900);
        assert!(!s.is_expired());
        assert_eq!(s.status_at(Utc::now()), SessionStatus::Active);
    }

    #[test]
    fn test_expired_session_reports_zero() {
        let mut s = session();
        s.created_at = Utc::now() - Duration::seconds(1000);

        assert_eq!(s.remaining_seconds(), 0);
        assert!(s.is_expired());
        assert_eq!(s.status_at(Utc::now()), SessionStatus::Expired);
        // The snapshot is untouched by expiry
        assert_eq!(s.price_snapshot, 56000);
    }

    #[test]
    fn test_expires_at_is_created_plus_ttl() {
        let s = session();
        assert_eq!(s.expires_at() - s.created_at, Duration::seconds(900));
    }

    #[test]
    fn test_view_carries_frozen_snapshot() {
        let s = session();
        let view = s.view();
        assert_eq!(view.price_snapshot, 56000);
        assert_eq!(view.token, s.token);
        assert_eq!(view.expires_at, s.expires_at());
    }
}
