use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Cached payload with an absolute expiry fixed at write time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheEntry<T> {
    pub payload: T,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl<T> CacheEntry<T> {
    pub fn new(payload: T, ttl: Duration) -> Self {
        let now = Utc::now();
        Self {
            payload,
            created_at: now,
            expires_at: now + ttl,
        }
    }

    /// An entry is only served while `now < expires_at`
    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }

    pub fn fresh_payload(&self) -> Option<&T> {
        (!self.is_expired()).then_some(&self.payload)
    }
}
