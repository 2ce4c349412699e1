use std::time::{Duration, Instant};

use dashmap::DashMap;
use tracing::debug;

use leaderboard_core::InputError;

use crate::config::DEFAULT_PRESENCE_TTL;

/// Who has sent a heartbeat recently. Lives only as long as the process.
///
/// Stale entries are evicted whenever the tracker is touched; there is no
/// background sweep.
pub struct PresenceTracker {
    seen: DashMap<String, Instant>,
    ttl: Duration,
}

impl Default for PresenceTracker {
    fn default() -> Self {
        Self::new(DEFAULT_PRESENCE_TTL)
    }
}

impl PresenceTracker {
    pub fn new(ttl: Duration) -> Self {
        Self {
            seen: DashMap::new(),
            ttl,
        }
    }

    /// Record a heartbeat and return how many clients are online.
    pub fn heartbeat(&self, client_id: &str) -> Result<usize, InputError> {
        self.heartbeat_at(client_id, Instant::now())
    }

    pub fn heartbeat_at(&self, client_id: &str, now: Instant) -> Result<usize, InputError> {
        if client_id.is_empty() {
            return Err(InputError::MissingClientId);
        }
        self.seen.insert(client_id.to_string(), now);
        let online = self.active_count_at(now);
        debug!(%client_id, online, "heartbeat");
        Ok(online)
    }

    pub fn active_count(&self) -> usize {
        self.active_count_at(Instant::now())
    }

    pub fn active_count_at(&self, now: Instant) -> usize {
        self.prune(now)
    }

    /// Evict stale entries and return how many survived the sweep. The count
    /// comes from the sweep itself, not a later `len()`, so a heartbeat that
    /// lands after its shard was swept is left for the next call. Exactly
    /// `ttl` old is still live.
    fn prune(&self, now: Instant) -> usize {
        let ttl = self.ttl;
        let mut live = 0;
        self.seen.retain(|_, last_seen| {
            let keep = now.saturating_duration_since(*last_seen) <= ttl;
            if keep {
                live += 1;
            }
            keep
        });
        live
    }
}
