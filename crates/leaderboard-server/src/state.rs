use crate::config::ServerConfig;
use crate::presence::PresenceTracker;
use crate::store::LeaderboardStore;

/// Shared application state.
pub struct AppState {
    pub store: LeaderboardStore,
    pub presence: PresenceTracker,
    pub config: ServerConfig,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            store: LeaderboardStore::new(config.store_path.clone()),
            presence: PresenceTracker::new(config.presence_ttl),
            config,
        }
    }
}
