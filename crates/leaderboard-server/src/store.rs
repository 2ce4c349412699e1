//! File-backed leaderboard.
//!
//! The whole store is one JSON file, reloaded on every call and rewritten in
//! full after every change. Mutations hold the write lock for the entire
//! load-mutate-save cycle; writes go to a sibling temp file that is renamed
//! over the real one, so readers only ever see a complete file.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tokio::fs;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use leaderboard_core::codec::{self, Decoded};
use leaderboard_core::{Board, Store};

use crate::error::StoreError;

pub struct LeaderboardStore {
    path: PathBuf,
    lock: RwLock<()>,
}

impl LeaderboardStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            lock: RwLock::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current standings for a category.
    pub async fn get_board(&self, category: Option<&str>) -> Board {
        let decoded = {
            let _guard = self.lock.read().await;
            self.read().await
        };
        if decoded.migrated {
            self.persist_migration().await;
        }
        decoded.store.board(category)
    }

    /// Add `delta` to `name`'s total. A blank name is accepted but not recorded.
    pub async fn submit_score(
        &self,
        category: Option<&str>,
        name: &str,
        delta: i64,
    ) -> Result<Board, StoreError> {
        let _guard = self.lock.write().await;
        let mut store = self.load_for_write().await;

        let submission = store.submit(category, name, delta);
        if submission.is_recorded() {
            self.save(&store).await?;
            debug!(?category, name = %name.trim(), delta, "score recorded");
        }
        Ok(submission.into_board())
    }

    /// Empty a category, or the whole store when none is given. Never fails:
    /// a write error is logged and the empty board is still returned.
    pub async fn reset_category(&self, category: Option<&str>) -> Board {
        let _guard = self.lock.write().await;
        let mut store = self.load_for_write().await;

        let board = store.reset(category);
        match self.save(&store).await {
            Ok(()) => info!(?category, "leaderboard reset"),
            Err(e) => warn!(?category, error = %e, "reset not persisted"),
        }
        board
    }

    /// Load under an already-held write lock. A legacy file is rewritten
    /// right away; if that fails the migrated value is still used.
    async fn load_for_write(&self) -> Store {
        let decoded = self.read().await;
        if decoded.migrated {
            self.save_migration(&decoded.store).await;
        }
        decoded.store
    }

    /// Rewrite a legacy file found by a reader. Re-reads under the write lock
    /// so a submit that landed in between is not clobbered.
    async fn persist_migration(&self) {
        let _guard = self.lock.write().await;
        let decoded = self.read().await;
        if decoded.migrated {
            self.save_migration(&decoded.store).await;
        }
    }

    async fn save_migration(&self, store: &Store) {
        match self.save(store).await {
            Ok(()) => info!(path = %self.path.display(), "migrated legacy leaderboard file"),
            Err(e) => warn!(path = %self.path.display(), error = %e, "legacy migration not persisted"),
        }
    }

    async fn read(&self) -> Decoded {
        match fs::read(&self.path).await {
            Ok(bytes) => codec::decode(&bytes),
            Err(e) if e.kind() == ErrorKind::NotFound => codec::decode_file(None),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "cannot read store, treating as empty");
                codec::decode_file(None)
            }
        }
    }

    async fn save(&self, store: &Store) -> Result<(), StoreError> {
        let data = codec::encode(store)?;
        let tmp = self.tmp_path();
        fs::write(&tmp, data).await?;
        if let Err(e) = fs::rename(&tmp, &self.path).await {
            let _ = fs::remove_file(&tmp).await;
            return Err(e.into());
        }
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "leaderboard.json".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}
