//! Bot state management
//!
//! Per-user wizard sessions live in memory only. The profile registry is
//! owned by `RegistryService`, which serializes every mutation and persists
//! the whole registry before the change becomes visible.

use std::collections::HashMap;

use tokio::sync::Mutex;
use tracing::{debug, info};

use analytics::{Registry, UserProfile};
use shared::UserId;

use crate::core::SessionState;
use crate::error::BotResult;
use crate::traits::SnapshotStore;

/// In-progress conversations, keyed by user
#[derive(Debug, Default)]
pub struct SessionTable {
    sessions: HashMap<UserId, SessionState>,
}

impl SessionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove and return the user's state; users without a session are idle
    pub fn take(&mut self, user_id: UserId) -> SessionState {
        self.sessions.remove(&user_id).unwrap_or_default()
    }

    pub fn get(&self, user_id: UserId) -> Option<&SessionState> {
        self.sessions.get(&user_id)
    }

    pub fn set(&mut self, user_id: UserId, state: SessionState) {
        if state.is_idle() {
            self.sessions.remove(&user_id);
        } else {
            self.sessions.insert(user_id, state);
        }
    }

    pub fn is_active(&self, user_id: UserId) -> bool {
        self.sessions.contains_key(&user_id)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

/// Registry of profiles backed by a snapshot store
pub struct RegistryService<S: SnapshotStore> {
    store: S,
    registry: Mutex<Registry>,
}

impl<S: SnapshotStore> RegistryService<S> {
    /// Load the stored snapshot
    pub async fn open(store: S) -> BotResult<Self> {
        let registry = store.load().await?;
        info!(profiles = registry.len(), "Registry loaded");
        Ok(Self {
            store,
            registry: Mutex::new(registry),
        })
    }

    pub async fn read<T>(&self, f: impl FnOnce(&Registry) -> T) -> T {
        let registry = self.registry.lock().await;
        f(&registry)
    }

    pub async fn profile(&self, user_id: UserId) -> Option<UserProfile> {
        self.read(|registry| registry.get(&user_id).cloned()).await
    }

    pub async fn contains(&self, user_id: UserId) -> bool {
        self.read(|registry| registry.contains_key(&user_id)).await
    }

    /// Apply `f` to a working copy and install it once the snapshot is saved.
    ///
    /// On a save failure the in-memory registry is left untouched.
    pub async fn transact<T>(&self, f: impl FnOnce(&mut Registry) -> T) -> BotResult<T> {
        let mut registry = self.registry.lock().await;
        let mut working = registry.clone();
        let outcome = f(&mut working);
        self.store.save(&working).await?;
        debug!(profiles = working.len(), "Registry snapshot saved");
        *registry = working;
        Ok(outcome)
    }
}
