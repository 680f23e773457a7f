//! Per-guild caches consulted on the dispatch hot path.
//!
//! Entries are populated lazily from storage and stay authoritative until they are
//! explicitly invalidated by a configuration-changing command or the process restarts.
//! There is no expiry. Concurrent misses for the same guild may both fill the entry;
//! writes are plain overwrites of an idempotently derived value, so the last writer wins.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use tokio::sync::RwLock;

/// Cache of a value derived from a guild's configuration, keyed by guild ID.
///
/// Cloning is cheap and clones share the same entries.
#[derive(Debug)]
pub struct GuildCache<V> {
    entries: Arc<RwLock<HashMap<u64, V>>>,
}

/// Resolved command prefix per guild.
pub type PrefixCache = GuildCache<String>;

/// Channels with commands disabled, per guild.
pub type DisabledChannelCache = GuildCache<HashSet<u64>>;

impl<V: Clone> GuildCache<V> {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub async fn get(&self, guild_id: u64) -> Option<V> {
        self.entries.read().await.get(&guild_id).cloned()
    }

    pub async fn insert(&self, guild_id: u64, value: V) {
        self.entries.write().await.insert(guild_id, value);
    }

    /// Drops the entry so the next lookup reads storage again.
    pub async fn invalidate(&self, guild_id: u64) {
        self.entries.write().await.remove(&guild_id);
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

impl<V: Clone> Default for GuildCache<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Clone for GuildCache<V> {
    fn clone(&self) -> Self {
        Self {
            entries: Arc::clone(&self.entries),
        }
    }
}
