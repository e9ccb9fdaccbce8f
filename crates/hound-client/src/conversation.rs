//! Per-conversation dialog state.
//!
//! The backend returns an opaque `ConversationState` with each result.
//! Sending it back with the next query lets follow-ups like "what about
//! tomorrow?" resolve against the previous turn.
//!
//! Keys come from callers (SMS sender numbers), so the store is bounded:
//! entries expire after a TTL and the least recently updated entry is
//! evicted once `max_entries` is reached.

use hound_core::ConversationConfig;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

#[derive(Debug)]
struct Entry {
    state: Value,
    updated: Instant,
    // Update order, used for eviction.
    seq: u64,
}

#[derive(Debug, Default)]
struct Inner {
    entries: HashMap<String, Entry>,
    next_seq: u64,
}

/// Conversation state keyed by user id (or caller phone number).
///
/// Cheap to clone; clones share the same map. Concurrent queries for the
/// same key are last-writer-wins.
#[derive(Debug, Clone)]
pub struct ConversationStore {
    inner: Arc<RwLock<Inner>>,
    max_entries: usize,
    ttl: Duration,
}

impl Default for ConversationStore {
    fn default() -> Self {
        Self::from_config(&ConversationConfig::default())
    }
}

impl ConversationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &ConversationConfig) -> Self {
        Self::with_limits(config.max_entries, config.ttl())
    }

    /// A store holding at most `max_entries` conversations, each for `ttl`.
    pub fn with_limits(max_entries: usize, ttl: Duration) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Inner::default())),
            max_entries: max_entries.max(1),
            ttl,
        }
    }

    pub async fn get(&self, key: &str) -> Option<Value> {
        let inner = self.inner.read().await;
        inner
            .entries
            .get(key)
            .filter(|entry| entry.updated.elapsed() < self.ttl)
            .map(|entry| entry.state.clone())
    }

    pub async fn set(&self, key: impl Into<String>, state: Value) {
        let key = key.into();
        let mut inner = self.inner.write().await;

        let ttl = self.ttl;
        inner.entries.retain(|_, entry| entry.updated.elapsed() < ttl);

        if !inner.entries.contains_key(&key) && inner.entries.len() >= self.max_entries {
            let oldest = inner
                .entries
                .iter()
                .min_by_key(|(_, entry)| entry.seq)
                .map(|(k, _)| k.clone());
            if let Some(oldest) = oldest {
                tracing::debug!(evicted = %oldest, "conversation store full");
                inner.entries.remove(&oldest);
            }
        }

        let seq = inner.next_seq;
        inner.next_seq += 1;
        inner.entries.insert(
            key,
            Entry {
                state,
                updated: Instant::now(),
                seq,
            },
        );
    }

    /// Forget the state for `key`, returning it if there was one.
    pub async fn clear(&self, key: &str) -> Option<Value> {
        self.inner.write().await.entries.remove(key).map(|entry| entry.state)
    }

    /// Number of stored conversations, including expired ones not yet swept.
    pub async fn len(&self) -> usize {
        self.inner.read().await.entries.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.entries.is_empty()
    }
}
