//! Answer cache keyed by the normalized question.
//!
//! [`AnswerCache`] is the seam the request path depends on.
//! [`InMemoryAnswerCache`] is the bounded in-process implementation:
//! first-in-first-out eviction at `capacity`, optional time-to-live.

use std::{
    collections::{HashMap, VecDeque},
    time::{Duration, Instant},
};

use async_trait::async_trait;
use tokio::sync::RwLock;

/// Storage for previously computed answers.
#[async_trait]
pub trait AnswerCache: Send + Sync {
    /// Returns the cached answer, if any.
    async fn get(&self, key: &str) -> Option<String>;

    /// Inserts or overwrites unconditionally.
    async fn put(&self, key: String, answer: String);
}

#[derive(Clone)]
struct CacheEntry {
    answer: String,
    created_at: Instant,
}

#[derive(Default)]
struct Inner {
    entries: HashMap<String, CacheEntry>,
    /// Keys in insertion order, oldest first.
    order: VecDeque<String>,
}

impl Inner {
    fn remove(&mut self, key: &str) {
        if self.entries.remove(key).is_some() {
            self.order.retain(|k| k != key);
        }
    }
}

/// Bounded in-memory cache. Capacity `0` disables storage.
pub struct InMemoryAnswerCache {
    capacity: usize,
    ttl: Option<Duration>,
    inner: RwLock<Inner>,
}

impl InMemoryAnswerCache {
    pub fn new(capacity: usize, ttl: Option<Duration>) -> Self {
        Self {
            capacity,
            ttl,
            inner: RwLock::new(Inner::default()),
        }
    }

    /// Number of stored entries, expired ones included until they are read.
    pub async fn len(&self) -> usize {
        self.inner.read().await.entries.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    fn is_expired(&self, entry: &CacheEntry) -> bool {
        self.ttl
            .is_some_and(|ttl| entry.created_at.elapsed() >= ttl)
    }
}

#[async_trait]
impl AnswerCache for InMemoryAnswerCache {
    async fn get(&self, key: &str) -> Option<String> {
        {
            let inner = self.inner.read().await;
            match inner.entries.get(key) {
                None => return None,
                Some(entry) if !self.is_expired(entry) => return Some(entry.answer.clone()),
                Some(_) => {}
            }
        }

        // expired: purge under the write lock, re-checking in case it was refreshed
        let mut inner = self.inner.write().await;
        let expired = match inner.entries.get(key) {
            None => return None,
            Some(entry) => self.is_expired(entry),
        };
        if expired {
            inner.remove(key);
            return None;
        }
        inner.entries.get(key).map(|entry| entry.answer.clone())
    }

    async fn put(&self, key: String, answer: String) {
        if self.capacity == 0 {
            return;
        }
        let mut inner = self.inner.write().await;
        inner.remove(&key);

        while inner.entries.len() >= self.capacity {
            match inner.order.pop_front() {
                Some(oldest) => {
                    inner.entries.remove(&oldest);
                }
                None => break,
            }
        }

        inner.order.push_back(key.clone());
        inner.entries.insert(
            key,
            CacheEntry {
                answer,
                created_at: Instant::now(),
            },
        );
    }
}
