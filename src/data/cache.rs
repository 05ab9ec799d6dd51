use std::num::NonZeroUsize;
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use lru::LruCache;
use serde::Serialize;

use crate::domain::params::BackgroundParameters;
use crate::domain::style::RawOption;
use crate::error::EngineResult;
use crate::resilience::freshness::{FreshnessPolicy, FreshnessState};

pub const DEFAULT_CACHE_CAPACITY: usize = 64;

/// Lookup key for previously generated backgrounds.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheKey {
    pub business_type: String,
    pub target_audience: String,
    pub color_scheme: String,
    pub style_preference: String,
    pub mood_keywords: Vec<String>,
}

impl From<&BackgroundParameters> for CacheKey {
    fn from(params: &BackgroundParameters) -> Self {
        Self {
            business_type: params.business_type.clone(),
            target_audience: params.target_audience.clone(),
            color_scheme: params.color_scheme.clone(),
            style_preference: params.style_preference.clone(),
            mood_keywords: params.mood_keywords.clone(),
        }
    }
}

#[async_trait]
pub trait BackgroundCache: Send + Sync {
    async fn lookup(&self, key: &CacheKey) -> EngineResult<Vec<RawOption>>;

    async fn store(&self, key: &CacheKey, options: &[RawOption]) -> EngineResult<()>;
}

/// Always misses and discards writes.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullCache;

#[async_trait]
impl BackgroundCache for NullCache {
    async fn lookup(&self, _key: &CacheKey) -> EngineResult<Vec<RawOption>> {
        Ok(Vec::new())
    }

    async fn store(&self, _key: &CacheKey, _options: &[RawOption]) -> EngineResult<()> {
        Ok(())
    }
}

#[derive(Debug, Clone)]
struct CacheEntry {
    options: Vec<RawOption>,
    stored_at: DateTime<Utc>,
}

/// Process-local LRU of recent generations. Expired entries are dropped on
/// lookup; stale ones are still served.
#[derive(Debug)]
pub struct MemoryCache {
    entries: Mutex<LruCache<CacheKey, CacheEntry>>,
    policy: FreshnessPolicy,
}

impl Default for MemoryCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }
}

impl MemoryCache {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self::with_policy(capacity, FreshnessPolicy::default())
    }

    #[must_use]
    pub fn with_policy(capacity: usize, policy: FreshnessPolicy) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: Mutex::new(LruCache::new(capacity)),
            policy,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lookup_at(&self, key: &CacheKey, now: DateTime<Utc>) -> Vec<RawOption> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        let Some(entry) = entries.get(key) else {
            return Vec::new();
        };

        match self.policy.evaluate(entry.stored_at, now) {
            FreshnessState::Fresh => entry.options.clone(),
            FreshnessState::Stale => {
                tracing::debug!(business = %key.business_type, "serving stale cached backgrounds");
                entry.options.clone()
            }
            FreshnessState::Expired => {
                entries.pop(key);
                Vec::new()
            }
        }
    }

    fn store_at(&self, key: &CacheKey, options: &[RawOption], stored_at: DateTime<Utc>) {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.put(
            key.clone(),
            CacheEntry {
                options: options.to_vec(),
                stored_at,
            },
        );
    }
}

#[async_trait]
impl BackgroundCache for MemoryCache {
    async fn lookup(&self, key: &CacheKey) -> EngineResult<Vec<RawOption>> {
        Ok(self.lookup_at(key, Utc::now()))
    }

    async fn store(&self, key: &CacheKey, options: &[RawOption]) -> EngineResult<()> {
        self.store_at(key, options, Utc::now());
        Ok(())
    }
}
