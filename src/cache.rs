// src/cache.rs
use serde_json::Value;

use crate::error::{Error, Result};
use crate::store::{CacheStore, CacheValue, Entries};

/// Hit/miss counters since the cache was opened.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: usize,
    pub misses: usize,
}

/// Fetch-or-cache resolver.
///
/// Page URLs and postal codes share one key space. Entries never expire;
/// delete the cache file to force a refetch.
#[derive(Debug)]
pub struct Cache {
    store: Option<CacheStore>,
    entries: Entries,
    stats: CacheStats,
}

impl Cache {
    /// Load `store` (cold on any read problem) and persist to it on every miss.
    pub fn open(store: CacheStore) -> Self {
        let entries = store.load();
        Self { store: Some(store), entries, stats: CacheStats::default() }
    }

    /// No backing file; entries live for the process only.
    pub fn in_memory() -> Self {
        Self { store: None, entries: Entries::new(), stats: CacheStats::default() }
    }

    /// Return the value under `key`, or call `fetch`, store its result,
    /// flush the whole table and return it. A failed fetch stores nothing.
    /// A failed flush only costs persistence: the value is kept in memory
    /// and returned.
    pub fn resolve<F>(&mut self, key: &str, fetch: F) -> Result<CacheValue>
    where
        F: FnOnce() -> Result<CacheValue>,
    {
        if let Some(hit) = self.entries.get(key) {
            self.stats.hits += 1;
            logd!("Using cache: {key}");
            return Ok(hit.clone());
        }

        self.stats.misses += 1;
        logf!("Fetching: {key}");
        let value = fetch()?;
        self.entries.insert(s!(key), value.clone());
        if let Err(e) = self.persist() {
            logw!("Could not save cache after fetching {key}: {e}");
        }
        Ok(value)
    }

    /// `resolve` for page markup.
    pub fn resolve_text<F>(&mut self, key: &str, fetch: F) -> Result<String>
    where
        F: FnOnce() -> Result<String>,
    {
        match self.resolve(key, || fetch().map(CacheValue::Text))? {
            CacheValue::Text(text) => Ok(text),
            other => Err(kind_mismatch(key, "raw text", &other)),
        }
    }

    /// `resolve` for decoded API responses.
    pub fn resolve_json<F>(&mut self, key: &str, fetch: F) -> Result<Value>
    where
        F: FnOnce() -> Result<Value>,
    {
        match self.resolve(key, || fetch().map(CacheValue::Json))? {
            CacheValue::Json(value) => Ok(value),
            other => Err(kind_mismatch(key, "structured JSON", &other)),
        }
    }

    fn persist(&self) -> Result<()> {
        if let Some(store) = &self.store {
            store.save(&self.entries)?;
            logd!("Saved {} cache entries to {}", self.entries.len(), store.path().display());
        }
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&CacheValue> {
        self.entries.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    pub fn store(&self) -> Option<&CacheStore> {
        self.store.as_ref()
    }
}

// Same key used for a page URL and a postal code.
fn kind_mismatch(key: &str, expected: &'static str, found: &CacheValue) -> Error {
    loge!("Cache key collision on `{key}`: holds {}, wanted {expected}", found.kind());
    Error::CacheKind { key: s!(key), expected, found: found.kind() }
}
