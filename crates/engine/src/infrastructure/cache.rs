//! Memo cache for class requirement lookups.
//!
//! Rule tables are static, so entries never expire. The map is lock-sharded
//! and safe to share between request handlers.

use dashmap::DashMap;

use chargen_domain::choices::Requirements;
use chargen_domain::{Class, Level, Subclass};

pub type RequirementsKey = (Class, Level, Option<Subclass>);

#[derive(Debug, Default)]
pub struct RequirementsCache {
    entries: DashMap<RequirementsKey, Requirements>,
}

impl RequirementsCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &RequirementsKey) -> Option<Requirements> {
        self.entries.get(key).map(|entry| entry.value().clone())
    }

    /// Returns the cached entry or computes, stores and returns it.
    ///
    /// Failed computations are not cached.
    pub fn get_or_try_insert_with<E>(
        &self,
        key: RequirementsKey,
        compute: impl FnOnce() -> Result<Requirements, E>,
    ) -> Result<Requirements, E> {
        if let Some(hit) = self.get(&key) {
            return Ok(hit);
        }
        let value = compute()?;
        self.entries.insert(key, value.clone());
        Ok(value)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key() -> RequirementsKey {
        (Class::Cleric, Level::MIN, Some(Subclass::KnowledgeDomain))
    }

    #[test]
    fn test_computes_once() {
        let cache = RequirementsCache::new();
        let mut calls = 0;
        for _ in 0..3 {
            let result: Result<_, ()> = cache.get_or_try_insert_with(key(), || {
                calls += 1;
                Ok(Requirements::default())
            });
            assert!(result.is_ok());
        }
        assert_eq!(calls, 1);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_errors_not_cached() {
        let cache = RequirementsCache::new();
        let failed: Result<Requirements, &str> = cache.get_or_try_insert_with(key(), || Err("no"));
        assert!(failed.is_err());
        assert!(cache.is_empty());
    }

    #[test]
    fn test_clear() {
        let cache = RequirementsCache::new();
        let _: Result<_, ()> = cache.get_or_try_insert_with(key(), || Ok(Requirements::default()));
        cache.clear();
        assert!(cache.get(&key()).is_none());
    }
}
