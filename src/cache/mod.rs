//! Cache module for the resolved post collection
//!
//! A single slot holding the last resolved collection. Readers get an `Arc`
//! snapshot without locking; a new resolution replaces the whole collection
//! in one atomic store, so a reader never sees a half-built list.

use arc_swap::ArcSwapOption;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::content::BlogPost;

/// How long a resolved collection stays valid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CachePolicy {
    /// Re-resolve on every request so content edits show up immediately
    AlwaysReload,
    /// Resolve once and reuse until invalidated
    #[default]
    CacheForever,
}

/// Single-slot memo of the resolved post collection
#[derive(Debug)]
pub struct PostCache {
    slot: ArcSwapOption<Vec<BlogPost>>,
    policy: CachePolicy,
}

impl PostCache {
    pub fn new(policy: CachePolicy) -> Self {
        Self {
            slot: ArcSwapOption::empty(),
            policy,
        }
    }

    /// Cached collection, if present and the policy allows reuse
    pub fn get(&self) -> Option<Arc<Vec<BlogPost>>> {
        match self.policy {
            CachePolicy::AlwaysReload => None,
            CachePolicy::CacheForever => self.slot.load_full(),
        }
    }

    /// Return the cached collection or compute and store a new one
    ///
    /// A failed computation leaves the slot untouched. Concurrent callers
    /// that miss at the same time each compute; the last store wins.
    pub fn get_or_compute<E, F>(&self, compute: F) -> Result<Arc<Vec<BlogPost>>, E>
    where
        F: FnOnce() -> Result<Vec<BlogPost>, E>,
    {
        if let Some(posts) = self.get() {
            return Ok(posts);
        }
        let posts = compute()?;
        Ok(self.store(posts))
    }

    /// Replace the cached collection
    pub fn store(&self, posts: Vec<BlogPost>) -> Arc<Vec<BlogPost>> {
        let posts = Arc::new(posts);
        self.slot.store(Some(Arc::clone(&posts)));
        posts
    }

    /// Drop the cached collection; the next read resolves again
    pub fn invalidate(&self) {
        self.slot.store(None);
        tracing::debug!("Post cache invalidated");
    }

    /// Whether a collection is currently held
    pub fn is_valid(&self) -> bool {
        self.slot.load().is_some()
    }
}

impl Default for PostCache {
    fn default() -> Self {
        Self::new(CachePolicy::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn posts(ids: &[&str]) -> Vec<BlogPost> {
        ids.iter().map(|id| BlogPost::new(id, "2024-01-01")).collect()
    }

    #[test]
    fn test_cache_forever_computes_once() {
        let cache = PostCache::new(CachePolicy::CacheForever);
        let calls = Cell::new(0);

        for _ in 0..3 {
            let got = cache
                .get_or_compute(|| {
                    calls.set(calls.get() + 1);
                    Ok::<_, ()>(posts(&["a"]))
                })
                .unwrap();
            assert_eq!(got.len(), 1);
        }

        assert_eq!(calls.get(), 1);
        assert!(cache.is_valid());
    }

    #[test]
    fn test_always_reload_computes_every_time() {
        let cache = PostCache::new(CachePolicy::AlwaysReload);
        let calls = Cell::new(0);

        for _ in 0..3 {
            cache
                .get_or_compute(|| {
                    calls.set(calls.get() + 1);
                    Ok::<_, ()>(posts(&["a"]))
                })
                .unwrap();
        }

        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn test_invalidate_forces_recompute() {
        let cache = PostCache::new(CachePolicy::CacheForever);
        cache.get_or_compute(|| Ok::<_, ()>(posts(&["a"]))).unwrap();

        cache.invalidate();
        assert!(!cache.is_valid());

        let got = cache
            .get_or_compute(|| Ok::<_, ()>(posts(&["a", "b"])))
            .unwrap();
        assert_eq!(got.len(), 2);
    }

    #[test]
    fn test_failed_compute_leaves_slot_empty() {
        let cache = PostCache::new(CachePolicy::CacheForever);
        let err = cache.get_or_compute(|| Err::<Vec<BlogPost>, _>("boom"));
        assert_eq!(err.unwrap_err(), "boom");
        assert!(!cache.is_valid());
    }

    #[test]
    fn test_snapshot_survives_replacement() {
        let cache = PostCache::new(CachePolicy::CacheForever);
        let old = cache.store(posts(&["old"]));
        cache.store(posts(&["new"]));

        assert_eq!(old[0].id, "old");
        assert_eq!(cache.get().unwrap()[0].id, "new");
    }
}
