//! Bounded LRU cache over loaded rulesets.

use crate::error::RulesetError;
use crate::ruleset::Ruleset;
use std::collections::{HashMap, VecDeque};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tracing::debug;

/// Thread-safe, bounded least-recently-used cache of loaded rulesets, keyed
/// by file path.
///
/// The (lookup map + LRU order) pair is one atomic resource guarded by a
/// single mutex. File reads on a miss happen **outside** the lock, so a slow
/// load never stalls lookups of other keys; two workers racing on the same
/// missing key may both read the file, and the first insertion wins.
pub struct RulesetCache {
    capacity: Option<usize>,
    inner: Mutex<CacheInner>,
}

#[derive(Default)]
struct CacheInner {
    /// Front = most recently used. Keys here and in `entries` are always the
    /// same set.
    order: VecDeque<PathBuf>,
    entries: HashMap<PathBuf, Arc<Ruleset>>,
}

impl RulesetCache {
    /// Create a cache holding at most `capacity` rulesets.
    ///
    /// `None` means unbounded: the operator has explicitly accepted unbounded
    /// memory growth.
    pub fn new(capacity: Option<usize>) -> Self {
        Self {
            capacity,
            inner: Mutex::new(CacheInner::default()),
        }
    }

    /// Create an unbounded cache.
    pub fn unbounded() -> Self {
        Self::new(None)
    }

    /// Return the ruleset for `path`, loading it on a miss.
    ///
    /// A hit promotes the key to most-recently-used and performs no file
    /// I/O. A miss at capacity evicts the least-recently-used entry before
    /// inserting. Load failures propagate unchanged; a missing file is a
    /// successful load (see [`Ruleset::file_existed`]) and is cached like any
    /// other entry.
    pub fn get_or_load(&self, path: &Path) -> Result<Arc<Ruleset>, RulesetError> {
        if let Some(resident) = self.lookup(path) {
            return Ok(resident);
        }
        // Read outside the lock; a coincident load of the same key is
        // tolerated and resolved on insertion.
        let loaded = Arc::new(Ruleset::load(path)?);
        Ok(self.insert(path, loaded))
    }

    /// Number of resident entries.
    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    /// Whether the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether `path` is currently resident. Does not promote.
    pub fn contains(&self, path: &Path) -> bool {
        self.lock().entries.contains_key(path)
    }

    fn lookup(&self, path: &Path) -> Option<Arc<Ruleset>> {
        let mut inner = self.lock();
        let resident = inner.entries.get(path).cloned()?;
        inner.promote(path);
        Some(resident)
    }

    fn insert(&self, path: &Path, loaded: Arc<Ruleset>) -> Arc<Ruleset> {
        let mut inner = self.lock();
        if let Some(existing) = inner.entries.get(path).cloned() {
            // Lost a cold-load race; adopt the resident entry.
            inner.promote(path);
            return existing;
        }
        if let Some(capacity) = self.capacity {
            while inner.entries.len() >= capacity {
                let Some(evicted) = inner.order.pop_back() else {
                    break;
                };
                inner.entries.remove(&evicted);
                debug!(path = %evicted.display(), "evicted least-recently-used ruleset");
            }
        }
        inner.order.push_front(path.to_path_buf());
        inner.entries.insert(path.to_path_buf(), Arc::clone(&loaded));
        loaded
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, CacheInner> {
        // The critical sections never panic, so a poisoned lock can only
        // mean a panic elsewhere in the holder's thread; the bookkeeping is
        // still consistent.
        match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl CacheInner {
    fn promote(&mut self, path: &Path) {
        if let Some(pos) = self.order.iter().position(|p| p == path) {
            if let Some(key) = self.order.remove(pos) {
                self.order.push_front(key);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::sync::Arc;
    use tempfile::TempDir;

    fn write_conf(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_hit_does_not_reread_file() {
        let dir = TempDir::new().unwrap();
        let path = write_conf(&dir, "a.conf", "$.a=>alpha\n");
        let cache = RulesetCache::unbounded();

        let first = cache.get_or_load(&path).unwrap();
        assert_eq!(first.rules()[0].destination, "alpha");

        // Rewrite the file; a resident entry must not pick this up.
        fs::write(&path, "$.a=>beta\n").unwrap();
        let second = cache.get_or_load(&path).unwrap();
        assert_eq!(second.rules()[0].destination, "alpha");
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_capacity_evicts_least_recently_used() {
        let dir = TempDir::new().unwrap();
        let paths: Vec<PathBuf> = (0..4)
            .map(|i| write_conf(&dir, &format!("{i}.conf"), "$.a=>alpha\n"))
            .collect();
        let cache = RulesetCache::new(Some(3));

        // Access 4 distinct keys with no repeats: only the last 3 survive.
        for path in &paths {
            cache.get_or_load(path).unwrap();
        }
        assert_eq!(cache.len(), 3);
        assert!(!cache.contains(&paths[0]));
        assert!(cache.contains(&paths[1]));
        assert!(cache.contains(&paths[2]));
        assert!(cache.contains(&paths[3]));
    }

    #[test]
    fn test_promotion_changes_eviction_order() {
        let dir = TempDir::new().unwrap();
        let a = write_conf(&dir, "a.conf", "$.a=>alpha\n");
        let b = write_conf(&dir, "b.conf", "$.a=>alpha\n");
        let c = write_conf(&dir, "c.conf", "$.a=>alpha\n");
        let cache = RulesetCache::new(Some(2));

        cache.get_or_load(&a).unwrap();
        cache.get_or_load(&b).unwrap();
        // Re-access A: B becomes least-recently-used and C's insert evicts it.
        cache.get_or_load(&a).unwrap();
        cache.get_or_load(&c).unwrap();

        assert!(cache.contains(&a));
        assert!(!cache.contains(&b));
        assert!(cache.contains(&c));
    }

    #[test]
    fn test_missing_file_is_cached() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.conf");
        let cache = RulesetCache::unbounded();

        let ruleset = cache.get_or_load(&path).unwrap();
        assert!(!ruleset.file_existed());
        assert!(cache.contains(&path));
    }

    #[test]
    fn test_load_failure_caches_nothing() {
        let dir = TempDir::new().unwrap();
        let path = write_conf(&dir, "bad.conf", "no separator here\n");
        let cache = RulesetCache::unbounded();

        assert!(cache.get_or_load(&path).is_err());
        assert!(cache.is_empty());
    }

    #[test]
    fn test_concurrent_same_key_yields_one_resident_entry() {
        let dir = TempDir::new().unwrap();
        let path = write_conf(&dir, "a.conf", "$.a=>alpha\n");
        let cache = Arc::new(RulesetCache::new(Some(8)));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let cache = Arc::clone(&cache);
                let path = path.clone();
                std::thread::spawn(move || cache.get_or_load(&path).unwrap().len())
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), 1);
        }
        assert_eq!(cache.len(), 1);
    }
}
