// SPDX-License-Identifier: PMPL-1.0-or-later

//! Build-once registry cache
//!
//! The first successful load is kept for the life of the cache; readers after
//! that go straight through the `OnceLock` without locking. The mutex only
//! serialises the first build so racing callers never parse twice.

use crate::error::RegistryError;
use crate::registry::Registry;
use std::sync::{Mutex, OnceLock, PoisonError};
use tracing::{debug, info};

#[derive(Debug, Default)]
pub struct RegistryCache {
    registry: OnceLock<Registry>,
    building: Mutex<()>,
}

static GLOBAL: RegistryCache = RegistryCache::new();

/// The process-wide cache.
pub fn global() -> &'static RegistryCache {
    &GLOBAL
}

impl RegistryCache {
    pub const fn new() -> Self {
        Self {
            registry: OnceLock::new(),
            building: Mutex::new(()),
        }
    }

    /// The cached registry, if one has been built.
    pub fn get(&self) -> Option<&Registry> {
        self.registry.get()
    }

    /// Return the cached registry, building it from `loader`'s text on first
    /// use. `loader` runs at most once per successful build; a failed load or
    /// parse leaves the cache empty so a later call can retry.
    pub fn get_or_load<F, E>(&self, loader: F) -> Result<&Registry, E>
    where
        F: FnOnce() -> Result<String, E>,
        E: From<RegistryError>,
    {
        if let Some(registry) = self.registry.get() {
            debug!("registry cache hit");
            return Ok(registry);
        }

        let _guard = self
            .building
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(registry) = self.registry.get() {
            debug!("registry built by a concurrent caller");
            return Ok(registry);
        }

        let text = loader()?;
        let registry = Registry::parse(&text)?;
        info!(
            codes = registry.len(),
            records = registry.record_count(),
            file_date = ?registry.file_date(),
            "language subtag registry loaded"
        );
        Ok(self.registry.get_or_init(|| registry))
    }

    /// Like [`RegistryCache::get_or_load`] for callers that already hold the text.
    pub fn get_or_parse(&self, text: &str) -> Result<&Registry, RegistryError> {
        self.get_or_load(|| Ok::<_, RegistryError>(text.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::thread;

    const TEXT: &str = "File-Date: 2018-12-28\n%%\nSubtag: aa\nDescription: Afar";

    #[test]
    fn loader_runs_once() {
        let cache = RegistryCache::new();
        let calls = AtomicUsize::new(0);
        for _ in 0..3 {
            let registry = cache
                .get_or_load(|| {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Ok::<_, RegistryError>(TEXT.to_string())
                })
                .unwrap();
            assert!(registry.lookup("aa").is_some());
        }
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn failed_parse_is_not_cached() {
        let cache = RegistryCache::new();
        assert!(cache.get_or_parse("not a registry line").is_err());
        assert!(cache.get().is_none());
        assert!(cache.get_or_parse(TEXT).is_ok());
        assert!(cache.get().is_some());
    }

    #[test]
    fn concurrent_first_access_builds_once() {
        let cache = Arc::new(RegistryCache::new());
        let calls = Arc::new(AtomicUsize::new(0));
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let cache = Arc::clone(&cache);
                let calls = Arc::clone(&calls);
                thread::spawn(move || {
                    let registry = cache
                        .get_or_load(|| {
                            calls.fetch_add(1, Ordering::SeqCst);
                            thread::sleep(std::time::Duration::from_millis(20));
                            Ok::<_, RegistryError>(TEXT.to_string())
                        })
                        .unwrap();
                    registry.len()
                })
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), 1);
        }
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
