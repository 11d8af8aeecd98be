// SPDX-License-Identifier: PMPL-1.0-or-later

//! Loading the registry through a source and the build-once cache

use bcp47_registry::registry;
use bcp47_registry::source::{RegistrySource, SourceConfig};
use bcp47_registry::RegistryCache;
use std::fs;
use std::sync::atomic::{AtomicUsize, Ordering};
use tempfile::TempDir;

const TEXT: &str = "File-Date: 2018-12-28\n%%\nType: language\nSubtag: aa\nDescription: Afar\n";

#[test]
fn test_file_source_feeds_cache() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("language-subtag-registry");
    fs::write(&path, TEXT).unwrap();

    let source = SourceConfig {
        file: Some(path.clone()),
        url: None,
    }
    .resolve();
    assert_eq!(source, RegistrySource::File(path));

    let cache = RegistryCache::new();
    let registry = cache.get_or_load(|| source.load()).unwrap();
    assert_eq!(registry.bureaucratic_name("aa").unwrap(), "Afar");
}

#[test]
fn test_cache_reads_source_once() {
    let cache = RegistryCache::new();
    let reads = AtomicUsize::new(0);
    for _ in 0..2 {
        cache
            .get_or_load(|| {
                reads.fetch_add(1, Ordering::SeqCst);
                Ok::<_, anyhow::Error>(TEXT.to_string())
            })
            .unwrap();
    }
    assert_eq!(reads.load(Ordering::SeqCst), 1);
}

#[test]
fn test_missing_file_leaves_cache_empty() {
    let dir = TempDir::new().unwrap();
    let source = RegistrySource::File(dir.path().join("absent"));
    let cache = RegistryCache::new();
    assert!(cache.get_or_load(|| source.load()).is_err());
    assert!(cache.get().is_none());
}

#[test]
fn test_global_cache_is_shared() {
    let first = registry::global().get_or_parse(TEXT).unwrap();
    let second = registry::global()
        .get_or_load(|| -> anyhow::Result<String> {
            panic!("global cache should already be built")
        })
        .unwrap();
    assert!(std::ptr::eq(first, second));
}
