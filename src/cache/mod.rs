//! Build cache for skipping unchanged generations
//!
//! The cache stores a fingerprint of everything that feeds the output: the
//! crate version (embedded templates and built-in content), `_config.yml`,
//! and every file under the source directory. When the fingerprint matches
//! and the public directory still holds every recorded page, generation is
//! skipped.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::hash_map::DefaultHasher;
use std::fs;
use std::hash::{Hash, Hasher};
use std::path::Path;
use walkdir::WalkDir;

use crate::TechBlog;

/// Cache directory name
pub const CACHE_DIR: &str = ".techblog-cache";

/// Cache file name
const CACHE_FILE: &str = ".techblog-cache/db.json";

/// Cache database
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct BuildCache {
    /// Version of the cache format
    pub version: u32,
    /// Fingerprint of all generation inputs
    pub fingerprint: u64,
    /// Output files relative to the public dir
    pub outputs: Vec<String>,
}

impl BuildCache {
    /// Current cache format version
    const VERSION: u32 = 1;

    /// Create a new cache entry for a finished generation
    pub fn new(fingerprint: u64, outputs: Vec<String>) -> Self {
        Self {
            version: Self::VERSION,
            fingerprint,
            outputs,
        }
    }

    /// Load cache from disk, or create a new empty cache
    pub fn load(base_dir: &Path) -> Self {
        let cache_path = base_dir.join(CACHE_FILE);
        if let Ok(content) = fs::read_to_string(&cache_path) {
            if let Ok(cache) = serde_json::from_str::<BuildCache>(&content) {
                if cache.version == Self::VERSION {
                    return cache;
                }
                tracing::info!("Cache version mismatch, rebuilding cache");
            }
        }
        Self::default()
    }

    /// Save cache to disk
    pub fn save(&self, base_dir: &Path) -> Result<()> {
        fs::create_dir_all(base_dir.join(CACHE_DIR))?;
        let content = serde_json::to_string_pretty(self)?;
        fs::write(base_dir.join(CACHE_FILE), content)?;
        Ok(())
    }

    /// Whether a generation with `fingerprint` would reproduce the current
    /// public directory
    pub fn is_fresh(&self, fingerprint: u64, public_dir: &Path) -> bool {
        self.version == Self::VERSION
            && self.fingerprint == fingerprint
            && !self.outputs.is_empty()
            && self.outputs.iter().all(|o| public_dir.join(o).exists())
    }
}

/// Fingerprint every input of a generation
pub fn fingerprint(site: &TechBlog) -> Result<u64> {
    let mut hasher = DefaultHasher::new();
    env!("CARGO_PKG_VERSION").hash(&mut hasher);

    let config_path = site.base_dir.join("_config.yml");
    if config_path.exists() {
        fs::read(&config_path)?.hash(&mut hasher);
    }

    hash_directory(&site.source_dir, &mut hasher)?;
    Ok(hasher.finish())
}

/// Hash paths and contents of every file under `dir`, in sorted order
fn hash_directory(dir: &Path, hasher: &mut DefaultHasher) -> Result<()> {
    if !dir.exists() {
        return Ok(());
    }

    let mut paths: Vec<_> = WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().is_file())
        .map(|e| e.path().to_path_buf())
        .collect();
    paths.sort();

    for path in paths {
        let relative = path.strip_prefix(dir).unwrap_or(&path);
        relative.to_string_lossy().hash(hasher);
        fs::read(&path)?.hash(hasher);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let cache = BuildCache::new(42, vec!["index.html".to_string()]);
        cache.save(dir.path()).unwrap();
        assert_eq!(BuildCache::load(dir.path()), cache);
    }

    #[test]
    fn test_missing_cache_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let cache = BuildCache::load(dir.path());
        assert_eq!(cache.fingerprint, 0);
        assert!(!cache.is_fresh(0, dir.path()));
    }

    #[test]
    fn test_fingerprint_tracks_config_and_source() {
        let dir = tempfile::tempdir().unwrap();
        let site = TechBlog::new(dir.path()).unwrap();
        let initial = fingerprint(&site).unwrap();
        assert_eq!(fingerprint(&site).unwrap(), initial);

        fs::write(dir.path().join("_config.yml"), "title: Changed\n").unwrap();
        let after_config = fingerprint(&site).unwrap();
        assert_ne!(after_config, initial);

        fs::create_dir_all(site.source_dir.join("_data")).unwrap();
        fs::write(site.source_dir.join("_data/content.yml"), "{}\n").unwrap();
        assert_ne!(fingerprint(&site).unwrap(), after_config);
    }

    #[test]
    fn test_is_fresh_requires_outputs_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let cache = BuildCache::new(7, vec!["index.html".to_string()]);
        assert!(!cache.is_fresh(7, dir.path()));

        fs::write(dir.path().join("index.html"), "<html></html>").unwrap();
        assert!(cache.is_fresh(7, dir.path()));
        assert!(!cache.is_fresh(8, dir.path()));
    }
}
