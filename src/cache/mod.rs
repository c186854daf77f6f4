//! Build cache
//!
//! Records fingerprints of everything that feeds the page: the site config,
//! the catalog file, the source assets, the footer year and the generator
//! itself. When none of them changed since the last build and the output is
//! still present, generation is skipped.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::hash_map::DefaultHasher;
use std::fs;
use std::hash::{Hash, Hasher};
use std::path::Path;
use walkdir::WalkDir;

/// Cache directory name
pub const CACHE_DIR: &str = ".folio-cache";

/// Cache file name
const CACHE_FILE: &str = ".folio-cache/build.json";

/// Fingerprints of one build
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct BuildCache {
    /// Version of the cache format
    pub version: u32,
    /// Version of the generator that produced the output
    pub generator: String,
    /// Hash of `_config.yml` (0 when absent)
    pub config_hash: u64,
    /// Hash of the catalog file (0 when the built-in catalog is used)
    pub catalog_hash: u64,
    /// Hash of every file under the source directory
    pub assets_hash: u64,
    /// Footer year the page was rendered with
    pub year: i32,
}

impl BuildCache {
    /// Current cache format version
    const VERSION: u32 = 2;

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

    /// Fingerprint the current inputs
    pub fn compute(
        config_path: &Path,
        catalog_path: &Path,
        source_dir: &Path,
        year: i32,
    ) -> Result<Self> {
        Ok(Self {
            version: Self::VERSION,
            generator: env!("CARGO_PKG_VERSION").to_string(),
            config_hash: hash_optional_file(config_path)?,
            catalog_hash: hash_optional_file(catalog_path)?,
            assets_hash: hash_directory(source_dir)?,
            year,
        })
    }

    /// Whether this cache describes the same inputs as `other`
    pub fn is_fresh(&self, other: &BuildCache) -> bool {
        self.version == Self::VERSION && self == other
    }

    /// Remove the cache directory
    pub fn clear(base_dir: &Path) -> Result<()> {
        let cache_dir = base_dir.join(CACHE_DIR);
        if cache_dir.exists() {
            fs::remove_dir_all(&cache_dir)?;
            tracing::info!("Deleted: {:?}", cache_dir);
        }
        Ok(())
    }
}

/// Calculate a simple hash for content
pub fn hash_content(content: &[u8]) -> u64 {
    let mut hasher = DefaultHasher::new();
    content.hash(&mut hasher);
    hasher.finish()
}

fn hash_optional_file(path: &Path) -> Result<u64> {
    if path.is_file() {
        Ok(hash_content(&fs::read(path)?))
    } else {
        Ok(0)
    }
}

/// Calculate hash for a directory tree (paths and contents)
pub fn hash_directory(dir: &Path) -> Result<u64> {
    if !dir.exists() {
        return Ok(0);
    }
    let mut hasher = DefaultHasher::new();

    // Collect and sort paths for deterministic ordering
    let mut paths: Vec<_> = WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().is_file())
        .map(|e| e.path().to_path_buf())
        .collect();

    paths.sort();

    for path in paths {
        let relative = path.strip_prefix(dir)?;
        relative.to_string_lossy().hash(&mut hasher);
        fs::read(&path)?.hash(&mut hasher);
    }

    Ok(hasher.finish())
}
