use std::env;
use std::fs;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use glob::glob;
use log::warn;
use moka::Expiry;
use moka::sync::Cache;
use thiserror::Error;

/// How long an untouched cache file may linger before the sweep removes
/// it.
const STALE_FILE_AGE: Duration = Duration::from_secs(48 * 60 * 60);

/// Errors from the cache backends. These never reach the caller of the
/// store: a failing cache degrades to a fresh upstream fetch.
#[derive(Error, Debug)]
pub enum CacheError {
    #[error("cache io error: {0}")]
    Io(String),
}

impl From<std::io::Error> for CacheError {
    fn from(e: std::io::Error) -> Self {
        CacheError::Io(e.to_string())
    }
}

/// Get / set-with-expiry capability required by the forecast store. The
/// store revalidates document freshness itself, so a backend without
/// native expiry may serve stale entries without harm.
pub trait ForecastCache: Send + Sync {
    /// Returns the cached document for the key, or None on a miss or a
    /// backend failure.
    ///
    /// # Arguments
    ///
    /// * 'key' - the coordinate cache key
    fn read(&self, key: &str) -> Option<String>;

    /// Stores a document under the key for at least the given time to
    /// live.
    ///
    /// # Arguments
    ///
    /// * 'key' - the coordinate cache key
    /// * 'document' - the serialized forecast document
    /// * 'ttl' - how long the entry should live
    fn write(&self, key: &str, document: &str, ttl: Duration) -> Result<(), CacheError>;
}

#[derive(Clone)]
struct Entry {
    document: String,
    ttl: Duration,
}

struct EntryTtl;

impl Expiry<String, Entry> for EntryTtl {
    fn expire_after_create(&self, _key: &String, entry: &Entry, _created_at: Instant) -> Option<Duration> {
        Some(entry.ttl)
    }
}

/// In-process key-value backend with native per-entry expiry.
pub struct MemoryCache {
    cache: Cache<String, Entry>,
}

impl MemoryCache {
    pub fn new() -> MemoryCache {
        let cache = Cache::builder()
            .max_capacity(256)
            .expire_after(EntryTtl)
            .build();

        MemoryCache { cache }
    }
}

impl Default for MemoryCache {
    fn default() -> MemoryCache {
        MemoryCache::new()
    }
}

impl ForecastCache for MemoryCache {
    fn read(&self, key: &str) -> Option<String> {
        self.cache.get(key).map(|entry| entry.document)
    }

    fn write(&self, key: &str, document: &str, ttl: Duration) -> Result<(), CacheError> {
        let entry = Entry {
            document: document.to_string(),
            ttl,
        };
        self.cache.insert(key.to_string(), entry);
        Ok(())
    }
}

/// File-per-coordinate backend under the system temp directory. It has no
/// native expiry; the store's own freshness check keeps stale files from
/// being served.
pub struct FileCache {
    dir: PathBuf,
}

impl FileCache {
    pub fn new() -> FileCache {
        FileCache {
            dir: env::temp_dir(),
        }
    }

    /// Returns a backend rooted at the given directory instead of the
    /// system temp directory.
    ///
    /// # Arguments
    ///
    /// * 'dir' - the directory to keep cache files in
    pub fn in_dir(dir: impl Into<PathBuf>) -> FileCache {
        FileCache { dir: dir.into() }
    }

    fn file_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.tmp", key))
    }

    /// Removes cache files untouched for longer than the stale age, so
    /// abandoned coordinates do not accumulate in the temp directory.
    fn sweep_stale(&self) -> Result<(), CacheError> {
        let pattern = self.dir.join("yr_weather.*.tmp");
        let pattern = pattern.to_string_lossy();

        for entry in glob(&pattern).map_err(|e| CacheError::Io(e.to_string()))? {
            if let Ok(path) = entry {
                if let Ok(modified) = fs::metadata(&path).and_then(|m| m.modified()) {
                    if modified.elapsed().map_or(false, |age| age > STALE_FILE_AGE) {
                        fs::remove_file(path)?;
                    }
                }
            }
        }

        Ok(())
    }
}

impl Default for FileCache {
    fn default() -> FileCache {
        FileCache::new()
    }
}

impl ForecastCache for FileCache {
    fn read(&self, key: &str) -> Option<String> {
        let path = self.file_path(key);
        if !path.is_file() {
            return None;
        }
        match fs::read_to_string(&path) {
            Ok(document) => Some(document),
            Err(e) => {
                warn!("failed reading cache file {}: {}", path.display(), e);
                None
            }
        }
    }

    fn write(&self, key: &str, document: &str, _ttl: Duration) -> Result<(), CacheError> {
        fs::write(self.file_path(key), document)?;
        self.sweep_stale()
    }
}
