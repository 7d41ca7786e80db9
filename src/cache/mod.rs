//! File-backed TTL cache for sector results.
//!
//! One JSON file per key under a root directory owned by the store. The
//! effective TTL is recomputed from the market session calendar on every
//! read, so freshness grows once the market closes. Write and parse failures
//! degrade to cache misses; they are logged, never raised.

pub mod session;

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Serialize, de::DeserializeOwned};
use tracing::warn;

use crate::core::Market;
pub use session::{is_live_session, ttl};

/// Snapshot of the cache contents, classified by the current TTL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    /// Number of entries on disk.
    pub total: usize,
    /// Entries still inside the current freshness window.
    pub valid: usize,
    /// Entries past the window (or unreadable).
    pub expired: usize,
    /// The TTL in effect right now, in minutes.
    pub ttl_minutes: i64,
    /// Whether the market is in its live session right now.
    pub is_live_session: bool,
}

#[derive(Serialize, serde::Deserialize)]
struct Record {
    saved_at: i64,
    data: serde_json::Value,
}

/// Key→value store with market-hours-aware expiry.
#[derive(Debug)]
pub struct FileCache {
    root: PathBuf,
}

impl FileCache {
    /// Create a store rooted at `root`. The directory is created lazily on
    /// the first write.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        let safe: String = key
            .chars()
            .map(|c| match c {
                '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
                other => other,
            })
            .collect();
        self.root.join(format!("{safe}.json"))
    }

    /// Look up `key`, judging freshness against the TTL in effect now.
    pub fn get<T: DeserializeOwned>(&self, key: &str, market: Market) -> Option<T> {
        self.get_at(key, market, Utc::now())
    }

    /// Like [`FileCache::get`], with an explicit clock. The TTL is computed
    /// from `now`, not from when the entry was written.
    pub fn get_at<T: DeserializeOwned>(
        &self,
        key: &str,
        market: Market,
        now: DateTime<Utc>,
    ) -> Option<T> {
        let path = self.path_for(key);
        if !path.exists() {
            return None;
        }
        let record = match read_record(&path) {
            Ok(r) => r,
            Err(e) => {
                warn!(key, error = %e, "unreadable cache record, treating as miss");
                return None;
            }
        };
        if now.timestamp() - record.saved_at > ttl(market, now).num_seconds() {
            return None;
        }
        match serde_json::from_value(record.data) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(key, error = %e, "corrupt cache payload, treating as miss");
                None
            }
        }
    }

    /// Store `value` under `key`, overwriting unconditionally. A failed
    /// write only costs a miss on the next read, so it is logged and
    /// swallowed.
    pub fn put<T: Serialize>(&self, key: &str, value: &T) {
        if let Err(e) = self.try_put(key, value) {
            warn!(key, error = %e, "cache write failed");
        }
    }

    fn try_put<T: Serialize>(&self, key: &str, value: &T) -> Result<(), std::io::Error> {
        fs::create_dir_all(&self.root)?;
        let record = Record {
            saved_at: Utc::now().timestamp(),
            data: serde_json::to_value(value).map_err(std::io::Error::other)?,
        };
        let body = serde_json::to_vec_pretty(&record).map_err(std::io::Error::other)?;
        fs::write(self.path_for(key), body)
    }

    /// Remove one entry, or every entry when `key` is `None`. Removing a
    /// nonexistent key is a no-op. Not atomic with respect to concurrent
    /// writes; best-effort administrative operation.
    pub fn invalidate(&self, key: Option<&str>) {
        match key {
            Some(k) => {
                let path = self.path_for(k);
                if path.exists()
                    && let Err(e) = fs::remove_file(&path)
                {
                    warn!(key = k, error = %e, "cache invalidation failed");
                }
            }
            None => {
                for path in self.entry_paths() {
                    if let Err(e) = fs::remove_file(&path) {
                        warn!(path = %path.display(), error = %e, "cache invalidation failed");
                    }
                }
            }
        }
    }

    /// Scan all entries and classify each by the TTL in effect now.
    #[must_use]
    pub fn stats(&self, market: Market) -> CacheStats {
        let now = Utc::now();
        let ttl_secs = ttl(market, now).num_seconds();
        let mut total = 0;
        let mut valid = 0;
        for path in self.entry_paths() {
            total += 1;
            match read_record(&path) {
                Ok(r) if now.timestamp() - r.saved_at <= ttl_secs => valid += 1,
                _ => {}
            }
        }
        CacheStats {
            total,
            valid,
            expired: total - valid,
            ttl_minutes: session::ttl_minutes(market, now),
            is_live_session: is_live_session(market, now),
        }
    }

    fn entry_paths(&self) -> Vec<PathBuf> {
        let Ok(entries) = fs::read_dir(&self.root) else {
            return Vec::new();
        };
        entries
            .filter_map(Result::ok)
            .map(|e| e.path())
            .filter(|p| p.extension().is_some_and(|ext| ext == "json"))
            .collect()
    }
}

fn read_record(path: &Path) -> Result<Record, std::io::Error> {
    let body = fs::read_to_string(path)?;
    serde_json::from_str(&body).map_err(std::io::Error::other)
}
