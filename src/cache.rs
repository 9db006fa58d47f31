//! Fixed-key schedule cache.
//!
//! One JSON file under the project cache dir holds the last fetched payload
//! together with its fetch time; within the freshness window the payload is
//! reused unmodified, after it a live fetch supersedes the entry.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::api::{Schedule, ScheduleClient};
use crate::config::project_dirs;
use crate::errors::WatchError;

/// Increment when CachedSchedule changes shape to auto-invalidate old files.
const CACHE_VERSION: u32 = 1;

/// Entries older than this trigger a live fetch.
pub const CACHE_TTL_MS: u64 = 5 * 60 * 1000;

const CACHE_FILE: &str = "schedule.json";

#[derive(Serialize, Deserialize)]
pub struct CachedSchedule {
    pub version: u32,
    /// Unix timestamp in milliseconds.
    pub fetched_at_ms: u64,
    pub data: Schedule,
}

impl CachedSchedule {
    pub fn new(fetched_at_ms: u64, data: Schedule) -> Self {
        Self {
            version: CACHE_VERSION,
            fetched_at_ms,
            data,
        }
    }

    /// Strictly inside the window: an entry written at T is reused up to
    /// T+4:59 and discarded from T+5:00 on.
    pub fn is_fresh(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.fetched_at_ms) < CACHE_TTL_MS
    }

    pub fn cache_path() -> Option<PathBuf> {
        let proj = project_dirs()?;
        let cache_dir = proj.cache_dir().to_path_buf();
        std::fs::create_dir_all(&cache_dir).ok()?;
        Some(cache_dir.join(CACHE_FILE))
    }

    pub fn save(&self) -> Result<(), anyhow::Error> {
        let path = Self::cache_path()
            .ok_or_else(|| anyhow::anyhow!("cannot determine cache directory"))?;
        let encoded = serde_json::to_string(self)?;
        std::fs::write(&path, encoded)?;
        Ok(())
    }

    /// Returns None if the file doesn't exist, is corrupt, or mismatches the
    /// current version (stale files are removed on the spot).
    pub fn load() -> Option<CachedSchedule> {
        let path = Self::cache_path()?;
        let text = std::fs::read_to_string(&path).ok()?;
        let cached: CachedSchedule = match serde_json::from_str(&text) {
            Ok(c) => c,
            Err(_) => {
                let _ = std::fs::remove_file(&path);
                return None;
            }
        };

        if cached.version != CACHE_VERSION {
            let _ = std::fs::remove_file(&path);
            return None;
        }

        Some(cached)
    }

    pub fn invalidate() {
        if let Some(path) = Self::cache_path() {
            let _ = std::fs::remove_file(path);
        }
    }
}

pub fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}

/// Cache-through fetch: fresh entry wins, otherwise a live fetch replaces it.
/// Returns the payload and whether it came from the cache.
pub async fn load_or_fetch(
    client: &ScheduleClient,
    bypass: bool,
) -> Result<(Schedule, bool), WatchError> {
    if !bypass {
        if let Some(cached) = CachedSchedule::load() {
            if cached.is_fresh(now_ms()) {
                tracing::debug!("schedule served from cache");
                return Ok((cached.data, true));
            }
        }
    }

    let data = client.fetch().await?;
    if let Err(e) = CachedSchedule::new(now_ms(), data.clone()).save() {
        tracing::warn!("schedule cache write failed: {e}");
    }
    Ok((data, false))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_are_reused_inside_the_window() {
        let written_at = 1_700_000_000_000;
        let cached = CachedSchedule::new(written_at, Schedule::default());
        // 4:59 later
        assert!(cached.is_fresh(written_at + 299 * 1000));
    }

    #[test]
    fn entries_are_discarded_past_the_window() {
        let written_at = 1_700_000_000_000;
        let cached = CachedSchedule::new(written_at, Schedule::default());
        // 5:01 later
        assert!(!cached.is_fresh(written_at + 301 * 1000));
        assert!(!cached.is_fresh(written_at + CACHE_TTL_MS));
    }

    #[test]
    fn clock_skew_does_not_underflow() {
        let cached = CachedSchedule::new(10_000, Schedule::default());
        assert!(cached.is_fresh(0));
    }
}
