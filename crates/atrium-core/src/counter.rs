//! View counter adapters
//!
//! Two strategies for "on load, obtain and render a count": a remote badge
//! URL (the count lives with the remote service), or a locally persisted
//! record with a hardcoded floor and a fallback store. Storage trouble
//! never surfaces to the user; the worst case is an in-memory count for
//! this session only.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Starting count when no record exists yet
pub const VIEW_FLOOR: u64 = 178;

/// File name of the counter record inside its store directory
const RECORD_FILE: &str = "views.yaml";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
struct CounterRecord {
    views: u64,
}

/// Build the remote badge URL for a page id
pub fn badge_url(page_id: &str) -> String {
    format!(
        "https://views-counter.vercel.app/badge?pageId={}&type=total&style=none",
        page_id
    )
}

/// Locally persisted view counter with a fallback store
pub struct ViewCounter {
    primary: PathBuf,
    fallback: PathBuf,
}

impl ViewCounter {
    pub fn new(primary_dir: &Path, fallback_dir: &Path) -> Self {
        Self {
            primary: primary_dir.join(RECORD_FILE),
            fallback: fallback_dir.join(RECORD_FILE),
        }
    }

    /// Default store locations: user data dir primary, temp dir fallback
    pub fn default_stores() -> Self {
        let primary = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("atrium");
        let fallback = std::env::temp_dir().join("atrium");
        Self::new(&primary, &fallback)
    }

    /// Load the current count and persist this visit
    ///
    /// A fresh store yields [`VIEW_FLOOR`]; every later visit increments.
    /// Never fails: a primary write failure falls back to the secondary
    /// store, and if that fails too the count is returned anyway.
    pub fn record_visit(&self) -> u64 {
        let count = match self.read_any() {
            Some(previous) => previous + 1,
            None => VIEW_FLOOR,
        };

        if let Err(e) = self.write(&self.primary, count) {
            log::warn!("counter: primary store write failed ({}), using fallback", e);
            if let Err(e) = self.write(&self.fallback, count) {
                log::warn!(
                    "counter: fallback store write failed too ({}), count not persisted",
                    e
                );
            }
        }
        count
    }

    fn read_any(&self) -> Option<u64> {
        self.read(&self.primary).or_else(|| self.read(&self.fallback))
    }

    fn read(&self, path: &Path) -> Option<u64> {
        let contents = std::fs::read_to_string(path).ok()?;
        match serde_yaml::from_str::<CounterRecord>(&contents) {
            Ok(record) => Some(record.views),
            Err(e) => {
                log::warn!("counter: unreadable record at {:?}: {}", path, e);
                None
            }
        }
    }

    fn write(&self, path: &Path, views: u64) -> std::io::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let yaml = serde_yaml::to_string(&CounterRecord { views })
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        std::fs::write(path, yaml)
    }
}
