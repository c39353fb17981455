// SPDX-FileCopyrightText: 2026 Daybook Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Fact table storage: cached file with bundled fallback
//!
//! The store keeps the last fetched table under `facts/table.json` in the
//! storage directory, written atomically so a crash never leaves a partial
//! file. A missing or corrupt cache falls back to the bundled table.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::remote::{FeedClient, FetchError};

use super::table::{FactError, FactTable};
use super::types::DailyFactRecord;

const TABLE_FILENAME: &str = "table.json";

/// Local store for the daily fact table.
pub struct FactStore {
    cache_dir: PathBuf,
}

impl FactStore {
    /// Creates a fact store at the given storage path.
    ///
    /// Creates a `facts/` subdirectory if it doesn't exist.
    pub fn new(storage_path: &Path) -> Result<Self, FactError> {
        let cache_dir = storage_path.join("facts");
        fs::create_dir_all(&cache_dir)?;
        Ok(FactStore { cache_dir })
    }

    /// Loads the fact table, preferring the cached file over the bundled one.
    pub fn load(&self) -> FactTable {
        match self.cached() {
            Some(table) => table,
            None => bundled_table(),
        }
    }

    /// The cached table, if present and decodable.
    fn cached(&self) -> Option<FactTable> {
        let path = self.cache_dir.join(TABLE_FILENAME);
        let data = fs::read_to_string(&path).ok()?;
        let records: Vec<DailyFactRecord> = match serde_json::from_str(&data) {
            Ok(records) => records,
            Err(e) => {
                warn!("discarding corrupt fact cache at {}: {}", path.display(), e);
                return None;
            }
        };
        FactTable::new(records).ok()
    }

    /// Validates and caches a freshly fetched table.
    pub fn save(&self, records: Vec<DailyFactRecord>) -> Result<FactTable, FactError> {
        let table = FactTable::new(records)?;
        let data = serde_json::to_string_pretty(table.records())?;
        atomic_write(&self.cache_dir.join(TABLE_FILENAME), data.as_bytes())?;
        Ok(table)
    }

    /// Fetches the daily feed and replaces the cached table.
    ///
    /// The cache is only replaced by a feed that decodes to a non-empty
    /// table; a bad feed leaves the previous cache untouched.
    pub async fn refresh(&self, client: &FeedClient, url: &str) -> Result<FactTable, RefreshError> {
        let records: Vec<DailyFactRecord> = client.get_json(url, &[]).await?;
        debug!("fact feed returned {} records", records.len());
        Ok(self.save(records)?)
    }
}

/// Errors from a fact feed refresh.
#[derive(Debug, thiserror::Error)]
pub enum RefreshError {
    /// The feed could not be fetched or decoded.
    #[error("fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// The feed decoded but was not a usable table.
    #[error("fact error: {0}")]
    Fact(#[from] FactError),
}

/// Atomic file write (write to temp, then rename).
fn atomic_write(path: &Path, data: &[u8]) -> Result<(), FactError> {
    let temp_path = path.with_extension("tmp");
    fs::write(&temp_path, data)?;
    fs::rename(&temp_path, path)?;
    Ok(())
}

/// Bundled fact table - compiled into the binary as the offline fallback.
pub(crate) fn bundled_table() -> FactTable {
    FactTable::new(bundled_facts()).expect("bundled fact table is non-empty")
}

fn bundled_facts() -> Vec<DailyFactRecord> {
    fn record(id: &str, motto: &str, fit: &[&str], avoid: &[&str]) -> DailyFactRecord {
        DailyFactRecord {
            id: id.to_string(),
            solar_date: String::new(),
            lunar_date: String::new(),
            five_element: String::new(),
            fit_for: fit.iter().map(|s| s.to_string()).collect(),
            avoid: avoid.iter().map(|s| s.to_string()).collect(),
            motto: Some(motto.to_string()),
        }
    }

    vec![
        record(
            "bundled-001",
            "Well begun is half done.",
            &["planning", "cleaning"],
            &["travel"],
        ),
        record(
            "bundled-002",
            "Little strokes fell great oaks.",
            &["study", "repairs"],
            &["contracts"],
        ),
        record(
            "bundled-003",
            "The best time to plant a tree was twenty years ago. The second best time is now.",
            &["gardening", "visits"],
            &["moving house"],
        ),
        record(
            "bundled-004",
            "Fortune favors the prepared mind.",
            &["trade", "travel"],
            &["weddings"],
        ),
        record(
            "bundled-005",
            "A journey of a thousand miles begins with a single step.",
            &["travel", "opening"],
            &["groundbreaking"],
        ),
        record(
            "bundled-006",
            "Make hay while the sun shines.",
            &["harvest", "celebrations"],
            &["lawsuits"],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_atomic_write() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("table.json");

        atomic_write(&path, b"[]").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
        assert!(!path.with_extension("tmp").exists());
    }

    #[test]
    fn test_bundled_table_not_empty() {
        let table = bundled_table();
        assert!(table.len() > 1);
        assert!(table.records().iter().all(|r| r.motto.is_some()));
    }

    #[test]
    fn test_load_falls_back_to_bundled() {
        let temp = TempDir::new().unwrap();
        let store = FactStore::new(temp.path()).unwrap();

        let table = store.load();
        assert_eq!(table.records()[0].id, "bundled-001");
    }

    #[test]
    fn test_save_then_load_prefers_cache() {
        let temp = TempDir::new().unwrap();
        let store = FactStore::new(temp.path()).unwrap();

        let records = vec![DailyFactRecord {
            id: "feed-1".to_string(),
            solar_date: "2026-08-07".to_string(),
            lunar_date: "lunar".to_string(),
            five_element: "wood".to_string(),
            fit_for: vec!["rest".to_string()],
            avoid: vec![],
            motto: None,
        }];
        store.save(records).unwrap();

        let table = store.load();
        assert_eq!(table.len(), 1);
        assert_eq!(table.records()[0].id, "feed-1");
    }

    #[test]
    fn test_save_rejects_empty_feed() {
        let temp = TempDir::new().unwrap();
        let store = FactStore::new(temp.path()).unwrap();
        assert!(matches!(store.save(vec![]), Err(FactError::EmptyTable)));
    }

    #[test]
    fn test_corrupt_cache_falls_back_to_bundled() {
        let temp = TempDir::new().unwrap();
        let store = FactStore::new(temp.path()).unwrap();
        fs::write(temp.path().join("facts").join(TABLE_FILENAME), b"{not json").unwrap();

        let table = store.load();
        assert_eq!(table.records()[0].id, "bundled-001");
    }
}
