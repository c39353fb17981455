// SPDX-FileCopyrightText: 2026 Daybook Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Fact table and day-slot rotation

use thiserror::Error;

use super::types::DailyFactRecord;

/// Ordered, non-empty table of daily fact records.
///
/// Emptiness is rejected at construction: an empty table is a setup defect,
/// not a runtime condition, so it fails loudly here instead of surfacing as
/// a broken home screen later.
#[derive(Debug, Clone)]
pub struct FactTable {
    records: Vec<DailyFactRecord>,
}

impl FactTable {
    /// Creates a fact table from an ordered record sequence.
    pub fn new(records: Vec<DailyFactRecord>) -> Result<Self, FactError> {
        if records.is_empty() {
            return Err(FactError::EmptyTable);
        }
        Ok(FactTable { records })
    }

    /// Number of entries (always >= 1).
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always false; emptiness is rejected at construction.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records, in feed order.
    pub fn records(&self) -> &[DailyFactRecord] {
        &self.records
    }

    /// Index of the active record for the given day.
    ///
    /// `(day_of_year - 1 + shuffle_offset) mod len`, normalized into
    /// `[0, len)` for any intermediate value. The same calendar day maps
    /// to the same entry for a fixed offset.
    pub fn active_index(&self, day_of_year: u32, shuffle_offset: i64) -> usize {
        let len = self.records.len() as i64;
        (i64::from(day_of_year) - 1 + shuffle_offset).rem_euclid(len) as usize
    }

    /// The active record for the given day.
    pub fn active_fact(&self, day_of_year: u32, shuffle_offset: i64) -> &DailyFactRecord {
        &self.records[self.active_index(day_of_year, shuffle_offset)]
    }
}

/// Errors for fact table construction and storage.
#[derive(Debug, Error)]
pub enum FactError {
    /// The fact table has no entries.
    #[error("fact table is empty")]
    EmptyTable,

    /// IO error reading or writing the cache.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error decoding the table.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
