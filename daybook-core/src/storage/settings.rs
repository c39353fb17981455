// SPDX-FileCopyrightText: 2026 Daybook Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Settings storage operations.
//!
//! Persists the two process-wide scalars: the countdown event config and
//! the shuffle offset. Both are read-mostly; every write is one SQL
//! statement through a scoped operation, so a concurrent resolution only
//! ever sees a fully-written row.

use chrono::NaiveDate;
use rusqlite::params;

use crate::calendar;
use crate::event::EventConfig;

use super::{Storage, StorageError};

/// The persisted settings row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// The configured countdown event.
    pub event: EventConfig,
    /// Shuffle offset decorrelating day-of-year from the fact table index.
    pub shuffle_offset: i64,
}

impl Storage {
    /// Loads the settings row, if one has been initialized.
    pub fn load_settings(&self) -> Result<Option<Settings>, StorageError> {
        let result = self.conn().query_row(
            "SELECT event_name, event_date, shuffle_offset FROM settings WHERE id = 1",
            [],
            |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, i64>(2)?,
                ))
            },
        );

        match result {
            Ok((name, date, shuffle_offset)) => {
                let target_date = calendar::parse_event_date(&date).ok_or_else(|| {
                    StorageError::InvalidValue(format!("unparseable event date: {date}"))
                })?;
                Ok(Some(Settings {
                    event: EventConfig::new(name, target_date),
                    shuffle_offset,
                }))
            }
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(StorageError::Database(e)),
        }
    }

    /// First-launch defaulting: writes the default settings row if absent.
    ///
    /// The event defaults to New Year on the next January 1st; the shuffle
    /// offset is seeded once from today's day-of-year. Subsequent calls
    /// leave the stored row untouched.
    pub fn init_settings_if_needed(&self, today: NaiveDate) -> Result<Settings, StorageError> {
        let default_event = EventConfig::default_for(today);
        let default_offset = i64::from(calendar::day_of_year(today)) - 1;

        self.conn().execute(
            "INSERT INTO settings (id, event_name, event_date, shuffle_offset, updated_at)
             VALUES (1, ?1, ?2, ?3, ?4)
             ON CONFLICT(id) DO NOTHING",
            params![
                default_event.name,
                calendar::format_event_date(default_event.target_date),
                default_offset,
                now_secs(),
            ],
        )?;

        self.load_settings()?.ok_or_else(|| {
            StorageError::InvalidValue("settings row missing after init".to_string())
        })
    }

    /// Updates the countdown event. The shuffle offset is left untouched.
    pub fn update_event(&self, event: &EventConfig) -> Result<(), StorageError> {
        self.conn().execute(
            "UPDATE settings SET event_name = ?1, event_date = ?2, updated_at = ?3 WHERE id = 1",
            params![
                event.name,
                calendar::format_event_date(event.target_date),
                now_secs(),
            ],
        )?;
        Ok(())
    }

    /// Explicitly re-seeds the shuffle offset from today's day-of-year.
    pub fn reset_shuffle_offset(&self, today: NaiveDate) -> Result<i64, StorageError> {
        let offset = i64::from(calendar::day_of_year(today)) - 1;
        self.conn().execute(
            "UPDATE settings SET shuffle_offset = ?1, updated_at = ?2 WHERE id = 1",
            params![offset, now_secs()],
        )?;
        Ok(offset)
    }
}

fn now_secs() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("system time before UNIX epoch")
        .as_secs() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_load_before_init_is_none() {
        let storage = Storage::in_memory().unwrap();
        assert!(storage.load_settings().unwrap().is_none());
    }

    #[test]
    fn test_init_seeds_defaults() {
        let storage = Storage::in_memory().unwrap();
        // August 7th 2026 is day-of-year 219.
        let settings = storage.init_settings_if_needed(date(2026, 8, 7)).unwrap();

        assert_eq!(settings.event.name, "New Year");
        assert_eq!(settings.event.target_date, date(2027, 1, 1));
        assert_eq!(settings.shuffle_offset, 218);
    }

    #[test]
    fn test_init_is_idempotent() {
        let storage = Storage::in_memory().unwrap();
        let first = storage.init_settings_if_needed(date(2026, 8, 7)).unwrap();
        // A later launch on a different day must not re-seed.
        let second = storage.init_settings_if_needed(date(2026, 12, 24)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_update_event_keeps_offset() {
        let storage = Storage::in_memory().unwrap();
        storage.init_settings_if_needed(date(2026, 8, 7)).unwrap();

        let event = EventConfig::new("Spring Festival", date(2027, 2, 17));
        storage.update_event(&event).unwrap();

        let settings = storage.load_settings().unwrap().unwrap();
        assert_eq!(settings.event, event);
        assert_eq!(settings.shuffle_offset, 218);
    }

    #[test]
    fn test_reset_shuffle_offset() {
        let storage = Storage::in_memory().unwrap();
        storage.init_settings_if_needed(date(2026, 8, 7)).unwrap();

        let offset = storage.reset_shuffle_offset(date(2027, 1, 2)).unwrap();
        assert_eq!(offset, 1);
        assert_eq!(
            storage.load_settings().unwrap().unwrap().shuffle_offset,
            1
        );
    }

    #[test]
    fn test_legacy_dotted_event_date_still_loads() {
        let storage = Storage::in_memory().unwrap();
        storage.init_settings_if_needed(date(2026, 8, 7)).unwrap();
        storage
            .conn()
            .execute(
                "UPDATE settings SET event_date = '2027.02.17' WHERE id = 1",
                [],
            )
            .unwrap();

        let settings = storage.load_settings().unwrap().unwrap();
        assert_eq!(settings.event.target_date, date(2027, 2, 17));
    }
}
