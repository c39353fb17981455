// SPDX-FileCopyrightText: 2026 Daybook Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Daybook Orchestrator
//!
//! Main entry point for the Daybook API.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::calendar;
use crate::event::EventConfig;
use crate::facts::{FactStore, FactTable};
use crate::games::{ChoiceGame, GameError, NumberDraw};
use crate::resolver::{DailyContentResolver, DailyContentResult, LocalOutlook};
use crate::storage::{Settings, Storage};

use super::config::DaybookConfig;
use super::error::{DaybookError, DaybookResult};
use super::events::{DaybookEvent, EventDispatcher, EventHandler};

/// Main Daybook orchestrator.
///
/// Coordinates the persisted settings, the daily fact table, and the three
/// remote feeds. Opening an instance runs first-launch defaulting, so the
/// settings are always available afterwards.
pub struct Daybook {
    config: DaybookConfig,
    storage: Storage,
    fact_store: Option<FactStore>,
    facts: FactTable,
    resolver: DailyContentResolver,
    events: EventDispatcher,
}

impl Daybook {
    /// Opens (or creates) a Daybook instance at the configured storage path.
    pub fn new(config: DaybookConfig) -> DaybookResult<Self> {
        std::fs::create_dir_all(&config.storage_path)
            .map_err(|e| DaybookError::Configuration(e.to_string()))?;

        let storage = Storage::open(config.storage_path.join("daybook.db"))?;
        storage.init_settings_if_needed(calendar::today_local())?;

        let fact_store = FactStore::new(&config.storage_path)?;
        let facts = fact_store.load();
        let resolver = DailyContentResolver::new(config.feeds.clone())?;

        Ok(Daybook {
            config,
            storage,
            fact_store: Some(fact_store),
            facts,
            resolver,
            events: EventDispatcher::new(),
        })
    }

    /// Creates a Daybook instance with in-memory storage (for testing).
    ///
    /// Uses the bundled fact table; `refresh_facts` is unavailable.
    pub fn in_memory() -> DaybookResult<Self> {
        let config = DaybookConfig::default();
        let storage = Storage::in_memory()?;
        storage.init_settings_if_needed(calendar::today_local())?;
        let resolver = DailyContentResolver::new(config.feeds.clone())?;

        Ok(Daybook {
            config,
            storage,
            fact_store: None,
            facts: crate::facts::bundled_table(),
            resolver,
            events: EventDispatcher::new(),
        })
    }

    // === Events ===

    /// Adds an event handler.
    pub fn add_event_handler(&mut self, handler: Arc<dyn EventHandler>) {
        self.events.add_handler(handler);
    }

    // === Settings ===

    /// The persisted settings (always present after open).
    pub fn settings(&self) -> DaybookResult<Settings> {
        self.storage.load_settings()?.ok_or_else(|| {
            DaybookError::Configuration("settings not initialized".to_string())
        })
    }

    /// Updates the countdown event.
    pub fn update_event(&self, name: &str, target_date: NaiveDate) -> DaybookResult<()> {
        let event = EventConfig::new(name, target_date);
        self.storage.update_event(&event)?;
        Ok(())
    }

    /// Re-seeds the shuffle offset from today's day-of-year.
    pub fn reset_shuffle_offset(&self) -> DaybookResult<i64> {
        Ok(self.storage.reset_shuffle_offset(calendar::today_local())?)
    }

    // === Home screen ===

    /// The purely local part of today's content, for immediate rendering.
    pub fn today_outlook(&self) -> DaybookResult<LocalOutlook> {
        let settings = self.settings()?;
        Ok(DailyContentResolver::local_outlook(
            calendar::today_local(),
            &settings.event,
            settings.shuffle_offset,
            &self.facts,
        ))
    }

    /// Resolves today's full home-screen payload.
    ///
    /// The three feeds are fetched concurrently; each slot's completion is
    /// reported through the event dispatcher as it lands, and `HomeSettled`
    /// fires once all three have either succeeded or failed.
    pub async fn refresh_home(&self) -> DaybookResult<DailyContentResult> {
        let settings = self.settings()?;
        let today = calendar::today_local();
        let local = DailyContentResolver::local_outlook(
            today,
            &settings.event,
            settings.shuffle_offset,
            &self.facts,
        );

        let (almanac, weather, lottery) = tokio::join!(
            async {
                let result = self.resolver.fetch_almanac(today).await;
                self.events.dispatch(match &result {
                    Ok(_) => DaybookEvent::AlmanacLoaded,
                    Err(e) => DaybookEvent::AlmanacFailed {
                        error: e.to_string(),
                    },
                });
                result
            },
            async {
                let result = self.resolver.fetch_weather().await;
                self.events.dispatch(match &result {
                    Ok(_) => DaybookEvent::WeatherLoaded,
                    Err(e) => DaybookEvent::WeatherFailed {
                        error: e.to_string(),
                    },
                });
                result
            },
            async {
                let result = self.resolver.fetch_lottery().await;
                self.events.dispatch(match &result {
                    Ok(_) => DaybookEvent::LotteryLoaded,
                    Err(e) => DaybookEvent::LotteryFailed {
                        error: e.to_string(),
                    },
                });
                result
            },
        );

        self.events.dispatch(DaybookEvent::HomeSettled);

        Ok(DailyContentResult {
            days_remaining: local.days_remaining,
            active_fact: local.active_fact,
            almanac,
            weather,
            lottery,
        })
    }

    // === Facts ===

    /// The active fact table.
    pub fn facts(&self) -> &FactTable {
        &self.facts
    }

    /// Refreshes the fact table from the daily feed and caches it.
    pub async fn refresh_facts(&mut self) -> DaybookResult<usize> {
        let store = self.fact_store.as_ref().ok_or_else(|| {
            DaybookError::Configuration("fact refresh requires on-disk storage".to_string())
        })?;

        let table = store
            .refresh(self.resolver.client(), &self.config.facts_url)
            .await?;
        let records = table.len();
        self.facts = table;
        self.events.dispatch(DaybookEvent::FactsRefreshed { records });
        Ok(records)
    }

    // === Games ===

    /// A random-number picker over `min..=max`.
    pub fn number_game(&self, min: i64, max: i64) -> Result<NumberDraw, GameError> {
        NumberDraw::new(min, max)
    }

    /// The truth-or-dare choice game.
    pub fn truth_or_dare(&self) -> ChoiceGame {
        ChoiceGame::truth_or_dare()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_in_memory_initializes_settings() {
        let db = Daybook::in_memory().unwrap();
        let settings = db.settings().unwrap();
        assert_eq!(settings.event.name, "New Year");
    }

    #[test]
    fn test_update_event_persists() {
        let db = Daybook::in_memory().unwrap();
        db.update_event("Graduation", date(2027, 6, 20)).unwrap();

        let settings = db.settings().unwrap();
        assert_eq!(settings.event.name, "Graduation");
        assert_eq!(settings.event.target_date, date(2027, 6, 20));
    }

    #[test]
    fn test_today_outlook_uses_bundled_facts() {
        let db = Daybook::in_memory().unwrap();
        let outlook = db.today_outlook().unwrap();
        assert!(outlook.active_fact.id.starts_with("bundled-"));
    }

    #[test]
    fn test_refresh_facts_requires_disk_storage() {
        let mut db = Daybook::in_memory().unwrap();
        let runtime = tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap();
        let result = runtime.block_on(db.refresh_facts());
        assert!(matches!(result, Err(DaybookError::Configuration(_))));
    }
}
