// SPDX-FileCopyrightText: 2026 Daybook Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Daily content resolver
//!
//! Produces the day's display payload from local state plus up to three
//! independent remote reads. The local part (countdown + active fact) is
//! pure and computed before any network round-trip, so a screen can render
//! it immediately. The three fetches run concurrently, complete in any
//! order, and fail independently: one flaky feed never blocks the rest of
//! the home screen.

use chrono::NaiveDate;
use log::{debug, warn};

use crate::calendar;
use crate::event::EventConfig;
use crate::facts::{DailyFactRecord, FactTable};
use crate::remote::{
    AlmanacRecord, FeedClient, FeedConfig, FetchError, LotterySnapshot, WeatherSnapshot,
};

/// The purely local part of a resolution, renderable without the network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalOutlook {
    /// Whole days until the configured event, clamped to zero.
    pub days_remaining: u32,
    /// The fact record active for today.
    pub active_fact: DailyFactRecord,
}

/// The settled result of one resolution pass.
///
/// `days_remaining` and `active_fact` are always present; each remote slot
/// is independently success or failure.
#[derive(Debug)]
pub struct DailyContentResult {
    /// Whole days until the configured event, clamped to zero.
    pub days_remaining: u32,
    /// The fact record active for today.
    pub active_fact: DailyFactRecord,
    /// Almanac lore for today, or why it couldn't be fetched.
    pub almanac: Result<AlmanacRecord, FetchError>,
    /// Current weather, or why it couldn't be fetched.
    pub weather: Result<WeatherSnapshot, FetchError>,
    /// Latest lottery draw, or why it couldn't be fetched.
    pub lottery: Result<LotterySnapshot, FetchError>,
}

impl DailyContentResult {
    /// True when all three remote slots resolved successfully.
    pub fn is_fully_loaded(&self) -> bool {
        self.almanac.is_ok() && self.weather.is_ok() && self.lottery.is_ok()
    }
}

/// Resolves the home screen's daily content.
pub struct DailyContentResolver {
    client: FeedClient,
    feeds: FeedConfig,
}

impl DailyContentResolver {
    /// Creates a resolver for the given feed configuration.
    pub fn new(feeds: FeedConfig) -> Result<Self, FetchError> {
        let client = FeedClient::new(feeds.timeout)?;
        Ok(DailyContentResolver { client, feeds })
    }

    /// Computes the local outlook: countdown plus active fact.
    ///
    /// Pure and idempotent; identical inputs always select the identical
    /// record. No I/O happens here.
    pub fn local_outlook(
        today: NaiveDate,
        event: &EventConfig,
        shuffle_offset: i64,
        facts: &FactTable,
    ) -> LocalOutlook {
        let day_of_year = calendar::day_of_year(today);
        LocalOutlook {
            days_remaining: event.days_remaining(today),
            active_fact: facts.active_fact(day_of_year, shuffle_offset).clone(),
        }
    }

    /// Resolves today's full payload.
    ///
    /// The local outlook is computed first, then the three fetches are
    /// issued concurrently. The call settles once every fetch has either
    /// produced a value or failed; no failure cancels a sibling. Dropping
    /// the returned future cancels all three fetches together.
    pub async fn resolve_today(
        &self,
        today: NaiveDate,
        event: &EventConfig,
        shuffle_offset: i64,
        facts: &FactTable,
    ) -> DailyContentResult {
        let local = Self::local_outlook(today, event, shuffle_offset, facts);

        let (almanac, weather, lottery) = tokio::join!(
            self.fetch_almanac(today),
            self.fetch_weather(),
            self.fetch_lottery(),
        );

        debug!(
            "resolution settled: almanac={} weather={} lottery={}",
            slot(&almanac),
            slot(&weather),
            slot(&lottery)
        );

        DailyContentResult {
            days_remaining: local.days_remaining,
            active_fact: local.active_fact,
            almanac,
            weather,
            lottery,
        }
    }

    /// Fetches today's almanac record.
    pub async fn fetch_almanac(&self, today: NaiveDate) -> Result<AlmanacRecord, FetchError> {
        let result = self
            .client
            .fetch_almanac(&self.feeds.almanac_url, today, &self.feeds.almanac_key)
            .await;
        if let Err(e) = &result {
            warn!("almanac fetch failed: {e}");
        }
        result
    }

    /// Fetches the current weather snapshot.
    pub async fn fetch_weather(&self) -> Result<WeatherSnapshot, FetchError> {
        let result = self
            .client
            .fetch_weather(
                &self.feeds.weather_url,
                &self.feeds.weather_location,
                &self.feeds.weather_key,
            )
            .await;
        if let Err(e) = &result {
            warn!("weather fetch failed: {e}");
        }
        result
    }

    /// Fetches the latest lottery draw.
    pub async fn fetch_lottery(&self) -> Result<LotterySnapshot, FetchError> {
        let result = self
            .client
            .fetch_lottery(
                &self.feeds.lottery_url,
                &self.feeds.lottery_id,
                None,
                &self.feeds.lottery_key,
            )
            .await;
        if let Err(e) = &result {
            warn!("lottery fetch failed: {e}");
        }
        result
    }

    /// The shared feed client, for callers that fetch outside a resolution.
    pub(crate) fn client(&self) -> &FeedClient {
        &self.client
    }
}

fn slot<T>(result: &Result<T, FetchError>) -> &'static str {
    match result {
        Ok(_) => "ok",
        Err(_) => "failed",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn facts(len: usize) -> FactTable {
        let records = (0..len)
            .map(|i| DailyFactRecord {
                id: format!("f-{i}"),
                solar_date: String::new(),
                lunar_date: String::new(),
                five_element: String::new(),
                fit_for: vec![],
                avoid: vec![],
                motto: None,
            })
            .collect();
        FactTable::new(records).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_local_outlook_concrete_rotation() {
        // January 10th is day-of-year 10; with offset 3 over 5 entries the
        // active index is (10 - 1 + 3) mod 5 = 2.
        let event = EventConfig::new("Launch", date(2026, 3, 1));
        let outlook =
            DailyContentResolver::local_outlook(date(2026, 1, 10), &event, 3, &facts(5));
        assert_eq!(outlook.active_fact.id, "f-2");
    }

    #[test]
    fn test_local_outlook_countdown_clamps() {
        let past = EventConfig::new("Past", date(2025, 8, 7));
        let outlook =
            DailyContentResolver::local_outlook(date(2026, 8, 7), &past, 0, &facts(3));
        assert_eq!(outlook.days_remaining, 0);
    }

    #[test]
    fn test_local_outlook_is_idempotent() {
        let event = EventConfig::new("Launch", date(2026, 12, 1));
        let today = date(2026, 8, 7);
        let t = facts(11);
        let first = DailyContentResolver::local_outlook(today, &event, 7, &t);
        let second = DailyContentResolver::local_outlook(today, &event, 7, &t);
        assert_eq!(first, second);
    }
}
