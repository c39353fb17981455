// SPDX-FileCopyrightText: 2026 Daybook Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Almanac-by-date feed
//!
//! Returns one record of traditional calendar lore for a given date. Wire
//! keys follow the upstream feed; field names here say what they mean.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::client::{FeedClient, FetchError, ServiceEnvelope};

/// One day of almanac lore.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlmanacRecord {
    /// Opaque record id.
    pub id: String,
    /// Solar (gregorian) date, e.g. "2026-08-07".
    #[serde(rename = "yangli")]
    pub solar_date: String,
    /// Lunar date label.
    #[serde(rename = "yinli")]
    pub lunar_date: String,
    /// Five-element label.
    #[serde(rename = "wuxing")]
    pub five_element: String,
    /// Day-clash warning.
    #[serde(rename = "chongsha")]
    pub day_clash: String,
    /// Taboo note for the day.
    #[serde(rename = "baiji")]
    pub taboo: String,
    /// Auspicious spirits, space-separated.
    #[serde(rename = "jishen")]
    pub lucky_spirits: String,
    /// Activities the day is favorable for, space-separated.
    #[serde(rename = "yi")]
    pub fit_for: String,
    /// Inauspicious spirits, space-separated.
    #[serde(rename = "xiongshen")]
    pub unlucky_spirits: String,
    /// Activities to avoid, space-separated.
    #[serde(rename = "ji")]
    pub avoid: String,
}

impl AlmanacRecord {
    /// First three "do" activities, placeholder entries skipped.
    pub fn top_fit(&self) -> String {
        first_terms(&self.fit_for, 3)
    }

    /// First three "avoid" activities, placeholder entries skipped.
    pub fn top_avoid(&self) -> String {
        first_terms(&self.avoid, 3)
    }
}

fn first_terms(value: &str, count: usize) -> String {
    value
        .split_whitespace()
        .filter(|term| *term != "-")
        .take(count)
        .collect::<Vec<_>>()
        .join(" ")
}

impl FeedClient {
    /// Fetches the almanac record for one date.
    pub async fn fetch_almanac(
        &self,
        url: &str,
        date: NaiveDate,
        key: &str,
    ) -> Result<AlmanacRecord, FetchError> {
        let date = date.format("%Y-%m-%d").to_string();
        let envelope: ServiceEnvelope<AlmanacRecord> = self
            .get_json(url, &[("date", date.as_str()), ("key", key)])
            .await?;
        envelope.into_result()
    }
}
