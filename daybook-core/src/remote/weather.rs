// SPDX-FileCopyrightText: 2026 Daybook Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Current weather feed
//!
//! One snapshot per fetch: city, observation timestamp, and an ordered
//! per-day forecast. The upstream feed delivers every value as a string;
//! the snapshot keeps them that way for display.

use serde::{Deserialize, Serialize};

use super::client::{FeedClient, FetchError};

/// Point-in-time weather read for one location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherSnapshot {
    /// Opaque snapshot id.
    pub id: String,
    /// City/location display name.
    pub city: String,
    /// When the feed last updated this snapshot.
    pub update_time: String,
    /// Per-day forecast entries, today first.
    #[serde(default)]
    pub daily: Vec<DailyForecast>,
}

/// One forecast day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyForecast {
    /// Forecast date, ISO.
    pub date: String,
    /// Weather text ("cloudy", "light rain", ...).
    pub text: String,
    /// Daytime icon identifier.
    pub icon_day: String,
    /// Nighttime icon identifier.
    pub icon_night: String,
    /// Temperature, degrees Celsius.
    pub temp: String,
    /// Wind descriptor ("NE level 3", ...).
    pub wind_dir: String,
}

impl WeatherSnapshot {
    /// Today's forecast entry, if the feed delivered any.
    pub fn today(&self) -> Option<&DailyForecast> {
        self.daily.first()
    }
}

impl FeedClient {
    /// Fetches the weather snapshot for a location.
    pub async fn fetch_weather(
        &self,
        url: &str,
        location: &str,
        key: &str,
    ) -> Result<WeatherSnapshot, FetchError> {
        self.get_json(url, &[("location", location), ("key", key)])
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_camel_case_wire_keys() {
        let json = r#"{
            "id": "w-1",
            "city": "Shanghai",
            "updateTime": "2026-08-07T07:35+08:00",
            "daily": [
                {
                    "date": "2026-08-07",
                    "text": "cloudy",
                    "iconDay": "101",
                    "iconNight": "151",
                    "temp": "31",
                    "windDir": "SE level 3"
                }
            ]
        }"#;
        let snapshot: WeatherSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.city, "Shanghai");
        assert_eq!(snapshot.today().unwrap().icon_night, "151");
    }

    #[test]
    fn test_today_is_none_without_forecast_days() {
        let snapshot = WeatherSnapshot {
            id: "w-1".to_string(),
            city: "Shanghai".to_string(),
            update_time: String::new(),
            daily: vec![],
        };
        assert!(snapshot.today().is_none());
    }
}
