//! Configuration for the remote feeds

use std::time::Duration;

/// Endpoints, credentials, and parameters for the three feeds.
#[derive(Debug, Clone)]
pub struct FeedConfig {
    /// Almanac-by-date endpoint.
    pub almanac_url: String,
    /// Access key for the almanac feed.
    pub almanac_key: String,

    /// Weather forecast endpoint.
    pub weather_url: String,
    /// Location/city identifier for the weather feed.
    pub weather_location: String,
    /// Access key for the weather feed.
    pub weather_key: String,

    /// Lottery draw lookup endpoint.
    pub lottery_url: String,
    /// Lottery-type identifier (e.g. "ssq").
    pub lottery_id: String,
    /// Access key for the lottery feed.
    pub lottery_key: String,

    /// HTTP timeout for all feed requests.
    pub timeout: Duration,
}

impl Default for FeedConfig {
    fn default() -> Self {
        FeedConfig {
            almanac_url: "https://v.juhe.cn/laohuangli/d".to_string(),
            almanac_key: String::new(),
            weather_url: "https://devapi.qweather.com/v7/weather/7d".to_string(),
            weather_location: String::new(),
            weather_key: String::new(),
            lottery_url: "https://apis.juhe.cn/lottery/query".to_string(),
            lottery_id: "ssq".to_string(),
            lottery_key: String::new(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl FeedConfig {
    /// Sets the almanac access key.
    pub fn with_almanac_key(mut self, key: impl Into<String>) -> Self {
        self.almanac_key = key.into();
        self
    }

    /// Sets the weather location and access key.
    pub fn with_weather(mut self, location: impl Into<String>, key: impl Into<String>) -> Self {
        self.weather_location = location.into();
        self.weather_key = key.into();
        self
    }

    /// Sets the lottery type and access key.
    pub fn with_lottery(mut self, lottery_id: impl Into<String>, key: impl Into<String>) -> Self {
        self.lottery_id = lottery_id.into();
        self.lottery_key = key.into();
        self
    }
}
