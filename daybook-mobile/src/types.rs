//! Mobile-friendly data types.
//!
//! These types are wrappers around daybook-core types that are compatible
//! with UniFFI for cross-language bindings. Feed results are flattened to
//! `Option` value + `Option` error string pairs, which map cleanly onto
//! Swift/Kotlin optionals.

use daybook_core::{
    AlmanacRecord, DailyContentResult, DailyFactRecord, DailyForecast, FeedConfig, LocalOutlook,
    LotterySnapshot, Settings, WeatherSnapshot,
};

/// Feed credentials and parameters supplied by the shell.
///
/// Endpoint URLs keep their defaults; shells only carry keys and location.
#[derive(Debug, Clone, uniffi::Record)]
pub struct MobileFeedConfig {
    /// Access key for the almanac feed.
    pub almanac_key: String,
    /// Location/city identifier for the weather feed.
    pub weather_location: String,
    /// Access key for the weather feed.
    pub weather_key: String,
    /// Lottery-type identifier (e.g. "ssq").
    pub lottery_id: String,
    /// Access key for the lottery feed.
    pub lottery_key: String,
}

impl MobileFeedConfig {
    pub fn into_feed_config(self) -> FeedConfig {
        FeedConfig::default()
            .with_almanac_key(self.almanac_key)
            .with_weather(self.weather_location, self.weather_key)
            .with_lottery(self.lottery_id, self.lottery_key)
    }
}

/// Mobile-friendly settings row.
#[derive(Debug, Clone, uniffi::Record)]
pub struct MobileSettings {
    pub event_name: String,
    /// ISO date string.
    pub event_date: String,
    pub shuffle_offset: i64,
}

impl From<Settings> for MobileSettings {
    fn from(settings: Settings) -> Self {
        MobileSettings {
            event_name: settings.event.name,
            event_date: daybook_core::calendar::format_event_date(settings.event.target_date),
            shuffle_offset: settings.shuffle_offset,
        }
    }
}

/// Mobile-friendly daily fact record.
#[derive(Debug, Clone, uniffi::Record)]
pub struct MobileDailyFact {
    pub id: String,
    pub solar_date: String,
    pub lunar_date: String,
    pub five_element: String,
    pub fit_for: Vec<String>,
    pub avoid: Vec<String>,
    pub motto: Option<String>,
}

impl From<DailyFactRecord> for MobileDailyFact {
    fn from(fact: DailyFactRecord) -> Self {
        MobileDailyFact {
            id: fact.id,
            solar_date: fact.solar_date,
            lunar_date: fact.lunar_date,
            five_element: fact.five_element,
            fit_for: fact.fit_for,
            avoid: fact.avoid,
            motto: fact.motto,
        }
    }
}

/// The locally computed part of today's content.
#[derive(Debug, Clone, uniffi::Record)]
pub struct MobileOutlook {
    pub days_remaining: u32,
    pub fact: MobileDailyFact,
}

impl From<LocalOutlook> for MobileOutlook {
    fn from(outlook: LocalOutlook) -> Self {
        MobileOutlook {
            days_remaining: outlook.days_remaining,
            fact: outlook.active_fact.into(),
        }
    }
}

/// Mobile-friendly almanac record with pre-shortened activity lists.
#[derive(Debug, Clone, uniffi::Record)]
pub struct MobileAlmanac {
    pub solar_date: String,
    pub lunar_date: String,
    pub five_element: String,
    pub day_clash: String,
    pub taboo: String,
    /// First three "do" activities, display-ready.
    pub top_fit: String,
    /// First three "avoid" activities, display-ready.
    pub top_avoid: String,
}

impl From<AlmanacRecord> for MobileAlmanac {
    fn from(record: AlmanacRecord) -> Self {
        let top_fit = record.top_fit();
        let top_avoid = record.top_avoid();
        MobileAlmanac {
            solar_date: record.solar_date,
            lunar_date: record.lunar_date,
            five_element: record.five_element,
            day_clash: record.day_clash,
            taboo: record.taboo,
            top_fit,
            top_avoid,
        }
    }
}

/// One forecast day.
#[derive(Debug, Clone, uniffi::Record)]
pub struct MobileForecastDay {
    pub date: String,
    pub text: String,
    pub icon_day: String,
    pub icon_night: String,
    pub temp: String,
    pub wind_dir: String,
}

impl From<&DailyForecast> for MobileForecastDay {
    fn from(day: &DailyForecast) -> Self {
        MobileForecastDay {
            date: day.date.clone(),
            text: day.text.clone(),
            icon_day: day.icon_day.clone(),
            icon_night: day.icon_night.clone(),
            temp: day.temp.clone(),
            wind_dir: day.wind_dir.clone(),
        }
    }
}

/// Mobile-friendly weather snapshot.
#[derive(Debug, Clone, uniffi::Record)]
pub struct MobileWeather {
    pub city: String,
    pub update_time: String,
    /// Per-day forecast, today first.
    pub days: Vec<MobileForecastDay>,
}

impl From<WeatherSnapshot> for MobileWeather {
    fn from(snapshot: WeatherSnapshot) -> Self {
        MobileWeather {
            city: snapshot.city,
            update_time: snapshot.update_time,
            days: snapshot.daily.iter().map(MobileForecastDay::from).collect(),
        }
    }
}

/// Mobile-friendly lottery draw with pre-split ball groups.
#[derive(Debug, Clone, uniffi::Record)]
pub struct MobileLottery {
    pub name: String,
    pub draw_no: String,
    pub draw_date: String,
    /// Raw comma-separated result.
    pub result: String,
    /// First six numbers, space-joined (6+1 draws).
    pub main_numbers: Option<String>,
    /// Last number (6+1 draws).
    pub bonus_number: Option<String>,
    pub pool_amount: String,
}

impl From<LotterySnapshot> for MobileLottery {
    fn from(snapshot: LotterySnapshot) -> Self {
        let main_numbers = snapshot.main_numbers(6);
        let bonus_number = snapshot.bonus_numbers(1);
        MobileLottery {
            name: snapshot.lottery_name,
            draw_no: snapshot.lottery_no,
            draw_date: snapshot.lottery_date,
            result: snapshot.lottery_res,
            main_numbers,
            bonus_number,
            pool_amount: snapshot.lottery_pool_amount,
        }
    }
}

/// The settled home-screen payload.
///
/// The local part is always present; each feed slot carries either its
/// value or an error description.
#[derive(Debug, Clone, uniffi::Record)]
pub struct MobileHomeContent {
    pub days_remaining: u32,
    pub fact: MobileDailyFact,
    pub almanac: Option<MobileAlmanac>,
    pub almanac_error: Option<String>,
    pub weather: Option<MobileWeather>,
    pub weather_error: Option<String>,
    pub lottery: Option<MobileLottery>,
    pub lottery_error: Option<String>,
}

impl From<DailyContentResult> for MobileHomeContent {
    fn from(result: DailyContentResult) -> Self {
        let (almanac, almanac_error) = split(result.almanac);
        let (weather, weather_error) = split(result.weather);
        let (lottery, lottery_error) = split(result.lottery);
        MobileHomeContent {
            days_remaining: result.days_remaining,
            fact: result.active_fact.into(),
            almanac,
            almanac_error,
            weather,
            weather_error,
            lottery,
            lottery_error,
        }
    }
}

fn split<T, M: From<T>, E: std::fmt::Display>(result: Result<T, E>) -> (Option<M>, Option<String>) {
    match result {
        Ok(value) => (Some(value.into()), None),
        Err(e) => (None, Some(e.to_string())),
    }
}
