// SPDX-FileCopyrightText: 2026 Daybook Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Remote feed clients
//!
//! Three independent read-only feeds populate the home screen:
//! - almanac-by-date (traditional calendar lore for one day)
//! - current weather (per-day forecast snapshot)
//! - lottery draw lookup (latest or numbered draw)
//!
//! Each feed is a parameterized GET decoded into immutable records. A
//! failing feed reports a typed [`FetchError`] and never affects the
//! other two.

mod almanac;
mod client;
mod config;
mod lottery;
mod weather;

pub use almanac::AlmanacRecord;
pub use client::{FeedClient, FetchError, FetchErrorKind};
pub use config::FeedConfig;
pub use lottery::{LotterySnapshot, PrizeTier};
pub use weather::{DailyForecast, WeatherSnapshot};
