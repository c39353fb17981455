// SPDX-FileCopyrightText: 2026 Daybook Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Local-calendar date helpers
//!
//! All "day" boundaries in Daybook follow the user's wall clock, not UTC.
//! Everything here is pure computation over `chrono::NaiveDate`.

use chrono::{Datelike, Local, NaiveDate};

/// Today's date under the local calendar.
pub fn today_local() -> NaiveDate {
    Local::now().date_naive()
}

/// 1-based ordinal day of the year (leap-year aware, 1..=366).
pub fn day_of_year(date: NaiveDate) -> u32 {
    date.ordinal()
}

/// Whole days from `from` to `target`, clamped to zero.
///
/// A countdown never goes negative: past targets report 0.
pub fn days_until(from: NaiveDate, target: NaiveDate) -> u32 {
    (target - from).num_days().max(0) as u32
}

/// Parses a stored event date.
///
/// Accepts ISO `YYYY-MM-DD` and the legacy `YYYY.MM.DD` settings format.
pub fn parse_event_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(value, "%Y.%m.%d"))
        .ok()
}

/// Formats an event date in the canonical ISO form.
pub fn format_event_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
