//! Countdown event configuration
//!
//! The home screen counts down to one configured target date. The config is
//! defaulted on first launch and only changes through an explicit settings
//! update.

use chrono::{Datelike, NaiveDate};

use crate::calendar;

/// The configured countdown target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventConfig {
    /// Display name of the event.
    pub name: String,
    /// The calendar date counted down to.
    pub target_date: NaiveDate,
}

impl EventConfig {
    /// Creates an event config.
    pub fn new(name: impl Into<String>, target_date: NaiveDate) -> Self {
        EventConfig {
            name: name.into(),
            target_date,
        }
    }

    /// First-launch default: New Year on the next January 1st.
    pub fn default_for(today: NaiveDate) -> Self {
        // Unwrap is fine: January 1st exists in every year.
        let next_new_year = NaiveDate::from_ymd_opt(today.year() + 1, 1, 1).unwrap();
        EventConfig::new("New Year", next_new_year)
    }

    /// Whole days left until the target, clamped to zero.
    pub fn days_remaining(&self, today: NaiveDate) -> u32 {
        calendar::days_until(today, self.target_date)
    }
}
