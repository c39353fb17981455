// SPDX-FileCopyrightText: 2026 Daybook Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Fact record type definitions

use serde::{Deserialize, Serialize};

/// One entry of the daily fact table.
///
/// Immutable after decode; one record is active per day. All fields are
/// free text as delivered by the daily feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyFactRecord {
    /// Opaque record id.
    pub id: String,
    /// Solar (gregorian) date label.
    pub solar_date: String,
    /// Lunar date label.
    pub lunar_date: String,
    /// Five-element label for the day slot.
    pub five_element: String,
    /// Activities the day is favorable for.
    #[serde(default)]
    pub fit_for: Vec<String>,
    /// Activities to avoid.
    #[serde(default)]
    pub avoid: Vec<String>,
    /// Daily motto shown on the home screen.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub motto: Option<String>,
}
