// SPDX-FileCopyrightText: 2026 Daybook Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Mini-games
//!
//! Two small games backed by uniform random selection: a random-number
//! picker that never repeats a value until reset, and a random-choice
//! picker over an editable item list (with a truth-or-dare preset).

mod choice;
mod number;

pub use choice::ChoiceGame;
pub use number::NumberDraw;

use thiserror::Error;

/// Errors for game setup.
#[derive(Debug, Error)]
pub enum GameError {
    /// The number range has no values.
    #[error("range is empty")]
    EmptyRange,

    /// The choice list has no items.
    #[error("no items to choose from")]
    NoItems,
}
