// SPDX-FileCopyrightText: 2026 Daybook Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Random-number picker
//!
//! Draws uniformly from an inclusive range. Recently drawn values are
//! excluded from subsequent draws; the exclusion window keeps the ten
//! most recent values, newest first.

use rand::Rng;

use super::GameError;

/// Number of recent draws excluded from re-selection.
const HISTORY_LIMIT: usize = 10;

/// Random-number picker over an inclusive range.
#[derive(Debug, Clone)]
pub struct NumberDraw {
    min: i64,
    max: i64,
    recent: Vec<i64>,
}

impl NumberDraw {
    /// Creates a picker over `min..=max`.
    pub fn new(min: i64, max: i64) -> Result<Self, GameError> {
        if min > max {
            return Err(GameError::EmptyRange);
        }
        Ok(NumberDraw {
            min,
            max,
            recent: Vec::new(),
        })
    }

    /// Replaces the range and clears the draw history.
    pub fn set_range(&mut self, min: i64, max: i64) -> Result<(), GameError> {
        if min > max {
            return Err(GameError::EmptyRange);
        }
        self.min = min;
        self.max = max;
        self.recent.clear();
        Ok(())
    }

    /// The active range.
    pub fn range(&self) -> (i64, i64) {
        (self.min, self.max)
    }

    /// Recent draws, newest first (at most ten).
    pub fn recent(&self) -> &[i64] {
        &self.recent
    }

    /// Clears the draw history.
    pub fn reset(&mut self) {
        self.recent.clear();
    }

    /// Draws the next number with the thread-local generator.
    pub fn draw(&mut self) -> Option<i64> {
        self.draw_with(&mut rand::thread_rng())
    }

    /// Draws the next number, excluding the recent window.
    ///
    /// Returns `None` once every value in the range is in the window.
    pub fn draw_with<R: Rng>(&mut self, rng: &mut R) -> Option<i64> {
        let candidates: Vec<i64> = (self.min..=self.max)
            .filter(|v| !self.recent.contains(v))
            .collect();
        if candidates.is_empty() {
            return None;
        }

        let value = candidates[rng.gen_range(0..candidates.len())];
        self.recent.insert(0, value);
        self.recent.truncate(HISTORY_LIMIT);
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_empty_range_rejected() {
        assert!(matches!(NumberDraw::new(5, 4), Err(GameError::EmptyRange)));
    }

    #[test]
    fn test_draws_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut game = NumberDraw::new(0, 20).unwrap();
        for _ in 0..10 {
            let value = game.draw_with(&mut rng).unwrap();
            assert!((0..=20).contains(&value));
        }
    }

    #[test]
    fn test_no_repeats_within_window() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut game = NumberDraw::new(0, 9).unwrap();
        let mut seen = Vec::new();
        while let Some(value) = game.draw_with(&mut rng) {
            assert!(!seen.contains(&value));
            seen.push(value);
        }
        // Ten values, window of ten: the range drains exactly once.
        assert_eq!(seen.len(), 10);
    }

    #[test]
    fn test_history_capped_newest_first() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut game = NumberDraw::new(0, 99).unwrap();
        let mut drawn = Vec::new();
        for _ in 0..15 {
            drawn.push(game.draw_with(&mut rng).unwrap());
        }
        assert_eq!(game.recent().len(), 10);
        assert_eq!(game.recent()[0], *drawn.last().unwrap());
    }

    #[test]
    fn test_reset_reopens_range() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut game = NumberDraw::new(0, 2).unwrap();
        while game.draw_with(&mut rng).is_some() {}
        assert!(game.draw_with(&mut rng).is_none());

        game.reset();
        assert!(game.draw_with(&mut rng).is_some());
    }

    #[test]
    fn test_set_range_clears_history() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut game = NumberDraw::new(0, 5).unwrap();
        game.draw_with(&mut rng);
        game.set_range(10, 12).unwrap();
        assert!(game.recent().is_empty());
        assert_eq!(game.range(), (10, 12));
    }
}
