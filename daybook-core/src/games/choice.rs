// SPDX-FileCopyrightText: 2026 Daybook Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Random-choice picker

use rand::Rng;

use super::GameError;

/// Uniform pick from a non-empty item list.
#[derive(Debug, Clone)]
pub struct ChoiceGame {
    items: Vec<String>,
}

impl ChoiceGame {
    /// Creates a picker over the given items.
    pub fn new(items: Vec<String>) -> Result<Self, GameError> {
        if items.is_empty() {
            return Err(GameError::NoItems);
        }
        Ok(ChoiceGame { items })
    }

    /// The truth-or-dare preset.
    pub fn truth_or_dare() -> Self {
        ChoiceGame {
            items: vec![
                "Truth".to_string(),
                "Dare".to_string(),
                "Pass".to_string(),
            ],
        }
    }

    /// The item list.
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Replaces the item list.
    pub fn set_items(&mut self, items: Vec<String>) -> Result<(), GameError> {
        if items.is_empty() {
            return Err(GameError::NoItems);
        }
        self.items = items;
        Ok(())
    }

    /// Picks one item with the thread-local generator.
    pub fn pick(&self) -> &str {
        self.pick_with(&mut rand::thread_rng())
    }

    /// Picks one item uniformly at random.
    pub fn pick_with<R: Rng>(&self, rng: &mut R) -> &str {
        &self.items[rng.gen_range(0..self.items.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_empty_items_rejected() {
        assert!(matches!(ChoiceGame::new(vec![]), Err(GameError::NoItems)));
    }

    #[test]
    fn test_pick_returns_a_listed_item() {
        let mut rng = StdRng::seed_from_u64(11);
        let game = ChoiceGame::new(vec!["a".to_string(), "b".to_string()]).unwrap();
        for _ in 0..20 {
            let picked = game.pick_with(&mut rng);
            assert!(game.items().iter().any(|i| i == picked));
        }
    }

    #[test]
    fn test_truth_or_dare_preset() {
        let game = ChoiceGame::truth_or_dare();
        assert_eq!(game.items(), ["Truth", "Dare", "Pass"]);
    }

    #[test]
    fn test_set_items_rejects_empty() {
        let mut game = ChoiceGame::truth_or_dare();
        assert!(game.set_items(vec![]).is_err());
        assert_eq!(game.items().len(), 3);
    }
}
