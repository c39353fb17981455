// SPDX-FileCopyrightText: 2026 Daybook Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Lottery draw lookup feed
//!
//! Looks up one draw by lottery type, either the latest (empty draw number)
//! or a specific numbered draw. Wire keys follow the upstream feed.

use serde::{Deserialize, Serialize};

use super::client::{FeedClient, FetchError, ServiceEnvelope};

/// One lottery draw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LotterySnapshot {
    /// Lottery-type identifier.
    pub lottery_id: String,
    /// Lottery display name.
    pub lottery_name: String,
    /// Draw result, comma-separated numbers.
    pub lottery_res: String,
    /// Draw number.
    pub lottery_no: String,
    /// Draw date.
    pub lottery_date: String,
    /// Redemption deadline.
    pub lottery_exdate: String,
    /// Sales amount for the draw.
    pub lottery_sale_amount: String,
    /// Prize pool amount after the draw.
    pub lottery_pool_amount: String,
    /// Prize tier breakdowns, top tier first.
    #[serde(default)]
    pub lottery_prize: Vec<PrizeTier>,
}

/// One prize tier of a draw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrizeTier {
    /// Tier name.
    pub prize_name: String,
    /// Number of winners.
    pub prize_num: String,
    /// Prize amount per winner.
    pub prize_amount: String,
    /// Eligibility note.
    pub prize_require: String,
}

impl LotterySnapshot {
    fn numbers(&self) -> Vec<&str> {
        let trimmed = self.lottery_res.trim();
        if trimmed.is_empty() {
            return vec![];
        }
        trimmed.split(',').map(str::trim).collect()
    }

    /// The first `count` drawn numbers, space-joined.
    ///
    /// For a 6+1 draw, `main_numbers(6)` is the red-ball half.
    pub fn main_numbers(&self, count: usize) -> Option<String> {
        let numbers = self.numbers();
        if numbers.is_empty() {
            return None;
        }
        Some(numbers.iter().take(count).copied().collect::<Vec<_>>().join(" "))
    }

    /// The last `count` drawn numbers, space-joined.
    ///
    /// For a 6+1 draw, `bonus_numbers(1)` is the blue ball.
    pub fn bonus_numbers(&self, count: usize) -> Option<String> {
        let numbers = self.numbers();
        if numbers.is_empty() {
            return None;
        }
        let skip = numbers.len().saturating_sub(count);
        Some(numbers.iter().skip(skip).copied().collect::<Vec<_>>().join(" "))
    }
}

impl FeedClient {
    /// Looks up a lottery draw.
    ///
    /// An empty `draw_no` asks the feed for the latest draw.
    pub async fn fetch_lottery(
        &self,
        url: &str,
        lottery_id: &str,
        draw_no: Option<&str>,
        key: &str,
    ) -> Result<LotterySnapshot, FetchError> {
        let envelope: ServiceEnvelope<LotterySnapshot> = self
            .get_json(
                url,
                &[
                    ("lottery_id", lottery_id),
                    ("lottery_no", draw_no.unwrap_or("")),
                    ("key", key),
                ],
            )
            .await?;
        envelope.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(result: &str) -> LotterySnapshot {
        LotterySnapshot {
            lottery_id: "ssq".to_string(),
            lottery_name: "double color ball".to_string(),
            lottery_res: result.to_string(),
            lottery_no: "2026090".to_string(),
            lottery_date: "2026-08-06".to_string(),
            lottery_exdate: "2026-10-05".to_string(),
            lottery_sale_amount: "350000000".to_string(),
            lottery_pool_amount: "1200000000".to_string(),
            lottery_prize: vec![],
        }
    }

    #[test]
    fn test_main_and_bonus_split() {
        let s = snapshot("03,07,11,19,25,31,16");
        assert_eq!(s.main_numbers(6).unwrap(), "03 07 11 19 25 31");
        assert_eq!(s.bonus_numbers(1).unwrap(), "16");
    }

    #[test]
    fn test_two_bonus_numbers() {
        let s = snapshot("01,05,13,22,30,02,09");
        assert_eq!(s.main_numbers(5).unwrap(), "01 05 13 22 30");
        assert_eq!(s.bonus_numbers(2).unwrap(), "02 09");
    }

    #[test]
    fn test_empty_result_yields_none() {
        let s = snapshot("  ");
        assert!(s.main_numbers(6).is_none());
        assert!(s.bonus_numbers(1).is_none());
    }

    #[test]
    fn test_decode_with_prize_tiers() {
        let json = r#"{
            "lottery_id": "ssq",
            "lottery_name": "double color ball",
            "lottery_res": "03,07,11,19,25,31,16",
            "lottery_no": "2026090",
            "lottery_date": "2026-08-06",
            "lottery_exdate": "2026-10-05",
            "lottery_sale_amount": "350000000",
            "lottery_pool_amount": "1200000000",
            "lottery_prize": [
                {
                    "prize_name": "first prize",
                    "prize_num": "7",
                    "prize_amount": "7520817",
                    "prize_require": "6+1"
                }
            ]
        }"#;
        let s: LotterySnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(s.lottery_prize.len(), 1);
        assert_eq!(s.lottery_prize[0].prize_require, "6+1");
    }
}
