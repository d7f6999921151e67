// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand ranking descriptions.
use pokerhands_cards::{Card, Rank};

use super::{HandCategory, HandRanking};

static RANK_NAMES: [&str; 13] = [
    "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten", "jack", "queen",
    "king", "ace",
];

static RANK_NAMES_PLURAL: [&str; 13] = [
    "twos", "threes", "fours", "fives", "sixes", "sevens", "eights", "nines", "tens", "jacks",
    "queens", "kings", "aces",
];

fn name(rank: &Rank) -> &'static str {
    RANK_NAMES[*rank as usize]
}

fn plural(rank: &Rank) -> &'static str {
    RANK_NAMES_PLURAL[*rank as usize]
}

impl HandRanking {
    /// Describes this ranking in English, the first line is the hand and the
    /// following lines are the kickers.
    ///
    /// ```
    /// # use pokerhands_eval::*;
    /// let cards = ["KC", "KD", "7H", "3S", "9C"].map(|c| c.parse::<Card>().unwrap());
    /// let lines = evaluate(&cards).describe();
    /// assert_eq!(lines, ["one pair (king)", "nine kicker", "seven kicker", "three kicker"]);
    /// ```
    pub fn describe(&self) -> Vec<String> {
        let ranks = self.ranks().collect::<Vec<_>>();
        let Some(category) = self.category() else {
            return vec!["literally nothing".to_string()];
        };

        let (hand, kickers) = match (category, ranks.as_slice()) {
            (HandCategory::RoyalFlush, _) => ("royal flush".to_string(), &[][..]),
            (HandCategory::StraightFlush, [top, ..]) => {
                (format!("{}-high straight flush", name(top)), &[][..])
            }
            (HandCategory::FourOfAKind, [quads, rest @ ..]) => {
                (format!("four {}", plural(quads)), rest)
            }
            (HandCategory::FullHouse, [trips, pair, ..]) => (
                format!("full house ({} and {})", plural(trips), plural(pair)),
                &[][..],
            ),
            (HandCategory::Flush, rest) => ("flush".to_string(), rest),
            (HandCategory::Straight, [top, ..]) => {
                (format!("{}-high straight", name(top)), &[][..])
            }
            (HandCategory::ThreeOfAKind, [trips, rest @ ..]) => {
                (format!("three of a kind ({})", name(trips)), rest)
            }
            (HandCategory::TwoPair, [high, low, rest @ ..]) => (
                format!("two pairs ({} and {})", plural(high), plural(low)),
                rest,
            ),
            (HandCategory::OnePair, [pair, rest @ ..]) => {
                (format!("one pair ({})", name(pair)), rest)
            }
            (HandCategory::HighCard, [high, rest @ ..]) => (format!("{}-high", name(high)), rest),
            (category, _) => (category.to_string().to_lowercase(), &[][..]),
        };

        let mut lines = vec![hand];
        lines.extend(kickers.iter().map(|k| format!("{} kicker", name(k))));
        lines
    }
}

/// Formats cards using the two characters notation separated by spaces.
pub fn format_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluate;

    fn describe(s: &str) -> Vec<String> {
        let cards = s
            .split_whitespace()
            .map(|c| c.parse::<Card>().unwrap())
            .collect::<Vec<_>>();
        evaluate(&cards).describe()
    }

    #[test]
    fn describe_hands() {
        assert_eq!(describe(""), ["literally nothing"]);
        assert_eq!(describe("TC JC QC KC AC"), ["royal flush"]);
        assert_eq!(describe("AC 2C 3C 4C 5C"), ["five-high straight flush"]);
        assert_eq!(describe("2C 2D 2H 2S 9C"), ["four twos", "nine kicker"]);
        assert_eq!(describe("2C 2D 2H 2S"), ["four twos"]);
        assert_eq!(describe("KC KD KH 2S 2C"), ["full house (kings and twos)"]);
        assert_eq!(
            describe("2H 9H KH 5H 7H"),
            [
                "flush",
                "king kicker",
                "nine kicker",
                "seven kicker",
                "five kicker",
                "two kicker"
            ]
        );
        assert_eq!(describe("TC JD QH KS AC"), ["ace-high straight"]);
        assert_eq!(
            describe("6C 6D 6H AS 3C"),
            ["three of a kind (six)", "ace kicker", "three kicker"]
        );
        assert_eq!(
            describe("8C 8D JH JS 3C"),
            ["two pairs (jacks and eights)", "three kicker"]
        );
        assert_eq!(
            describe("AC 3D 9H JS 2C"),
            [
                "ace-high",
                "jack kicker",
                "nine kicker",
                "three kicker",
                "two kicker"
            ]
        );
    }

    #[test]
    fn rank_names() {
        for rank in Rank::ranks() {
            assert!(plural(&rank).starts_with(name(&rank)));
        }

        assert_eq!(plural(&Rank::Six), "sixes");
    }

    #[test]
    fn format_card_set() {
        let cards = ["AH", "td", "2c"].map(|c| c.parse::<Card>().unwrap());
        assert_eq!(format_cards(&cards), "AH TD 2C");
        assert_eq!(format_cards(&[]), "");
    }
}
