// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand ranking types.
use serde::{Deserialize, Serialize};
use std::fmt;

use pokerhands_cards::{Card, Rank};

/// A poker hand category, from the weakest to the strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandCategory {
    /// No pairs.
    HighCard = 0,
    /// One pair.
    OnePair,
    /// Two pairs.
    TwoPair,
    /// Three cards of the same rank.
    ThreeOfAKind,
    /// Five cards in sequence.
    Straight,
    /// Five cards of the same suit.
    Flush,
    /// Three of a kind and a pair.
    FullHouse,
    /// Four cards of the same rank.
    FourOfAKind,
    /// Five cards in sequence of the same suit.
    StraightFlush,
    /// Ace high straight flush.
    RoyalFlush,
}

impl HandCategory {
    /// The number of categories.
    pub const COUNT: usize = 10;

    /// Returns all categories from the weakest to the strongest.
    pub fn categories() -> impl DoubleEndedIterator<Item = HandCategory> {
        use HandCategory::*;
        [
            HighCard,
            OnePair,
            TwoPair,
            ThreeOfAKind,
            Straight,
            Flush,
            FullHouse,
            FourOfAKind,
            StraightFlush,
            RoyalFlush,
        ]
        .into_iter()
    }

    /// Returns the category for a code in `0..10`.
    pub fn from_code(code: i8) -> Option<HandCategory> {
        usize::try_from(code)
            .ok()
            .and_then(|code| HandCategory::categories().nth(code))
    }

    /// The category code.
    pub fn code(self) -> i8 {
        self as i8
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HandCategory::HighCard => "High Card",
            HandCategory::OnePair => "One Pair",
            HandCategory::TwoPair => "Two Pairs",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full House",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::StraightFlush => "Straight Flush",
            HandCategory::RoyalFlush => "Royal Flush",
        };

        f.write_str(name)
    }
}

/// The ranking of the best five cards hand in a set of cards.
///
/// A ranking is a tuple of six integers, the first is the category code (-1
/// for an empty set of cards) and the other five are category specific ranks
/// used to break ties, with deuce = 1, ..., ace = 13 and 0 for unused slots:
///
/// ```text
///   category         slots
///   royal flush      -
///   straight flush   top rank
///   four of a kind   quads rank, kicker
///   full house       trips rank, pair rank
///   flush            five highest ranks of the flush suit
///   straight         top rank
///   three of a kind  trips rank, two kickers
///   two pair         high pair rank, low pair rank, kicker
///   one pair         pair rank, three kickers
///   high card        five highest ranks
/// ```
///
/// Rankings compare lexicographically so that a stronger hand has a greater
/// ranking:
///
/// ```
/// # use pokerhands_eval::*;
/// let parse = |s: &str| s.split(' ').map(|c| c.parse().unwrap()).collect::<Vec<Card>>();
///
/// let kings = HandRanking::eval(&parse("KC KD 2H 7S 9C"));
/// let queens = HandRanking::eval(&parse("QC QD AH 7S 9C"));
/// assert_eq!(kings.category(), Some(HandCategory::OnePair));
/// assert!(kings > queens);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct HandRanking {
    code: i8,
    slots: [u8; 5],
}

impl HandRanking {
    /// The ranking of an empty set of cards.
    pub const NONE: HandRanking = HandRanking {
        code: -1,
        slots: [0; 5],
    };

    /// Creates a ranking, `slots` are 1-based ranks and must be at most 5.
    pub(crate) fn new(category: HandCategory, slots: &[u8]) -> Self {
        debug_assert!(slots.len() <= 5);
        debug_assert!(slots.iter().all(|&r| r <= 13));

        let mut ranking = Self {
            code: category.code(),
            slots: [0; 5],
        };
        ranking.slots[..slots.len()].copy_from_slice(slots);
        ranking
    }

    /// Evaluates a set of cards, see [evaluate](super::evaluate).
    pub fn eval(cards: &[Card]) -> Self {
        super::evaluate(cards)
    }

    /// The hand category, `None` for an empty set of cards.
    pub fn category(&self) -> Option<HandCategory> {
        HandCategory::from_code(self.code)
    }

    /// The category code, -1 for an empty set of cards.
    pub fn code(&self) -> i8 {
        self.code
    }

    /// The raw tie break slots, 1-based ranks and 0 for unused slots.
    pub fn slots(&self) -> [u8; 5] {
        self.slots
    }

    /// The rank in the given slot (0..5), `None` if the slot is unused.
    pub fn rank(&self, slot: usize) -> Option<Rank> {
        self.slots
            .get(slot)
            .and_then(|&r| r.checked_sub(1))
            .and_then(Rank::from_index)
    }

    /// Returns the ranks in the used slots.
    pub fn ranks(&self) -> impl Iterator<Item = Rank> + '_ {
        (0..self.slots.len()).map_while(move |slot| self.rank(slot))
    }

    /// Returns the six integers tuple.
    pub fn to_array(&self) -> [i32; 6] {
        let mut t = [self.code as i32; 6];
        for (dst, &src) in t[1..].iter_mut().zip(&self.slots) {
            *dst = src as i32;
        }

        t
    }
}

impl Default for HandRanking {
    fn default() -> Self {
        Self::NONE
    }
}

impl fmt::Display for HandRanking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code)?;
        for slot in self.slots {
            write!(f, " {slot}")?;
        }

        Ok(())
    }
}
