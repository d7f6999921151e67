// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Counting hand evaluator.
use pokerhands_cards::{Card, Rank};

use super::{HandCategory, HandRanking};

/// Bucket for an ace playing low in a five-high straight.
const LOW_ACE: usize = 0;

/// Bucket for an ace playing high, buckets 1..=13 are deuce to ace.
const ACE: usize = 13;

/// Evaluates a set of cards and returns the ranking of the best five cards hand.
///
/// The cards must be unique, as when dealt from a single deck, the result is
/// unspecified if the same card appears more than once. The set can have any
/// size up to a full deck, an empty set returns [HandRanking::NONE], a set
/// with less than five cards is ranked using the cards it has:
///
/// ```
/// # use pokerhands_eval::*;
/// let royal = ["TC", "JC", "QC", "KC", "AC"].map(|c| c.parse::<Card>().unwrap());
/// assert_eq!(evaluate(&royal).category(), Some(HandCategory::RoyalFlush));
///
/// let pair = ["AH", "AS"].map(|c| c.parse::<Card>().unwrap());
/// assert_eq!(evaluate(&pair).to_array(), [1, 13, 0, 0, 0, 0]);
///
/// assert_eq!(evaluate(&[]), HandRanking::NONE);
/// ```
pub fn evaluate(cards: &[Card]) -> HandRanking {
    if cards.is_empty() {
        return HandRanking::NONE;
    }

    let tally = Tally::new(cards);

    let (straight, straight_flush) = tally.straights();
    match straight_flush {
        Some(ACE) => return HandRanking::new(HandCategory::RoyalFlush, &[]),
        Some(top) => return HandRanking::new(HandCategory::StraightFlush, &[top as u8]),
        None => {}
    }

    let order = tally.by_frequency();
    let second_count = tally.count(order[1]);

    if tally.max_rank == 4 {
        let quads = order[0];
        return HandRanking::new(HandCategory::FourOfAKind, &[quads, tally.kicker(&[quads])]);
    }

    if tally.max_rank == 3 {
        let trips = order[0];
        if let Some(pair) = tally.best_pair(trips) {
            return HandRanking::new(HandCategory::FullHouse, &[trips, pair]);
        }
    }

    if tally.max_suit >= 5 {
        return HandRanking::new(HandCategory::Flush, &tally.flush_ranks());
    }

    if let Some(top) = straight {
        return HandRanking::new(HandCategory::Straight, &[top as u8]);
    }

    match (tally.max_rank, second_count) {
        (3, _) => HandRanking::new(HandCategory::ThreeOfAKind, &order[..3]),
        (2, 2) => {
            let pairs = [order[0], order[1]];
            HandRanking::new(HandCategory::TwoPair, &[pairs[0], pairs[1], tally.kicker(&pairs)])
        }
        (2, _) => HandRanking::new(HandCategory::OnePair, &order[..4]),
        _ => HandRanking::new(HandCategory::HighCard, &order),
    }
}

/// Per rank and per suit counters for a set of cards.
#[derive(Debug, Default)]
struct Tally {
    /// Number of cards for each rank bucket.
    ranks: [u8; 14],
    /// Bitmask of the suits held for each rank bucket.
    rank_suits: [u8; 14],
    /// Number of cards for each suit.
    suits: [u8; 4],
    max_rank: u8,
    max_suit: u8,
}

impl Tally {
    fn new(cards: &[Card]) -> Self {
        let mut tally = Self::default();

        for card in cards {
            let suit = card.suit() as usize;
            let bucket = card.rank() as usize + 1;

            tally.add(bucket, suit);
            if card.rank() == Rank::Ace {
                tally.add(LOW_ACE, suit);
            }

            tally.suits[suit] += 1;
            tally.max_suit = tally.max_suit.max(tally.suits[suit]);
        }

        tally
    }

    fn add(&mut self, bucket: usize, suit: usize) {
        self.ranks[bucket] += 1;
        self.rank_suits[bucket] |= 1 << suit;
        self.max_rank = self.max_rank.max(self.ranks[bucket]);
    }

    /// Number of cards with the given 1-based rank, 0 for no rank.
    fn count(&self, rank: u8) -> u8 {
        match rank as usize {
            LOW_ACE => 0,
            bucket => self.ranks[bucket],
        }
    }

    /// Returns the top rank of the best straight and of the best straight
    /// flush.
    fn straights(&self) -> (Option<usize>, Option<usize>) {
        let mut best = None;
        let mut run = 0;

        for low in (LOW_ACE..=ACE).rev() {
            if self.ranks[low] > 0 {
                run += 1;
            } else {
                run = 0;
            }

            if run >= 5 {
                let top = low + 4;
                best.get_or_insert(top);

                let common_suits = self.rank_suits[low..=top]
                    .iter()
                    .fold(0xf, |suits, s| suits & s);
                if common_suits != 0 {
                    return (best, Some(top));
                }
            }
        }

        (best, None)
    }

    /// Returns up to five distinct 1-based ranks, ordered by number of cards
    /// and then by rank, unused slots are 0.
    fn by_frequency(&self) -> [u8; 5] {
        let mut order = [0u8; 5];
        let mut chosen = 0u16;

        for slot in order.iter_mut() {
            let next = (1..=ACE)
                .filter(|&r| chosen & (1 << r) == 0 && self.ranks[r] > 0)
                .max_by_key(|&r| (self.ranks[r], r));

            let Some(rank) = next else {
                break;
            };

            chosen |= 1 << rank;
            *slot = rank as u8;
        }

        order
    }

    /// The highest rank not in `used`, 0 if there are no other cards.
    fn kicker(&self, used: &[u8]) -> u8 {
        (1..=ACE)
            .rev()
            .find(|&r| self.ranks[r] > 0 && !used.contains(&(r as u8)))
            .map_or(0, |r| r as u8)
    }

    /// The highest rank other than `trips` with at least two cards.
    fn best_pair(&self, trips: u8) -> Option<u8> {
        (1..=ACE)
            .rev()
            .find(|&r| self.ranks[r] >= 2 && r as u8 != trips)
            .map(|r| r as u8)
    }

    /// Returns the five highest ranks held in a suit with at least five cards.
    fn flush_ranks(&self) -> [u8; 5] {
        let mut flush_suits = (0..4)
            .filter(|&s| self.suits[s] >= 5)
            .fold(0u8, |mask, s| mask | (1 << s));

        // With more than one flush suit keep only the suits that hold all the
        // ranks picked so far.
        let mut ranks = (1..=ACE).rev();
        let mut out = [0u8; 5];
        for slot in out.iter_mut() {
            if let Some(rank) = ranks.find(|&r| self.rank_suits[r] & flush_suits != 0) {
                flush_suits &= self.rank_suits[rank];
                *slot = rank as u8;
            }
        }

        out
    }
}
