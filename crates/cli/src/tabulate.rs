// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand categories tabulation.
use log::info;
use std::{
    fmt,
    sync::atomic::{AtomicU64, Ordering},
    time::{Duration, Instant},
};

use pokerhands_cards::nck;
use pokerhands_eval::{Deck, HandCategory, evaluate};

/// The number of hands for each category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tabulation {
    /// Hands count indexed by category code.
    pub counts: [u64; HandCategory::COUNT],
    /// Time spent evaluating the hands.
    pub elapsed: Duration,
}

impl Tabulation {
    /// Total number of hands.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Number of hands for a category.
    pub fn count(&self, category: HandCategory) -> u64 {
        self.counts[category as usize]
    }
}

impl fmt::Display for Tabulation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for category in HandCategory::categories() {
            writeln!(f, "{}: {}", category.code(), self.count(category))?;
        }

        let elapsed = self.elapsed.as_secs_f64();
        writeln!(f, "Total hands:     {}", self.total())?;
        writeln!(f, "Elapsed:         {elapsed:.3}s")?;
        if elapsed > 0.0 {
            writeln!(f, "Hands/sec:       {:.0}", self.total() as f64 / elapsed)?;
        }

        Ok(())
    }
}

/// Evaluates all the k-cards hands in the deck and counts the hands for each
/// category, hands are split among `num_tasks` parallel tasks.
///
/// Panics if k is not 1 <= k <= 7 or `num_tasks` is 0.
pub fn tabulate(deck: &Deck, k: usize, num_tasks: usize) -> Tabulation {
    assert!((1..=7).contains(&k), "1 <= k <= 7");
    assert!(num_tasks > 0);

    info!(
        "Evaluating {} hands of {k} cards with {num_tasks} tasks",
        nck(deck.count(), k)
    );

    let now = Instant::now();
    let counts = if num_tasks == 1 {
        match k {
            1 => count_hands::<1>(deck),
            2 => count_hands::<2>(deck),
            3 => count_hands::<3>(deck),
            4 => count_hands::<4>(deck),
            5 => count_hands::<5>(deck),
            6 => count_hands::<6>(deck),
            _ => count_hands::<7>(deck),
        }
    } else {
        // Per task counters to avoid contention.
        let task_counters = (0..num_tasks)
            .map(|_| [const { AtomicU64::new(0) }; HandCategory::COUNT])
            .collect::<Vec<_>>();

        deck.par_for_each(num_tasks, k, |task_id, hand| {
            let code = evaluate(hand).code() as usize;
            task_counters[task_id][code].fetch_add(1, Ordering::Relaxed);
        });

        std::array::from_fn(|code| {
            task_counters
                .iter()
                .map(|counters| counters[code].load(Ordering::Relaxed))
                .sum()
        })
    };

    let tabulation = Tabulation {
        counts,
        elapsed: now.elapsed(),
    };

    info!(
        "Evaluated {} hands in {:.3}s",
        tabulation.total(),
        tabulation.elapsed.as_secs_f64()
    );

    tabulation
}

/// Counts the K-cards hands for each category on the calling thread.
fn count_hands<const K: usize>(deck: &Deck) -> [u64; HandCategory::COUNT] {
    let mut counts = [0u64; HandCategory::COUNT];
    for hand in deck.combinations::<K>() {
        counts[evaluate(&hand).code() as usize] += 1;
    }

    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use pokerhands_eval::{Card, Rank, Suit};

    /// A deck with the cards from eight to ace.
    fn short_deck() -> Deck {
        let mut deck = Deck::default();
        for suit in Suit::suits() {
            for rank in Rank::ranks().take_while(|&r| r < Rank::Eight) {
                deck.remove(Card::new(rank, suit));
            }
        }
        deck
    }

    #[test]
    fn tabulate_short_deck() {
        let deck = short_deck();
        assert_eq!(deck.count(), 28);

        let t = tabulate(&deck, 5, 1);
        assert_eq!(t.total(), 98_280);

        // Four suits with 8, 9, T, J, Q, K, A.
        assert_eq!(t.count(HandCategory::RoyalFlush), 4);
        assert_eq!(t.count(HandCategory::StraightFlush), 4 * 2);
        assert_eq!(t.count(HandCategory::Flush), 4 * (21 - 3));

        // Same result with more tasks.
        let par = tabulate(&deck, 5, 3);
        assert_eq!(par.counts, t.counts);
    }

    #[test]
    fn tabulate_hand_sizes() {
        let deck = short_deck();

        for k in [1, 2, 6] {
            let t = tabulate(&deck, k, 1);
            assert_eq!(t.total(), nck(28, k) as u64);
            assert_eq!(tabulate(&deck, k, 4).counts, t.counts);
        }

        // A single card is always a high card.
        let t = tabulate(&deck, 1, 1);
        assert_eq!(t.count(HandCategory::HighCard), 28);

        // Pairs of two cards, 7 ranks with 6 pairs each.
        let t = tabulate(&deck, 2, 1);
        assert_eq!(t.count(HandCategory::OnePair), 7 * 6);
    }

    #[test]
    fn tabulate_output() {
        let t = Tabulation {
            counts: [1, 2, 3, 4, 5, 6, 7, 8, 9, 10],
            elapsed: Duration::from_secs(1),
        };

        let out = t.to_string();
        let lines = out.lines().collect::<Vec<_>>();
        assert_eq!(lines[0], "0: 1");
        assert_eq!(lines[9], "9: 10");
        assert_eq!(lines[10], "Total hands:     55");
        assert_eq!(lines[12], "Hands/sec:       55");
    }
}
