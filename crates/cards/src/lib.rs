// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use pokerhands_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let kd: Card = "kd".parse().unwrap();
//! assert_eq!(ah.to_string(), "AH");
//! assert_eq!(kd, Card::new(Rank::King, Suit::Diamonds));
//! ```
//!
//! and a [Deck] type for shuffling, dealing, and iterating cards in the deck.
//!
//! For example to iterate through all 5 cards hands:
//!
//! ```no_run
//! # use pokerhands_cards::Deck;
//! // Iterate through all 5 cards hands (2.6M hands).
//! let mut counter = 0;
//! Deck::default().for_each(5, |hand| {
//!     counter += 1;
//! });
//! assert_eq!(counter, 2_598_960);
//! ```
//!
//! or, using a lazy iterator that yields fixed size arrays:
//!
//! ```no_run
//! # use pokerhands_cards::{Card, Deck};
//! let deck = Deck::default();
//! let hands = deck.combinations::<5>().filter(|hand: &[Card; 5]| {
//!     hand.iter().all(|c| c.suit() == hand[0].suit())
//! });
//! assert_eq!(hands.count(), 5_148);
//! ```
//!
//! The **`parallel`** feature enables parallel iteration with
//! a given number of tasks, the following example uses 4 tasks to iterate
//! all 7 cards hands, the closure `task_id` can be used to store per task data
//! to reduce contention:
//!
//! ```
//! # #[cfg(feature = "parallel")]
//! # fn par_for_each() {
//! # use std::sync::atomic;
//! # use pokerhands_cards::Deck;
//! // Iterate through all 7 cards hands (133M hands).
//! let counter = atomic::AtomicU64::new(0);
//! Deck::default().par_for_each(4, 7, |task_id, hand| {
//!     assert_eq!(hand.len(), 7);
//!     counter.fetch_add(1, atomic::Ordering::Relaxed);
//! });
//! assert_eq!(counter.load(atomic::Ordering::Relaxed), 133_784_560);
//! # }
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, Deck, KSubsets, ParseCardError, Rank, Suit, nck};
