// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluator.
//!
//! Poker hand evaluator for sets of 0 to 52 cards, typically the 5, 6 and 7
//! cards hands of Hold'em variants. The evaluator ranks the best five cards
//! hand in the set and returns a [HandRanking] that can be compared with the
//! ranking of other hands and described in English:
//!
//! ```
//! # use pokerhands_eval::*;
//! // 2C, 2D, .., 4D
//! let cards = Deck::default().into_iter().take(10).collect::<Vec<_>>();
//! let v1 = HandRanking::eval(&cards[0..4]);
//! let v2 = HandRanking::eval(&cards[5..]);
//! assert_eq!(v1.category(), Some(HandCategory::FourOfAKind));
//! assert_eq!(v2.category(), Some(HandCategory::FullHouse));
//! assert!(v1 > v2);
//!
//! assert_eq!(v2.to_string(), "6 2 3 0 0 0");
//! assert_eq!(v2.describe(), ["full house (threes and fours)"]);
//! ```
//!
//! See the examples for the evaluation of all 5 and 7 cards hands.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod eval;
pub use eval::{HandCategory, HandRanking, evaluate, format_cards};

// Reexport cards types.
pub use pokerhands_cards::{Card, Deck, ParseCardError, Rank, Suit};
