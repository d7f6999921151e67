// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluator.
//!
//! The evaluator counts the cards for each rank and suit and keeps a bitmask
//! of the suits held by each rank, it then checks the categories from the
//! strongest to the weakest using these counters, without going through the
//! five cards subsets of the hand.
//!
//! It provides an [evaluate] function that computes the [HandRanking] of a set
//! of cards, and a [HandRanking::describe] method that returns an English
//! description of a ranking.

mod describe;
pub use describe::format_cards;

mod evaluator;
pub use evaluator::evaluate;

mod ranking;
pub use ranking::{HandCategory, HandRanking};
