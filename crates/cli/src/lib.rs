// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hands CLI.
//!
//! Reads a set of cards and prints its ranking, or evaluates all the hands in
//! a deck and prints the number of hands for each category.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::Result;
use log::warn;
use std::io::{BufRead, Write};

use pokerhands_eval::{Deck, evaluate, format_cards};

pub mod reader;
pub mod tabulate;

/// What the CLI should do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Evaluates the given cards, or a line read from the input if `None`.
    Evaluate {
        /// The cards text.
        cards: Option<String>,
    },
    /// Counts the categories of all the hands in a deck.
    Tabulate {
        /// Number of cards in a hand.
        hand_size: usize,
        /// Number of parallel tasks.
        tasks: usize,
    },
}

/// The CLI configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// The CLI mode.
    pub mode: Mode,
}

/// Runs the CLI with the given configuration.
pub fn run<R: BufRead, W: Write>(config: Config, input: &mut R, output: &mut W) -> Result<()> {
    match config.mode {
        Mode::Evaluate { cards } => {
            let cards = match cards {
                Some(text) => reader::parse_cards(&text),
                None => reader::read_cards(input)?,
            };

            for card in reader::duplicates(&cards) {
                warn!("Card {card} appears more than once, the ranking is unspecified");
            }

            let ranking = evaluate(&cards);
            writeln!(output, "{}", format_cards(&cards))?;
            writeln!(output, "{ranking}")?;
            for line in ranking.describe() {
                writeln!(output, "{line}")?;
            }
        }
        Mode::Tabulate { hand_size, tasks } => {
            let tabulation = tabulate::tabulate(&Deck::default(), hand_size, tasks);
            write!(output, "{tabulation}")?;
        }
    }

    output.flush()?;
    Ok(())
}
