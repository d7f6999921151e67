// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hands CLI.
use clap::Parser;
use log::error;
use std::io;

use pokerhands_cli::{Config, Mode};

#[derive(Debug, Parser)]
struct Cli {
    /// The cards to evaluate (e.g. `AH KH QH`), read from stdin if empty.
    cards: Vec<String>,
    /// Count the categories of all the hands in a deck.
    #[clap(long, short)]
    tabulate: bool,
    /// Number of cards in a tabulated hand.
    #[clap(long, short = 'k', default_value_t = 5, value_parser = clap::value_parser!(u8).range(5..=7))]
    hand_size: u8,
    /// Number of tabulation tasks.
    #[clap(long, default_value_t = 1, value_parser = clap::value_parser!(u16).range(1..=64))]
    tasks: u16,
}

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    let mode = if cli.tabulate {
        Mode::Tabulate {
            hand_size: cli.hand_size as usize,
            tasks: cli.tasks as usize,
        }
    } else {
        Mode::Evaluate {
            cards: (!cli.cards.is_empty()).then(|| cli.cards.join(" ")),
        }
    };

    let config = Config { mode };
    if let Err(e) = pokerhands_cli::run(config, &mut io::stdin().lock(), &mut io::stdout().lock()) {
        error!("{e}");
        std::process::exit(1);
    }
}
