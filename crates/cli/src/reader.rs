// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cards input reader.
use log::debug;
use std::io::{self, BufRead};

use pokerhands_eval::{Card, Deck};

/// Parses cards from a line of text.
///
/// Each card is written with two characters, a rank followed by a suit, cards
/// can be separated by spaces or tabs. Parsing stops at the first malformed
/// card, at the end of the line, or after a full deck has been read, so that a
/// malformed card is an end of input marker rather than an error.
pub fn parse_cards(line: &str) -> Vec<Card> {
    let mut cards = Vec::new();
    let mut chars = line.chars().skip_while(|c| is_separator(*c)).peekable();

    while cards.len() < Deck::SIZE {
        let (Some(rank), Some(suit)) = (chars.next(), chars.next()) else {
            break;
        };

        match Card::encode(rank, suit) {
            Ok(card) => cards.push(card),
            Err(e) => {
                debug!("Stop reading cards: {e}");
                break;
            }
        }

        while chars.next_if(|c| is_separator(*c)).is_some() {}
    }

    cards
}

/// Reads a line from the input and parses its cards.
pub fn read_cards<R: BufRead>(input: &mut R) -> io::Result<Vec<Card>> {
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(parse_cards(&line))
}

/// Returns the cards that appear more than once.
pub fn duplicates(cards: &[Card]) -> Vec<Card> {
    let mut seen = 0u64;
    let mut dups = Vec::new();

    for card in cards {
        let bit = 1u64 << card.id();
        if seen & bit != 0 && !dups.contains(card) {
            dups.push(*card);
        }

        seen |= bit;
    }

    dups
}

fn is_separator(c: char) -> bool {
    c == ' ' || c == '\t'
}
