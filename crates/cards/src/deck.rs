// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker cards definitions.
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

mod subsets;
pub use subsets::{KSubsets, nck};

#[cfg(feature = "parallel")]
mod parallel;

/// Rank characters indexed by rank.
const RANK_CHARS: [char; 13] = [
    '2', '3', '4', '5', '6', '7', '8', '9', 'T', 'J', 'Q', 'K', 'A',
];

/// Suit characters indexed by suit.
const SUIT_CHARS: [char; 4] = ['C', 'D', 'H', 'S'];

/// Error returned when parsing a card from its text notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// The rank character is not one of `23456789TJQKA`.
    #[error("invalid rank character {0:?}")]
    InvalidRank(char),
    /// The suit character is not one of `CDHS`.
    #[error("invalid suit character {0:?}")]
    InvalidSuit(char),
    /// A card is written with exactly two characters.
    #[error("invalid card length {0}, expected 2 characters")]
    InvalidLength(usize),
    /// A card id is in `0..52`.
    #[error("invalid card id {0}, expected 0..52")]
    InvalidId(u8),
}

/// A Poker card.
///
/// A card is an integer identifier in `0..52` with the following layout:
///
/// ```text
///   id = rank * 4 + suit
///   rank = deuce=0,trey=1,four=2,...,king=11,ace=12
///   suit = clubs=0,diamonds=1,hearts=2,spades=3
/// ```
///
/// Cards are written with two characters, the rank followed by the suit, for
/// example `AS` for the ace of spades or `TD` for the ten of diamonds.
#[derive(Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Card(u8);

/// A Poker card.
impl Card {
    /// Create a card given a suit and rank.
    pub const fn new(rank: Rank, suit: Suit) -> Card {
        Self((rank as u8) * 4 + suit as u8)
    }

    /// Creates a card from its identifier, returns `None` if `id >= 52`.
    pub const fn from_id(id: u8) -> Option<Card> {
        if (id as usize) < Deck::SIZE {
            Some(Self(id))
        } else {
            None
        }
    }

    /// Creates a card from a rank and a suit character.
    ///
    /// Both characters are case insensitive:
    ///
    /// ```
    /// # use pokerhands_cards::{Card, ParseCardError, Rank, Suit};
    /// assert_eq!(Card::encode('t', 'h'), Ok(Card::new(Rank::Ten, Suit::Hearts)));
    /// assert_eq!(Card::encode('x', 'h'), Err(ParseCardError::InvalidRank('x')));
    /// ```
    pub fn encode(rank: char, suit: char) -> Result<Card, ParseCardError> {
        let rank = Rank::from_char(rank).ok_or(ParseCardError::InvalidRank(rank))?;
        let suit = Suit::from_char(suit).ok_or(ParseCardError::InvalidSuit(suit))?;
        Ok(Card::new(rank, suit))
    }

    /// Returns the rank and suit characters for this card.
    pub fn decode(&self) -> (char, char) {
        (self.rank().to_char(), self.suit().to_char())
    }

    /// This card unique id.
    pub fn id(&self) -> u8 {
        self.0
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        match self.0 % 4 {
            0 => Suit::Clubs,
            1 => Suit::Diamonds,
            2 => Suit::Hearts,
            _ => Suit::Spades,
        }
    }

    /// Returns the card rank.
    pub fn rank(&self) -> Rank {
        Rank::from_index(self.0 / 4).unwrap_or(Rank::Ace)
    }
}

impl TryFrom<u8> for Card {
    type Error = ParseCardError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        Card::from_id(id).ok_or(ParseCardError::InvalidId(id))
    }
}

impl From<Card> for u8 {
    fn from(card: Card) -> u8 {
        card.0
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.rank(), self.suit())
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(rank), Some(suit), None) => Card::encode(rank, suit),
            _ => Err(ParseCardError::InvalidLength(s.chars().count())),
        }
    }
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Deuce
    Deuce = 0,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    /// Returns all ranks.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        use Rank::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
        .into_iter()
    }

    /// Returns the rank for an index in `0..13`, deuce is 0.
    pub fn from_index(index: u8) -> Option<Rank> {
        Rank::ranks().nth(index as usize)
    }

    /// Parses a rank character, case insensitive.
    pub fn from_char(c: char) -> Option<Rank> {
        let c = c.to_ascii_uppercase();
        RANK_CHARS
            .iter()
            .position(|&r| r == c)
            .and_then(|idx| Rank::from_index(idx as u8))
    }

    /// The rank character.
    pub fn to_char(self) -> char {
        RANK_CHARS[self as usize]
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Card suit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Clubs suit.
    Clubs = 0,
    /// Diamonds suit.
    Diamonds = 1,
    /// Hearts suit.
    Hearts = 2,
    /// Spades suit.
    Spades = 3,
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl Suit {
    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades].into_iter()
    }

    /// Parses a suit character, case insensitive.
    pub fn from_char(c: char) -> Option<Suit> {
        let c = c.to_ascii_uppercase();
        SUIT_CHARS
            .iter()
            .position(|&s| s == c)
            .and_then(|idx| Suit::suits().nth(idx))
    }

    /// The suit character.
    pub fn to_char(self) -> char {
        SUIT_CHARS[self as usize]
    }
}

/// A cards Deck
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 52;

    /// Creates a new shuffled deck.
    pub fn new_and_shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        deck.cards.shuffle(rng);
        deck
    }

    /// Deals a card from the deck, `None` if the deck is empty.
    pub fn deal(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// The cards left in the deck.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Removes a card from the deck.
    pub fn remove(&mut self, card: Card) {
        self.cards.retain(|c| c != &card);
    }

    /// Calls the `f` closure for each k-cards hand.
    ///
    /// Hands are generated in colexicographic order of the cards positions in
    /// the deck, see [Deck::combinations] for lexicographic order.
    ///
    /// Panics if k is not 1 <= k <= 7.
    pub fn for_each<F>(&self, k: usize, mut f: F)
    where
        F: FnMut(&[Card]),
    {
        assert!((1..=7).contains(&k), "1 <= k <= 7");

        let n = self.cards.len();
        if k > n {
            return;
        }

        let mut h = [Card::new(Rank::Ace, Suit::Hearts); 7];
        subsets::for_each_ksubset(n, k, 0, nck(n, k), |p| {
            for (idx, &pos) in p.iter().enumerate() {
                h[idx] = self.cards[pos];
            }

            f(&h[0..k]);
        });
    }

    /// Returns a lazy iterator over all the `K` cards hands in this deck.
    ///
    /// ```
    /// # use pokerhands_cards::Deck;
    /// let count = Deck::default().combinations::<5>().count();
    /// assert_eq!(count, 2_598_960);
    /// ```
    pub fn combinations<const K: usize>(&self) -> impl Iterator<Item = [Card; K]> + '_ {
        KSubsets::<K>::new(self.cards.len()).map(move |p| p.map(|pos| self.cards[pos]))
    }
}

impl Default for Deck {
    fn default() -> Self {
        let cards = (0..Self::SIZE as u8).map(Card).collect::<Vec<_>>();
        Self { cards }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;

    #[test]
    fn card_encoding() {
        let mut cards = HashSet::default();
        let mut deck = Deck::new_and_shuffled(&mut rand::rng());

        while let Some(card) = deck.deal() {
            assert_eq!(card.id() / 4, card.rank() as u8);
            assert_eq!(card.id() % 4, card.suit() as u8);
            assert_eq!(Card::new(card.rank(), card.suit()), card);
            cards.insert(card.id());
        }

        // Check uniquness.
        assert_eq!(cards.len(), Deck::SIZE);

        assert_eq!(Card::new(Rank::Deuce, Suit::Clubs).id(), 0);
        assert_eq!(Card::new(Rank::King, Suit::Diamonds).id(), 45);
        assert_eq!(Card::new(Rank::Five, Suit::Spades).id(), 15);
        assert_eq!(Card::new(Rank::Ace, Suit::Spades).id(), 51);

        assert_eq!(Card::from_id(51), Some(Card::new(Rank::Ace, Suit::Spades)));
        assert_eq!(Card::from_id(52), None);
    }

    #[test]
    fn card_deserialize() {
        use serde::de::{IntoDeserializer, value::Error};

        let card = Card::deserialize(45u8.into_deserializer());
        assert_eq!(
            card.map_err(|e: Error| e.to_string()),
            Ok(Card::new(Rank::King, Suit::Diamonds))
        );

        for id in [52u8, 64, 255] {
            let card = Card::deserialize(IntoDeserializer::<Error>::into_deserializer(id));
            assert!(card.is_err(), "id {id}");
        }

        assert_eq!(Card::try_from(0), Ok(Card::new(Rank::Deuce, Suit::Clubs)));
        assert_eq!(Card::try_from(52), Err(ParseCardError::InvalidId(52)));
        assert_eq!(u8::from(Card::new(Rank::Ace, Suit::Spades)), 51);
    }

    #[test]
    fn card_to_string() {
        let c = Card::new(Rank::King, Suit::Diamonds);
        assert_eq!(c.to_string(), "KD");

        let c = Card::new(Rank::Five, Suit::Spades);
        assert_eq!(c.to_string(), "5S");

        let c = Card::new(Rank::Jack, Suit::Clubs);
        assert_eq!(c.to_string(), "JC");

        let c = Card::new(Rank::Ten, Suit::Hearts);
        assert_eq!(c.to_string(), "TH");

        let c = Card::new(Rank::Ace, Suit::Hearts);
        assert_eq!(c.to_string(), "AH");
    }

    #[test]
    fn card_encode_decode() {
        for card in Deck::default() {
            let (r, s) = card.decode();
            assert_eq!(Card::encode(r, s), Ok(card));
            assert_eq!(
                Card::encode(r.to_ascii_lowercase(), s.to_ascii_lowercase()),
                Ok(card)
            );
        }

        assert_eq!(Card::encode('1', 'c'), Err(ParseCardError::InvalidRank('1')));
        assert_eq!(Card::encode('\n', 'c'), Err(ParseCardError::InvalidRank('\n')));
        assert_eq!(Card::encode('a', 'x'), Err(ParseCardError::InvalidSuit('x')));
        // Rank is checked first.
        assert_eq!(Card::encode('z', 'z'), Err(ParseCardError::InvalidRank('z')));
    }

    #[test]
    fn card_from_str() {
        assert_eq!("qs".parse(), Ok(Card::new(Rank::Queen, Suit::Spades)));
        assert_eq!("2C".parse(), Ok(Card::new(Rank::Deuce, Suit::Clubs)));
        assert_eq!("2".parse::<Card>(), Err(ParseCardError::InvalidLength(1)));
        assert_eq!("AHK".parse::<Card>(), Err(ParseCardError::InvalidLength(3)));
        assert_eq!("".parse::<Card>(), Err(ParseCardError::InvalidLength(0)));
    }

    #[test]
    fn deck_deal() {
        let mut deck = Deck::default();
        assert_eq!(deck.count(), Deck::SIZE);

        assert_eq!(deck.deal(), Some(Card::new(Rank::Ace, Suit::Spades)));
        assert_eq!(deck.count(), Deck::SIZE - 1);

        while deck.deal().is_some() {}
        assert!(deck.is_empty());
        assert_eq!(deck.deal(), None);
    }

    #[test]
    fn deck_for_each() {
        let deck = Deck::default();
        assert_eq!(deck.count(), Deck::SIZE);

        let mut hands = HashSet::default();
        deck.for_each(5, |cards| {
            assert_eq!(cards.len(), 5);
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len(), 2_598_960);

        hands.clear();
        deck.for_each(2, |cards| {
            assert_eq!(cards.len(), 2);
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len(), 1_326);

        hands.clear();
        deck.for_each(3, |cards| {
            assert_eq!(cards.len(), 3);
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len(), 22_100);

        hands.clear();
        deck.for_each(1, |cards| {
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len(), Deck::SIZE);
    }

    // This takes a while to run in debug mode as it goes through 133M hands.
    #[test]
    #[ignore]
    fn deck_for_each_7cards() {
        let deck = Deck::default();

        let mut count = 0;
        deck.for_each(7, |cards| {
            assert_eq!(cards.len(), 7);
            count += 1;
        });
        assert_eq!(count, 133_784_560);
    }

    #[test]
    fn deck_for_each_remove() {
        let mut deck = Deck::default();
        deck.remove(Card::new(Rank::Ace, Suit::Diamonds));
        deck.remove(Card::new(Rank::King, Suit::Diamonds));

        let mut count = 0;
        deck.for_each(5, |cards| {
            assert!(!cards.contains(&Card::new(Rank::Ace, Suit::Diamonds)));
            assert!(!cards.contains(&Card::new(Rank::King, Suit::Diamonds)));
            count += 1;
        });
        assert_eq!(count, 2_118_760);

        // Not enough cards.
        let mut deck = Deck::default();
        (0..48).for_each(|_| {
            deck.deal();
        });
        let mut count = 0;
        deck.for_each(5, |_| count += 1);
        assert_eq!(count, 0);
    }

    #[test]
    fn deck_combinations() {
        let deck = Deck::default();

        let mut iter = deck.combinations::<5>();
        assert_eq!(
            iter.next().map(|h| h.map(|c| c.id())),
            Some([0, 1, 2, 3, 4])
        );
        assert_eq!(
            iter.next().map(|h| h.map(|c| c.id())),
            Some([0, 1, 2, 3, 5])
        );

        // Same hands as for_each in a different order.
        let mut from_for_each = Vec::new();
        deck.for_each(3, |cards| from_for_each.push(cards.to_owned()));
        let mut from_iter = deck
            .combinations::<3>()
            .map(|h| h.to_vec())
            .collect::<Vec<_>>();
        assert!(from_iter.is_sorted());
        from_for_each.sort();
        from_iter.sort();
        assert_eq!(from_for_each, from_iter);
    }
}
