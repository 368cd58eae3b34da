use std::fmt;

use log::debug;
use rand::Rng;
use rand::seq::SliceRandom;

/// Number of cards in a dealt hand
pub const HAND_SIZE: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    pub fn symbol(&self) -> char {
        match self {
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
            Suit::Spades => '♠',
        }
    }
}

/// A playing card with ranks 1 through 10 (no face cards, no jokers)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    rank: u8,
    suit: Suit,
}

impl Card {
    pub fn new(rank: u8, suit: Suit) -> Self {
        Self { rank, suit }
    }

    pub fn rank(&self) -> u8 {
        self.rank
    }

    pub fn suit(&self) -> Suit {
        self.suit
    }

    /// Rank text as shown on the card face; rank 1 is the Ace
    pub fn rank_label(&self) -> String {
        if self.rank == 1 {
            "A".to_string()
        } else {
            self.rank.to_string()
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.rank_label(), self.suit.symbol())
    }
}

/// Build the full 40-card deck: ranks 1..=10 in each of the four suits
pub fn standard_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(40);
    for suit in Suit::ALL {
        for rank in 1..=10 {
            deck.push(Card::new(rank, suit));
        }
    }
    deck
}

/// Deal a uniform hand of four distinct cards
pub fn deal<R: Rng + ?Sized>(rng: &mut R) -> Vec<Card> {
    let deck = standard_deck();
    let hand: Vec<Card> = deck.choose_multiple(rng, HAND_SIZE).copied().collect();
    debug!("Dealt hand: {:?}", hand);
    hand
}
