//! The 40-card deck the puzzle is dealt from

mod cards;

pub use cards::{Card, HAND_SIZE, Suit, deal, standard_deck};

#[cfg(test)]
mod tests;
