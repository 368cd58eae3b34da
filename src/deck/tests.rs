use std::collections::HashSet;

use rand::thread_rng;

use crate::deck::{Card, HAND_SIZE, Suit, deal, standard_deck};

#[test]
fn test_standard_deck_composition() {
    let deck = standard_deck();
    assert_eq!(deck.len(), 40);

    let distinct: HashSet<Card> = deck.iter().copied().collect();
    assert_eq!(distinct.len(), 40);

    for suit in Suit::ALL {
        let ranks: Vec<u8> = deck
            .iter()
            .filter(|card| card.suit() == suit)
            .map(Card::rank)
            .collect();
        assert_eq!(ranks.len(), 10);
        assert!(ranks.iter().all(|&rank| (1..=10).contains(&rank)));
    }
}

#[test]
fn test_deal_draws_distinct_cards() {
    let mut rng = thread_rng();
    for _ in 0..50 {
        let hand = deal(&mut rng);
        assert_eq!(hand.len(), HAND_SIZE);

        let distinct: HashSet<Card> = hand.iter().copied().collect();
        assert_eq!(distinct.len(), HAND_SIZE);
    }
}

#[test]
fn test_card_display_labels() {
    assert_eq!(Card::new(1, Suit::Hearts).to_string(), "A♥");
    assert_eq!(Card::new(7, Suit::Diamonds).to_string(), "7♦");
    assert_eq!(Card::new(10, Suit::Spades).to_string(), "10♠");
}
