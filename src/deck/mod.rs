//! Deck construction, shuffling, and dealing.
//!
//! ## Canonical Deck
//!
//! 108 cards. Per color: one 0, two each of 1..=9 (19 number cards), and
//! two each of Skip, Reverse, and Draw Two (6 action cards). Plus four
//! Wild and four Wild Draw Four. Ids are assigned 1..=108 in construction
//! order, before shuffling, so a card keeps its identity across games
//! with the same seed.
//!
//! ## Conventions
//!
//! The top of a deck is the last element; dealing and drawing pop from
//! the back.

use im::Vector;

use crate::core::{Card, CardColor, CardId, CardKind, GameRng};
use crate::error::SetupError;

/// Size of the canonical deck.
pub const DECK_SIZE: usize = 108;

/// Build the canonical deck and shuffle it.
#[must_use]
pub fn build_deck(rng: &mut GameRng) -> Vector<Card> {
    let mut cards: Vec<Card> = Vec::with_capacity(DECK_SIZE);
    let mut next_id = 1u32;
    for color in CardColor::ALL {
        cards.push(Card::number(CardId::new(next_id), color, 0));
        next_id += 1;
        for value in 1..=9 {
            for _ in 0..2 {
                cards.push(Card::number(CardId::new(next_id), color, value));
                next_id += 1;
            }
        }
        for kind in [CardKind::Skip, CardKind::Reverse, CardKind::DrawTwo] {
            for _ in 0..2 {
                cards.push(Card::action(CardId::new(next_id), color, kind));
                next_id += 1;
            }
        }
    }
    for kind in [CardKind::Wild, CardKind::WildDrawFour] {
        for _ in 0..4 {
            cards.push(Card::wild(CardId::new(next_id), kind));
            next_id += 1;
        }
    }
    debug_assert_eq!(cards.len(), DECK_SIZE);

    rng.shuffle(&mut cards);
    cards.into_iter().collect()
}

/// Shuffle a pile into a fresh draw deck.
///
/// Also used mid-game when the discard pile is recycled.
#[must_use]
pub fn shuffle(deck: Vector<Card>, rng: &mut GameRng) -> Vector<Card> {
    let mut cards: Vec<Card> = deck.into_iter().collect();
    rng.shuffle(&mut cards);
    cards.into_iter().collect()
}

/// Hands, remaining deck, and start card produced by [`deal`].
#[derive(Clone, Debug)]
pub struct DealResult {
    /// One hand per seat, in seat order.
    pub hands: Vec<Vector<Card>>,
    /// What is left of the deck after hands and start card.
    pub deck: Vector<Card>,
    /// The opening discard. Never wild unless the remaining deck was
    /// entirely wild.
    pub start_card: Card,
}

/// Deal opening hands round-robin from the top of the deck.
///
/// Seat 0 receives the first card, seat 1 the second, and so on around
/// the table `cards_per_player` times. The start card is then the first
/// non-wild found scanning the remaining deck from the bottom; if only
/// wilds remain, the bottom card starts the pile colorless.
pub fn deal(
    deck: Vector<Card>,
    num_players: usize,
    cards_per_player: usize,
) -> Result<DealResult, SetupError> {
    if num_players == 0 {
        return Err(SetupError::EmptyRoster);
    }
    let need = num_players * cards_per_player + 1;
    if deck.len() < need {
        return Err(SetupError::InsufficientDeck {
            got: deck.len(),
            need,
        });
    }

    let mut deck = deck;
    let mut hands = vec![Vector::new(); num_players];
    for _ in 0..cards_per_player {
        for hand in hands.iter_mut() {
            if let Some(card) = deck.pop_back() {
                hand.push_back(card);
            }
        }
    }

    let start_pos = deck.iter().position(|c| !c.is_wild()).unwrap_or(0);
    let start_card = deck.remove(start_pos);

    Ok(DealResult {
        hands,
        deck,
        start_card,
    })
}
