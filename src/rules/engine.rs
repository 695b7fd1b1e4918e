//! Play validation, card effects, forced draws, and win detection.
//!
//! ## Effect Resolution
//!
//! `apply_effect` runs on the snapshot immediately after the played card
//! moved from the actor's hand onto the discard top. All seat math is
//! index arithmetic modulo the seat count and honors the active
//! direction, including the post-flip advance of a reverse.
//!
//! ## Deck Exhaustion
//!
//! Every draw site checks the deck first: an empty deck recycles the
//! discard pile minus its top card before the draw is satisfied. Wilds
//! return to the deck colorless.

use im::Vector;
use smallvec::SmallVec;
use tracing::trace;

use crate::core::{Card, CardKind, GameState, PlayerId};
use crate::deck;

/// Whether `card` may land on `top`.
///
/// Wilds are always valid. A colored card needs a color match or a kind
/// match; number kinds carry their value, so a number matches by kind
/// only when the value is the same.
#[must_use]
pub fn is_valid_play(card: &Card, top: &Card) -> bool {
    if card.is_wild() {
        return true;
    }
    let color_match = matches!((card.color, top.color), (Some(a), Some(b)) if a == b);
    color_match || card.kind == top.kind
}

/// The subset of `hand` playable on `top`, in hand order.
#[must_use]
pub fn valid_plays(hand: &Vector<Card>, top: &Card) -> SmallVec<[Card; 8]> {
    hand.iter()
        .filter(|c| is_valid_play(c, top))
        .copied()
        .collect()
}

/// First seat (in seat order) holding no cards, if any.
///
/// The caller flips the status to finished; this only observes.
#[must_use]
pub fn check_win_condition(state: &GameState) -> Option<PlayerId> {
    state.players.iter().find(|p| p.hand.is_empty()).map(|p| p.id)
}

/// Resolve the effect of the card now on the discard top.
///
/// Precondition: the card was just moved from the actor's hand onto the
/// discard pile and `state.current` is still the actor.
pub(crate) fn apply_effect(state: &mut GameState, played: &Card) {
    let seat = match state.current_seat() {
        Some(seat) => seat,
        None => return,
    };

    match played.kind {
        CardKind::Skip => {
            advance(state, seat, 2);
        }
        CardKind::Reverse => {
            state.direction = state.direction.flipped();
            // Two seats: reverse acts as a skip and the actor keeps the
            // turn. Otherwise advance one seat in the new direction.
            if state.players.len() > 2 {
                advance(state, seat, 1);
            }
        }
        CardKind::DrawTwo => {
            let target = state.seat_after(seat, 1);
            draw_from_deck(state, target, 2);
            advance(state, seat, 2);
        }
        CardKind::WildDrawFour => {
            let target = state.seat_after(seat, 1);
            draw_from_deck(state, target, 4);
            advance(state, seat, 2);
        }
        CardKind::Number(_) | CardKind::Wild => {
            advance(state, seat, 1);
        }
    }
}

/// Move the turn `steps` seats past `from_seat` in the active direction.
pub(crate) fn advance(state: &mut GameState, from_seat: usize, steps: usize) {
    let next = state.seat_after(from_seat, steps);
    if let Some(player) = state.players.get(next) {
        state.current = player.id;
    }
}

/// Draw up to `count` cards from the deck into the hand at `seat`.
///
/// Returns how many cards were actually drawn. The result falls short of
/// `count` only when deck and discard are both exhausted; the game keeps
/// going with whatever was available.
pub(crate) fn draw_from_deck(state: &mut GameState, seat: usize, count: usize) -> usize {
    if seat >= state.players.len() {
        return 0;
    }

    let mut drawn = 0;
    for _ in 0..count {
        if state.deck.is_empty() {
            replenish_deck(state);
        }
        match state.deck.pop_back() {
            Some(card) => {
                if let Some(player) = state.players.get_mut(seat) {
                    player.hand.push_back(card);
                }
                drawn += 1;
            }
            None => break,
        }
    }
    drawn
}

/// Recycle the discard pile, minus its top card, into a fresh deck.
///
/// No-op when the discard holds at most the top card. Recycled wilds
/// shed the color they were played with.
fn replenish_deck(state: &mut GameState) {
    if state.discard.len() <= 1 {
        return;
    }

    let top = state.discard.pop_back();
    let pile: Vector<Card> = std::mem::take(&mut state.discard)
        .into_iter()
        .map(|c| if c.is_wild() { c.colorless() } else { c })
        .collect();
    state.deck = deck::shuffle(pile, &mut state.rng);
    if let Some(top) = top {
        state.discard.push_back(top);
    }

    trace!(deck = state.deck.len(), "recycled discard pile into deck");
}
