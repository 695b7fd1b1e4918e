//! Player intents: play a card or draw from the deck.
//!
//! An action is what a client (human UI or AI) submits to the session
//! facade. The facade validates it against the snapshot; illegal actions
//! are silently rejected rather than erroring, since stale commands are
//! routine in a networked game.

use serde::{Deserialize, Serialize};

use super::card::{Card, CardColor};

/// A complete game action.
///
/// `chosen_color` resolves a wild's color and is ignored for non-wild
/// cards. A wild played without a color is an incomplete intent and is
/// rejected.
///
/// ## Example
///
/// ```
/// use uno_engine::core::{Action, Card, CardColor, CardId, CardKind};
///
/// let five = Card::number(CardId::new(12), CardColor::Red, 5);
/// let play = Action::play(five);
///
/// let wild = Card::wild(CardId::new(105), CardKind::Wild);
/// let play_wild = Action::play_wild(wild, CardColor::Blue);
///
/// assert_ne!(play, play_wild);
/// assert_ne!(play, Action::Draw);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Play a card from hand, with a color choice for wilds.
    Play {
        card: Card,
        chosen_color: Option<CardColor>,
    },
    /// Draw one card from the deck. Always ends the turn.
    Draw,
}

impl Action {
    /// Play a non-wild card.
    #[must_use]
    pub fn play(card: Card) -> Self {
        Action::Play {
            card,
            chosen_color: None,
        }
    }

    /// Play a wild card with its chosen color.
    #[must_use]
    pub fn play_wild(card: Card, color: CardColor) -> Self {
        Action::Play {
            card,
            chosen_color: Some(color),
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Play {
                card,
                chosen_color: Some(color),
            } => write!(f, "play {card} as {color}"),
            Action::Play { card, .. } => write!(f, "play {card}"),
            Action::Draw => write!(f, "draw"),
        }
    }
}
