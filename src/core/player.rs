//! Players: identity, controller type, and per-seat state.
//!
//! ## Key Types
//!
//! - `PlayerId`: Opaque caller-assigned identifier (not a seat index)
//! - `Difficulty`: AI tiers
//! - `Controller`: Who drives a seat (human or AI)
//! - `Player`: One seated player with their hand

use im::Vector;
use serde::{Deserialize, Serialize};

use super::card::{Card, CardId};

/// Unique identifier for a player.
///
/// Ids are opaque and caller-assigned. They are not seat indexes: seat
/// order lives in `GameState` and shifts when players leave.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u32);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// AI difficulty tiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        write!(f, "{name}")
    }
}

/// Who drives a seat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Controller {
    Human,
    Ai(Difficulty),
}

/// One seated player.
///
/// `called_uno` is declarative only: the engine records the call and never
/// penalizes its absence.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub hand: Vector<Card>,
    pub controller: Controller,
    pub called_uno: bool,
}

impl Player {
    /// Seat a human player with an empty hand.
    #[must_use]
    pub fn human(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            hand: Vector::new(),
            controller: Controller::Human,
            called_uno: false,
        }
    }

    /// Seat an AI player with an empty hand.
    #[must_use]
    pub fn ai(id: PlayerId, name: impl Into<String>, difficulty: Difficulty) -> Self {
        Self {
            id,
            name: name.into(),
            hand: Vector::new(),
            controller: Controller::Ai(difficulty),
            called_uno: false,
        }
    }

    /// Whether an AI controller drives this seat.
    #[must_use]
    pub fn is_ai(&self) -> bool {
        matches!(self.controller, Controller::Ai(_))
    }

    /// Number of cards in hand.
    #[must_use]
    pub fn hand_size(&self) -> usize {
        self.hand.len()
    }

    /// Position of a card in this hand, by id.
    #[must_use]
    pub fn find_card(&self, id: CardId) -> Option<usize> {
        self.hand.iter().position(|c| c.id == id)
    }
}
