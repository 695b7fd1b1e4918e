//! Game configuration.
//!
//! Rooms are configured at creation time. The engine never reads global
//! settings; everything it needs travels with the snapshot.

use serde::{Deserialize, Serialize};

/// Room capacity for the canonical 108-card deck: 15 players at 7 cards
/// each still leaves a start card.
pub const MAX_SUPPORTED_PLAYERS: usize = 15;

/// Per-room configuration.
///
/// ## Example
///
/// ```
/// use uno_engine::core::GameConfig;
///
/// let config = GameConfig::default();
/// assert_eq!(config.max_players, 4);
/// assert_eq!(config.cards_per_player, 7);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Seat capacity of the room.
    pub max_players: usize,

    /// Opening hand size.
    pub cards_per_player: usize,
}

impl GameConfig {
    /// Create a configuration.
    ///
    /// Capacity bounds are programmer errors, not game outcomes, so they
    /// assert. Whether a particular roster actually fits the deck is
    /// checked when dealing.
    #[must_use]
    pub fn new(max_players: usize, cards_per_player: usize) -> Self {
        assert!(max_players >= 2, "A room needs capacity for at least 2 players");
        assert!(
            max_players <= MAX_SUPPORTED_PLAYERS,
            "At most {MAX_SUPPORTED_PLAYERS} players supported"
        );
        assert!(cards_per_player >= 1, "Players need at least 1 card");

        Self {
            max_players,
            cards_per_player,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_players: 4,
            cards_per_player: 7,
        }
    }
}
