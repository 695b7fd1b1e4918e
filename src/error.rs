//! Setup errors: the loud half of the error model.
//!
//! In-game illegality (wrong turn, stale card, finished game) is not an
//! error at all; `session::apply_action` silently returns the snapshot
//! unchanged. Structural violations while assembling a room are bugs in
//! the caller and surface as `SetupError`.

use thiserror::Error;

use crate::core::PlayerId;

/// Structural violations at room-assembly boundaries.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SetupError {
    #[error("roster is empty")]
    EmptyRoster,

    #[error("game needs at least 2 players, got {0}")]
    NotEnoughPlayers(usize),

    #[error("roster has {got} players but the room allows {max}")]
    TooManyPlayers { got: usize, max: usize },

    #[error("room is full ({max} seats)")]
    RoomFull { max: usize },

    #[error("{0} is already seated")]
    DuplicatePlayerId(PlayerId),

    #[error("game already started")]
    AlreadyStarted,

    #[error("deck of {got} cards cannot cover {need} (hands plus a start card)")]
    InsufficientDeck { got: usize, need: usize },
}
