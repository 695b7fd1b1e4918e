//! # uno-engine
//!
//! An authoritative rules engine for an UNO-variant card game, with
//! tiered AI opponents.
//!
//! ## Design Principles
//!
//! 1. **Engine-Authoritative**: Validation, effects, and turn order are
//!    decided here, never by callers. Illegal in-game actions are
//!    silently rejected; only room-assembly mistakes are errors.
//!
//! 2. **Pure Transitions**: Operations take a state snapshot and return
//!    a new one. Cloning is O(1) via `im` persistent structures, so the
//!    caller keeps whichever snapshot it wants.
//!
//! 3. **Deterministic**: The RNG travels inside the state. One seed
//!    fixes the deal, every reshuffle, and every AI decision, which
//!    makes whole games replayable from a serialized snapshot.
//!
//! ## Modules
//!
//! - `core`: Cards, players, actions, state, RNG, configuration
//! - `deck`: Canonical 108-card deck construction, shuffling, dealing
//! - `rules`: Play validation, card effects, forced draws, win detection
//! - `ai`: Difficulty-tiered opponents (easy, medium, hard)
//! - `session`: Room lifecycle facade and snapshot store
//! - `error`: Setup errors for room-assembly violations
//!
//! ## Quick Start
//!
//! ```
//! use uno_engine::core::{Action, Difficulty, GameConfig, GameStatus, Player, PlayerId};
//! use uno_engine::session;
//!
//! let roster = vec![
//!     Player::human(PlayerId::new(1), "Ana"),
//!     Player::ai(PlayerId::new(2), "Bot", Difficulty::Medium),
//! ];
//! let state = session::start_session(roster, GameConfig::default(), 42).unwrap();
//!
//! assert_eq!(state.status(), GameStatus::Playing);
//! assert_eq!(state.player(PlayerId::new(1)).unwrap().hand_size(), 7);
//!
//! // Drawing always ends the turn; the bot then plays automatically
//! let state = session::apply_action(&state, PlayerId::new(1), &Action::Draw);
//! assert_eq!(state.total_cards(), 108);
//! ```

pub mod ai;
pub mod core;
pub mod deck;
pub mod error;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Action, Card, CardColor, CardId, CardKind, Controller, Difficulty, Direction, GameConfig,
    GameRng, GameRngState, GameState, GameStatus, Player, PlayerId,
};

pub use crate::ai::Strategy;

pub use crate::error::SetupError;

pub use crate::rules::{check_win_condition, is_valid_play, valid_plays};

pub use crate::session::{RoomId, SessionStore};
