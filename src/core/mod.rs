//! Core engine types: cards, players, state, actions, RNG, configuration.
//!
//! Everything here is plain data. The rules and session modules own the
//! transitions; clients only ever read these types and submit `Action`s.

pub mod action;
pub mod card;
pub mod config;
pub mod player;
pub mod rng;
pub mod state;

pub use action::Action;
pub use card::{Card, CardColor, CardId, CardKind};
pub use config::{GameConfig, MAX_SUPPORTED_PLAYERS};
pub use player::{Controller, Difficulty, Player, PlayerId};
pub use rng::{GameRng, GameRngState};
pub use state::{Direction, GameState, GameStatus};
