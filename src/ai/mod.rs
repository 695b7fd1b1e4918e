//! AI opponents for uno-engine.
//!
//! ## Overview
//!
//! Three difficulty tiers share one shape: a draw policy plus a move
//! scorer, looked up from a strategy table by `Difficulty`. The decision
//! layer scores the valid plays and keeps the strict maximum, so a tier
//! is exactly as smart as its scorer.
//!
//! - **Easy**: Uniform random among valid plays
//! - **Medium**: Random base, prefers action cards and color matches
//! - **Hard**: Deterministic card values, defensive bonuses against
//!   short-handed opponents, and wild hoarding
//!
//! ## Usage
//!
//! ```rust
//! use uno_engine::core::{Difficulty, GameConfig, Player, PlayerId};
//! use uno_engine::session;
//!
//! let roster = vec![
//!     Player::human(PlayerId::new(1), "Ana"),
//!     Player::ai(PlayerId::new(2), "Bot", Difficulty::Hard),
//! ];
//! let state = session::start_session(roster, GameConfig::default(), 7).unwrap();
//!
//! // Preview what the bot would do if the turn is on it
//! let preview = session::decide_ai_action(&state, PlayerId::new(2));
//! println!("bot would: {:?}", preview);
//! ```
//!
//! Randomness always comes from an injected `GameRng`, so a seed fixes the
//! whole game, AI included.

pub mod decision;
pub mod strategy;

pub use decision::{choose_wild_color, decide};
pub use strategy::Strategy;
