//! The rule engine: what may be played, and what a play does.
//!
//! Everything here is a concrete function over `GameState`; dispatch is a
//! `match` on `CardKind`, never a trait object. The session facade calls
//! these in a fixed pipeline: validate, move the card, apply the effect,
//! check for a winner.

pub mod engine;

pub use engine::{check_win_condition, is_valid_play, valid_plays};

pub(crate) use engine::{advance, apply_effect, draw_from_deck};
