//! Game state: seats, piles, turn order, and lifecycle status.
//!
//! ## GameState
//!
//! One immutable snapshot of a room. Uses `im` persistent structures so
//! cloning is O(1); every transition produces a fresh snapshot and the
//! caller replaces the old one wholesale.
//!
//! The deterministic RNG travels inside the snapshot. Shuffles,
//! reshuffles, and AI decisions all derive from it, so a serialized state
//! replays into exactly the game it would have been.
//!
//! ## Seats vs Ids
//!
//! `players` order is seat order. `PlayerId` is an opaque caller-assigned
//! id; `seat_of` maps between the two. Turn advancement is seat
//! arithmetic modulo the player count, honoring `direction`.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::card::Card;
use super::config::GameConfig;
use super::player::{Player, PlayerId};
use super::rng::GameRng;

/// Direction of play around the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// Ascending seat order.
    Clockwise,
    /// Descending seat order.
    Counterclockwise,
}

impl Direction {
    /// The opposite direction.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Direction::Clockwise => Direction::Counterclockwise,
            Direction::Counterclockwise => Direction::Clockwise,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Direction::Clockwise => "clockwise",
            Direction::Counterclockwise => "counterclockwise",
        };
        write!(f, "{name}")
    }
}

/// Room lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Seats are filling; no cards dealt yet.
    Waiting,
    /// The game is live.
    Playing,
    /// Someone won (or everyone else left).
    Finished,
}

/// One snapshot of a room.
///
/// Fields are crate-private: reads go through accessors, writes happen
/// only inside the rules and session modules. The top of `deck` and
/// `discard` is the last element.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) players: Vector<Player>,
    pub(crate) current: PlayerId,
    pub(crate) direction: Direction,
    pub(crate) deck: Vector<Card>,
    pub(crate) discard: Vector<Card>,
    pub(crate) status: GameStatus,
    pub(crate) config: GameConfig,
    pub(crate) rng: GameRng,
}

impl GameState {
    /// All seated players, in seat order.
    #[must_use]
    pub fn players(&self) -> &Vector<Player> {
        &self.players
    }

    /// Number of seated players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Look up a player by id.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub(crate) fn player_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        let seat = self.seat_of(id)?;
        self.players.get_mut(seat)
    }

    /// Seat index of a player, if seated.
    #[must_use]
    pub fn seat_of(&self, id: PlayerId) -> Option<usize> {
        self.players.iter().position(|p| p.id == id)
    }

    /// Whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current
    }

    /// Seat index of the current player.
    #[must_use]
    pub fn current_seat(&self) -> Option<usize> {
        self.seat_of(self.current)
    }

    /// Active direction of play.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Lifecycle status.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Room configuration.
    #[must_use]
    pub fn config(&self) -> GameConfig {
        self.config
    }

    /// Cards left in the draw deck.
    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.deck.len()
    }

    /// Cards in the discard pile.
    #[must_use]
    pub fn discard_size(&self) -> usize {
        self.discard.len()
    }

    /// Top of the discard pile: the card plays are matched against.
    #[must_use]
    pub fn top_card(&self) -> Option<&Card> {
        self.discard.last()
    }

    /// Every card in the room: deck + discard + hands.
    ///
    /// A live game dealt from the canonical deck always totals 108.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        let in_hands: usize = self.players.iter().map(Player::hand_size).sum();
        self.deck.len() + self.discard.len() + in_hands
    }

    /// The seat `steps` ahead of `seat` in the active direction, wrapping.
    #[must_use]
    pub fn seat_after(&self, seat: usize, steps: usize) -> usize {
        let n = self.players.len();
        if n == 0 {
            return seat;
        }
        match self.direction {
            Direction::Clockwise => (seat + steps) % n,
            Direction::Counterclockwise => (seat + n - (steps % n)) % n,
        }
    }

    /// The winner, once the game is finished.
    ///
    /// Normally the player who emptied their hand. If the game ended
    /// because everyone else left, the last seat standing wins.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        if self.status != GameStatus::Finished {
            return None;
        }
        self.players
            .iter()
            .find(|p| p.hand.is_empty())
            .map(|p| p.id)
            .or_else(|| {
                if self.players.len() == 1 {
                    self.players.front().map(|p| p.id)
                } else {
                    None
                }
            })
    }
}
