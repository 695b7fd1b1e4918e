//! The session facade: room lifecycle, turn application, and the AI
//! driver.
//!
//! ## Transitions
//!
//! Every operation takes a snapshot and returns a fresh one; nothing
//! mutates in place. Structural mistakes while assembling a room (bad
//! roster, started game) are loud `SetupError`s. In-game illegality is
//! silent: `apply_action` hands back a snapshot equal to its input, which
//! callers can detect by comparison or simply ignore.
//!
//! ## AI Turns
//!
//! Whenever an operation leaves the turn on an AI seat, the facade plays
//! that seat (and any AI seats after it) synchronously before returning.
//! Returned snapshots are therefore quiescent: finished, or waiting on a
//! human. Each AI decision draws from a fork of the snapshot's RNG, so a
//! serialized state replays into the same moves.

mod store;

pub use store::{RoomId, SessionStore};

use im::Vector;
use tracing::{debug, info, warn};

use crate::ai;
use crate::core::{
    Action, Controller, Direction, GameConfig, GameRng, GameState, GameStatus, Player, PlayerId,
};
use crate::deck;
use crate::error::SetupError;
use crate::rules;

/// Upper bound on consecutive AI moves resolved by one operation.
///
/// An all-AI table finishes far below this; reaching it means the driver
/// is wedged, and the state is returned as-is.
const AI_MOVE_GUARD: usize = 512;

/// Open a waiting room with `host` in seat 0.
///
/// The seed fixes the room's entire future: deal, reshuffles, and AI
/// decisions all derive from it.
#[must_use]
pub fn new_room(host: Player, config: GameConfig, seed: u64) -> GameState {
    let host_id = host.id;
    let mut players = Vector::new();
    players.push_back(host);

    info!(host = %host_id, seed, "opened room");

    GameState {
        players,
        current: host_id,
        direction: Direction::Clockwise,
        deck: Vector::new(),
        discard: Vector::new(),
        status: GameStatus::Waiting,
        config,
        rng: GameRng::new(seed),
    }
}

/// Seat another player in a waiting room.
pub fn add_player(state: &GameState, player: Player) -> Result<GameState, SetupError> {
    if state.status != GameStatus::Waiting {
        return Err(SetupError::AlreadyStarted);
    }
    if state.players.len() >= state.config.max_players {
        return Err(SetupError::RoomFull {
            max: state.config.max_players,
        });
    }
    if state.player(player.id).is_some() {
        return Err(SetupError::DuplicatePlayerId(player.id));
    }

    debug!(player = %player.id, name = %player.name, "seated player");

    let mut next = state.clone();
    next.players.push_back(player);
    Ok(next)
}

/// Remove a player in any phase. Unknown ids leave the state unchanged.
///
/// Leaving a live game returns the leaver's hand to the bottom of the
/// deck and passes the turn if the leaver held it. A live game with at
/// most one seat left finishes immediately.
#[must_use]
pub fn remove_player(state: &GameState, player: PlayerId) -> GameState {
    let mut next = state.clone();
    let seat = match next.seat_of(player) {
        Some(seat) => seat,
        None => return next,
    };

    // Who inherits the turn, resolved while the leaver still holds a seat
    let heir = next.players.get(next.seat_after(seat, 1)).map(|p| p.id);

    let leaver = next.players.remove(seat);
    info!(player = %player, "player left the room");

    match next.status {
        GameStatus::Playing => {
            // The hand goes under the deck so the room keeps its 108 cards
            for card in leaver.hand {
                next.deck.push_front(card);
            }
            if next.current == player {
                if let Some(heir) = heir.filter(|id| *id != player) {
                    next.current = heir;
                }
            }
            if next.players.len() <= 1 {
                next.status = GameStatus::Finished;
            }
            drive_ai(&mut next);
        }
        GameStatus::Waiting => {
            if next.current == player {
                if let Some(front) = next.players.front() {
                    next.current = front.id;
                }
            }
        }
        GameStatus::Finished => {}
    }

    next
}

/// Deal and begin a waiting room's game.
///
/// Seat 0 keeps the opening turn; if that seat is an AI, its moves (and
/// any AI seats after it) resolve before this returns.
pub fn start(state: &GameState) -> Result<GameState, SetupError> {
    if state.status != GameStatus::Waiting {
        return Err(SetupError::AlreadyStarted);
    }
    if state.players.len() < 2 {
        return Err(SetupError::NotEnoughPlayers(state.players.len()));
    }

    let mut next = state.clone();
    let fresh = deck::build_deck(&mut next.rng);
    let dealt = deck::deal(fresh, next.players.len(), next.config.cards_per_player)?;

    for (seat, hand) in dealt.hands.into_iter().enumerate() {
        if let Some(player) = next.players.get_mut(seat) {
            player.hand = hand;
            player.called_uno = false;
        }
    }
    next.deck = dealt.deck;
    next.discard = std::iter::once(dealt.start_card).collect();
    next.direction = Direction::Clockwise;
    next.status = GameStatus::Playing;
    if let Some(front) = next.players.front() {
        next.current = front.id;
    }

    info!(
        players = next.players.len(),
        cards_per_player = next.config.cards_per_player,
        "game started"
    );

    drive_ai(&mut next);
    Ok(next)
}

/// Create a room from a full roster and start it immediately.
///
/// The first roster entry hosts. Fails on an empty or oversized roster,
/// duplicate ids, or a roster the deck cannot cover.
pub fn start_session(
    roster: Vec<Player>,
    config: GameConfig,
    seed: u64,
) -> Result<GameState, SetupError> {
    if roster.len() > config.max_players {
        return Err(SetupError::TooManyPlayers {
            got: roster.len(),
            max: config.max_players,
        });
    }

    let mut roster = roster.into_iter();
    let host = roster.next().ok_or(SetupError::EmptyRoster)?;
    let mut state = new_room(host, config, seed);
    for player in roster {
        state = add_player(&state, player)?;
    }
    start(&state)
}

/// Apply one player action, then let AI seats respond.
///
/// Illegal actions (out of turn, unknown card, bad match, wild without a
/// color, room not live) return a snapshot equal to the input.
#[must_use]
pub fn apply_action(state: &GameState, player: PlayerId, action: &Action) -> GameState {
    match try_apply(state, player, action) {
        Some(mut next) => {
            drive_ai(&mut next);
            next
        }
        None => {
            debug!(player = %player, action = %action, "rejected action");
            state.clone()
        }
    }
}

/// Record a one-card call. Anything else is silently ignored.
///
/// The call is declarative: the engine records it and never penalizes
/// its absence.
#[must_use]
pub fn call_uno(state: &GameState, player: PlayerId) -> GameState {
    let mut next = state.clone();
    if next.status == GameStatus::Playing {
        if let Some(p) = next.player_mut(player) {
            if p.hand_size() == 1 {
                p.called_uno = true;
                debug!(player = %player, "called uno");
            }
        }
    }
    next
}

/// What the AI holding the turn would do, without committing anything.
///
/// `None` unless `player` is an AI seat holding the turn in a live game.
/// Previews fork the RNG exactly as the driver would, so the preview is
/// the move.
#[must_use]
pub fn decide_ai_action(state: &GameState, player: PlayerId) -> Option<Action> {
    if state.status != GameStatus::Playing || state.current != player {
        return None;
    }
    let difficulty = match state.player(player)?.controller {
        Controller::Ai(difficulty) => difficulty,
        Controller::Human => return None,
    };

    let mut rng = state.rng.clone();
    let mut fork = rng.fork();
    Some(ai::decide(state, player, difficulty, &mut fork))
}

/// One legality-checked transition. `None` means rejected.
fn try_apply(state: &GameState, player: PlayerId, action: &Action) -> Option<GameState> {
    if state.status != GameStatus::Playing || state.current != player {
        return None;
    }
    let seat = state.seat_of(player)?;

    let mut next = state.clone();
    match action {
        Action::Play { card, chosen_color } => {
            // The hand's copy is authoritative; the submitted card only
            // names the id
            let idx = next.players.get(seat)?.find_card(card.id)?;
            let held = *next.players.get(seat)?.hand.get(idx)?;

            let played = if held.is_wild() {
                held.with_color((*chosen_color)?)
            } else {
                held
            };

            let top = *next.top_card()?;
            if !rules::is_valid_play(&held, &top) {
                return None;
            }

            if let Some(p) = next.players.get_mut(seat) {
                p.hand.remove(idx);
            }
            next.discard.push_back(played);
            debug!(player = %player, card = %played, "played card");

            rules::apply_effect(&mut next, &played);

            if let Some(winner) = rules::check_win_condition(&next) {
                next.status = GameStatus::Finished;
                info!(winner = %winner, "game over");
            }
        }
        Action::Draw => {
            let drawn = rules::draw_from_deck(&mut next, seat, 1);
            debug!(player = %player, drawn, "drew from deck");
            // Drawing ends the turn whether or not the card is playable
            rules::advance(&mut next, seat, 1);
        }
    }
    Some(next)
}

/// Play AI seats until the turn reaches a human or the game ends.
fn drive_ai(state: &mut GameState) {
    for _ in 0..AI_MOVE_GUARD {
        if state.status != GameStatus::Playing {
            return;
        }
        let actor = state.current;
        let difficulty = match state.player(actor) {
            Some(p) => match p.controller {
                Controller::Ai(difficulty) => difficulty,
                Controller::Human => return,
            },
            None => return,
        };

        let mut rng = state.rng.fork();
        let action = ai::decide(state, actor, difficulty, &mut rng);
        match try_apply(state, actor, &action) {
            Some(next) => {
                debug!(player = %actor, action = %action, "AI moved");
                *state = next;
            }
            None => {
                warn!(player = %actor, action = %action, "AI move rejected");
                return;
            }
        }
    }
    warn!("AI move guard tripped; leaving the turn in place");
}
