//! Room storage for snapshot lookup.
//!
//! The `SessionStore` holds the latest snapshot per room. It never steps
//! games itself; callers run facade operations and put the result back.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::{GameRng, GameState};

const ROOM_ID_LEN: usize = 6;
const ROOM_ID_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Shareable room code.
///
/// Six uppercase alphanumeric characters when generated; arbitrary
/// strings are accepted for callers with their own scheme.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RoomId(String);

impl RoomId {
    /// Wrap an existing room code.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh room code from `rng`.
    ///
    /// Collisions are possible; callers holding a store should retry
    /// while the code is taken.
    #[must_use]
    pub fn generate(rng: &mut GameRng) -> Self {
        let code: String = (0..ROOM_ID_LEN)
            .map(|_| ROOM_ID_ALPHABET[rng.gen_range_usize(0..ROOM_ID_ALPHABET.len())] as char)
            .collect();
        Self(code)
    }

    /// The code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RoomId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Latest snapshot per room.
///
/// ## Example
///
/// ```
/// use uno_engine::core::{GameConfig, GameRng, Player, PlayerId};
/// use uno_engine::session::{self, RoomId, SessionStore};
///
/// let mut store = SessionStore::new();
/// let mut rng = GameRng::new(99);
///
/// let id = RoomId::generate(&mut rng);
/// let room = session::new_room(Player::human(PlayerId::new(1), "Ana"), GameConfig::default(), 7);
/// store.insert(id.clone(), room);
///
/// assert!(store.get(&id).is_some());
/// ```
#[derive(Clone, Debug, Default)]
pub struct SessionStore {
    rooms: FxHashMap<RoomId, GameState>,
}

impl SessionStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Put a room's snapshot in, new or not.
    pub fn insert(&mut self, id: RoomId, state: GameState) {
        self.rooms.insert(id, state);
    }

    /// Latest snapshot for a room.
    #[must_use]
    pub fn get(&self, id: &RoomId) -> Option<&GameState> {
        self.rooms.get(id)
    }

    /// Swap in a fresh snapshot for an existing room.
    ///
    /// Returns false (and stores nothing) when the room is unknown.
    pub fn replace(&mut self, id: &RoomId, state: GameState) -> bool {
        match self.rooms.get_mut(id) {
            Some(slot) => {
                *slot = state;
                true
            }
            None => false,
        }
    }

    /// Drop a room, returning its final snapshot.
    pub fn remove(&mut self, id: &RoomId) -> Option<GameState> {
        self.rooms.remove(id)
    }

    /// Drop rooms with no players left. Returns how many went.
    pub fn prune_empty(&mut self) -> usize {
        let before = self.rooms.len();
        self.rooms.retain(|_, state| state.player_count() > 0);
        before - self.rooms.len()
    }

    /// Whether a room code is taken.
    #[must_use]
    pub fn contains(&self, id: &RoomId) -> bool {
        self.rooms.contains_key(id)
    }

    /// Number of stored rooms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    /// Check if the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Iterate over stored room codes.
    pub fn room_ids(&self) -> impl Iterator<Item = &RoomId> {
        self.rooms.keys()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameConfig, Player, PlayerId};
    use crate::session;

    fn waiting_room(host: u32) -> GameState {
        session::new_room(
            Player::human(PlayerId::new(host), format!("P{host}")),
            GameConfig::default(),
            u64::from(host),
        )
    }

    #[test]
    fn test_generate_shape_and_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        let id1 = RoomId::generate(&mut rng1);
        let id2 = RoomId::generate(&mut rng2);

        assert_eq!(id1, id2);
        assert_eq!(id1.as_str().len(), 6);
        assert!(id1
            .as_str()
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
    }

    #[test]
    fn test_insert_get_replace_remove() {
        let mut store = SessionStore::new();
        let id = RoomId::new("AB12CD");

        assert!(store.get(&id).is_none());
        assert!(!store.replace(&id, waiting_room(1)));

        store.insert(id.clone(), waiting_room(1));
        assert!(store.contains(&id));
        assert_eq!(store.len(), 1);

        let grown = session::add_player(
            store.get(&id).unwrap(),
            Player::human(PlayerId::new(2), "Bo"),
        )
        .unwrap();
        assert!(store.replace(&id, grown));
        assert_eq!(store.get(&id).unwrap().player_count(), 2);

        let last = store.remove(&id).unwrap();
        assert_eq!(last.player_count(), 2);
        assert!(store.is_empty());
    }

    #[test]
    fn test_prune_empty_rooms() {
        let mut store = SessionStore::new();
        store.insert(RoomId::new("KEEP01"), waiting_room(1));

        let deserted = session::remove_player(&waiting_room(2), PlayerId::new(2));
        assert_eq!(deserted.player_count(), 0);
        store.insert(RoomId::new("GONE01"), deserted);

        assert_eq!(store.prune_empty(), 1);
        assert_eq!(store.len(), 1);
        assert!(store.contains(&RoomId::new("KEEP01")));
    }

    #[test]
    fn test_room_id_display() {
        assert_eq!(RoomId::new("XY99ZZ").to_string(), "XY99ZZ");
    }
}
