//! Cards: colors, faces, and the physical card unit.
//!
//! ## Key Types
//!
//! - `CardId`: Stable identifier for one physical card
//! - `CardColor`: The four suit colors
//! - `CardKind`: Number and action faces
//! - `Card`: One physical card (id + color + kind)
//!
//! ## Wild Coloring
//!
//! Wild faces are built colorless (`color: None`) and acquire a color only
//! when played, via [`Card::with_color`]. Number and action cards always
//! carry a color.

use serde::{Deserialize, Serialize};

/// Unique identifier for a physical card within a deck.
///
/// The canonical deck numbers its cards 1..=108 in construction order.
/// The id survives shuffles, deals, and recoloring, so a card can be
/// tracked across its whole lifetime in a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
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

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// The four suit colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardColor {
    Red,
    Blue,
    Green,
    Yellow,
}

impl CardColor {
    /// All colors, in tie-break priority order. Deck construction and the
    /// AI's wild-color choice both iterate in this order.
    pub const ALL: [CardColor; 4] = [
        CardColor::Red,
        CardColor::Blue,
        CardColor::Green,
        CardColor::Yellow,
    ];
}

impl std::fmt::Display for CardColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CardColor::Red => "Red",
            CardColor::Blue => "Blue",
            CardColor::Green => "Green",
            CardColor::Yellow => "Yellow",
        };
        write!(f, "{name}")
    }
}

/// Card faces.
///
/// `Number` carries the printed value (0..=9). Two cards of different
/// values are different kinds for matching purposes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    Number(u8),
    Skip,
    Reverse,
    DrawTwo,
    Wild,
    WildDrawFour,
}

impl CardKind {
    /// Whether this is a wild face (wild or wild-draw-four).
    #[must_use]
    pub const fn is_wild(self) -> bool {
        matches!(self, CardKind::Wild | CardKind::WildDrawFour)
    }
}

impl std::fmt::Display for CardKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CardKind::Number(n) => write!(f, "{n}"),
            CardKind::Skip => write!(f, "Skip"),
            CardKind::Reverse => write!(f, "Reverse"),
            CardKind::DrawTwo => write!(f, "Draw Two"),
            CardKind::Wild => write!(f, "Wild"),
            CardKind::WildDrawFour => write!(f, "Wild Draw Four"),
        }
    }
}

/// One physical card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub color: Option<CardColor>,
    pub kind: CardKind,
}

impl Card {
    /// Create a number card. Values run 0..=9.
    #[must_use]
    pub fn number(id: CardId, color: CardColor, value: u8) -> Self {
        debug_assert!(value <= 9, "number value out of range: {value}");
        Self {
            id,
            color: Some(color),
            kind: CardKind::Number(value),
        }
    }

    /// Create a colored action card (skip, reverse, or draw-two).
    #[must_use]
    pub fn action(id: CardId, color: CardColor, kind: CardKind) -> Self {
        debug_assert!(
            matches!(kind, CardKind::Skip | CardKind::Reverse | CardKind::DrawTwo),
            "not a colored action face: {kind:?}"
        );
        Self {
            id,
            color: Some(color),
            kind,
        }
    }

    /// Create a colorless wild card (wild or wild-draw-four).
    #[must_use]
    pub fn wild(id: CardId, kind: CardKind) -> Self {
        debug_assert!(kind.is_wild(), "not a wild face: {kind:?}");
        Self {
            id,
            color: None,
            kind,
        }
    }

    /// Whether this is a wild face.
    #[must_use]
    pub fn is_wild(&self) -> bool {
        self.kind.is_wild()
    }

    /// The same card with its color set.
    ///
    /// Used when a wild lands on the discard pile with a chosen color;
    /// id and kind are preserved.
    #[must_use]
    pub fn with_color(self, color: CardColor) -> Self {
        Self {
            color: Some(color),
            ..self
        }
    }

    /// The same card with no color. A recycled wild returns to the deck
    /// colorless.
    #[must_use]
    pub fn colorless(self) -> Self {
        Self { color: None, ..self }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.color {
            Some(color) => write!(f, "{color} {}", self.kind),
            None => write!(f, "{}", self.kind),
        }
    }
}
