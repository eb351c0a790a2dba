//! Card identity and orientation.
//!
//! Every card in a game is identified by its `(suit, rank)` pair, encoded as
//! a `CardId` in `0..52`. Exactly one `Card` exists per id.
//!
//! ## ID Layout
//!
//! - `0..13`: Hearts, ace to king
//! - `13..26`: Diamonds
//! - `26..39`: Spades
//! - `39..52`: Clubs
//!
//! ```
//! use klondike_engine::core::{CardId, Rank, Suit};
//!
//! let id = CardId::new(Suit::Spades, Rank::new(7).unwrap());
//! assert_eq!(id.suit(), Suit::Spades);
//! assert_eq!(id.rank().value(), 7);
//! assert_eq!(CardId::from_raw(id.raw()), Some(id));
//! ```

use serde::{Deserialize, Serialize};

use crate::piles::PileId;

/// Number of cards in a deck.
pub const DECK_SIZE: usize = 52;

/// Card suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Hearts,
    Diamonds,
    Spades,
    Clubs,
}

impl Suit {
    /// All suits in deck-building order.
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Spades, Suit::Clubs];

    /// Get the suit's color.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Suit::Hearts | Suit::Diamonds => Color::Red,
            Suit::Spades | Suit::Clubs => Color::Black,
        }
    }

    const fn index(self) -> u8 {
        self as u8
    }

    fn symbol(self) -> char {
        match self {
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Spades => '♠',
            Suit::Clubs => '♣',
        }
    }
}

/// Card color, derived from suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Black,
}

/// Card rank, 1 (ace) through 13 (king).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8")]
pub struct Rank(u8);

impl Rank {
    pub const ACE: Rank = Rank(1);
    pub const KING: Rank = Rank(13);

    /// Create a rank, or `None` outside `1..=13`.
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value >= 1 && value <= 13 {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Get the numeric rank.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Iterate ace to king.
    pub fn all() -> impl Iterator<Item = Rank> {
        (1..=13).map(Rank)
    }

    /// Check if `self` is exactly one rank above `other`.
    #[must_use]
    pub const fn is_successor_of(self, other: Rank) -> bool {
        self.0 == other.0 + 1
    }
}

impl TryFrom<u8> for Rank {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Rank::new(value).ok_or_else(|| format!("rank {} is outside 1..=13", value))
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            1 => write!(f, "A"),
            11 => write!(f, "J"),
            12 => write!(f, "Q"),
            13 => write!(f, "K"),
            n => write!(f, "{}", n),
        }
    }
}

/// Identity of a card: `(suit, rank)` packed into one byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8")]
pub struct CardId(u8);

impl CardId {
    /// Create the id for a suit and rank.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self(suit.index() * 13 + rank.0 - 1)
    }

    /// Create from a raw id, or `None` if out of range.
    #[must_use]
    pub const fn from_raw(raw: u8) -> Option<Self> {
        if (raw as usize) < DECK_SIZE {
            Some(Self(raw))
        } else {
            None
        }
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Index into a 52-slot card table.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[must_use]
    pub const fn suit(self) -> Suit {
        Suit::ALL[(self.0 / 13) as usize]
    }

    #[must_use]
    pub const fn rank(self) -> Rank {
        Rank(self.0 % 13 + 1)
    }

    /// Iterate all 52 ids in deck-building order.
    pub fn all() -> impl Iterator<Item = CardId> {
        (0..DECK_SIZE as u8).map(CardId)
    }
}

impl TryFrom<u8> for CardId {
    type Error = String;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        CardId::from_raw(raw)
            .ok_or_else(|| format!("card id {} is outside 0..{}", raw, DECK_SIZE))
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit().symbol())
    }
}

/// A card in play.
///
/// Suit and rank never change. Orientation changes through `flip`, and the
/// `pile` back-reference is maintained by the board on every relocation.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    suit: Suit,
    rank: Rank,

    /// Is this card face-down?
    pub face_down: bool,

    /// Pile currently holding this card.
    pub pile: PileId,
}

impl Card {
    /// Create a card.
    #[must_use]
    pub fn new(id: CardId, face_down: bool, pile: PileId) -> Self {
        Self {
            suit: id.suit(),
            rank: id.rank(),
            face_down,
            pile,
        }
    }

    #[must_use]
    pub fn id(&self) -> CardId {
        CardId::new(self.suit, self.rank)
    }

    #[must_use]
    pub fn suit(&self) -> Suit {
        self.suit
    }

    #[must_use]
    pub fn rank(&self) -> Rank {
        self.rank
    }

    #[must_use]
    pub fn color(&self) -> Color {
        self.suit.color()
    }

    #[must_use]
    pub fn is_red(&self) -> bool {
        self.color() == Color::Red
    }

    #[must_use]
    pub fn is_face_up(&self) -> bool {
        !self.face_down
    }

    /// Turn the card over. Orientation is never itself illegal.
    pub fn flip(&mut self) {
        self.face_down = !self.face_down;
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.face_down {
            write!(f, "[{}]", self.id())
        } else {
            write!(f, "{}", self.id())
        }
    }
}
