//! Piece model: identifiers, locations, and the registry of where each piece is.
//!
//! Pieces and slots are numbered `1..=PIECE_COUNT`; a piece belongs in the slot
//! with the same number. The registry is the single source of truth for a
//! piece's location. It remembers the dealt staging order separately from
//! locations, so lifting a piece and putting it back leaves the registry
//! exactly as it was.

#[cfg(test)]
#[path = "piece_test.rs"]
mod piece_test;

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::PIECE_COUNT;
use crate::error::PuzzleError;

/// Identity of a piece, `1..=PIECE_COUNT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PieceId(u8);

/// Identity of a grid slot, `1..=PIECE_COUNT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct SlotId(u8);

impl PieceId {
    /// Validate a raw piece number.
    pub fn new(raw: u8) -> Result<Self, PuzzleError> {
        if (1..=PIECE_COUNT).contains(&raw) { Ok(Self(raw)) } else { Err(PuzzleError::PieceOutOfRange(raw)) }
    }

    #[must_use]
    pub fn get(self) -> u8 {
        self.0
    }

    /// Every piece id in ascending order.
    pub fn all() -> impl ExactSizeIterator<Item = Self> {
        (1..=PIECE_COUNT).map(Self)
    }

    /// The one slot this piece is accepted in.
    #[must_use]
    pub fn home(self) -> SlotId {
        SlotId(self.0)
    }
}

impl SlotId {
    /// Validate a raw slot number.
    pub fn new(raw: u8) -> Result<Self, PuzzleError> {
        if (1..=PIECE_COUNT).contains(&raw) { Ok(Self(raw)) } else { Err(PuzzleError::SlotOutOfRange(raw)) }
    }

    #[must_use]
    pub fn get(self) -> u8 {
        self.0
    }

    /// Zero-based position, for indexing per-slot arrays.
    #[must_use]
    pub fn index(self) -> usize {
        usize::from(self.0 - 1)
    }

    /// Every slot id in ascending order.
    pub fn all() -> impl ExactSizeIterator<Item = Self> {
        (1..=PIECE_COUNT).map(Self)
    }
}

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Deserialization goes through `new`, so ids from a snapshot are range-checked.

impl TryFrom<u8> for PieceId {
    type Error = PuzzleError;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl From<PieceId> for u8 {
    fn from(id: PieceId) -> Self {
        id.0
    }
}

impl TryFrom<u8> for SlotId {
    type Error = PuzzleError;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl From<SlotId> for u8 {
    fn from(id: SlotId) -> Self {
        id.0
    }
}

/// Where a piece currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "at", content = "slot")]
pub enum Location {
    /// In the staging area, waiting to be dragged.
    Staging,
    /// Owned by the active drag session.
    InFlight,
    /// Bound to a slot. Final for the rest of the round.
    Slot(SlotId),
}

/// Location of every dealt piece.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PieceRegistry {
    dealt: Vec<PieceId>,
    locations: BTreeMap<PieceId, Location>,
}

impl PieceRegistry {
    /// An empty registry, before the first deal.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Put every piece of `order` into staging, in that order.
    #[must_use]
    pub fn dealt(order: Vec<PieceId>) -> Self {
        let locations = order.iter().map(|&id| (id, Location::Staging)).collect();
        Self { dealt: order, locations }
    }

    #[must_use]
    pub fn location(&self, id: PieceId) -> Option<Location> {
        self.locations.get(&id).copied()
    }

    /// Pieces still in staging, in dealt order.
    pub fn staged(&self) -> impl Iterator<Item = PieceId> + '_ {
        self.dealt
            .iter()
            .copied()
            .filter(|id| self.locations.get(id) == Some(&Location::Staging))
    }

    /// The piece currently in flight, if any.
    #[must_use]
    pub fn in_flight(&self) -> Option<PieceId> {
        self.locations
            .iter()
            .find(|(_, loc)| **loc == Location::InFlight)
            .map(|(id, _)| *id)
    }

    /// Number of dealt pieces.
    #[must_use]
    pub fn len(&self) -> usize {
        self.dealt.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dealt.is_empty()
    }

    /// Take a staged piece into flight, returning where it came from.
    pub fn lift(&mut self, id: PieceId) -> Result<Location, PuzzleError> {
        let loc = self.locations.get_mut(&id).ok_or(PuzzleError::UnknownPiece(id))?;
        if *loc != Location::Staging {
            return Err(PuzzleError::NotDraggable(id));
        }
        *loc = Location::InFlight;
        Ok(Location::Staging)
    }

    /// Return an in-flight piece to `origin`.
    pub fn restore(&mut self, id: PieceId, origin: Location) {
        if let Some(loc) = self.locations.get_mut(&id) {
            *loc = origin;
        }
    }

    /// Bind a piece to a slot.
    pub fn bind(&mut self, id: PieceId, slot: SlotId) -> Result<(), PuzzleError> {
        let loc = self.locations.get_mut(&id).ok_or(PuzzleError::UnknownPiece(id))?;
        *loc = Location::Slot(slot);
        Ok(())
    }
}
