//! Placement validator: may this piece go into this slot?

#[cfg(test)]
#[path = "placement_test.rs"]
mod placement_test;

use std::fmt;

use crate::piece::{PieceId, SlotId};

/// Why a drop was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// The drop point was not over any slot.
    NoSlot,
    /// The slot already holds a piece.
    Occupied,
    /// The slot belongs to a different piece.
    WrongSlot,
}

/// Outcome of a placement check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Accept,
    Reject(Rejection),
}

impl Verdict {
    #[must_use]
    pub fn is_accept(self) -> bool {
        matches!(self, Self::Accept)
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::NoSlot => "no slot under drop point",
            Self::Occupied => "slot occupied",
            Self::WrongSlot => "wrong slot",
        })
    }
}

/// Accept iff the slot is free and its number equals the piece's number.
#[must_use]
pub fn validate(piece: PieceId, slot: SlotId, slot_occupied: bool) -> Verdict {
    if slot_occupied {
        Verdict::Reject(Rejection::Occupied)
    } else if piece.home() != slot {
        Verdict::Reject(Rejection::WrongSlot)
    } else {
        Verdict::Accept
    }
}
