//! Slot occupancy for the grid.

#[cfg(test)]
#[path = "slot_test.rs"]
mod slot_test;

use crate::consts::PIECE_COUNT;
use crate::error::PuzzleError;
use crate::piece::{PieceId, SlotId};

/// Which piece, if any, sits in each slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotBoard {
    occupants: [Option<PieceId>; PIECE_COUNT as usize],
}

impl Default for SlotBoard {
    fn default() -> Self {
        Self { occupants: [None; PIECE_COUNT as usize] }
    }
}

impl SlotBoard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_occupied(&self, slot: SlotId) -> bool {
        self.occupants[slot.index()].is_some()
    }

    #[must_use]
    pub fn occupant(&self, slot: SlotId) -> Option<PieceId> {
        self.occupants[slot.index()]
    }

    /// Put `piece` into an empty slot.
    pub fn occupy(&mut self, slot: SlotId, piece: PieceId) -> Result<(), PuzzleError> {
        let cell = &mut self.occupants[slot.index()];
        if cell.is_some() {
            return Err(PuzzleError::SlotOccupied(slot));
        }
        *cell = Some(piece);
        Ok(())
    }

    /// Number of occupied slots.
    #[must_use]
    pub fn filled(&self) -> usize {
        self.occupants.iter().filter(|o| o.is_some()).count()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.filled() == self.occupants.len()
    }

    /// Occupants in slot order, index 0 is slot 1.
    #[must_use]
    pub fn occupants(&self) -> &[Option<PieceId>] {
        &self.occupants
    }

    pub fn clear(&mut self) {
        self.occupants = [None; PIECE_COUNT as usize];
    }
}
