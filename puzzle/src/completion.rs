//! Completion set: which pieces have been placed this round.

#[cfg(test)]
#[path = "completion_test.rs"]
mod completion_test;

use crate::consts::PIECE_COUNT;
use crate::piece::PieceId;

/// Placed piece ids in placement order, without duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompletionSet {
    placed: Vec<PieceId>,
}

impl CompletionSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an accepted placement and return the new size.
    ///
    /// Recording a piece twice is a bug in the caller. Debug builds assert;
    /// release builds log and leave the set as it was.
    pub fn record_placement(&mut self, piece: PieceId) -> usize {
        let fresh = !self.placed.contains(&piece);
        debug_assert!(fresh, "piece {piece} recorded twice");
        if fresh {
            self.placed.push(piece);
        } else {
            tracing::error!(%piece, "duplicate placement ignored");
        }
        self.placed.len()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.placed.len() == usize::from(PIECE_COUNT)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.placed.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.placed.is_empty()
    }

    #[must_use]
    pub fn contains(&self, piece: PieceId) -> bool {
        self.placed.contains(&piece)
    }

    pub fn iter(&self) -> impl Iterator<Item = PieceId> + '_ {
        self.placed.iter().copied()
    }

    pub fn clear(&mut self) {
        self.placed.clear();
    }
}
