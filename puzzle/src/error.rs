//! Error types for the puzzle core and its collaborators.

use thiserror::Error;

use crate::piece::{PieceId, SlotId};

/// Errors raised by the core's own data structures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PuzzleError {
    /// A piece id outside `1..=PIECE_COUNT`.
    #[error("piece id {0} out of range")]
    PieceOutOfRange(u8),

    /// A slot id outside `1..=PIECE_COUNT`.
    #[error("slot id {0} out of range")]
    SlotOutOfRange(u8),

    /// The piece is not in the staging area, so it cannot be picked up.
    #[error("piece {0} is not in the staging area")]
    NotDraggable(PieceId),

    /// The slot already holds a piece.
    #[error("slot {0} is already occupied")]
    SlotOccupied(SlotId),

    /// The piece was never dealt in this round.
    #[error("unknown piece {0}")]
    UnknownPiece(PieceId),

    /// An id attribute that is not a number.
    #[error("invalid id {0}")]
    InvalidId(String),

    /// A snapshot could not be encoded.
    #[error("snapshot encode failed: {0}")]
    Snapshot(String),
}

/// Failure inside a rendering surface. Logged by the session, never fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SurfaceError {
    /// An element the surface expected is not in the document.
    #[error("missing element: {0}")]
    MissingElement(String),

    /// A DOM call threw.
    #[error("DOM operation failed: {0}")]
    Dom(String),
}

/// Failure inside a feedback collaborator. Logged by the session, never fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedbackError {
    /// Audio output is not available on this device.
    #[error("audio unavailable: {0}")]
    Unavailable(String),

    /// A sound failed to start.
    #[error("playback failed: {0}")]
    Playback(String),

    /// The win banner could not be shown or hidden.
    #[error("win display failed: {0}")]
    Display(String),
}
