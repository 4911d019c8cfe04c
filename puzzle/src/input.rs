//! Input model: input sources, input events, and the drag state machine's state.
//!
//! Mouse and touch listeners both reduce to the same four events. `DragState`
//! is the gesture being tracked between interaction-start and interaction-end,
//! carrying what the controller needs to move the piece and to roll it back.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::geom::Point;
use crate::piece::{Location, PieceId, SlotId};

/// Which device stream produced an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSource {
    /// Mouse / pen pointer.
    Pointer,
    /// Touch screen.
    Touch,
}

/// One interaction event, in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Pointer-down or touch-start on a piece.
    Start { source: InputSource, piece: PieceId, at: Point },
    /// Pointer or touch movement.
    Move { source: InputSource, at: Point },
    /// Pointer-up or touch-end.
    End { source: InputSource, at: Point },
    /// Touch-cancel or an explicit cancel key. Rolls the drag back.
    Cancel { source: InputSource },
}

impl InputEvent {
    #[must_use]
    pub fn source(&self) -> InputSource {
        match *self {
            Self::Start { source, .. }
            | Self::Move { source, .. }
            | Self::End { source, .. }
            | Self::Cancel { source } => source,
        }
    }
}

/// An in-progress drag, from pick-up to release.
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    /// The piece being moved.
    pub piece: PieceId,
    /// Where the piece goes back to if the drop is refused.
    pub origin: Location,
    /// The stream that started the drag; events from the other one are ignored.
    pub source: InputSource,
    /// Most recent coordinate seen.
    pub last: Point,
    /// Slot currently under the pointer, for highlight feedback only.
    pub candidate: Option<SlotId>,
}

/// State of the drag controller.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DragState {
    /// No drag in progress; waiting for the next interaction-start.
    #[default]
    Idle,
    /// A piece is being dragged.
    Dragging(DragSession),
}

impl DragState {
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging(_))
    }

    /// The active drag, if any.
    #[must_use]
    pub fn session(&self) -> Option<&DragSession> {
        match self {
            Self::Idle => None,
            Self::Dragging(session) => Some(session),
        }
    }

    /// End the current drag, returning it.
    pub fn take(&mut self) -> Option<DragSession> {
        match std::mem::take(self) {
            Self::Idle => None,
            Self::Dragging(session) => Some(session),
        }
    }
}
