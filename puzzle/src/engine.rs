//! The drag controller.
//!
//! `PuzzleCore` owns all game state and turns input events into state
//! transitions. It never touches a rendering tree or plays a sound: every
//! handler returns the [`Action`]s the host must apply, in order.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use tracing::{debug, info, warn};

use crate::completion::CompletionSet;
use crate::consts::PIECE_COUNT;
use crate::geom::Point;
use crate::hit::HitTester;
use crate::input::{DragSession, DragState, InputEvent, InputSource};
use crate::piece::{Location, PieceId, PieceRegistry, SlotId};
use crate::placement::{Rejection, Verdict, validate};
use crate::slot::SlotBoard;

/// Actions returned from handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// A new round was dealt: empty every slot and fill staging in this order.
    Staged { order: Vec<PieceId> },
    /// Detach the piece from layout and float it above everything at `at`.
    Lifted { piece: PieceId, at: Point },
    /// Centre the floating piece on `at`.
    Moved { piece: PieceId, at: Point },
    /// The pointer entered a slot during a drag.
    CandidateEntered { slot: SlotId },
    /// The pointer left a slot, or the drag ended over it.
    CandidateLeft { slot: SlotId },
    /// Drop refused: put the piece back where it came from and clear drag styling.
    Returned { piece: PieceId, origin: Location },
    /// Drop accepted: bind the piece into the slot. It is no longer draggable.
    Settled { piece: PieceId, slot: SlotId },
    /// Feedback signal: a piece was placed; `placed` pieces are now in.
    Placed { piece: PieceId, placed: usize },
    /// Feedback signal: the last piece was placed.
    Completed,
}

/// Core game state: everything except the collaborators.
///
/// Separated from `GameSession` so the state machine can be driven directly
/// with a fixed deal and any `HitTester`.
#[derive(Debug, Clone, Default)]
pub struct PuzzleCore {
    pub pieces: PieceRegistry,
    pub slots: SlotBoard,
    pub completion: CompletionSet,
    pub drag: DragState,
}

impl PuzzleCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Lifecycle ---

    /// Deal a new round in `order`, discarding any drag in progress.
    pub fn reset(&mut self, order: Vec<PieceId>) -> Vec<Action> {
        if let Some(aborted) = self.drag.take() {
            debug!(piece = %aborted.piece, "drag discarded by reset");
        }
        self.completion.clear();
        self.slots.clear();
        self.pieces = PieceRegistry::dealt(order.clone());
        vec![Action::Staged { order }]
    }

    /// Roll back the active drag, if any, as if it had been dropped nowhere.
    pub fn abort(&mut self) -> Vec<Action> {
        match self.drag.take() {
            Some(session) => {
                debug!(piece = %session.piece, x = session.last.x, y = session.last.y, "drag aborted");
                self.rollback(session)
            }
            None => Vec::new(),
        }
    }

    // --- Input ---

    /// Feed one input event through the state machine.
    pub fn on_input<H: HitTester + ?Sized>(&mut self, event: InputEvent, hits: &H) -> Vec<Action> {
        match event {
            InputEvent::Start { source, piece, at } => self.on_start(source, piece, at),
            InputEvent::Move { source, at } => self.on_move(source, at, hits),
            InputEvent::End { source, at } => self.on_end(source, at, hits),
            InputEvent::Cancel { source } => self.on_cancel(source),
        }
    }

    fn on_start(&mut self, source: InputSource, piece: PieceId, at: Point) -> Vec<Action> {
        if let Some(active) = self.drag.session() {
            debug!(%piece, active = %active.piece, ?source, "start ignored: drag already active");
            return Vec::new();
        }
        let origin = match self.pieces.lift(piece) {
            Ok(origin) => origin,
            Err(e) => {
                debug!(%piece, error = %e, "start ignored");
                return Vec::new();
            }
        };
        debug!(%piece, ?source, x = at.x, y = at.y, "drag started");
        self.drag = DragState::Dragging(DragSession { piece, origin, source, last: at, candidate: None });
        vec![Action::Lifted { piece, at }]
    }

    fn on_move<H: HitTester + ?Sized>(&mut self, source: InputSource, at: Point, hits: &H) -> Vec<Action> {
        let DragState::Dragging(session) = &mut self.drag else {
            return Vec::new();
        };
        if session.source != source {
            return Vec::new();
        }
        session.last = at;
        let mut actions = vec![Action::Moved { piece: session.piece, at }];

        let candidate = hits.slot_at(at);
        if candidate != session.candidate {
            if let Some(slot) = session.candidate {
                actions.push(Action::CandidateLeft { slot });
            }
            if let Some(slot) = candidate {
                actions.push(Action::CandidateEntered { slot });
            }
            session.candidate = candidate;
        }
        actions
    }

    fn on_end<H: HitTester + ?Sized>(&mut self, source: InputSource, at: Point, hits: &H) -> Vec<Action> {
        if self.drag.session().is_none_or(|s| s.source != source) {
            return Vec::new();
        }
        let Some(session) = self.drag.take() else {
            return Vec::new();
        };

        let mut actions = Vec::new();
        if let Some(slot) = session.candidate {
            actions.push(Action::CandidateLeft { slot });
        }

        let target = hits.slot_at(at);
        let verdict = target.map_or(Verdict::Reject(Rejection::NoSlot), |slot| {
            validate(session.piece, slot, self.slots.is_occupied(slot))
        });
        match (target, verdict) {
            (Some(slot), Verdict::Accept) => actions.extend(self.accept(session, slot)),
            _ => {
                debug!(piece = %session.piece, slot = ?target.map(SlotId::get), ?verdict, "drop rejected");
                actions.extend(self.rollback(session));
            }
        }
        actions
    }

    fn on_cancel(&mut self, source: InputSource) -> Vec<Action> {
        if self.drag.session().is_none_or(|s| s.source != source) {
            return Vec::new();
        }
        let Some(session) = self.drag.take() else {
            return Vec::new();
        };
        debug!(piece = %session.piece, ?source, x = session.last.x, y = session.last.y, "drag cancelled");
        let mut actions = Vec::new();
        if let Some(slot) = session.candidate {
            actions.push(Action::CandidateLeft { slot });
        }
        actions.extend(self.rollback(session));
        actions
    }

    fn accept(&mut self, session: DragSession, slot: SlotId) -> Vec<Action> {
        let piece = session.piece;
        // Bind before occupying: rollback restores the piece but never frees a slot.
        if let Err(e) = self.pieces.bind(piece, slot) {
            warn!(%piece, %slot, error = %e, "accepted drop could not bind piece");
            return self.rollback(session);
        }
        if let Err(e) = self.slots.occupy(slot, piece) {
            warn!(%piece, %slot, error = %e, "accepted drop could not occupy slot");
            return self.rollback(session);
        }
        let placed = self.completion.record_placement(piece);
        info!(%piece, %slot, placed, total = PIECE_COUNT, "piece placed");

        let mut actions = vec![Action::Settled { piece, slot }, Action::Placed { piece, placed }];
        if self.completion.is_complete() {
            info!("puzzle complete");
            actions.push(Action::Completed);
        }
        actions
    }

    fn rollback(&mut self, session: DragSession) -> Vec<Action> {
        self.pieces.restore(session.piece, session.origin);
        vec![Action::Returned { piece: session.piece, origin: session.origin }]
    }

    // --- Queries ---

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// The piece being dragged, if any.
    #[must_use]
    pub fn dragged(&self) -> Option<PieceId> {
        self.drag.session().map(|s| s.piece)
    }

    /// The slot under the dragged piece, if any.
    #[must_use]
    pub fn candidate(&self) -> Option<SlotId> {
        self.drag.session().and_then(|s| s.candidate)
    }

    #[must_use]
    pub fn location(&self, piece: PieceId) -> Option<Location> {
        self.pieces.location(piece)
    }

    #[must_use]
    pub fn placed(&self) -> usize {
        self.completion.len()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.completion.is_complete()
    }
}
