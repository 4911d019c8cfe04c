//! Game session: one puzzle, its collaborators, and its lifecycle.
//!
//! DESIGN
//! ======
//! `GameSession` owns the `PuzzleCore`, the RNG used for dealing, and the
//! three collaborators: a `HitTester`, a `Surface` that draws, and a
//! `FeedbackSink` for sounds and the win banner. Input goes in through
//! `handle`; every action the core returns is rendered, and the signal
//! actions are forwarded to feedback. Collaborator failures are logged and
//! dropped: the core's state is authoritative and a missing sound or a DOM
//! hiccup never changes the game.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::engine::{Action, PuzzleCore};
use crate::error::{FeedbackError, PuzzleError, SurfaceError};
use crate::hit::HitTester;
use crate::input::{InputEvent, InputSource};
use crate::piece::{PieceId, SlotId};
use crate::shuffle::shuffle;

// =============================================================================
// COLLABORATORS
// =============================================================================

/// Draws the puzzle. Receives every action the core emits, in order.
pub trait Surface {
    fn render(&mut self, action: &Action) -> Result<(), SurfaceError>;
}

/// One-way notifications for sounds and the win banner.
///
/// The session never waits on these and never inspects more than the error,
/// which it logs.
pub trait FeedbackSink {
    /// A piece was placed; `placed` pieces are now in.
    fn on_placed(&mut self, piece: PieceId, placed: usize) -> Result<(), FeedbackError>;

    /// The last piece was placed.
    fn on_completed(&mut self) -> Result<(), FeedbackError>;

    /// A new round was dealt. Hide anything shown for the previous one.
    fn on_reset(&mut self) -> Result<(), FeedbackError> {
        Ok(())
    }

    /// An interaction started. Used to unlock audio on the first touch.
    fn on_interaction_start(&mut self, _source: InputSource) -> Result<(), FeedbackError> {
        Ok(())
    }
}

impl Surface for () {
    fn render(&mut self, _action: &Action) -> Result<(), SurfaceError> {
        Ok(())
    }
}

/// Records every action. Handy for hosts that batch, and for tests.
impl Surface for Vec<Action> {
    fn render(&mut self, action: &Action) -> Result<(), SurfaceError> {
        self.push(action.clone());
        Ok(())
    }
}

impl FeedbackSink for () {
    fn on_placed(&mut self, _piece: PieceId, _placed: usize) -> Result<(), FeedbackError> {
        Ok(())
    }

    fn on_completed(&mut self) -> Result<(), FeedbackError> {
        Ok(())
    }
}

/// Fan out to both sinks. Both are always called; the first error wins.
impl<A: FeedbackSink, B: FeedbackSink> FeedbackSink for (A, B) {
    fn on_placed(&mut self, piece: PieceId, placed: usize) -> Result<(), FeedbackError> {
        let a = self.0.on_placed(piece, placed);
        let b = self.1.on_placed(piece, placed);
        a.and(b)
    }

    fn on_completed(&mut self) -> Result<(), FeedbackError> {
        let a = self.0.on_completed();
        let b = self.1.on_completed();
        a.and(b)
    }

    fn on_reset(&mut self) -> Result<(), FeedbackError> {
        let a = self.0.on_reset();
        let b = self.1.on_reset();
        a.and(b)
    }

    fn on_interaction_start(&mut self, source: InputSource) -> Result<(), FeedbackError> {
        let a = self.0.on_interaction_start(source);
        let b = self.1.on_interaction_start(source);
        a.and(b)
    }
}

// =============================================================================
// ROUND / SNAPSHOT
// =============================================================================

/// Identifies one dealt round. A fresh id is drawn on every reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoundId(Uuid);

impl RoundId {
    fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self(uuid::Builder::from_random_bytes(rng.random()).into_uuid())
    }

    #[must_use]
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for RoundId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Serializable view of a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub round: RoundId,
    /// Pieces still in staging, in dealt order.
    pub staged: Vec<PieceId>,
    /// Occupant of each slot; index 0 is slot 1.
    pub slots: Vec<Option<PieceId>>,
    /// Placed pieces in placement order.
    pub placed: Vec<PieceId>,
    /// Piece being dragged, if any.
    pub dragging: Option<PieceId>,
    pub complete: bool,
}

impl Snapshot {
    pub fn to_json(&self) -> Result<String, PuzzleError> {
        serde_json::to_string(self).map_err(|e| PuzzleError::Snapshot(e.to_string()))
    }

    /// Occupant of one slot.
    #[must_use]
    pub fn occupant(&self, slot: SlotId) -> Option<PieceId> {
        self.slots.get(slot.index()).copied().flatten()
    }
}

// =============================================================================
// SESSION
// =============================================================================

/// A running puzzle wired to its collaborators.
pub struct GameSession<H, S, F> {
    core: PuzzleCore,
    rng: StdRng,
    round: RoundId,
    hits: H,
    surface: S,
    feedback: F,
}

impl<H: HitTester, S: Surface, F: FeedbackSink> GameSession<H, S, F> {
    /// Create a session and deal the first round.
    ///
    /// `seed` drives both the deal and round ids, so equal seeds replay equally.
    pub fn new(seed: u64, hits: H, surface: S, feedback: F) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let round = RoundId::generate(&mut rng);
        let mut session = Self { core: PuzzleCore::new(), rng, round, hits, surface, feedback };
        session.deal();
        session
    }

    /// Start over: new shuffled deal, empty slots, no progress, win banner hidden.
    ///
    /// Safe mid-drag; the drag is discarded.
    pub fn reset(&mut self) {
        self.round = RoundId::generate(&mut self.rng);
        self.deal();
    }

    fn deal(&mut self) {
        let pieces: Vec<PieceId> = PieceId::all().collect();
        let order = shuffle(&pieces, &mut self.rng);
        info!(round = %self.round, order = ?order.iter().map(|p| p.get()).collect::<Vec<_>>(), "round dealt");
        let actions = self.core.reset(order);
        if let Err(e) = self.feedback.on_reset() {
            warn!(error = %e, "feedback reset failed");
        }
        self.dispatch(actions);
    }

    /// Feed one input event through the drag controller.
    pub fn handle(&mut self, event: InputEvent) {
        if let InputEvent::Start { source, .. } = event {
            if let Err(e) = self.feedback.on_interaction_start(source) {
                warn!(error = %e, ?source, "feedback interaction-start failed");
            }
        }
        let actions = self.core.on_input(event, &self.hits);
        self.dispatch(actions);
    }

    /// Roll back any drag in progress and hand the collaborators back.
    pub fn teardown(mut self) -> (H, S, F) {
        let actions = self.core.abort();
        self.dispatch(actions);
        debug!(round = %self.round, "session torn down");
        (self.hits, self.surface, self.feedback)
    }

    fn dispatch(&mut self, actions: Vec<Action>) {
        for action in &actions {
            if let Err(e) = self.surface.render(action) {
                warn!(error = %e, ?action, "surface render failed");
            }
            let signal = match *action {
                Action::Placed { piece, placed } => self.feedback.on_placed(piece, placed),
                Action::Completed => self.feedback.on_completed(),
                _ => Ok(()),
            };
            if let Err(e) = signal {
                warn!(error = %e, ?action, "feedback failed");
            }
        }
    }

    // --- Queries ---

    #[must_use]
    pub fn core(&self) -> &PuzzleCore {
        &self.core
    }

    #[must_use]
    pub fn round(&self) -> RoundId {
        self.round
    }

    #[must_use]
    pub fn hits(&self) -> &H {
        &self.hits
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    #[must_use]
    pub fn feedback(&self) -> &F {
        &self.feedback
    }

    pub fn feedback_mut(&mut self) -> &mut F {
        &mut self.feedback
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            round: self.round,
            staged: self.core.pieces.staged().collect(),
            slots: self.core.slots.occupants().to_vec(),
            placed: self.core.completion.iter().collect(),
            dragging: self.core.dragged(),
            complete: self.core.is_complete(),
        }
    }
}
