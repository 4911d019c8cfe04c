//! Plays rounds headlessly with scripted drags.
//!
//! For each piece, in dealt order, the player first makes the configured
//! number of rejected drops (alternating between a wrong slot and a point off
//! the board) and then drops it on its home slot. The input device for each
//! drag comes from the configured `InputMode`.

use puzzle::consts::PIECE_COUNT;
use puzzle::error::{FeedbackError, PuzzleError};
use puzzle::geom::Point;
use puzzle::hit::GridLayout;
use puzzle::input::{InputEvent, InputSource};
use puzzle::piece::{Location, PieceId, SlotId};
use puzzle::session::{FeedbackSink, GameSession, RoundId, Surface};
use serde::Serialize;
use tracing::{info, warn};

use crate::config::{Config, InputMode};
use crate::feedback::{Chime, WinBanner};
use crate::surface::LogSurface;

#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error(transparent)]
    Feedback(#[from] FeedbackError),
    #[error(transparent)]
    Puzzle(#[from] PuzzleError),
    #[error("round {0} did not complete")]
    Incomplete(RoundId),
}

/// Outcome of one autoplayed round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundReport {
    pub round: RoundId,
    pub drags: usize,
    pub rejected: usize,
    pub placed: usize,
    pub complete: bool,
}

type NativeSession = GameSession<GridLayout, LogSurface, (Chime, WinBanner)>;

/// Play `config.rounds` rounds on one session, waiting for the win banner
/// after each.
pub async fn run(config: &Config, seed: u64) -> Result<Vec<RoundReport>, RunError> {
    let feedback = (Chime::new()?, WinBanner::new(config.win_delay)?);
    let mut session: NativeSession = GameSession::new(seed, GridLayout::default(), LogSurface::default(), feedback);
    info!(seed, rounds = config.rounds, input = ?config.input, "autoplay starting");

    let mut reports = Vec::new();
    for n in 0..config.rounds {
        if n > 0 {
            session.reset();
        }
        let report = play_round(&mut session, config.input, config.misdrops);
        if !report.complete {
            return Err(RunError::Incomplete(report.round));
        }
        session.feedback_mut().1.wait().await;
        info!(snapshot = %session.snapshot().to_json()?, "round finished");
        reports.push(report);
    }

    let (_, surface, (chime, _)) = session.teardown();
    info!(rendered = surface.rendered(), sounds = chime.played().len(), "session closed");
    Ok(reports)
}

/// Drag every staged piece home, with `misdrops` rejected attempts first.
pub fn play_round<S, F>(session: &mut GameSession<GridLayout, S, F>, mode: InputMode, misdrops: u32) -> RoundReport
where
    S: Surface,
    F: FeedbackSink,
{
    let order = session.snapshot().staged;
    let mut report =
        RoundReport { round: session.round(), drags: 0, rejected: 0, placed: 0, complete: false };

    for (index, piece) in order.into_iter().enumerate() {
        let from = session.hits().staging_point(index);
        for attempt in 0..misdrops {
            let to = if attempt % 2 == 0 {
                session.hits().slot_center(neighbour(piece.home()))
            } else {
                session.hits().off_board_point()
            };
            let source = mode.source_for(report.drags);
            drag(session, source, piece, from, to);
            report.drags += 1;
            if session.core().location(piece) == Some(Location::Staging) {
                report.rejected += 1;
            } else {
                warn!(%piece, "misdrop was accepted");
            }
        }

        let home = session.hits().home_point(piece);
        let source = mode.source_for(report.drags);
        drag(session, source, piece, from, home);
        report.drags += 1;
        if session.core().location(piece) == Some(Location::Slot(piece.home())) {
            report.placed += 1;
        } else {
            warn!(%piece, "drop on home slot was rejected");
        }
    }

    report.complete = session.core().is_complete();
    info!(
        round = %report.round,
        drags = report.drags,
        rejected = report.rejected,
        placed = report.placed,
        "round played"
    );
    report
}

fn drag<S, F>(session: &mut GameSession<GridLayout, S, F>, source: InputSource, piece: PieceId, from: Point, to: Point)
where
    S: Surface,
    F: FeedbackSink,
{
    let midway = Point::new((from.x + to.x) / 2.0, (from.y + to.y) / 2.0);
    session.handle(InputEvent::Start { source, piece, at: from });
    session.handle(InputEvent::Move { source, at: midway });
    session.handle(InputEvent::Move { source, at: to });
    session.handle(InputEvent::End { source, at: to });
}

/// The next slot, wrapping from the last to the first.
fn neighbour(slot: SlotId) -> SlotId {
    SlotId::new(slot.get() % PIECE_COUNT + 1).unwrap_or(slot)
}

#[cfg(test)]
#[path = "autoplay_test.rs"]
mod tests;
