//! Logs every action instead of drawing it.

use puzzle::engine::Action;
use puzzle::error::SurfaceError;
use puzzle::session::Surface;
use tracing::debug;

#[derive(Debug, Default)]
pub struct LogSurface {
    rendered: usize,
}

impl LogSurface {
    #[must_use]
    pub fn rendered(&self) -> usize {
        self.rendered
    }
}

impl Surface for LogSurface {
    fn render(&mut self, action: &Action) -> Result<(), SurfaceError> {
        self.rendered += 1;
        match action {
            Action::Staged { order } => {
                debug!(order = ?order.iter().map(|p| p.get()).collect::<Vec<_>>(), "staged");
            }
            Action::Lifted { piece, at } => debug!(%piece, x = at.x, y = at.y, "lifted"),
            Action::Moved { piece, at } => debug!(%piece, x = at.x, y = at.y, "moved"),
            Action::CandidateEntered { slot } => debug!(%slot, "highlight on"),
            Action::CandidateLeft { slot } => debug!(%slot, "highlight off"),
            Action::Returned { piece, origin } => debug!(%piece, ?origin, "returned"),
            Action::Settled { piece, slot } => debug!(%piece, %slot, "settled"),
            Action::Placed { piece, placed } => debug!(%piece, placed, "placed"),
            Action::Completed => debug!("completed"),
        }
        Ok(())
    }
}
