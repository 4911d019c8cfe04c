//! Native feedback: logged sounds and a timed victory banner.
//!
//! Both sinks run their side effects on the tokio runtime they were created
//! on and never block the session.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use puzzle::consts::{SFX_VOLUME, UNLOCK_DURATION_MS, UNLOCK_VOLUME};
use puzzle::error::FeedbackError;
use puzzle::input::InputSource;
use puzzle::piece::PieceId;
use puzzle::session::FeedbackSink;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

fn runtime() -> Result<Handle, FeedbackError> {
    Handle::try_current().map_err(|e| FeedbackError::Unavailable(e.to_string()))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sound {
    Unlock,
    Splat,
    Claps,
}

// =============================================================================
// CHIME
// =============================================================================

/// Stands in for the speaker: each sound is logged from a spawned task.
pub struct Chime {
    runtime: Handle,
    played: Vec<Sound>,
    unlocked: bool,
}

impl Chime {
    pub fn new() -> Result<Self, FeedbackError> {
        Ok(Self { runtime: runtime()?, played: Vec::new(), unlocked: false })
    }

    /// Sounds started so far, in order.
    #[must_use]
    pub fn played(&self) -> &[Sound] {
        &self.played
    }

    fn play(&mut self, sound: Sound, volume: f64) {
        self.played.push(sound);
        self.runtime.spawn(async move {
            info!(?sound, volume, "sound");
        });
    }
}

impl FeedbackSink for Chime {
    fn on_interaction_start(&mut self, source: InputSource) -> Result<(), FeedbackError> {
        if source != InputSource::Touch || self.unlocked {
            return Ok(());
        }
        self.unlocked = true;
        self.played.push(Sound::Unlock);
        self.runtime.spawn(async move {
            debug!(volume = UNLOCK_VOLUME, "unlocking audio");
            tokio::time::sleep(Duration::from_millis(u64::from(UNLOCK_DURATION_MS))).await;
            debug!("audio unlocked");
        });
        Ok(())
    }

    fn on_placed(&mut self, _piece: PieceId, _placed: usize) -> Result<(), FeedbackError> {
        self.play(Sound::Splat, SFX_VOLUME);
        Ok(())
    }

    fn on_completed(&mut self) -> Result<(), FeedbackError> {
        self.play(Sound::Claps, SFX_VOLUME);
        Ok(())
    }
}

// =============================================================================
// WIN BANNER
// =============================================================================

/// Announces the win after a delay. A reset before the delay elapses cancels it.
pub struct WinBanner {
    runtime: Handle,
    delay: Duration,
    shown: Arc<AtomicBool>,
    pending: Option<JoinHandle<()>>,
}

impl WinBanner {
    pub fn new(delay: Duration) -> Result<Self, FeedbackError> {
        Ok(Self { runtime: runtime()?, delay, shown: Arc::new(AtomicBool::new(false)), pending: None })
    }

    #[must_use]
    pub fn is_shown(&self) -> bool {
        self.shown.load(Ordering::Acquire)
    }

    /// Wait for a pending reveal to finish. Returns at once when none is pending.
    pub async fn wait(&mut self) {
        let Some(task) = self.pending.take() else {
            return;
        };
        if let Err(e) = task.await {
            if !e.is_cancelled() {
                warn!(error = %e, "win banner task failed");
            }
        }
    }

    fn cancel(&mut self) {
        if let Some(task) = self.pending.take() {
            task.abort();
        }
    }
}

impl FeedbackSink for WinBanner {
    fn on_reset(&mut self) -> Result<(), FeedbackError> {
        self.cancel();
        self.shown.store(false, Ordering::Release);
        Ok(())
    }

    fn on_placed(&mut self, _piece: PieceId, _placed: usize) -> Result<(), FeedbackError> {
        Ok(())
    }

    fn on_completed(&mut self) -> Result<(), FeedbackError> {
        self.cancel();
        let shown = Arc::clone(&self.shown);
        let delay = self.delay;
        self.pending = Some(self.runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            shown.store(true, Ordering::Release);
            info!("¡Felicidades! Has completado el mapa del tesoro");
        }));
        Ok(())
    }
}

impl Drop for WinBanner {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
#[path = "feedback_test.rs"]
mod tests;
