//! Sounds, background music and the victory banner.

use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::{Document, Element, HtmlAudioElement};

use super::MESSAGE_ID;
use crate::consts::{SHOW_CLASS, SFX_VOLUME, UNLOCK_DURATION_MS, UNLOCK_VOLUME};
use crate::error::FeedbackError;
use crate::input::InputSource;
use crate::piece::PieceId;
use crate::session::FeedbackSink;

const SPLAT_SRC: &str = "sounds/splat.mp3";
const CLAPS_SRC: &str = "sounds/claps.mp3";
const MUSIC_SRC: &str = "sounds/music.mp3";

const MUSIC_ON_CLASS: &str = "music-on";
const MUSIC_OFF_CLASS: &str = "music-off";

fn describe(e: &JsValue) -> String {
    e.as_string().unwrap_or_else(|| format!("{e:?}"))
}

fn load(src: &str) -> Result<HtmlAudioElement, FeedbackError> {
    let audio = HtmlAudioElement::new_with_src(src)
        .map_err(|e| FeedbackError::Unavailable(format!("{src}: {}", describe(&e))))?;
    audio.set_volume(SFX_VOLUME);
    Ok(audio)
}

/// Rewind and start a clip. The returned promise resolves in the background.
fn play(audio: &HtmlAudioElement, name: &'static str) -> Result<(), FeedbackError> {
    audio.set_current_time(0.0);
    let promise = audio.play().map_err(|e| FeedbackError::Playback(describe(&e)))?;
    spawn_local(async move {
        match JsFuture::from(promise).await {
            Ok(_) => tracing::trace!(sound = name, "played"),
            Err(e) => tracing::debug!(sound = name, error = %describe(&e), "playback rejected"),
        }
    });
    Ok(())
}

// =============================================================
// Sound effects
// =============================================================

/// Splat on every placement, applause on completion.
pub struct AudioFeedback {
    splat: HtmlAudioElement,
    claps: HtmlAudioElement,
    unlocked: bool,
}

impl AudioFeedback {
    /// # Errors
    ///
    /// Returns [`FeedbackError::Unavailable`] if an audio element cannot be created.
    pub fn new() -> Result<Self, FeedbackError> {
        Ok(Self { splat: load(SPLAT_SRC)?, claps: load(CLAPS_SRC)?, unlocked: false })
    }

    /// Mobile browsers only allow playback after a gesture has played something.
    /// Play the splat almost silently for a moment, then restore it.
    fn unlock(&mut self) -> Result<(), FeedbackError> {
        if self.unlocked {
            return Ok(());
        }
        self.unlocked = true;

        let audio = self.splat.clone();
        audio.set_volume(UNLOCK_VOLUME);
        let promise = audio.play().map_err(|e| FeedbackError::Playback(describe(&e)))?;
        spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                tracing::debug!(error = %describe(&e), "audio unlock rejected");
            }
            TimeoutFuture::new(UNLOCK_DURATION_MS).await;
            if let Err(e) = audio.pause() {
                tracing::debug!(error = %describe(&e), "audio unlock pause failed");
            }
            audio.set_current_time(0.0);
            audio.set_volume(SFX_VOLUME);
            tracing::debug!("audio unlocked");
        });
        Ok(())
    }
}

impl FeedbackSink for AudioFeedback {
    fn on_interaction_start(&mut self, source: InputSource) -> Result<(), FeedbackError> {
        match source {
            InputSource::Touch => self.unlock(),
            InputSource::Pointer => Ok(()),
        }
    }

    fn on_placed(&mut self, _piece: PieceId, _placed: usize) -> Result<(), FeedbackError> {
        play(&self.splat, "splat")
    }

    fn on_completed(&mut self) -> Result<(), FeedbackError> {
        play(&self.claps, "claps")
    }
}

// =============================================================
// Victory banner
// =============================================================

/// Shows the victory message a short delay after the last placement.
pub struct WinBanner {
    message: Element,
    delay_ms: u32,
    pending: Option<Timeout>,
}

impl WinBanner {
    /// # Errors
    ///
    /// Returns [`FeedbackError::Unavailable`] if the message element is missing.
    pub fn from_document(document: &Document, delay_ms: u32) -> Result<Self, FeedbackError> {
        let message = document
            .get_element_by_id(MESSAGE_ID)
            .ok_or_else(|| FeedbackError::Unavailable(format!("#{MESSAGE_ID}")))?;
        Ok(Self { message, delay_ms, pending: None })
    }
}

impl FeedbackSink for WinBanner {
    fn on_reset(&mut self) -> Result<(), FeedbackError> {
        // Dropping a gloo timeout cancels it.
        self.pending = None;
        self.message
            .class_list()
            .remove_1(SHOW_CLASS)
            .map_err(|e| FeedbackError::Display(describe(&e)))
    }

    fn on_placed(&mut self, _piece: PieceId, _placed: usize) -> Result<(), FeedbackError> {
        Ok(())
    }

    fn on_completed(&mut self) -> Result<(), FeedbackError> {
        let message = self.message.clone();
        self.pending = Some(Timeout::new(self.delay_ms, move || {
            if let Err(e) = message.class_list().add_1(SHOW_CLASS) {
                tracing::warn!(error = %describe(&e), "could not show victory message");
            }
        }));
        Ok(())
    }
}

// =============================================================
// Background music
// =============================================================

/// Looping background track behind a toggle button.
pub struct Music {
    track: HtmlAudioElement,
    playing: Rc<Cell<bool>>,
    button: Option<Element>,
}

impl Music {
    /// # Errors
    ///
    /// Returns [`FeedbackError::Unavailable`] if the audio element cannot be created.
    pub fn new(button: Option<Element>) -> Result<Self, FeedbackError> {
        let track = load(MUSIC_SRC)?;
        track.set_loop(true);
        label(button.as_ref(), false);
        Ok(Self { track, playing: Rc::new(Cell::new(false)), button })
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.playing.get()
    }

    /// Pause when playing, otherwise start. The playing flag and button only
    /// flip to "on" once the browser accepts playback.
    ///
    /// # Errors
    ///
    /// Returns [`FeedbackError::Playback`] if the browser refuses synchronously.
    pub fn toggle(&mut self) -> Result<(), FeedbackError> {
        if self.playing.get() {
            self.track.pause().map_err(|e| FeedbackError::Playback(describe(&e)))?;
            self.playing.set(false);
            label(self.button.as_ref(), false);
            return Ok(());
        }

        let promise = self.track.play().map_err(|e| FeedbackError::Playback(describe(&e)))?;
        let playing = Rc::clone(&self.playing);
        let button = self.button.clone();
        spawn_local(async move {
            match JsFuture::from(promise).await {
                Ok(_) => {
                    playing.set(true);
                    label(button.as_ref(), true);
                }
                Err(e) => tracing::debug!(error = %describe(&e), "music playback rejected"),
            }
        });
        Ok(())
    }
}

fn label(button: Option<&Element>, on: bool) {
    let Some(button) = button else { return };
    let (text, add, remove) = if on {
        ("Música ON", MUSIC_ON_CLASS, MUSIC_OFF_CLASS)
    } else {
        ("Música OFF", MUSIC_OFF_CLASS, MUSIC_ON_CLASS)
    };
    button.set_inner_html(&format!("<i class=\"fa-solid fa-music\"></i> {text}"));
    let classes = button.class_list();
    if let Err(e) = classes.remove_1(remove).and_then(|()| classes.add_1(add)) {
        tracing::debug!(error = %describe(&e), "music button class update failed");
    }
}
