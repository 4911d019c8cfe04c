//! Browser bindings.
//!
//! `WebGame` is the handle the page script holds. The script wires mouse and
//! touch listeners on the piece elements and the document to the methods
//! below, reading the piece id from the element's `data-pieza` attribute and
//! passing client coordinates. Everything else (hit-testing, moving nodes,
//! sounds, the victory banner) happens in Rust.
//!
//! Piece nodes are created with `draggable = false`, so the browser never
//! starts an HTML5 drag of its own: drags begin at `pointer_down` or
//! `touch_start`, and `pointer_up` always arrives. Touch listeners must be
//! registered non-passive and call `preventDefault` so the page does not
//! scroll under the finger.

pub mod audio;
pub mod dom;

pub use audio::{AudioFeedback, Music, WinBanner};
pub use dom::{DomHitTester, DomSurface};

use wasm_bindgen::prelude::*;
use web_sys::Document;

use crate::consts::DEFAULT_WIN_DELAY_MS;
use crate::geom::Point;
use crate::input::{InputEvent, InputSource};
use crate::piece::PieceId;
use crate::session::GameSession;

/// Id of the staging container.
pub const STAGING_ID: &str = "contenedor-piezas";

/// Id of the victory message.
pub const MESSAGE_ID: &str = "mensaje";

/// Id of the music toggle button.
pub const MUSIC_BUTTON_ID: &str = "boton-musica";

type WebSession = GameSession<DomHitTester, DomSurface, (AudioFeedback, WinBanner)>;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        tracing::warn!(error = %e, "console logger already installed");
    }
}

fn to_js<E: std::fmt::Display>(e: E) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn document() -> Result<Document, JsValue> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn random_seed() -> u64 {
    (js_sys::Math::random() * 9_007_199_254_740_992.0) as u64
}

/// The puzzle as seen from the page script.
#[wasm_bindgen]
pub struct WebGame {
    session: WebSession,
    music: Music,
}

#[wasm_bindgen]
impl WebGame {
    /// Bind to the page and deal the first round.
    ///
    /// `win_delay_ms` defaults to 300.
    #[wasm_bindgen(constructor)]
    pub fn new(win_delay_ms: Option<u32>) -> Result<WebGame, JsValue> {
        let document = document()?;
        let delay = win_delay_ms.unwrap_or_else(|| u32::try_from(DEFAULT_WIN_DELAY_MS).unwrap_or(u32::MAX));

        let hits = DomHitTester::new(document.clone());
        let surface = DomSurface::from_document(&document).map_err(to_js)?;
        let audio = AudioFeedback::new().map_err(to_js)?;
        let banner = WinBanner::from_document(&document, delay).map_err(to_js)?;
        let music = Music::new(document.get_element_by_id(MUSIC_BUTTON_ID)).map_err(to_js)?;

        let session = GameSession::new(random_seed(), hits, surface, (audio, banner));
        tracing::info!(round = %session.round(), "treasure map ready");
        Ok(Self { session, music })
    }

    // --- Mouse ---

    pub fn pointer_down(&mut self, piece: u8, x: f64, y: f64) {
        self.start(InputSource::Pointer, piece, x, y);
    }

    pub fn pointer_move(&mut self, x: f64, y: f64) {
        self.session.handle(InputEvent::Move { source: InputSource::Pointer, at: Point::new(x, y) });
    }

    pub fn pointer_up(&mut self, x: f64, y: f64) {
        self.session.handle(InputEvent::End { source: InputSource::Pointer, at: Point::new(x, y) });
    }

    // --- Touch ---

    pub fn touch_start(&mut self, piece: u8, x: f64, y: f64) {
        self.start(InputSource::Touch, piece, x, y);
    }

    pub fn touch_move(&mut self, x: f64, y: f64) {
        self.session.handle(InputEvent::Move { source: InputSource::Touch, at: Point::new(x, y) });
    }

    pub fn touch_end(&mut self, x: f64, y: f64) {
        self.session.handle(InputEvent::End { source: InputSource::Touch, at: Point::new(x, y) });
    }

    pub fn touch_cancel(&mut self) {
        self.session.handle(InputEvent::Cancel { source: InputSource::Touch });
    }

    /// Escape key: drop the dragged piece back where it came from.
    pub fn cancel_pointer(&mut self) {
        self.session.handle(InputEvent::Cancel { source: InputSource::Pointer });
    }

    // --- Controls ---

    /// Restart button.
    pub fn restart(&mut self) {
        self.session.reset();
    }

    /// Music button. Returns whether music was playing before the toggle.
    pub fn toggle_music(&mut self) -> Result<bool, JsValue> {
        let was_playing = self.music.is_playing();
        self.music.toggle().map_err(to_js)?;
        Ok(was_playing)
    }

    // --- Queries ---

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.session.core().is_complete()
    }

    #[must_use]
    pub fn placed(&self) -> usize {
        self.session.core().placed()
    }

    pub fn snapshot_json(&self) -> Result<String, JsValue> {
        self.session.snapshot().to_json().map_err(to_js)
    }

    fn start(&mut self, source: InputSource, piece: u8, x: f64, y: f64) {
        match PieceId::new(piece) {
            Ok(piece) => self.session.handle(InputEvent::Start { source, piece, at: Point::new(x, y) }),
            Err(e) => tracing::debug!(error = %e, "start on unknown piece ignored"),
        }
    }
}
