//! Shared constants for the puzzle crate.

// ── Board ───────────────────────────────────────────────────────

/// Number of pieces, and of slots. Piece and slot ids run from 1 to this value.
pub const PIECE_COUNT: u8 = 8;

/// Columns in the slot grid (two rows of four).
pub const GRID_COLUMNS: u8 = 4;

// ── Layout (native `GridLayout` defaults, CSS pixels) ───────────

/// Edge length of one grid cell.
pub const CELL_SIZE_PX: f64 = 100.0;

/// Padding between a cell's border and the piece image it holds.
pub const CELL_INSET_PX: f64 = 8.0;

/// Vertical gap between the bottom of the grid and the staging area.
pub const STAGING_GAP_PX: f64 = 40.0;

// ── Feedback ────────────────────────────────────────────────────

/// Delay between the final placement and the victory banner appearing.
pub const DEFAULT_WIN_DELAY_MS: u64 = 300;

/// Playback volume for sound effects and music.
pub const SFX_VOLUME: f64 = 0.3;

/// Volume used while priming audio on the first touch.
pub const UNLOCK_VOLUME: f64 = 0.01;

/// How long the priming sound plays before it is paused again.
pub const UNLOCK_DURATION_MS: u32 = 50;

// ── DOM ─────────────────────────────────────────────────────────

/// Class of a grid cell element; `data-pieza` holds its slot id.
pub const SLOT_CLASS: &str = "celda-rejilla";

/// Class of a draggable piece element; `data-pieza` holds its piece id.
pub const PIECE_CLASS: &str = "pieza-puzzle";

/// Data attribute carrying piece and slot ids.
pub const ID_ATTRIBUTE: &str = "data-pieza";

/// Class added to a cell once it holds its piece.
pub const CORRECT_CLASS: &str = "correct";

/// Class added to the cell under a dragged piece.
pub const CANDIDATE_CLASS: &str = "candidate";

/// Class of the number shown when a piece image fails to load.
pub const FALLBACK_CLASS: &str = "pieza-numero";

/// Class that reveals the victory message.
pub const SHOW_CLASS: &str = "show";

/// Stacking order of a piece while it is being dragged.
pub const DRAG_Z_INDEX: &str = "1000";
