//! How a piece is drawn in the page, and reading ids back from it.
//!
//! Pure data so the browser surface and native tests agree on it.

#[cfg(test)]
#[path = "markup_test.rs"]
mod markup_test;

use crate::consts::FALLBACK_CLASS;
use crate::error::PuzzleError;
use crate::piece::PieceId;

/// Parse the numeric id carried in a `data-pieza` attribute.
pub fn parse_id(raw: &str) -> Result<u8, PuzzleError> {
    raw.trim()
        .parse::<u8>()
        .map_err(|e| PuzzleError::InvalidId(format!("{raw:?}: {e}")))
}

/// Attributes and content of one piece node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceMarkup {
    /// Value of the `data-pieza` attribute.
    pub id: String,
    pub image_src: String,
    pub alt: String,
    /// Replaces the image when it fails to load.
    pub fallback_html: String,
}

impl PieceMarkup {
    /// Native HTML drag stays off. A browser-started drag swallows the
    /// mouse-up that ends ours.
    pub const DRAGGABLE: bool = false;

    #[must_use]
    pub fn for_piece(piece: PieceId) -> Self {
        Self {
            id: piece.to_string(),
            image_src: format!("images/mapa_trozo_{:02}.png", piece.get()),
            alt: format!("Trozo {piece}"),
            fallback_html: format!("<span class=\"{FALLBACK_CLASS}\">{piece}</span>"),
        }
    }
}
