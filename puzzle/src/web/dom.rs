//! DOM-backed hit-testing and rendering.

use std::collections::BTreeMap;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CssStyleDeclaration, Document, Element, HtmlElement};

use super::STAGING_ID;
use crate::consts::{
    CANDIDATE_CLASS, CORRECT_CLASS, DRAG_Z_INDEX, ID_ATTRIBUTE, PIECE_CLASS, PIECE_COUNT, SLOT_CLASS,
};
use crate::engine::Action;
use crate::error::SurfaceError;
use crate::geom::{Point, Size, centered_origin};
use crate::hit::HitTester;
use crate::markup::{PieceMarkup, parse_id};
use crate::piece::{PieceId, SlotId};
use crate::session::Surface;

/// Inline style properties set while a piece follows the input.
const DRAG_PROPERTIES: [&str; 9] = [
    "position",
    "left",
    "top",
    "width",
    "height",
    "z-index",
    "margin",
    "transform",
    "pointer-events",
];

fn dom_err(e: JsValue) -> SurfaceError {
    SurfaceError::Dom(e.as_string().unwrap_or_else(|| format!("{e:?}")))
}

fn read_id(el: &Element) -> Option<u8> {
    let raw = el.get_attribute(ID_ATTRIBUTE)?;
    match parse_id(&raw) {
        Ok(n) => Some(n),
        Err(e) => {
            tracing::debug!(error = %e, "element carries an unreadable id");
            None
        }
    }
}

fn px(value: f64) -> String {
    format!("{value}px")
}

// =============================================================
// Hit-testing
// =============================================================

/// Resolves drop points with `elementFromPoint` and `closest`.
pub struct DomHitTester {
    document: Document,
}

impl DomHitTester {
    #[must_use]
    pub fn new(document: Document) -> Self {
        Self { document }
    }
}

impl HitTester for DomHitTester {
    type Handle = Element;

    #[allow(clippy::cast_possible_truncation)]
    fn topmost_element_at(&self, at: Point) -> Option<Element> {
        self.document.element_from_point(at.x as f32, at.y as f32)
    }

    fn nearest_enclosing_slot(&self, element: &Element) -> Option<SlotId> {
        let cell = match element.closest(&format!(".{SLOT_CLASS}")) {
            Ok(cell) => cell?,
            Err(e) => {
                tracing::debug!(error = ?e, "closest() failed");
                return None;
            }
        };
        match SlotId::new(read_id(&cell)?) {
            Ok(slot) => Some(slot),
            Err(e) => {
                tracing::debug!(error = %e, "cell carries an invalid slot id");
                None
            }
        }
    }
}

// =============================================================
// Rendering
// =============================================================

/// Applies controller actions to the staging container and grid cells.
pub struct DomSurface {
    document: Document,
    staging: Element,
    cells: Vec<Element>,
    pieces: BTreeMap<PieceId, HtmlElement>,
    /// Image `onerror` handlers of the current deal; dropped on the next one.
    fallbacks: Vec<Closure<dyn FnMut()>>,
}

impl DomSurface {
    /// Locate the staging container and the eight grid cells.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::MissingElement`] when any of them is absent.
    pub fn from_document(document: &Document) -> Result<Self, SurfaceError> {
        let staging = document
            .get_element_by_id(STAGING_ID)
            .ok_or_else(|| SurfaceError::MissingElement(format!("#{STAGING_ID}")))?;

        let mut cells = Vec::with_capacity(usize::from(PIECE_COUNT));
        for slot in SlotId::all() {
            let selector = format!(".{SLOT_CLASS}[{ID_ATTRIBUTE}=\"{slot}\"]");
            let cell = document
                .query_selector(&selector)
                .map_err(dom_err)?
                .ok_or(SurfaceError::MissingElement(selector))?;
            cells.push(cell);
        }

        Ok(Self {
            document: document.clone(),
            staging,
            cells,
            pieces: BTreeMap::new(),
            fallbacks: Vec::new(),
        })
    }

    fn cell(&self, slot: SlotId) -> Result<&Element, SurfaceError> {
        self.cells
            .get(slot.index())
            .ok_or_else(|| SurfaceError::MissingElement(format!("cell {slot}")))
    }

    fn piece(&self, piece: PieceId) -> Result<&HtmlElement, SurfaceError> {
        self.pieces
            .get(&piece)
            .ok_or_else(|| SurfaceError::MissingElement(format!("piece {piece}")))
    }

    fn stage(&mut self, order: &[PieceId]) -> Result<(), SurfaceError> {
        for node in self.pieces.values() {
            node.remove();
        }
        self.pieces.clear();
        self.fallbacks.clear();
        self.staging.set_inner_html("");
        for cell in &self.cells {
            cell.set_inner_html("");
            cell.class_list()
                .remove_2(CORRECT_CLASS, CANDIDATE_CLASS)
                .map_err(dom_err)?;
        }

        for &piece in order {
            let node = self.create_piece(piece)?;
            self.staging.append_child(&node).map_err(dom_err)?;
            self.pieces.insert(piece, node);
        }
        Ok(())
    }

    fn create_piece(&mut self, piece: PieceId) -> Result<HtmlElement, SurfaceError> {
        let markup = PieceMarkup::for_piece(piece);
        let node = self.create_html("div")?;
        node.set_class_name(PIECE_CLASS);
        node.set_attribute(ID_ATTRIBUTE, &markup.id).map_err(dom_err)?;
        node.set_draggable(PieceMarkup::DRAGGABLE);

        let img = self.create_html("img")?;
        img.set_attribute("src", &markup.image_src).map_err(dom_err)?;
        img.set_attribute("alt", &markup.alt).map_err(dom_err)?;

        let target = node.clone();
        let fallback = markup.fallback_html;
        let on_error = Closure::<dyn FnMut()>::new(move || {
            tracing::warn!(html = %fallback, "piece image failed to load");
            target.set_inner_html(&fallback);
        });
        img.set_onerror(Some(on_error.as_ref().unchecked_ref()));
        self.fallbacks.push(on_error);

        node.append_child(&img).map_err(dom_err)?;
        Ok(node)
    }

    fn create_html(&self, tag: &str) -> Result<HtmlElement, SurfaceError> {
        self.document
            .create_element(tag)
            .map_err(dom_err)?
            .dyn_into()
            .map_err(|_| SurfaceError::Dom(format!("<{tag}> is not an HtmlElement")))
    }

    fn lift(&self, piece: PieceId, at: Point) -> Result<(), SurfaceError> {
        let node = self.piece(piece)?;
        let rect = node.get_bounding_client_rect();
        let size = Size::new(rect.width(), rect.height());

        let style = node.style();
        set(&style, "position", "fixed")?;
        set(&style, "width", &px(size.width))?;
        set(&style, "height", &px(size.height))?;
        set(&style, "z-index", DRAG_Z_INDEX)?;
        set(&style, "margin", "0")?;
        set(&style, "transform", "translate3d(0,0,0)")?;
        set(&style, "pointer-events", "none")?;

        let body = self
            .document
            .body()
            .ok_or_else(|| SurfaceError::MissingElement("body".into()))?;
        body.append_child(node).map_err(dom_err)?;
        follow(node, at, size)
    }

    fn drag_to(&self, piece: PieceId, at: Point) -> Result<(), SurfaceError> {
        let node = self.piece(piece)?;
        let size = Size::new(f64::from(node.offset_width()), f64::from(node.offset_height()));
        follow(node, at, size)
    }

    fn return_to_staging(&self, piece: PieceId) -> Result<(), SurfaceError> {
        let node = self.piece(piece)?;
        clear_drag_style(&node.style())?;
        self.staging.append_child(node).map_err(dom_err)?;
        Ok(())
    }

    fn settle(&self, piece: PieceId, slot: SlotId) -> Result<(), SurfaceError> {
        let node = self.piece(piece)?;
        let cell = self.cell(slot)?;

        let style = node.style();
        clear_drag_style(&style)?;
        set(&style, "position", "absolute")?;
        set(&style, "left", "0")?;
        set(&style, "top", "0")?;

        cell.append_child(node).map_err(dom_err)?;
        cell.class_list().add_1(CORRECT_CLASS).map_err(dom_err)?;
        Ok(())
    }

    fn highlight(&self, slot: SlotId, on: bool) -> Result<(), SurfaceError> {
        let classes = self.cell(slot)?.class_list();
        if on {
            classes.add_1(CANDIDATE_CLASS).map_err(dom_err)
        } else {
            classes.remove_1(CANDIDATE_CLASS).map_err(dom_err)
        }
    }
}

impl Surface for DomSurface {
    fn render(&mut self, action: &Action) -> Result<(), SurfaceError> {
        match action {
            Action::Staged { order } => self.stage(order),
            Action::Lifted { piece, at } => self.lift(*piece, *at),
            Action::Moved { piece, at } => self.drag_to(*piece, *at),
            Action::CandidateEntered { slot } => self.highlight(*slot, true),
            Action::CandidateLeft { slot } => self.highlight(*slot, false),
            Action::Returned { piece, .. } => self.return_to_staging(*piece),
            Action::Settled { piece, slot } => self.settle(*piece, *slot),
            Action::Placed { .. } | Action::Completed => Ok(()),
        }
    }
}

fn set(style: &CssStyleDeclaration, property: &str, value: &str) -> Result<(), SurfaceError> {
    style.set_property(property, value).map_err(dom_err)
}

fn follow(node: &HtmlElement, at: Point, size: Size) -> Result<(), SurfaceError> {
    let origin = centered_origin(at, size);
    let style = node.style();
    set(&style, "left", &px(origin.x))?;
    set(&style, "top", &px(origin.y))
}

fn clear_drag_style(style: &CssStyleDeclaration) -> Result<(), SurfaceError> {
    for property in DRAG_PROPERTIES {
        style.remove_property(property).map_err(dom_err)?;
    }
    Ok(())
}
