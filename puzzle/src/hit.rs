//! Coordinate hit-testing.
//!
//! Pointer and touch drops are both resolved by asking what is drawn at the
//! drop coordinate and walking up from that element to an enclosing slot.
//! Native drag-and-drop targets are never consulted, so both input streams
//! behave the same.

#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::consts::{CELL_INSET_PX, CELL_SIZE_PX, GRID_COLUMNS, PIECE_COUNT, STAGING_GAP_PX};
use crate::geom::{Point, Rect};
use crate::piece::{PieceId, SlotId};

/// Capability to resolve a coordinate to a slot.
///
/// The dragged piece itself must not be reported by `topmost_element_at`;
/// surfaces make floating pieces transparent to hit-testing.
pub trait HitTester {
    /// Opaque handle to whatever is drawn at a coordinate.
    type Handle;

    /// Topmost element at `at`, if anything is drawn there.
    fn topmost_element_at(&self, at: Point) -> Option<Self::Handle>;

    /// The slot containing `handle`, walking up through its ancestors.
    fn nearest_enclosing_slot(&self, handle: &Self::Handle) -> Option<SlotId>;

    /// Slot under `at`, if any.
    fn slot_at(&self, at: Point) -> Option<SlotId> {
        self.topmost_element_at(at)
            .and_then(|handle| self.nearest_enclosing_slot(&handle))
    }
}

impl<T: HitTester + ?Sized> HitTester for &T {
    type Handle = T::Handle;

    fn topmost_element_at(&self, at: Point) -> Option<Self::Handle> {
        (**self).topmost_element_at(at)
    }

    fn nearest_enclosing_slot(&self, handle: &Self::Handle) -> Option<SlotId> {
        (**self).nearest_enclosing_slot(handle)
    }
}

/// What `GridLayout` finds at a coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Element {
    /// The border of a grid cell.
    Cell(SlotId),
    /// The content box of a grid cell, where a placed piece is drawn.
    CellContent(SlotId),
    /// The staging area background.
    Staging,
}

/// Geometric board layout: a grid of square cells with the staging strip
/// below it.
///
/// Slot `n` sits at column `(n - 1) % columns`, row `(n - 1) / columns`.
/// Staging position `i` is the `i`-th cell-sized box of the strip.
#[derive(Debug, Clone, PartialEq)]
pub struct GridLayout {
    origin: Point,
    cell: f64,
    inset: f64,
    columns: u8,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self { origin: Point::default(), cell: CELL_SIZE_PX, inset: CELL_INSET_PX, columns: GRID_COLUMNS }
    }
}

impl GridLayout {
    /// Layout with the grid's top-left corner at `origin`.
    ///
    /// `columns` is clamped to at least 1.
    #[must_use]
    pub fn new(origin: Point, cell: f64, inset: f64, columns: u8) -> Self {
        Self { origin, cell, inset, columns: columns.max(1) }
    }

    fn rows(&self) -> u8 {
        PIECE_COUNT.div_ceil(self.columns)
    }

    /// Bounding box of a slot's cell.
    #[must_use]
    pub fn slot_rect(&self, slot: SlotId) -> Rect {
        let index = slot.get() - 1;
        let col = f64::from(index % self.columns);
        let row = f64::from(index / self.columns);
        Rect::new(self.origin.x + col * self.cell, self.origin.y + row * self.cell, self.cell, self.cell)
    }

    #[must_use]
    pub fn slot_center(&self, slot: SlotId) -> Point {
        self.slot_rect(slot).center()
    }

    /// The staging strip below the grid.
    #[must_use]
    pub fn staging_rect(&self) -> Rect {
        let top = self.origin.y + f64::from(self.rows()) * self.cell + STAGING_GAP_PX;
        Rect::new(self.origin.x, top, f64::from(PIECE_COUNT) * self.cell, self.cell)
    }

    /// Centre of the `index`-th staging position.
    #[must_use]
    pub fn staging_point(&self, index: usize) -> Point {
        let strip = self.staging_rect();
        #[allow(clippy::cast_precision_loss)]
        let offset = index as f64 * self.cell;
        Point::new(strip.x + offset + self.cell / 2.0, strip.y + self.cell / 2.0)
    }

    /// A coordinate outside the grid and the staging strip.
    #[must_use]
    pub fn off_board_point(&self) -> Point {
        Point::new(self.origin.x - self.cell, self.origin.y - self.cell)
    }

    /// Where the piece would be dropped to land in its home slot.
    #[must_use]
    pub fn home_point(&self, piece: PieceId) -> Point {
        self.slot_center(piece.home())
    }
}

impl HitTester for GridLayout {
    type Handle = Element;

    fn topmost_element_at(&self, at: Point) -> Option<Element> {
        for slot in SlotId::all() {
            let cell = self.slot_rect(slot);
            if cell.contains(at) {
                let content = cell.inset(self.inset);
                return Some(if content.contains(at) { Element::CellContent(slot) } else { Element::Cell(slot) });
            }
        }
        self.staging_rect().contains(at).then_some(Element::Staging)
    }

    fn nearest_enclosing_slot(&self, handle: &Element) -> Option<SlotId> {
        match *handle {
            Element::Cell(slot) | Element::CellContent(slot) => Some(slot),
            Element::Staging => None,
        }
    }
}
